use vismath_core::{VisionError, VisionResult, VisionSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub const READY_TIMEOUT_SECS: u32 = 10;
const TIMEOUT_SENTINEL: &str = "__vismath_ready_timeout__";

/// Hand tracking backed by a JavaScript detector object exposing `detect()`,
/// which returns the landmarker result for the newest video frame or
/// `null` when nothing new is available.
pub struct JsVisionSource {
    detector: JsValue,
    detect_fn: Option<js_sys::Function>,
    malformed_frames: u32,
}

impl JsVisionSource {
    pub fn new(detector: JsValue) -> Self {
        Self {
            detector,
            detect_fn: None,
            malformed_frames: 0,
        }
    }
}

impl VisionSource for JsVisionSource {
    fn initialize(&mut self) -> Result<(), VisionError> {
        if self.detector.is_null() || self.detector.is_undefined() {
            return Err(VisionError::Unavailable("no detector supplied".into()));
        }
        let detect = js_sys::Reflect::get(&self.detector, &JsValue::from_str("detect"))
            .map_err(|e| VisionError::Unavailable(format!("{:?}", e)))?;
        let detect = detect
            .dyn_into::<js_sys::Function>()
            .map_err(|_| VisionError::Unavailable("detector.detect is not a function".into()))?;
        self.detect_fn = Some(detect);
        log::info!("[vision] detector ready");
        Ok(())
    }

    fn detect(&mut self) -> Option<VisionResult> {
        let detect = self.detect_fn.as_ref()?;
        let raw = match detect.call0(&self.detector) {
            Ok(v) if !v.is_null() && !v.is_undefined() => v,
            Ok(_) => return None,
            Err(e) => {
                log::warn!("[vision] detect failed: {:?}", e);
                return None;
            }
        };
        let json = js_sys::JSON::stringify(&raw).ok()?.as_string()?;
        match VisionResult::from_json(&json) {
            Ok(result) => Some(result),
            Err(e) => {
                self.malformed_frames += 1;
                if self.malformed_frames == 1 || self.malformed_frames % 300 == 0 {
                    log::warn!("[vision] {} ({} frames so far)", e, self.malformed_frames);
                }
                None
            }
        }
    }
}

/// Waits for the detector's optional `ready` promise, giving up after
/// `seconds`.
pub async fn wait_until_ready(detector: &JsValue, seconds: u32) -> Result<(), VisionError> {
    let ready = js_sys::Reflect::get(detector, &JsValue::from_str("ready")).unwrap_or(JsValue::UNDEFINED);
    let Ok(ready) = ready.dyn_into::<js_sys::Promise>() else {
        return Ok(());
    };

    let window = web::window().ok_or_else(|| VisionError::Unavailable("no window".into()))?;
    let timeout = js_sys::Promise::new(&mut |resolve, _reject| {
        let fire = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_SENTINEL));
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref(),
            (seconds * 1000) as i32,
        );
    });

    let race = js_sys::Promise::race(&js_sys::Array::of2(&ready, &timeout));
    match JsFuture::from(race).await {
        Ok(v) if v.as_string().as_deref() == Some(TIMEOUT_SENTINEL) => {
            Err(VisionError::Timeout { seconds })
        }
        Ok(_) => Ok(()),
        Err(e) => Err(VisionError::Unavailable(format!("{:?}", e))),
    }
}
