use crate::canvas::CanvasSurface;
use crate::vision::JsVisionSource;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use vismath_core::{run_frame, ModeDispatcher};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Counts frames and reports the rate every few seconds.
pub struct FpsCounter {
    since: Instant,
    frames: u32,
    delivered: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
            delivered: 0,
        }
    }

    pub fn tick(&mut self, delivered: bool) {
        self.frames += 1;
        self.delivered += delivered as u32;
        let elapsed = self.since.elapsed();
        if elapsed >= FPS_LOG_INTERVAL {
            let secs = elapsed.as_secs_f64();
            log::debug!(
                "[frame] {:.1} fps, {:.1} detections/s",
                self.frames as f64 / secs,
                self.delivered as f64 / secs
            );
            *self = Self::new();
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext {
    pub dispatcher: Rc<RefCell<ModeDispatcher>>,
    pub source: JsVisionSource,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub fps: FpsCounter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let rect = self.canvas.get_bounding_client_rect();
        self.surface.begin_frame(dpr);
        let delivered = run_frame(
            &mut self.dispatcher.borrow_mut(),
            &mut self.source,
            &mut self.surface,
            rect.width(),
            rect.height(),
        );
        self.fps.tick(delivered);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
