#![cfg(target_arch = "wasm32")]
//! Browser front-end: binds the vismath modes to a `<canvas>`, pointer
//! events, a JavaScript hand-landmarker and a `requestAnimationFrame` loop.

mod canvas;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod ui;
mod vision;

use std::cell::RefCell;
use std::rc::Rc;
use vismath_core::{GestureConfig, ModeDispatcher, VisionSource};
use wasm_bindgen::prelude::*;
use web_sys as web;

const CANVAS_ID: &str = "overlay-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vismath-web starting");
    Ok(())
}

/// Starts the app once the page has a hand detector. `detector` must expose
/// `detect()` and may expose a `ready` promise.
#[wasm_bindgen]
pub async fn launch(detector: JsValue) -> Result<(), JsValue> {
    match init(detector).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_error(&document, &format!("{}", e));
            }
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

async fn init(detector: JsValue) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    vision::wait_until_ready(&detector, vision::READY_TIMEOUT_SECS).await?;
    let mut source = vision::JsVisionSource::new(detector);
    source.initialize()?;

    dom::wire_canvas_resize(&canvas);

    let dispatcher = Rc::new(RefCell::new(ModeDispatcher::new(GestureConfig::default())));
    dispatcher.borrow_mut().select_mode(0);
    ui::build_mode_menu(&document, dispatcher.clone())?;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        dispatcher: dispatcher.clone(),
    });

    overlay::hide(&document);

    let ctx = frame::FrameContext {
        dispatcher,
        source,
        surface,
        canvas,
        fps: frame::FpsCounter::new(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    log::info!("[init] frame loop running");
    Ok(())
}
