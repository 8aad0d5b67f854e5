use vismath_core::input::{CanvasRect, InputEvent, PointerSample};
use web_sys as web;

/// `WheelEvent.deltaMode` values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Pixels per wheel "line", matching what browsers report in pixel mode.
pub const WHEEL_LINE_PX: f64 = 16.0;

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

#[inline]
pub fn pointer_sample(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> PointerSample {
    PointerSample::new(ev.client_x() as f64, ev.client_y() as f64, canvas_rect(canvas))
}

/// Normalizes a wheel delta to pixels so zoom speed does not depend on the
/// device's delta mode. `page_px` is the height of one page.
pub fn wheel_delta_pixels(delta_y: f64, delta_mode: u32, page_px: f64) -> f64 {
    if !delta_y.is_finite() {
        return 0.0;
    }
    match delta_mode {
        DOM_DELTA_LINE => delta_y * WHEEL_LINE_PX,
        DOM_DELTA_PAGE => delta_y * page_px.max(1.0),
        _ => delta_y,
    }
}

#[inline]
pub fn wheel_event(ev: &web::WheelEvent, canvas: &web::HtmlCanvasElement) -> InputEvent {
    let page_px = canvas.get_bounding_client_rect().height();
    InputEvent::Wheel {
        delta_y: wheel_delta_pixels(ev.delta_y(), ev.delta_mode(), page_px),
    }
}
