use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use vismath_core::{InputEvent, ModeDispatcher};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub dispatcher: Rc<RefCell<ModeDispatcher>>,
}

/// Forwards canvas pointer and wheel events to the active mode. Moves and
/// releases are observed on the window so drags survive leaving the canvas.
pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown
    {
        let dispatcher = w.dispatcher.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let sample = input::pointer_sample(&ev, &canvas);
            dispatcher
                .borrow_mut()
                .handle_input(&InputEvent::PointerDown(sample));
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let dispatcher = w.dispatcher.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let sample = input::pointer_sample(&ev, &canvas);
            dispatcher
                .borrow_mut()
                .handle_input(&InputEvent::PointerMove(sample));
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup / pointercancel
    {
        let dispatcher = w.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            dispatcher.borrow_mut().handle_input(&InputEvent::PointerUp);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            for name in ["pointerup", "pointercancel"] {
                let _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }
        }
        closure.forget();
    }

    // wheel
    {
        let dispatcher = w.dispatcher.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let event = input::wheel_event(&ev, &canvas);
            dispatcher.borrow_mut().handle_input(&event);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
