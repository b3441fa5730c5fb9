use crate::camera::OrbitCamera;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Drag to orbit, wheel to zoom.
pub fn wire_orbit_controls(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().press(pos, ev.pointer_id());
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let delta = w.pointer.borrow_mut().drag_to(pos);
        if let Some(d) = delta {
            let h = w.canvas.height() as f32;
            w.camera.borrow_mut().rotate(d.x, d.y, h);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let id = {
            let mut p = w.pointer.borrow_mut();
            p.release();
            p.pointer_id
        };
        _ = w.canvas.release_pointer_capture(id);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    for kind in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        w.camera.borrow_mut().zoom(delta);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so prevent_default can stop page scrolling.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
