use crate::controller::Gate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn fade_out(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("pointer-events", "none");
}

/// Detach `el` from the document after `delay_ms`, then mark the gate removed.
pub fn remove_after(el: web::HtmlElement, gate: Rc<RefCell<Gate>>, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let closure: Closure<dyn FnMut()> = Closure::once(move || {
        el.remove();
        let mut gate = gate.borrow_mut();
        gate.finish();
        log::info!("[gate] {:?}", gate.state());
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("[gate] setTimeout error: {:?}", e);
    }
    closure.forget();
}
