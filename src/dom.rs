use crate::constants::MAX_PIXEL_RATIO;
use crate::story;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("missing #{element_id}; click handler not wired");
        return false;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

/// Viewport size in CSS pixels, never below 1x1.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w.max(1.0), h.max(1.0))
}

#[inline]
pub fn pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

/// Size the canvas to the viewport: CSS size in CSS pixels, backing store
/// scaled by the (capped) device pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, window: &web::Window) -> (f64, f64) {
    let (w, h) = viewport_size(window);
    let dpr = pixel_ratio(window);
    canvas.set_width(((w * dpr) as u32).max(1));
    canvas.set_height(((h * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{w}px"));
    _ = style.set_property("height", &format!("{h}px"));
    (w, h)
}

/// Current scroll progress of the story container.
pub fn scroll_progress(el: &web::Element) -> f32 {
    story::scroll_progress(
        el.scroll_top() as f32,
        el.scroll_height() as f32,
        el.client_height() as f32,
    )
}

pub fn set_current_year(document: &web::Document, element_id: &str) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
        None => log::warn!("missing #{element_id}; year not shown"),
    }
}
