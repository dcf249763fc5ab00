use super::SharedSound;
use crate::camera::Camera;
use crate::constants::ANCHOR_SELECTOR;
use crate::controller::fragment_target;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas and camera in step with the viewport.
///
/// The GPU surface follows on the next frame, when the render loop sees the
/// new backing size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<Camera>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::size_canvas(&canvas, &window);
        camera.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Smooth-scroll same-page `#fragment` links, with a cue.
///
/// Links whose target does not exist keep the browser's default behavior.
pub fn wire_anchor_links(document: &web::Document, sound: SharedSound) {
    let links = match document.query_selector_all(ANCHOR_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("anchor query failed: {:?}", e);
            return;
        }
    };
    let mut wired = 0;
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let sound = sound.clone();
        let anchor = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_target(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            sound.borrow_mut().beep();
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::info!("[nav] wired {} anchor links", wired);
}
