use crate::audio::WebTone;
use crate::constants::{GATE_ID, GATE_REMOVE_DELAY_MS, SOUND_BUTTON_ID, START_BUTTON_ID};
use crate::controller::{Gate, SoundController};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSound = Rc<RefCell<SoundController<WebTone>>>;

fn sync_sound_button(button: &web::Element, sound: &SoundController<WebTone>) {
    _ = button.set_attribute("aria-pressed", sound.aria_pressed());
    button.set_text_content(Some(sound.label()));
}

pub fn wire_sound_toggle(document: &web::Document, sound: SharedSound) {
    let Some(button) = document.get_element_by_id(SOUND_BUTTON_ID) else {
        log::warn!("missing #{SOUND_BUTTON_ID}; sound stays off");
        return;
    };
    dom::add_click_listener(document, SOUND_BUTTON_ID, move || {
        let mut s = sound.borrow_mut();
        let on = s.toggle();
        sync_sound_button(&button, &s);
        log::info!("[sound] on={}", on);
    });
}

pub fn wire_start_gate(document: &web::Document, sound: SharedSound) {
    let Some(gate_el) = document
        .get_element_by_id(GATE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("missing #{GATE_ID}; starting without gate");
        return;
    };
    let gate = Rc::new(RefCell::new(Gate::default()));
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        if !gate.borrow_mut().dismiss() {
            return;
        }
        overlay::fade_out(&gate_el);
        overlay::remove_after(gate_el.clone(), gate.clone(), GATE_REMOVE_DELAY_MS);
        sound.borrow_mut().beep();
        log::info!("[gate] dismissed");
    });
}
