pub mod buttons;
pub mod navigation;

pub use buttons::{wire_sound_toggle, wire_start_gate, SharedSound};
pub use navigation::{wire_anchor_links, wire_resize};
