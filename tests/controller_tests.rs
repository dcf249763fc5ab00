// Host-side tests for the sound toggle, feedback cue and start gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controller {
    include!("../src/controller.rs");
}

use controller::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Tone(Tone),
    Resume,
}

/// Records what the controller asked the audio output to do.
#[derive(Clone, Default)]
struct RecordingSink {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl ToneSink for RecordingSink {
    fn play_tone(&mut self, tone: &Tone) {
        self.calls.borrow_mut().push(Call::Tone(*tone));
    }
    fn resume(&mut self) {
        self.calls.borrow_mut().push(Call::Resume);
    }
}

fn make_sound() -> (SoundController<RecordingSink>, Rc<RefCell<Vec<Call>>>) {
    let sink = RecordingSink::default();
    let calls = sink.calls.clone();
    (SoundController::new(sink), calls)
}

#[test]
fn sound_starts_off() {
    let (sound, calls) = make_sound();
    assert!(!sound.is_on());
    assert_eq!(sound.label(), "SOUND: OFF");
    assert_eq!(sound.aria_pressed(), "false");
    assert!(calls.borrow().is_empty());
}

#[test]
fn beep_is_silent_while_sound_is_off() {
    let (mut sound, calls) = make_sound();
    for _ in 0..5 {
        assert!(!sound.beep());
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn enabling_sound_plays_cue_then_resumes_output() {
    let (mut sound, calls) = make_sound();
    assert!(sound.toggle());
    assert_eq!(sound.label(), "SOUND: ON");
    assert_eq!(sound.aria_pressed(), "true");
    assert_eq!(*calls.borrow(), vec![Call::Tone(FEEDBACK_TONE), Call::Resume]);
}

#[test]
fn disabling_sound_schedules_nothing() {
    let (mut sound, calls) = make_sound();
    sound.toggle();
    calls.borrow_mut().clear();
    assert!(!sound.toggle());
    assert!(calls.borrow().is_empty());
    assert!(!sound.beep());
    assert!(calls.borrow().is_empty());
}

#[test]
fn double_toggle_restores_state_and_labels() {
    let (mut sound, _calls) = make_sound();
    let (label, pressed) = (sound.label(), sound.aria_pressed());
    sound.toggle();
    sound.toggle();
    assert!(!sound.is_on());
    assert_eq!(sound.label(), label);
    assert_eq!(sound.aria_pressed(), pressed);

    // parity holds from the "on" state too
    sound.toggle();
    let (label, pressed) = (sound.label(), sound.aria_pressed());
    sound.toggle();
    sound.toggle();
    assert!(sound.is_on());
    assert_eq!(sound.label(), label);
    assert_eq!(sound.aria_pressed(), pressed);
}

#[test]
fn each_beep_schedules_a_fresh_tone() {
    let (mut sound, calls) = make_sound();
    sound.toggle();
    calls.borrow_mut().clear();
    assert!(sound.beep());
    assert!(sound.beep());
    assert_eq!(
        *calls.borrow(),
        vec![Call::Tone(FEEDBACK_TONE), Call::Tone(FEEDBACK_TONE)]
    );
}

#[test]
fn feedback_tone_is_a_short_low_sine() {
    assert_eq!(FEEDBACK_TONE.frequency_hz, 220.0);
    assert!((FEEDBACK_TONE.gain - 0.03).abs() < 1e-6);
    assert!((FEEDBACK_TONE.duration_sec - 0.08).abs() < 1e-9);
}

#[test]
fn gate_fades_then_removes_once() {
    let mut gate = Gate::default();
    assert_eq!(gate.state(), GateState::Visible);
    // removal before the fade is ignored
    assert!(!gate.finish());
    assert_eq!(gate.state(), GateState::Visible);

    assert!(gate.dismiss());
    assert_eq!(gate.state(), GateState::Fading);
    assert!(!gate.dismiss());

    assert!(gate.finish());
    assert_eq!(gate.state(), GateState::Removed);
    assert!(!gate.finish());
    assert!(!gate.dismiss());
    assert_eq!(gate.state(), GateState::Removed);
}

#[test]
fn fragment_targets() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#chapter-2"), Some("chapter-2"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("https://example.com/#x"), None);
}
