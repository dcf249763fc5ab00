// Interaction state behind the DOM handlers: the sound flag, the feedback
// cue and the one-way start gate. Platform audio sits behind `ToneSink`.

use crate::constants::{
    CUE_DURATION_SEC, CUE_FREQUENCY_HZ, CUE_GAIN, SOUND_LABEL_OFF, SOUND_LABEL_ON,
};

/// A short fixed-pitch tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub gain: f32,
    pub duration_sec: f64,
}

pub const FEEDBACK_TONE: Tone = Tone {
    frequency_hz: CUE_FREQUENCY_HZ,
    gain: CUE_GAIN,
    duration_sec: CUE_DURATION_SEC,
};

/// Audio output used by the controller.
pub trait ToneSink {
    /// Schedule `tone` to start now and stop after its duration.
    fn play_tone(&mut self, tone: &Tone);
    /// Make sure the output is running (platforms may start it suspended).
    fn resume(&mut self);
}

pub struct SoundController<S: ToneSink> {
    on: bool,
    sink: S,
}

impl<S: ToneSink> SoundController<S> {
    pub fn new(sink: S) -> Self {
        Self { on: false, sink }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn label(&self) -> &'static str {
        if self.on {
            SOUND_LABEL_ON
        } else {
            SOUND_LABEL_OFF
        }
    }

    /// Value for the toggle button's `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> &'static str {
        if self.on {
            "true"
        } else {
            "false"
        }
    }

    /// Flip the sound flag. Turning it on plays the cue and resumes output.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        if self.on {
            self.beep();
            self.sink.resume();
        }
        self.on
    }

    /// Play the feedback cue; returns whether anything was scheduled.
    pub fn beep(&mut self) -> bool {
        if !self.on {
            return false;
        }
        self.sink.play_tone(&FEEDBACK_TONE);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Visible,
    Fading,
    Removed,
}

/// The entry overlay: `Visible -> Fading -> Removed`, never back.
#[derive(Debug)]
pub struct Gate {
    state: GateState,
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            state: GateState::Visible,
        }
    }
}

impl Gate {
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Begin the fade. Returns false if the gate was already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if self.state != GateState::Visible {
            return false;
        }
        self.state = GateState::Fading;
        true
    }

    /// Called once the fade delay has elapsed.
    pub fn finish(&mut self) -> bool {
        if self.state != GateState::Fading {
            return false;
        }
        self.state = GateState::Removed;
        true
    }
}

/// Fragment target of a same-page link, without the leading `#`.
///
/// Bare `#` and non-fragment hrefs have no target.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}
