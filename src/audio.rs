use crate::controller::{Tone, ToneSink};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Web Audio output for the feedback cue.
///
/// The `AudioContext` is created on first use, after a user gesture, so
/// browsers do not start it blocked.
#[derive(Default)]
pub struct WebTone {
    ctx: Option<web::AudioContext>,
}

impl WebTone {
    fn context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created ({} Hz)", ctx.sample_rate());
                    self.ctx = Some(ctx);
                }
                Err(e) => log::error!("AudioContext error: {:?}", e),
            }
        }
        self.ctx.as_ref()
    }
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("cue GainNode error: {:?}", e);
            None
        }
    }
}

impl ToneSink for WebTone {
    // A fresh oscillator/gain pair per cue; both are released once stopped.
    fn play_tone(&mut self, tone: &Tone) {
        let Some(ctx) = self.context() else {
            return;
        };
        let src = match web::OscillatorNode::new(ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("cue OscillatorNode error: {:?}", e);
                return;
            }
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(tone.frequency_hz);
        let Some(gain) = create_gain(ctx, tone.gain) else {
            return;
        };
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        let now = ctx.current_time();
        _ = src.start_with_when(now);
        _ = src.stop_with_when(now + tone.duration_sec);
    }

    fn resume(&mut self) {
        let Some(ctx) = self.context() else {
            return;
        };
        if ctx.state() == web::AudioContextState::Running {
            return;
        }
        match ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] resume error: {:?}", e),
        }
    }
}
