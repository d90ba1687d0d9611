//! Tone playback through the Web Audio API.
//!
//! The only failure mode in the whole game: the audio context may be missing
//! or blocked by an autoplay policy. Every entry point here swallows errors,
//! so sound never halts interaction. Note sequences are scheduled on the
//! audio clock instead of with timers.

use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// C5, E5, G5 arpeggio for a correct answer.
const SUCCESS_NOTES: [f32; 3] = [523.0, 659.0, 784.0];
/// Ascending C-major scale for the celebration burst.
const CELEBRATION_NOTES: [f32; 8] = [523.0, 587.0, 659.0, 698.0, 784.0, 880.0, 988.0, 1047.0];

thread_local! {
    static AUDIO: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

fn with_context<F>(f: F)
where
    F: FnOnce(&AudioContext) -> Result<(), JsValue>,
{
    AUDIO.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = AudioContext::new().ok();
        }
        if let Some(ctx) = slot.as_ref() {
            let _ = f(ctx);
        }
    });
}

fn schedule_tone(
    ctx: &AudioContext,
    freq: f32,
    offset_s: f64,
    duration_s: f64,
    wave: OscillatorType,
) -> Result<(), JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.set_type(wave);
    osc.frequency().set_value(freq);

    let t0 = ctx.current_time() + offset_s;
    gain.gain().set_value_at_time(0.3, t0)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t0 + duration_s)?;
    osc.start_with_when(t0)?;
    osc.stop_with_when(t0 + duration_s)?;
    Ok(())
}

pub fn play_click() {
    with_context(|ctx| schedule_tone(ctx, 800.0, 0.0, 0.1, OscillatorType::Sine));
}

pub fn play_wrong() {
    with_context(|ctx| schedule_tone(ctx, 200.0, 0.0, 0.3, OscillatorType::Triangle));
}

pub fn play_success() {
    with_context(|ctx| {
        for (i, freq) in SUCCESS_NOTES.iter().enumerate() {
            schedule_tone(ctx, *freq, i as f64 * 0.1, 0.2, OscillatorType::Sine)?;
        }
        Ok(())
    });
}

pub fn play_celebration() {
    with_context(|ctx| {
        for (i, freq) in CELEBRATION_NOTES.iter().enumerate() {
            schedule_tone(ctx, *freq, i as f64 * 0.08, 0.15, OscillatorType::Sine)?;
        }
        Ok(())
    });
}
