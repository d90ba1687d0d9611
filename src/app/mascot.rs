//! The fox mascot: an emoji face with a speech bubble overlay.
//!
//! Messages auto-hide after four seconds; the deadline is checked from the
//! frame tick rather than a timer so module teardown implicitly cancels it.

use super::{document, now_ms};

const BUBBLE_STYLE: &str = "background:#ffffff; border-radius:16px; padding:6px 14px; \
    box-shadow:0 4px 14px rgba(0,0,0,0.12); max-width:230px; margin:0 auto 6px auto; \
    font-size:15px; font-weight:600; color:#1e293b;";

const MESSAGE_MS: f64 = 4_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Excited,
    Thinking,
    Celebrating,
}

impl Emotion {
    fn class(self) -> &'static str {
        match self {
            Emotion::Happy => "mf-float",
            Emotion::Excited => "mf-bounce",
            Emotion::Thinking => "mf-wiggle",
            Emotion::Celebrating => "mf-pop",
        }
    }
}

#[derive(Default)]
pub struct MascotState {
    hide_at: Option<f64>,
}

/// Show `message` in the bubble, switch the face animation, and schedule the
/// bubble to hide.
pub fn say(mascot: &mut MascotState, message: &str, emotion: Emotion) {
    mascot.hide_at = Some(now_ms() + MESSAGE_MS);
    if let Some(doc) = document() {
        if let Some(bubble) = doc.get_element_by_id("mf-bubble") {
            bubble.set_text_content(Some(message));
            bubble
                .set_attribute("style", &format!("{BUBBLE_STYLE} display:block;"))
                .ok();
        }
        if let Some(face) = doc.get_element_by_id("mf-face") {
            face.set_class_name(emotion.class());
        }
    }
}

pub fn tick(mascot: &mut MascotState, now: f64) {
    if let Some(at) = mascot.hide_at {
        if now >= at {
            mascot.hide_at = None;
            if let Some(doc) = document() {
                if let Some(bubble) = doc.get_element_by_id("mf-bubble") {
                    bubble
                        .set_attribute("style", &format!("{BUBBLE_STYLE} display:none;"))
                        .ok();
                }
                if let Some(face) = doc.get_element_by_id("mf-face") {
                    face.set_class_name(Emotion::Happy.class());
                }
            }
        }
    }
}

pub fn initial_bubble_style() -> String {
    format!("{BUBBLE_STYLE} display:none;")
}
