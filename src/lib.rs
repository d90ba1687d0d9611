//! Math Fun core crate.
//!
//! Browser mini-games for early math practice: number tracing plus addition
//! and subtraction quizzes with multiple-choice answers. `start_app()` builds
//! the whole page through `web-sys` (DOM scaffold, canvases, tone audio) and
//! drives all animation from a single `requestAnimationFrame` loop. The
//! problem/choice generation and the glyph datasets are pure Rust and also
//! compile natively so they can be tested under plain `cargo test`.

use wasm_bindgen::prelude::*;

pub mod glyphs;
pub mod problem;
pub mod rng;

mod app;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Emoji pool used to visualize quiz operands. Cosmetic only; which emoji a
/// problem gets has no effect on the arithmetic.
pub const OBJECT_EMOJI: &[&str] = &[
    "\u{1F34E}", // 🍎
    "\u{2B50}",  // ⭐
    "\u{1F9F8}", // 🧸
    "\u{1F338}", // 🌸
    "\u{1F388}", // 🎈
    "\u{1F36D}", // 🍭
    "\u{1F98B}", // 🦋
    "\u{1F308}", // 🌈
];

/// Build the page and start the game. Call once from JS after the wasm module
/// loads.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    app::start_app()
}
