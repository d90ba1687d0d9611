//! Number tracing gameplay.
//!
//! The child drags over the canvas to trace a glyph guide. Progress is a
//! simple movement counter (2 points per pointer sample, capped at 100);
//! releasing at 70 or more counts as a completed trace. Coordinates are kept
//! in the 200 x 240 glyph design space, offset into the canvas for drawing.

use super::mascot::{self, Emotion};
use super::{AppState, document, pop_in, set_el_style, sound};
use crate::glyphs::{GlyphDesc, NUMBER_GLYPHS};

/// Top-left of the glyph design space on the module canvas.
const GLYPH_OFFSET: (f64, f64) = (80.0, 80.0);
const GUIDE_DOT_SPACING: f64 = 14.0;
const COMPLETE_THRESHOLD: f64 = 70.0;

const PROGRESS_FILL_BASE: &str =
    "height:100%; border-radius:6px; transition:width 0.2s;";
const SELECTOR_BASE: &str = "font-family:inherit; width:44px; height:44px; border:none; \
    border-radius:12px; font-size:17px; font-weight:700; cursor:pointer;";

pub struct TracingState {
    pub current: usize,
    pub completed: [bool; 11],
    tracing: bool,
    traced: Vec<(f64, f64)>,
    progress: f64,
    celebrate_at: Option<f64>,
    celebrated: bool,
    /// When the current number was selected; basis for the emoji bounce-in.
    shown_at: f64,
}

impl TracingState {
    pub fn new(now: f64) -> Self {
        Self {
            current: 0,
            completed: [false; 11],
            tracing: false,
            traced: Vec::new(),
            progress: 0.0,
            celebrate_at: None,
            celebrated: false,
            shown_at: now,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|c| **c).count()
    }

    fn glyph(&self) -> &'static GlyphDesc {
        &NUMBER_GLYPHS[self.current]
    }

    fn clear_trace(&mut self) {
        self.tracing = false;
        self.traced.clear();
        self.progress = 0.0;
        self.celebrate_at = None;
        self.celebrated = false;
    }
}

// --- Pointer handling --------------------------------------------------------

pub fn handle_press(app: &mut AppState, canvas_x: f64, canvas_y: f64, _now: f64) {
    sound::play_click();
    let t = &mut app.tracing;
    t.tracing = true;
    t.traced.clear();
    t.traced
        .push((canvas_x - GLYPH_OFFSET.0, canvas_y - GLYPH_OFFSET.1));
    mascot::say(&mut app.mascot, "Great! Keep going!", Emotion::Excited);
}

pub fn handle_move(app: &mut AppState, canvas_x: f64, canvas_y: f64) {
    let t = &mut app.tracing;
    if !t.tracing {
        return;
    }
    t.traced
        .push((canvas_x - GLYPH_OFFSET.0, canvas_y - GLYPH_OFFSET.1));
    t.progress = (t.progress + 2.0).min(100.0);
}

pub fn handle_release(app: &mut AppState, now: f64) {
    let t = &mut app.tracing;
    if !t.tracing {
        return;
    }
    t.tracing = false;
    if t.progress >= COMPLETE_THRESHOLD && !t.celebrated {
        sound::play_success();
        t.celebrate_at = Some(now + 300.0);
    } else if t.progress > 20.0 {
        mascot::say(&mut app.mascot, "Almost! Try again!", Emotion::Thinking);
    }
}

// --- Button handling ---------------------------------------------------------

pub fn select_number(app: &mut AppState, number: usize, now: f64) {
    sound::play_click();
    let t = &mut app.tracing;
    t.current = number % NUMBER_GLYPHS.len();
    t.clear_trace();
    t.shown_at = now;
    mascot::say(&mut app.mascot, "Trace the number!", Emotion::Happy);
    sync_selector(app);
}

pub fn handle_retry(app: &mut AppState, _now: f64) {
    sound::play_click();
    app.tracing.clear_trace();
    mascot::say(&mut app.mascot, "Let's try again!", Emotion::Happy);
}

pub fn handle_next(app: &mut AppState, now: f64) {
    let next = (app.tracing.current + 1) % NUMBER_GLYPHS.len();
    select_number(app, next, now);
}

// --- Frame tick --------------------------------------------------------------

pub fn tick(app: &mut AppState, now: f64) {
    let mut celebrate = false;
    {
        let t = &mut app.tracing;
        if let Some(at) = t.celebrate_at {
            if now >= at {
                t.celebrate_at = None;
                t.celebrated = true;
                t.completed[t.current] = true;
                celebrate = true;
            }
        }
    }
    if celebrate {
        sound::play_celebration();
        super::effects::celebrate(&mut app.effects, &mut app.rng, (50.0, 40.0), now);
        mascot::say(
            &mut app.mascot,
            "Amazing! You did it! \u{1F389}",
            Emotion::Celebrating,
        );
        sync_selector(app);
    }
    sync_progress_bar(app);
}

// --- Canvas rendering --------------------------------------------------------

pub fn render(app: &AppState, now: f64) {
    let t = &app.tracing;
    let glyph = t.glyph();
    let ctx = &app.ctx;
    let w = app.canvas.width() as f64;
    let h = app.canvas.height() as f64;
    let accent = app.active.accent_color();
    let (ox, oy) = GLYPH_OFFSET;

    ctx.set_fill_style_str(app.active.soft_color());
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_fill_style_str("#1e293b");
    ctx.set_font("bold 30px 'Fredoka', 'Comic Sans MS', sans-serif");
    ctx.fill_text(&format!("Number {}", glyph.value), w / 2.0, 34.0)
        .ok();
    ctx.set_fill_style_str("#64748b");
    ctx.set_font("19px 'Nunito', sans-serif");
    ctx.fill_text(glyph.name, w / 2.0, 62.0).ok();

    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    // pale outline beneath the dotted guide
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(16.0);
    for stroke in glyph.strokes {
        stroke_polyline(ctx, stroke, ox, oy);
    }

    ctx.set_fill_style_str(accent);
    for stroke in glyph.strokes {
        dot_polyline(ctx, stroke, ox, oy);
    }

    if t.traced.len() >= 2 {
        ctx.set_global_alpha(0.8);
        ctx.set_stroke_style_str(if t.celebrated { accent } else { "#fb7185" });
        ctx.set_line_width(6.0);
        ctx.begin_path();
        ctx.move_to(t.traced[0].0 + ox, t.traced[0].1 + oy);
        for (x, y) in &t.traced[1..] {
            ctx.line_to(x + ox, y + oy);
        }
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    // pulsing start marker
    if !t.tracing {
        let (sx, sy) = glyph.start_point();
        let (sx, sy) = (f64::from(sx) + ox, f64::from(sy) + oy);
        let pulse = 0.5 + 0.5 * (now / 250.0).sin();
        ctx.set_global_alpha(0.4 + 0.6 * pulse);
        ctx.set_fill_style_str("#f59e0b");
        ctx.begin_path();
        ctx.arc(sx, sy, 8.0, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str("#64748b");
        ctx.set_font("12px 'Nunito', sans-serif");
        ctx.fill_text("Start", sx, sy - 18.0).ok();
    }

    // counting objects under the glyph
    for i in 0..glyph.value as usize {
        if let Some((alpha, scale)) = pop_in(t.shown_at, i, now) {
            let x = 80.0 + (i % 6) as f64 * 40.0;
            let y = 368.0 + (i / 6) as f64 * 38.0;
            ctx.set_global_alpha(alpha);
            ctx.set_font(&format!("{}px serif", (24.0 * scale).max(1.0) as i32));
            ctx.fill_text(glyph.emoji, x, y).ok();
            ctx.set_global_alpha(1.0);
        }
    }
}

fn stroke_polyline(ctx: &web_sys::CanvasRenderingContext2d, stroke: &[(f32, f32)], ox: f64, oy: f64) {
    if stroke.len() < 2 {
        return;
    }
    ctx.begin_path();
    ctx.move_to(f64::from(stroke[0].0) + ox, f64::from(stroke[0].1) + oy);
    for (x, y) in &stroke[1..] {
        ctx.line_to(f64::from(*x) + ox, f64::from(*y) + oy);
    }
    ctx.stroke();
}

/// Hand-rolled dotted guide: a small disc every `GUIDE_DOT_SPACING` px of arc
/// length along the polyline.
fn dot_polyline(ctx: &web_sys::CanvasRenderingContext2d, stroke: &[(f32, f32)], ox: f64, oy: f64) {
    let mut carry = 0.0;
    for pair in stroke.windows(2) {
        let (x0, y0) = (f64::from(pair[0].0), f64::from(pair[0].1));
        let (x1, y1) = (f64::from(pair[1].0), f64::from(pair[1].1));
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f64::EPSILON {
            continue;
        }
        let mut d = carry;
        while d <= len {
            let frac = d / len;
            ctx.begin_path();
            ctx.arc(
                x0 + dx * frac + ox,
                y0 + dy * frac + oy,
                2.5,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
            ctx.fill();
            d += GUIDE_DOT_SPACING;
        }
        carry = d - len;
    }
}

// --- DOM sync ----------------------------------------------------------------

pub fn sync_selector(app: &AppState) {
    let Some(doc) = document() else { return };
    let t = &app.tracing;
    let accent = app.active.accent_color();
    let soft = app.active.soft_color();
    for (i, glyph) in NUMBER_GLYPHS.iter().enumerate() {
        let Some(el) = doc.get_element_by_id(&format!("mf-num-{i}")) else {
            continue;
        };
        let label = if t.completed[i] && i != t.current {
            format!("{} \u{2713}", glyph.value)
        } else {
            glyph.value.to_string()
        };
        el.set_text_content(Some(&label));
        let style = if i == t.current {
            format!("{SELECTOR_BASE} background:{accent}; color:#ffffff; transform:scale(1.1);")
        } else if t.completed[i] {
            format!("{SELECTOR_BASE} background:#dcfce7; color:#16a34a;")
        } else {
            format!("{SELECTOR_BASE} background:#ffffff; color:{accent}; border:2px solid {soft};")
        };
        el.set_attribute("style", &style).ok();
    }
}

fn sync_progress_bar(app: &AppState) {
    let accent = app.active.accent_color();
    set_el_style(
        "mf-progress-fill",
        &format!(
            "{PROGRESS_FILL_BASE} width:{:.0}%; background:{accent};",
            app.tracing.progress
        ),
    );
}
