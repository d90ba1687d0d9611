//! Arithmetic quiz gameplay, shared by the addition and subtraction tabs.
//!
//! A quiz round walks through a short timed sequence: the operand objects
//! bounce in (subtraction additionally grays out the taken-away objects), the
//! child picks one of four answer buttons, feedback is shown, and a "Next
//! Problem" button appears. All delays are deadlines processed by the frame
//! tick.

use wasm_bindgen::JsCast;
use web_sys::HtmlButtonElement;

use super::mascot::{self, Emotion};
use super::{AppState, Module, document, pop_in, set_el_style, sound};
use crate::problem::{Mode, Problem, generate_choices, generate_problem};
use crate::rng::Rng;

const ANSWER_BASE: &str = "font-family:inherit; font-size:24px; font-weight:700; width:72px; \
    padding:12px 0; border:none; border-radius:14px; cursor:pointer; \
    box-shadow:0 3px 0 rgba(0,0,0,0.12);";

const NEXT_BASE: &str = "font-family:inherit; font-size:18px; font-weight:700; \
    padding:12px 26px; border:none; border-radius:999px; color:#ffffff; cursor:pointer; \
    box-shadow:0 4px 0 rgba(0,0,0,0.15); margin-top:6px;";

pub struct QuizState {
    pub mode: Mode,
    pub problem: Problem,
    pub choices: [u8; 4],
    pub selected: Option<u8>,
    pub score: u32,
    pub attempts: u32,
    // timed reveal sequence
    objects_shown: bool,
    reveal_at: Option<f64>,
    reveal_start: f64,
    removed: bool,
    removal_at: Option<f64>,
    removal_start: f64,
    celebrate_at: Option<f64>,
}

impl QuizState {
    pub fn new(mode: Mode, rng: &mut Rng, now: f64) -> Self {
        let problem = generate_problem(mode, rng);
        let choices = generate_choices(problem.result, rng);
        let mut quiz = Self {
            mode,
            problem,
            choices,
            selected: None,
            score: 0,
            attempts: 0,
            objects_shown: false,
            reveal_at: None,
            reveal_start: 0.0,
            removed: false,
            removal_at: None,
            removal_start: 0.0,
            celebrate_at: None,
        };
        quiz.arm_reveal(now);
        quiz
    }

    fn arm_reveal(&mut self, now: f64) {
        match self.mode {
            Mode::Addition => {
                self.reveal_at = Some(now + 300.0);
                self.removal_at = None;
            }
            Mode::Subtraction => {
                self.reveal_at = Some(now + 500.0);
                self.removal_at = Some(now + 1_300.0);
            }
        }
    }

    fn prompt(&self) -> &'static str {
        match self.mode {
            Mode::Addition => "Count the objects!",
            Mode::Subtraction => "Take some away!",
        }
    }

    fn praise(&self) -> &'static str {
        match self.mode {
            Mode::Addition => "Fantastic! \u{1F389}",
            Mode::Subtraction => "You got it! \u{1F389}",
        }
    }

    fn consolation(&self) -> String {
        match self.mode {
            Mode::Addition => format!("Not quite! It's {}!", self.problem.result),
            Mode::Subtraction => format!("Oops! It's {}!", self.problem.result),
        }
    }
}

fn active_quiz(app: &AppState) -> &QuizState {
    match app.active {
        Module::Subtraction => &app.subtraction,
        _ => &app.addition,
    }
}

/// Replace the current problem, keeping the session score counters.
pub fn reset_problem(app: &mut AppState, now: f64) {
    let prompt;
    {
        let quiz = match app.active {
            Module::Subtraction => &mut app.subtraction,
            _ => &mut app.addition,
        };
        quiz.problem = generate_problem(quiz.mode, &mut app.rng);
        quiz.choices = generate_choices(quiz.problem.result, &mut app.rng);
        quiz.selected = None;
        quiz.objects_shown = false;
        quiz.removed = false;
        quiz.celebrate_at = None;
        quiz.arm_reveal(now);
        prompt = quiz.prompt();
    }
    mascot::say(&mut app.mascot, prompt, Emotion::Happy);
    sync_answer_buttons(app);
    sync_next_button(app);
}

pub fn handle_answer(app: &mut AppState, idx: usize, now: f64) {
    let correct;
    let consolation;
    {
        let quiz = match app.active {
            Module::Subtraction => &mut app.subtraction,
            _ => &mut app.addition,
        };
        if quiz.selected.is_some() || idx >= quiz.choices.len() {
            return;
        }
        let answer = quiz.choices[idx];
        sound::play_click();
        quiz.selected = Some(answer);
        quiz.attempts += 1;
        correct = answer == quiz.problem.result;
        if correct {
            quiz.score += 1;
            // celebration fires shortly after the success arpeggio starts
            quiz.celebrate_at = Some(now + 200.0);
            consolation = String::new();
        } else {
            consolation = quiz.consolation();
        }
    }
    if correct {
        sound::play_success();
    } else {
        sound::play_wrong();
        mascot::say(&mut app.mascot, &consolation, Emotion::Thinking);
    }
    sync_answer_buttons(app);
    sync_next_button(app);
}

pub fn handle_next(app: &mut AppState, now: f64) {
    sound::play_click();
    reset_problem(app, now);
}

pub fn tick(app: &mut AppState, now: f64) {
    let mut celebrate = false;
    let praise;
    {
        let quiz = match app.active {
            Module::Subtraction => &mut app.subtraction,
            _ => &mut app.addition,
        };
        if let Some(at) = quiz.reveal_at {
            if now >= at {
                quiz.reveal_at = None;
                quiz.objects_shown = true;
                quiz.reveal_start = at;
            }
        }
        if let Some(at) = quiz.removal_at {
            if now >= at {
                quiz.removal_at = None;
                quiz.removed = true;
                quiz.removal_start = at;
            }
        }
        if let Some(at) = quiz.celebrate_at {
            if now >= at {
                quiz.celebrate_at = None;
                celebrate = true;
            }
        }
        praise = quiz.praise();
    }
    if celebrate {
        sound::play_celebration();
        super::effects::celebrate(&mut app.effects, &mut app.rng, (50.0, 45.0), now);
        mascot::say(&mut app.mascot, praise, Emotion::Celebrating);
    }
}

// --- Canvas rendering --------------------------------------------------------

pub fn render(app: &AppState, now: f64) {
    let quiz = active_quiz(app);
    let ctx = &app.ctx;
    let w = app.canvas.width() as f64;
    let h = app.canvas.height() as f64;

    ctx.set_fill_style_str(app.active.soft_color());
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    match quiz.mode {
        Mode::Addition => render_addition_objects(app, quiz, now),
        Mode::Subtraction => render_subtraction_objects(app, quiz, now),
    }

    // Equation stays a question even after answering; feedback lives on the
    // answer buttons, as with the button styling below.
    ctx.set_fill_style_str("#1e293b");
    ctx.set_font("bold 42px 'Fredoka', 'Comic Sans MS', sans-serif");
    let equation = format!(
        "{} {} {} = ?",
        quiz.problem.first,
        quiz.mode.operator(),
        quiz.problem.second
    );
    ctx.fill_text(&equation, w / 2.0, 300.0).ok();
}

fn render_addition_objects(app: &AppState, quiz: &QuizState, now: f64) {
    if !quiz.objects_shown {
        return;
    }
    let ctx = &app.ctx;
    let symbol = quiz.problem.symbol;
    let first = quiz.problem.first as usize;
    let second = quiz.problem.second as usize;

    ctx.set_fill_style_str(app.active.accent_color());
    ctx.set_font("bold 40px 'Fredoka', 'Comic Sans MS', sans-serif");
    ctx.fill_text("+", 180.0, 110.0).ok();

    for i in 0..first {
        if let Some((alpha, scale)) = pop_in(quiz.reveal_start, i, now) {
            let x = 46.0 + (i % 3) as f64 * 38.0;
            let y = 66.0 + (i / 3) as f64 * 40.0;
            draw_emoji(ctx, symbol, x, y, 26.0 * scale, alpha);
        }
    }
    for i in 0..second {
        if let Some((alpha, scale)) = pop_in(quiz.reveal_start, first + i, now) {
            let x = 238.0 + (i % 3) as f64 * 38.0;
            let y = 66.0 + (i / 3) as f64 * 40.0;
            draw_emoji(ctx, symbol, x, y, 26.0 * scale, alpha);
        }
    }
}

fn render_subtraction_objects(app: &AppState, quiz: &QuizState, now: f64) {
    if !quiz.objects_shown {
        return;
    }
    let ctx = &app.ctx;
    let symbol = quiz.problem.symbol;
    let first = quiz.problem.first as usize;
    let second = quiz.problem.second as usize;

    for i in 0..first {
        let Some((mut alpha, mut scale)) = pop_in(quiz.reveal_start, i, now) else {
            continue;
        };
        // the last `second` objects fade to gray once removal kicks in,
        // rippling from the end of the row backwards
        if quiz.removed && i >= first - second {
            let t = (now - quiz.removal_start - (first - i) as f64 * 100.0) / 500.0;
            let t = t.clamp(0.0, 1.0);
            alpha *= 1.0 - 0.75 * t;
            scale *= 1.0 - 0.25 * t;
        }
        let x = 60.0 + (i % 5) as f64 * 48.0;
        let y = 70.0 + (i / 5) as f64 * 52.0;
        draw_emoji(ctx, symbol, x, y, 30.0 * scale, alpha);
    }

    if quiz.removed && second > 0 {
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str("#64748b");
        ctx.set_font("16px 'Nunito', sans-serif");
        ctx.fill_text(&format!("{second} taken away"), 180.0, 225.0)
            .ok();
    }
}

fn draw_emoji(
    ctx: &web_sys::CanvasRenderingContext2d,
    symbol: &str,
    x: f64,
    y: f64,
    size: f64,
    alpha: f64,
) {
    ctx.set_global_alpha(alpha);
    ctx.set_font(&format!("{}px serif", size.max(1.0) as i32));
    ctx.fill_text(symbol, x, y).ok();
    ctx.set_global_alpha(1.0);
}

// --- DOM sync ----------------------------------------------------------------

pub fn sync_answer_buttons(app: &AppState) {
    let Some(doc) = document() else { return };
    let quiz = active_quiz(app);
    let accent = app.active.accent_color();
    for (i, choice) in quiz.choices.iter().enumerate() {
        let Some(el) = doc.get_element_by_id(&format!("mf-answer-{i}")) else {
            continue;
        };
        let Ok(button) = el.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        button.set_text_content(Some(&choice.to_string()));
        button.set_disabled(quiz.selected.is_some());
        let (style, class) = match quiz.selected {
            None => (
                format!("{ANSWER_BASE} background:#f1f5f9; color:#334155;"),
                "",
            ),
            Some(_) if *choice == quiz.problem.result => (
                format!("{ANSWER_BASE} background:{accent}; color:#ffffff;"),
                "mf-pop",
            ),
            Some(sel) if *choice == sel => (
                format!("{ANSWER_BASE} background:#ef4444; color:#ffffff;"),
                "mf-shake",
            ),
            Some(_) => (
                format!("{ANSWER_BASE} background:#e2e8f0; color:#94a3b8; opacity:0.5;"),
                "",
            ),
        };
        button.set_attribute("style", &style).ok();
        button.set_class_name(class);
    }
}

pub fn sync_next_button(app: &AppState) {
    let quiz = active_quiz(app);
    let accent = app.active.accent_color();
    let style = if quiz.selected.is_some() {
        format!("{NEXT_BASE} background:{accent}; display:inline-block;")
    } else {
        format!("{NEXT_BASE} background:{accent}; display:none;")
    };
    set_el_style("mf-next", &style);
}
