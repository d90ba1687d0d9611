//! Page shell and animation loop.
//!
//! `start_app()` builds the whole DOM scaffold (header, tab bar, mascot,
//! module canvas, answer/selector buttons, full-screen effects overlay),
//! wires the event listeners, and starts a `requestAnimationFrame` loop.
//! All game state lives in a thread-local `AppState`; event closures and the
//! frame tick borrow it through `APP_STATE`, so every mutation is serialized
//! through the browser event queue.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement, window,
};

use crate::problem::Mode;
use crate::rng::Rng;

pub(crate) mod effects;
pub(crate) mod mascot;
pub(crate) mod quiz;
pub(crate) mod sound;
pub(crate) mod tracing;

use effects::EffectsState;
use mascot::{Emotion, MascotState};
use quiz::QuizState;
use tracing::TracingState;

// --- Modules (tabs) ----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Module {
    Numbers,
    Addition,
    Subtraction,
}

impl Module {
    pub(crate) const ALL: [Module; 3] = [Module::Numbers, Module::Addition, Module::Subtraction];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Module::Numbers => "Numbers",
            Module::Addition => "Addition",
            Module::Subtraction => "Subtraction",
        }
    }

    fn tab_emoji(self) -> &'static str {
        match self {
            Module::Numbers => "\u{270F}\u{FE0F}",  // ✏️
            Module::Addition => "\u{2795}",         // ➕
            Module::Subtraction => "\u{2796}",      // ➖
        }
    }

    pub(crate) fn accent_color(self) -> &'static str {
        match self {
            Module::Numbers => "#8b5cf6",
            Module::Addition => "#22c55e",
            Module::Subtraction => "#f97316",
        }
    }

    pub(crate) fn soft_color(self) -> &'static str {
        match self {
            Module::Numbers => "#ede9fe",
            Module::Addition => "#dcfce7",
            Module::Subtraction => "#ffedd5",
        }
    }

    fn page_color(self) -> &'static str {
        match self {
            Module::Numbers => "#f5f3ff",
            Module::Addition => "#f0fdf4",
            Module::Subtraction => "#fff7ed",
        }
    }
}

// --- App state ---------------------------------------------------------------

pub(crate) struct AppState {
    pub(crate) canvas: HtmlCanvasElement,
    pub(crate) ctx: CanvasRenderingContext2d,
    pub(crate) fx_ctx: CanvasRenderingContext2d,
    pub(crate) fx_size: (f64, f64),
    pub(crate) active: Module,
    pub(crate) rng: Rng,
    pub(crate) addition: QuizState,
    pub(crate) subtraction: QuizState,
    pub(crate) tracing: TracingState,
    pub(crate) mascot: MascotState,
    pub(crate) effects: EffectsState,
}

thread_local! {
    static APP_STATE: std::cell::RefCell<Option<AppState>> = const { std::cell::RefCell::new(None) };
}

/// Run `f` against the app state with a fresh timestamp. No-op before
/// `start_app()` has installed the state.
fn with_app<F: FnOnce(&mut AppState, f64)>(f: F) {
    let now = now_ms();
    APP_STATE.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app, now);
        }
    });
}

// --- Shared helpers ----------------------------------------------------------

pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub(crate) fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn viewport_size(win: &web_sys::Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    (w, h)
}

pub(crate) fn set_el_style(id: &str, style: &str) {
    if let Some(doc) = document() {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_attribute("style", style).ok();
        }
    }
}

pub(crate) fn set_el_text(id: &str, text: &str) {
    if let Some(doc) = document() {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

fn set_visible(id: &str, base: &str, display: &str) {
    set_el_style(id, &format!("{base} display:{display};"));
}

/// Bounce-in curve shared by quiz objects and counting emoji: alpha and size
/// ease over 250 ms, staggered 100 ms apart in draw order. `None` while the
/// object is still hidden.
pub(crate) fn pop_in(start_ms: f64, order: usize, now: f64) -> Option<(f64, f64)> {
    let t = (now - start_ms - order as f64 * 100.0) / 250.0;
    if t <= 0.0 {
        return None;
    }
    let t = t.min(1.0);
    let ease = t * (2.0 - t);
    Some((t, 0.6 + 0.4 * ease))
}

// --- Styling -----------------------------------------------------------------

const KEYFRAMES_CSS: &str = "\
@keyframes mf-float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }\n\
@keyframes mf-bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-12px); } }\n\
@keyframes mf-wiggle { 0%, 100% { transform: rotate(-6deg); } 50% { transform: rotate(6deg); } }\n\
@keyframes mf-pop { 0% { transform: scale(1); } 40% { transform: scale(1.25); } 100% { transform: scale(1); } }\n\
@keyframes mf-shake { 0%, 100% { transform: translateX(0); } 25% { transform: translateX(-5px); } 75% { transform: translateX(5px); } }\n\
.mf-float { display:inline-block; animation: mf-float 3s ease-in-out infinite; }\n\
.mf-bounce { display:inline-block; animation: mf-bounce 0.6s ease-in-out infinite; }\n\
.mf-wiggle { display:inline-block; animation: mf-wiggle 0.5s ease-in-out infinite; }\n\
.mf-pop { animation: mf-pop 0.45s ease-out; }\n\
.mf-shake { animation: mf-shake 0.4s ease-in-out; }\n";

const HEADER_STYLE: &str = "font-family:'Fredoka','Comic Sans MS',cursive; font-size:38px; \
    margin:18px 0 2px 0; color:#7c3aed;";
const SUBTITLE_STYLE: &str = "margin:0 0 4px 0; color:#64748b; font-size:15px;";
const SCORE_STYLE: &str = "margin:4px 0; color:#64748b; font-size:15px; font-weight:600;";
const FOOTER_STYLE: &str = "margin:14px 0 18px 0; color:#94a3b8; font-size:12px;";
const MASCOT_WRAP_STYLE: &str = "min-height:118px; padding-top:6px;";
const FACE_STYLE: &str = "font-size:52px;";
const CANVAS_STYLE: &str = "display:block; margin:6px auto; border-radius:18px; \
    box-shadow:0 6px 24px rgba(0,0,0,0.10); touch-action:none;";
const FX_CANVAS_STYLE: &str =
    "position:fixed; left:0; top:0; pointer-events:none; z-index:50;";

const TABS_STYLE: &str = "display:flex; justify-content:center; gap:12px; padding:12px;";
const TAB_BASE: &str = "font-family:inherit; display:flex; flex-direction:column; \
    align-items:center; gap:2px; min-width:88px; padding:10px 8px; border:none; \
    border-radius:16px; font-size:14px; font-weight:700; cursor:pointer; \
    box-shadow:0 3px 0 rgba(0,0,0,0.10);";

const ANSWERS_BASE: &str = "grid-template-columns:repeat(4, 72px); gap:10px; \
    justify-content:center; margin:14px auto;";
const SELECTOR_WRAP_BASE: &str = "flex-wrap:wrap; justify-content:center; gap:8px; \
    max-width:420px; margin:0 auto 10px auto;";
const PROGRESS_WRAP_BASE: &str = "width:320px; height:12px; margin:10px auto; \
    background:#e2e8f0; border-radius:6px; overflow:hidden;";
const TRACE_ACTIONS_BASE: &str = "justify-content:center; gap:12px; margin:10px;";
const RETRY_STYLE: &str = "font-family:inherit; font-size:16px; font-weight:700; \
    padding:10px 20px; border:none; border-radius:999px; background:#e2e8f0; \
    color:#64748b; cursor:pointer;";
const TRACE_NEXT_STYLE: &str = "font-family:inherit; font-size:16px; font-weight:700; \
    padding:10px 20px; border:none; border-radius:999px; background:#8b5cf6; \
    color:#ffffff; cursor:pointer;";

// --- Startup -----------------------------------------------------------------

fn create_el(doc: &Document, tag: &str, id: &str, style: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !id.is_empty() {
        el.set_id(id);
    }
    if !style.is_empty() {
        el.set_attribute("style", style).ok();
    }
    Ok(el)
}

fn on_click<F>(target: &EventTarget, mut f: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| f()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn start_app() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // keyframes used by the mascot, answer buttons and tabs
    let style_el = doc.create_element("style")?;
    style_el.set_text_content(Some(KEYFRAMES_CSS));
    body.append_child(&style_el)?;

    let header = create_el(&doc, "h1", "", HEADER_STYLE)?;
    header.set_text_content(Some("\u{2728} Math Fun! \u{2728}"));
    body.append_child(&header)?;
    let subtitle = create_el(&doc, "p", "", SUBTITLE_STYLE)?;
    subtitle.set_text_content(Some("Learn numbers, addition & subtraction!"));
    body.append_child(&subtitle)?;

    // tab bar
    let tabs = create_el(&doc, "div", "mf-tabs", TABS_STYLE)?;
    for (i, module) in Module::ALL.into_iter().enumerate() {
        let tab = create_el(&doc, "button", &format!("mf-tab-{i}"), "")?;
        let emoji = create_el(&doc, "span", "", "font-size:22px;")?;
        emoji.set_text_content(Some(module.tab_emoji()));
        let label = create_el(&doc, "span", "", "")?;
        label.set_text_content(Some(module.title()));
        tab.append_child(&emoji)?;
        tab.append_child(&label)?;
        on_click(&tab, move || {
            sound::play_click();
            with_app(|app, now| {
                if app.active != module {
                    switch_module(app, module, now);
                }
            });
        })?;
        tabs.append_child(&tab)?;
    }
    body.append_child(&tabs)?;

    let score = create_el(&doc, "p", "mf-score", SCORE_STYLE)?;
    body.append_child(&score)?;

    // mascot: speech bubble above an animated emoji face
    let mascot_wrap = create_el(&doc, "div", "mf-mascot", MASCOT_WRAP_STYLE)?;
    let bubble = create_el(&doc, "div", "mf-bubble", &mascot::initial_bubble_style())?;
    mascot_wrap.append_child(&bubble)?;
    let face_line = create_el(&doc, "div", "", "")?;
    let face = create_el(&doc, "span", "mf-face", FACE_STYLE)?;
    face.set_class_name("mf-float");
    face.set_text_content(Some("\u{1F98A}")); // 🦊
    face_line.append_child(&face)?;
    mascot_wrap.append_child(&face_line)?;
    body.append_child(&mascot_wrap)?;

    // number selector strip (numbers module)
    let selector = create_el(&doc, "div", "mf-selector", SELECTOR_WRAP_BASE)?;
    for i in 0..crate::glyphs::NUMBER_GLYPHS.len() {
        let btn = create_el(&doc, "button", &format!("mf-num-{i}"), "")?;
        btn.set_text_content(Some(&i.to_string()));
        on_click(&btn, move || {
            with_app(|app, now| {
                if app.active == Module::Numbers {
                    tracing::select_number(app, i, now);
                }
            });
        })?;
        selector.append_child(&btn)?;
    }
    body.append_child(&selector)?;

    // shared module canvas
    let canvas: HtmlCanvasElement = create_el(&doc, "canvas", "mf-canvas", CANVAS_STYLE)?.dyn_into()?;
    canvas.set_width(360);
    canvas.set_height(440);
    body.append_child(&canvas)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // tracing progress bar
    let progress_wrap = create_el(&doc, "div", "mf-progress", PROGRESS_WRAP_BASE)?;
    let progress_fill = create_el(&doc, "div", "mf-progress-fill", "")?;
    progress_wrap.append_child(&progress_fill)?;
    body.append_child(&progress_wrap)?;

    // quiz answer buttons + next button
    let answers = create_el(&doc, "div", "mf-answers", ANSWERS_BASE)?;
    for i in 0..4 {
        let btn = create_el(&doc, "button", &format!("mf-answer-{i}"), "")?;
        on_click(&btn, move || {
            with_app(|app, now| {
                if app.active != Module::Numbers {
                    quiz::handle_answer(app, i, now);
                }
            });
        })?;
        answers.append_child(&btn)?;
    }
    body.append_child(&answers)?;
    let next = create_el(&doc, "button", "mf-next", "")?;
    next.set_text_content(Some("Next Problem \u{27A1}\u{FE0F}"));
    on_click(&next, move || {
        with_app(|app, now| {
            if app.active != Module::Numbers {
                quiz::handle_next(app, now);
            }
        });
    })?;
    body.append_child(&next)?;

    // tracing action buttons
    let trace_actions = create_el(&doc, "div", "mf-trace-actions", TRACE_ACTIONS_BASE)?;
    let retry = create_el(&doc, "button", "mf-retry", RETRY_STYLE)?;
    retry.set_text_content(Some("\u{1F504} Retry"));
    on_click(&retry, move || {
        with_app(|app, now| {
            if app.active == Module::Numbers {
                tracing::handle_retry(app, now);
            }
        });
    })?;
    trace_actions.append_child(&retry)?;
    let trace_next = create_el(&doc, "button", "mf-tnext", TRACE_NEXT_STYLE)?;
    trace_next.set_text_content(Some("Next \u{27A1}\u{FE0F}"));
    on_click(&trace_next, move || {
        with_app(|app, now| {
            if app.active == Module::Numbers {
                tracing::handle_next(app, now);
            }
        });
    })?;
    trace_actions.append_child(&trace_next)?;
    body.append_child(&trace_actions)?;

    let footer = create_el(&doc, "p", "", FOOTER_STYLE)?;
    footer.set_text_content(Some("Made with \u{1F496} for little learners"));
    body.append_child(&footer)?;

    // full-screen overlay for confetti / star bursts
    let (fw, fh) = viewport_size(&win);
    let fx_canvas: HtmlCanvasElement =
        create_el(&doc, "canvas", "mf-fx", FX_CANVAS_STYLE)?.dyn_into()?;
    fx_canvas.set_width(fw as u32);
    fx_canvas.set_height(fh as u32);
    body.append_child(&fx_canvas)?;
    let fx_ctx: CanvasRenderingContext2d = fx_canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // keep the overlay covering the whole viewport
    {
        let fx_canvas_r = fx_canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(w) = window() else { return };
            let (fw, fh) = viewport_size(&w);
            fx_canvas_r.set_width(fw as u32);
            fx_canvas_r.set_height(fh as u32);
            with_app(|app, _now| app.fx_size = (fw, fh));
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    install_pointer_listeners(&canvas)?;

    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let mut rng = Rng::new();
    let addition = QuizState::new(Mode::Addition, &mut rng, now);
    let subtraction = QuizState::new(Mode::Subtraction, &mut rng, now);
    let app = AppState {
        canvas,
        ctx,
        fx_ctx,
        fx_size: (fw, fh),
        active: Module::Numbers,
        rng,
        addition,
        subtraction,
        tracing: TracingState::new(now),
        mascot: MascotState::default(),
        effects: EffectsState::default(),
    };
    APP_STATE.with(|cell| cell.replace(Some(app)));

    with_app(|app, now| switch_module(app, Module::Numbers, now));
    start_frame_loop();
    Ok(())
}

/// Mouse and touch tracking on the module canvas; only the numbers module
/// cares, the guard lives in the handlers.
fn install_pointer_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            with_app(|app, now| {
                if app.active == Module::Numbers {
                    tracing::handle_press(app, f64::from(evt.offset_x()), f64::from(evt.offset_y()), now);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            with_app(|app, _now| {
                if app.active == Module::Numbers {
                    tracing::handle_move(app, f64::from(evt.offset_x()), f64::from(evt.offset_y()));
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    for event in ["mouseup", "mouseleave"] {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_app(|app, now| {
                if app.active == Module::Numbers {
                    tracing::handle_release(app, now);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let canvas_t = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                let rect = canvas_t.get_bounding_client_rect();
                let x = f64::from(touch.client_x()) - rect.left();
                let y = f64::from(touch.client_y()) - rect.top();
                with_app(|app, now| {
                    if app.active == Module::Numbers {
                        tracing::handle_press(app, x, y, now);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let canvas_t = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                let rect = canvas_t.get_bounding_client_rect();
                let x = f64::from(touch.client_x()) - rect.left();
                let y = f64::from(touch.client_y()) - rect.top();
                with_app(|app, _now| {
                    if app.active == Module::Numbers {
                        tracing::handle_move(app, x, y);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::TouchEvent| {
            with_app(|app, now| {
                if app.active == Module::Numbers {
                    tracing::handle_release(app, now);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// --- Module switching --------------------------------------------------------

/// Activate a tab. Mirrors the remount semantics of the original layout:
/// switching rebuilds the target module's transient state, session counters
/// included.
fn switch_module(app: &mut AppState, module: Module, now: f64) {
    app.active = module;
    match module {
        Module::Numbers => {
            app.tracing = TracingState::new(now);
            mascot::say(&mut app.mascot, "Trace the number!", Emotion::Happy);
            tracing::sync_selector(app);
        }
        Module::Addition | Module::Subtraction => {
            {
                let q = if module == Module::Addition {
                    &mut app.addition
                } else {
                    &mut app.subtraction
                };
                q.score = 0;
                q.attempts = 0;
            }
            quiz::reset_problem(app, now);
        }
    }
    apply_chrome(app);
}

/// Re-style everything that depends on the active module: page background,
/// tab bar, and which widget groups are visible.
fn apply_chrome(app: &AppState) {
    let Some(doc) = document() else { return };
    if let Some(body) = doc.body() {
        body.set_attribute(
            "style",
            &format!(
                "margin:0; min-height:100vh; text-align:center; \
                 font-family:'Nunito','Comic Sans MS',sans-serif; \
                 transition:background-color 0.5s; background:{};",
                app.active.page_color()
            ),
        )
        .ok();
    }

    for (i, module) in Module::ALL.into_iter().enumerate() {
        let style = if module == app.active {
            format!(
                "{TAB_BASE} background:{}; color:#ffffff;",
                module.accent_color()
            )
        } else {
            format!(
                "{TAB_BASE} background:#ffffff; color:{};",
                module.accent_color()
            )
        };
        set_el_style(&format!("mf-tab-{i}"), &style);
    }

    let numbers = app.active == Module::Numbers;
    set_visible("mf-selector", SELECTOR_WRAP_BASE, if numbers { "flex" } else { "none" });
    set_visible("mf-progress", PROGRESS_WRAP_BASE, if numbers { "block" } else { "none" });
    set_visible(
        "mf-trace-actions",
        TRACE_ACTIONS_BASE,
        if numbers { "flex" } else { "none" },
    );
    set_visible("mf-answers", ANSWERS_BASE, if numbers { "none" } else { "grid" });
    if numbers {
        set_el_style("mf-next", "display:none;");
    }
}

// --- Frame loop --------------------------------------------------------------

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        APP_STATE.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app_tick(app, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn app_tick(app: &mut AppState, now: f64) {
    match app.active {
        Module::Numbers => tracing::tick(app, now),
        _ => quiz::tick(app, now),
    }
    mascot::tick(&mut app.mascot, now);
    effects::tick(&mut app.effects, now);

    match app.active {
        Module::Numbers => tracing::render(app, now),
        _ => quiz::render(app, now),
    }
    effects::render(&app.effects, &app.fx_ctx, app.fx_size.0, app.fx_size.1, now);

    let line = match app.active {
        Module::Numbers => format!(
            "Progress: {} / {} numbers",
            app.tracing.completed_count(),
            crate::glyphs::NUMBER_GLYPHS.len()
        ),
        Module::Addition => format!("Score: {} / {}", app.addition.score, app.addition.attempts),
        Module::Subtraction => format!(
            "Score: {} / {}",
            app.subtraction.score, app.subtraction.attempts
        ),
    };
    set_el_text("mf-score", &line);
}
