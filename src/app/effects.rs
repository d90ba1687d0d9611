//! Celebration effects drawn on the full-screen overlay canvas.
//!
//! Confetti pieces and star glyphs are spawned into plain vectors and
//! expired/redrawn every frame from the main animation loop.

use web_sys::CanvasRenderingContext2d;

use crate::rng::Rng;

const CONFETTI_COLORS: [&str; 6] = [
    "hsl(15, 90%, 65%)",  // coral
    "hsl(45, 100%, 70%)", // yellow
    "hsl(160, 50%, 65%)", // mint
    "hsl(270, 60%, 70%)", // lavender
    "hsl(200, 80%, 65%)", // sky blue
    "hsl(320, 60%, 70%)", // pink
];

const CONFETTI_COUNT: usize = 50;
const CONFETTI_MS: f64 = 3_000.0;
const STAR_COUNT: usize = 8;
const STAR_MS: f64 = 1_000.0;

struct ConfettiPiece {
    born_ms: f64,
    delay_ms: f64,
    x_pct: f64,
    size: f64,
    color: &'static str,
    round: bool,
}

struct Star {
    born_ms: f64,
    delay_ms: f64,
    x_pct: f64,
    y_pct: f64,
    size: f64,
}

#[derive(Default)]
pub struct EffectsState {
    confetti: Vec<ConfettiPiece>,
    stars: Vec<Star>,
}

/// Spawn a full celebration: confetti raining over the page plus a star burst
/// around `origin` (both coordinates in percent of the overlay canvas).
pub fn celebrate(fx: &mut EffectsState, rng: &mut Rng, origin: (f64, f64), now: f64) {
    for _ in 0..CONFETTI_COUNT {
        fx.confetti.push(ConfettiPiece {
            born_ms: now,
            delay_ms: rng.unit_f64() * 500.0,
            x_pct: rng.unit_f64() * 100.0,
            size: rng.unit_f64() * 8.0 + 6.0,
            color: CONFETTI_COLORS[rng.below(CONFETTI_COLORS.len() as u32) as usize],
            round: rng.unit_f64() > 0.5,
        });
    }
    for _ in 0..STAR_COUNT {
        fx.stars.push(Star {
            born_ms: now,
            delay_ms: rng.unit_f64() * 300.0,
            x_pct: origin.0 + (rng.unit_f64() - 0.5) * 60.0,
            y_pct: origin.1 + (rng.unit_f64() - 0.5) * 60.0,
            size: rng.unit_f64() * 20.0 + 15.0,
        });
    }
}

/// Drop effects that have played out.
pub fn tick(fx: &mut EffectsState, now: f64) {
    fx.confetti
        .retain(|p| now - p.born_ms - p.delay_ms < CONFETTI_MS);
    fx.stars.retain(|s| now - s.born_ms - s.delay_ms < STAR_MS);
}

pub fn render(fx: &EffectsState, ctx: &CanvasRenderingContext2d, w: f64, h: f64, now: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    if fx.confetti.is_empty() && fx.stars.is_empty() {
        return;
    }

    for piece in &fx.confetti {
        let t = now - piece.born_ms - piece.delay_ms;
        if t < 0.0 {
            continue;
        }
        let frac = (t / CONFETTI_MS).clamp(0.0, 1.0);
        let x = piece.x_pct / 100.0 * w + (frac * std::f64::consts::TAU * 2.0).sin() * 18.0;
        let y = frac * (h + 40.0) - 20.0;
        // fade out over the last fifth of the fall
        let alpha = ((1.0 - frac) * 5.0).clamp(0.0, 1.0);
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(piece.color);
        if piece.round {
            ctx.begin_path();
            ctx.arc(x, y, piece.size / 2.0, 0.0, std::f64::consts::TAU)
                .ok();
            ctx.fill();
        } else {
            ctx.fill_rect(x - piece.size / 2.0, y - piece.size / 2.0, piece.size, piece.size);
        }
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for star in &fx.stars {
        let t = now - star.born_ms - star.delay_ms;
        if t < 0.0 {
            continue;
        }
        let frac = (t / STAR_MS).clamp(0.0, 1.0);
        // quick grow, slow fade
        let scale = (frac * 4.0).clamp(0.0, 1.0);
        let alpha = 1.0 - frac;
        ctx.set_global_alpha(alpha);
        ctx.set_font(&format!("{}px serif", (star.size * scale).max(1.0) as i32));
        ctx.fill_text(
            "\u{2B50}",
            star.x_pct / 100.0 * w,
            star.y_pct / 100.0 * h,
        )
        .ok();
    }
    ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebrate_spawns_percent_coordinates() {
        let mut fx = EffectsState::default();
        let mut rng = Rng::from_seed(5);
        celebrate(&mut fx, &mut rng, (50.0, 40.0), 0.0);
        assert_eq!(fx.confetti.len(), CONFETTI_COUNT);
        assert_eq!(fx.stars.len(), STAR_COUNT);
        // positions are percentages of the overlay canvas, so render scales
        // them to whatever size the viewport currently has
        for p in &fx.confetti {
            assert!((0.0..=100.0).contains(&p.x_pct));
        }
        for s in &fx.stars {
            assert!((20.0..=80.0).contains(&s.x_pct));
            assert!((10.0..=70.0).contains(&s.y_pct));
        }
    }

    #[test]
    fn tick_expires_played_out_effects() {
        let mut fx = EffectsState::default();
        let mut rng = Rng::from_seed(6);
        celebrate(&mut fx, &mut rng, (50.0, 40.0), 1_000.0);
        tick(&mut fx, 1_100.0);
        assert!(!fx.confetti.is_empty());
        assert!(!fx.stars.is_empty());
        // max lifetime is CONFETTI_MS plus the 500 ms spawn delay
        tick(&mut fx, 1_000.0 + CONFETTI_MS + 500.0);
        assert!(fx.confetti.is_empty());
        assert!(fx.stars.is_empty());
    }
}
