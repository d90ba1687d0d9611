//! Arithmetic problem and answer-choice generation.
//!
//! Both functions are total over their domains: operands are drawn inside
//! bounds that keep every result within 0..=10, and the choice generator
//! always terminates with four distinct values.

use crate::OBJECT_EMOJI;
use crate::rng::Rng;

/// Which quiz is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Addition,
    Subtraction,
}

impl Mode {
    pub fn operator(self) -> &'static str {
        match self {
            Mode::Addition => "+",
            Mode::Subtraction => "\u{2212}",
        }
    }
}

/// One arithmetic exercise. Immutable once created; replaced wholesale on
/// every "next" action.
#[derive(Clone, Copy, Debug)]
pub struct Problem {
    pub first: u8,
    pub second: u8,
    pub result: u8,
    /// Cosmetic emoji used to visualize the operands.
    pub symbol: &'static str,
}

/// Draw a solvable problem for the given mode.
///
/// Addition: first in 0..=5, second in 0..=(10 - first).
/// Subtraction: first in 1..=10, second in 0..=first.
/// Either way the result lands in 0..=10.
pub fn generate_problem(mode: Mode, rng: &mut Rng) -> Problem {
    let (first, second, result) = match mode {
        Mode::Addition => {
            let first = rng.below(6) as u8;
            let second = rng.below(11 - u32::from(first)) as u8;
            (first, second, first + second)
        }
        Mode::Subtraction => {
            let first = rng.below(10) as u8 + 1;
            let second = rng.below(u32::from(first) + 1) as u8;
            (first, second, first - second)
        }
    };
    let symbol = OBJECT_EMOJI[rng.below(OBJECT_EMOJI.len() as u32) as usize];
    Problem {
        first,
        second,
        result,
        symbol,
    }
}

/// Build four distinct answer choices containing `result`, shuffled.
///
/// Distractors come from a window of roughly result +/- 2 clamped to 0..=10.
/// Near the edges that window holds fewer than four distinct values, so it is
/// widened until four choices can exist; otherwise rejection sampling on a
/// 3-value window would never finish.
pub fn generate_choices(result: u8, rng: &mut Rng) -> [u8; 4] {
    debug_assert!(result <= 10);
    let mut lo = i32::from(result) - 2;
    let mut hi = i32::from(result) + 2;
    lo = lo.max(0);
    hi = hi.min(10);
    while hi - lo < 3 {
        if hi < 10 {
            hi += 1;
        } else {
            lo -= 1;
        }
    }

    let mut choices = [result; 4];
    let mut len = 1;
    while len < 4 {
        let cand = rng.range_i32(lo, hi) as u8;
        if !choices[..len].contains(&cand) {
            choices[len] = cand;
            len += 1;
        }
    }
    rng.shuffle(&mut choices);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_operands_stay_in_bounds() {
        let mut rng = Rng::from_seed(11);
        for _ in 0..2_000 {
            let p = generate_problem(Mode::Addition, &mut rng);
            assert!(p.first <= 5);
            assert!(p.second <= 10 - p.first);
            assert_eq!(p.result, p.first + p.second);
            assert!(p.result <= 10);
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = Rng::from_seed(12);
        for _ in 0..2_000 {
            let p = generate_problem(Mode::Subtraction, &mut rng);
            assert!((1..=10).contains(&p.first));
            assert!(p.second <= p.first);
            assert_eq!(p.result, p.first - p.second);
        }
    }

    #[test]
    fn symbol_comes_from_the_emoji_pool() {
        let mut rng = Rng::from_seed(13);
        for _ in 0..100 {
            let p = generate_problem(Mode::Addition, &mut rng);
            assert!(OBJECT_EMOJI.contains(&p.symbol));
        }
    }

    #[test]
    fn choices_are_distinct_and_include_result() {
        let mut rng = Rng::from_seed(14);
        for result in 0..=10u8 {
            for _ in 0..200 {
                let choices = generate_choices(result, &mut rng);
                assert!(choices.contains(&result));
                for (i, a) in choices.iter().enumerate() {
                    assert!(*a <= 10);
                    for b in &choices[i + 1..] {
                        assert_ne!(a, b, "duplicate choice for result {result}");
                    }
                }
            }
        }
    }

    #[test]
    fn choices_at_zero_are_non_negative() {
        let mut rng = Rng::from_seed(15);
        let choices = generate_choices(0, &mut rng);
        assert!(choices.contains(&0));
        // u8 already rules out negatives; the interesting part is staying low
        for c in choices {
            assert!(c <= 10);
        }
    }

    #[test]
    fn choices_at_ten_stay_clamped() {
        let mut rng = Rng::from_seed(16);
        for _ in 0..500 {
            let choices = generate_choices(10, &mut rng);
            assert!(choices.contains(&10));
            for c in choices {
                assert!(c <= 10);
            }
        }
    }
}
