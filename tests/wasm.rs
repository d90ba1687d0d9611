// Smoke test under wasm: the entropy-seeded generator path goes through
// browser crypto via `getrandom`, which native runs never touch.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use math_fun::problem::{Mode, generate_choices, generate_problem};
use math_fun::rng::Rng;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn entropy_seeded_generator_works_in_browser() {
    let mut rng = Rng::new();
    for _ in 0..200 {
        let p = generate_problem(Mode::Addition, &mut rng);
        assert!(p.result <= 10);
        let choices = generate_choices(p.result, &mut rng);
        assert!(choices.contains(&p.result));
    }
}
