// Integration tests for the number glyph and emoji datasets.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use math_fun::glyphs::NUMBER_GLYPHS;

#[test]
fn glyphs_cover_zero_through_ten_in_order() {
    assert_eq!(NUMBER_GLYPHS.len(), 11);
    for (i, glyph) in NUMBER_GLYPHS.iter().enumerate() {
        assert_eq!(
            usize::from(glyph.value),
            i,
            "glyph '{}' stored out of order",
            glyph.name
        );
    }
}

#[test]
fn glyph_names_are_unique_and_nonempty() {
    let mut seen = HashSet::new();
    for glyph in &NUMBER_GLYPHS {
        assert!(!glyph.name.is_empty(), "unnamed glyph for {}", glyph.value);
        assert!(seen.insert(glyph.name), "duplicate glyph name '{}'", glyph.name);
        assert!(!glyph.emoji.is_empty(), "glyph '{}' has no emoji", glyph.name);
    }
}

#[test]
fn glyph_strokes_fit_the_design_box() {
    for glyph in &NUMBER_GLYPHS {
        assert!(!glyph.strokes.is_empty(), "glyph '{}' has no strokes", glyph.name);
        for stroke in glyph.strokes {
            assert!(
                stroke.len() >= 2,
                "stroke in glyph '{}' has fewer than two points",
                glyph.name
            );
            for &(x, y) in *stroke {
                assert!(
                    (0.0..=200.0).contains(&x) && (0.0..=240.0).contains(&y),
                    "point ({x}, {y}) in glyph '{}' outside the 200x240 design box",
                    glyph.name
                );
            }
        }
        // start marker must sit on the first stroke
        let start = glyph.start_point();
        assert_eq!(start, glyph.strokes[0][0]);
    }
}

#[test]
fn object_emoji_pool_is_nonempty_and_unique() {
    assert!(!math_fun::OBJECT_EMOJI.is_empty());
    let unique: HashSet<&str> = math_fun::OBJECT_EMOJI.iter().copied().collect();
    assert_eq!(unique.len(), math_fun::OBJECT_EMOJI.len());
}
