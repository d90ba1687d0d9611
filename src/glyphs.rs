//! Static glyph descriptors for the number tracing module.
//!
//! Strokes are polylines in a 200 x 240 design space (x right, y down). The
//! tracing canvas renders them as a pale outline plus a dotted guide; the
//! first point of the first stroke is the suggested start of the trace.

/// Guide data for one traceable number.
pub struct GlyphDesc {
    pub value: u8,
    pub name: &'static str,
    /// Emoji repeated `value` times below the tracing area for counting.
    pub emoji: &'static str,
    pub strokes: &'static [&'static [(f32, f32)]],
}

impl GlyphDesc {
    /// Where the pulsing "Start" marker sits.
    pub fn start_point(&self) -> (f32, f32) {
        self.strokes[0][0]
    }
}

pub const NUMBER_GLYPHS: [GlyphDesc; 11] = [
    GlyphDesc {
        value: 0,
        name: "Zero",
        emoji: "\u{1F34E}", // 🍎
        strokes: &[&[
            (100.0, 40.0),
            (121.0, 46.0),
            (139.0, 63.0),
            (151.0, 89.0),
            (155.0, 120.0),
            (151.0, 151.0),
            (139.0, 177.0),
            (121.0, 194.0),
            (100.0, 200.0),
            (79.0, 194.0),
            (61.0, 177.0),
            (49.0, 151.0),
            (45.0, 120.0),
            (49.0, 89.0),
            (61.0, 63.0),
            (79.0, 46.0),
            (100.0, 40.0),
        ]],
    },
    GlyphDesc {
        value: 1,
        name: "One",
        emoji: "\u{2B50}", // ⭐
        strokes: &[&[(75.0, 65.0), (100.0, 40.0), (100.0, 200.0)]],
    },
    GlyphDesc {
        value: 2,
        name: "Two",
        emoji: "\u{1F9F8}", // 🧸
        strokes: &[&[
            (55.0, 75.0),
            (62.0, 55.0),
            (85.0, 42.0),
            (115.0, 42.0),
            (138.0, 55.0),
            (145.0, 78.0),
            (138.0, 102.0),
            (60.0, 180.0),
            (55.0, 200.0),
            (145.0, 200.0),
        ]],
    },
    GlyphDesc {
        value: 3,
        name: "Three",
        emoji: "\u{1F338}", // 🌸
        strokes: &[&[
            (60.0, 60.0),
            (80.0, 42.0),
            (110.0, 40.0),
            (135.0, 52.0),
            (142.0, 75.0),
            (130.0, 100.0),
            (105.0, 112.0),
            (130.0, 124.0),
            (145.0, 150.0),
            (138.0, 178.0),
            (112.0, 198.0),
            (80.0, 200.0),
            (58.0, 185.0),
        ]],
    },
    GlyphDesc {
        value: 4,
        name: "Four",
        emoji: "\u{1F388}", // 🎈
        strokes: &[
            &[(120.0, 40.0), (50.0, 145.0), (160.0, 145.0)],
            &[(130.0, 90.0), (130.0, 200.0)],
        ],
    },
    GlyphDesc {
        value: 5,
        name: "Five",
        emoji: "\u{1F36D}", // 🍭
        strokes: &[&[
            (140.0, 40.0),
            (60.0, 40.0),
            (55.0, 110.0),
            (90.0, 95.0),
            (120.0, 98.0),
            (142.0, 120.0),
            (148.0, 155.0),
            (135.0, 185.0),
            (100.0, 200.0),
            (65.0, 192.0),
            (52.0, 172.0),
        ]],
    },
    GlyphDesc {
        value: 6,
        name: "Six",
        emoji: "\u{1F98B}", // 🦋
        strokes: &[&[
            (130.0, 42.0),
            (95.0, 60.0),
            (68.0, 95.0),
            (52.0, 140.0),
            (58.0, 175.0),
            (85.0, 198.0),
            (115.0, 198.0),
            (140.0, 180.0),
            (148.0, 150.0),
            (138.0, 122.0),
            (110.0, 110.0),
            (82.0, 118.0),
            (60.0, 140.0),
        ]],
    },
    GlyphDesc {
        value: 7,
        name: "Seven",
        emoji: "\u{1F308}", // 🌈
        strokes: &[&[(52.0, 40.0), (148.0, 40.0), (85.0, 200.0)]],
    },
    GlyphDesc {
        value: 8,
        name: "Eight",
        emoji: "\u{1F34E}", // 🍎
        strokes: &[&[
            (100.0, 112.0),
            (70.0, 95.0),
            (60.0, 68.0),
            (78.0, 45.0),
            (122.0, 45.0),
            (140.0, 68.0),
            (130.0, 95.0),
            (100.0, 112.0),
            (65.0, 130.0),
            (52.0, 165.0),
            (70.0, 194.0),
            (130.0, 194.0),
            (148.0, 165.0),
            (135.0, 130.0),
            (100.0, 112.0),
        ]],
    },
    GlyphDesc {
        value: 9,
        name: "Nine",
        emoji: "\u{2B50}", // ⭐
        strokes: &[&[
            (148.0, 100.0),
            (130.0, 122.0),
            (100.0, 130.0),
            (70.0, 118.0),
            (58.0, 90.0),
            (68.0, 58.0),
            (98.0, 42.0),
            (128.0, 50.0),
            (145.0, 78.0),
            (148.0, 100.0),
            (140.0, 160.0),
            (118.0, 200.0),
        ]],
    },
    GlyphDesc {
        value: 10,
        name: "Ten",
        emoji: "\u{1F9F8}", // 🧸
        strokes: &[
            &[(35.0, 70.0), (55.0, 45.0), (55.0, 200.0)],
            &[
                (132.0, 44.0),
                (159.0, 67.0),
                (170.0, 122.0),
                (159.0, 177.0),
                (132.0, 200.0),
                (105.0, 177.0),
                (94.0, 122.0),
                (105.0, 67.0),
                (132.0, 44.0),
            ],
        ],
    },
];
