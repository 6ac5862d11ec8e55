//! Advance widths for the standard Helvetica faces the output sink writes
//! with. The base-14 fonts are never embedded, so wrapping measurements come
//! from their published AFM metrics instead of a parsed font file.

use crate::layout::Measure;
use crate::style::{Face, RunStyle};
use crate::units::Mm;

const UNITS_PER_EM: f32 = 1000.0;
const BULLET_ADVANCE: u16 = 350;

/// Helvetica glyph advances for ' ' (32) through '~' (126), in 1/1000 em
#[rustfmt::skip]
const REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold glyph advances for ' ' (32) through '~' (126), in 1/1000 em
#[rustfmt::skip]
const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width measurement backed by the AFM metrics of Helvetica and
/// Helvetica-Bold. Characters outside the supported set fall back to the
/// advance of `?`, matching how the sink encodes them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    fn advance(face: Face, ch: char) -> u16 {
        let table = match face {
            Face::Regular => &REGULAR,
            Face::Bold => &BOLD,
        };
        match ch {
            ' '..='~' => table[ch as usize - 32],
            '\u{2022}' => BULLET_ADVANCE,
            _ => table['?' as usize - 32],
        }
    }
}

impl Measure for HelveticaMetrics {
    fn text_width(&self, text: &str, style: &RunStyle) -> Mm {
        let advances: f32 = text
            .chars()
            .map(|ch| Self::advance(style.face, ch) as f32)
            .sum();
        // advances are in 1/1000 em; an em is the point size
        Mm(advances / UNITS_PER_EM * style.size.0 * 25.4 / 72.0)
    }
}
