//! Staff rendering — octave-boundary lines for stacked staves.
//!
//! A Pyogi staff is a band of 7 half-degree line slots spanning one octave,
//! but only the slot at degree index 0 (mod 7) is visible: a thick
//! half-opacity line marking the octave boundary. The topmost staff in a
//! stack draws one extra slot (index 7) to close the stack from above.

use crate::model::NUM_DEGREES;
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Stroke width for the line slot at `index`; zero means the slot is not
/// drawn at all.
pub(super) fn line_width_at_index(index: i32) -> f64 {
    if index.rem_euclid(NUM_DEGREES) == 0 {
        THICK_LINE_WIDTH
    } else {
        0.0
    }
}

fn render_staff(svg: &mut SvgBuilder, x: f64, y: f64, width: f64, draw_top: bool) {
    let slots = if draw_top { NUM_DEGREES + 1 } else { NUM_DEGREES };
    for i in 0..slots {
        let stroke = line_width_at_index(i);
        if stroke <= 0.0 {
            continue;
        }
        let line_y = y + STAFF_HEIGHT - i as f64 * HALF_STAFF_SPACE;
        svg.line(x, line_y, x + width, line_y, stroke, STAFF_COLOR, STAFF_OPACITY);
    }
}

/// Draw `count` staves stacked downward from `(x, y)`, each spanning
/// `width`. Only the first staff closes the top of the stack.
pub(super) fn render_staves(svg: &mut SvgBuilder, x: f64, y: f64, count: usize, width: f64) {
    for i in 0..count {
        render_staff(svg, x, y + i as f64 * STAFF_HEIGHT, width, i == 0);
    }
}
