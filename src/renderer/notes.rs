//! Note rendering — pitch-class color selection and glyph emission.

use crate::error::{RenderError, Result};
use crate::model::{Accidental, Note, NUM_DEGREES};
use super::constants::*;
use super::svg_builder::SvgBuilder;
use super::AccidentalPolicy;

/// Per-pitch-class palette, red (degree 0) through violet (degree 6).
/// Sampled from the Turbo colormap:
/// https://ai.googleblog.com/2019/08/turbo-improved-rainbow-colormap-for.html
const DEGREE_PALETTE: [&str; 7] = [
    "rgb(210,49,5)",
    "rgb(251,127,34)",
    "rgb(237,208,57)",
    "rgb(164,253,61)",
    "rgb(48,241,153)",
    "rgb(45,187,236)",
    "rgb(71,107,227)",
];

/// Color for a note's pitch class. Any index the palette cannot serve
/// falls back to a neutral color instead of panicking.
pub(super) fn degree_color(degree: i32) -> &'static str {
    let class = degree.rem_euclid(NUM_DEGREES) as usize;
    DEGREE_PALETTE
        .get(class)
        .copied()
        .unwrap_or(FALLBACK_NOTE_COLOR)
}

fn draw_glyph(svg: &mut SvgBuilder, accidental: Accidental, x: f64, y: f64, color: &str) -> bool {
    match accidental {
        Accidental::Natural => {
            svg.circle(x, y, NOTE_SIZE, color);
            true
        }
        Accidental::Sharp => {
            svg.polygon(
                &[
                    (x - NOTE_SIZE, y - NOTE_SIZE),
                    (x - NOTE_SIZE, y + NOTE_SIZE),
                    (x + NOTE_SIZE, y),
                ],
                color,
            );
            true
        }
        _ => false,
    }
}

/// Draw every note of a voice relative to `(origin_x, origin_y)`, the
/// bottom-left corner of the voice's staff block. Degrees grow upward,
/// time grows rightward.
pub(super) fn render_notes(
    svg: &mut SvgBuilder,
    notes: &[Note],
    origin_x: f64,
    origin_y: f64,
    voice: usize,
    policy: AccidentalPolicy,
) -> Result<()> {
    for note in notes {
        let x = origin_x + note.time * WHOLE_NOTE_WIDTH;
        let y = origin_y - note.degree as f64 * HALF_STAFF_SPACE;
        let color = degree_color(note.degree);

        if !draw_glyph(svg, note.accidental, x, y, color) {
            match policy {
                AccidentalPolicy::Strict => {
                    return Err(RenderError::UnsupportedAccidental {
                        voice,
                        accidental: note.accidental,
                    });
                }
                AccidentalPolicy::Skip => {}
            }
        }
    }
    Ok(())
}
