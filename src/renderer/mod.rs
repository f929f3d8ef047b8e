//! Score renderer — converts a score of degree-based voices into SVG.
//!
//! Each voice is normalized so its lowest note sits in the first octave
//! band, laid out as a stack of octave staves, and drawn below the
//! previous voice with a fixed gap. The output canvas is sized to the
//! drawn content plus a fixed margin.

mod constants;
mod svg_builder;
mod layout;
mod staff;
mod notes;

use crate::error::{RenderError, Result};
use crate::model::Score;
use constants::*;
use svg_builder::SvgBuilder;
use layout::layout_voice;
use staff::render_staves;
use notes::render_notes;

/// What to do when a note carries an accidental the glyph step cannot
/// draw (anything other than natural or sharp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccidentalPolicy {
    /// Fail the render with [`RenderError::UnsupportedAccidental`].
    #[default]
    Strict,
    /// Draw nothing for that note and continue.
    Skip,
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub accidental_policy: AccidentalPolicy,
    /// Treat a score with zero voices as an error instead of producing an
    /// empty canvas.
    pub fail_on_empty_score: bool,
}

/// Render a score into a complete SVG string.
///
/// Pure function: the input score is never mutated, and every call uses
/// its own drawing surface. Voices are stacked top to bottom in array
/// order; a voice with no notes is an error.
pub fn render_score_to_svg(score: &Score, options: &RenderOptions) -> Result<String> {
    if score.voices.is_empty() && options.fail_on_empty_score {
        return Err(RenderError::EmptyScore);
    }

    let mut svg = SvgBuilder::new(CANVAS_MARGIN);
    let mut y = 0.0_f64;

    for (index, voice) in score.voices.iter().enumerate() {
        let voice = voice
            .normalized()
            .ok_or(RenderError::EmptyVoice(index))?;
        let block = layout_voice(&voice.notes);

        // Staves overhang the note span so edge notes are not clipped.
        render_staves(
            &mut svg,
            0.0,
            y,
            block.num_staves,
            block.width + 2.0 * EDGE_NOTE_PADDING,
        );
        // Notes are placed from the block's bottom-left corner, inset by
        // the edge padding; degrees grow upward from there.
        render_notes(
            &mut svg,
            &voice.notes,
            EDGE_NOTE_PADDING,
            y + block.height,
            index,
            options.accidental_policy,
        )?;

        y += block.height + VOICE_GAP;
    }

    Ok(svg.build())
}
