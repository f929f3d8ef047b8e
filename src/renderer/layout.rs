//! Layout computation — pure geometry for one voice's staff block.
//!
//! No drawing happens here; `mod.rs` feeds these measurements to the staff
//! and note emitters. Callers must hand in normalized, non-empty voices
//! (see [`Voice::normalized`](crate::model::Voice::normalized)).

use crate::model::{Note, NUM_DEGREES};
use super::constants::*;

/// Geometry of one voice's stack of staves. Derived per render call,
/// never persisted.
pub(super) struct VoiceBlock {
    /// Number of octave staves needed to cover the voice's highest degree.
    pub(super) num_staves: usize,
    /// Width of the note span, excluding edge padding.
    pub(super) width: f64,
    /// Total height, always a whole multiple of `STAFF_HEIGHT`.
    pub(super) height: f64,
}

pub(super) fn layout_voice(notes: &[Note]) -> VoiceBlock {
    let max_degree = notes.iter().map(|n| n.degree).max().unwrap_or(0);
    let max_time = notes.iter().map(|n| n.time).fold(0.0_f64, f64::max);

    let num_staves = (max_degree.div_euclid(NUM_DEGREES) + 1) as usize;

    VoiceBlock {
        num_staves,
        width: max_time * WHOLE_NOTE_WIDTH,
        height: num_staves as f64 * STAFF_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Accidental;

    fn natural(degree: i32, time: f64) -> Note {
        Note {
            degree,
            time,
            accidental: Accidental::Natural,
        }
    }

    #[test]
    fn one_staff_covers_the_first_octave_band() {
        for degree in 0..NUM_DEGREES {
            let block = layout_voice(&[natural(degree, 0.0)]);
            assert_eq!(block.num_staves, 1, "degree {degree}");
        }
    }

    #[test]
    fn staff_count_grows_with_max_degree() {
        let mut previous = 0;
        for degree in 0..30 {
            let block = layout_voice(&[natural(0, 0.0), natural(degree, 1.0)]);
            assert!(block.num_staves >= previous);
            previous = block.num_staves;
        }
        assert_eq!(layout_voice(&[natural(7, 0.0)]).num_staves, 2);
        assert_eq!(layout_voice(&[natural(14, 0.0)]).num_staves, 3);
    }

    #[test]
    fn height_is_a_multiple_of_staff_height() {
        let block = layout_voice(&[natural(3, 0.0), natural(16, 2.0)]);
        assert_eq!(block.num_staves, 3);
        assert_eq!(block.height, 3.0 * STAFF_HEIGHT);
    }

    #[test]
    fn width_follows_the_latest_note() {
        let block = layout_voice(&[natural(0, 0.0), natural(2, 2.5), natural(4, 1.0)]);
        assert_eq!(block.width, 2.5 * WHOLE_NOTE_WIDTH);
    }
}
