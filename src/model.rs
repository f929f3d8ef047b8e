//! Data model for a score expressed in scale degrees.
//!
//! These structures are what the ingestion layer hands to the renderer:
//! a score is an ordered list of voices, each an ordered list of notes.
//! The JSON representation (via serde) is the exchange format used across
//! process and FFI boundaries.

use serde::{Deserialize, Serialize};

/// Number of scale degrees in one octave band (one staff).
pub const NUM_DEGREES: i32 = 7;

/// A complete score: voices in top-to-bottom display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Voices, rendered as vertically stacked staff blocks.
    pub voices: Vec<Voice>,
}

/// One independent line of notes, rendered on its own stack of staves.
///
/// Note order within a voice carries no meaning; horizontal position is
/// driven entirely by each note's `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub notes: Vec<Note>,
}

/// A single musical event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Scale position. Not constrained to one octave: `degree = octave * 7
    /// + step`, so negative values and values above 6 are valid and encode
    /// octave transposition.
    pub degree: i32,
    /// Horizontal position in whole-note units. Must be >= 0.
    pub time: f64,
    /// Which glyph to draw for the note.
    pub accidental: Accidental,
}

/// Accidental attached to a note, with MusicXML spellings on the wire.
///
/// The renderer draws only `Natural` and `Sharp`; the remaining variants
/// can arrive from ingestion and are handled per the configured
/// [`AccidentalPolicy`](crate::AccidentalPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    FlatFlat,
}

impl Accidental {
    /// MusicXML-style name, as used in the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Natural => "natural",
            Accidental::Sharp => "sharp",
            Accidental::Flat => "flat",
            Accidental::DoubleSharp => "double-sharp",
            Accidental::FlatFlat => "flat-flat",
        }
    }
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Score {
    /// Create a new empty score.
    pub fn new() -> Self {
        Self { voices: Vec::new() }
    }

    /// Total number of notes across all voices.
    pub fn note_count(&self) -> usize {
        self.voices.iter().map(|v| v.notes.len()).sum()
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Voice {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Return a copy of this voice with degrees shifted so the lowest note
    /// lies within the first octave band (`0 <= min(degree) < 7`), keeping
    /// every note's octave position relative to the others.
    ///
    /// Pure: the receiver is left untouched. Idempotent: normalizing an
    /// already-normalized voice computes a shift of zero. Returns `None`
    /// for a voice with no notes, since the shift is undefined there.
    pub fn normalized(&self) -> Option<Voice> {
        let min_degree = self.notes.iter().map(|n| n.degree).min()?;
        // Floored division keeps negative degrees shifting downward.
        let shift = min_degree.div_euclid(NUM_DEGREES) * NUM_DEGREES;
        Some(Voice {
            notes: self
                .notes
                .iter()
                .map(|n| Note {
                    degree: n.degree - shift,
                    ..*n
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(degree: i32, time: f64) -> Note {
        Note {
            degree,
            time,
            accidental: Accidental::Natural,
        }
    }

    #[test]
    fn normalized_shifts_lowest_note_into_first_band() {
        let voice = Voice::new(vec![natural(9, 0.0), natural(16, 1.0)]);
        let normalized = voice.normalized().unwrap();
        assert_eq!(normalized.notes[0].degree, 2);
        assert_eq!(normalized.notes[1].degree, 9);
    }

    #[test]
    fn normalized_handles_negative_degrees() {
        // shift = floor(-3 / 7) * 7 = -7, so -3 maps to 4
        let voice = Voice::new(vec![natural(-3, 0.0)]);
        let normalized = voice.normalized().unwrap();
        assert_eq!(normalized.notes[0].degree, 4);
    }

    #[test]
    fn normalized_is_idempotent() {
        let voice = Voice::new(vec![natural(-10, 0.0), natural(3, 0.5), natural(22, 2.0)]);
        let once = voice.normalized().unwrap();
        let twice = once.normalized().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn normalized_does_not_mutate_the_original() {
        let voice = Voice::new(vec![natural(9, 0.0)]);
        let _ = voice.normalized();
        assert_eq!(voice.notes[0].degree, 9);
    }

    #[test]
    fn normalized_keeps_single_degree_voices_in_band() {
        for degree in [-14, -1, 0, 6, 7, 20] {
            let voice = Voice::new(vec![natural(degree, 0.0)]);
            let normalized = voice.normalized().unwrap();
            let d = normalized.notes[0].degree;
            assert!((0..NUM_DEGREES).contains(&d), "degree {degree} mapped to {d}");
        }
    }

    #[test]
    fn normalized_returns_none_for_empty_voice() {
        assert_eq!(Voice::new(Vec::new()).normalized(), None);
    }

    #[test]
    fn accidental_serializes_with_musicxml_spelling() {
        let json = serde_json::to_string(&Accidental::DoubleSharp).unwrap();
        assert_eq!(json, "\"double-sharp\"");
    }
}
