//! Shared constants for the Pyogi renderer (all in SVG user units).

use crate::model::NUM_DEGREES;

// ── Horizontal scale ────────────────────────────────────────────────
pub(super) const WHOLE_NOTE_WIDTH: f64 = 100.0; // one whole-note time unit
pub(super) const EDGE_NOTE_PADDING: f64 = 2.0 * STAFF_SPACE_HEIGHT;

// ── Staff dimensions ────────────────────────────────────────────────
pub(super) const STAFF_SPACE_HEIGHT: f64 = 15.0; // one full degree step
pub(super) const HALF_STAFF_SPACE: f64 = STAFF_SPACE_HEIGHT / 2.0;
pub(super) const STAFF_HEIGHT: f64 = NUM_DEGREES as f64 * HALF_STAFF_SPACE;
pub(super) const VOICE_GAP: f64 = 2.0 * STAFF_HEIGHT; // between voice blocks
pub(super) const THICK_LINE_WIDTH: f64 = 4.0; // octave-boundary lines

// ── Note glyphs ─────────────────────────────────────────────────────
pub(super) const NOTE_SIZE: f64 = 10.0; // circle radius / triangle half-height

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const CANVAS_MARGIN: f64 = 50.0; // around the content bounding box

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const STAFF_COLOR: &str = "rgb(127,127,127)";
pub(super) const STAFF_OPACITY: f64 = 0.5;
pub(super) const FALLBACK_NOTE_COLOR: &str = "black";
