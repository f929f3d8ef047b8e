//! Error types for the rendering engine.

use crate::model::Accidental;

/// Result alias carrying [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while rendering a score.
///
/// The engine has no recovery logic of its own; every variant propagates to
/// the caller, which decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A voice with zero notes reached normalization or layout. The min/max
    /// degree scans are undefined on an empty voice, so this fails up front
    /// instead of panicking mid-layout.
    #[error("voice {0} contains no notes")]
    EmptyVoice(usize),

    /// An accidental the glyph step cannot draw, raised under
    /// [`AccidentalPolicy::Strict`](crate::AccidentalPolicy::Strict).
    #[error("voice {voice}: unsupported accidental `{accidental}`")]
    UnsupportedAccidental {
        voice: usize,
        accidental: Accidental,
    },

    /// A score with zero voices, raised only when
    /// [`RenderOptions::fail_on_empty_score`](crate::RenderOptions) is set;
    /// by default an empty score renders an empty canvas.
    #[error("score contains no voices")]
    EmptyScore,
}
