// src/error.rs

//! Error types for the mask generation pipeline.

use thiserror::Error;

/// All fatal conditions a generation run can hit.
///
/// Degenerate-but-valid inputs (for example a zero-extent gradient box) are
/// handled by fallback in the component concerned and never surface here.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("malformed path data: {0}")]
    MalformedPath(String),
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),
    #[error("invalid color {0:?}: expected #RRGGBB")]
    Format(String),
    #[error("buffer holds {actual} bytes but {expected} are required (width x height x 4)")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("failed to compress image data: {0}")]
    Io(#[from] std::io::Error),
}
