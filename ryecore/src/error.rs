//! Errors raised while deciding where the button goes.

use crate::geometry::Viewport;
use thiserror::Error;

/// Which input has not been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unready {
    Pointer,
    Viewport,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EscapeError {
    /// Pointer or viewport has not been measured. Callers skip the tick.
    #[error("{0:?} not observed yet")]
    NotReady(Unready),
    /// Every circle sample fell outside the margin-inset viewport.
    #[error("no placement on radius {radius} fits {viewport:?} with margin {margin}")]
    NoValidPlacement {
        radius: f64,
        viewport: Viewport,
        margin: f64,
    },
}

pub type Result<T> = std::result::Result<T, EscapeError>;
