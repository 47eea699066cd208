//! Unified error types for the LED strip compositor.
//!
//! Every check happens when a layout or service is constructed; the
//! per-tick render path is infallible. All variants are `Copy` so they
//! can be returned from `const`-friendly constructors without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible setup operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The LED layout table violates a layout invariant.
    Layout(LayoutError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// An LED carries both directions of an opposing pair
    /// (north/south, east/west, up/down).
    OpposingDirections { index: usize },
    /// The strip is too short to hold the fixed indicator slots.
    StripTooShort { len: usize, required: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpposingDirections { index } => {
                write!(f, "LED {index} has opposing direction flags")
            }
            Self::StripTooShort { len, required } => {
                write!(f, "strip has {len} LEDs, at least {required} required")
            }
        }
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
