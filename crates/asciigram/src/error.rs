//! Error types for asciigram operations.
//!
//! This module provides the main error type [`AsciigramError`]. Diagram
//! construction itself is infallible; the only failure mode is a
//! malformed arrow label surfacing during rendering.

use thiserror::Error;

use asciigram_core::draw::ArrowLabelError;

/// The main error type for asciigram operations.
#[derive(Debug, Error)]
pub enum AsciigramError {
    /// An arrow label did not match the `<marker>:<text>` mini-syntax.
    #[error(transparent)]
    MalformedArrowLabel(#[from] ArrowLabelError),
}
