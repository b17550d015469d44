//! Error type for Newick parsing.

use thiserror::Error;

/// Error encountered while parsing a Newick string.
///
/// Carries the byte position where parsing stopped and a short snippet of
/// the surrounding text, so messages locate the problem in long inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at position {position}, near {context:?}")]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// Byte offset into the input where the problem was detected.
    pub position: usize,
    /// Snippet of the input around `position`.
    pub context: String,
}

impl FormatError {
    pub(crate) fn new(kind: FormatErrorKind, position: usize, context: String) -> Self {
        FormatError {
            kind,
            position,
            context,
        }
    }
}

/// The kinds of malformation a Newick string can exhibit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatErrorKind {
    /// Input ended before the tree was complete.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A `)` or `,` appeared with no open subtree to close or continue.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// Content followed the completed tree without a `;` in between.
    #[error("missing ';' terminator")]
    MissingTerminator,

    /// Text after `:` did not parse as a number.
    #[error("invalid distance {0:?}")]
    InvalidDistance(String),

    /// A distance parsed as a number but is negative or not finite.
    #[error("distance must be non-negative and finite, got {0}")]
    NegativeDistance(f64),

    /// Text inside `[...]` did not parse as an unsigned integer.
    #[error("invalid bootstrap value {0:?}")]
    InvalidBootstrap(String),

    /// A `[` was opened but its closing `]` never came.
    #[error("unterminated bootstrap annotation")]
    UnterminatedBootstrap,
}
