use alloc::string::String;

/// Errors raised while building glyphs, laying out a board or sampling it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bit was given a value other than 0 or 1.
    #[error("bit value must be 0 or 1, got {0}")]
    InvalidValue(u8),
    /// An index fell outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Spacing, padding or panel settings were rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The bitmap of a glyph cannot be split into rows of the declared width.
    #[error("glyph bitmap of {len} bits cannot be split into rows of width {width}")]
    InvalidGlyph { len: usize, width: usize },
    /// The input given to [crate::Board::load] could not be tokenized.
    #[error("malformed input at position {position}: {kind}")]
    MalformedInput { position: usize, kind: Malformed },
    /// No glyph in the dictionary declares this pattern.
    #[error("no glyph matches the pattern {0:?}")]
    GlyphNotFound(String),
}

/// The reason a board input could not be tokenized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// The escape marker was the last character of the input.
    TrailingEscape,
    /// A `[` was never closed by a `]`.
    UnclosedBracket,
}

impl core::fmt::Display for Malformed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Malformed::TrailingEscape => write!(f, "nothing left to escape"),
            Malformed::UnclosedBracket => write!(
                f,
                "missing closing bracket, escape a literal bracket with {}",
                crate::ESCAPE_MARKER
            ),
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
