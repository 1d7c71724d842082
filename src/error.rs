use core::fmt;

/// A structured error code identifying why an operation was rejected.
///
/// Only contract violations are errors. Soft misses (absent keys, a cursor past either end,
/// dead-end paths) are reported through `Option` and never produce an `ErrorCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A raw sort mode did not name a known comparison mode.
    InvalidSortFlags,
    /// A snapshot used to build a collection was not a map or a list.
    NotAMapping,
    /// No auto-increment key is left because `i64::MAX` is already a key.
    KeySpaceExhausted,

    /// A bracket path was empty.
    EmptyPath,
    /// A bracket path had an empty root or an empty `[]` segment.
    EmptySegment,
    /// A `[` was never closed.
    UnterminatedBracket,
    /// A `[` or `]` appeared where a segment or a new bracket was expected.
    UnexpectedCharacter,
}

/// An error with a stable code and the byte offset where it was detected.
///
/// Offsets are meaningful for path parsing errors. For every other code, `offset` is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayError {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input where the error was detected (0 when not applicable).
    pub offset: usize,
}

impl ArrayError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Construct a usage error that has no input position.
    #[inline]
    #[must_use]
    pub const fn usage(code: ErrorCode) -> Self {
        Self::new(code, 0)
    }

    /// Returns true iff this error came from parsing a bracket path.
    #[inline]
    #[must_use]
    pub const fn is_path_error(self) -> bool {
        matches!(
            self.code,
            ErrorCode::EmptyPath
                | ErrorCode::EmptySegment
                | ErrorCode::UnterminatedBracket
                | ErrorCode::UnexpectedCharacter
        )
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.code {
            ErrorCode::InvalidSortFlags => "invalid sort type, sort type must be a known integer mode",
            ErrorCode::NotAMapping => "collection input must be a map or a list",
            ErrorCode::KeySpaceExhausted => "cannot add element, the next auto-increment key is out of range",

            ErrorCode::EmptyPath => "path is empty",
            ErrorCode::EmptySegment => "path segment is empty",
            ErrorCode::UnterminatedBracket => "unterminated `[`",
            ErrorCode::UnexpectedCharacter => "unexpected bracket",
        };

        if self.is_path_error() {
            write!(f, "path parse failed at {}: {msg}", self.offset)
        } else {
            write!(f, "{msg}")
        }
    }
}

impl std::error::Error for ArrayError {}
