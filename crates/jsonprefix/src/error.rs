use thiserror::Error;

/// Where and why an incremental scan stopped.
///
/// A halt is never returned as an error: the fields resolved before it stay in
/// the [`PartialObject`](crate::PartialObject) and the halt is kept only for
/// inspection through [`PartialObject::halt`](crate::PartialObject::halt).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} at offset {offset}")]
pub struct Halt {
    /// Byte offset into the buffer where the scan gave up.
    pub offset: usize,
    /// What the scan was looking at.
    pub reason: HaltReason,
}

impl Halt {
    pub(crate) fn new(offset: usize, reason: HaltReason) -> Self {
        Self { offset, reason }
    }
}

/// The position in the object grammar where the scan could not proceed.
///
/// Truncated and malformed input are deliberately not told apart: while a
/// model is still streaming, the two usually look the same.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The buffer was empty.
    #[error("empty input")]
    EmptyInput,
    /// The first non-whitespace character was not `{`.
    #[error("input is not an object")]
    NotAnObject,
    /// A character that cannot start a key or value.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// The key's closing quote has not been seen yet.
    #[error("truncated key")]
    TruncatedKey,
    /// A key without a following `:`.
    #[error("expected ':' after key")]
    MissingColon,
    /// The buffer ends after a `:`.
    #[error("value not started")]
    MissingValue,
    /// The value's closing quote has not been seen yet.
    #[error("unterminated string")]
    UnterminatedString,
    /// The value is an object or array, which is never scanned incrementally.
    #[error("nested value")]
    NestedValue,
    /// A bare token that is not `true`, `false`, `null` or a number.
    #[error("invalid primitive")]
    InvalidPrimitive,
}
