//! Decoding of the four hex digits of a `\uXXXX` escape.
//!
//! The [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit. Combining surrogate
//! halves into a `char` is left to the string scanner, which can see whether a
//! second escape follows.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeError {
    #[error("invalid unicode escape character '{0}'")]
    InvalidDigit(char),
}

/// Accumulates up to four hexadecimal digits into a UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one hex digit.
    ///
    /// Returns `Ok(None)` while fewer than four digits have been seen, and
    /// `Ok(Some(unit))` on the fourth, after which the buffer is reset.
    pub fn feed(&mut self, c: char) -> Result<Option<u16>, EscapeError> {
        let d = Self::hex_val(c).ok_or(EscapeError::InvalidDigit(c))?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}

/// Decodes the four hex digits at `pos`, or `None` if fewer than four remain
/// or one of them is not a hex digit.
pub(crate) fn read_hex4(buf: &str, pos: usize) -> Option<u16> {
    let digits = buf.get(pos..pos + 4)?;
    let mut acc = UnicodeEscapeBuffer::new();
    let mut unit = None;
    for c in digits.chars() {
        unit = acc.feed(c).ok()?;
    }
    unit
}
