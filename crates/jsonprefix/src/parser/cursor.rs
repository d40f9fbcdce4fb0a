/// A value recognized by one of the scanners, and the byte offset just past
/// it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scanned<T> {
    pub value: T,
    pub end: usize,
}

impl<T> Scanned<T> {
    pub fn new(value: T, end: usize) -> Self {
        Self { value, end }
    }
}

/// The whitespace predicate shared by the driver and the scanners.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Whitespace {
    unicode: bool,
}

impl Whitespace {
    pub const fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    #[inline]
    pub fn is(self, c: char) -> bool {
        if self.unicode {
            c.is_whitespace()
        } else {
            matches!(c, ' ' | '\t' | '\n' | '\r')
        }
    }

    /// Offset of the first non-whitespace character at or after `pos`, or the
    /// buffer length.
    pub fn skip(self, buf: &str, pos: usize) -> usize {
        buf.get(pos..)
            .and_then(|rest| rest.find(|c: char| !self.is(c)))
            .map_or(buf.len(), |i| pos + i)
    }
}

/// The character starting at `pos`.
#[inline]
pub(crate) fn peek(buf: &str, pos: usize) -> Option<char> {
    buf.get(pos..)?.chars().next()
}
