//! Quoted-string scanning for keys and values.
//!
//! Model output frequently pastes code into string values, and that code is
//! full of quotes and braces. A quote only ends the string when what follows
//! it looks like the rest of the object: a `:` for keys, and a `,` or `}` for
//! values, the latter only once every `{` seen inside the string has been
//! matched by a `}`. This is a heuristic, not a grammar. A value that contains
//! an unbalanced `{` and then legitimately ends in `",` is read as unterminated.
use alloc::string::String;

use crate::parser::{
    cursor::{Scanned, Whitespace, peek},
    escape_buffer::read_hex4,
};

/// Which closing-quote rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringMode {
    Key,
    Value,
}

/// Scans the quoted string starting at `start`, decoding escapes.
///
/// Returns `None` when `buf[start]` is not a quote, when no quote in the rest
/// of the buffer qualifies as the closing one, or when an escape sequence is
/// malformed or cut off.
pub(crate) fn scan_string(
    buf: &str,
    start: usize,
    mode: StringMode,
    ws: Whitespace,
) -> Option<Scanned<String>> {
    if buf.as_bytes().get(start) != Some(&b'"') {
        return None;
    }

    let mut out = String::new();
    let mut depth: isize = 0;
    let mut pos = start + 1;

    while let Some(c) = peek(buf, pos) {
        let next = pos + c.len_utf8();
        match c {
            '\\' => {
                let (decoded, end) = scan_escape(buf, next)?;
                out.push(decoded);
                pos = end;
                continue;
            }
            '"' if closes(buf, next, mode, depth, ws) => {
                return Some(Scanned::new(out, next));
            }
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        out.push(c);
        pos = next;
    }

    None
}

/// Decides whether the unescaped quote ending just before `after` closes the
/// string.
fn closes(buf: &str, after: usize, mode: StringMode, depth: isize, ws: Whitespace) -> bool {
    let Some(follow) = peek(buf, ws.skip(buf, after)) else {
        // Last character of the buffer, or only whitespace after it.
        return true;
    };
    match mode {
        StringMode::Key => follow == ':',
        StringMode::Value => depth == 0 && matches!(follow, ',' | '}'),
    }
}

/// Decodes the escape whose backslash ends just before `pos`. Returns the
/// character and the offset after the escape.
fn scan_escape(buf: &str, pos: usize) -> Option<(char, usize)> {
    let decoded = match peek(buf, pos)? {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'u' => return scan_unicode_escape(buf, pos + 1),
        _ => return None,
    };
    Some((decoded, pos + 1))
}

/// Decodes the hex digits of a `\u` escape starting at `pos`, pairing a high
/// surrogate with an immediately following low-surrogate escape.
fn scan_unicode_escape(buf: &str, pos: usize) -> Option<(char, usize)> {
    let unit = read_hex4(buf, pos)?;
    let end = pos + 4;

    if !(0xD800..0xDC00).contains(&unit) {
        let c = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
        return Some((c, end));
    }

    let rest = buf[end..].as_bytes();
    if rest.len() < 6 && br"\u".starts_with(&rest[..rest.len().min(2)]) {
        // The low half may still be streaming.
        return None;
    }
    let low = match rest {
        [b'\\', b'u', ..] => read_hex4(buf, end + 2),
        _ => None,
    };
    if let Some(low @ 0xDC00..=0xDFFF) = low {
        let combined = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
        let c = char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
        return Some((c, end + 6));
    }

    Some((char::REPLACEMENT_CHARACTER, end))
}

/// Best-effort content of a value string that [`scan_string`] could not
/// close: everything after the opening quote, verbatim.
///
/// Escapes are left as received; a half-written escape is more useful to a
/// consumer rendering streamed text than a guess at its meaning. An opening
/// quote with nothing after it yields `None`, indistinguishable from a value
/// that has not started.
pub(crate) fn extract_partial(buf: &str, start: usize) -> Option<&str> {
    if buf.as_bytes().get(start) != Some(&b'"') {
        return None;
    }
    let rest = &buf[start + 1..];
    (!rest.is_empty()).then_some(rest)
}
