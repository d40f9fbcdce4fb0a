use crate::{
    Value,
    parser::cursor::{Scanned, Whitespace},
};

/// Scans a bare token (`true`, `false`, `null` or a number) starting at
/// `start`.
///
/// The token runs up to the next `,`, `}` or whitespace, or to the end of the
/// buffer. A token cut off by the end of the buffer is taken at face value, so
/// `12` parses even if `123` is still streaming, while `tru` does not parse at
/// all.
pub(crate) fn scan_primitive(buf: &str, start: usize, ws: Whitespace) -> Option<Scanned<Value>> {
    let rest = buf.get(start..)?;
    let len = rest
        .find(|c: char| c == ',' || c == '}' || ws.is(c))
        .unwrap_or(rest.len());
    let value = classify(&rest[..len])?;
    Some(Scanned::new(value, start + len))
}

fn classify(token: &str) -> Option<Value> {
    match token {
        "true" => Some(Value::Boolean(true)),
        "false" => Some(Value::Boolean(false)),
        "null" => Some(Value::Null),
        _ if is_number_lexeme(token) => classify_integer(token).or_else(|| {
            token
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Number)
        }),
        _ => None,
    }
}

/// An integer literal that `serde_json` would decode as `u64` or `i64`.
/// Everything else, `-0` included, is left to the float parse.
fn classify_integer(token: &str) -> Option<Value> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.starts_with('-') {
        token.parse::<i64>().ok().filter(|&n| n != 0).map(Value::from)
    } else {
        token.parse::<u64>().ok().map(Value::from)
    }
}

/// `f64::from_str` also accepts `inf`, `NaN` and friends; JSON does not.
fn is_number_lexeme(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E'))
}
