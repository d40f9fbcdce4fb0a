//! Best-effort parser for prefixes of a JSON object.
//!
//! Overview
//! - A caller re-parses the whole buffer every time a model streams more of a
//!   tool-call argument object. Each call is independent; nothing is carried
//!   over from the previous, shorter buffer.
//! - When the buffer already is a complete, well-formed document it is handed
//!   to `serde_json` and returned as decoded. This is the common case once the
//!   stream has finished.
//! - Otherwise a single forward scan walks the top-level object, storing each
//!   scalar field as soon as it is unambiguous. The scan stops at the first
//!   position it cannot interpret and keeps whatever it resolved before that
//!   point. There is no backtracking beyond the scanners' local lookahead.
//!
//! Values
//! - Strings are scanned by [`string::scan_string`]. A string value with no
//!   acceptable closing quote yet is stored raw, as a provisional value, and
//!   ends the scan.
//! - `true`, `false`, `null` and numbers are scanned by
//!   [`primitive::scan_primitive`].
//! - Objects and arrays are never scanned; the scan stops in front of them and
//!   the field stays absent until the document is complete.
//!
//! # Examples
//!
//! ```rust
//! use jsonprefix::{ExpectedKeys, HaltReason, ParserOptions, PrefixParser, Value};
//!
//! let parser = PrefixParser::new(ParserOptions::default());
//! let keys = ExpectedKeys::from(["path", "lines", "content"]);
//! let fields = parser.parse(r#"{"path": "src/main.rs", "lines": 3, "content": "fn ma"#, &keys);
//!
//! assert_eq!(fields.get("path"), Some(&Value::String("src/main.rs".into())));
//! assert_eq!(fields.get("lines"), Some(&Value::Integer(3)));
//! assert_eq!(fields.get("content"), Some(&Value::String("fn ma".into())));
//! assert_eq!(fields.provisional(), Some("content"));
//! assert_eq!(fields.halt().map(|h| h.reason), Some(HaltReason::UnterminatedString));
//! ```

mod cursor;
mod escape_buffer;
mod primitive;
mod string;

use alloc::string::String;

use cursor::{Whitespace, peek};
use primitive::scan_primitive;
use string::{StringMode, extract_partial, scan_string};

use crate::{ExpectedKeys, Halt, HaltReason, Map, ParserOptions, PartialObject, Value};

/// Extracts the fields of a possibly truncated JSON object.
///
/// The parser holds nothing but its options; one instance can be shared
/// across threads and reused for any number of buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixParser {
    options: ParserOptions,
}

impl PrefixParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    ///
    /// ```
    /// use jsonprefix::{ParserOptions, PrefixParser};
    ///
    /// let options = ParserOptions { partial_strings: false, ..ParserOptions::default() };
    /// assert_eq!(PrefixParser::new(options).options(), &options);
    /// assert!(PrefixParser::default().options().complete_fast_path);
    /// ```
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `buffer` and reports the best value currently available for
    /// every key in `keys`.
    ///
    /// Never fails. Anything that cannot be interpreted yet is reported as
    /// absent, and the stopping point is available from
    /// [`PartialObject::halt`].
    #[must_use]
    pub fn parse(&self, buffer: &str, keys: &ExpectedKeys) -> PartialObject {
        let mut fields = PartialObject::absent(keys);
        if buffer.is_empty() {
            fields.set_halt(Halt::new(0, HaltReason::EmptyInput));
            return fields;
        }

        let ws = Whitespace::new(self.options.allow_unicode_whitespace);
        let open = ws.skip(buffer, 0);
        if peek(buffer, open) != Some('{') {
            fields.set_halt(Halt::new(open, HaltReason::NotAnObject));
            return fields;
        }

        if self.options.complete_fast_path {
            if let Some(document) = decode_complete(buffer) {
                tracing::debug!(fields = document.len(), "decoded complete document");
                return PartialObject::complete(document, keys);
            }
        }

        if let Err(halt) = self.scan(buffer, open + 1, ws, &mut fields) {
            tracing::debug!(
                offset = halt.offset,
                reason = %halt.reason,
                resolved = fields.resolved_count(),
                "incremental scan halted"
            );
            fields.set_halt(halt);
        }
        fields
    }

    /// The incremental scan over the object's members, starting just past
    /// the opening brace.
    fn scan(
        &self,
        buf: &str,
        mut pos: usize,
        ws: Whitespace,
        fields: &mut PartialObject,
    ) -> Result<(), Halt> {
        loop {
            pos = ws.skip(buf, pos);
            match peek(buf, pos) {
                None => return Ok(()),
                Some('}' | ',') => {
                    pos += 1;
                    continue;
                }
                Some('"') => {}
                Some(c) => return Err(Halt::new(pos, HaltReason::UnexpectedCharacter(c))),
            }

            let key = scan_string(buf, pos, StringMode::Key, ws)
                .ok_or_else(|| Halt::new(pos, HaltReason::TruncatedKey))?;

            pos = ws.skip(buf, key.end);
            if peek(buf, pos) != Some(':') {
                return Err(Halt::new(pos, HaltReason::MissingColon));
            }

            pos = ws.skip(buf, pos + 1);
            let Some(first) = peek(buf, pos) else {
                return Err(Halt::new(pos, HaltReason::MissingValue));
            };

            match first {
                '"' => {
                    let Some(s) = scan_string(buf, pos, StringMode::Value, ws) else {
                        self.store_partial(buf, pos, &key.value, fields);
                        return Err(Halt::new(pos, HaltReason::UnterminatedString));
                    };
                    store(fields, &key.value, Value::String(s.value));
                    pos = s.end;
                }
                '{' | '[' => return Err(Halt::new(pos, HaltReason::NestedValue)),
                't' | 'f' | 'n' | '-' | '0'..='9' => {
                    let p = scan_primitive(buf, pos, ws)
                        .ok_or_else(|| Halt::new(pos, HaltReason::InvalidPrimitive))?;
                    store(fields, &key.value, p.value);
                    pos = p.end;
                }
                c => return Err(Halt::new(pos, HaltReason::UnexpectedCharacter(c))),
            }
        }
    }

    fn store_partial(&self, buf: &str, pos: usize, key: &str, fields: &mut PartialObject) {
        if !self.options.partial_strings {
            return;
        }
        let Some(partial) = extract_partial(buf, pos) else {
            return;
        };
        if fields.resolve_provisional(key, Value::String(partial.into())) {
            tracing::trace!(key = %key, len = partial.len(), "stored provisional string");
        }
    }
}

fn store(fields: &mut PartialObject, key: &str, value: Value) {
    if fields.resolve(key, value) {
        tracing::trace!(key = %key, "resolved field");
    }
}

/// Strictly decodes the whole buffer, or `None` if it is not a complete JSON
/// object.
fn decode_complete(buffer: &str) -> Option<Map> {
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(buffer).ok()?;
    Some(
        document
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect(),
    )
}
