//! Best-effort field extraction from prefixes of a JSON object.
//!
//! While a language model streams the arguments of a tool call, the text
//! received so far is a prefix of a JSON object such as
//! `{"path": "src/main.rs", "content": "fn main() {`. This crate answers, for
//! every such prefix, which of the fields the caller expects already have a
//! usable value.
//!
//! ```rust
//! use jsonprefix::{parse_partial_object, ExpectedKeys, Value};
//!
//! let keys = ExpectedKeys::from(["path", "content"]);
//!
//! let fields = parse_partial_object(r#"{"path": "//"#, &keys);
//! assert_eq!(fields.get("path"), Some(&Value::String("//".into())));
//! assert_eq!(fields.get("content"), None);
//!
//! let fields = parse_partial_object(r#"{"path": "a", "content": "b"}"#, &keys);
//! assert_eq!(fields.get("content"), Some(&Value::String("b".into())));
//! ```
//!
//! Parsing never fails. Whatever cannot be interpreted yet is reported as
//! absent, and the caller simply parses again once more text has arrived.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod keys;
mod object;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Halt, HaltReason};
pub use keys::ExpectedKeys;
pub use object::{ParseState, PartialObject};
pub use options::ParserOptions;
pub use parser::PrefixParser;
pub use value::{Array, Map, Value};

/// Parses `buffer` with [`ParserOptions::default`].
///
/// See [`PrefixParser::parse`].
#[must_use]
pub fn parse_partial_object(buffer: &str, keys: &ExpectedKeys) -> PartialObject {
    PrefixParser::default().parse(buffer, keys)
}
