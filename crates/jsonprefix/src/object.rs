//! The result mapping handed back for every parsed buffer.
use alloc::{string::String, vec::Vec};

use crate::{ExpectedKeys, Halt, Map, Value};

/// How the fields of a [`PartialObject`] were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum ParseState {
    /// The buffer was not a complete document; fields come from the
    /// incremental scan and unresolved ones are absent.
    Incremental,
    /// The buffer was a complete, well-formed document and was decoded as is.
    Complete,
}

/// Field name to value mapping extracted from a (possibly truncated) JSON
/// object.
///
/// After an incremental scan the mapping has exactly the expected keys, in
/// expected order, each either resolved or absent (`None`). After a complete
/// document parse it holds exactly the document's keys, expected ones first.
///
/// ```
/// use jsonprefix::{parse_partial_object, ExpectedKeys, Value};
///
/// let keys = ExpectedKeys::from(["path", "content"]);
/// let fields = parse_partial_object(r#"{"path": "a", "content": "#, &keys);
/// assert_eq!(fields.get("path"), Some(&Value::String("a".into())));
/// assert!(!fields.is_resolved("content"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PartialObject {
    fields: Vec<(String, Option<Value>)>,
    state: ParseState,
    provisional: Option<usize>,
    halt: Option<Halt>,
}

impl PartialObject {
    /// Every expected key, all absent.
    pub(crate) fn absent(keys: &ExpectedKeys) -> Self {
        Self {
            fields: keys.iter().map(|k| (String::from(k), None)).collect(),
            state: ParseState::Incremental,
            provisional: None,
            halt: None,
        }
    }

    /// The decoded document, expected keys first in expected order, then the
    /// remaining keys in document map order.
    pub(crate) fn complete(document: Map, keys: &ExpectedKeys) -> Self {
        let mut fields: Vec<_> = document.into_iter().map(|(k, v)| (k, Some(v))).collect();
        fields.sort_by_key(|(k, _)| keys.position(k).unwrap_or(usize::MAX));
        Self {
            fields,
            state: ParseState::Complete,
            provisional: None,
            halt: None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<(usize, &mut Option<Value>)> {
        self.fields
            .iter_mut()
            .enumerate()
            .find(|(_, (k, _))| k == key)
            .map(|(i, (_, v))| (i, v))
    }

    /// Stores `value` under `key` if the key is expected and still absent.
    /// Returns whether the value was stored.
    pub(crate) fn resolve(&mut self, key: &str, value: Value) -> bool {
        match self.slot_mut(key) {
            Some((_, slot)) if slot.is_none() => {
                *slot = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Like [`resolve`](Self::resolve), but marks the field as a best-effort
    /// value taken from a truncated string.
    pub(crate) fn resolve_provisional(&mut self, key: &str, value: Value) -> bool {
        match self.slot_mut(key) {
            Some((index, slot)) if slot.is_none() => {
                *slot = Some(value);
                self.provisional = Some(index);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_halt(&mut self, halt: Halt) {
        self.halt = Some(halt);
    }

    /// The resolved value for `key`, or `None` if the key is absent or
    /// unknown.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether `key` currently has a value.
    #[must_use]
    pub fn is_resolved(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates `(key, value)` pairs in order, absent fields as `None`.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Option<&Value>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Iterates the keys in order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Number of keys, resolved or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the mapping has no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of keys that have a value.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.fields.iter().filter(|(_, v)| v.is_some()).count()
    }

    /// How the mapping was produced.
    #[must_use]
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// The key whose value is a truncated string stored best-effort, if any.
    ///
    /// A provisional value is the raw text received so far, escape sequences
    /// untouched, and will change on the next re-parse.
    #[must_use]
    pub fn provisional(&self) -> Option<&str> {
        self.provisional
            .and_then(|i| self.fields.get(i))
            .map(|(k, _)| k.as_str())
    }

    /// Where the incremental scan stopped, if it stopped before the end of
    /// the buffer or never started.
    #[must_use]
    pub fn halt(&self) -> Option<&Halt> {
        self.halt.as_ref()
    }

    /// Collects the resolved fields into an object value, dropping absent
    /// ones.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(
            self.fields
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        )
    }
}

impl IntoIterator for PartialObject {
    type Item = (String, Option<Value>);
    type IntoIter = alloc::vec::IntoIter<(String, Option<Value>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Serializes as a JSON object in key order, absent fields as `null`.
#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for PartialObject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
