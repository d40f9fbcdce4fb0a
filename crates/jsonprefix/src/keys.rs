//! The ordered set of field names a caller expects to find.
use alloc::{string::String, vec::Vec};

/// An ordered, de-duplicated list of top-level field names.
///
/// Usually derived once from a tool's argument schema and reused for every
/// re-parse of the growing buffer. A name listed twice keeps its first
/// position.
///
/// ```
/// use jsonprefix::ExpectedKeys;
///
/// let keys: ExpectedKeys = ["path", "content", "path"].into_iter().collect();
/// assert_eq!(keys.iter().collect::<Vec<_>>(), ["path", "content"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedKeys {
    names: Vec<String>,
}

impl ExpectedKeys {
    /// Builds the set from any sequence of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys = Self::default();
        for name in names {
            keys.push(name.into());
        }
        keys
    }

    fn push(&mut self, name: String) {
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Whether `name` is one of the expected fields.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name` in the expected order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterates the names in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no field is expected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpectedKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&[&str]> for ExpectedKeys {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ExpectedKeys {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}
