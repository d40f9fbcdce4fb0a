/// Configuration options for the prefix parser.
///
/// # Examples
///
/// ```rust
/// use jsonprefix::{ExpectedKeys, ParserOptions, PrefixParser};
///
/// let parser = PrefixParser::new(ParserOptions {
///     partial_strings: false,
///     ..Default::default()
/// });
/// let keys = ExpectedKeys::from(&["path"][..]);
/// let fields = parser.parse(r#"{"path": "src/ma"#, &keys);
/// assert!(fields.get("path").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to treat any Unicode whitespace as insignificant.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by RFC 8259: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009). The same
    /// predicate decides where a bare primitive token ends.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Whether to try decoding the buffer as a complete JSON document before
    /// falling back to the incremental scan.
    ///
    /// When the buffer is complete and well-formed the decoded object is
    /// returned as-is, including nested arrays and objects and any keys that
    /// were not expected. Disabling this forces every buffer through the
    /// incremental scan.
    ///
    /// # Default
    ///
    /// `true`
    pub complete_fast_path: bool,

    /// Whether a string value cut off by the end of the buffer is stored as a
    /// provisional value.
    ///
    /// The provisional value is the raw text after the opening quote, with
    /// escape sequences left untouched. When disabled, such a field stays
    /// absent until its closing quote arrives.
    ///
    /// # Default
    ///
    /// `true`
    pub partial_strings: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_unicode_whitespace: false,
            complete_fast_path: true,
            partial_strings: true,
        }
    }
}
