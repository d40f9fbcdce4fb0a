use alloc::{vec, vec::Vec};

use rstest::rstest;

use crate::{
    ExpectedKeys, Halt, HaltReason, ParseState, ParserOptions, PartialObject, PrefixParser, Value,
    parse_partial_object,
};

fn keys() -> ExpectedKeys {
    ExpectedKeys::from(["path", "content"])
}

fn fields(obj: &PartialObject) -> Vec<(&str, Option<&Value>)> {
    obj.iter().collect()
}

fn s(v: &str) -> Value {
    Value::String(v.into())
}

#[rstest]
#[case("")]
#[case("{")]
#[case("   ")]
#[case("[1, 2]")]
#[case(r#""path""#)]
#[case("null")]
#[case("  \n {  ")]
#[case(r#"{""#)]
#[case(r#"{"pa"#)]
#[case(r#"{"path""#)]
#[case(r#"{"path" "#)]
#[case(r#"{"path":"#)]
#[case(r#"{"path": "#)]
#[case(r#"{"path": ""#)]
#[case(r#"{"path": t"#)]
#[case(r#"{"path": {"#)]
#[case(r#"{"path": ["a""#)]
#[case(r#"{"path": x"#)]
#[case(r#"{path: 1}"#)]
fn all_absent(#[case] input: &str) {
    let obj = parse_partial_object(input, &keys());
    assert_eq!(fields(&obj), vec![("path", None), ("content", None)]);
    assert_eq!(obj.state(), ParseState::Incremental);
}

#[test]
fn empty_buffer() {
    let obj = parse_partial_object("", &keys());
    assert_eq!(obj.halt(), Some(&Halt::new(0, HaltReason::EmptyInput)));
}

#[test]
fn not_an_object() {
    let obj = parse_partial_object("  [", &keys());
    assert_eq!(obj.halt(), Some(&Halt::new(2, HaltReason::NotAnObject)));
}

#[test]
fn truncated_string_is_provisional() {
    let obj = parse_partial_object(r#"{"path": "//"#, &keys());
    assert_eq!(fields(&obj), vec![("path", Some(&s("//"))), ("content", None)]);
    assert_eq!(obj.provisional(), Some("path"));
    assert_eq!(obj.halt(), Some(&Halt::new(9, HaltReason::UnterminatedString)));
}

#[test]
fn embedded_braces_keep_the_string_open() {
    let input = r#"{"path": "// comment \nconst x = {"y": "z"}"#;
    let obj = parse_partial_object(input, &keys());
    assert_eq!(
        fields(&obj),
        vec![
            ("path", Some(&s(r#"// comment \nconst x = {"y": "z"}"#))),
            ("content", None)
        ]
    );
}

#[test]
fn embedded_braces_then_close() {
    let input = r#"{"path": "const x = {"y": "z"}", "content": "ok"#;
    let obj = parse_partial_object(input, &keys());
    assert_eq!(
        fields(&obj),
        vec![
            ("path", Some(&s(r#"const x = {"y": "z"}"#))),
            ("content", Some(&s("ok")))
        ]
    );
    assert_eq!(obj.provisional(), Some("content"));
}

#[test]
fn unbalanced_brace_closes_at_end_of_buffer() {
    let obj = parse_partial_object(r#"{"path": "x = {""#, &keys());
    assert_eq!(obj.get("path"), Some(&s("x = {")));
    assert_eq!(obj.provisional(), None);
    assert_eq!(obj.halt(), None);
}

#[test]
fn complete_document_uses_fast_path() {
    let obj = parse_partial_object(r#"{"path": "a", "content": "b"}"#, &keys());
    assert_eq!(fields(&obj), vec![("path", Some(&s("a"))), ("content", Some(&s("b")))]);
    assert_eq!(obj.state(), ParseState::Complete);
    assert_eq!(obj.halt(), None);
}

#[test]
fn value_not_started() {
    let obj = parse_partial_object(r#"{"path": "a", "content": "#, &keys());
    assert_eq!(fields(&obj), vec![("path", Some(&s("a"))), ("content", None)]);
    assert_eq!(obj.halt().map(|h| h.reason), Some(HaltReason::MissingValue));
}

#[test]
fn lone_opening_quote_is_absent_not_empty() {
    let obj = parse_partial_object(r#"{"path": "a", "content": ""#, &keys());
    assert_eq!(obj.get("content"), None);
    assert_eq!(obj.provisional(), None);
}

#[test]
fn partial_keeps_escapes_raw() {
    let obj = parse_partial_object(r#"{"content": "line\nnext\u00"#, &keys());
    assert_eq!(obj.get("content"), Some(&s(r"line\nnext\u00")));
}

#[test]
fn closed_string_is_unescaped() {
    let obj = parse_partial_object(r#"{"content": "line\nnext\tTab", "path"#, &keys());
    assert_eq!(obj.get("content"), Some(&s("line\nnext\tTab")));
    assert_eq!(obj.halt().map(|h| h.reason), Some(HaltReason::TruncatedKey));
}

#[rstest]
#[case(r#"{"n": 1, "#, Value::Integer(1))]
#[case(r#"{"n": -2.5}x"#, Value::Number(-2.5))]
#[case(r#"{"n": 12"#, Value::Integer(12))]
#[case(r#"{"n": 12."#, Value::Number(12.0))]
#[case(r#"{"n": 3e2 ,"#, Value::Number(300.0))]
#[case(r#"{"n": true"#, Value::Boolean(true))]
#[case(r#"{"n": false,"#, Value::Boolean(false))]
#[case(r#"{"n": null }"#, Value::Null)]
fn primitives(#[case] input: &str, #[case] expected: Value) {
    let obj = parse_partial_object(input, &ExpectedKeys::from(["n"]));
    assert_eq!(obj.get("n"), Some(&expected));
}

#[rstest]
#[case(r#"{"n": 9007199254740993}"#)]
#[case(r#"{"n": 9007199254740993, "#)]
fn integers_beyond_f64_precision(#[case] input: &str) {
    let obj = parse_partial_object(input, &ExpectedKeys::from(["n"]));
    assert_eq!(obj.get("n"), Some(&Value::Integer(9_007_199_254_740_993)));
    assert_eq!(obj.get("n").and_then(Value::as_i64), Some(9_007_199_254_740_993));
}

#[rstest]
#[case(r#"{"n": tru"#)]
#[case(r#"{"n": -"#)]
#[case(r#"{"n": 1e"#)]
#[case(r#"{"n": nan,"#)]
fn truncated_primitives_stay_absent(#[case] input: &str) {
    let obj = parse_partial_object(input, &ExpectedKeys::from(["n"]));
    assert_eq!(obj.get("n"), None);
    assert_eq!(obj.halt().map(|h| h.reason), Some(HaltReason::InvalidPrimitive));
}

#[test]
fn unknown_keys_are_skipped() {
    let input = r#"{"mode": "w", "n": 4, "path": "p", "extra": "#;
    let obj = parse_partial_object(input, &keys());
    assert_eq!(fields(&obj), vec![("path", Some(&s("p"))), ("content", None)]);
}

#[test]
fn nested_value_stops_the_scan() {
    let input = r#"{"path": "p", "meta": {"a": 1}, "content": "c""#;
    let obj = parse_partial_object(input, &keys());
    assert_eq!(fields(&obj), vec![("path", Some(&s("p"))), ("content", None)]);
    assert_eq!(obj.halt(), Some(&Halt::new(22, HaltReason::NestedValue)));
}

#[test]
fn nested_expected_value_only_via_fast_path() {
    let partial = parse_partial_object(r#"{"content": [1, 2"#, &keys());
    assert_eq!(partial.get("content"), None);

    let complete = parse_partial_object(r#"{"content": [1, 2]}"#, &keys());
    assert_eq!(
        complete.get("content"),
        Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
    );
    // The fast path reports the document, not the expected keys.
    assert_eq!(complete.keys().collect::<Vec<_>>(), ["content"]);
}

#[test]
fn first_occurrence_of_a_key_wins() {
    let obj = parse_partial_object(r#"{"path": "a", "path": "b", "#, &keys());
    assert_eq!(obj.get("path"), Some(&s("a")));
}

#[test]
fn separators_are_tolerated() {
    let obj = parse_partial_object(r#"{ , "path": "a",, "content": 1 ,"#, &keys());
    assert_eq!(
        fields(&obj),
        vec![("path", Some(&s("a"))), ("content", Some(&Value::Integer(1)))]
    );
}

#[test]
fn trailing_garbage_after_close() {
    let obj = parse_partial_object(r#"{"path": "a"} trailing"#, &keys());
    assert_eq!(obj.state(), ParseState::Incremental);
    assert_eq!(obj.get("path"), Some(&s("a")));
    assert_eq!(obj.halt().map(|h| h.reason), Some(HaltReason::UnexpectedCharacter('t')));
}

#[test]
fn quote_inside_key() {
    let keys = ExpectedKeys::from([r#"a"b"#]);
    let obj = parse_partial_object(r#"{"a"b": 1, "#, &keys);
    assert_eq!(obj.get(r#"a"b"#), Some(&Value::Integer(1)));
}

#[test]
fn unicode_whitespace_option() {
    let input = "{\u{a0}\"path\": \"a\", ";
    assert_eq!(parse_partial_object(input, &keys()).get("path"), None);

    let parser = PrefixParser::new(ParserOptions {
        allow_unicode_whitespace: true,
        ..ParserOptions::default()
    });
    assert_eq!(parser.parse(input, &keys()).get("path"), Some(&s("a")));
}

#[test]
fn no_expected_keys() {
    let obj = parse_partial_object(r#"{"path": "a", "#, &ExpectedKeys::default());
    assert!(obj.is_empty());
}

#[test]
fn leading_whitespace_before_object() {
    let obj = parse_partial_object("\n  {\"path\": \"a\",", &keys());
    assert_eq!(obj.get("path"), Some(&s("a")));
}
