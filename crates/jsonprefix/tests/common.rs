#![allow(missing_docs)]
#![allow(dead_code)]

use jsonprefix::ExpectedKeys;

/// A `write_file` tool call as a model streams it, one delta per entry.
pub const STREAM: [&str; 9] = [
    r#"{"pa"#,
    r#"th": "src/"#,
    r#"main.rs", "mo"#,
    r#"de": 420, "conte"#,
    r#"nt": "fn main() {\n"#,
    r#"    println!(\"hi\");\n"#,
    r#"}\n""#,
    r#", "append": fal"#,
    r#"se}"#,
];

/// The arguments the `write_file` tool declares.
pub fn write_file_keys() -> ExpectedKeys {
    ExpectedKeys::from(["path", "content", "append"])
}

/// Every buffer a consumer holds while the stream arrives.
pub fn accumulated(stream: &[&str]) -> Vec<String> {
    let mut buffer = String::new();
    stream
        .iter()
        .map(|delta| {
            buffer.push_str(delta);
            buffer.clone()
        })
        .collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
