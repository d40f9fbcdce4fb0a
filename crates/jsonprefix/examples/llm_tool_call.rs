//! Shows a file as a model writes it, while the tool call is still
//! streaming.
//!
//! The assistant was given a `write_file` tool:
//!
//! ```text
//! {
//!   "path":    string,
//!   "content": string,
//!   "append":  boolean
//! }
//! ```
//!
//! Its arguments arrive in small, irregular deltas. After each delta the
//! whole buffer is parsed again. The target path is announced as soon as it
//! is known and the growing `content` is echoed so that a user interface
//! could render the file character by character.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=jsonprefix=trace cargo run -p jsonprefix --example llm_tool_call
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonprefix::{ExpectedKeys, ParseState, parse_partial_object};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // In real life this would come from the network.
    let simulated_stream: [&str; 8] = [
        r#"{"path": "src/ma"#,
        r#"in.rs", "conte"#,
        r#"nt": "fn main() {\n"#,
        r#"    let greeting = \"hel"#,
        r#"lo\";\n    println!(\"{greeting}\");\n"#,
        r#"}\n", "app"#,
        r#"end": fa"#,
        r#"lse}"#,
    ];

    let keys = ExpectedKeys::from(["path", "content", "append"]);
    let mut buffer = String::new();
    let mut announced = false;
    let mut shown = 0;

    for delta in simulated_stream {
        buffer.push_str(delta);
        let fields = parse_partial_object(&buffer, &keys);

        if !announced && fields.provisional() != Some("path") {
            if let Some(path) = fields.get("path").and_then(|v| v.as_str()) {
                println!("== writing {path} ==");
                announced = true;
            }
        }

        // A provisional `content` is the raw text so far, escapes included;
        // only print it once it is final, otherwise show progress.
        match fields.get("content").and_then(|v| v.as_str()) {
            Some(content) if fields.provisional() == Some("content") => {
                if content.len() > shown {
                    println!("   ... {} bytes received", content.len());
                    shown = content.len();
                }
            }
            Some(content) => {
                if shown != usize::MAX {
                    print!("{content}");
                    shown = usize::MAX;
                }
            }
            None => {}
        }

        if fields.state() == ParseState::Complete {
            let append = fields.get("append").and_then(|v| v.as_bool());
            println!("== done (append: {append:?}) ==");
        }
    }
}
