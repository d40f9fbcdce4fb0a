#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonprefix::{ExpectedKeys, ParseState, ParserOptions, PrefixParser, Value};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Map;

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{a0}".as_bytes(),
    "\u{2003}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly writes a serialized object after the header, occasionally leaves
/// the input to libFuzzer's own mutations.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let limit = max_size - HEADER;
        let mut len = HEADER;
        len += append_whitespace(&mut data[len..], limit);
        len += append_object(&mut data[len..], size, max_size - len);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(1..=limit.min(4));
        let mut written = 0;
        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_object(data: &mut [u8], size: usize, limit: usize) -> usize {
    let object = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(object) = ArbitraryObject::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break object;
        }
    };

    let serialized = serde_json::to_vec(&object.0).expect("Failed to serialize arbitrary object");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(16)? {
            0 => serde_json::Value::Null,
            1 => serde_json::Value::Bool(u.arbitrary()?),
            2..=3 => {
                let n: f64 = u.arbitrary()?;
                serde_json::Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            4..=13 => serde_json::Value::String(u.arbitrary()?),
            14 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                serde_json::Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => ArbitraryObject::arbitrary(u)?.0,
        };
        Ok(ArbitraryValue(value))
    }
}

/// A tool call's arguments: always an object at the top.
#[derive(Debug)]
struct ArbitraryObject(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryObject {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let members: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
        Ok(ArbitraryObject(serde_json::Value::Object(Map::from_iter(
            members.into_iter().map(|(k, v)| (k, v.0)),
        ))))
    }
}

fn prefix_parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as u64;
    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let options = ParserOptions {
        allow_unicode_whitespace: flags & 1 != 0,
        complete_fast_path: flags & 2 == 0,
        partial_strings: flags & 4 == 0,
    };
    let parser = PrefixParser::new(options);

    let decoded = serde_json::from_str::<Map<String, serde_json::Value>>(&text).ok();
    let keys: ExpectedKeys = match &decoded {
        Some(map) => map.keys().map(String::as_str).chain(["path", "content"]).collect(),
        None => ExpectedKeys::from(["path", "content"]),
    };

    for prefix in prefixes(&text, split_seed) {
        let fields = parser.parse(prefix, &keys);
        assert!(fields.resolved_count() <= fields.len());
        if let Some(key) = fields.provisional() {
            assert!(matches!(fields.get(key), Some(Value::String(_))));
        }
    }

    let fields = parser.parse(&text, &keys);
    if let (Some(map), true) = (decoded, options.complete_fast_path) {
        assert_eq!(fields.state(), ParseState::Complete);
        for (key, value) in map {
            assert_eq!(fields.get(&key), Some(&Value::from(value)));
        }
    }
}

fuzz_target!(|data: &[u8]| prefix_parser(data));

/// Boundary-safe prefixes of `text`, growing by seed-derived steps.
fn prefixes(text: &str, split_seed: u64) -> Vec<&str> {
    let mut out = Vec::new();
    let mut end = 0;
    let len = text.len();

    while end < len {
        let remaining = len - end;
        let mut size = (split_seed as usize % remaining) + 1;
        while end + size < len && !text.is_char_boundary(end + size) {
            size += 1;
        }
        end += size;
        out.push(&text[..end]);
    }

    out
}
