mod scenarios;

use alloc::vec::Vec;

/// Every prefix of `payload` that ends on a character boundary, shortest
/// first, including the empty prefix and `payload` itself.
pub(crate) fn char_prefixes(payload: &str) -> Vec<&str> {
    payload
        .char_indices()
        .map(|(i, _)| &payload[..i])
        .chain(core::iter::once(payload))
        .collect()
}

/// A sequence of prefixes converging to `payload`, cut into roughly
/// `parts` equal steps without breaking UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub(crate) fn produce_prefixes(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let step = len.div_ceil(parts).max(1);
    let mut prefixes = Vec::with_capacity(parts);
    let mut end = 0;
    while end < len {
        end = core::cmp::min(end + step, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        prefixes.push(&payload[..end]);
    }
    prefixes
}

#[test]
fn prefix_helpers() {
    assert_eq!(char_prefixes("aé"), ["", "a", "aé"]);
    assert_eq!(produce_prefixes("abcd", 2), ["ab", "abcd"]);
    assert_eq!(produce_prefixes("éé", 4), ["é", "éé"]);
    assert!(produce_prefixes("", 3).is_empty());
}
