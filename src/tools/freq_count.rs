use rustc_hash::FxHashMap;

use crate::huffman_coding::symbol::Symbol;

/// Maps each symbol to the number of times it occurs in the input.
pub type FrequencyMap<S> = FxHashMap<S, u64>;

/// Returns a frequency count of the input data.
pub fn freqs<S: Symbol>(data: &[S]) -> FrequencyMap<S> {
    let mut freqs = FrequencyMap::default();
    data.iter().for_each(|&el| *freqs.entry(el).or_insert(0) += 1);
    freqs
}

/// Returns the frequency count as (symbol, count) pairs in ascending symbol order.
pub fn sorted_freqs<S: Symbol>(freqs: &FrequencyMap<S>) -> Vec<(S, u64)> {
    let mut out: Vec<(S, u64)> = freqs.iter().map(|(&s, &f)| (s, f)).collect();
    out.sort_unstable_by_key(|&(s, _)| s);
    out
}

#[test]
fn freqs_test() {
    let f = freqs("aaaabbc".as_bytes());
    assert_eq!(f.len(), 3);
    assert_eq!(f[&b'a'], 4);
    assert_eq!(f[&b'b'], 2);
    assert_eq!(f[&b'c'], 1);
    assert_eq!(sorted_freqs(&f), vec![(b'a', 4), (b'b', 2), (b'c', 1)]);
}

#[test]
fn freqs_empty_test() {
    assert!(freqs::<u16>(&[]).is_empty());
}
