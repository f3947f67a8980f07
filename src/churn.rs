use std::hint::black_box;

use tracing::debug;

/// Counters from one grow/shrink pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnReport {
    /// Length of the sequence after the growth phase.
    pub peak_len: usize,
    /// Number of pops performed by the shrink phase.
    pub removed: usize,
}

/// Builds `[0, 1, .., n - 1]` one push at a time, starting from an empty,
/// unreserved `Vec`. A non-positive `n` yields an empty sequence.
pub fn grow(n: i64) -> Vec<i64> {
    let mut seq = Vec::new();
    for i in 0..n {
        seq.push(i);
    }
    seq
}

/// Pops from the end until `seq` is empty and returns how many pops ran.
pub fn shrink(seq: &mut Vec<i64>) -> usize {
    let mut removed = 0;
    while let Some(v) = seq.pop() {
        black_box(v);
        removed += 1;
    }
    removed
}

/// Runs the full workload: grow to `n`, then shrink back to empty.
pub fn churn(n: i64) -> ChurnReport {
    let mut seq = grow(n);
    let peak_len = seq.len();
    debug!(n, peak_len, capacity = seq.capacity(), "growth phase done");

    let removed = shrink(&mut seq);
    debug!(removed, "shrink phase done");

    ChurnReport { peak_len, removed }
}
