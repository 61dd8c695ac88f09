//! Cross-sectional percentile ranking.
//!
//! The composite risk score ranks each symbol's volatility and drawdown
//! against the other symbols currently in play. Ranking is tie-averaged:
//! equal values share the mean of the ranks they occupy, so a fully tied
//! cross-section scores identically for every symbol.

/// Tie-averaged percentile rank of each value within the slice.
///
/// Values are ranked ascending (1-based); tied values receive the average
/// of the ranks they span; ranks are converted to a percentage of the slice
/// length. A single value ranks 100.0, matching the convention of the
/// dashboard this library was built for.
///
/// Inputs are expected to be finite; non-finite values are ordered by
/// `f64::total_cmp`.
pub fn percentile_rank(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut pct = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // 1-based ranks i+1..=j+1 averaged across the tie run
        let avg_rank = (i + j + 2) as f64 / 2.0;
        let p = avg_rank / n as f64 * 100.0;
        for &idx in &order[i..=j] {
            pct[idx] = p;
        }
        i = j + 1;
    }
    pct
}
