//! Compound annual growth rate per symbol.

use crate::{
    Result,
    risk::{CAGR, symbol_series},
    table::SYMBOL,
};
use polars::prelude::*;

/// Floor on the year span so a same-day history cannot divide by zero.
const MIN_YEARS: f64 = 1e-9;

/// Compound annual growth rate over each symbol's full history.
///
/// `cagr = (end_close / start_close)^(1 / years) - 1` with
/// `years = max(days_between(first, last) / 365.25, 1e-9)`. A symbol with
/// fewer than two observations has no growth rate and is excluded from the
/// result rather than zero-filled.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `cagr`, sorted descending by `cagr`.
pub fn cagr_by_symbol(df: &DataFrame) -> Result<DataFrame> {
    let mut symbols = Vec::new();
    let mut values = Vec::new();

    for s in symbol_series(df)? {
        let n = s.closes.len();
        if n < 2 {
            continue;
        }
        let start = s.closes[0];
        let end = s.closes[n - 1];
        let days = (s.dates[n - 1] - s.dates[0]).num_days() as f64;
        let years = (days / 365.25).max(MIN_YEARS);
        symbols.push(s.symbol);
        values.push((end / start).powf(1.0 / years) - 1.0);
    }

    let result = df!(SYMBOL => symbols, CAGR => values)?
        .lazy()
        .sort(
            [CAGR],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    Ok(result)
}
