//! Maximum drawdown per symbol.

use crate::{
    Result,
    risk::{MAX_DRAWDOWN, symbol_series},
    table::SYMBOL,
};
use polars::prelude::*;

/// Maximum peak-to-trough decline of a date-ordered close series.
///
/// The minimum over the series of `close[i] / running_max(close[..=i]) - 1`.
/// Always `<= 0`; exactly 0 for a series that never falls below a previous
/// peak. `None` only for an empty series.
pub fn max_drawdown(closes: &[f64]) -> Option<f64> {
    let mut peak = f64::MIN;
    let mut worst: Option<f64> = None;
    for &close in closes {
        peak = peak.max(close);
        let dd = close / peak - 1.0;
        worst = Some(worst.map_or(dd, |w: f64| w.min(dd)));
    }
    worst
}

/// Maximum drawdown over each symbol's full history.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `max_drawdown`, sorted ascending so the
/// deepest drawdown comes first.
pub fn max_drawdown_by_symbol(df: &DataFrame) -> Result<DataFrame> {
    let mut symbols = Vec::new();
    let mut values = Vec::new();

    for s in symbol_series(df)? {
        let Some(dd) = max_drawdown(&s.closes) else {
            continue;
        };
        symbols.push(s.symbol);
        values.push(dd);
    }

    let result = df!(SYMBOL => symbols, MAX_DRAWDOWN => values)?
        .lazy()
        .sort([MAX_DRAWDOWN], SortMultipleOptions::default())
        .collect()?;

    Ok(result)
}
