//! Sharpe ratio per symbol.

use crate::{
    Result,
    risk::{SHARPE, TRADING_DAYS_PER_YEAR, daily_returns, sample_std, symbol_series},
    table::SYMBOL,
};
use polars::prelude::*;

/// Floor on the year span, shared with the CAGR computation.
const MIN_YEARS: f64 = 1e-9;

/// Sharpe ratio per symbol: `(cagr - risk_free_rate) / ann_vol`.
///
/// Only symbols with both a defined CAGR and a defined annualized volatility
/// appear in the result. A symbol whose volatility is exactly 0 gets a null
/// ratio - never a division fault - and sorts after every defined value, so
/// it can't win a best-Sharpe ranking. This is deliberately different from
/// the per-row Sharpe in [`risk_table`](crate::risk::risk_table), which
/// falls back to 0 instead; downstream consumers rely on each behavior.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `sharpe`, sorted descending with nulls
/// last.
pub fn sharpe_by_symbol(df: &DataFrame, risk_free_rate: f64) -> Result<DataFrame> {
    let mut symbols = Vec::new();
    let mut values: Vec<Option<f64>> = Vec::new();

    for s in symbol_series(df)? {
        let n = s.closes.len();
        if n < 2 {
            continue;
        }
        let rets = daily_returns(&s.closes);
        let Some(std) = sample_std(&rets) else {
            continue;
        };
        let ann_vol = std * TRADING_DAYS_PER_YEAR.sqrt();

        let days = (s.dates[n - 1] - s.dates[0]).num_days() as f64;
        let years = (days / 365.25).max(MIN_YEARS);
        let cagr = (s.closes[n - 1] / s.closes[0]).powf(1.0 / years) - 1.0;

        symbols.push(s.symbol);
        values.push(if ann_vol > 0.0 {
            Some((cagr - risk_free_rate) / ann_vol)
        } else {
            None
        });
    }

    let result = df!(SYMBOL => symbols, SHARPE => values)?
        .lazy()
        .sort(
            [SHARPE],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true),
        )
        .collect()?;

    Ok(result)
}
