//! Percentile-based composite risk scoring.

use crate::{
    Result,
    rank::percentile_rank,
    risk::{
        ANN_VOL, DD_PERCENTILE, MAX_DRAWDOWN, RISK_SCORE, SHARPE, TRADING_DAYS_PER_YEAR,
        VOL_PERCENTILE, daily_returns, drawdown::max_drawdown, sample_std, symbol_series,
    },
    table::SYMBOL,
};
use polars::prelude::*;

/// Extra observations required beyond the rolling window, so the window
/// never lands on too-sparse data.
const WINDOW_BUFFER: usize = 5;

/// Weight of the volatility percentile in the composite score.
const VOL_WEIGHT: f64 = 0.6;
/// Weight of the drawdown percentile in the composite score.
const DD_WEIGHT: f64 = 0.4;

/// Configuration for the risk table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskConfig {
    /// Number of most recent daily returns used for the trailing volatility.
    pub window: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self { window: 30 }
    }
}

impl RiskConfig {
    /// Create a config with a custom trailing window.
    pub const fn with_window(window: usize) -> Self {
        Self { window }
    }
}

/// Per-symbol risk statistics with a cross-sectional composite score.
///
/// For every symbol with at least `window + 5` observations:
///
/// - `ann_vol`: sample standard deviation of the most recent `window` daily
///   returns, annualized by `sqrt(252)`. Trailing-window by design, unlike
///   [`annualized_volatility`](crate::risk::annualized_volatility) which
///   uses the whole history.
/// - `max_drawdown`: over the entire available history, not windowed.
/// - `sharpe`: total-period return divided by `ann_vol`, with a defensive 0
///   when `ann_vol` is 0. The ranking code consuming these rows does not
///   expect missing Sharpe values here, so this deliberately differs from
///   [`sharpe_by_symbol`](crate::risk::sharpe_by_symbol)'s null.
///
/// `vol_percentile` and `dd_percentile` are tie-averaged percentile ranks
/// (0-100) of `ann_vol` and `|max_drawdown|` across the selected symbols
/// only - the score is relative to whichever symbols are in play, not to a
/// fixed universe. `risk_score = 0.6 * vol_percentile + 0.4 * dd_percentile`.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `ann_vol`, `max_drawdown`, `sharpe`,
/// `vol_percentile`, `dd_percentile`, `risk_score`, sorted descending by
/// `risk_score` (riskiest first). Empty when no symbol has enough history.
pub fn risk_table(df: &DataFrame, config: &RiskConfig) -> Result<DataFrame> {
    let mut symbols = Vec::new();
    let mut ann_vols = Vec::new();
    let mut max_dds = Vec::new();
    let mut sharpes = Vec::new();

    for s in symbol_series(df)? {
        let n = s.closes.len();
        if n < config.window + WINDOW_BUFFER {
            continue;
        }
        let rets = daily_returns(&s.closes);
        let tail = &rets[rets.len() - config.window..];
        let Some(std) = sample_std(tail) else {
            continue;
        };
        let ann_vol = std * TRADING_DAYS_PER_YEAR.sqrt();
        let Some(max_dd) = max_drawdown(&s.closes) else {
            continue;
        };

        let total_return = s.closes[n - 1] / s.closes[0] - 1.0;
        let sharpe = if ann_vol > 0.0 {
            total_return / ann_vol
        } else {
            0.0
        };

        symbols.push(s.symbol);
        ann_vols.push(ann_vol);
        max_dds.push(max_dd);
        sharpes.push(sharpe);
    }

    let vol_pct = percentile_rank(&ann_vols);
    let dd_abs: Vec<f64> = max_dds.iter().map(|dd| dd.abs()).collect();
    let dd_pct = percentile_rank(&dd_abs);
    let scores: Vec<f64> = vol_pct
        .iter()
        .zip(&dd_pct)
        .map(|(v, d)| VOL_WEIGHT * v + DD_WEIGHT * d)
        .collect();

    let result = df!(
        SYMBOL => symbols,
        ANN_VOL => ann_vols,
        MAX_DRAWDOWN => max_dds,
        SHARPE => sharpes,
        VOL_PERCENTILE => vol_pct,
        DD_PERCENTILE => dd_pct,
        RISK_SCORE => scores,
    )?
    .lazy()
    .sort(
        [RISK_SCORE],
        SortMultipleOptions::default().with_order_descending(true),
    )
    .collect()?;

    Ok(result)
}
