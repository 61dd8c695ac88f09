//! Risk and summary statistics - whole-history scalars per symbol
//!
//! Unlike the derived-series stage, which stays inside lazy expressions,
//! these metrics walk each symbol partition explicitly: every function
//! splits the table with [`symbol_partitions`](crate::table::symbol_partitions)
//! and computes its scalar over the date-ordered closes. A symbol without
//! enough history for a metric is left out of that metric's result rather
//! than zero-filled or reported as an error.

pub mod cagr;
pub mod drawdown;
pub mod score;
pub mod sharpe;
pub mod volatility;

pub use cagr::cagr_by_symbol;
pub use drawdown::{max_drawdown, max_drawdown_by_symbol};
pub use score::{RiskConfig, risk_table};
pub use sharpe::sharpe_by_symbol;
pub use volatility::annualized_volatility;

use crate::{
    Result,
    table::{CLOSE, DATE, SYMBOL, ensure_columns, symbol_partitions},
};
use chrono::NaiveDate;
use polars::prelude::*;

/// Trading days per year used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Compound annual growth rate column.
pub const CAGR: &str = "cagr";
/// Annualized volatility column.
pub const ANN_VOL: &str = "ann_vol";
/// Maximum drawdown column.
pub const MAX_DRAWDOWN: &str = "max_drawdown";
/// Sharpe ratio column.
pub const SHARPE: &str = "sharpe";
/// Volatility percentile column of the risk table.
pub const VOL_PERCENTILE: &str = "vol_percentile";
/// Drawdown percentile column of the risk table.
pub const DD_PERCENTILE: &str = "dd_percentile";
/// Composite risk score column of the risk table.
pub const RISK_SCORE: &str = "risk_score";

/// One symbol's date-ordered close history, pulled out of the table.
pub(crate) struct SymbolSeries {
    pub(crate) symbol: String,
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) closes: Vec<f64>,
}

/// Extract per-symbol close series from a price table, sorted by date.
pub(crate) fn symbol_series(df: &DataFrame) -> Result<Vec<SymbolSeries>> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE])?;

    let mut series = Vec::new();
    for part in symbol_partitions(df)? {
        let symbols = part.column(SYMBOL)?.str()?;
        let Some(symbol) = symbols.get(0) else {
            continue;
        };
        let dates: Vec<NaiveDate> = part.column(DATE)?.date()?.as_date_iter().flatten().collect();
        let closes: Vec<f64> = part.column(CLOSE)?.f64()?.into_no_null_iter().collect();
        series.push(SymbolSeries {
            symbol: symbol.to_string(),
            dates,
            closes,
        });
    }
    Ok(series)
}

/// Daily simple returns of a close series: one value per consecutive pair.
pub(crate) fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}

/// Sample standard deviation (ddof 1). Undefined below two values.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_daily_returns() {
        let rets = daily_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(rets.len(), 2);
        assert_relative_eq!(rets[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(rets[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std() {
        assert!(sample_std(&[]).is_none());
        assert!(sample_std(&[1.0]).is_none());
        assert_relative_eq!(sample_std(&[1.0, 1.0, 1.0]).unwrap(), 0.0);
        // sample std of [2, 4] = sqrt(2)
        assert_relative_eq!(sample_std(&[2.0, 4.0]).unwrap(), 2.0_f64.sqrt());
    }
}
