//! Annualized volatility per symbol.

use crate::{
    Result,
    risk::{ANN_VOL, TRADING_DAYS_PER_YEAR, daily_returns, sample_std, symbol_series},
    table::SYMBOL,
};
use polars::prelude::*;

/// Annualized volatility of daily returns over each symbol's full history.
///
/// `ann_vol = std(daily_returns) * sqrt(252)` with the sample standard
/// deviation (ddof 1). A symbol needs at least two defined daily returns,
/// i.e. three observations; anything shorter is excluded. A flat series has
/// an annualized volatility of exactly 0.
///
/// The risk table's volatility differs from this one: it looks only at the
/// most recent window of returns, see [`risk_table`](crate::risk::risk_table).
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `ann_vol`, sorted descending by
/// `ann_vol`.
pub fn annualized_volatility(df: &DataFrame) -> Result<DataFrame> {
    let mut symbols = Vec::new();
    let mut values = Vec::new();

    for s in symbol_series(df)? {
        let rets = daily_returns(&s.closes);
        let Some(std) = sample_std(&rets) else {
            continue;
        };
        symbols.push(s.symbol);
        values.push(std * TRADING_DAYS_PER_YEAR.sqrt());
    }

    let result = df!(SYMBOL => symbols, ANN_VOL => values)?
        .lazy()
        .sort(
            [ANN_VOL],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use polars::df;

    fn days(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| start.checked_add_days(chrono::Days::new(i as u64)).unwrap())
            .collect()
    }

    #[test]
    fn test_flat_series_has_zero_volatility() {
        let df = df! {
            "symbol" => vec!["A"; 10],
            "date" => days(10),
            "close" => vec![100.0; 10],
        }
        .unwrap();

        let result = annualized_volatility(&df).unwrap();
        let vol = result.column("ann_vol").unwrap().f64().unwrap().get(0).unwrap();
        assert_relative_eq!(vol, 0.0);
    }

    #[test]
    fn test_annualization_factor() {
        // returns alternate +10% / ~-9.09%; just check the sqrt(252) scaling
        let closes: Vec<f64> = (0..6)
            .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
            .collect();
        let df = df! {
            "symbol" => vec!["A"; 6],
            "date" => days(6),
            "close" => closes.clone(),
        }
        .unwrap();

        let result = annualized_volatility(&df).unwrap();
        let vol = result.column("ann_vol").unwrap().f64().unwrap().get(0).unwrap();

        let rets: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
        let expected = sample_std(&rets).unwrap() * 252.0_f64.sqrt();
        assert_relative_eq!(vol, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_two_observations_are_excluded() {
        let df = df! {
            "symbol" => ["A", "A"],
            "date" => days(2),
            "close" => [100.0, 110.0],
        }
        .unwrap();

        let result = annualized_volatility(&df).unwrap();
        assert_eq!(result.height(), 0);
    }
}
