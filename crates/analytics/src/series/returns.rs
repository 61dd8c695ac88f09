//! Daily simple returns per symbol.

use crate::{
    Result,
    series::RETURNS,
    table::{CLOSE, DATE, SYMBOL, ensure_columns},
};
use polars::prelude::*;

/// Add a `returns` column: the daily percent change of `close` per symbol.
///
/// `returns[i] = close[i] / close[i-1] - 1` within each symbol partition
/// sorted by date. The first observation of every symbol has no prior close
/// and carries a null, which downstream consumers must drop before ranking
/// or aggregating. For N observations of a symbol this yields exactly N-1
/// defined values, in date order.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// The input table with a `returns` column appended, sorted by
/// (symbol, date); the ordering is never disturbed afterwards.
pub fn with_returns(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE])?;

    let result = df
        .clone()
        .lazy()
        .sort(
            [SYMBOL, DATE],
            SortMultipleOptions::default().with_order_descending_multi([false, false]),
        )
        .with_column(
            col(CLOSE)
                .shift(lit(1))
                .over([col(SYMBOL)])
                .alias("close_lag"),
        )
        .with_column(((col(CLOSE) - col("close_lag")) / col("close_lag")).alias(RETURNS))
        .drop(["close_lag"])
        .collect()?;

    Ok(result)
}
