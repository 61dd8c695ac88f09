//! Base-100 price normalization per symbol.

use crate::{
    Result,
    series::NORM_CLOSE,
    table::{CLOSE, DATE, SYMBOL, ensure_columns},
};
use polars::prelude::*;

/// Add a `norm_close` column: close rebased so every symbol starts at 100.
///
/// `norm_close[i] = close[i] / close[0] * 100` within each symbol partition
/// sorted by date. When a symbol's first close is not positive the rebase is
/// meaningless, and the whole partition is pinned at 100 - a documented
/// degenerate-data default rather than a silently wrong curve.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// The input table with a `norm_close` column appended, sorted by
/// (symbol, date).
pub fn with_normalized(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE])?;

    let result = df
        .clone()
        .lazy()
        .sort(
            [SYMBOL, DATE],
            SortMultipleOptions::default().with_order_descending_multi([false, false]),
        )
        .with_column(col(CLOSE).first().over([col(SYMBOL)]).alias("first_close"))
        .with_column(
            when(col("first_close").gt(lit(0.0)))
                .then(col(CLOSE) / col("first_close") * lit(100.0))
                .otherwise(lit(100.0))
                .alias(NORM_CLOSE),
        )
        .drop(["first_close"])
        .collect()?;

    Ok(result)
}
