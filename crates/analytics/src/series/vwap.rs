//! Cumulative volume-weighted average price per symbol.

use crate::{
    Result,
    series::VWAP,
    table::{CLOSE, DATE, SYMBOL, VOLUME, ensure_columns},
};
use polars::prelude::*;

/// Add a `vwap` column: cumulative `close * volume` over cumulative `volume`
/// per symbol.
///
/// While a symbol's cumulative volume is still zero there has been no
/// trading to average over, so `vwap` is null there; it becomes defined from
/// the first row with positive cumulative volume onwards. Zero volume is not
/// an error, it simply means "no trading yet".
///
/// # Required Columns
/// - `symbol`, `date`, `close`, `volume`
///
/// # Returns
/// The input table with a `vwap` column appended, sorted by (symbol, date).
pub fn with_vwap(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE, VOLUME])?;

    let result = df
        .clone()
        .lazy()
        .sort(
            [SYMBOL, DATE],
            SortMultipleOptions::default().with_order_descending_multi([false, false]),
        )
        .with_columns([
            (col(CLOSE) * col(VOLUME))
                .cum_sum(false)
                .over([col(SYMBOL)])
                .alias("cum_pv"),
            col(VOLUME)
                .cum_sum(false)
                .over([col(SYMBOL)])
                .alias("cum_vol"),
        ])
        .with_column(
            when(col("cum_vol").gt(lit(0.0)))
                .then(col("cum_pv") / col("cum_vol"))
                .otherwise(lit(NULL))
                .alias(VWAP),
        )
        .drop(["cum_pv", "cum_vol"])
        .collect()?;

    Ok(result)
}
