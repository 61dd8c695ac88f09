//! Monthly return aggregation.

use crate::{
    Result,
    periodic::{FIRST_CLOSE, LAST_CLOSE, MONTH, MONTHLY_RETURN, YEAR},
    table::{CLOSE, DATE, SYMBOL, ensure_columns},
};
use polars::prelude::*;

/// Collapse daily rows into one row per (symbol, year, month).
///
/// `first_close`/`last_close` are the closes on the bucket's earliest and
/// latest dates; `monthly_return = (last_close - first_close) / first_close`
/// when `first_close` is positive, null otherwise. Buckets only exist where
/// at least one observation does, so a symbol with a single trading day in a
/// month still yields a row, with a return of 0.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `year`, `month`, `first_close`,
/// `last_close`, `monthly_return`, sorted by (symbol, year, month).
pub fn monthly_returns(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE])?;

    let result = df
        .clone()
        .lazy()
        .with_columns([
            col(DATE).dt().year().alias(YEAR),
            col(DATE).dt().month().cast(DataType::Int32).alias(MONTH),
        ])
        .group_by([col(SYMBOL), col(YEAR), col(MONTH)])
        .agg([
            col(CLOSE)
                .sort_by([col(DATE)], Default::default())
                .first()
                .alias(FIRST_CLOSE),
            col(CLOSE)
                .sort_by([col(DATE)], Default::default())
                .last()
                .alias(LAST_CLOSE),
        ])
        .with_column(
            when(col(FIRST_CLOSE).gt(lit(0.0)))
                .then((col(LAST_CLOSE) - col(FIRST_CLOSE)) / col(FIRST_CLOSE))
                .otherwise(lit(NULL))
                .alias(MONTHLY_RETURN),
        )
        .sort([SYMBOL, YEAR, MONTH], SortMultipleOptions::default())
        .collect()?;

    Ok(result)
}
