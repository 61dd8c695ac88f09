//! Yearly return aggregation.

use crate::{
    Result,
    periodic::{FIRST_CLOSE, LAST_CLOSE, YEAR, YEARLY_RETURN},
    table::{CLOSE, DATE, SYMBOL, ensure_columns},
};
use polars::prelude::*;

/// Collapse daily rows into one row per (symbol, year).
///
/// Identical to [`monthly_returns`](crate::periodic::monthly_returns) at
/// year granularity, except that the return is computed unconditionally:
/// there is no `first_close > 0` guard, so a first close of exactly 0 yields
/// a non-finite value rather than a null. Valid price data never has a
/// non-positive close, and the asymmetry with the monthly table is kept as
/// the dashboard has always had it.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// DataFrame with columns: `symbol`, `year`, `first_close`, `last_close`,
/// `yearly_return`, sorted by (symbol, year).
pub fn yearly_returns(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &[SYMBOL, DATE, CLOSE])?;

    let result = df
        .clone()
        .lazy()
        .with_column(col(DATE).dt().year().alias(YEAR))
        .group_by([col(SYMBOL), col(YEAR)])
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
            ((col(LAST_CLOSE) - col(FIRST_CLOSE)) / col(FIRST_CLOSE)).alias(YEARLY_RETURN),
        )
        .sort([SYMBOL, YEAR], SortMultipleOptions::default())
        .collect()?;

    Ok(result)
}
