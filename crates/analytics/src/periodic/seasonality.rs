//! Cross-year seasonality of monthly returns.

use crate::{
    Result,
    periodic::{MONTH, MONTHLY_RETURN},
    table::{SYMBOL, ensure_columns},
};
use polars::prelude::*;

/// Average each symbol's monthly return per calendar month across years.
///
/// Takes the output of [`monthly_returns`](crate::periodic::monthly_returns)
/// and averages `monthly_return` over all years for each (symbol, month).
/// Null bucket returns are skipped by the mean; a (symbol, month) whose
/// buckets are all null averages to null. This feeds the dashboard's
/// seasonality heatmap in its "all years" mode.
///
/// # Required Columns
/// - `symbol`, `month`, `monthly_return`
///
/// # Returns
/// DataFrame with columns: `symbol`, `month`, `monthly_return`, sorted by
/// (symbol, month).
pub fn average_monthly_returns(monthly: &DataFrame) -> Result<DataFrame> {
    ensure_columns(monthly, &[SYMBOL, MONTH, MONTHLY_RETURN])?;

    let result = monthly
        .clone()
        .lazy()
        .group_by([col(SYMBOL), col(MONTH)])
        .agg([col(MONTHLY_RETURN).mean().alias(MONTHLY_RETURN)])
        .sort([SYMBOL, MONTH], SortMultipleOptions::default())
        .collect()?;

    Ok(result)
}
