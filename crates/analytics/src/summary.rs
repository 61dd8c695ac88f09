//! Cross-symbol KPI summary for the dashboard's headline cards.
//!
//! Each leader is picked after dropping null metric values: a symbol whose
//! Sharpe is undefined can never be "best Sharpe", it simply does not take
//! part in the ranking.

use crate::{
    Result,
    periodic::{MONTHLY_RETURN, YEARLY_RETURN, monthly_returns, yearly_returns},
    risk::{ANN_VOL, CAGR, SHARPE, annualized_volatility, cagr_by_symbol, sharpe_by_symbol},
    table::SYMBOL,
};
use derive_more::Display;
use polars::prelude::*;
use serde::Serialize;

/// A symbol paired with one metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display("{symbol}: {value:.4}")]
pub struct SymbolStat {
    /// Security identifier.
    pub symbol: String,
    /// Metric value for that symbol.
    pub value: f64,
}

/// Headline statistics over the currently selected symbols.
///
/// Every leader field is `None` when no symbol has a defined value for that
/// metric (for example, every Sharpe is null because every series is flat).
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    /// Symbol with the highest average yearly return.
    pub best_yearly: Option<SymbolStat>,
    /// Symbol with the lowest average yearly return.
    pub worst_yearly: Option<SymbolStat>,
    /// Symbol with the highest average monthly return.
    pub top_avg_monthly: Option<SymbolStat>,
    /// Symbol with the highest CAGR.
    pub best_cagr: Option<SymbolStat>,
    /// Symbol with the highest Sharpe ratio.
    pub best_sharpe: Option<SymbolStat>,
    /// Mean annualized volatility across symbols with a defined value.
    pub mean_ann_vol: Option<f64>,
    /// Number of symbols present in the table.
    pub symbols: usize,
}

/// Pick the leading symbol for a metric column, nulls dropped first.
fn leader(df: &DataFrame, value_col: &str, descending: bool) -> Result<Option<SymbolStat>> {
    let ranked = df
        .clone()
        .lazy()
        .filter(col(value_col).is_not_null())
        .sort(
            [value_col],
            SortMultipleOptions::default().with_order_descending(descending),
        )
        .collect()?;

    if ranked.height() == 0 {
        return Ok(None);
    }
    let symbol = ranked
        .column(SYMBOL)?
        .str()?
        .get(0)
        .map(str::to_string)
        .unwrap_or_default();
    let value = ranked.column(value_col)?.f64()?.get(0).unwrap_or_default();
    Ok(Some(SymbolStat { symbol, value }))
}

/// Average a metric per symbol, keeping the column name.
fn mean_by_symbol(df: &DataFrame, value_col: &str) -> Result<DataFrame> {
    let result = df
        .clone()
        .lazy()
        .group_by([col(SYMBOL)])
        .agg([col(value_col).mean().alias(value_col)])
        .collect()?;
    Ok(result)
}

/// Build the KPI summary over a price table.
///
/// An empty table produces a summary with every leader `None` and a symbol
/// count of 0; it never fails.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
pub fn kpi_summary(df: &DataFrame, risk_free_rate: f64) -> Result<KpiSummary> {
    let yearly_avg = mean_by_symbol(&yearly_returns(df)?, YEARLY_RETURN)?;
    let monthly_avg = mean_by_symbol(&monthly_returns(df)?, MONTHLY_RETURN)?;
    let cagr = cagr_by_symbol(df)?;
    let vol = annualized_volatility(df)?;
    let sharpe = sharpe_by_symbol(df, risk_free_rate)?;

    let symbols: std::collections::HashSet<&str> =
        df.column(SYMBOL)?.str()?.into_iter().flatten().collect();
    let symbols = symbols.len();

    Ok(KpiSummary {
        best_yearly: leader(&yearly_avg, YEARLY_RETURN, true)?,
        worst_yearly: leader(&yearly_avg, YEARLY_RETURN, false)?,
        top_avg_monthly: leader(&monthly_avg, MONTHLY_RETURN, true)?,
        best_cagr: leader(&cagr, CAGR, true)?,
        best_sharpe: leader(&sharpe, SHARPE, true)?,
        mean_ann_vol: vol.column(ANN_VOL)?.f64()?.mean(),
        symbols,
    })
}
