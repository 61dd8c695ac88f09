//! Pairwise return correlation across symbols.
//!
//! Feeds the dashboard's correlation heatmap. Symbols trade on different
//! calendars, so each pair is correlated over the dates both have a defined
//! daily return (pairwise-complete observations), not over a global
//! intersection.

use crate::{
    Result,
    series::{RETURNS, with_returns},
    table::{DATE, SYMBOL, symbol_partitions},
};
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::BTreeMap;

/// Pearson correlation of two date-aligned return maps.
///
/// `None` when fewer than two dates overlap or either series has zero
/// variance over the overlap.
fn pearson(a: &BTreeMap<NaiveDate, f64>, b: &BTreeMap<NaiveDate, f64>) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .filter_map(|(date, &x)| b.get(date).map(|&y| (x, y)))
        .collect();
    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let nf = n as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Correlation matrix of daily returns across the table's symbols.
///
/// # Required Columns
/// - `symbol`, `date`, `close`
///
/// # Returns
/// A square DataFrame: a `symbol` column naming each row plus one Float64
/// column per symbol, symbols in ascending order. Cells are null where a
/// correlation is undefined. An empty table yields a frame with only the
/// empty `symbol` column.
pub fn return_correlation(df: &DataFrame) -> Result<DataFrame> {
    let enriched = with_returns(df)?;

    let mut names: Vec<String> = Vec::new();
    let mut maps: Vec<BTreeMap<NaiveDate, f64>> = Vec::new();

    for part in symbol_partitions(&enriched)? {
        let symbols = part.column(SYMBOL)?.str()?;
        let Some(symbol) = symbols.get(0) else {
            continue;
        };
        let dates = part.column(DATE)?.date()?.as_date_iter();
        let rets = part.column(RETURNS)?.f64()?;

        let mut map = BTreeMap::new();
        for (i, date) in dates.enumerate() {
            if let (Some(date), Some(ret)) = (date, rets.get(i)) {
                map.insert(date, ret);
            }
        }
        names.push(symbol.to_string());
        maps.push(map);
    }

    let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 1);
    columns.push(Column::new(SYMBOL.into(), &names));
    for (j, name) in names.iter().enumerate() {
        let cells: Vec<Option<f64>> = maps.iter().map(|row| pearson(row, &maps[j])).collect();
        columns.push(Column::new(name.as_str().into(), cells));
    }

    Ok(DataFrame::new(columns)?)
}
