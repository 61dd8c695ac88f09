//! Price table schema and partitioning helpers.
//!
//! A price table is a tidy DataFrame with one row per (symbol, date)
//! observation. The store that produces it has already dropped rows with an
//! unparseable date or a missing close and defaulted volume to zero, so the
//! helpers here only establish ordering and partitioning invariants; they do
//! not re-validate row contents.

use crate::{AnalyticsError, Result};
use polars::prelude::*;

/// Security identifier column.
pub const SYMBOL: &str = "symbol";
/// Observation date column (Date dtype, no intraday component).
pub const DATE: &str = "date";
/// Closing price column.
pub const CLOSE: &str = "close";
/// Traded volume column.
pub const VOLUME: &str = "volume";

/// Verify that every named column exists in the table.
pub(crate) fn ensure_columns(df: &DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        if df.column(name).is_err() {
            return Err(AnalyticsError::MissingColumn((*name).to_string()));
        }
    }
    Ok(())
}

/// Sort a price table by (symbol, date) ascending.
///
/// Every derived-series operation establishes this ordering before touching
/// the data and never reorders rows afterwards.
pub fn sort_by_symbol_date(df: &DataFrame) -> Result<DataFrame> {
    let sorted = df
        .clone()
        .lazy()
        .sort(
            [SYMBOL, DATE],
            SortMultipleOptions::default().with_order_descending_multi([false, false]),
        )
        .collect()?;
    Ok(sorted)
}

/// Split a price table into per-symbol partitions, each sorted by date.
///
/// Partitions come back in first-appearance order of the (sorted) symbols.
/// An empty table yields no partitions.
pub fn symbol_partitions(df: &DataFrame) -> Result<Vec<DataFrame>> {
    ensure_columns(df, &[SYMBOL, DATE])?;
    if df.height() == 0 {
        return Ok(Vec::new());
    }
    let sorted = sort_by_symbol_date(df)?;
    let parts = sorted.partition_by_stable([SYMBOL], true)?;
    Ok(parts)
}

/// Restrict a price table to observations in one calendar year.
///
/// Used by the dashboard's year drilldown: the whole pipeline is recomputed
/// over the filtered table. A year with no observations yields an empty
/// table of the same schema.
pub fn filter_year(df: &DataFrame, year: i32) -> Result<DataFrame> {
    ensure_columns(df, &[DATE])?;
    let filtered = df
        .clone()
        .lazy()
        .filter(col(DATE).dt().year().eq(lit(year)))
        .collect()?;
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::df;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let df = df! {
            "symbol" => ["A"],
            "close" => [1.0],
        }
        .unwrap();

        let err = symbol_partitions(&df).unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingColumn(c) if c == "date"));
    }

    #[test]
    fn test_partitions_are_sorted_by_date() {
        let df = df! {
            "symbol" => ["B", "A", "B", "A"],
            "date" => [d(2024, 1, 2), d(2024, 1, 2), d(2024, 1, 1), d(2024, 1, 1)],
            "close" => [4.0, 2.0, 3.0, 1.0],
        }
        .unwrap();

        let parts = symbol_partitions(&df).unwrap();
        assert_eq!(parts.len(), 2);

        let a = &parts[0];
        let closes = a.column("close").unwrap().f64().unwrap();
        assert_eq!(closes.get(0), Some(1.0));
        assert_eq!(closes.get(1), Some(2.0));
    }

    #[test]
    fn test_empty_table_yields_no_partitions() {
        let df = df! {
            "symbol" => Vec::<String>::new(),
            "date" => Vec::<NaiveDate>::new(),
            "close" => Vec::<f64>::new(),
        }
        .unwrap();

        assert!(symbol_partitions(&df).unwrap().is_empty());
    }

    #[test]
    fn test_filter_year() {
        let df = df! {
            "symbol" => ["A", "A", "A"],
            "date" => [d(2022, 12, 30), d(2023, 1, 2), d(2023, 6, 1)],
            "close" => [1.0, 2.0, 3.0],
        }
        .unwrap();

        let filtered = filter_year(&df, 2023).unwrap();
        assert_eq!(filtered.height(), 2);

        let none = filter_year(&df, 2020).unwrap();
        assert_eq!(none.height(), 0);
        assert_eq!(none.width(), df.width());
    }
}
