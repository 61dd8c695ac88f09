//! End-to-end pipeline scenarios over a two-symbol year of daily data.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use polars::df;
use polars::prelude::*;
use stockboard_analytics::{
    RiskConfig, annualized_volatility, cagr_by_symbol, kpi_summary, monthly_returns, risk_table,
    sharpe_by_symbol, with_normalized, with_returns, with_vwap, yearly_returns,
};

/// 252 consecutive daily dates starting 2023-01-02.
fn trading_days(n: usize) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    (0..n)
        .map(|i| start.checked_add_days(chrono::Days::new(i as u64)).unwrap())
        .collect()
}

/// Symbol A rises linearly from 100 to 200; symbol B stays flat at 100.
fn two_symbol_year() -> DataFrame {
    let n = 252;
    let mut symbols = vec!["A"; n];
    symbols.extend(vec!["B"; n]);

    let mut dates = trading_days(n);
    dates.extend(trading_days(n));

    let mut closes: Vec<f64> = (0..n)
        .map(|i| 100.0 + 100.0 * i as f64 / (n - 1) as f64)
        .collect();
    closes.extend(vec![100.0; n]);

    let mut volumes = vec![1_000.0; n];
    volumes.extend(vec![2_000.0; n]);

    df! {
        "symbol" => symbols,
        "date" => dates,
        "close" => closes,
        "volume" => volumes,
    }
    .unwrap()
}

fn empty_table() -> DataFrame {
    df! {
        "symbol" => Vec::<String>::new(),
        "date" => Vec::<NaiveDate>::new(),
        "close" => Vec::<f64>::new(),
        "volume" => Vec::<f64>::new(),
    }
    .unwrap()
}

fn value_for(df: &DataFrame, symbol: &str, col: &str) -> Option<f64> {
    let symbols = df.column("symbol").unwrap().str().unwrap();
    let values = df.column(col).unwrap().f64().unwrap();
    (0..df.height())
        .find(|&i| symbols.get(i) == Some(symbol))
        .and_then(|i| values.get(i))
}

#[test]
fn returns_have_one_null_per_symbol() {
    let table = two_symbol_year();
    let result = with_returns(&table).unwrap();

    let returns = result.column("returns").unwrap().f64().unwrap();
    assert_eq!(returns.null_count(), 2);
    assert_eq!(returns.len(), 504);

    // nulls sit on each symbol's first date
    assert!(returns.get(0).is_none());
    assert!(returns.get(252).is_none());
}

#[test]
fn normalized_price_starts_at_100() {
    let table = two_symbol_year();
    let result = with_normalized(&table).unwrap();

    let norm = result.column("norm_close").unwrap().f64().unwrap();
    assert_relative_eq!(norm.get(0).unwrap(), 100.0);
    assert_relative_eq!(norm.get(251).unwrap(), 200.0, epsilon = 1e-9);
    assert_relative_eq!(norm.get(252).unwrap(), 100.0);
    assert_relative_eq!(norm.get(503).unwrap(), 100.0);
}

#[test]
fn vwap_of_flat_symbol_is_its_price() {
    let table = two_symbol_year();
    let result = with_vwap(&table).unwrap();

    let vwap = result.column("vwap").unwrap().f64().unwrap();
    for i in 252..504 {
        assert_relative_eq!(vwap.get(i).unwrap(), 100.0);
    }
}

#[test]
fn riser_beats_flat_on_growth_metrics() {
    let table = two_symbol_year();

    let cagr = cagr_by_symbol(&table).unwrap();
    assert!(value_for(&cagr, "A", "cagr").unwrap() > 0.0);
    assert_relative_eq!(value_for(&cagr, "B", "cagr").unwrap(), 0.0);

    let vol = annualized_volatility(&table).unwrap();
    assert!(value_for(&vol, "A", "ann_vol").unwrap() > 0.0);
    assert_relative_eq!(value_for(&vol, "B", "ann_vol").unwrap(), 0.0);

    let sharpe = sharpe_by_symbol(&table, 0.04).unwrap();
    assert!(value_for(&sharpe, "A", "sharpe").unwrap() > 0.0);
    // flat symbol: volatility 0 -> Sharpe is a missing value, not an error
    assert!(value_for(&sharpe, "B", "sharpe").is_none());
}

#[test]
fn risk_table_ranks_riser_above_flat() {
    let table = two_symbol_year();
    let result = risk_table(&table, &RiskConfig::default()).unwrap();
    assert_eq!(result.height(), 2);

    // A has positive trailing vol; B's is 0. Drawdown percentiles tie at 0.
    let score_a = value_for(&result, "A", "risk_score").unwrap();
    let score_b = value_for(&result, "B", "risk_score").unwrap();
    assert!(score_a > score_b);
    assert_relative_eq!(score_a, 0.6 * 100.0 + 0.4 * 75.0);
    assert_relative_eq!(score_b, 0.6 * 50.0 + 0.4 * 75.0);

    // flat symbol gets the defensive zero, unlike sharpe_by_symbol
    assert_relative_eq!(value_for(&result, "B", "sharpe").unwrap(), 0.0);
    assert!(value_for(&result, "A", "sharpe").unwrap() > 0.0);

    let symbols = result.column("symbol").unwrap().str().unwrap();
    assert_eq!(symbols.get(0), Some("A"));
}

#[test]
fn risk_table_window_exclusion_boundary() {
    // exactly window + 4 rows: excluded; one more row: included
    let n = 34;
    let df = df! {
        "symbol" => vec!["X"; n],
        "date" => trading_days(n),
        "close" => (0..n).map(|i| 100.0 + (i % 7) as f64).collect::<Vec<f64>>(),
    }
    .unwrap();

    let result = risk_table(&df, &RiskConfig::with_window(30)).unwrap();
    assert_eq!(result.height(), 0);
}

#[test]
fn monthly_buckets_cover_the_year() {
    let table = two_symbol_year();
    let monthly = monthly_returns(&table).unwrap();

    // 252 consecutive calendar days from Jan 2 2023 span Jan..=Sep
    let months = monthly.column("month").unwrap().i32().unwrap();
    let years = monthly.column("year").unwrap().i32().unwrap();
    assert_eq!(monthly.height(), 18);
    assert_eq!(months.get(0), Some(1));
    assert_eq!(years.get(0), Some(2023));

    // flat symbol: every monthly return is exactly 0
    let symbols = monthly.column("symbol").unwrap().str().unwrap();
    let rets = monthly.column("monthly_return").unwrap().f64().unwrap();
    for i in 0..monthly.height() {
        if symbols.get(i) == Some("B") {
            assert_relative_eq!(rets.get(i).unwrap(), 0.0);
        }
    }
}

#[test]
fn yearly_returns_match_endpoints() {
    let table = two_symbol_year();
    let yearly = yearly_returns(&table).unwrap();
    assert_eq!(yearly.height(), 2);

    assert_relative_eq!(
        value_for(&yearly, "A", "yearly_return").unwrap(),
        1.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(value_for(&yearly, "B", "yearly_return").unwrap(), 0.0);
}

#[test]
fn kpi_summary_picks_the_riser() {
    let table = two_symbol_year();
    let summary = kpi_summary(&table, 0.04).unwrap();

    assert_eq!(summary.symbols, 2);
    assert_eq!(summary.best_yearly.as_ref().unwrap().symbol, "A");
    assert_eq!(summary.worst_yearly.as_ref().unwrap().symbol, "B");
    assert_eq!(summary.best_cagr.as_ref().unwrap().symbol, "A");
    // B's Sharpe is null and must not participate in the ranking
    assert_eq!(summary.best_sharpe.as_ref().unwrap().symbol, "A");
}

#[test]
fn every_stage_accepts_an_empty_table() {
    let table = empty_table();

    assert_eq!(with_returns(&table).unwrap().height(), 0);
    assert_eq!(with_vwap(&table).unwrap().height(), 0);
    assert_eq!(with_normalized(&table).unwrap().height(), 0);
    assert_eq!(monthly_returns(&table).unwrap().height(), 0);
    assert_eq!(yearly_returns(&table).unwrap().height(), 0);
    assert_eq!(cagr_by_symbol(&table).unwrap().height(), 0);
    assert_eq!(annualized_volatility(&table).unwrap().height(), 0);
    assert_eq!(sharpe_by_symbol(&table, 0.04).unwrap().height(), 0);
    assert_eq!(risk_table(&table, &RiskConfig::default()).unwrap().height(), 0);
}

#[test]
fn pipeline_is_idempotent() {
    let table = two_symbol_year();
    let once = risk_table(&table, &RiskConfig::default()).unwrap();
    let twice = risk_table(&table, &RiskConfig::default()).unwrap();
    assert!(once.equals_missing(&twice));

    // the input table is never mutated
    assert!(table.equals(&two_symbol_year()));
}
