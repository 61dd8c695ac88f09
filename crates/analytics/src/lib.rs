#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod correlation;
pub mod error;
pub mod periodic;
pub mod rank;
pub mod risk;
pub mod series;
pub mod summary;
pub mod table;

// Re-export the analytics entry points
pub use correlation::return_correlation;
pub use error::{AnalyticsError, Result};
pub use periodic::{average_monthly_returns, monthly_returns, yearly_returns};
pub use rank::percentile_rank;
pub use risk::{
    RiskConfig, TRADING_DAYS_PER_YEAR, annualized_volatility, cagr_by_symbol, max_drawdown,
    max_drawdown_by_symbol, risk_table, sharpe_by_symbol,
};
pub use series::{with_normalized, with_returns, with_vwap};
pub use summary::{KpiSummary, SymbolStat, kpi_summary};
pub use table::{filter_year, sort_by_symbol_date};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
