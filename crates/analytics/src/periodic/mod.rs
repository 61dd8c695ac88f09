//! Periodic aggregation - monthly and yearly return tables
//!
//! Rolls the daily price table up into one row per (symbol, year, month) or
//! (symbol, year) bucket. A bucket's return compares the close on its
//! earliest date against the close on its latest date, so a bucket with a
//! single observation always returns 0.

pub mod monthly;
pub mod seasonality;
pub mod yearly;

pub use monthly::monthly_returns;
pub use seasonality::average_monthly_returns;
pub use yearly::yearly_returns;

/// Calendar year column of the aggregate tables.
pub const YEAR: &str = "year";
/// Calendar month column (1-12) of the monthly table.
pub const MONTH: &str = "month";
/// Close on the earliest date in the bucket.
pub const FIRST_CLOSE: &str = "first_close";
/// Close on the latest date in the bucket.
pub const LAST_CLOSE: &str = "last_close";
/// Bucket return of the monthly table.
pub const MONTHLY_RETURN: &str = "monthly_return";
/// Bucket return of the yearly table.
pub const YEARLY_RETURN: &str = "yearly_return";
