//! Derived series - per-symbol time-dependent columns
//!
//! Each operation enriches a price table with one derived column, computed
//! independently per symbol over the (symbol, date) ordering: daily simple
//! returns, cumulative VWAP, and base-100 normalized price. Rows are never
//! reordered or mutated; the input table is left untouched.

pub mod normalize;
pub mod returns;
pub mod vwap;

pub use normalize::with_normalized;
pub use returns::with_returns;
pub use vwap::with_vwap;

/// Daily simple return column added by [`with_returns`].
pub const RETURNS: &str = "returns";
/// Cumulative volume-weighted average price column added by [`with_vwap`].
pub const VWAP: &str = "vwap";
/// Base-100 normalized close column added by [`with_normalized`].
pub const NORM_CLOSE: &str = "norm_close";
