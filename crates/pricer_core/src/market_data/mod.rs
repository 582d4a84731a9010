//! Market data structures for closed-form pricing.
//!
//! # Components
//!
//! - [`equity`]: The [`Equity`] capability and [`TradableEquity`]
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{Equity, TradableEquity};
//!
//! let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
//! assert_eq!(format!("{}", spx), "Equity: .SPX (USD)");
//! assert_eq!(spx.spot(), 100.0);
//! ```

pub mod equity;

pub use equity::{Equity, TradableEquity};
