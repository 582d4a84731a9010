//! Mathematical utilities for closed-form pricing.
//!
//! - [`distributions`]: Standard normal CDF

pub mod distributions;

pub use distributions::norm_cdf;
