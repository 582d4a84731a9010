//! # pricer_core: Foundation for Closed-Form Derivative Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error taxonomy: `PricingError` (`types::error`)
//! - The pricing contract: `Priceable` (`traits::priceable`)
//! - Underlyers: `Equity`, `TradableEquity` (`market_data::equity`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Double-precision error function
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{Equity, TradableEquity};
//! use pricer_core::math::norm_cdf;
//!
//! let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
//! assert_eq!(spx.spot(), 100.0);
//!
//! assert_eq!(norm_cdf(0.0), 0.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `TradableEquity`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
