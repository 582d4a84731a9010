//! # Pricer Models (L2: Business Logic)
//!
//! Equity instruments and the closed-form formulas that price them.
//!
//! This crate provides:
//! - Call, put and forward instruments on a shared equity underlyer
//! - Black-Scholes valuation for calls and puts
//! - Cost-of-carry valuation for forwards
//! - A put-call-forward parity check
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Borrowed underlyers** so that one equity backs many contracts
//! - **Validation at the boundary**: constructors and pricers return
//!   `PricingError` instead of NaN or infinity
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::TradableEquity;
//! use pricer_models::analytical::ParityCheck;
//! use pricer_models::instruments::{CallOption, Forward, PutOption};
//!
//! let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
//! let call = CallOption::new(&spx, 100.0, 0.2, 0.1, 1.0).unwrap();
//! let put = PutOption::new(&spx, 100.0, 0.2, 0.1, 1.0).unwrap();
//! let forward = Forward::new(&spx, 100.0, 0.1, 1.0).unwrap();
//!
//! let check = ParityCheck::evaluate(&call, &put, &forward).unwrap();
//! assert!(check.holds_default());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
