//! Analytical pricing formulas.
//!
//! This module provides closed-form valuations:
//! - Black-Scholes model for European calls and puts
//! - Cost-of-carry value for forwards
//! - Put-call-forward parity check
//!
//! All formulas validate their inputs and return `PricingError` rather than
//! propagating NaN or infinity.

pub mod black_scholes;
pub mod cost_of_carry;
pub mod parity;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use cost_of_carry::forward_price;
pub use parity::{ParityCheck, DEFAULT_PARITY_TOLERANCE};
