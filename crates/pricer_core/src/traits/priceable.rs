//! Trait for priceable instruments.
//!
//! This module defines the fundamental pricing abstraction (`Priceable`).
//! Implementations are expected to use static dispatch (enum-based) rather
//! than `Box<dyn Priceable>`.

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// # Design Philosophy
///
/// Concrete instruments implement this trait directly, and heterogeneous
/// collections are expressed as an `enum` that forwards to its variants:
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
///
/// enum Instrument {
///     Cash { amount: f64 },
///     ZeroCoupon { face: f64, rate: f64, maturity: f64 },
/// }
///
/// impl Priceable for Instrument {
///     fn price(&self) -> Result<f64, PricingError> {
///         match self {
///             Instrument::Cash { amount } => Ok(*amount),
///             Instrument::ZeroCoupon { face, rate, maturity } => {
///                 Ok(face * (-rate * maturity).exp())
///             }
///         }
///     }
/// }
///
/// let bond = Instrument::ZeroCoupon { face: 100.0, rate: 0.0, maturity: 1.0 };
/// assert_eq!(bond.price().unwrap(), 100.0);
/// ```
pub trait Priceable {
    /// Calculate the present fair value of the instrument.
    ///
    /// # Returns
    /// `Ok(price)` with a finite value, or the `PricingError` describing
    /// which input made the computation impossible.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - Repeated calls on an unmutated instance return bit-identical results
    fn price(&self) -> Result<f64, PricingError>;
}
