//! Put-call-forward parity.
//!
//! For a call, a put and a forward sharing strike, rate, expiry and
//! underlyer, no-arbitrage requires
//!
//! ```text
//! C - P - F = 0
//! ```
//!
//! regardless of volatility. [`ParityCheck`] prices the three legs and
//! reports the residual.

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use tracing::debug;

/// Relative tolerance used when none is supplied.
pub const DEFAULT_PARITY_TOLERANCE: f64 = 1e-9;

/// Prices of the three parity legs and their residual.
///
/// # Examples
/// ```
/// use pricer_models::analytical::ParityCheck;
///
/// let check = ParityCheck::new(13.269676584660893, 3.7534183882568364, 9.516258196404053);
/// assert!(check.residual().abs() < 1e-12);
/// assert!(check.holds_default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParityCheck {
    call: f64,
    put: f64,
    forward: f64,
}

impl ParityCheck {
    /// Creates a check from already computed prices.
    pub fn new(call: f64, put: f64, forward: f64) -> Self {
        Self { call, put, forward }
    }

    /// Prices the three instruments and builds the check.
    ///
    /// The caller is responsible for the legs sharing strike, rate, expiry
    /// and underlyer; otherwise the residual carries no meaning.
    ///
    /// # Errors
    /// The first `PricingError` raised by any leg.
    pub fn evaluate<C, P, F>(call: &C, put: &P, forward: &F) -> Result<Self, PricingError>
    where
        C: Priceable + ?Sized,
        P: Priceable + ?Sized,
        F: Priceable + ?Sized,
    {
        let check = Self::new(call.price()?, put.price()?, forward.price()?);
        debug!(
            call = check.call,
            put = check.put,
            forward = check.forward,
            residual = check.residual(),
            "parity evaluated"
        );
        Ok(check)
    }

    /// Call leg price.
    #[inline]
    pub fn call(&self) -> f64 {
        self.call
    }

    /// Put leg price.
    #[inline]
    pub fn put(&self) -> f64 {
        self.put
    }

    /// Forward leg price.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// C - P - F, evaluated left to right.
    #[inline]
    pub fn residual(&self) -> f64 {
        self.call - self.put - self.forward
    }

    /// Returns whether |residual| <= tolerance * max(1, largest |leg|).
    ///
    /// Scaling by the largest leg makes the tolerance relative for large
    /// notionals while staying absolute near zero.
    pub fn holds(&self, tolerance: f64) -> bool {
        let scale = self
            .call
            .abs()
            .max(self.put.abs())
            .max(self.forward.abs())
            .max(1.0);
        self.residual().abs() <= tolerance * scale
    }

    /// [`holds`](Self::holds) with [`DEFAULT_PARITY_TOLERANCE`].
    #[inline]
    pub fn holds_default(&self) -> bool {
        self.holds(DEFAULT_PARITY_TOLERANCE)
    }
}
