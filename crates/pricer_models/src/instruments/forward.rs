//! Forward contract priced by cost of carry.

use std::fmt;

use pricer_core::market_data::Equity;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

use super::option::{OptionContract, OptionType};
use crate::analytical::forward_price;

/// Long forward contract on an equity.
///
/// Volatility is fixed at zero and an expiry of zero is allowed, in which
/// case the value is exactly `S - K`.
///
/// # Examples
/// ```
/// use pricer_core::market_data::TradableEquity;
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::Forward;
///
/// let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
/// let forward = Forward::new(&spx, 100.0, 0.1, 1.0).unwrap();
///
/// assert!((forward.price().unwrap() - 9.516258196404053).abs() < 1e-12);
/// assert_eq!(
///     forward.to_string(),
///     "forward on .SPX, with strike 100, interest rate 0.1, expiring in 1, volatility = 0"
/// );
/// ```
pub struct Forward<'a, E: Equity + ?Sized> {
    contract: OptionContract<'a, E>,
}

impl<'a, E: Equity + ?Sized> Forward<'a, E> {
    /// Creates a new forward.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for a non-positive strike, a negative
    /// expiry or a non-finite input.
    pub fn new(
        underlyer: &'a E,
        strike: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        let contract =
            OptionContract::new(underlyer, strike, 0.0, rate, expiry, OptionType::Forward)?;
        Ok(Self { contract })
    }

    /// Returns the underlying contract parameters.
    #[inline]
    pub fn contract(&self) -> &OptionContract<'a, E> {
        &self.contract
    }
}

impl<E: Equity + ?Sized> Priceable for Forward<'_, E> {
    /// S - K·e^(-rT) at the underlyer's current spot.
    fn price(&self) -> Result<f64, PricingError> {
        forward_price(
            self.contract.underlyer_spot(),
            self.contract.strike(),
            self.contract.rate(),
            self.contract.expiry(),
        )
    }
}

impl<E: Equity + ?Sized> Clone for Forward<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Equity + ?Sized> Copy for Forward<'_, E> {}

impl<E: Equity + ?Sized> fmt::Debug for Forward<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Forward").field(&self.contract).finish()
    }
}

impl<E: Equity + ?Sized> fmt::Display for Forward<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.contract, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::TradableEquity;

    fn spx() -> TradableEquity {
        TradableEquity::new(".SPX", "USD", "US", "North America")
    }

    #[test]
    fn test_reference_price() {
        let equity = spx();
        let forward = Forward::new(&equity, 100.0, 0.1, 1.0).unwrap();
        assert_relative_eq!(
            forward.price().unwrap(),
            100.0 - 100.0 * (-0.1_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_volatility_is_zero() {
        let equity = spx();
        let forward = Forward::new(&equity, 100.0, 0.1, 1.0).unwrap();
        assert_eq!(forward.contract().volatility(), 0.0);
        assert_eq!(forward.contract().option_type(), OptionType::Forward);
    }

    #[test]
    fn test_zero_expiry_is_spot_minus_strike() {
        let equity = spx().with_spot(103.5).unwrap();
        let forward = Forward::new(&equity, 100.0, 0.1, 0.0).unwrap();
        assert_eq!(forward.price().unwrap(), 3.5);
    }

    #[test]
    fn test_negative_expiry_rejected() {
        let equity = spx();
        let err = Forward::new(&equity, 100.0, 0.1, -0.25).unwrap_err();
        assert_eq!(err.parameter(), Some("expiry"));
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let equity = spx();
        let err = Forward::new(&equity, 0.0, 0.1, 1.0).unwrap_err();
        assert_eq!(err.parameter(), Some("strike"));
    }

    #[test]
    fn test_zero_spot_priced() {
        let equity = spx().with_spot(0.0).unwrap();
        let forward = Forward::new(&equity, 100.0, 0.0, 1.0).unwrap();
        assert_eq!(forward.price().unwrap(), -100.0);
    }
}
