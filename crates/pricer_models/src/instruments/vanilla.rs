//! European call and put options priced with Black-Scholes.

use std::fmt;

use pricer_core::market_data::Equity;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

use super::option::{OptionContract, OptionType};
use crate::analytical::BlackScholes;

/// European call option.
///
/// # Examples
/// ```
/// use pricer_core::market_data::TradableEquity;
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::CallOption;
///
/// let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
/// let call = CallOption::new(&spx, 100.0, 0.2, 0.1, 1.0).unwrap();
///
/// let price = call.price().unwrap();
/// assert!((price - 13.269676584660893).abs() < 1e-9);
/// ```
pub struct CallOption<'a, E: Equity + ?Sized> {
    contract: OptionContract<'a, E>,
}

/// European put option.
///
/// # Examples
/// ```
/// use pricer_core::market_data::TradableEquity;
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::PutOption;
///
/// let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
/// let put = PutOption::new(&spx, 100.0, 0.2, 0.1, 1.0).unwrap();
///
/// let price = put.price().unwrap();
/// assert!((price - 3.7534183882568364).abs() < 1e-9);
/// ```
pub struct PutOption<'a, E: Equity + ?Sized> {
    contract: OptionContract<'a, E>,
}

impl<'a, E: Equity + ?Sized> CallOption<'a, E> {
    /// Creates a new call.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for a non-positive strike or expiry,
    /// a negative volatility or a non-finite input.
    pub fn new(
        underlyer: &'a E,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        let contract =
            OptionContract::new(underlyer, strike, volatility, rate, expiry, OptionType::Call)?;
        Ok(Self { contract })
    }

    /// Returns the underlying contract parameters.
    #[inline]
    pub fn contract(&self) -> &OptionContract<'a, E> {
        &self.contract
    }
}

impl<'a, E: Equity + ?Sized> PutOption<'a, E> {
    /// Creates a new put.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for a non-positive strike or expiry,
    /// a negative volatility or a non-finite input.
    pub fn new(
        underlyer: &'a E,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        let contract =
            OptionContract::new(underlyer, strike, volatility, rate, expiry, OptionType::Put)?;
        Ok(Self { contract })
    }

    /// Returns the underlying contract parameters.
    #[inline]
    pub fn contract(&self) -> &OptionContract<'a, E> {
        &self.contract
    }
}

fn model<E: Equity + ?Sized>(
    contract: &OptionContract<'_, E>,
) -> Result<BlackScholes, PricingError> {
    BlackScholes::new(
        contract.underlyer_spot(),
        contract.rate(),
        contract.volatility(),
    )
}

impl<E: Equity + ?Sized> Priceable for CallOption<'_, E> {
    /// Black-Scholes call value at the underlyer's current spot.
    ///
    /// # Errors
    /// - `PricingError::NumericDegeneracy` if volatility is zero
    /// - `PricingError::InvalidParameter` if the spot is not positive
    fn price(&self) -> Result<f64, PricingError> {
        model(&self.contract)?.price_call(self.contract.strike(), self.contract.expiry())
    }
}

impl<E: Equity + ?Sized> Priceable for PutOption<'_, E> {
    /// Black-Scholes put value at the underlyer's current spot.
    ///
    /// # Errors
    /// - `PricingError::NumericDegeneracy` if volatility is zero
    /// - `PricingError::InvalidParameter` if the spot is not positive
    fn price(&self) -> Result<f64, PricingError> {
        model(&self.contract)?.price_put(self.contract.strike(), self.contract.expiry())
    }
}

impl<E: Equity + ?Sized> Clone for CallOption<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Equity + ?Sized> Copy for CallOption<'_, E> {}

impl<E: Equity + ?Sized> Clone for PutOption<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Equity + ?Sized> Copy for PutOption<'_, E> {}

impl<E: Equity + ?Sized> fmt::Debug for CallOption<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallOption").field(&self.contract).finish()
    }
}

impl<E: Equity + ?Sized> fmt::Debug for PutOption<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PutOption").field(&self.contract).finish()
    }
}

impl<E: Equity + ?Sized> fmt::Display for CallOption<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.contract, f)
    }
}

impl<E: Equity + ?Sized> fmt::Display for PutOption<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.contract, f)
    }
}
