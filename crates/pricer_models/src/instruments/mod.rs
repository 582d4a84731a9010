//! Equity instrument definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - [`Instrument`] wraps all instrument types
//! - Each instrument borrows its underlyer, so several instruments can
//!   observe the same [`Equity`](pricer_core::market_data::Equity)
//! - Pricing goes through [`Priceable`]
//!
//! # Instrument Types
//!
//! - [`CallOption`]: European call priced with Black-Scholes
//! - [`PutOption`]: European put priced with Black-Scholes
//! - [`Forward`]: Forward contract priced by cost of carry
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::TradableEquity;
//! use pricer_core::traits::Priceable;
//! use pricer_models::instruments::{Instrument, OptionType};
//!
//! let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
//! let instrument = Instrument::new(OptionType::Put, &spx, 100.0, 0.2, 0.1, 1.0).unwrap();
//!
//! assert!(instrument.price().unwrap() > 0.0);
//! ```

mod forward;
mod option;
mod vanilla;

pub use forward::Forward;
pub use option::{OptionContract, OptionType};
pub use vanilla::{CallOption, PutOption};

use std::fmt;

use pricer_core::market_data::Equity;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

/// Unified instrument enum for static dispatch.
///
/// # Variants
/// - `Call`: European call
/// - `Put`: European put
/// - `Forward`: Forward contract
pub enum Instrument<'a, E: Equity + ?Sized> {
    /// European call
    Call(CallOption<'a, E>),
    /// European put
    Put(PutOption<'a, E>),
    /// Forward contract
    Forward(Forward<'a, E>),
}

impl<'a, E: Equity + ?Sized> Instrument<'a, E> {
    /// Builds the instrument named by `option_type`.
    ///
    /// `volatility` is ignored for [`OptionType::Forward`].
    ///
    /// # Errors
    /// Propagates the constructor's `PricingError::InvalidParameter`.
    pub fn new(
        option_type: OptionType,
        underlyer: &'a E,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        Ok(match option_type {
            OptionType::Call => {
                Instrument::Call(CallOption::new(underlyer, strike, volatility, rate, expiry)?)
            }
            OptionType::Put => {
                Instrument::Put(PutOption::new(underlyer, strike, volatility, rate, expiry)?)
            }
            OptionType::Forward => {
                Instrument::Forward(Forward::new(underlyer, strike, rate, expiry)?)
            }
        })
    }

    /// Returns the contract parameters of the wrapped instrument.
    #[inline]
    pub fn contract(&self) -> &OptionContract<'a, E> {
        match self {
            Instrument::Call(call) => call.contract(),
            Instrument::Put(put) => put.contract(),
            Instrument::Forward(forward) => forward.contract(),
        }
    }

    /// Returns the instrument type tag.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.contract().option_type()
    }
}

impl<E: Equity + ?Sized> Clone for Instrument<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Equity + ?Sized> Copy for Instrument<'_, E> {}

impl<E: Equity + ?Sized> fmt::Debug for Instrument<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Call(call) => fmt::Debug::fmt(call, f),
            Instrument::Put(put) => fmt::Debug::fmt(put, f),
            Instrument::Forward(forward) => fmt::Debug::fmt(forward, f),
        }
    }
}

impl<E: Equity + ?Sized> Priceable for Instrument<'_, E> {
    fn price(&self) -> Result<f64, PricingError> {
        match self {
            Instrument::Call(call) => call.price(),
            Instrument::Put(put) => put.price(),
            Instrument::Forward(forward) => forward.price(),
        }
    }
}

impl<E: Equity + ?Sized> fmt::Display for Instrument<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.contract(), f)
    }
}

impl<'a, E: Equity + ?Sized> From<CallOption<'a, E>> for Instrument<'a, E> {
    fn from(call: CallOption<'a, E>) -> Self {
        Instrument::Call(call)
    }
}

impl<'a, E: Equity + ?Sized> From<PutOption<'a, E>> for Instrument<'a, E> {
    fn from(put: PutOption<'a, E>) -> Self {
        Instrument::Put(put)
    }
}

impl<'a, E: Equity + ?Sized> From<Forward<'a, E>> for Instrument<'a, E> {
    fn from(forward: Forward<'a, E>) -> Self {
        Instrument::Forward(forward)
    }
}
