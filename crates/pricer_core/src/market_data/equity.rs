//! Equity underlyers.
//!
//! This module provides the [`Equity`] capability consumed by option
//! contracts and its tradable implementation, [`TradableEquity`].

use std::fmt;

use crate::types::PricingError;

/// A tradable underlying asset exposing a spot price.
///
/// Implementations are read-only: option contracts borrow an equity and
/// query `spot()` each time they are priced, so a single equity instance
/// can back any number of contracts.
///
/// # Contract
///
/// - `spot()` is always defined, finite and non-negative
/// - Identity accessors never change over the lifetime of the instance
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{Equity, TradableEquity};
///
/// let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
/// assert_eq!(spx.name(), ".SPX");
/// assert_eq!(spx.spot(), 100.0);
/// ```
pub trait Equity {
    /// Market name (ticker) of the equity.
    fn name(&self) -> &str;

    /// Denomination currency code.
    fn denominated(&self) -> &str;

    /// Country of listing.
    fn country(&self) -> &str;

    /// Geographic region of listing.
    fn region(&self) -> &str;

    /// Current spot price.
    fn spot(&self) -> f64;
}

/// Equity with a fixed spot price.
///
/// Stands in for a live market feed: unless configured otherwise with
/// [`with_spot`](TradableEquity::with_spot), the spot is
/// [`DEFAULT_SPOT`](TradableEquity::DEFAULT_SPOT). Deserialisation goes
/// through the same spot check as `with_spot`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TradableEquityRecord")
)]
pub struct TradableEquity {
    market_name: String,
    denominated: String,
    country: String,
    region: String,
    spot: f64,
}

impl TradableEquity {
    /// Spot price returned when none is configured.
    pub const DEFAULT_SPOT: f64 = 100.0;

    /// Creates a new tradable equity with the default spot.
    ///
    /// # Arguments
    /// * `market_name` - Market name, e.g. `.SPX`
    /// * `denominated` - Denomination currency, e.g. `USD`
    /// * `country` - Country of listing
    /// * `region` - Region of listing
    pub fn new(
        market_name: impl Into<String>,
        denominated: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            market_name: market_name.into(),
            denominated: denominated.into(),
            country: country.into(),
            region: region.into(),
            spot: Self::DEFAULT_SPOT,
        }
    }

    /// Returns a copy of this equity quoting `spot` instead.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` is negative or non-finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::{Equity, TradableEquity};
    ///
    /// let equity = TradableEquity::new("ACME", "EUR", "DE", "Europe")
    ///     .with_spot(42.5)
    ///     .unwrap();
    /// assert_eq!(equity.spot(), 42.5);
    ///
    /// let invalid = TradableEquity::new("ACME", "EUR", "DE", "Europe").with_spot(-1.0);
    /// assert!(invalid.is_err());
    /// ```
    pub fn with_spot(mut self, spot: f64) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot < 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                spot,
                "non-negative and finite",
            ));
        }
        self.spot = spot;
        Ok(self)
    }
}

/// Unvalidated field set read from serialised input.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TradableEquityRecord {
    market_name: String,
    denominated: String,
    country: String,
    region: String,
    #[serde(default = "default_spot")]
    spot: f64,
}

#[cfg(feature = "serde")]
fn default_spot() -> f64 {
    TradableEquity::DEFAULT_SPOT
}

#[cfg(feature = "serde")]
impl TryFrom<TradableEquityRecord> for TradableEquity {
    type Error = PricingError;

    fn try_from(record: TradableEquityRecord) -> Result<Self, Self::Error> {
        TradableEquity::new(
            record.market_name,
            record.denominated,
            record.country,
            record.region,
        )
        .with_spot(record.spot)
    }
}

impl Equity for TradableEquity {
    #[inline]
    fn name(&self) -> &str {
        &self.market_name
    }

    #[inline]
    fn denominated(&self) -> &str {
        &self.denominated
    }

    #[inline]
    fn country(&self) -> &str {
        &self.country
    }

    #[inline]
    fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    fn spot(&self) -> f64 {
        self.spot
    }
}

impl fmt::Display for TradableEquity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equity: {} ({})", self.market_name, self.denominated)
    }
}
