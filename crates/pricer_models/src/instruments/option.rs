//! Shared option contract parameters.
//!
//! [`OptionContract`] is the parameter bag and accessor surface common to
//! every equity instrument in this crate. It performs construction-time
//! validation but does not price anything itself.

use std::fmt;
use std::str::FromStr;

use pricer_core::market_data::Equity;
use pricer_core::types::PricingError;

/// Instrument type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// European call
    Call,
    /// European put
    Put,
    /// Forward contract (no optionality)
    Forward,
}

impl OptionType {
    /// Lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
            OptionType::Forward => "forward",
        }
    }

    /// Returns whether the instrument carries optionality (calls and puts).
    #[inline]
    pub fn has_optionality(&self) -> bool {
        !matches!(self, OptionType::Forward)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `call`, `put` or `forward`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            "forward" => Ok(OptionType::Forward),
            _ => Err(PricingError::UnknownInstrument(s.to_string())),
        }
    }
}

/// Option contract on a borrowed equity underlyer.
///
/// The underlyer is shared, never copied: its spot is read each time the
/// contract is priced. All other fields are fixed at construction.
///
/// # Examples
/// ```
/// use pricer_core::market_data::TradableEquity;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let spx = TradableEquity::new(".SPX", "USD", "US", "North America");
/// let contract = OptionContract::new(&spx, 100.0, 0.2, 0.1, 1.0, OptionType::Call).unwrap();
///
/// assert_eq!(contract.underlyer_spot(), 100.0);
/// assert_eq!(
///     contract.to_string(),
///     "call on .SPX, with strike 100, interest rate 0.1, expiring in 1, volatility = 0.2"
/// );
/// ```
pub struct OptionContract<'a, E: Equity + ?Sized> {
    underlyer: &'a E,
    strike: f64,
    volatility: f64,
    rate: f64,
    expiry: f64,
    option_type: OptionType,
}

impl<'a, E: Equity + ?Sized> OptionContract<'a, E> {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `underlyer` - Shared equity underlyer
    /// * `strike` - Strike price (must be positive and finite)
    /// * `volatility` - Volatility (non-negative and finite; zero for forwards)
    /// * `rate` - Continuously compounded rate (finite, may be negative)
    /// * `expiry` - Time to expiry in years (positive for calls and puts,
    ///   non-negative for forwards)
    /// * `option_type` - Instrument type tag
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the offending parameter.
    /// A zero volatility call or put is accepted here and rejected as
    /// `NumericDegeneracy` when priced.
    pub fn new(
        underlyer: &'a E,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "strike",
                strike,
                "positive and finite",
            ));
        }

        if !volatility.is_finite() || volatility < 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                volatility,
                "non-negative and finite",
            ));
        }

        if !option_type.has_optionality() && volatility != 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                volatility,
                "zero for a forward",
            ));
        }

        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter("rate", rate, "finite"));
        }

        if option_type.has_optionality() {
            if !expiry.is_finite() || expiry <= 0.0 {
                return Err(PricingError::invalid_parameter(
                    "expiry",
                    expiry,
                    "positive and finite",
                ));
            }
        } else if !expiry.is_finite() || expiry < 0.0 {
            return Err(PricingError::invalid_parameter(
                "expiry",
                expiry,
                "non-negative and finite",
            ));
        }

        Ok(Self {
            underlyer,
            strike,
            volatility,
            rate,
            expiry,
            option_type,
        })
    }

    /// Returns the shared underlyer.
    #[inline]
    pub fn underlyer(&self) -> &'a E {
        self.underlyer
    }

    /// Returns the underlyer's current spot.
    #[inline]
    pub fn underlyer_spot(&self) -> f64 {
        self.underlyer.spot()
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the interest rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the instrument type tag.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

// Manual impls: derives would require `E: Clone` / `E: Debug`.
impl<E: Equity + ?Sized> Clone for OptionContract<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Equity + ?Sized> Copy for OptionContract<'_, E> {}

impl<E: Equity + ?Sized> fmt::Debug for OptionContract<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionContract")
            .field("underlyer", &self.underlyer.name())
            .field("strike", &self.strike)
            .field("volatility", &self.volatility)
            .field("rate", &self.rate)
            .field("expiry", &self.expiry)
            .field("option_type", &self.option_type)
            .finish()
    }
}

impl<E: Equity + ?Sized> fmt::Display for OptionContract<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}, with strike {}, interest rate {}, expiring in {}, volatility = {}",
            self.option_type,
            self.underlyer.name(),
            self.strike,
            self.rate,
            self.expiry,
            self.volatility
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::TradableEquity;

    fn spx() -> TradableEquity {
        TradableEquity::new(".SPX", "USD", "US", "North America")
    }

    #[test]
    fn test_option_type_display_and_parse() {
        for ty in [OptionType::Call, OptionType::Put, OptionType::Forward] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
        assert_eq!(" CALL ".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(
            "straddle".parse::<OptionType>().unwrap_err(),
            PricingError::UnknownInstrument("straddle".to_string())
        );
    }

    #[test]
    fn test_option_type_optionality() {
        assert!(OptionType::Call.has_optionality());
        assert!(OptionType::Put.has_optionality());
        assert!(!OptionType::Forward.has_optionality());
    }

    #[test]
    fn test_accessors() {
        let equity = spx();
        let contract =
            OptionContract::new(&equity, 105.0, 0.25, -0.01, 0.5, OptionType::Put).unwrap();
        assert_eq!(contract.strike(), 105.0);
        assert_eq!(contract.volatility(), 0.25);
        assert_eq!(contract.rate(), -0.01);
        assert_eq!(contract.expiry(), 0.5);
        assert_eq!(contract.option_type(), OptionType::Put);
        assert_eq!(contract.underlyer().name(), ".SPX");
        assert_eq!(contract.underlyer_spot(), 100.0);
    }

    #[test]
    fn test_underlyer_is_shared_not_copied() {
        let equity = spx();
        let call = OptionContract::new(&equity, 100.0, 0.2, 0.1, 1.0, OptionType::Call).unwrap();
        let put = OptionContract::new(&equity, 100.0, 0.2, 0.1, 1.0, OptionType::Put).unwrap();
        assert!(std::ptr::eq(call.underlyer(), put.underlyer()));
        assert!(std::ptr::eq(call.underlyer(), &equity));
    }

    #[test]
    fn test_display_forward() {
        let equity = spx();
        let contract =
            OptionContract::new(&equity, 100.0, 0.0, 0.1, 1.0, OptionType::Forward).unwrap();
        assert_eq!(
            contract.to_string(),
            "forward on .SPX, with strike 100, interest rate 0.1, expiring in 1, volatility = 0"
        );
    }

    #[test]
    fn test_invalid_strike() {
        let equity = spx();
        for strike in [0.0, -1.0, f64::NAN] {
            let err = OptionContract::new(&equity, strike, 0.2, 0.1, 1.0, OptionType::Call)
                .unwrap_err();
            assert_eq!(err.parameter(), Some("strike"));
        }
    }

    #[test]
    fn test_invalid_volatility() {
        let equity = spx();
        let err =
            OptionContract::new(&equity, 100.0, -0.2, 0.1, 1.0, OptionType::Call).unwrap_err();
        assert_eq!(err.parameter(), Some("volatility"));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_forward_rejects_volatility() {
        let equity = spx();
        let err =
            OptionContract::new(&equity, 100.0, 0.2, 0.1, 1.0, OptionType::Forward).unwrap_err();
        assert!(err.to_string().contains("zero for a forward"));
    }

    #[test]
    fn test_zero_volatility_call_constructs() {
        let equity = spx();
        assert!(OptionContract::new(&equity, 100.0, 0.0, 0.1, 1.0, OptionType::Call).is_ok());
    }

    #[test]
    fn test_invalid_rate() {
        let equity = spx();
        let err = OptionContract::new(&equity, 100.0, 0.2, f64::NAN, 1.0, OptionType::Call)
            .unwrap_err();
        assert_eq!(err.parameter(), Some("rate"));
    }

    #[test]
    fn test_expiry_rules() {
        let equity = spx();
        let err =
            OptionContract::new(&equity, 100.0, 0.2, 0.1, 0.0, OptionType::Call).unwrap_err();
        assert_eq!(err.parameter(), Some("expiry"));
        let err =
            OptionContract::new(&equity, 100.0, 0.2, 0.1, 0.0, OptionType::Put).unwrap_err();
        assert_eq!(err.parameter(), Some("expiry"));

        assert!(OptionContract::new(&equity, 100.0, 0.0, 0.1, 0.0, OptionType::Forward).is_ok());
        let err =
            OptionContract::new(&equity, 100.0, 0.0, 0.1, -1.0, OptionType::Forward).unwrap_err();
        assert_eq!(err.parameter(), Some("expiry"));
    }

    #[test]
    fn test_debug_names_underlyer() {
        let equity = spx();
        let contract =
            OptionContract::new(&equity, 100.0, 0.2, 0.1, 1.0, OptionType::Call).unwrap();
        assert!(format!("{:?}", contract).contains(".SPX"));
    }
}
