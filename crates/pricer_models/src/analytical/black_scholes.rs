//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = -S·N(-d₁) + K·e^(-rT)·N(-d₂)
//!
//! Where the forward S·e^(rT) is folded into the log-moneyness:
//! - d₁ = ln(S·e^(rT) / K) / (σ√T) + σ√T / 2
//! - d₂ = d₁ - σ√T
//!
//! The expressions are evaluated in exactly this operand order. The
//! textbook form `(ln(S/K) + (r + σ²/2)T) / (σ√T)` is algebraically equal
//! but rounds differently in the last digit.

use pricer_core::math::norm_cdf;
use pricer_core::types::PricingError;
use tracing::trace;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); the contract terms
/// (strike, expiry) are supplied per pricing call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.1, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.1_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` if spot <= 0, rate is non-finite,
    ///   or volatility is negative or non-finite
    /// - `PricingError::NumericDegeneracy` if volatility == 0, since d₁ and
    ///   d₂ divide by σ√T
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).unwrap_err().is_invalid_parameter());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).unwrap_err().is_numeric_degeneracy());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                spot,
                "positive and finite",
            ));
        }

        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter("rate", rate, "finite"));
        }

        if !volatility.is_finite() || volatility < 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                volatility,
                "non-negative and finite",
            ));
        }

        if volatility == 0.0 {
            return Err(PricingError::numeric_degeneracy(
                "volatility is zero: d1 and d2 divide by volatility * sqrt(expiry)",
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d₁ and d₂ terms.
    ///
    /// d₁ = ln(S·e^(rT) / K) / (σ√T) + 0.5·σ·√T,  d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if strike or expiry is not positive
    /// and finite.
    pub fn d1_d2(&self, strike: f64, expiry: f64) -> Result<(f64, f64), PricingError> {
        validate_contract(strike, expiry)?;

        let (s, k, sigma, r, t) = (self.spot, strike, self.volatility, self.rate, expiry);
        let sqrt_t = t.sqrt();
        let d1 = (s * (r * t).exp() / k).ln() / (sigma * sqrt_t) + 0.5 * sigma * sqrt_t;
        let d2 = d1 - sigma * sqrt_t;

        trace!(d1, d2, strike, expiry, "black-scholes terms");
        Ok((d1, d2))
    }

    /// Computes the European call price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` for a non-positive strike or expiry
    /// - `PricingError::NumericDegeneracy` if the result is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.1, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 13.269676584660893).abs() < 1e-9);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        let (s, k, r, t) = (self.spot, strike, self.rate, expiry);

        let price = s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2);
        ensure_finite("call", price)
    }

    /// Computes the European put price.
    ///
    /// P = -S·N(-d₁) + K·e^(-rT)·N(-d₂)
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` for a non-positive strike or expiry
    /// - `PricingError::NumericDegeneracy` if the result is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.1, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0).unwrap();
    /// assert!((price - 3.7534183882568364).abs() < 1e-9);
    /// ```
    pub fn price_put(&self, strike: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        let (s, k, r, t) = (self.spot, strike, self.rate, expiry);

        let price = -s * norm_cdf(-d1) + k * (-r * t).exp() * norm_cdf(-d2);
        ensure_finite("put", price)
    }
}

fn validate_contract(strike: f64, expiry: f64) -> Result<(), PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::invalid_parameter(
            "strike",
            strike,
            "positive and finite",
        ));
    }

    if !expiry.is_finite() || expiry <= 0.0 {
        return Err(PricingError::invalid_parameter(
            "expiry",
            expiry,
            "positive and finite",
        ));
    }

    Ok(())
}

fn ensure_finite(kind: &str, price: f64) -> Result<f64, PricingError> {
    if price.is_finite() {
        Ok(price)
    } else {
        Err(PricingError::numeric_degeneracy(format!(
            "{} price evaluated to {}",
            kind, price
        )))
    }
}
