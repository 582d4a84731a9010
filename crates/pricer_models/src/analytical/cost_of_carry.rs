//! Cost-of-carry valuation of forward contracts.
//!
//! **Forward Value**: F = S - K·e^(-rT)
//!
//! The value carries no optionality, so no volatility enters the formula
//! and T = 0 is well defined (F = S - K).

use pricer_core::types::PricingError;
use tracing::trace;

/// Present value of a long forward struck at `strike`.
///
/// # Arguments
/// * `spot` - Spot price (must be non-negative and finite)
/// * `strike` - Delivery price (must be positive and finite)
/// * `rate` - Continuously compounded rate (must be finite, may be negative)
/// * `expiry` - Time to delivery in years (must be non-negative and finite)
///
/// # Errors
/// `PricingError::InvalidParameter` naming the first parameter that violates
/// its constraint.
///
/// # Examples
/// ```
/// use pricer_models::analytical::forward_price;
///
/// let value = forward_price(100.0, 100.0, 0.1, 1.0).unwrap();
/// assert!((value - 9.516258196404053).abs() < 1e-12);
///
/// // At delivery the value is exactly S - K
/// assert_eq!(forward_price(105.0, 100.0, 0.1, 0.0).unwrap(), 5.0);
/// ```
pub fn forward_price(spot: f64, strike: f64, rate: f64, expiry: f64) -> Result<f64, PricingError> {
    if !spot.is_finite() || spot < 0.0 {
        return Err(PricingError::invalid_parameter(
            "spot",
            spot,
            "non-negative and finite",
        ));
    }

    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::invalid_parameter(
            "strike",
            strike,
            "positive and finite",
        ));
    }

    if !rate.is_finite() {
        return Err(PricingError::invalid_parameter("rate", rate, "finite"));
    }

    if !expiry.is_finite() || expiry < 0.0 {
        return Err(PricingError::invalid_parameter(
            "expiry",
            expiry,
            "non-negative and finite",
        ));
    }

    let (s, k, r, t) = (spot, strike, rate, expiry);
    let price = s - k * (-r * t).exp();

    if !price.is_finite() {
        return Err(PricingError::numeric_degeneracy(format!(
            "forward price evaluated to {}",
            price
        )));
    }

    trace!(spot, strike, rate, expiry, price, "cost-of-carry forward");
    Ok(price)
}
