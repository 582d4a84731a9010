//! Price command implementation
//!
//! Prices a single instrument of the configured scenario.

use std::io::Write;

use pricer_core::traits::Priceable;
use pricer_models::instruments::{Instrument, OptionType};
use serde::Serialize;
use tracing::info;

use crate::config::ScenarioConfig;
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct PriceReport {
    instrument: OptionType,
    description: String,
    price: f64,
}

/// Run the price command
pub fn run(
    config: &ScenarioConfig,
    instrument: &str,
    format: &str,
    out: &mut impl Write,
) -> Result<()> {
    let option_type: OptionType = instrument.parse()?;
    info!("Pricing {}...", option_type);

    let market = &config.market;
    let equity = config.equity()?;
    let instrument = Instrument::new(
        option_type,
        &equity,
        market.strike,
        market.volatility,
        market.rate,
        market.expiry,
    )?;
    let price = instrument.price()?;
    info!("  Price: {}", price);

    match format {
        "text" => {
            writeln!(out, "{}", instrument)?;
            writeln!(out, "price = {}", price)?;
        }
        "json" => {
            let report = PriceReport {
                instrument: option_type,
                description: instrument.to_string(),
                price,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: text, json",
                other
            )));
        }
    }

    Ok(())
}
