//! Parity command implementation
//!
//! Builds one equity plus a call, a put and a forward sharing strike, rate,
//! expiry and underlyer, prints them and reports C - P - F.

use std::io::Write;

use pricer_models::analytical::ParityCheck;
use pricer_models::instruments::{CallOption, Forward, PutOption};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ScenarioConfig;
use crate::{CliError, Result};

/// Machine-readable parity report
#[derive(Debug, Serialize)]
struct ParityReport<'a> {
    underlyer: &'a str,
    denominated: &'a str,
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    expiry: f64,
    #[serde(flatten)]
    prices: ParityCheck,
    residual: f64,
    holds: bool,
}

/// Shortest round-trip form: `0.0` for an exact zero, exponent notation for
/// tiny residuals.
fn format_residual(residual: f64) -> String {
    format!("{:?}", residual)
}

/// Run the parity command
pub fn run(config: &ScenarioConfig, format: &str, out: &mut impl Write) -> Result<()> {
    info!("Starting parity check...");

    let market = &config.market;
    let equity = config.equity()?;
    let call = CallOption::new(
        &equity,
        market.strike,
        market.volatility,
        market.rate,
        market.expiry,
    )?;
    let put = PutOption::new(
        &equity,
        market.strike,
        market.volatility,
        market.rate,
        market.expiry,
    )?;
    let forward = Forward::new(&equity, market.strike, market.rate, market.expiry)?;
    debug!(%call, %put, %forward, "instruments constructed");

    let check = ParityCheck::evaluate(&call, &put, &forward)?;
    if !check.holds_default() {
        warn!(residual = check.residual(), "parity residual exceeds tolerance");
    }

    match format {
        "text" => {
            writeln!(out, "{}", equity)?;
            writeln!(out, "{}", call)?;
            writeln!(out, "{}", put)?;
            writeln!(out, "{}", forward)?;
            writeln!(out, "Checking the put call parity:")?;
            writeln!(out, "c-p-f = {}", format_residual(check.residual()))?;
        }
        "json" => {
            let report = ParityReport {
                underlyer: &config.equity.market_name,
                denominated: &config.equity.denominated,
                spot: config.equity.spot,
                strike: market.strike,
                volatility: market.volatility,
                rate: market.rate,
                expiry: market.expiry,
                prices: check,
                residual: check.residual(),
                holds: check.holds_default(),
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

    info!("Parity check complete");
    Ok(())
}
