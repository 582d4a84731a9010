//! Scenario configuration management.
//!
//! Handles loading of the pricing scenario from TOML files with
//! environment variable and command-line override support.
//!
//! Precedence, lowest first: built-in defaults, TOML file, `PARITY_*`
//! environment variables, command-line flags. A TOML file is only read
//! when its path is given explicitly.

use std::path::Path;

use clap::Args;
use pricer_core::market_data::TradableEquity;
use pricer_core::types::PricingError;
use serde::Deserialize;
use thiserror::Error;

/// Prefix shared by all environment overrides.
const ENV_PREFIX: &str = "PARITY_";

/// Underlying equity settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquityConfig {
    /// Market name (ticker)
    #[serde(default = "default_market_name")]
    pub market_name: String,

    /// Denomination currency
    #[serde(default = "default_denominated")]
    pub denominated: String,

    /// Country of listing
    #[serde(default = "default_country")]
    pub country: String,

    /// Region of listing
    #[serde(default = "default_region")]
    pub region: String,

    /// Spot price
    #[serde(default = "default_spot")]
    pub spot: f64,
}

/// Contract and market parameters shared by the three instruments
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketConfig {
    /// Strike price
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Volatility (ignored by the forward)
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Continuously compounded interest rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Time to expiry in years
    #[serde(default = "default_expiry")]
    pub expiry: f64,
}

/// Scenario configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    /// Underlying equity
    #[serde(default)]
    pub equity: EquityConfig,

    /// Contract parameters
    #[serde(default)]
    pub market: MarketConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Environment overrides that could not be parsed
    #[serde(skip)]
    rejected_env: Vec<String>,
}

fn default_market_name() -> String {
    ".SPX".to_string()
}

fn default_denominated() -> String {
    "USD".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_region() -> String {
    "North America".to_string()
}

fn default_spot() -> f64 {
    TradableEquity::DEFAULT_SPOT
}

fn default_strike() -> f64 {
    100.0
}

fn default_volatility() -> f64 {
    0.2
}

fn default_rate() -> f64 {
    0.1
}

fn default_expiry() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            market_name: default_market_name(),
            denominated: default_denominated(),
            country: default_country(),
            region: default_region(),
            spot: default_spot(),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            volatility: default_volatility(),
            rate: default_rate(),
            expiry: default_expiry(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            equity: EquityConfig::default(),
            market: MarketConfig::default(),
            log_level: default_log_level(),
            rejected_env: Vec::new(),
        }
    }
}

/// Per-parameter command-line overrides
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioOverrides {
    /// Override the underlyer spot price
    #[arg(long, global = true)]
    pub spot: Option<f64>,

    /// Override the strike
    #[arg(long, global = true)]
    pub strike: Option<f64>,

    /// Override the volatility
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Override the interest rate
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Override the time to expiry in years
    #[arg(long, global = true)]
    pub expiry: Option<f64>,
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` when given, otherwise use the built-in scenario
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `PARITY_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve `PARITY_*` variables
    ///
    /// Numeric values that fail to parse are kept aside and reported by
    /// [`validate`](Self::validate).
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(log_level) = var("LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Some(market_name) = var("MARKET_NAME") {
            self.equity.market_name = market_name;
        }
        if let Some(denominated) = var("DENOMINATED") {
            self.equity.denominated = denominated;
        }
        if let Some(country) = var("COUNTRY") {
            self.equity.country = country;
        }
        if let Some(region) = var("REGION") {
            self.equity.region = region;
        }

        let numeric = [
            ("SPOT", &mut self.equity.spot),
            ("STRIKE", &mut self.market.strike),
            ("VOLATILITY", &mut self.market.volatility),
            ("RATE", &mut self.market.rate),
            ("EXPIRY", &mut self.market.expiry),
        ];
        for (name, field) in numeric {
            if let Some(raw) = var(name) {
                match raw.trim().parse::<f64>() {
                    Ok(value) => *field = value,
                    Err(_) => self.rejected_env.push(format!(
                        "{}{} '{}' is not a number",
                        ENV_PREFIX, name, raw
                    )),
                }
            }
        }

        self
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &ScenarioOverrides) -> Self {
        if let Some(spot) = overrides.spot {
            self.equity.spot = spot;
        }
        if let Some(strike) = overrides.strike {
            self.market.strike = strike;
        }
        if let Some(volatility) = overrides.volatility {
            self.market.volatility = volatility;
        }
        if let Some(rate) = overrides.rate {
            self.market.rate = rate;
        }
        if let Some(expiry) = overrides.expiry {
            self.market.expiry = expiry;
        }
        self
    }

    /// Validate the configuration
    ///
    /// Domain constraints on the numbers (positive strike and so on) are
    /// left to the instrument constructors, which name the offending
    /// parameter themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.rejected_env.clone();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.equity.market_name.trim().is_empty() {
            errors.push("equity.market_name cannot be empty".to_string());
        }

        if self.equity.denominated.trim().is_empty() {
            errors.push("equity.denominated cannot be empty".to_string());
        }

        let numbers = [
            ("equity.spot", self.equity.spot),
            ("market.strike", self.market.strike),
            ("market.volatility", self.market.volatility),
            ("market.rate", self.market.rate),
            ("market.expiry", self.market.expiry),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                errors.push(format!("{} must be finite, got {}", name, value));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Resolve the full configuration stack and validate it
    pub fn resolve(
        path: Option<&Path>,
        overrides: &ScenarioOverrides,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?
            .with_env_override()
            .with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Build the configured equity
    pub fn equity(&self) -> Result<TradableEquity, PricingError> {
        TradableEquity::new(
            self.equity.market_name.as_str(),
            self.equity.denominated.as_str(),
            self.equity.country.as_str(),
            self.equity.region.as_str(),
        )
        .with_spot(self.equity.spot)
    }
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::Equity;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.equity.market_name, ".SPX");
        assert_eq!(config.equity.denominated, "USD");
        assert_eq!(config.equity.spot, 100.0);
        assert_eq!(config.market.strike, 100.0);
        assert_eq!(config.market.volatility, 0.2);
        assert_eq!(config.market.rate, 0.1);
        assert_eq!(config.market.expiry, 1.0);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ScenarioConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
log_level = "debug"

[equity]
market_name = "ACME"
denominated = "EUR"
country = "DE"
region = "Europe"
spot = 120.0

[market]
strike = 110.0
volatility = 0.3
rate = -0.01
expiry = 0.5
"#,
        );

        let config = ScenarioConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.equity.market_name, "ACME");
        assert_eq!(config.equity.region, "Europe");
        assert_eq!(config.equity.spot, 120.0);
        assert_eq!(config.market.strike, 110.0);
        assert_eq!(config.market.rate, -0.01);
        assert_eq!(config.market.expiry, 0.5);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config("[market]\nstrike = 95.0\n");

        let config = ScenarioConfig::load(file.path()).unwrap();
        assert_eq!(config.market.strike, 95.0);
        assert_eq!(config.market.volatility, 0.2);
        assert_eq!(config.equity, EquityConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_config("[market\nstrike = ");
        assert!(matches!(
            ScenarioConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            ScenarioConfig::load_or_default(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_no_path_yields_builtin_scenario() {
        let config = ScenarioConfig::load_or_default(None).unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = ScenarioConfig::default().with_env_lookup(lookup(&[
            ("PARITY_STRIKE", "105"),
            ("PARITY_RATE", "-0.02"),
            ("PARITY_LOG_LEVEL", "info"),
            ("PARITY_MARKET_NAME", "ACME"),
        ]));
        assert_eq!(config.market.strike, 105.0);
        assert_eq!(config.market.rate, -0.02);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.equity.market_name, "ACME");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_unparseable_number() {
        let config = ScenarioConfig::default()
            .with_env_lookup(lookup(&[("PARITY_SPOT", "lots"), ("PARITY_EXPIRY", "1.5")]));
        assert_eq!(config.equity.spot, 100.0);
        assert_eq!(config.market.expiry, 1.5);

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("PARITY_SPOT"));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_flag_overrides_take_precedence_over_env() {
        let overrides = ScenarioOverrides {
            strike: Some(90.0),
            volatility: Some(0.35),
            ..Default::default()
        };
        let config = ScenarioConfig::default()
            .with_env_lookup(lookup(&[("PARITY_STRIKE", "105"), ("PARITY_SPOT", "80")]))
            .with_overrides(&overrides);
        assert_eq!(config.market.strike, 90.0);
        assert_eq!(config.market.volatility, 0.35);
        assert_eq!(config.equity.spot, 80.0);
        assert_eq!(config.market.rate, 0.1);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = ScenarioConfig::default();
        config.log_level = "chatty".to_string();

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "Warn"] {
            let mut config = ScenarioConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = ScenarioConfig::default();
        config.log_level = "invalid".to_string();
        config.equity.market_name = " ".to_string();
        config.market.rate = f64::INFINITY;
        config.market.strike = f64::NAN;

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 4);
            assert!(errors.iter().any(|e| e.contains("market.rate")));
            assert!(errors.iter().any(|e| e.contains("market.strike")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_leaves_domain_checks_to_pricer() {
        let mut config = ScenarioConfig::default();
        config.market.strike = -1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_equity_from_config() {
        let mut config = ScenarioConfig::default();
        config.equity.spot = 120.0;
        let equity = config.equity().unwrap();
        assert_eq!(equity.name(), ".SPX");
        assert_eq!(equity.spot(), 120.0);

        config.equity.spot = -5.0;
        assert_eq!(config.equity().unwrap_err().parameter(), Some("spot"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
