//! Configuration types for payband

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::band::BandMode;
use crate::baseline::{LookbackWindow, DEFAULT_MIN_SAMPLES, DEFAULT_WINDOW_DAYS};
use crate::schedule::PayoutParams;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub payout: PayoutConfig,
    pub band: BandConfig,
    #[serde(default)]
    pub baseline: BaselineConfig,
    pub input: InputConfig,
    pub telemetry: TelemetryConfig,
}

/// Payout target and covered years
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutConfig {
    /// Target USD value of each monthly payout
    pub monthly_usd_target: Decimal,

    /// Calendar years to generate payouts for
    #[serde(default = "default_years")]
    pub years: Vec<i32>,
}

fn default_years() -> Vec<i32> {
    (2022..=2027).collect()
}

/// Band configuration, selected by which fields are populated
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BandConfig {
    /// Bounds as multipliers of the baseline
    Percent {
        floor_percent: Decimal,
        ceiling_percent: Decimal,
    },
    /// Bounds as absolute prices
    Absolute {
        floor_price: Decimal,
        ceiling_price: Decimal,
    },
}

/// Lookback window configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BaselineConfig {
    /// Window length in calendar days
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Minimum observations required inside the window
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
}

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}
fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

/// Price history input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the JSON price history
    pub prices_path: PathBuf,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormatConfig,
}

/// Log output format selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

/// Configuration precondition violations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// monthly_usd_target must be positive
    #[error("monthly_usd_target must be positive, got {0}")]
    NonPositiveTarget(Decimal),
    /// Percent band must satisfy 0 < floor < 1 < ceiling
    #[error("percent band must satisfy 0 < floor < 1 < ceiling, got floor={floor} ceiling={ceiling}")]
    BadPercentBand { floor: Decimal, ceiling: Decimal },
    /// Absolute band must satisfy 0 < floor < ceiling
    #[error("absolute band must satisfy 0 < floor < ceiling, got floor={floor} ceiling={ceiling}")]
    BadAbsoluteBand { floor: Decimal, ceiling: Decimal },
    /// Lookback window must be positive
    #[error("baseline window must be positive, got {0} days")]
    BadWindow(i64),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the engine assumes but does not re-verify
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payout.monthly_usd_target <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveTarget(
                self.payout.monthly_usd_target,
            ));
        }
        match self.band {
            BandConfig::Percent {
                floor_percent,
                ceiling_percent,
            } => {
                if !(floor_percent > Decimal::ZERO
                    && floor_percent < Decimal::ONE
                    && ceiling_percent > Decimal::ONE)
                {
                    return Err(ConfigError::BadPercentBand {
                        floor: floor_percent,
                        ceiling: ceiling_percent,
                    });
                }
            }
            BandConfig::Absolute {
                floor_price,
                ceiling_price,
            } => {
                if !(floor_price > Decimal::ZERO && floor_price < ceiling_price) {
                    return Err(ConfigError::BadAbsoluteBand {
                        floor: floor_price,
                        ceiling: ceiling_price,
                    });
                }
            }
        }
        if self.baseline.window_days <= 0 {
            return Err(ConfigError::BadWindow(self.baseline.window_days));
        }
        Ok(())
    }

    /// Engine parameters implied by this configuration
    pub fn payout_params(&self) -> PayoutParams {
        PayoutParams {
            monthly_usd_target: self.payout.monthly_usd_target,
            band: self.band.mode(),
            lookback: LookbackWindow {
                window_days: self.baseline.window_days,
                min_samples: self.baseline.min_samples,
            },
        }
    }
}

impl BandConfig {
    /// Convert to the engine's band mode
    pub fn mode(&self) -> BandMode {
        match *self {
            BandConfig::Percent {
                floor_percent,
                ceiling_percent,
            } => BandMode::Percent {
                floor: floor_percent,
                ceiling: ceiling_percent,
            },
            BandConfig::Absolute {
                floor_price,
                ceiling_price,
            } => BandMode::Absolute {
                floor: floor_price,
                ceiling: ceiling_price,
            },
        }
    }
}
