//! Casino configuration with validation and defaults.
//!
//! Everything that shapes the payout rule or bonus economy is a load-time
//! parameter here, never ambient state, so multiple configurations (tests,
//! staging) can coexist in one process.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Complete economic configuration for one casino instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CasinoConfig {
    /// Coins granted when an account is created on first interaction.
    pub registration_bonus: u64,
    /// Coins granted per daily bonus claim. Zero is a valid amount; the
    /// date gate still applies.
    pub daily_bonus: u64,
    /// Inclusive stake bounds.
    pub min_bet: u64,
    pub max_bet: u64,
    /// Payout on a win is `stake * win_multiplier`.
    pub win_multiplier: u64,
    /// Die faces that count as a win.
    pub winning_outcomes: BTreeSet<u8>,
    /// Size of the outcome space; draws are uniform over `1..=die_sides`.
    pub die_sides: u8,
    /// Coins credited per whole unit of provider currency.
    pub payment_conversion_rate: u64,
}

impl Default for CasinoConfig {
    fn default() -> Self {
        Self {
            registration_bonus: 15,
            daily_bonus: 0,
            min_bet: 5,
            max_bet: 1000,
            win_multiplier: 2,
            winning_outcomes: BTreeSet::from([6]),
            die_sides: 6,
            payment_conversion_rate: 1,
        }
    }
}

impl CasinoConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate for logical consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet == 0 {
            return Err(ConfigError::InvalidValue("min_bet must be > 0".to_string()));
        }

        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvalidValue(format!(
                "min_bet {} exceeds max_bet {}",
                self.min_bet, self.max_bet
            )));
        }

        if self.die_sides == 0 {
            return Err(ConfigError::InvalidValue("die_sides must be > 0".to_string()));
        }

        if let Some(&face) = self.winning_outcomes.iter().find(|&&f| f == 0 || f > self.die_sides) {
            return Err(ConfigError::InvalidValue(format!(
                "winning outcome {} is not a face of a {}-sided die",
                face, self.die_sides
            )));
        }

        if self.win_multiplier == 0 {
            return Err(ConfigError::InvalidValue("win_multiplier must be > 0".to_string()));
        }

        // The largest possible payout must fit in the balance type.
        if self.max_bet.checked_mul(self.win_multiplier).is_none() {
            return Err(ConfigError::InvalidValue(
                "max_bet * win_multiplier overflows".to_string(),
            ));
        }

        Ok(())
    }

    /// Coins to credit for a provider-reported charge.
    ///
    /// Providers report charges in minor units (1/100 of the currency, per
    /// the Telegram payments convention the reference bot integrates with),
    /// so the whole-unit amount is `total / 100` before the rate applies.
    pub fn coins_for_payment(&self, total_minor_units: u64) -> u64 {
        total_minor_units / 100 * self.payment_conversion_rate
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("failed to load configuration: {0}")]
    LoadFailed(String),
}
