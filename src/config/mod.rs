//! Configuration module for the reconciliation engine.

use crate::error::ReconciliationError;
use serde::Deserialize;
use std::env;

/// Default half-width of the date proximity window, in days.
pub const DEFAULT_DATE_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum distance in days between an external and an internal date
    /// for the pair to qualify as a candidate.
    pub date_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            date_window_days: DEFAULT_DATE_WINDOW_DAYS,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ReconciliationError> {
        let date_window_days = match env::var("RECON_DATE_WINDOW_DAYS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ReconciliationError::Config(format!("invalid RECON_DATE_WINDOW_DAYS: {}", raw))
            })?,
            Err(_) => DEFAULT_DATE_WINDOW_DAYS,
        };

        let config = Self { date_window_days };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconciliationError> {
        if self.date_window_days < 0 {
            return Err(ReconciliationError::Config(format!(
                "date_window_days must be non-negative, got {}",
                self.date_window_days
            )));
        }
        Ok(())
    }
}
