//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;
use crate::application::services::SmsTiming;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub app: AppConfig,
    pub sms: SmsConfig,
    pub fare: FareConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub name: String,
    /// Number SMS bookings are sent to
    pub short_code: String,
    /// Number shown as the SMS sender
    pub sender: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SmsConfig {
    pub delivery_delay_ms: u64,
    pub reply_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FareConfig {
    /// Fixed seed for reproducible quotes; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatsConfig {
    pub duration_ms: u64,
    pub start_delay_ms: u64,
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "GrameenMiles".to_string(),
                short_code: "16247".to_string(),
                sender: "01712345678".to_string(),
            },
            sms: SmsConfig {
                delivery_delay_ms: 800,
                reply_delay_ms: 1500,
            },
            fare: FareConfig::default(),
            stats: StatsConfig {
                duration_ms: 2000,
                start_delay_ms: 200,
                frame_ms: 16,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Defaults with the process environment applied
    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply `GRMILES_*` overrides; unparsable numbers are ignored with a warning
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(sender) = var("GRMILES_SENDER") {
            self.app.sender = sender;
        }

        if let Some(seed) = parse_env(&var, "GRMILES_SEED") {
            self.fare.seed = Some(seed);
        }

        if let Some(ms) = parse_env(&var, "GRMILES_DELIVERY_DELAY_MS") {
            self.sms.delivery_delay_ms = ms;
        }

        if let Some(ms) = parse_env(&var, "GRMILES_REPLY_DELAY_MS") {
            self.sms.reply_delay_ms = ms;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.short_code.trim().is_empty() {
            return Err(ConfigError::MissingField("app.short-code".to_string()));
        }
        if self.stats.duration_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "stats.duration-ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sms_timing(&self) -> SmsTiming {
        SmsTiming {
            delivery_delay: Duration::from_millis(self.sms.delivery_delay_ms),
            reply_delay: Duration::from_millis(self.sms.reply_delay_ms),
        }
    }
}

fn parse_env<F>(var: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
