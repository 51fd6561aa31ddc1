//! # Node Configuration
//!
//! Runtime parameters for the node, loaded from `TN_*` environment
//! variables on top of defaults.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TN_LOG_LEVEL` | `log_level` (overridden by `RUST_LOG`) |
//! | `TN_ISSUERS` | `issuer.issuers` |
//! | `TN_MESSAGES_PER_ISSUER` | `issuer.messages_per_issuer` (0 = until shutdown) |
//! | `TN_ISSUE_INTERVAL_MS` | `issuer.issue_interval_ms` |
//! | `TN_REPORT_INTERVAL_SECS` | `report_interval_secs` |
//! | `TN_TIP_STRATEGY` | `tip_selection.strategy` |
//! | `TN_TIP_SEED` | `tip_selection.seed` |
//! | `TN_POOL_SIZE_WARNING` | `tip_selection.pool_size_warning` |

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tn_01_tip_selection::{StrategyKind, TipSelectionConfig, TipSelectionError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// Tip selection settings were rejected.
    #[error(transparent)]
    TipSelection(#[from] TipSelectionError),
}

/// Local message issuance settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    /// Number of concurrent issuer tasks.
    pub issuers: usize,
    /// Messages each issuer creates before stopping; `None` runs until
    /// shutdown.
    pub messages_per_issuer: Option<u64>,
    /// Delay between two messages of one issuer.
    pub issue_interval_ms: u64,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            issuers: 4,
            messages_per_issuer: None,
            issue_interval_ms: 100,
        }
    }
}

impl IssuerConfig {
    pub fn issue_interval(&self) -> Duration {
        Duration::from_millis(self.issue_interval_ms)
    }
}

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Tip selection engine configuration.
    pub tip_selection: TipSelectionConfig,
    /// Local message issuance.
    pub issuer: IssuerConfig,
    /// Interval between tip pool reports.
    pub report_interval_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            tip_selection: TipSelectionConfig::default(),
            issuer: IssuerConfig::default(),
            report_interval_secs: 5,
        }
    }
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("TN_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(issuers) = parse(&lookup, "TN_ISSUERS")? {
            config.issuer.issuers = issuers;
        }
        if let Some(count) = parse::<u64, _>(&lookup, "TN_MESSAGES_PER_ISSUER")? {
            config.issuer.messages_per_issuer = (count > 0).then_some(count);
        }
        if let Some(interval) = parse(&lookup, "TN_ISSUE_INTERVAL_MS")? {
            config.issuer.issue_interval_ms = interval;
        }
        if let Some(interval) = parse(&lookup, "TN_REPORT_INTERVAL_SECS")? {
            config.report_interval_secs = interval;
        }
        if let Some(strategy) = lookup("TN_TIP_STRATEGY") {
            config.tip_selection.strategy = StrategyKind::from_str(&strategy)?;
        }
        if let Some(seed) = parse(&lookup, "TN_TIP_SEED")? {
            config.tip_selection.seed = Some(seed);
        }
        if let Some(threshold) = parse(&lookup, "TN_POOL_SIZE_WARNING")? {
            config.tip_selection.pool_size_warning = threshold;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runtime cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.issuer.issue_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "issue_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.report_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "report_interval_secs must be greater than 0".to_string(),
            ));
        }
        self.tip_selection.validate()?;
        Ok(())
    }

    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
