//! Indicator configuration
//!
//! The host page passes configuration as JSON to `mount`; the native binary
//! reads it from the environment (and an optional `.env` file).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use pressure_check_domain::entities::{MeasurementContext, UnknownContext};

/// Environment variable naming the context the selector resets to
pub const DEFAULT_CONTEXT_VAR: &str = "PRESSURE_CHECK_DEFAULT_CONTEXT";

/// Environment variable holding the log filter
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Default context is not a known measurement context
    #[error("Invalid default context: {0}")]
    Context(#[from] UnknownContext),

    /// An element id was left empty
    #[error("Element id for {0} must not be empty")]
    EmptyElementId(&'static str),
}

/// Ids of the page elements the indicator reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub systolic: String,
    pub diastolic: String,
    pub context_selector: String,
    pub get_result_button: String,
    pub reset_button: String,
    pub result_panel: String,
    pub circle: String,
    pub label: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            systolic: "systolic".to_string(),
            diastolic: "diastolic".to_string(),
            context_selector: "readingMethod".to_string(),
            get_result_button: "getResult".to_string(),
            reset_button: "resetButton".to_string(),
            result_panel: "result".to_string(),
            circle: "bloodPressureCircle".to_string(),
            label: "readingResult".to_string(),
        }
    }
}

impl ElementIds {
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("systolic", self.systolic.as_str()),
            ("diastolic", self.diastolic.as_str()),
            ("contextSelector", self.context_selector.as_str()),
            ("getResultButton", self.get_result_button.as_str()),
            ("resetButton", self.reset_button.as_str()),
            ("resultPanel", self.result_panel.as_str()),
            ("circle", self.circle.as_str()),
            ("label", self.label.as_str()),
        ]
    }
}

/// Indicator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorConfig {
    /// Context the selector shows after a reset
    pub default_context: MeasurementContext,

    /// Page element ids
    pub element_ids: ElementIds,

    /// CSS class that hides the result panel
    pub hidden_class: String,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            default_context: MeasurementContext::Home,
            element_ids: ElementIds::default(),
            hidden_class: "hidden".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl IndicatorConfig {
    /// Parse configuration passed in by the host page. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: IndicatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            debug!(".env file not found, using process environment");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = IndicatorConfig::default();

        if let Some(context) = lookup(DEFAULT_CONTEXT_VAR) {
            config.default_context = context.parse()?;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|filter| !filter.trim().is_empty()) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, _)) = self.element_ids.entries().into_iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(ConfigError::EmptyElementId(name));
        }
        Ok(())
    }
}
