use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::str::FromStr;

use crate::domain::{
    errors::{AppError, AppResult},
    logging::LogLevel,
    portfolio::CapThresholds,
};

/// Id of the optional `<script type="application/json">` holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Runtime settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub currency: String,
    /// Lowest mock price
    pub price_floor: f64,
    /// Mock prices fall in `[price_floor, price_floor + price_span)`
    pub price_span: f64,
    pub quote_latency_ms: u32,
    /// Re-quote every holding on this period; 0 disables it
    pub auto_refresh_ms: u32,
    pub large_cap_above: f64,
    pub mid_cap_above: f64,
    pub chart_width: u32,
    pub chart_height: u32,
    pub max_log_lines: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            price_floor: 1000.0,
            price_span: 1000.0,
            quote_latency_ms: 0,
            auto_refresh_ms: 0,
            large_cap_above: 1000.0,
            mid_cap_above: 500.0,
            chart_width: 560,
            chart_height: 320,
            max_log_lines: 100,
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.price_floor.is_finite() && self.price_floor > 0.0) {
            return Err(AppError::Config("price_floor must be positive".to_string()));
        }
        if !(self.price_span.is_finite() && self.price_span >= 0.0) {
            return Err(AppError::Config("price_span must not be negative".to_string()));
        }
        if self.mid_cap_above >= self.large_cap_above {
            return Err(AppError::Config(format!(
                "mid_cap_above ({}) must be below large_cap_above ({})",
                self.mid_cap_above, self.large_cap_above
            )));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(AppError::Config("chart dimensions must be non-zero".to_string()));
        }
        self.min_log_level()?;
        Ok(())
    }

    pub fn min_log_level(&self) -> AppResult<LogLevel> {
        LogLevel::from_str(&self.log_level)
            .map_err(|_| AppError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn cap_thresholds(&self) -> CapThresholds {
        CapThresholds {
            large_above: self.large_cap_above,
            mid_above: self.mid_cap_above,
        }
    }

    /// Read overrides from the page. An invalid config falls back to
    /// defaults and hands back the error for the caller to log.
    pub fn load() -> (Self, Option<AppError>) {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw.map(|raw| Self::from_json(&raw)) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Install the process-wide config. Returns the one in effect.
pub fn init_config(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
