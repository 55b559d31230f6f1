//! Runtime configuration.
//!
//! Sources, later ones winning:
//! 1. `config/default.{toml,json,yaml}` (optional)
//! 2. `APP__*` environment variables, `__` separating nested keys
//!    (`APP__PORT=8080`, `APP__PRICING__MAX_DISCOUNT_RATE=0.75`)

use anyhow::Context;
use axum::http::HeaderValue;
use config::{Config, Environment, File};
use serde::Deserialize;

use freshstock_inventory::PricingPolicy;
use freshstock_observability::LogFormat;

const CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "APP";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated allowed origins. Unset means permissive CORS.
    pub cors_allowed_origins: Option<String>,
    pub log_format: LogFormat,
    pub pricing: PricingPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: None,
            log_format: LogFormat::default(),
            pricing: PricingPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load from the config file (if present) and the environment.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;
        Self::from_config(cfg)
    }

    /// Deserialize and check an already-assembled configuration.
    pub fn from_config(cfg: Config) -> anyhow::Result<Self> {
        let app: AppConfig = cfg
            .try_deserialize()
            .context("failed to deserialize configuration")?;
        app.pricing.validate().context("invalid pricing policy")?;
        Ok(app)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS origins; entries that are blank or not valid header values are skipped.
    pub fn cors_origins(&self) -> Vec<HeaderValue> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let cfg = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(cfg)
    }

    #[test]
    fn empty_source_yields_defaults() {
        let cfg = from_toml("").unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.pricing, PricingPolicy::default());
        assert!(cfg.cors_origins().is_empty());
    }

    #[test]
    fn overrides_nested_pricing_fields() {
        let cfg = from_toml(
            r#"
            port = 8080
            log_format = "pretty"

            [pricing]
            slow_moving_surcharge = 0.05
            "#,
        )
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.pricing.slow_moving_surcharge, 0.05);
        assert_eq!(cfg.pricing.max_discount_rate, 0.8);
    }

    #[test]
    fn shipped_config_file_matches_defaults() {
        let cfg = from_toml(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.pricing, PricingPolicy::default());
    }

    #[test]
    fn rejects_invalid_pricing_policy() {
        let err = from_toml(
            r#"
            [pricing]
            max_discount_rate = 1.5
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid pricing policy"));
    }

    #[test]
    fn parses_cors_origin_list() {
        let cfg = AppConfig {
            cors_allowed_origins: Some("http://localhost:3000, ,https://shop.example".to_string()),
            ..AppConfig::default()
        };
        let origins = cfg.cors_origins();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example");
    }
}
