use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::payments::request::DEFAULT_TIMEOUT_SECS;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Gateway credentials and connection settings
///
/// Read from `EWAY_API_KEY`, `EWAY_PASSWORD`, `EWAY_SANDBOX` and
/// `EWAY_TIMEOUT_SECS`.
#[derive(Clone, Deserialize)]
pub struct EwayConfig {
    pub api_key: String,
    pub password: String,
    #[serde(default)]
    pub sandbox: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl EwayConfig {
    pub fn from_env() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::Environment::with_prefix("EWAY")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read EWAY_* environment")?;

        let config: EwayConfig = settings
            .try_deserialize()
            .context("EWAY_API_KEY and EWAY_PASSWORD must be set")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("EWAY_API_KEY cannot be empty"));
        }

        if self.password.trim().is_empty() {
            return Err(anyhow!("EWAY_PASSWORD cannot be empty"));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(anyhow!(
                "EWAY_TIMEOUT_SECS must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.timeout_secs
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for EwayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EwayConfig")
            .field("api_key", &"<redacted>")
            .field("password", &"<redacted>")
            .field("sandbox", &self.sandbox)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EwayConfig {
        EwayConfig {
            api_key: "apiKey".to_string(),
            password: "pass".to_string(),
            sandbox: true,
            timeout_secs: 60,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut empty_key = config();
        empty_key.api_key = "  ".to_string();
        assert!(empty_key.validate().is_err());

        let mut empty_password = config();
        empty_password.password = String::new();
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut cfg = config();
        cfg.timeout_secs = 0;
        assert!(cfg.validate().is_err());
        cfg.timeout_secs = 301;
        assert!(cfg.validate().is_err());
        cfg.timeout_secs = 300;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("apiKey"));
        assert!(!rendered.contains("pass\""));
        assert!(rendered.contains("sandbox: true"));
    }

    #[test]
    fn test_from_env_reads_prefixed_variables() {
        std::env::set_var("EWAY_API_KEY", "env-key");
        std::env::set_var("EWAY_PASSWORD", "env-pass");
        std::env::set_var("EWAY_SANDBOX", "true");
        std::env::set_var("EWAY_TIMEOUT_SECS", "45");

        let cfg = EwayConfig::from_env().unwrap();

        std::env::remove_var("EWAY_API_KEY");
        std::env::remove_var("EWAY_PASSWORD");
        std::env::remove_var("EWAY_SANDBOX");
        std::env::remove_var("EWAY_TIMEOUT_SECS");

        assert_eq!(cfg.api_key, "env-key");
        assert_eq!(cfg.password, "env-pass");
        assert!(cfg.sandbox);
        assert_eq!(cfg.timeout_secs, 45);
    }
}
