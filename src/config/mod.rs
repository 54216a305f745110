use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub index: IndexConfig,
    pub fleet: FleetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub environment: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("index.endpoint", &self.index.endpoint)?;
        validation::validate_non_empty("fleet.environment", &self.fleet.environment)?;
        validation::validate_minimum(
            "index.timeout_seconds",
            self.index.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            1,
        )?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn index_endpoint(&self) -> &str {
        &self.index.endpoint
    }

    fn environment(&self) -> &str {
        &self.fleet.environment
    }

    fn timeout_seconds(&self) -> u64 {
        self.index.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> TomlConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn parses_and_validates_full_config() {
        let config = parse(
            r#"
            [index]
            endpoint = "https://search.fleet.internal:8443"
            timeout_seconds = 5

            [fleet]
            environment = "production"
            "#,
        );

        config.validate().unwrap();
        assert_eq!(config.index_endpoint(), "https://search.fleet.internal:8443");
        assert_eq!(config.environment(), "production");
        assert_eq!(config.timeout_seconds(), 5);
    }

    #[test]
    fn timeout_defaults_when_omitted() {
        let config = parse(
            r#"
            [index]
            endpoint = "http://search.local"

            [fleet]
            environment = "_default"
            "#,
        );

        config.validate().unwrap();
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = parse(
            r#"
            [index]
            endpoint = "ldap://search.local"

            [fleet]
            environment = "production"
            "#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_environment() {
        let config = parse(
            r#"
            [index]
            endpoint = "http://search.local"

            [fleet]
            environment = ""
            "#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = parse(
            r#"
            [index]
            endpoint = "http://search.local"
            timeout_seconds = 0

            [fleet]
            environment = "production"
            "#,
        );

        assert!(config.validate().is_err());
    }
}
