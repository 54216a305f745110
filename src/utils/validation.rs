use crate::utils::error::{DiscoveryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DiscoveryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DiscoveryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DiscoveryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiscoveryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_minimum(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DiscoveryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_endpoints() {
        assert!(validate_url("endpoint", "http://search.internal:4000").is_ok());
        assert!(validate_url("endpoint", "https://search.internal").is_ok());
    }

    #[test]
    fn rejects_unsupported_scheme() {
        let err = validate_url("endpoint", "ftp://search.internal").unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::InvalidConfigValueError { .. }
        ));
    }

    #[test]
    fn rejects_empty_url() {
        assert!(validate_url("endpoint", "").is_err());
    }

    #[test]
    fn rejects_blank_environment() {
        assert!(validate_non_empty("environment", "  ").is_err());
        assert!(validate_non_empty("environment", "production").is_ok());
    }

    #[test]
    fn enforces_minimum() {
        assert!(validate_minimum("timeout_seconds", 0, 1).is_err());
        assert!(validate_minimum("timeout_seconds", 10, 1).is_ok());
    }
}
