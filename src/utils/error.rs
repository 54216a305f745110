use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Search request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Search index returned status {status} for query: {query}")]
    SearchFailed { status: u16, query: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
