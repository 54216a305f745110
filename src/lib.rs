pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpSearchIndex, StaticSearchIndex};
pub use crate::config::TomlConfig;
pub use crate::core::discovery::Discovery;
pub use crate::domain::model::NodeRecord;
pub use crate::domain::ports::{ConfigProvider, SearchIndex};
pub use crate::utils::error::{DiscoveryError, Result};
