pub mod discovery;

pub use crate::domain::model::NodeRecord;
pub use crate::domain::ports::{ConfigProvider, SearchIndex};
pub use crate::utils::error::Result;
pub use discovery::Discovery;
