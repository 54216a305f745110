pub mod http;
pub mod memory;

pub use http::HttpSearchIndex;
pub use memory::StaticSearchIndex;
