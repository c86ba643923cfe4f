pub mod api_client;
pub mod config;
pub mod dev_config;
pub mod error;

pub use api_client::{ApiClient, HistoryFilters};
pub use config::{ClientConfig, Mode};
pub use error::ApiError;
