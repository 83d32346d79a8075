pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::CatalogGateway;
pub use config::SolarisConfig;
pub use error::{Result, SolarisError};
pub use types::*;
