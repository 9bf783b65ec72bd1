//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod product_store;

pub use config::{ConfigError, IntakeConfig};
pub use product_store::{InMemoryProductStore, ProductStoreError, StoredProduct};
