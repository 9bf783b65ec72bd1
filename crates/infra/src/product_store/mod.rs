//! Product persistence adapters.
//!
//! The port itself ([`vanity_products::ProductStore`]) lives in the domain crate;
//! this module holds concrete stores.

pub mod in_memory;

pub use in_memory::{InMemoryProductStore, ProductStoreError, StoredProduct};
