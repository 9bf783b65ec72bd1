use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use vanity_products::{Product, ProductStore};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductStoreError {
    #[error("product store lock poisoned")]
    LockPoisoned,

    #[error("identifier space exhausted")]
    IdsExhausted,
}

/// A persisted product together with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredProduct {
    pub id: u64,
    pub product: Product,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    products: BTreeMap<u64, StoredProduct>,
}

/// In-memory product store.
///
/// Intended for tests/dev. Identifiers are handed out sequentially starting at
/// `first_id` and are never reused.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Store whose first identifier is `first_id` (clamped to at least 1).
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: first_id.max(1),
                products: BTreeMap::new(),
            }),
        }
    }

    pub fn get(&self, id: u64) -> Result<Option<StoredProduct>, ProductStoreError> {
        let inner = self.inner.read().map_err(|_| ProductStoreError::LockPoisoned)?;
        Ok(inner.products.get(&id).cloned())
    }

    /// All stored products, ordered by identifier.
    pub fn list(&self) -> Result<Vec<StoredProduct>, ProductStoreError> {
        let inner = self.inner.read().map_err(|_| ProductStoreError::LockPoisoned)?;
        Ok(inner.products.values().cloned().collect())
    }

    pub fn len(&self) -> Result<usize, ProductStoreError> {
        let inner = self.inner.read().map_err(|_| ProductStoreError::LockPoisoned)?;
        Ok(inner.products.len())
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    type Error = ProductStoreError;

    fn persist(&self, product: Product) -> Result<u64, Self::Error> {
        let mut inner = self.inner.write().map_err(|_| ProductStoreError::LockPoisoned)?;

        let id = inner.next_id;
        inner.next_id = id.checked_add(1).ok_or(ProductStoreError::IdsExhausted)?;
        inner.products.insert(
            id,
            StoredProduct {
                id,
                product,
                stored_at: Utc::now(),
            },
        );

        Ok(id)
    }
}
