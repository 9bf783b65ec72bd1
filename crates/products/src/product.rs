use serde::Serialize;

use vanity_core::{DomainError, DomainResult, ValueObject};

use crate::category::{CategoryRegistry, ProductFamily};
use crate::submission::{Submission, Tier};

/// Canonical product record handed to the store.
///
/// Only [`ProductFactory`] builds these, so `family` always agrees with the
/// registry entry for `category`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    category: String,
    family: ProductFamily,
    tier: Tier,
    weight: f64,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display type of the product's category.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn family(&self) -> ProductFamily {
        self.family
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{name='{}', type='{}', weight={}, family={}, range={}}}",
            self.name, self.category, self.weight, self.family, self.tier
        )
    }
}

/// Builds products by dispatching on the registered category name.
#[derive(Debug, Clone, Default)]
pub struct ProductFactory {
    registry: CategoryRegistry,
}

impl ProductFactory {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Build the record for `category`. Fails with `UnknownCategory` when the
    /// name is not registered.
    pub fn build(&self, category: &str, submission: &Submission, tier: Tier) -> DomainResult<Product> {
        let def = self
            .registry
            .get(category)
            .ok_or_else(|| DomainError::unknown_category(category))?;

        Ok(Product {
            name: submission.name.clone(),
            category: def.display_type().to_string(),
            family: def.family,
            tier,
            weight: submission.weight,
        })
    }
}
