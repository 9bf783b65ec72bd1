use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vanity_core::{DomainError, DomainResult};

pub const EYESHADOW: &str = "Eyeshadow";
pub const MASCARA: &str = "Mascara";
pub const LIPSTICK: &str = "Lipstick";
pub const BLUSHER: &str = "Blusher";
pub const FOUNDATION: &str = "Foundation";

/// Product family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFamily {
    Eyes,
    Lips,
    Lashes,
    Skin,
}

impl core::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ProductFamily::Eyes => "EYES",
            ProductFamily::Lips => "LIPS",
            ProductFamily::Lashes => "LASHES",
            ProductFamily::Skin => "SKIN",
        };
        f.write_str(s)
    }
}

/// One entry of the category registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub family: ProductFamily,
    /// Type string written onto built products. Defaults to `name`.
    #[serde(default)]
    pub display_type: Option<String>,
}

impl CategoryDefinition {
    pub fn new(name: impl Into<String>, family: ProductFamily) -> Self {
        Self {
            name: name.into(),
            family,
            display_type: None,
        }
    }

    pub fn display_type(&self) -> &str {
        self.display_type.as_deref().unwrap_or(&self.name)
    }
}

/// Closed mapping from category name to its family and display type.
///
/// Built once at startup and never mutated afterwards. Lookups are exact and
/// case-sensitive: a name that was not registered is unknown, full stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    entries: BTreeMap<String, CategoryDefinition>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting empty names and duplicate names or display types.
    pub fn new(definitions: impl IntoIterator<Item = CategoryDefinition>) -> DomainResult<Self> {
        let mut entries = BTreeMap::new();
        let mut labels: BTreeMap<String, String> = BTreeMap::new();
        for def in definitions {
            if def.name.trim().is_empty() {
                return Err(DomainError::validation("category name cannot be empty"));
            }
            if def.display_type.as_deref().is_some_and(|t| t.trim().is_empty()) {
                return Err(DomainError::validation(format!(
                    "display type for {} cannot be empty",
                    def.name
                )));
            }
            if entries.contains_key(&def.name) {
                return Err(DomainError::duplicate_category(def.name));
            }
            // A product's category label must map to exactly one family, so a
            // name or display type may only be claimed by one entry.
            for label in [def.name.as_str(), def.display_type()] {
                match labels.get(label) {
                    Some(owner) if owner != &def.name => {
                        return Err(DomainError::duplicate_category(label));
                    }
                    _ => {}
                }
            }
            labels.insert(def.name.clone(), def.name.clone());
            labels.insert(def.display_type().to_string(), def.name.clone());
            entries.insert(def.name.clone(), def);
        }
        if entries.is_empty() {
            return Err(DomainError::validation("registry must contain at least one category"));
        }
        Ok(Self { entries })
    }

    /// The five categories the shop sells out of the box.
    pub fn standard() -> Self {
        let entries = Self::standard_definitions()
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Self { entries }
    }

    pub fn standard_definitions() -> Vec<CategoryDefinition> {
        vec![
            CategoryDefinition::new(EYESHADOW, ProductFamily::Eyes),
            CategoryDefinition::new(MASCARA, ProductFamily::Lashes),
            CategoryDefinition::new(LIPSTICK, ProductFamily::Lips),
            CategoryDefinition::new(BLUSHER, ProductFamily::Skin),
            CategoryDefinition::new(FOUNDATION, ProductFamily::Skin),
        ]
    }

    /// Standard categories plus `extra`, validated as a whole.
    pub fn extended(extra: impl IntoIterator<Item = CategoryDefinition>) -> DomainResult<Self> {
        Self::new(Self::standard_definitions().into_iter().chain(extra))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&CategoryDefinition> {
        self.entries.get(name)
    }

    pub fn family_of(&self, name: &str) -> DomainResult<ProductFamily> {
        self.get(name)
            .map(|def| def.family)
            .ok_or_else(|| DomainError::unknown_category(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
