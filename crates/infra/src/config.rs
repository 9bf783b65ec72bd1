//! Configuration loading.
//!
//! Everything is read from the environment once at startup:
//!
//! - `VANITY_CATEGORIES_FILE`: optional path to a JSON array of extra category
//!   definitions, appended to the standard registry.
//! - `VANITY_FIRST_ID`: optional first identifier for the in-memory store (default 1).

use std::path::{Path, PathBuf};

use thiserror::Error;

use vanity_core::DomainError;
use vanity_products::{CategoryDefinition, CategoryRegistry};

pub const CATEGORIES_FILE_VAR: &str = "VANITY_CATEGORIES_FILE";
pub const FIRST_ID_VAR: &str = "VANITY_FIRST_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("VANITY_FIRST_ID must be a positive integer, got {0:?}")]
    InvalidFirstId(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub categories_file: Option<PathBuf>,
    pub first_id: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            categories_file: None,
            first_id: 1,
        }
    }
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let categories_file = lookup(CATEGORIES_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let first_id = match lookup(FIRST_ID_VAR).filter(|v| !v.trim().is_empty()) {
            None => 1,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(id) if id > 0 => id,
                _ => return Err(ConfigError::InvalidFirstId(raw)),
            },
        };

        Ok(Self {
            categories_file,
            first_id,
        })
    }

    /// The standard registry plus any categories from `categories_file`.
    pub fn build_registry(&self) -> Result<CategoryRegistry, ConfigError> {
        match &self.categories_file {
            None => Ok(CategoryRegistry::standard()),
            Some(path) => {
                let extra = load_definitions(path)?;
                tracing::info!(
                    path = %path.display(),
                    extra = extra.len(),
                    "loaded extra category definitions"
                );
                Ok(CategoryRegistry::extended(extra)?)
            }
        }
    }
}

fn load_definitions(path: &Path) -> Result<Vec<CategoryDefinition>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use vanity_products::ProductFamily;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn categories_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = IntakeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, IntakeConfig::default());
        assert_eq!(config.build_registry().unwrap(), CategoryRegistry::standard());
    }

    #[test]
    fn parses_first_id() {
        let config = IntakeConfig::from_lookup(lookup(&[(FIRST_ID_VAR, " 500 ")])).unwrap();
        assert_eq!(config.first_id, 500);
    }

    #[test]
    fn blank_variables_count_as_unset() {
        let config = IntakeConfig::from_lookup(lookup(&[
            (CATEGORIES_FILE_VAR, "  "),
            (FIRST_ID_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, IntakeConfig::default());

        let config = IntakeConfig::from_lookup(lookup(&[(FIRST_ID_VAR, "   ")])).unwrap();
        assert_eq!(config.first_id, 1);
    }

    #[test]
    fn rejects_zero_or_garbage_first_id() {
        for raw in ["0", "-4", "ten"] {
            let err = IntakeConfig::from_lookup(lookup(&[(FIRST_ID_VAR, raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidFirstId(ref v) if v == raw));
        }
    }

    #[test]
    fn extra_categories_extend_the_registry() {
        let file = categories_file(r#"[{"name":"Lipgloss","family":"lips"}]"#);
        let path = file.path().to_string_lossy().into_owned();
        let config = IntakeConfig::from_lookup(lookup(&[(CATEGORIES_FILE_VAR, path.as_str())])).unwrap();

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.family_of("Lipgloss").unwrap(), ProductFamily::Lips);
        assert!(registry.contains("Mascara"));
    }

    #[test]
    fn duplicate_categories_fail_startup() {
        let file = categories_file(r#"[{"name":"Mascara","family":"eyes"}]"#);
        let config = IntakeConfig {
            categories_file: Some(file.path().to_path_buf()),
            ..IntakeConfig::default()
        };
        match config.build_registry().unwrap_err() {
            ConfigError::Domain(DomainError::DuplicateCategory(name)) => assert_eq!(name, "Mascara"),
            other => panic!("Expected DuplicateCategory, got {other:?}"),
        }
    }

    #[test]
    fn malformed_or_missing_files_fail_startup() {
        let file = categories_file("not json");
        let config = IntakeConfig {
            categories_file: Some(file.path().to_path_buf()),
            ..IntakeConfig::default()
        };
        assert!(matches!(config.build_registry(), Err(ConfigError::Json { .. })));

        let config = IntakeConfig {
            categories_file: Some(PathBuf::from("/nonexistent/vanity/categories.json")),
            ..IntakeConfig::default()
        };
        assert!(matches!(config.build_registry(), Err(ConfigError::Io { .. })));
    }
}
