//! `shopdal.toml` configuration.
//!
//! ```toml
//! [schema]
//! strict = true
//!
//! [log]
//! filter = "info"
//!
//! [[extensions]]
//! entity = "category"
//!
//! [[extensions.fields]]
//! storage = "is_featured"
//! kind = "bool"
//! ```
//!
//! Every section is optional; a missing file means the defaults.

use serde::Deserialize;
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "shopdal.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schema: SchemaConfig,
    pub log: LogConfig,
    pub extensions: Vec<ExtensionConfig>,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load `path` if given (it must exist), otherwise `shopdal.toml` from the
    /// working directory if present, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            Self::load(default)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter is empty".to_string()));
        }

        for (i, ext) in self.extensions.iter().enumerate() {
            if ext.entity.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "extensions[{i}].entity is empty"
                )));
            }

            let mut seen = BTreeSet::new();
            for field in &ext.fields {
                if field.storage.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "extensions[{i}] ({}) has a field with an empty storage name",
                        ext.entity
                    )));
                }
                if !seen.insert(field.storage.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "extensions[{i}] ({}) declares '{}' more than once",
                        ext.entity, field.storage
                    )));
                }
                if let Some(weight) = field.search_ranking
                    && !(weight.is_finite() && weight > 0.0)
                {
                    return Err(ConfigError::Invalid(format!(
                        "extensions[{i}] ({}) field '{}' has a non-positive search ranking",
                        ext.entity, field.storage
                    )));
                }
            }
        }

        Ok(())
    }
}

///
/// SchemaConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Fail the build on validation errors instead of logging them.
    pub strict: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing-subscriber` env-filter directive.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

///
/// ExtensionConfig
///
/// Extra columns appended to an entity at build time.
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionConfig {
    pub entity: String,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

///
/// FieldConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub storage: String,

    /// Defaults to the lowerCamelCase form of `storage`.
    #[serde(default)]
    pub property: Option<String>,

    pub kind: FieldKindConfig,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub search_ranking: Option<f32>,
}

///
/// FieldKindConfig
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKindConfig {
    Bool,
    Date,
    Int,
    LongText,
    String,
}
