//! ## Crate layout
//! - `catalog`: the storefront entity definitions.
//! - `config`: `shopdal.toml` loading.
//! - `schema`: field descriptors, builder, and validation.
//!
//! [`load`] is the usual entry point: it registers the catalog, applies the
//! extensions declared in the configuration, and returns the validated schema.

pub use shopdal_catalog as catalog;
pub use shopdal_config as config;
pub use shopdal_schema as schema;

use crate::config::{Config, ConfigError, ExtensionConfig, FieldConfig, FieldKindConfig};
use crate::schema::{
    extension::{EntityExtension, FieldExtension},
    node::{Field, Flag, Schema},
    types::ScalarKind,
    validate::naming::storage_to_property,
};
use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] crate::schema::Error),
}

/// Build the catalog schema with the configuration's extensions applied.
pub fn load(config: &Config) -> Result<Schema, Error> {
    let mut builder = crate::catalog::builder();

    for extension in extensions_from_config(config) {
        tracing::debug!(
            entity = extension.entity_name(),
            fields = extension.fields().len(),
            "registering configured extension"
        );
        builder.extend(extension);
    }
    builder.strict(config.schema.strict);

    Ok(builder.build()?)
}

/// Translate `[[extensions]]` tables into field extensions.
#[must_use]
pub fn extensions_from_config(config: &Config) -> Vec<FieldExtension> {
    config.extensions.iter().map(to_extension).collect()
}

fn to_extension(ext: &ExtensionConfig) -> FieldExtension {
    FieldExtension::new(&ext.entity, ext.fields.iter().map(to_field))
}

fn to_field(field: &FieldConfig) -> Field {
    let property = field
        .property
        .clone()
        .unwrap_or_else(|| storage_to_property(&field.storage));

    let mut flags = Vec::new();
    if field.required {
        flags.push(Flag::Required);
    }
    if let Some(weight) = field.search_ranking {
        flags.push(Flag::SearchRanking(weight));
    }

    Field::scalar(scalar_kind(field.kind), &field.storage, property).with_flags(flags)
}

const fn scalar_kind(kind: FieldKindConfig) -> ScalarKind {
    match kind {
        FieldKindConfig::Bool => ScalarKind::Bool,
        FieldKindConfig::Date => ScalarKind::Date,
        FieldKindConfig::Int => ScalarKind::Int,
        FieldKindConfig::LongText => ScalarKind::LongText,
        FieldKindConfig::String => ScalarKind::String,
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, load};
    pub use shopdal_catalog::{CategoryDefinition, ListingSortingDefinition};
    pub use shopdal_config::Config;
    pub use shopdal_schema::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::node::FieldKind;

    #[test]
    fn config_field_derives_property() {
        let config = Config::from_toml_str(
            r#"
            [[extensions]]
            entity = "category"
            fields = [{ storage = "is_featured", kind = "bool", required = true }]
            "#,
        )
        .unwrap();

        let extensions = extensions_from_config(&config);
        let field = &extensions[0].fields()[0];

        assert_eq!(field.property_name(), "isFeatured");
        assert_eq!(field.storage_name(), Some("is_featured"));
        assert_eq!(field.kind(), &FieldKind::Scalar(ScalarKind::Bool));
        assert!(field.flags().contains(&Flag::Required));
    }
}
