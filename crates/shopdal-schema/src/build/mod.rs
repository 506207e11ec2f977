use crate::{
    Error, ThisError,
    definition::EntityDefinition,
    error::ErrorTree,
    extension::EntityExtension,
    node::{EntitySchema, Schema},
    validate::validate_schema,
};
use std::collections::BTreeSet;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("entity '{0}' is registered more than once")]
    DuplicateEntity(String),

    #[error("extension targets unregistered entity '{0}'")]
    UnknownExtensionTarget(String),

    #[error("validation failed:\n{0}")]
    Validation(ErrorTree),
}

///
/// SchemaBuilder
///
/// Collects definitions and extensions, then composes them into a `Schema`.
/// Each definition's `fields()` runs exactly once, extensions are applied
/// straight after, and nothing can change the result once `build` returns.
///

pub struct SchemaBuilder {
    definitions: Vec<Box<dyn EntityDefinition>>,
    extensions: Vec<Box<dyn EntityExtension>>,
    strict: bool,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            definitions: Vec::new(),
            extensions: Vec::new(),
            strict: true,
        }
    }

    pub fn register<D: EntityDefinition + 'static>(&mut self, definition: D) -> &mut Self {
        self.register_boxed(Box::new(definition))
    }

    pub fn register_boxed(&mut self, definition: Box<dyn EntityDefinition>) -> &mut Self {
        self.definitions.push(definition);
        self
    }

    pub fn extend<E: EntityExtension + 'static>(&mut self, extension: E) -> &mut Self {
        self.extend_boxed(Box::new(extension))
    }

    pub fn extend_boxed(&mut self, extension: Box<dyn EntityExtension>) -> &mut Self {
        self.extensions.push(extension);
        self
    }

    /// When false, validation problems are logged and the schema is returned anyway.
    pub const fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Compose, validate and freeze the schema.
    pub fn build(self) -> Result<Schema, Error> {
        let schema = self.compose()?;

        match validate_schema(&schema) {
            Ok(()) => {}
            Err(errs) if self.strict => {
                tracing::error!(errors = errs.len(), "schema validation failed");
                return Err(BuildError::Validation(errs).into());
            }
            Err(errs) => {
                for (route, message) in errs.flatten() {
                    tracing::warn!(%route, "{message}");
                }
            }
        }

        tracing::info!(
            entities = schema.len(),
            fields = schema.field_count(),
            "schema built"
        );

        Ok(schema)
    }

    // compose
    // structural checks, then one pass over every definition
    fn compose(&self) -> Result<Schema, BuildError> {
        let mut names = BTreeSet::new();
        for def in &self.definitions {
            if !names.insert(def.entity_name()) {
                return Err(BuildError::DuplicateEntity(def.entity_name().to_string()));
            }
        }

        for ext in &self.extensions {
            if !names.contains(ext.entity_name()) {
                return Err(BuildError::UnknownExtensionTarget(
                    ext.entity_name().to_string(),
                ));
            }
        }

        let mut schema = Schema::new();
        for def in &self.definitions {
            let name = def.entity_name();
            let mut fields = def.fields();

            let declared = fields.len();
            for ext in self.extensions.iter().filter(|e| e.entity_name() == name) {
                ext.extend_fields(&mut fields);
            }

            tracing::debug!(
                entity = name,
                kind = %def.kind(),
                fields = fields.len(),
                extended = fields.len().saturating_sub(declared),
                "entity composed"
            );

            schema.insert(EntitySchema::new(
                name,
                def.kind(),
                fields,
                def.companions(),
                def.translation_definition().map(str::to_string),
            ));
        }

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        extension::FieldExtension,
        node::{Field, FieldCollection, Flag},
    };

    struct Tag;

    impl EntityDefinition for Tag {
        fn entity_name(&self) -> &'static str {
            "tag"
        }

        fn fields(&self) -> FieldCollection {
            FieldCollection::new([
                Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
                Field::string("name", "name"),
            ])
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = SchemaBuilder::new();
        builder.register(Tag).register(Tag);

        assert!(matches!(
            builder.build(),
            Err(Error::BuildError(BuildError::DuplicateEntity(name))) if name == "tag"
        ));
    }

    #[test]
    fn extension_for_unknown_entity_is_rejected() {
        let mut builder = SchemaBuilder::new();
        builder
            .register(Tag)
            .extend(FieldExtension::new(
                "label",
                [Field::bool("active", "active")],
            ));

        assert!(matches!(
            builder.build(),
            Err(Error::BuildError(BuildError::UnknownExtensionTarget(name))) if name == "label"
        ));
    }

    #[test]
    fn lenient_build_returns_invalid_schema() {
        let mut builder = SchemaBuilder::new();
        builder
            .register(Tag)
            .extend(FieldExtension::new(
                "tag",
                [Field::bool("BadName", "badName")],
            ))
            .strict(false);

        let schema = builder.build().unwrap();
        assert_eq!(schema.try_get("tag").unwrap().fields().len(), 3);
    }
}
