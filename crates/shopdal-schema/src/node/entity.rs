use crate::{
    definition::Companions,
    err,
    error::ErrorTree,
    node::{Field, FieldCollection, FieldKind, FlagKind, NodeError, ValidateNode, VisitableNode},
    types::DefinitionKind,
    validate::naming::validate_entity_name,
    visit::Visitor,
};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// EntitySchema
///
/// The composed, memoized view of one definition: computed once by the
/// builder, extensions already applied, read-only from then on.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntitySchema {
    name: String,
    kind: DefinitionKind,
    fields: FieldCollection,
    companions: Companions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    translation: Option<String>,
}

impl EntitySchema {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: DefinitionKind,
        fields: FieldCollection,
        companions: Companions,
        translation: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            fields,
            companions,
            translation,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> DefinitionKind {
        self.kind
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, property: &str) -> Option<&Field> {
        self.fields.get(property)
    }

    pub fn try_field(&self, property: &str) -> Result<&Field, NodeError> {
        self.field(property)
            .ok_or_else(|| NodeError::FieldNotFound {
                entity: self.name.clone(),
                property: property.to_string(),
            })
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Field> {
        self.fields.primary_keys()
    }

    #[must_use]
    pub const fn companions(&self) -> &Companions {
        &self.companions
    }

    #[must_use]
    pub fn repository(&self) -> &str {
        &self.companions.repository
    }

    #[must_use]
    pub fn basic_struct(&self) -> &str {
        &self.companions.basic_struct
    }

    #[must_use]
    pub fn detail_struct(&self) -> &str {
        &self.companions.detail_struct
    }

    #[must_use]
    pub fn basic_collection(&self) -> &str {
        &self.companions.basic_collection
    }

    #[must_use]
    pub fn detail_collection(&self) -> &str {
        &self.companions.detail_collection
    }

    #[must_use]
    pub fn written_event(&self) -> &str {
        &self.companions.written_event
    }

    #[must_use]
    pub fn deleted_event(&self) -> &str {
        &self.companions.deleted_event
    }

    /// Name of the definition holding this entity's per-locale values.
    #[must_use]
    pub fn translation_definition(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    // validate_keys
    fn validate_keys(&self, errs: &mut ErrorTree) {
        let keys: Vec<&Field> = self.primary_keys().collect();

        if self.kind.has_composite_key() {
            if keys.is_empty() {
                err!(
                    errs,
                    "{} definition declares no primary key fields",
                    self.kind
                );
            }
            for key in keys {
                if !matches!(key.kind(), FieldKind::Id | FieldKind::Fk { .. }) {
                    err!(
                        errs,
                        "composite key part '{}' must be an id or foreign key",
                        key.property_name()
                    );
                }
            }

            return;
        }

        match keys.as_slice() {
            [] => err!(errs, "entity declares no primary key field"),
            [key] => {
                if !matches!(key.kind(), FieldKind::Id) {
                    err!(
                        errs,
                        "primary key '{}' must be an id field, found {}",
                        key.property_name(),
                        key.kind().label()
                    );
                }
                if !key.is(FlagKind::Required) {
                    err!(
                        errs,
                        "primary key '{}' must be required",
                        key.property_name()
                    );
                }
            }
            many => {
                let names: Vec<&str> = many.iter().map(|f| f.property_name()).collect();
                err!(
                    errs,
                    "entity declares {} primary key fields ({}), expected exactly one",
                    many.len(),
                    names.join(", ")
                );
            }
        }
    }

    // validate_columns
    fn validate_columns(&self, errs: &mut ErrorTree) {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

        for field in &self.fields {
            if !field.kind().is_persisted() {
                continue;
            }
            let Some(storage) = field.storage_name() else {
                continue;
            };
            if let Some(prev) = seen.insert(storage, field.property_name()) {
                err!(
                    errs,
                    "column '{storage}' is claimed by both '{prev}' and '{}'",
                    field.property_name()
                );
            }
        }
    }
}

impl ValidateNode for EntitySchema {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        errs.add_result(validate_entity_name(&self.name));

        if self.fields.is_empty() {
            err!(errs, "entity declares no fields");
        }
        self.validate_keys(&mut errs);
        self.validate_columns(&mut errs);

        if self.translation.is_some() && self.kind != DefinitionKind::Entity {
            err!(
                errs,
                "only entity definitions can declare a translation definition"
            );
        }

        errs.add_result(self.companions.validate());

        errs.result()
    }
}

impl VisitableNode for EntitySchema {
    fn route_key(&self) -> String {
        self.name.clone()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.fields.accept(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Flag;

    fn entity(kind: DefinitionKind, fields: Vec<Field>) -> EntitySchema {
        EntitySchema::new(
            "test_entity",
            kind,
            FieldCollection::new(fields),
            Companions::for_entity("test_entity"),
            None,
        )
    }

    fn pk(field: Field) -> Field {
        field.with_flags([Flag::PrimaryKey, Flag::Required])
    }

    #[test]
    fn entity_needs_exactly_one_key() {
        let ok = entity(DefinitionKind::Entity, vec![pk(Field::id("id", "id"))]);
        assert!(ok.validate().is_ok());

        let none = entity(DefinitionKind::Entity, vec![Field::id("id", "id")]);
        assert!(none.validate().unwrap_err().contains("no primary key"));

        let two = entity(
            DefinitionKind::Entity,
            vec![
                pk(Field::id("id", "id")),
                pk(Field::fk("shop_id", "shopId", "shop")),
            ],
        );
        assert!(two.validate().unwrap_err().contains("expected exactly one"));
    }

    #[test]
    fn entity_key_must_be_id() {
        let fk_key = entity(
            DefinitionKind::Entity,
            vec![pk(Field::fk("shop_id", "shopId", "shop"))],
        );

        let errs = fk_key.validate().unwrap_err();
        assert!(errs.contains("must be an id field"));
    }

    #[test]
    fn mapping_allows_composite_key() {
        let mapping = entity(
            DefinitionKind::Mapping,
            vec![
                pk(Field::fk("product_id", "productId", "product")),
                pk(Field::fk("category_id", "categoryId", "category")),
            ],
        );

        assert!(mapping.validate().is_ok());
    }

    #[test]
    fn missing_field_lookup() {
        let e = entity(DefinitionKind::Entity, vec![pk(Field::id("id", "id"))]);

        assert!(e.try_field("id").is_ok());
        assert_eq!(
            e.try_field("name").unwrap_err().to_string(),
            "entity 'test_entity' has no field with property 'name'"
        );
    }

    #[test]
    fn duplicate_columns_are_reported() {
        let dup = entity(
            DefinitionKind::Entity,
            vec![
                pk(Field::id("id", "id")),
                Field::string("name", "name"),
                Field::long_text("name", "label"),
            ],
        );

        assert!(dup.validate().unwrap_err().contains("column 'name'"));
    }

    #[test]
    fn translated_columns_do_not_clash_with_local_columns() {
        let entity = entity(
            DefinitionKind::Entity,
            vec![
                pk(Field::id("id", "id")),
                Field::string("name", "internalName"),
                Field::translated(crate::types::ScalarKind::String, "name", "name"),
            ],
        );

        assert!(entity.validate().is_ok());
    }
}
