use crate::{
    err,
    error::ErrorTree,
    node::{Association, EntitySchema, FieldKind, Schema},
    types::DefinitionKind,
};

// Validate that translated fields have somewhere to live: a translation
// definition declaring the same column with the same scalar kind, reachable
// through a translations association.
pub fn validate_translations(schema: &Schema, errs: &mut ErrorTree) {
    for (name, entity) in schema.entities() {
        let mut entity_errs = ErrorTree::new();
        validate_entity_translations(schema, entity, &mut entity_errs);

        errs.merge_at(&[name], entity_errs);
    }
}

fn validate_entity_translations(schema: &Schema, entity: &EntitySchema, errs: &mut ErrorTree) {
    let has_translated = entity.fields().translated().next().is_some();

    let Some(translation_name) = entity.translation_definition() else {
        if has_translated {
            err!(errs, "declares translated fields but no translation definition");
        }
        return;
    };

    let Some(translation) = schema.get(translation_name) else {
        err!(errs, "translation definition '{translation_name}' is not registered");
        return;
    };
    if translation.kind() != DefinitionKind::Translation {
        err!(
            errs,
            "translation definition '{translation_name}' is {}, expected Translation",
            translation.kind()
        );
    }

    let linked = entity.fields().associations().any(|(_, assoc)| {
        matches!(assoc, Association::Translations { reference, .. } if reference == translation_name)
    });
    if !linked {
        err!(
            errs,
            "has no translations association to '{translation_name}'"
        );
    }

    for field in entity.fields().translated() {
        let FieldKind::Translated(kind) = field.kind() else {
            continue;
        };
        let Some(storage) = field.storage_name() else {
            continue;
        };

        match translation.fields().get_by_storage(storage) {
            Some(target) if target.kind() == &FieldKind::Scalar(*kind) => {}
            Some(target) => err!(
                errs,
                "translated field '{}' is {kind} but '{translation_name}.{storage}' is {}",
                field.property_name(),
                target.kind().label()
            ),
            None => err!(
                errs,
                "translated field '{}' has no column '{storage}' in '{translation_name}'",
                field.property_name()
            ),
        }
    }
}
