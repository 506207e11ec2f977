use crate::{
    err,
    error::ErrorTree,
    node::{Association, EntitySchema, Field, FieldKind, ManyToMany, Schema},
    types::DefinitionKind,
};

// Validate that every reference names a registered entity and that every
// association's key pairing resolves to real columns on both sides.
pub fn validate_relations(schema: &Schema, errs: &mut ErrorTree) {
    for (name, entity) in schema.entities() {
        for field in entity.fields() {
            let mut field_errs = ErrorTree::new();
            validate_field_relation(schema, entity, field, &mut field_errs);

            errs.merge_at(&[name, field.property_name()], field_errs);
        }
    }
}

fn validate_field_relation(
    schema: &Schema,
    owner: &EntitySchema,
    field: &Field,
    errs: &mut ErrorTree,
) {
    let Some(reference) = field.reference() else {
        return;
    };
    let Some(target) = schema.get(reference) else {
        err!(errs, "references unknown entity '{reference}'");
        return;
    };

    match field.kind() {
        FieldKind::Parent { .. } if target.name() != owner.name() => {
            err!(
                errs,
                "parent key must reference '{}' itself, found '{reference}'",
                owner.name()
            );
        }
        FieldKind::Association(assoc) => validate_association(schema, owner, target, assoc, errs),
        _ => {}
    }
}

fn validate_association(
    schema: &Schema,
    owner: &EntitySchema,
    target: &EntitySchema,
    assoc: &Association,
    errs: &mut ErrorTree,
) {
    match assoc {
        Association::ManyToOne {
            storage,
            reference_key,
            ..
        } => {
            require_column(owner, storage, errs);
            require_column(target, reference_key, errs);
        }
        Association::OneToMany {
            reference_field,
            local_field,
            ..
        } => {
            require_column(target, reference_field, errs);
            require_column(owner, local_field, errs);
        }
        Association::Children {
            reference_field,
            local_field,
            ..
        } => {
            if target.name() != owner.name() {
                err!(
                    errs,
                    "children must reference '{}' itself, found '{}'",
                    owner.name(),
                    target.name()
                );
            }
            require_column(owner, reference_field, errs);
            require_column(owner, local_field, errs);
        }
        Association::Translations {
            reference_field,
            local_field,
            ..
        } => {
            if target.kind() != DefinitionKind::Translation {
                err!(
                    errs,
                    "translations must reference a translation definition, '{}' is {}",
                    target.name(),
                    target.kind()
                );
            }
            require_column(target, reference_field, errs);
            require_column(owner, local_field, errs);
        }
        Association::ManyToMany(m2m) => validate_many_to_many(schema, owner, m2m, errs),
        Association::CanonicalUrl { local_field, .. } => {
            require_column(owner, local_field, errs);
        }
    }
}

fn validate_many_to_many(
    schema: &Schema,
    owner: &EntitySchema,
    m2m: &ManyToMany,
    errs: &mut ErrorTree,
) {
    require_column(owner, &m2m.source_column, errs);

    let Some(mapping) = schema.get(&m2m.mapping) else {
        err!(errs, "references unknown mapping definition '{}'", m2m.mapping);
        return;
    };
    if mapping.kind() != DefinitionKind::Mapping {
        err!(
            errs,
            "'{}' is used as a mapping but is {}",
            mapping.name(),
            mapping.kind()
        );
    }

    require_column(mapping, &m2m.mapping_local_column, errs);
    require_column(mapping, &m2m.mapping_reference_column, errs);
    require_reference(mapping, &m2m.mapping_local_column, owner.name(), errs);
    require_reference(mapping, &m2m.mapping_reference_column, &m2m.reference, errs);
}

// The column must be a persisted column of `entity`.
fn require_column(entity: &EntitySchema, column: &str, errs: &mut ErrorTree) {
    if !entity.fields().has_column(column) {
        err!(errs, "'{}' has no column '{column}'", entity.name());
    }
}

// If `column` is a foreign key on `entity`, it must point at `expected`.
fn require_reference(entity: &EntitySchema, column: &str, expected: &str, errs: &mut ErrorTree) {
    let Some(field) = entity.fields().get_by_storage(column) else {
        return;
    };
    if let FieldKind::Fk { reference } = field.kind()
        && reference != expected
    {
        err!(
            errs,
            "'{}.{column}' references '{reference}', expected '{expected}'",
            entity.name()
        );
    }
}
