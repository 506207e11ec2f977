use crate::node::{Field, FieldCollection};

///
/// EntityExtension
///
/// Adds fields to another entity's collection. Extensions are applied by
/// `SchemaBuilder::build`, in registration order, before any collection is
/// read.
///

pub trait EntityExtension: Send + Sync {
    /// Entity whose collection this extension modifies.
    fn entity_name(&self) -> &str;

    fn extend_fields(&self, fields: &mut FieldCollection);
}

///
/// FieldExtension
///
/// An extension that appends a fixed list of fields.
///

#[derive(Clone, Debug)]
pub struct FieldExtension {
    entity: String,
    fields: Vec<Field>,
}

impl FieldExtension {
    #[must_use]
    pub fn new(entity: impl Into<String>, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            entity: entity.into(),
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl EntityExtension for FieldExtension {
    fn entity_name(&self) -> &str {
        &self.entity
    }

    fn extend_fields(&self, fields: &mut FieldCollection) {
        fields.extend(self.fields.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_after_existing_fields() {
        let mut fields = FieldCollection::new([Field::id("id", "id")]);
        let ext = FieldExtension::new(
            "category",
            [
                Field::bool("is_featured", "isFeatured"),
                Field::string("badge", "badge"),
            ],
        );
        ext.extend_fields(&mut fields);

        let order: Vec<_> = fields.iter().map(Field::property_name).collect();
        assert_eq!(order, ["id", "isFeatured", "badge"]);
        assert_eq!(ext.entity_name(), "category");
    }
}
