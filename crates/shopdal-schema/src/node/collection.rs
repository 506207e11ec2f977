use crate::node::{Association, Field, FieldKind, FlagKind, ValidateNode, VisitableNode};
use crate::visit::Visitor;
use serde::Serialize;

///
/// FieldCollection
///
/// Ordered field list keyed by property name. Adding a field whose property
/// is already present replaces the earlier one without moving it.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldCollection {
    fields: Vec<Field>,
}

impl FieldCollection {
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut collection = Self::default();
        for field in fields {
            collection.add(field);
        }

        collection
    }

    /// Add a field, returning the field it replaced (if any).
    pub fn add(&mut self, field: Field) -> Option<Field> {
        let existing = self
            .fields
            .iter()
            .position(|f| f.property_name() == field.property_name());

        if let Some(pos) = existing {
            tracing::debug!(
                property = field.property_name(),
                kind = %field.kind().label(),
                "field replaces an earlier declaration"
            );
            return Some(std::mem::replace(&mut self.fields[pos], field));
        }

        self.fields.push(field);
        None
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.property_name() == property)
    }

    #[must_use]
    pub fn get_by_storage(&self, storage: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.storage_name() == Some(storage))
    }

    /// True if a column of the owning table carries `storage`.
    #[must_use]
    pub fn has_column(&self, storage: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.kind().is_persisted() && f.storage_name() == Some(storage))
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Field> {
        self.filter_by_flag(FlagKind::PrimaryKey)
    }

    pub fn filter_by_flag(&self, flag: FlagKind) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.is(flag))
    }

    pub fn translated(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind(), FieldKind::Translated(_)))
    }

    pub fn associations(&self) -> impl Iterator<Item = (&Field, &Association)> {
        self.fields
            .iter()
            .filter_map(|f| f.as_association().map(|assoc| (f, assoc)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Extend<Field> for FieldCollection {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        for field in iter {
            self.add(field);
        }
    }
}

impl ValidateNode for FieldCollection {}

impl VisitableNode for FieldCollection {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for field in &self.fields {
            field.accept(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Flag;

    fn tree() -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::fk("parent_id", "parentId", "category"),
            Field::parent("category"),
            Field::string("name", "name"),
            Field::children("category").with_flags([Flag::CascadeDelete]),
        ])
    }

    #[test]
    fn same_property_replaces_in_place() {
        let fields = tree();

        assert_eq!(fields.len(), 4);
        let order: Vec<_> = fields.iter().map(Field::property_name).collect();
        assert_eq!(order, ["id", "parentId", "name", "children"]);
        assert!(matches!(
            fields.get("parentId").map(Field::kind),
            Some(FieldKind::Parent { .. })
        ));
    }

    #[test]
    fn add_returns_replaced_field() {
        let mut fields = tree();
        let old = fields.add(Field::long_text("name", "name"));

        assert_eq!(old, Some(Field::string("name", "name")));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn lookups() {
        let fields = tree();

        assert_eq!(fields.primary_keys().count(), 1);
        assert_eq!(
            fields.get_by_storage("parent_id").map(Field::property_name),
            Some("parentId")
        );
        assert!(fields.has_column("name"));
        assert!(!fields.has_column("children"));
        assert_eq!(fields.associations().count(), 1);
        assert_eq!(fields.filter_by_flag(FlagKind::CascadeDelete).count(), 1);
    }
}
