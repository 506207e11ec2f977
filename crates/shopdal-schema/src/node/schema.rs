use crate::{
    node::{EntitySchema, NodeError, ValidateNode, VisitableNode},
    visit::Visitor,
};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// Schema
///
/// Every composed entity, keyed by entity name. Built once by
/// `SchemaBuilder` and never mutated afterwards; share it by reference or
/// behind an `Arc`.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    entities: BTreeMap<String, EntitySchema>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, entity: EntitySchema) -> Option<EntitySchema> {
        self.entities.insert(entity.name().to_string(), entity)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.get(name)
    }

    pub fn try_get(&self, name: &str) -> Result<&EntitySchema, NodeError> {
        self.get(name)
            .ok_or_else(|| NodeError::EntityNotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Entities in name order.
    pub fn entities(&self) -> impl Iterator<Item = (&str, &EntitySchema)> {
        self.entities
            .iter()
            .map(|(name, entity)| (name.as_str(), entity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Total number of fields across all entities.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.entities.values().map(|e| e.fields().len()).sum()
    }
}

impl ValidateNode for Schema {}

impl VisitableNode for Schema {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for entity in self.entities.values() {
            entity.accept(v);
        }
    }
}
