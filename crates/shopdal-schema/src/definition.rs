use crate::{node::FieldCollection, types::DefinitionKind};
use convert_case::{Case, Casing};
use serde::Serialize;

///
/// EntityDefinition
///
/// Declarative description of one entity. `fields` builds a fresh collection
/// every time it is called; `SchemaBuilder` calls it exactly once per build
/// and keeps the result.
///

pub trait EntityDefinition: Send + Sync {
    fn entity_name(&self) -> &'static str;

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Entity
    }

    fn fields(&self) -> FieldCollection;

    fn companions(&self) -> Companions {
        Companions::for_entity(self.entity_name())
    }

    /// Entity holding per-locale values, for definitions with translated fields.
    fn translation_definition(&self) -> Option<&'static str> {
        None
    }
}

///
/// Companions
///
/// Names of the types the persistence framework pairs with an entity.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Companions {
    pub repository: String,
    pub basic_struct: String,
    pub detail_struct: String,
    pub basic_collection: String,
    pub detail_collection: String,
    pub written_event: String,
    pub deleted_event: String,
}

impl Companions {
    /// Conventional names: `category` → `CategoryRepository`, `CategoryBasicStruct`, ...
    #[must_use]
    pub fn for_entity(entity_name: &str) -> Self {
        let base = entity_name.to_case(Case::Pascal);

        Self {
            repository: format!("{base}Repository"),
            basic_struct: format!("{base}BasicStruct"),
            detail_struct: format!("{base}DetailStruct"),
            basic_collection: format!("{base}BasicCollection"),
            detail_collection: format!("{base}DetailCollection"),
            written_event: format!("{base}WrittenEvent"),
            deleted_event: format!("{base}DeletedEvent"),
        }
    }

    /// Prefix every name with a module path (`catalog::category`).
    #[must_use]
    pub fn in_module(self, module: &str) -> Self {
        let qualify = |name: String| format!("{module}::{name}");

        Self {
            repository: qualify(self.repository),
            basic_struct: qualify(self.basic_struct),
            detail_struct: qualify(self.detail_struct),
            basic_collection: qualify(self.basic_collection),
            detail_collection: qualify(self.detail_collection),
            written_event: qualify(self.written_event),
            deleted_event: qualify(self.deleted_event),
        }
    }

    fn entries(&self) -> [(&str, &str); 7] {
        [
            ("repository", self.repository.as_str()),
            ("basic_struct", self.basic_struct.as_str()),
            ("detail_struct", self.detail_struct.as_str()),
            ("basic_collection", self.basic_collection.as_str()),
            ("detail_collection", self.detail_collection.as_str()),
            ("written_event", self.written_event.as_str()),
            ("deleted_event", self.deleted_event.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        let empty: Vec<&str> = self
            .entries()
            .into_iter()
            .filter(|(_, name)| name.trim().is_empty())
            .map(|(role, _)| role)
            .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(format!("companion names are empty: {}", empty.join(", ")))
        }
    }
}
