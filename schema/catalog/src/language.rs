use shopdal_schema::prelude::*;

///
/// LanguageDefinition
///

#[derive(Clone, Copy, Debug, Default)]
pub struct LanguageDefinition;

impl LanguageDefinition {
    pub const ENTITY_NAME: &'static str = "language";
}

impl EntityDefinition for LanguageDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::string("name", "name").with_flags([Flag::Required]),
            Field::string("locale_code", "localeCode").with_flags([Flag::Required]),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
        ])
    }
}
