use crate::CategoryDefinition;
use shopdal_schema::prelude::*;

///
/// MediaDefinition
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MediaDefinition;

impl MediaDefinition {
    pub const ENTITY_NAME: &'static str = "media";
}

impl EntityDefinition for MediaDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::catalog(),
            Field::string("file_name", "fileName").with_flags([Flag::Required]),
            Field::string("mime_type", "mimeType"),
            Field::int("file_size", "fileSize"),
            Field::long_text("meta_data", "metaData"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::one_to_many(
                "categories",
                CategoryDefinition::ENTITY_NAME,
                "media_id",
                false,
                "id",
            ),
        ])
    }
}
