use crate::{CategoryDefinition, LanguageDefinition};
use shopdal_schema::prelude::*;

///
/// ShopDefinition
///
/// A sales channel. Its `category_id` is the root of the tree it shows,
/// which is why deleting a category is restricted while shops point at it.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ShopDefinition;

impl ShopDefinition {
    pub const ENTITY_NAME: &'static str = "shop";
}

impl EntityDefinition for ShopDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::fk("category_id", "categoryId", CategoryDefinition::ENTITY_NAME)
                .with_flags([Flag::Required]),
            Field::reference_version(CategoryDefinition::ENTITY_NAME),
            Field::fk("language_id", "languageId", LanguageDefinition::ENTITY_NAME)
                .with_flags([Flag::Required]),
            Field::string("name", "name").with_flags([Flag::Required]),
            Field::string("host", "host"),
            Field::string("base_path", "basePath"),
            Field::int("position", "position"),
            Field::bool("active", "active"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::many_to_one(
                "category",
                "category_id",
                CategoryDefinition::ENTITY_NAME,
                false,
            ),
            Field::many_to_one(
                "language",
                "language_id",
                LanguageDefinition::ENTITY_NAME,
                true,
            ),
        ])
    }
}
