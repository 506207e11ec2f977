use crate::{LanguageDefinition, ProductStreamDefinition};
use shopdal_schema::prelude::*;

///
/// ListingSortingDefinition
///
/// A sort order offered on listing pages. `payload` carries the serialized
/// sorting criteria; the label is translated.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ListingSortingDefinition;

impl ListingSortingDefinition {
    pub const ENTITY_NAME: &'static str = "listing_sorting";
}

impl EntityDefinition for ListingSortingDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::version(),
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::long_text("payload", "payload").with_flags([Flag::Required]),
            Field::translated(ScalarKind::String, "label", "label"),
            Field::bool("active", "active"),
            Field::bool("display_in_categories", "displayInCategories"),
            Field::int("position", "position"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::translations(
                "translations",
                ListingSortingTranslationDefinition::ENTITY_NAME,
                "listing_sorting_id",
                false,
                "id",
            )
            .with_flags([Flag::Required, Flag::CascadeDelete]),
            Field::one_to_many(
                "productStreams",
                ProductStreamDefinition::ENTITY_NAME,
                "listing_sorting_id",
                false,
                "id",
            ),
        ])
    }

    fn companions(&self) -> Companions {
        Companions::for_entity(Self::ENTITY_NAME).in_module("catalog::listing")
    }

    fn translation_definition(&self) -> Option<&'static str> {
        Some(ListingSortingTranslationDefinition::ENTITY_NAME)
    }
}

///
/// ListingSortingTranslationDefinition
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ListingSortingTranslationDefinition;

impl ListingSortingTranslationDefinition {
    pub const ENTITY_NAME: &'static str = "listing_sorting_translation";
}

impl EntityDefinition for ListingSortingTranslationDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Translation
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::fk(
                "listing_sorting_id",
                "listingSortingId",
                ListingSortingDefinition::ENTITY_NAME,
            )
            .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(ListingSortingDefinition::ENTITY_NAME),
            Field::fk("language_id", "languageId", LanguageDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::string("label", "label").with_flags([Flag::Required]),
            Field::many_to_one(
                "listingSorting",
                "listing_sorting_id",
                ListingSortingDefinition::ENTITY_NAME,
                false,
            ),
            Field::many_to_one(
                "language",
                "language_id",
                LanguageDefinition::ENTITY_NAME,
                false,
            ),
        ])
    }

    fn companions(&self) -> Companions {
        Companions::for_entity(Self::ENTITY_NAME).in_module("catalog::listing")
    }
}
