use crate::{
    LISTING_PAGE_ROUTE, LanguageDefinition, MediaDefinition, ProductCategoryDefinition,
    ProductDefinition, ProductSeoCategoryDefinition, ProductStreamDefinition, ShopDefinition,
};
use shopdal_schema::prelude::*;

///
/// CategoryDefinition
///
/// Storefront category tree. Rows point at their parent through
/// `parent_id`; names and SEO texts are translated.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryDefinition;

impl CategoryDefinition {
    pub const ENTITY_NAME: &'static str = "category";
}

impl EntityDefinition for CategoryDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::catalog(),
            //
            Field::fk("parent_id", "parentId", Self::ENTITY_NAME),
            Field::parent(Self::ENTITY_NAME),
            Field::reference_version_as(Self::ENTITY_NAME, "parent_version_id"),
            //
            Field::fk("media_id", "mediaId", MediaDefinition::ENTITY_NAME),
            Field::reference_version(MediaDefinition::ENTITY_NAME),
            //
            Field::fk(
                "product_stream_id",
                "productStreamId",
                ProductStreamDefinition::ENTITY_NAME,
            ),
            Field::reference_version(ProductStreamDefinition::ENTITY_NAME),
            //
            Field::long_text("path", "path"),
            Field::int("position", "position"),
            Field::int("level", "level"),
            Field::string("template", "template"),
            Field::bool("active", "active"),
            Field::bool("is_blog", "isBlog"),
            Field::string("external", "external"),
            Field::bool("hide_filter", "hideFilter"),
            Field::bool("hide_top", "hideTop"),
            Field::string("product_box_layout", "productBoxLayout"),
            Field::bool("hide_sortings", "hideSortings"),
            Field::long_text("sorting_ids", "sortingIds"),
            Field::long_text("facet_ids", "facetIds"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::translated(ScalarKind::String, "name", "name")
                .with_flags([Flag::SearchRanking(HIGH_SEARCH_RANKING)]),
            Field::translated(ScalarKind::LongText, "path_names", "pathNames"),
            Field::translated(ScalarKind::LongText, "meta_keywords", "metaKeywords")
                .with_flags([Flag::SearchRanking(LOW_SEARCH_RANKING)]),
            Field::translated(ScalarKind::String, "meta_title", "metaTitle"),
            Field::translated(ScalarKind::LongText, "meta_description", "metaDescription"),
            Field::translated(ScalarKind::String, "cms_headline", "cmsHeadline"),
            Field::translated(ScalarKind::LongText, "cms_description", "cmsDescription"),
            Field::many_to_one("parent", "parent_id", Self::ENTITY_NAME, false),
            Field::many_to_one("media", "media_id", MediaDefinition::ENTITY_NAME, false),
            Field::many_to_one(
                "productStream",
                "product_stream_id",
                ProductStreamDefinition::ENTITY_NAME,
                false,
            ),
            Field::children(Self::ENTITY_NAME).with_flags([Flag::CascadeDelete]),
            Field::translations(
                "translations",
                CategoryTranslationDefinition::ENTITY_NAME,
                "category_id",
                false,
                "id",
            )
            .with_flags([Flag::Required, Flag::CascadeDelete]),
            Field::one_to_many(
                "shops",
                ShopDefinition::ENTITY_NAME,
                "category_id",
                false,
                "id",
            )
            .with_flags([Flag::RestrictDelete, Flag::WriteOnly]),
            Field::many_to_many(
                "products",
                ManyToMany::new(
                    ProductDefinition::ENTITY_NAME,
                    ProductCategoryDefinition::ENTITY_NAME,
                    "category_id",
                    "product_id",
                )
                .id_mapping_property("category_join_id"),
            )
            .with_flags([Flag::CascadeDelete, Flag::WriteOnly]),
            Field::many_to_many(
                "seoProducts",
                ManyToMany::new(
                    ProductDefinition::ENTITY_NAME,
                    ProductSeoCategoryDefinition::ENTITY_NAME,
                    "category_id",
                    "product_id",
                ),
            )
            .with_flags([Flag::CascadeDelete, Flag::WriteOnly]),
            Field::canonical_url("canonicalUrl", "id", true, LISTING_PAGE_ROUTE),
        ])
    }

    fn companions(&self) -> Companions {
        Companions::for_entity(Self::ENTITY_NAME).in_module("catalog::category")
    }

    fn translation_definition(&self) -> Option<&'static str> {
        Some(CategoryTranslationDefinition::ENTITY_NAME)
    }
}

///
/// CategoryTranslationDefinition
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryTranslationDefinition;

impl CategoryTranslationDefinition {
    pub const ENTITY_NAME: &'static str = "category_translation";
}

impl EntityDefinition for CategoryTranslationDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Translation
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::fk("category_id", "categoryId", CategoryDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(CategoryDefinition::ENTITY_NAME),
            Field::fk("language_id", "languageId", LanguageDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::string("name", "name").with_flags([Flag::Required]),
            Field::long_text("path_names", "pathNames"),
            Field::long_text("meta_keywords", "metaKeywords"),
            Field::string("meta_title", "metaTitle"),
            Field::long_text("meta_description", "metaDescription"),
            Field::string("cms_headline", "cmsHeadline"),
            Field::long_text("cms_description", "cmsDescription"),
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
                false,
            ),
        ])
    }

    fn companions(&self) -> Companions {
        Companions::for_entity(Self::ENTITY_NAME).in_module("catalog::category")
    }
}
