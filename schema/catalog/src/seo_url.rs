use crate::ShopDefinition;
use shopdal_schema::prelude::*;

/// Route name under which category listing pages are indexed.
pub const LISTING_PAGE_ROUTE: &str = "listing_page";

///
/// SeoUrlDefinition
///
/// Generated storefront urls. `name` is the route name, `foreign_key` the id
/// of the row the url points at; canonical-url associations join on both.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SeoUrlDefinition;

impl SeoUrlDefinition {
    pub const ENTITY_NAME: &'static str = SEO_URL_ENTITY;
}

impl EntityDefinition for SeoUrlDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::fk("shop_id", "shopId", ShopDefinition::ENTITY_NAME)
                .with_flags([Flag::Required]),
            Field::string("name", "name").with_flags([Flag::Required]),
            Field::string("foreign_key", "foreignKey").with_flags([Flag::Required]),
            Field::long_text("path_info", "pathInfo").with_flags([Flag::Required]),
            Field::long_text("seo_path_info", "seoPathInfo").with_flags([Flag::Required]),
            Field::bool("is_canonical", "isCanonical"),
            Field::date("created_at", "createdAt"),
            Field::many_to_one("shop", "shop_id", ShopDefinition::ENTITY_NAME, false),
        ])
    }
}
