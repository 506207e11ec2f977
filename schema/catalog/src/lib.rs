//! Catalog entity definitions.
//!
//! `category` and `listing_sorting` are the definitions of interest; the
//! remaining ones exist so every reference and key pairing they declare
//! resolves inside one schema.

pub mod category;
pub mod language;
pub mod listing;
pub mod media;
pub mod product;
pub mod seo_url;
pub mod shop;

pub use category::{CategoryDefinition, CategoryTranslationDefinition};
pub use language::LanguageDefinition;
pub use listing::{ListingSortingDefinition, ListingSortingTranslationDefinition};
pub use media::MediaDefinition;
pub use product::{
    ProductCategoryDefinition, ProductDefinition, ProductSeoCategoryDefinition,
    ProductStreamDefinition,
};
pub use seo_url::{LISTING_PAGE_ROUTE, SeoUrlDefinition};
pub use shop::ShopDefinition;

use shopdal_schema::{Error, build::SchemaBuilder, definition::EntityDefinition, node::Schema};

/// Every catalog definition, in registration order.
#[must_use]
pub fn definitions() -> Vec<Box<dyn EntityDefinition>> {
    vec![
        Box::new(CategoryDefinition),
        Box::new(CategoryTranslationDefinition),
        Box::new(ListingSortingDefinition),
        Box::new(ListingSortingTranslationDefinition),
        Box::new(LanguageDefinition),
        Box::new(MediaDefinition),
        Box::new(ProductDefinition),
        Box::new(ProductCategoryDefinition),
        Box::new(ProductSeoCategoryDefinition),
        Box::new(ProductStreamDefinition),
        Box::new(SeoUrlDefinition),
        Box::new(ShopDefinition),
    ]
}

/// A builder with the catalog registered; add extensions before building.
#[must_use]
pub fn builder() -> SchemaBuilder {
    let mut builder = SchemaBuilder::new();
    for definition in definitions() {
        builder.register_boxed(definition);
    }

    builder
}

/// Build the catalog schema without extensions.
pub fn schema() -> Result<Schema, Error> {
    builder().build()
}
