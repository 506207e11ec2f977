use crate::{CategoryDefinition, ListingSortingDefinition, ShopDefinition};
use shopdal_schema::prelude::*;

///
/// ProductDefinition
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ProductDefinition;

impl ProductDefinition {
    pub const ENTITY_NAME: &'static str = "product";
}

impl EntityDefinition for ProductDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::catalog(),
            Field::bool("active", "active"),
            Field::string("ean", "ean"),
            Field::int("stock", "stock"),
            Field::int("min_purchase", "minPurchase"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::many_to_many(
                "categories",
                ManyToMany::new(
                    CategoryDefinition::ENTITY_NAME,
                    ProductCategoryDefinition::ENTITY_NAME,
                    "product_id",
                    "category_id",
                ),
            )
            .with_flags([Flag::CascadeDelete]),
        ])
    }
}

///
/// ProductCategoryDefinition
/// join rows behind `category.products` and `product.categories`
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ProductCategoryDefinition;

impl ProductCategoryDefinition {
    pub const ENTITY_NAME: &'static str = "product_category";
}

impl EntityDefinition for ProductCategoryDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Mapping
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::fk("product_id", "productId", ProductDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(ProductDefinition::ENTITY_NAME),
            Field::fk("category_id", "categoryId", CategoryDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(CategoryDefinition::ENTITY_NAME),
            Field::many_to_one(
                "product",
                "product_id",
                ProductDefinition::ENTITY_NAME,
                false,
            ),
            Field::many_to_one(
                "category",
                "category_id",
                CategoryDefinition::ENTITY_NAME,
                false,
            ),
        ])
    }
}

///
/// ProductSeoCategoryDefinition
/// the category a product's SEO url is generated under, per shop
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ProductSeoCategoryDefinition;

impl ProductSeoCategoryDefinition {
    pub const ENTITY_NAME: &'static str = "product_seo_category";
}

impl EntityDefinition for ProductSeoCategoryDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Mapping
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::fk("shop_id", "shopId", ShopDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::fk("product_id", "productId", ProductDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(ProductDefinition::ENTITY_NAME),
            Field::fk("category_id", "categoryId", CategoryDefinition::ENTITY_NAME)
                .with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::reference_version(CategoryDefinition::ENTITY_NAME),
            Field::many_to_one("shop", "shop_id", ShopDefinition::ENTITY_NAME, false),
            Field::many_to_one(
                "product",
                "product_id",
                ProductDefinition::ENTITY_NAME,
                false,
            ),
            Field::many_to_one(
                "category",
                "category_id",
                CategoryDefinition::ENTITY_NAME,
                false,
            ),
        ])
    }
}

///
/// ProductStreamDefinition
///
/// A saved product filter. Categories can list a stream's products; a stream
/// can pin a listing sorting.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ProductStreamDefinition;

impl ProductStreamDefinition {
    pub const ENTITY_NAME: &'static str = "product_stream";
}

impl EntityDefinition for ProductStreamDefinition {
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn fields(&self) -> FieldCollection {
        FieldCollection::new([
            Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]),
            Field::version(),
            Field::fk(
                "listing_sorting_id",
                "listingSortingId",
                ListingSortingDefinition::ENTITY_NAME,
            ),
            Field::reference_version(ListingSortingDefinition::ENTITY_NAME),
            Field::string("name", "name").with_flags([Flag::Required]),
            Field::long_text("description", "description"),
            Field::long_text("conditions", "conditions"),
            Field::date("created_at", "createdAt"),
            Field::date("updated_at", "updatedAt"),
            Field::many_to_one(
                "listingSorting",
                "listing_sorting_id",
                ListingSortingDefinition::ENTITY_NAME,
                false,
            ),
            Field::one_to_many(
                "categories",
                CategoryDefinition::ENTITY_NAME,
                "product_stream_id",
                false,
                "id",
            ),
        ])
    }
}
