use derive_more::Display;
use serde::Serialize;

/// Entity every canonical-URL association resolves against.
pub const SEO_URL_ENTITY: &str = "seo_url";

///
/// Association
///
/// Relationship from the owning entity to rows of another entity. Column
/// names are storage names; `reference_*` columns live on the target.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Association {
    /// The canonical SEO url of a row, looked up by route name.
    CanonicalUrl {
        local_field: String,
        route_name: String,
        load_in_basic: bool,
    },

    /// Tree children pointing back at the owner through `reference_field`.
    Children {
        reference: String,
        reference_field: String,
        local_field: String,
    },

    ManyToMany(ManyToMany),

    /// The owner's `storage` column holds the target's `reference_key`.
    ManyToOne {
        reference: String,
        storage: String,
        reference_key: String,
        load_in_basic: bool,
    },

    /// The target's `reference_field` column holds the owner's `local_field`.
    OneToMany {
        reference: String,
        reference_field: String,
        local_field: String,
        load_in_basic: bool,
    },

    Translations {
        reference: String,
        reference_field: String,
        local_field: String,
        load_in_basic: bool,
    },
}

impl Association {
    /// Name of the entity on the other side.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::CanonicalUrl { .. } => SEO_URL_ENTITY,
            Self::Children { reference, .. }
            | Self::ManyToOne { reference, .. }
            | Self::OneToMany { reference, .. }
            | Self::Translations { reference, .. } => reference,
            Self::ManyToMany(m2m) => &m2m.reference,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AssociationKind {
        match self {
            Self::CanonicalUrl { .. } => AssociationKind::CanonicalUrl,
            Self::Children { .. } => AssociationKind::Children,
            Self::ManyToMany(_) => AssociationKind::ManyToMany,
            Self::ManyToOne { .. } => AssociationKind::ManyToOne,
            Self::OneToMany { .. } => AssociationKind::OneToMany,
            Self::Translations { .. } => AssociationKind::Translations,
        }
    }

    /// Whether deleting the owner can affect several target rows.
    #[must_use]
    pub const fn is_to_many(&self) -> bool {
        matches!(
            self,
            Self::Children { .. }
                | Self::ManyToMany(_)
                | Self::OneToMany { .. }
                | Self::Translations { .. }
        )
    }

    #[must_use]
    pub const fn load_in_basic(&self) -> bool {
        match self {
            Self::CanonicalUrl { load_in_basic, .. }
            | Self::ManyToOne { load_in_basic, .. }
            | Self::OneToMany { load_in_basic, .. }
            | Self::Translations { load_in_basic, .. } => *load_in_basic,
            Self::ManyToMany(m2m) => m2m.load_in_basic,
            Self::Children { .. } => false,
        }
    }
}

///
/// AssociationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum AssociationKind {
    CanonicalUrl,
    Children,
    ManyToMany,
    ManyToOne,
    OneToMany,
    Translations,
}

///
/// ManyToMany
///
/// Association through a mapping definition: `mapping_local_column` holds the
/// owner's `source_column`, `mapping_reference_column` the target's id.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ManyToMany {
    pub reference: String,
    pub mapping: String,
    pub mapping_local_column: String,
    pub mapping_reference_column: String,
    pub source_column: String,

    /// Property on the loaded struct that carries the joined ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_mapping_property: Option<String>,

    pub load_in_basic: bool,
}

impl ManyToMany {
    #[must_use]
    pub fn new(
        reference: impl Into<String>,
        mapping: impl Into<String>,
        mapping_local_column: impl Into<String>,
        mapping_reference_column: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            mapping: mapping.into(),
            mapping_local_column: mapping_local_column.into(),
            mapping_reference_column: mapping_reference_column.into(),
            source_column: "id".to_string(),
            id_mapping_property: None,
            load_in_basic: false,
        }
    }

    #[must_use]
    pub fn source_column(mut self, column: impl Into<String>) -> Self {
        self.source_column = column.into();
        self
    }

    #[must_use]
    pub fn id_mapping_property(mut self, property: impl Into<String>) -> Self {
        self.id_mapping_property = Some(property.into());
        self
    }

    #[must_use]
    pub fn in_basic(mut self) -> Self {
        self.load_in_basic = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_url_targets_seo_urls() {
        let assoc = Association::CanonicalUrl {
            local_field: "id".to_string(),
            route_name: "listing_page".to_string(),
            load_in_basic: true,
        };

        assert_eq!(assoc.reference(), SEO_URL_ENTITY);
        assert!(!assoc.is_to_many());
        assert!(assoc.load_in_basic());
    }

    #[test]
    fn many_to_many_defaults_to_id_source() {
        let m2m = ManyToMany::new("product", "product_category", "category_id", "product_id")
            .id_mapping_property("category_join_id");

        assert_eq!(m2m.source_column, "id");
        assert_eq!(m2m.id_mapping_property.as_deref(), Some("category_join_id"));
        assert!(!m2m.load_in_basic);
        assert!(Association::ManyToMany(m2m).is_to_many());
    }
}
