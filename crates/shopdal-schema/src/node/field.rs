use crate::{
    err,
    error::ErrorTree,
    node::{Association, Flag, FlagKind, Flags, ManyToMany, ValidateNode, VisitableNode},
    types::ScalarKind,
    validate::naming::{validate_property_name, validate_storage_name},
};
use convert_case::{Case, Casing};
use serde::Serialize;

///
/// FieldKind
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Association(Association),

    /// Tenant catalog the row belongs to.
    Catalog,

    Fk {
        reference: String,
    },

    Id,

    /// Foreign key to the parent row of a tree.
    Parent {
        reference: String,
    },

    /// Version column paired with a foreign key.
    ReferenceVersion {
        reference: String,
    },

    Scalar(ScalarKind),

    /// Scalar stored per locale in the translation definition.
    Translated(ScalarKind),

    Version,
}

impl FieldKind {
    /// Entity named by this field, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Association(assoc) => Some(assoc.reference()),
            Self::Fk { reference }
            | Self::Parent { reference }
            | Self::ReferenceVersion { reference } => Some(reference),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_association(&self) -> bool {
        matches!(self, Self::Association(_))
    }

    /// Whether the value lives in a column of the owning entity's table.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        !matches!(self, Self::Association(_) | Self::Translated(_))
    }

    #[must_use]
    pub const fn is_key_like(&self) -> bool {
        matches!(self, Self::Fk { .. } | Self::Id | Self::Parent { .. })
    }

    /// Short label used in listings.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Association(assoc) => format!("{}({})", assoc.kind(), assoc.reference()),
            Self::Catalog => "Catalog".to_string(),
            Self::Fk { reference } => format!("Fk({reference})"),
            Self::Id => "Id".to_string(),
            Self::Parent { reference } => format!("Parent({reference})"),
            Self::ReferenceVersion { reference } => format!("ReferenceVersion({reference})"),
            Self::Scalar(kind) => kind.to_string(),
            Self::Translated(kind) => format!("Translated({kind})"),
            Self::Version => "Version".to_string(),
        }
    }
}

///
/// Field
///
/// One attribute of an entity: where it is stored, what it is called in
/// memory, what it is, and how writes treat it.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage: Option<String>,
    property: String,
    kind: FieldKind,

    #[serde(default, skip_serializing_if = "Flags::is_empty")]
    flags: Flags,
}

impl Field {
    fn new(storage: Option<String>, property: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            storage,
            property: property.into(),
            kind,
            flags: Flags::new(),
        }
    }

    //
    // columns
    //

    #[must_use]
    pub fn id(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(Some(storage.into()), property, FieldKind::Id)
    }

    #[must_use]
    pub fn scalar(kind: ScalarKind, storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(Some(storage.into()), property, FieldKind::Scalar(kind))
    }

    #[must_use]
    pub fn bool(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::scalar(ScalarKind::Bool, storage, property)
    }

    #[must_use]
    pub fn int(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::scalar(ScalarKind::Int, storage, property)
    }

    #[must_use]
    pub fn string(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::scalar(ScalarKind::String, storage, property)
    }

    #[must_use]
    pub fn long_text(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::scalar(ScalarKind::LongText, storage, property)
    }

    #[must_use]
    pub fn date(storage: impl Into<String>, property: impl Into<String>) -> Self {
        Self::scalar(ScalarKind::Date, storage, property)
    }

    /// A scalar whose value lives in the translation definition under the
    /// same storage and property names.
    #[must_use]
    pub fn translated(
        kind: ScalarKind,
        storage: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::new(Some(storage.into()), property, FieldKind::Translated(kind))
    }

    #[must_use]
    pub fn fk(
        storage: impl Into<String>,
        property: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::new(
            Some(storage.into()),
            property,
            FieldKind::Fk {
                reference: reference.into(),
            },
        )
    }

    #[must_use]
    pub fn version() -> Self {
        Self::new(Some("version_id".to_string()), "versionId", FieldKind::Version)
    }

    #[must_use]
    pub fn catalog() -> Self {
        Self::new(Some("catalog_id".to_string()), "catalogId", FieldKind::Catalog)
    }

    /// Version column for `reference`, stored as `<reference>_version_id`.
    #[must_use]
    pub fn reference_version(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let storage = format!("{reference}_version_id");

        Self::reference_version_as(reference, storage)
    }

    /// Version column for `reference` with an explicit storage name.
    #[must_use]
    pub fn reference_version_as(reference: impl Into<String>, storage: impl Into<String>) -> Self {
        let storage = storage.into();
        let property = storage.to_case(Case::Camel);

        Self::new(
            Some(storage),
            property,
            FieldKind::ReferenceVersion {
                reference: reference.into(),
            },
        )
    }

    /// Tree parent key. Shares `parentId` with a plain foreign key declared
    /// earlier, which it replaces in place.
    #[must_use]
    pub fn parent(reference: impl Into<String>) -> Self {
        Self::new(
            Some("parent_id".to_string()),
            "parentId",
            FieldKind::Parent {
                reference: reference.into(),
            },
        )
    }

    //
    // associations
    //

    #[must_use]
    pub fn association(property: impl Into<String>, association: Association) -> Self {
        Self::new(None, property, FieldKind::Association(association))
    }

    #[must_use]
    pub fn many_to_one(
        property: impl Into<String>,
        storage: impl Into<String>,
        reference: impl Into<String>,
        load_in_basic: bool,
    ) -> Self {
        Self::association(
            property,
            Association::ManyToOne {
                reference: reference.into(),
                storage: storage.into(),
                reference_key: "id".to_string(),
                load_in_basic,
            },
        )
    }

    #[must_use]
    pub fn one_to_many(
        property: impl Into<String>,
        reference: impl Into<String>,
        reference_field: impl Into<String>,
        load_in_basic: bool,
        local_field: impl Into<String>,
    ) -> Self {
        Self::association(
            property,
            Association::OneToMany {
                reference: reference.into(),
                reference_field: reference_field.into(),
                local_field: local_field.into(),
                load_in_basic,
            },
        )
    }

    #[must_use]
    pub fn many_to_many(property: impl Into<String>, m2m: ManyToMany) -> Self {
        Self::association(property, Association::ManyToMany(m2m))
    }

    /// `children` of a tree whose rows point at their parent via `parent_id`.
    #[must_use]
    pub fn children(reference: impl Into<String>) -> Self {
        Self::association(
            "children",
            Association::Children {
                reference: reference.into(),
                reference_field: "parent_id".to_string(),
                local_field: "id".to_string(),
            },
        )
    }

    #[must_use]
    pub fn translations(
        property: impl Into<String>,
        reference: impl Into<String>,
        reference_field: impl Into<String>,
        load_in_basic: bool,
        local_field: impl Into<String>,
    ) -> Self {
        Self::association(
            property,
            Association::Translations {
                reference: reference.into(),
                reference_field: reference_field.into(),
                local_field: local_field.into(),
                load_in_basic,
            },
        )
    }

    #[must_use]
    pub fn canonical_url(
        property: impl Into<String>,
        local_field: impl Into<String>,
        load_in_basic: bool,
        route_name: impl Into<String>,
    ) -> Self {
        Self::association(
            property,
            Association::CanonicalUrl {
                local_field: local_field.into(),
                route_name: route_name.into(),
                load_in_basic,
            },
        )
    }

    //
    // flags
    //

    /// Replace the field's flags.
    #[must_use]
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = Flag>) -> Self {
        self.flags.set(flags);
        self
    }

    //
    // accessors
    //

    /// Column name; `None` for associations.
    #[must_use]
    pub fn storage_name(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Association(_) => None,
            _ => self.storage.as_deref(),
        }
    }

    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property
    }

    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[must_use]
    pub const fn flags(&self) -> &Flags {
        &self.flags
    }

    #[must_use]
    pub fn is(&self, flag: FlagKind) -> bool {
        self.flags.has(flag)
    }

    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.is(FlagKind::PrimaryKey)
    }

    #[must_use]
    pub fn search_ranking(&self) -> Option<f32> {
        self.flags.search_ranking()
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.kind.reference()
    }

    #[must_use]
    pub const fn as_association(&self) -> Option<&Association> {
        match &self.kind {
            FieldKind::Association(assoc) => Some(assoc),
            _ => None,
        }
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // naming
        errs.add_result(validate_property_name(&self.property));
        if let Some(storage) = self.storage_name() {
            errs.add_result(validate_storage_name(storage));
        }

        // flags
        for kind in self.flags.duplicates() {
            err!(errs, "flag {kind} is declared more than once");
        }

        if self.is(FlagKind::PrimaryKey) {
            if !matches!(self.kind, FieldKind::Id | FieldKind::Fk { .. }) {
                err!(
                    errs,
                    "primary key flag is only allowed on id or foreign key fields, found {}",
                    self.kind.label()
                );
            }
            if !self.is(FlagKind::Required) {
                err!(errs, "primary key field must also be required");
            }
        }

        let to_many = self.as_association().is_some_and(Association::is_to_many);
        for delete_flag in [FlagKind::CascadeDelete, FlagKind::RestrictDelete] {
            if self.is(delete_flag) && !to_many {
                err!(
                    errs,
                    "{delete_flag} is only allowed on to-many associations, found {}",
                    self.kind.label()
                );
            }
        }
        if self.is(FlagKind::CascadeDelete) && self.is(FlagKind::RestrictDelete) {
            err!(errs, "CascadeDelete and RestrictDelete are mutually exclusive");
        }

        if self.is(FlagKind::WriteOnly) && !self.kind.is_association() {
            err!(errs, "WriteOnly is only allowed on associations");
        }

        if let Some(weight) = self.search_ranking() {
            if !weight.is_finite() || weight <= 0.0 {
                err!(errs, "search ranking must be a positive number, found {weight}");
            }

            let rankable = match &self.kind {
                FieldKind::Scalar(kind) | FieldKind::Translated(kind) => kind.is_text(),
                FieldKind::Association(_) => true,
                _ => false,
            };
            if !rankable {
                err!(
                    errs,
                    "search ranking is only allowed on text fields and associations, found {}",
                    self.kind.label()
                );
            }
        }

        errs.result()
    }
}

impl VisitableNode for Field {
    fn route_key(&self) -> String {
        self.property.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_version_derives_names() {
        let field = Field::reference_version("media");

        assert_eq!(field.storage_name(), Some("media_version_id"));
        assert_eq!(field.property_name(), "mediaVersionId");
        assert_eq!(field.reference(), Some("media"));

        let field = Field::reference_version_as("category", "parent_version_id");
        assert_eq!(field.property_name(), "parentVersionId");
    }

    #[test]
    fn associations_have_no_storage() {
        let field = Field::many_to_one("media", "media_id", "media", false);

        assert_eq!(field.storage_name(), None);
        assert!(!field.kind().is_persisted());
        assert_eq!(field.kind().label(), "ManyToOne(media)");
    }

    #[test]
    fn association_constructor_and_accessor() {
        let assoc = Association::Children {
            reference: "category".to_string(),
            reference_field: "parent_id".to_string(),
            local_field: "id".to_string(),
        };
        let field = Field::association("children", assoc.clone());

        assert_eq!(field.as_association(), Some(&assoc));
        assert_eq!(Field::string("name", "name").as_association(), None);
    }

    #[test]
    fn translated_fields_are_not_persisted_locally() {
        let field = Field::translated(ScalarKind::String, "name", "name");

        assert_eq!(field.storage_name(), Some("name"));
        assert!(!field.kind().is_persisted());
    }

    #[test]
    fn primary_key_must_be_required() {
        let field = Field::id("id", "id").with_flags([Flag::PrimaryKey]);
        let errs = field.validate().unwrap_err();

        assert!(errs.contains("must also be required"));

        let field = Field::id("id", "id").with_flags([Flag::PrimaryKey, Flag::Required]);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn primary_key_rejected_on_scalar() {
        let field = Field::string("code", "code").with_flags([Flag::PrimaryKey, Flag::Required]);
        let errs = field.validate().unwrap_err();

        assert!(errs.contains("only allowed on id or foreign key"));
    }

    #[test]
    fn cascade_delete_requires_to_many_association() {
        let field = Field::many_to_one("media", "media_id", "media", false)
            .with_flags([Flag::CascadeDelete]);
        assert!(field.validate().is_err());

        let field = Field::children("category").with_flags([Flag::CascadeDelete]);
        assert!(field.validate().is_ok());

        let field = Field::bool("active", "active").with_flags([Flag::RestrictDelete]);
        assert!(field.validate().is_err());
    }

    #[test]
    fn cascade_and_restrict_conflict() {
        let field = Field::one_to_many("shops", "shop", "category_id", false, "id")
            .with_flags([Flag::CascadeDelete, Flag::RestrictDelete]);
        let errs = field.validate().unwrap_err();

        assert!(errs.contains("mutually exclusive"));
    }

    #[test]
    fn write_only_only_on_associations() {
        let field = Field::string("template", "template").with_flags([Flag::WriteOnly]);

        assert!(field.validate().is_err());
    }

    #[test]
    fn search_ranking_rules() {
        let field =
            Field::translated(ScalarKind::String, "name", "name").with_flags([Flag::SearchRanking(500.0)]);
        assert!(field.validate().is_ok());

        let field = Field::bool("active", "active").with_flags([Flag::SearchRanking(80.0)]);
        assert!(field.validate().is_err());

        let field = Field::string("name", "name").with_flags([Flag::SearchRanking(0.0)]);
        assert!(field.validate().is_err());
    }

    #[test]
    fn naming_is_checked() {
        let field = Field::bool("HideTop", "hide_top");
        let errs = field.validate().unwrap_err();

        assert_eq!(errs.len(), 2);
    }
}
