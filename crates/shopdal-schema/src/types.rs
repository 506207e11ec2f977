use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Search weight for the fields a shopper types first (names, titles).
pub const HIGH_SEARCH_RANKING: f32 = 500.0;

/// Search weight for secondary text (short labels, headlines).
pub const MIDDLE_SEARCH_RANKING: f32 = 250.0;

/// Search weight for auxiliary text (keywords, descriptions).
pub const LOW_SEARCH_RANKING: f32 = 80.0;

/// Multiplier applied to rankings reached through an association.
pub const ASSOCIATION_SEARCH_RANKING: f32 = 0.25;

///
/// ScalarKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Date,
    Int,
    LongText,
    String,
}

impl ScalarKind {
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::LongText | Self::String)
    }
}

///
/// DefinitionKind
///
/// Entity definitions own a single `id` primary key. Mapping (join table)
/// and translation definitions are keyed by the foreign keys they pair.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    #[default]
    Entity,
    Mapping,
    Translation,
}

impl DefinitionKind {
    #[must_use]
    pub const fn has_composite_key(self) -> bool {
        matches!(self, Self::Mapping | Self::Translation)
    }
}
