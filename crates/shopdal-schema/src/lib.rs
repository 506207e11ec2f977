//! Declarative entity schemas for the storefront data-access layer.
//!
//! Definitions describe *what exists* (columns, translations, associations and
//! companion type names); the persistence framework that consumes them lives
//! elsewhere. A [`build::SchemaBuilder`] composes every registered definition
//! with its extensions exactly once, validates the result, and hands back an
//! immutable [`node::Schema`].

pub mod build;
pub mod definition;
pub mod error;
pub mod extension;
pub mod node;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for storage and property identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::SchemaBuilder,
        definition::{Companions, EntityDefinition},
        err,
        error::ErrorTree,
        extension::{EntityExtension, FieldExtension},
        node::*,
        types::{
            ASSOCIATION_SEARCH_RANKING, DefinitionKind, HIGH_SEARCH_RANKING, LOW_SEARCH_RANKING,
            MIDDLE_SEARCH_RANKING, ScalarKind,
        },
        visit::Visitor,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
