mod association;
mod collection;
mod entity;
mod field;
mod flag;
mod schema;

pub use association::*;
pub use collection::*;
pub use entity::*;
pub use field::*;
pub use flag::*;
pub use schema::*;

use crate::{error::ErrorTree, visit::Visitor};
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("entity '{0}' is not registered")]
    EntityNotFound(String),

    #[error("entity '{entity}' has no field with property '{property}'")]
    FieldNotFound { entity: String, property: String },
}

///
/// ValidateNode
///
/// Node-local checks: anything that can be decided without looking at the
/// rest of the schema.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    // route_key
    // segment appended to the error route while this node is visited
    fn route_key(&self) -> String {
        String::new()
    }

    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.enter(self);
        self.drive(visitor);
        visitor.exit(self);
    }

    fn drive<V: Visitor>(&self, _: &mut V) {}
}
