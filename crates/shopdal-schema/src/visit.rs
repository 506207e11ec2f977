use crate::{error::ErrorTree, node::VisitableNode};

///
/// Visitor
///

pub trait Visitor {
    fn enter<N: VisitableNode + ?Sized>(&mut self, node: &N);

    fn exit<N: VisitableNode + ?Sized>(&mut self, node: &N);
}

///
/// ValidateVisitor
///
/// Runs every node's local validation and files the messages under the
/// route of the node that produced them.
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
    // one entry per entered node; true if it pushed a route segment
    pushed: Vec<bool>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(&self) -> String {
        self.route.join(".")
    }
}

impl Visitor for ValidateVisitor {
    fn enter<N: VisitableNode + ?Sized>(&mut self, node: &N) {
        let key = node.route_key();
        let pushed = !key.is_empty();
        if pushed {
            self.route.push(key);
        }
        self.pushed.push(pushed);

        if let Err(errs) = node.validate() {
            self.errors.merge_at(&self.route, errs);
        }
    }

    fn exit<N: VisitableNode + ?Sized>(&mut self, _: &N) {
        if self.pushed.pop().unwrap_or(false) {
            self.route.pop();
        }
    }
}
