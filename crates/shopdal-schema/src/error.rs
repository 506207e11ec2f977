use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// ErrorTree
///
/// Validation messages grouped by route (`category.parentId`, ...).
/// Validation never stops at the first problem; every node reports into a tree
/// and the caller decides what to do with the whole set.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Record a message at this level.
    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Record the error side of a result, if any.
    pub fn add_result<E: ToString>(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            self.add(e);
        }
    }

    /// Fold another tree into this one at the same level.
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);

        for (key, child) in other.children {
            self.children.entry(key).or_default().merge(child);
        }
    }

    /// Fold another tree in beneath the given route.
    pub fn merge_at<S: AsRef<str>>(&mut self, route: &[S], other: Self) {
        if other.is_empty() {
            return;
        }

        match route.split_first() {
            None => self.merge(other),
            Some((head, rest)) => self
                .children
                .entry(head.as_ref().to_string())
                .or_default()
                .merge_at(rest, other),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages, including nested routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs in route order.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }

        for (key, child) in &self.children {
            let route = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            child.flatten_into(&route, out);
        }
    }

    /// True if any message (at any route) contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
            || self.children.values().any(|c| c.contains(needle))
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.flatten();

        for (i, (route, message)) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

/// Append a formatted message to an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn merge_at_nests_messages_under_route() {
        let mut child = ErrorTree::new();
        child.add("bad flag");

        let mut tree = ErrorTree::new();
        tree.add("top level");
        tree.merge_at(&["category", "parentId"], child);

        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.flatten(),
            vec![
                (String::new(), "top level".to_string()),
                ("category.parentId".to_string(), "bad flag".to_string()),
            ]
        );
        assert_eq!(tree.to_string(), "top level\ncategory.parentId: bad flag");
    }

    #[test]
    fn merging_empty_tree_creates_no_route() {
        let mut tree = ErrorTree::new();
        tree.merge_at(&["category"], ErrorTree::new());

        assert!(tree.is_empty());
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn err_macro_formats_message() {
        let mut errs = ErrorTree::new();
        let name = "media";
        err!(errs, "unknown entity '{name}'");

        assert!(errs.contains("unknown entity 'media'"));
        assert!(errs.result().is_err());
    }
}
