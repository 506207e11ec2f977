use derive_more::{Deref, Display};
use serde::Serialize;

///
/// Flag
///
/// Behavioural annotation on a field. Only `SearchRanking` carries data.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Flag {
    CascadeDelete,
    PrimaryKey,
    Required,
    RestrictDelete,
    SearchRanking(f32),
    WriteOnly,
}

impl Flag {
    #[must_use]
    pub const fn kind(self) -> FlagKind {
        match self {
            Self::CascadeDelete => FlagKind::CascadeDelete,
            Self::PrimaryKey => FlagKind::PrimaryKey,
            Self::Required => FlagKind::Required,
            Self::RestrictDelete => FlagKind::RestrictDelete,
            Self::SearchRanking(_) => FlagKind::SearchRanking,
            Self::WriteOnly => FlagKind::WriteOnly,
        }
    }
}

///
/// FlagKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum FlagKind {
    CascadeDelete,
    PrimaryKey,
    Required,
    RestrictDelete,
    SearchRanking,
    WriteOnly,
}

///
/// Flags
///

#[derive(Clone, Debug, Default, Deref, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Flags(Vec<Flag>);

impl Flags {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the whole set, keeping declaration order.
    pub fn set(&mut self, flags: impl IntoIterator<Item = Flag>) {
        self.0 = flags.into_iter().collect();
    }

    #[must_use]
    pub fn has(&self, kind: FlagKind) -> bool {
        self.0.iter().any(|flag| flag.kind() == kind)
    }

    #[must_use]
    pub fn search_ranking(&self) -> Option<f32> {
        self.0.iter().find_map(|flag| match flag {
            Flag::SearchRanking(weight) => Some(*weight),
            _ => None,
        })
    }

    /// Flag kinds declared more than once.
    #[must_use]
    pub fn duplicates(&self) -> Vec<FlagKind> {
        let mut seen = Vec::with_capacity(self.0.len());
        let mut dups = Vec::new();

        for kind in self.0.iter().map(|flag| flag.kind()) {
            if seen.contains(&kind) {
                if !dups.contains(&kind) {
                    dups.push(kind);
                }
            } else {
                seen.push(kind);
            }
        }

        dups
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_flags() {
        let mut flags = Flags::new();
        flags.set([Flag::Required]);
        assert!(flags.has(FlagKind::Required));

        flags.set([Flag::CascadeDelete, Flag::WriteOnly]);

        assert!(!flags.has(FlagKind::Required));
        assert!(flags.has(FlagKind::CascadeDelete));
        assert_eq!(flags.len(), 2);
    }

    #[test]
    fn search_ranking_reads_weight() {
        let flags: Flags = [Flag::Required, Flag::SearchRanking(80.0)]
            .into_iter()
            .collect();

        assert_eq!(flags.search_ranking(), Some(80.0));
        assert_eq!(Flags::new().search_ranking(), None);
    }

    #[test]
    fn duplicates_reports_each_kind_once() {
        let flags: Flags = [
            Flag::Required,
            Flag::SearchRanking(1.0),
            Flag::Required,
            Flag::SearchRanking(2.0),
            Flag::Required,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            flags.duplicates(),
            vec![FlagKind::Required, FlagKind::SearchRanking]
        );
    }
}
