// SPDX-License-Identifier: MPL-2.0
//! The set of memory ids the user has opened at least once.

use crate::catalog::{Catalog, MemoryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Membership-only set of viewed memory ids. Serializes as a list of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewedSet(BTreeSet<MemoryId>);

impl ViewedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not already present.
    pub fn insert(&mut self, id: MemoryId) -> bool {
        self.0.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: MemoryId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = MemoryId> + '_ {
        self.0.iter().copied()
    }

    /// Drops ids that are not part of the catalog. Returns how many were dropped.
    pub fn retain_known(&mut self, catalog: &Catalog) -> usize {
        let before = self.0.len();
        self.0.retain(|id| catalog.contains(*id));
        before - self.0.len()
    }
}

impl FromIterator<MemoryId> for ViewedSet {
    fn from_iter<T: IntoIterator<Item = MemoryId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> MemoryId {
        MemoryId::new(raw).unwrap()
    }

    #[test]
    fn insert_reports_first_insertion_only() {
        let mut set = ViewedSet::new();
        assert!(set.insert(id(2)));
        assert!(!set.insert(id(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn retain_known_drops_foreign_ids() {
        let mut set: ViewedSet = [id(1), id(6), id(99)].into_iter().collect();
        let dropped = set.retain_known(&Catalog::builtin());
        assert_eq!(dropped, 1);
        assert!(set.contains(id(1)));
        assert!(!set.contains(id(99)));
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: ViewedSet = [id(5), id(1), id(3)].into_iter().collect();
        let ids: Vec<u32> = set.iter().map(MemoryId::get).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
