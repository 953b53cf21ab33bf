//! Set of directed pairs that may not be drawn again.

use std::collections::{HashMap, HashSet};

use crate::model::{PreviousPairing, normalize_email};

/// Normalized (giver, receiver) pairs taken from earlier exchanges.
///
/// Direction matters: a previous `a -> b` forbids `a -> b` only.
#[derive(Debug, Clone, Default)]
pub struct ForbiddenPairs {
    by_giver: HashMap<String, HashSet<String>>,
}

impl ForbiddenPairs {
    /// Build the set from previous pairings.
    pub fn from_pairings<'a>(pairings: impl IntoIterator<Item = &'a PreviousPairing>) -> Self {
        let mut forbidden = Self::default();
        for pairing in pairings {
            forbidden.insert(&pairing.giver_email, &pairing.receiver_email);
        }
        forbidden
    }

    /// Forbid `giver -> receiver`.
    pub fn insert(&mut self, giver_email: &str, receiver_email: &str) {
        self.by_giver
            .entry(normalize_email(giver_email))
            .or_default()
            .insert(normalize_email(receiver_email));
    }

    /// Whether `giver -> receiver` is forbidden. Both emails must already be normalized.
    pub fn contains(&self, giver_key: &str, receiver_key: &str) -> bool {
        self.by_giver
            .get(giver_key)
            .is_some_and(|receivers| receivers.contains(receiver_key))
    }

    /// Number of distinct forbidden pairs.
    pub fn len(&self) -> usize {
        self.by_giver.values().map(HashSet::len).sum()
    }

    /// Whether nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.by_giver.is_empty()
    }
}
