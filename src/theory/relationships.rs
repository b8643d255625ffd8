//! Key-relationship scoring
//!
//! Compares two key names and classifies how closely they are related.
//! Checks run in priority order and stop at the first hit:
//! same key, relative, enharmonic, parallel, weak (fifth neighbour).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::KeyName;
use super::tables::{ENHARMONIC_KEY_PAIRS, RELATIVE_KEY_PAIRS, WEAK_KEY_PAIRS};

/// How two keys relate, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyRelation {
    Same,
    Relative,
    Enharmonic,
    Parallel,
    Weak,
    Unrelated,
}

type PairSet = HashSet<(String, String)>;

/// Declared key relationships, stored in both directions
#[derive(Debug, Clone, Default)]
pub struct KeyRelationships {
    relative: PairSet,
    enharmonic: PairSet,
    weak: PairSet,
}

impl KeyRelationships {
    /// Relationships for the 24 major/minor keys in common spellings
    pub fn standard() -> Self {
        Self::from_pairs(&RELATIVE_KEY_PAIRS, &ENHARMONIC_KEY_PAIRS, &WEAK_KEY_PAIRS)
    }

    pub fn from_pairs(
        relative: &[(&str, &str)],
        enharmonic: &[(&str, &str)],
        weak: &[(&str, &str)],
    ) -> Self {
        Self {
            relative: build_pair_set(relative),
            enharmonic: build_pair_set(enharmonic),
            weak: build_pair_set(weak),
        }
    }

    pub fn are_relative(&self, a: &str, b: &str) -> bool {
        contains_pair(&self.relative, a, b)
    }

    pub fn are_enharmonic(&self, a: &str, b: &str) -> bool {
        contains_pair(&self.enharmonic, a, b)
    }

    /// Same tonic, one major and one minor
    pub fn are_parallel(&self, a: &str, b: &str) -> bool {
        match (KeyName::parse(a), KeyName::parse(b)) {
            (Some(a), Some(b)) => a.is_parallel_to(&b),
            _ => false,
        }
    }

    pub fn are_weakly_related(&self, a: &str, b: &str) -> bool {
        contains_pair(&self.weak, a, b)
    }

    pub fn relation(&self, a: &str, b: &str) -> KeyRelation {
        if a == b {
            KeyRelation::Same
        } else if self.are_relative(a, b) {
            KeyRelation::Relative
        } else if self.are_enharmonic(a, b) {
            KeyRelation::Enharmonic
        } else if self.are_parallel(a, b) {
            KeyRelation::Parallel
        } else if self.are_weakly_related(a, b) {
            KeyRelation::Weak
        } else {
            KeyRelation::Unrelated
        }
    }
}

/// Insert every pair in both directions
fn build_pair_set(pairs: &[(&str, &str)]) -> PairSet {
    let mut set = HashSet::with_capacity(pairs.len() * 2);
    for (a, b) in pairs {
        set.insert((a.to_string(), b.to_string()));
        set.insert((b.to_string(), a.to_string()));
    }
    set
}

fn contains_pair(set: &PairSet, a: &str, b: &str) -> bool {
    set.contains(&(a.to_string(), b.to_string()))
}
