//! Per-beach suitability scores

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Beach name to suitability score (0-10)
///
/// Backed by an ordered map so that iteration, serialization and tie-breaks
/// do not depend on insertion order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: BTreeMap<String, f64>,
}

impl ScoreMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for a beach, replacing any earlier one
    pub fn insert<S: Into<String>>(&mut self, beach: S, score: f64) {
        self.scores.insert(beach.into(), score);
    }

    #[must_use]
    pub fn get(&self, beach: &str) -> Option<f64> {
        self.scores.get(beach).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries by descending score, equal scores by ascending name
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        // BTreeMap order is ascending by name and the sort is stable
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
