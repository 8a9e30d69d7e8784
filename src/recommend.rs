//! Picks the beach to recommend from a set of scores

use crate::models::ScoreMap;
use crate::{Result, SurfcastError};

/// Name of the highest-scoring beach.
///
/// Equal top scores resolve to the lexicographically smallest name, so the
/// result never depends on the order in which beaches were scored.
pub fn choose_best(scores: &ScoreMap) -> Result<String> {
    scores
        .ranked()
        .first()
        .map(|(name, _)| (*name).to_string())
        .ok_or(SurfcastError::EmptyInput)
}
