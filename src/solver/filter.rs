//! Candidate pool filtering
//!
//! Applies an observed feedback vector to the pool, keeping only candidates
//! consistent with every per-attribute constraint. Filtering is lossless and
//! order-preserving; contradictory feedback simply yields an empty pool.

use crate::core::{Candidate, FeedbackVector, Schema};

/// Reduce `pool` to the members consistent with `feedback` for `guess`
///
/// Per-attribute constraints (all conjoined):
/// - set + Correct: candidate's set equals the guess's set
/// - set + Incorrect: candidate's set is disjoint from the guess's
/// - set + Partial: candidate's set overlaps the guess's but differs
/// - ordinal + Correct: candidate's value equals the guess's
/// - ordinal + Lower: candidate's value is strictly below the guess's
/// - ordinal + Greater: candidate's value is strictly above the guess's
///
/// The feedback vector's length and per-position validity must already have
/// been checked against the schema (see `FeedbackVector::parse`).
#[must_use]
pub fn filter_pool(
    pool: &[Candidate],
    guess: &Candidate,
    feedback: &FeedbackVector,
    schema: &Schema,
) -> Vec<Candidate> {
    debug_assert_eq!(feedback.symbols().len(), schema.scored().len());

    pool.iter()
        .filter(|candidate| {
            feedback
                .symbols()
                .iter()
                .enumerate()
                .all(|(i, symbol)| symbol.admits(guess.value(i), candidate.value(i)))
        })
        .cloned()
        .collect()
}
