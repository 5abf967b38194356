//! Elimination scoring
//!
//! The score of a candidate is the average number of pool members a guess of
//! it would rule out: other candidates are grouped by the feedback vector
//! the guess would produce against them, and each group contributes the
//! share of the pool outside it.

use crate::core::{Candidate, FeedbackVector, Schema};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A pool member annotated with its transient elimination score
///
/// The annotation lives alongside the borrowed candidate so scoring never
/// mutates the pool itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub score: f64,
}

/// Group the rest of the pool by the feedback `guess` would produce
///
/// Candidates sharing the guess's identity are skipped as "self"; two
/// members land in the same group iff the guess cannot tell them apart.
#[must_use]
pub fn feedback_groups(
    guess: &Candidate,
    pool: &[Candidate],
    schema: &Schema,
) -> FxHashMap<FeedbackVector, usize> {
    let mut groups = FxHashMap::default();

    for target in pool {
        if target.identity() == guess.identity() {
            continue;
        }
        let vector = FeedbackVector::compute(guess, target, schema);
        *groups.entry(vector).or_insert(0) += 1;
    }

    groups
}

/// Elimination score of `guess` against `pool`
///
/// Score = `Σ_groups ((N-1) - size_g) / (N-1)` where `N` is the pool size.
/// A guess that puts every other candidate in its own group scores `N-2`;
/// one that cannot distinguish anybody scores 0.
///
/// Returns 0.0 when the pool holds no other candidate; callers reaching
/// that state should already have stopped at a terminal pool.
///
/// # Examples
/// ```
/// use alldle_solver::core::{Candidate, ColumnRole, Schema, Value};
/// use alldle_solver::solver::elimination_score;
///
/// let schema = Schema::new(vec![
///     ("Name".to_string(), ColumnRole::Identity),
///     ("Year".to_string(), ColumnRole::Ordinal),
/// ])
/// .unwrap();
/// let pool = vec![
///     Candidate::new("X", vec![Value::ordinal(2010)]),
///     Candidate::new("Y", vec![Value::ordinal(2015)]),
///     Candidate::new("Z", vec![Value::ordinal(2020)]),
/// ];
///
/// // Y splits X and Z into two groups: score 1.0
/// let score = elimination_score(&pool[1], &pool, &schema);
/// assert!((score - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn elimination_score(guess: &Candidate, pool: &[Candidate], schema: &Schema) -> f64 {
    let groups = feedback_groups(guess, pool, schema);
    let others: usize = groups.values().sum();

    if others == 0 {
        return 0.0;
    }

    groups
        .values()
        .map(|&size| (others - size) as f64 / others as f64)
        .sum()
}

/// Score every pool member, preserving pool order
#[must_use]
pub fn score_all<'a>(pool: &'a [Candidate], schema: &Schema) -> Vec<ScoredCandidate<'a>> {
    pool.par_iter()
        .map(|candidate| ScoredCandidate {
            candidate,
            score: elimination_score(candidate, pool, schema),
        })
        .collect()
}

/// Pick the pool member with the highest elimination score
///
/// Ties resolve to the first candidate in pool order, so selection is
/// deterministic for a given pool.
#[must_use]
pub fn best_guess<'a>(pool: &'a [Candidate], schema: &Schema) -> Option<ScoredCandidate<'a>> {
    score_all(pool, schema)
        .into_iter()
        .reduce(|best, current| if current.score > best.score { current } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnRole, Value};

    fn year_schema() -> Schema {
        Schema::new(vec![
            ("Name".to_string(), ColumnRole::Identity),
            ("Year".to_string(), ColumnRole::Ordinal),
        ])
        .unwrap()
    }

    fn type_schema() -> Schema {
        Schema::new(vec![
            ("Name".to_string(), ColumnRole::Identity),
            ("Type".to_string(), ColumnRole::Set),
        ])
        .unwrap()
    }

    #[test]
    fn identical_attributes_score_zero() {
        // Three candidates sharing every value except identity: no guess can
        // distinguish the others, so every score is 0.
        let schema = type_schema();
        let pool: Vec<Candidate> = ["A", "B", "C"]
            .iter()
            .map(|name| Candidate::new(*name, vec![Value::set(["Fire"])]))
            .collect();

        for scored in score_all(&pool, &schema) {
            assert!(scored.score.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn perfect_splitter_scores_high() {
        let schema = year_schema();
        let pool = vec![
            Candidate::new("X", vec![Value::ordinal(2010)]),
            Candidate::new("Y", vec![Value::ordinal(2015)]),
            Candidate::new("Z", vec![Value::ordinal(2020)]),
        ];

        // Y sees X as Lower and Z as Greater: two singleton groups.
        let score = elimination_score(&pool[1], &pool, &schema);
        assert!((score - 1.0).abs() < f64::EPSILON);

        // X sees both others as Greater: one group of two, score 0.
        let score = elimination_score(&pool[0], &pool, &schema);
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn score_bounds() {
        let schema = year_schema();
        let pool: Vec<Candidate> = (0..6)
            .map(|i| Candidate::new(format!("C{i}"), vec![Value::ordinal(2000 + i)]))
            .collect();

        let n = pool.len() as f64;
        for scored in score_all(&pool, &schema) {
            assert!(scored.score >= 0.0);
            assert!(scored.score <= n - 1.0);
        }
    }

    #[test]
    fn scoring_does_not_mutate_pool() {
        let schema = year_schema();
        let pool = vec![
            Candidate::new("X", vec![Value::ordinal(2010)]),
            Candidate::new("Y", vec![Value::ordinal(2015)]),
        ];
        let before = pool.clone();

        let _ = score_all(&pool, &schema);
        assert_eq!(pool, before);
    }

    #[test]
    fn scores_are_deterministic() {
        let schema = type_schema();
        let pool = vec![
            Candidate::new("A", vec![Value::set(["Fire"])]),
            Candidate::new("B", vec![Value::set(["Fire", "Flying"])]),
            Candidate::new("C", vec![Value::set(["Water"])]),
            Candidate::new("D", vec![Value::set(["Water", "Ice"])]),
        ];

        let first = score_all(&pool, &schema);
        let second = score_all(&pool, &schema);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.candidate.identity(), b.candidate.identity());
            assert!((a.score - b.score).abs() < f64::EPSILON);
        }

        let best1 = best_guess(&pool, &schema).unwrap();
        let best2 = best_guess(&pool, &schema).unwrap();
        assert_eq!(best1.candidate.identity(), best2.candidate.identity());
    }

    #[test]
    fn best_guess_picks_highest_score() {
        let schema = year_schema();
        let pool = vec![
            Candidate::new("X", vec![Value::ordinal(2010)]),
            Candidate::new("Y", vec![Value::ordinal(2015)]),
            Candidate::new("Z", vec![Value::ordinal(2020)]),
        ];

        // Only Y splits the others apart.
        let best = best_guess(&pool, &schema).unwrap();
        assert_eq!(best.candidate.identity(), "Y");
    }

    #[test]
    fn best_guess_tie_breaks_to_pool_order() {
        let schema = type_schema();
        let pool = vec![
            Candidate::new("A", vec![Value::set(["Fire"])]),
            Candidate::new("B", vec![Value::set(["Fire"])]),
            Candidate::new("C", vec![Value::set(["Fire"])]),
        ];

        // All scores are 0; the first pool member wins.
        let best = best_guess(&pool, &schema).unwrap();
        assert_eq!(best.candidate.identity(), "A");
    }

    #[test]
    fn best_guess_empty_pool() {
        let schema = year_schema();
        assert!(best_guess(&[], &schema).is_none());
    }

    #[test]
    fn feedback_groups_skips_self_by_identity() {
        let schema = year_schema();
        let pool = vec![
            Candidate::new("X", vec![Value::ordinal(2010)]),
            Candidate::new("Y", vec![Value::ordinal(2010)]),
        ];

        // Y shares X's value but not its identity, so it is still grouped.
        let groups = feedback_groups(&pool[0], &pool, &schema);
        assert_eq!(groups.values().sum::<usize>(), 1);
    }
}
