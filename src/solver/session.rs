//! Game session state
//!
//! A session owns the mutable candidate pool for one game and drives the
//! round loop: suggest a guess, apply validated feedback, check for a
//! terminal state. Snapshots of previous pools allow undoing a round when
//! the entered feedback turns out to be wrong.

use super::filter::filter_pool;
use super::scorer::{ScoredCandidate, best_guess};
use crate::core::{Candidate, FeedbackVector, Schema};

/// Terminal or ongoing state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// More than one candidate remains
    InProgress,
    /// Exactly one candidate remains: the answer
    Solved,
    /// No candidate matches the feedback given
    Exhausted,
}

/// One game session: schema plus the shrinking candidate pool
pub struct Session<'a> {
    schema: &'a Schema,
    pool: Vec<Candidate>,
    snapshots: Vec<Vec<Candidate>>,
}

impl<'a> Session<'a> {
    /// Start a session over a freshly loaded pool
    #[must_use]
    pub const fn new(schema: &'a Schema, pool: Vec<Candidate>) -> Self {
        Self {
            schema,
            pool,
            snapshots: Vec::new(),
        }
    }

    /// The current candidate pool
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    /// The schema this session plays under
    #[inline]
    #[must_use]
    pub const fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Current state, derived from the pool size
    #[must_use]
    pub fn state(&self) -> GameState {
        match self.pool.len() {
            0 => GameState::Exhausted,
            1 => GameState::Solved,
            _ => GameState::InProgress,
        }
    }

    /// The solved answer, if exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&Candidate> {
        match self.pool.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// The highest-scoring guess for the current pool
    ///
    /// With a single candidate left that candidate is returned directly
    /// (score 0); scoring proper only runs while the game is in progress.
    #[must_use]
    pub fn best_guess(&self) -> Option<ScoredCandidate<'_>> {
        match self.pool.as_slice() {
            [] => None,
            [only] => Some(ScoredCandidate {
                candidate: only,
                score: 0.0,
            }),
            _ => best_guess(&self.pool, self.schema),
        }
    }

    /// Apply one round of validated feedback, replacing the pool
    ///
    /// The previous pool is snapshotted for `undo`. An empty result is a
    /// valid terminal outcome, not an error.
    pub fn apply(&mut self, guess: &Candidate, feedback: &FeedbackVector) {
        let filtered = filter_pool(&self.pool, guess, feedback, self.schema);
        self.snapshots.push(std::mem::replace(&mut self.pool, filtered));
    }

    /// Roll back to the pool before the last `apply`
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.snapshots.pop() {
            Some(previous) => {
                self.pool = previous;
                true
            }
            None => false,
        }
    }

    /// Number of rounds applied and not undone
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.snapshots.len()
    }
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

    fn year_pool() -> Vec<Candidate> {
        vec![
            Candidate::new("X", vec![Value::ordinal(2010)]),
            Candidate::new("Y", vec![Value::ordinal(2015)]),
            Candidate::new("Z", vec![Value::ordinal(2020)]),
        ]
    }

    #[test]
    fn session_starts_in_progress() {
        let schema = year_schema();
        let session = Session::new(&schema, year_pool());

        assert_eq!(session.state(), GameState::InProgress);
        assert!(session.solution().is_none());
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn applying_feedback_shrinks_pool_monotonically() {
        let schema = year_schema();
        let mut session = Session::new(&schema, year_pool());

        let guess = session.pool()[1].clone();
        let feedback = FeedbackVector::parse("L", &schema).unwrap();
        session.apply(&guess, &feedback);

        assert!(session.pool().len() < 3);
        assert_eq!(session.state(), GameState::Solved);
        assert_eq!(session.solution().unwrap().identity(), "X");
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let schema = year_schema();
        let pool = vec![Candidate::new("X", vec![Value::ordinal(2010)])];
        let mut session = Session::new(&schema, pool);

        let guess = Candidate::new("X", vec![Value::ordinal(2010)]);
        let feedback = FeedbackVector::parse("H", &schema).unwrap();
        session.apply(&guess, &feedback);

        assert_eq!(session.state(), GameState::Exhausted);
        assert!(session.best_guess().is_none());
    }

    #[test]
    fn undo_restores_previous_pool() {
        let schema = year_schema();
        let mut session = Session::new(&schema, year_pool());

        let guess = session.pool()[1].clone();
        let feedback = FeedbackVector::parse("H", &schema).unwrap();
        session.apply(&guess, &feedback);
        assert_eq!(session.pool().len(), 1);

        assert!(session.undo());
        assert_eq!(session.pool().len(), 3);
        assert_eq!(session.rounds(), 0);

        // Nothing left to undo.
        assert!(!session.undo());
    }

    #[test]
    fn single_candidate_is_its_own_best_guess() {
        let schema = year_schema();
        let pool = vec![Candidate::new("X", vec![Value::ordinal(2010)])];
        let session = Session::new(&schema, pool);

        let best = session.best_guess().unwrap();
        assert_eq!(best.candidate.identity(), "X");
        assert!(best.score.abs() < f64::EPSILON);
    }

    #[test]
    fn best_guess_splits_pool() {
        let schema = year_schema();
        let session = Session::new(&schema, year_pool());

        let best = session.best_guess().unwrap();
        assert_eq!(best.candidate.identity(), "Y");
    }
}
