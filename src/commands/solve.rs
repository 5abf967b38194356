//! Target solving command
//!
//! Simulates solving a known target by feeding the solver the feedback the
//! live game would produce each round.

use crate::core::{Candidate, FeedbackVector, Schema, find_by_identity};
use crate::solver::Session;

/// Configuration for a solving run
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: 15,
        }
    }
}

/// Result of a solving run
pub struct SolveResult {
    pub success: bool,
    pub target: String,
    pub steps: Vec<GuessStep>,
}

/// One round of the simulated game
pub struct GuessStep {
    pub identity: String,
    pub feedback: FeedbackVector,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific target candidate
///
/// # Errors
///
/// Returns an error if the target identity is not in the pool.
pub fn solve_target(
    config: &SolveConfig,
    schema: &Schema,
    pool: &[Candidate],
) -> Result<SolveResult, String> {
    let target = find_by_identity(pool, &config.target)
        .ok_or_else(|| format!("'{}' is not in this game's dataset", config.target))?
        .clone();

    let mut session = Session::new(schema, pool.to_vec());
    let mut steps = Vec::new();

    for _ in 0..config.max_rounds {
        let candidates_before = session.pool().len();

        let Some(suggestion) = session.best_guess() else {
            break;
        };
        let guess = suggestion.candidate.clone();
        let score = suggestion.score;

        // The feedback the live game would display for this guess.
        let feedback = FeedbackVector::compute(&guess, &target, schema);
        session.apply(&guess, &feedback);

        let solved = guess.identity() == target.identity();
        steps.push(GuessStep {
            identity: guess.identity().to_string(),
            feedback,
            score,
            candidates_before,
            candidates_after: session.pool().len(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                target: target.identity().to_string(),
                steps,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        target: target.identity().to_string(),
        steps,
    })
}
