//! Candidate analysis command
//!
//! Reports how well guessing one candidate would partition the pool.

use crate::core::{Candidate, Schema, find_by_identity};
use crate::solver::feedback_groups;

/// Result of analyzing one candidate against the pool
pub struct AnalysisResult {
    pub identity: String,
    pub score: f64,
    pub pool_size: usize,
    /// Number of distinct feedback vectors the guess can produce
    pub partitions: usize,
    /// Average pool size after the guess, over all possible targets
    pub expected_remaining: f64,
    /// Largest feedback group (worst-case remaining candidates)
    pub worst_case: usize,
}

/// Analyze the elimination potential of a named candidate
///
/// # Errors
///
/// Returns an error if the identity is not in the pool, or the pool has no
/// other candidate to differentiate against.
pub fn analyze_candidate(
    identity: &str,
    schema: &Schema,
    pool: &[Candidate],
) -> Result<AnalysisResult, String> {
    let candidate = find_by_identity(pool, identity)
        .ok_or_else(|| format!("'{identity}' is not in this game's dataset"))?;

    let groups = feedback_groups(candidate, pool, schema);
    let others: usize = groups.values().sum();

    if others == 0 {
        return Err("Analysis needs at least two candidates in the pool".to_string());
    }

    let score: f64 = groups
        .values()
        .map(|&size| (others - size) as f64 / others as f64)
        .sum();
    let expected_remaining: f64 = groups
        .values()
        .map(|&size| (size * size) as f64 / others as f64)
        .sum();
    let worst_case = groups.values().copied().max().unwrap_or(0);

    Ok(AnalysisResult {
        identity: candidate.identity().to_string(),
        score,
        pool_size: pool.len(),
        partitions: groups.len(),
        expected_remaining,
        worst_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnRole, Value};
    use crate::games;

    #[test]
    fn analyze_known_candidate() {
        let game = games::find("Loldle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        let result = analyze_candidate("Ahri", &schema, &pool).unwrap();

        assert_eq!(result.identity, "Ahri");
        assert_eq!(result.pool_size, pool.len());
        assert!(result.partitions >= 1);
        assert!(result.score >= 0.0);
        assert!(result.score <= (pool.len() - 1) as f64);
        assert!(result.worst_case >= 1);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= (pool.len() - 1) as f64);
    }

    #[test]
    fn analyze_unknown_candidate_is_an_error() {
        let game = games::find("Loldle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        assert!(analyze_candidate("Teemo", &schema, &pool).is_err());
    }

    #[test]
    fn analyze_singleton_pool_is_an_error() {
        let schema = Schema::new(vec![
            ("Name".to_string(), ColumnRole::Identity),
            ("Year".to_string(), ColumnRole::Ordinal),
        ])
        .unwrap();
        let pool = vec![Candidate::new("X", vec![Value::ordinal(2010)])];

        assert!(analyze_candidate("X", &schema, &pool).is_err());
    }

    #[test]
    fn partitions_and_score_agree() {
        // Score equals partitions - 1 by construction of the formula.
        let game = games::find("Pokédle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        let result = analyze_candidate("Pikachu", &schema, &pool).unwrap();
        assert!((result.score - (result.partitions - 1) as f64).abs() < 1e-9);
    }
}
