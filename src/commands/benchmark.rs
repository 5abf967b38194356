//! Benchmark command
//!
//! Runs the solver against every candidate of a game's dataset as the
//! hidden target and aggregates round counts.

use super::solve::{SolveConfig, solve_target};
use crate::core::{Candidate, Schema};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_targets: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub worst_target: Option<(String, usize)>,
}

/// Solve every pool member as the target (or a limited prefix)
#[must_use]
pub fn run_benchmark(
    schema: &Schema,
    pool: &[Candidate],
    limit: Option<usize>,
) -> BenchmarkResult {
    let targets: Vec<&Candidate> = pool.iter().take(limit.unwrap_or(pool.len())).collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_target: Option<(String, usize)> = None;

    for target in &targets {
        pb.set_message(target.identity().to_string());

        let config = SolveConfig::new(target.identity().to_string());
        // Target comes from the pool, so lookup cannot fail.
        let rounds = match solve_target(&config, schema, pool) {
            Ok(result) => {
                if result.success {
                    solved += 1;
                }
                result.steps.len()
            }
            Err(_) => 0,
        };

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;

        if worst_target.as_ref().is_none_or(|(_, worst)| rounds > *worst) {
            worst_target = Some((target.identity().to_string(), rounds));
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let total_targets = targets.len();
    BenchmarkResult {
        total_targets,
        solved,
        total_rounds,
        average_rounds: if total_targets == 0 {
            0.0
        } else {
            total_rounds as f64 / total_targets as f64
        },
        min_rounds: if total_targets == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        duration: start.elapsed(),
        worst_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games;

    #[test]
    fn benchmark_solves_whole_dataset() {
        let game = games::find("Loldle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        let result = run_benchmark(&schema, &pool, None);

        assert_eq!(result.total_targets, pool.len());
        assert_eq!(result.solved, pool.len());
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds <= 15);
        assert!(result.average_rounds >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_to_targets() {
        let game = games::find("Smashdle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        let result = run_benchmark(&schema, &pool, None);
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_targets);
    }

    #[test]
    fn benchmark_respects_limit() {
        let game = games::find("Dotadle").unwrap();
        let schema = game.schema().unwrap();
        let pool = game.load().unwrap();

        let result = run_benchmark(&schema, &pool, Some(3));
        assert_eq!(result.total_targets, 3);
        assert_eq!(result.solved, 3);
    }

    #[test]
    fn benchmark_empty_pool() {
        let game = games::find("Loldle").unwrap();
        let schema = game.schema().unwrap();

        let result = run_benchmark(&schema, &[], None);
        assert_eq!(result.total_targets, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.min_rounds, 0);
    }

    #[test]
    fn all_games_fully_solvable() {
        // Every embedded dataset must be winnable for every target.
        for game in games::GAMES {
            let schema = game.schema().unwrap();
            let pool = game.load().unwrap();

            let result = run_benchmark(&schema, &pool, None);
            assert_eq!(result.solved, pool.len(), "{} has unsolvable targets", game.name);
        }
    }
}
