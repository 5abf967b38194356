//! Display functions for command results

use super::formatters::{colored_feedback, score_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.identity.bold(),
            colored_feedback(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.2}", step.score);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of candidate analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ELIMINATION ANALYSIS:".bright_cyan().bold(),
        result.identity.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = score_bar(result.score, result.pool_size, 30);

    println!("\nAgainst {} pool candidates:", result.pool_size);
    println!(
        "   Score:       [{}] {}",
        bar.green(),
        format!("{:.2} eliminated on average", result.score).bright_yellow()
    );
    println!("   Partitions:  {} distinct feedback groups", result.partitions);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Targets tested:   {}", result.total_targets);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_targets).green()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_rounds.to_string().green());
    println!("   Worst case:       {}", result.max_rounds.to_string().yellow());
    if let Some((identity, rounds)) = &result.worst_target {
        println!("   Hardest target:   {identity} ({rounds} rounds)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let mut rounds: Vec<&usize> = result.distribution.keys().collect();
    rounds.sort_unstable();

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for round in rounds {
        let count = result.distribution[round];
        let bar = "█".repeat(count.min(40));
        println!("   {round:>2} rounds: {bar} {count}");
    }
}

/// Print the list of supported games
pub fn print_games_list() {
    use crate::games::GAMES;

    println!("\n{}", "Supported games:".bright_cyan().bold());
    for game in GAMES {
        match (game.schema(), game.load()) {
            (Ok(schema), Ok(pool)) => println!(
                "   {} - {} ({} candidates, {} properties)",
                game.id,
                game.name.bold(),
                pool.len(),
                schema.scored().len()
            ),
            _ => println!("   {} - {} (dataset unavailable)", game.id, game.name),
        }
    }
    println!();
}
