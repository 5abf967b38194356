//! Alldle Solver - CLI
//!
//! Interactive solver for multi-attribute guessing games. Picks the guess
//! with the highest elimination score each round and narrows the candidate
//! pool with the feedback you enter.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use alldle_solver::{
    commands::{SolveConfig, analyze_candidate, run_benchmark, run_play, select_game, solve_target},
    core::{Candidate, Schema},
    games::{self, GameSpec},
    output::{print_analysis_result, print_benchmark_result, print_games_list, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "alldle_solver",
    about = "Solver for multi-attribute guessing games (Loldle, Pokédle, Smashdle...)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The game to play (e.g. "loldle"); prompts with a menu when omitted
    #[arg(short, long, global = true)]
    game: Option<String>,

    /// Force the first guess to this candidate instead of scoring for it
    #[arg(short = 's', long, global = true)]
    start_with: Option<String>,

    /// Load candidates from a CSV file instead of the embedded dataset
    #[arg(short = 'd', long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver loop (default)
    Play,

    /// Simulate solving a known target and print the solution path
    Solve {
        /// The hidden answer to solve for
        target: String,

        /// Show per-round candidate counts and scores
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many rounds
        #[arg(long, default_value = "15")]
        max_rounds: usize,
    },

    /// Analyze the elimination potential of a specific candidate
    Analyze {
        /// Candidate to analyze
        candidate: String,
    },

    /// Benchmark the solver against every candidate of a game
    Benchmark {
        /// Limit number of targets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the supported games
    Games,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the interactive loop when no command is given.
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = select_game(cli.game.as_deref()).map_err(|e| anyhow!(e))?;
            let (schema, pool) = load_pool(game, cli.data.as_deref())?;
            run_play(game, schema, pool, cli.start_with.as_deref()).map_err(|e| anyhow!(e))
        }
        Commands::Solve {
            target,
            verbose,
            max_rounds,
        } => {
            let (_, schema, pool) = load_game(cli.game.as_deref(), cli.data.as_deref())?;
            let mut config = SolveConfig::new(target);
            config.max_rounds = max_rounds;

            let result = solve_target(&config, &schema, &pool).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { candidate } => {
            let (_, schema, pool) = load_game(cli.game.as_deref(), cli.data.as_deref())?;
            let result = analyze_candidate(&candidate, &schema, &pool).map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { limit } => {
            let (game, schema, pool) = load_game(cli.game.as_deref(), cli.data.as_deref())?;
            println!(
                "Benchmarking {} against {} targets...",
                game.name,
                limit.unwrap_or(pool.len()).min(pool.len())
            );

            let result = run_benchmark(&schema, &pool, limit);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Games => {
            print_games_list();
            Ok(())
        }
    }
}

/// Resolve the --game flag and load its schema and candidate pool
fn load_game(
    name: Option<&str>,
    data: Option<&Path>,
) -> Result<(&'static GameSpec, Schema, Vec<Candidate>)> {
    let name = name.ok_or_else(|| anyhow!("Specify a game with --game (see the 'games' command)"))?;
    let game = games::find(name)
        .ok_or_else(|| anyhow!("Unknown game '{name}'. Run the 'games' command for the list."))?;

    let (schema, pool) = load_pool(game, data)?;
    Ok((game, schema, pool))
}

/// Load a game's pool: from a --data file when given, the embedded dataset
/// otherwise
fn load_pool(game: &GameSpec, data: Option<&Path>) -> Result<(Schema, Vec<Candidate>)> {
    let schema = game
        .schema()
        .with_context(|| format!("Invalid schema for {}", game.name))?;

    let pool = match data {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            game.load_from(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => game
            .load()
            .with_context(|| format!("Failed to load the {} dataset", game.name))?,
    };

    Ok((schema, pool))
}
