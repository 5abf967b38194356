//! Interactive solver loop
//!
//! Suggests the best guess each round, reads the live game's feedback from
//! the player and narrows the pool until the answer is found (or the
//! feedback contradicts every candidate).

use crate::core::{Candidate, FeedbackVector, Schema, find_by_identity};
use crate::games::{self, GameSpec};
use crate::output::formatters::{feedback_legend, invalid_feedback_help};
use crate::solver::{GameState, Session, elimination_score};
use colored::Colorize;
use std::io::{self, Write};

/// Pick a game: by name if given, otherwise via a numbered menu
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn select_game(preferred: Option<&str>) -> Result<&'static GameSpec, String> {
    if let Some(name) = preferred {
        if let Some(game) = games::find(name) {
            return Ok(game);
        }
        println!(
            "{}",
            format!("Invalid game name '{name}'. Please pick one from the list.").red()
        );
    }

    let options: Vec<String> = games::GAMES
        .iter()
        .map(|game| format!("{} - {}", game.id, game.name))
        .collect();

    loop {
        let input = get_user_input(&format!("Select a game by number:\n{}\n>", options.join("\n")))?;

        match input.parse::<u32>() {
            Ok(id) => {
                if let Some(game) = games::find_by_id(id) {
                    return Ok(game);
                }
                println!("Invalid selection. Please enter a valid number.");
            }
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

/// Run the interactive solver for one game over a loaded pool
///
/// `first_guess` forces the opening guess by identity instead of scoring
/// the full pool for it.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(
    game: &GameSpec,
    schema: Schema,
    full_pool: Vec<Candidate>,
    first_guess: Option<&str>,
) -> Result<(), String> {
    println!("Starting {} Solver...", game.name.bold());

    let mut session = Session::new(&schema, full_pool.clone());
    let mut forced: Option<Candidate> = match first_guess {
        Some(name) => {
            let found = find_by_identity(session.pool(), name).cloned();
            if found.is_none() {
                println!(
                    "{}",
                    format!("'{name}' is not in this game's dataset; scoring instead.").yellow()
                );
            }
            found
        }
        None => None,
    };

    loop {
        match session.state() {
            GameState::Solved => {
                // Session holds exactly one candidate here.
                let answer = session
                    .solution()
                    .ok_or("solved session lost its candidate")?;
                println!(
                    "\nThe answer is: {}\n",
                    answer.identity().green().bold()
                );
                return Ok(());
            }
            GameState::Exhausted => {
                println!(
                    "{}",
                    "No valid candidates left! Please check the feedback entered.".red().bold()
                );
                match get_user_input("Type 'undo' to re-enter the last feedback, 'new' to restart, or 'quit'")?
                    .to_lowercase()
                    .as_str()
                {
                    "undo" | "u" => {
                        if session.undo() {
                            println!("Last round undone.\n");
                        } else {
                            println!("Nothing to undo!\n");
                        }
                    }
                    "new" | "n" => {
                        session = Session::new(&schema, full_pool.clone());
                        println!("New game started!\n");
                    }
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
            }
            GameState::InProgress => {
                let guess = match forced.take() {
                    Some(candidate) => {
                        let score = elimination_score(&candidate, session.pool(), &schema);
                        print_suggestion(&candidate, score, session.pool().len());
                        candidate
                    }
                    None => {
                        let suggestion = session
                            .best_guess()
                            .ok_or("in-progress session has no guess to suggest")?;
                        let candidate = suggestion.candidate.clone();
                        print_suggestion(&candidate, suggestion.score, session.pool().len());
                        candidate
                    }
                };

                if session.pool().len() <= 15 {
                    let names: Vec<&str> =
                        session.pool().iter().map(Candidate::identity).collect();
                    println!(
                        "Remaining candidates: {}",
                        names.join(", ").cyan().bold()
                    );
                }

                // Re-prompt until the feedback parses against the schema.
                let feedback = loop {
                    let input =
                        get_user_input(&format!("Enter feedback for each property ({})", feedback_legend()))?;

                    match input.to_lowercase().as_str() {
                        "quit" | "q" | "exit" => return Ok(()),
                        "new" => {
                            session = Session::new(&schema, full_pool.clone());
                            println!("New game started!\n");
                            break None;
                        }
                        "undo" => {
                            if session.undo() {
                                println!("Last round undone.\n");
                            } else {
                                println!("Nothing to undo!\n");
                            }
                            break None;
                        }
                        _ => match FeedbackVector::parse(&input, &schema) {
                            Ok(vector) => break Some(vector),
                            Err(error) => {
                                println!("{}", format!("Invalid feedback! {error}").yellow());
                                println!("{}", invalid_feedback_help(&schema));
                            }
                        },
                    }
                };

                if let Some(feedback) = feedback {
                    session.apply(&guess, &feedback);
                }
            }
        }
    }
}

fn print_suggestion(guess: &Candidate, score: f64, remaining: usize) {
    println!(
        "\nBest guess: {}  (elimination score {:.2}, {} candidates remaining)",
        guess.identity().yellow().bold(),
        score,
        remaining
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
