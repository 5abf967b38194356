//! Alldle Solver
//!
//! A solver for multi-attribute guessing games (Loldle, Pokédle, Smashdle
//! and friends): it scores every candidate by how many pool members a guess
//! of it would eliminate on average, then prunes the pool with the feedback
//! the live game returns.
//!
//! # Quick Start
//!
//! ```rust
//! use alldle_solver::core::{Candidate, ColumnRole, FeedbackVector, Schema, Value};
//! use alldle_solver::solver::{best_guess, filter_pool};
//!
//! let schema = Schema::new(vec![
//!     ("Name".to_string(), ColumnRole::Identity),
//!     ("Year".to_string(), ColumnRole::Ordinal),
//! ])
//! .unwrap();
//!
//! let pool = vec![
//!     Candidate::new("X", vec![Value::ordinal(2010)]),
//!     Candidate::new("Y", vec![Value::ordinal(2015)]),
//!     Candidate::new("Z", vec![Value::ordinal(2020)]),
//! ];
//!
//! // Y splits the pool best; feedback "L" (target is lower) leaves only X.
//! let guess = best_guess(&pool, &schema).unwrap().candidate.clone();
//! let feedback = FeedbackVector::parse("L", &schema).unwrap();
//! let remaining = filter_pool(&pool, &guess, &feedback, &schema);
//! assert_eq!(remaining.len(), 1);
//! ```

// Core domain types
pub mod core;

// Scoring, filtering and session state
pub mod solver;

// Game registry and dataset loading
pub mod games;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
