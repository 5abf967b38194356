//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_games_list, print_solve_result,
};
