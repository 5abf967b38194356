//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_candidate};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{run_play, select_game};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_target};
