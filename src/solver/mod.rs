//! Solving engine: elimination scoring, pool filtering, session state

pub mod filter;
pub mod scorer;
pub mod session;

pub use filter::filter_pool;
pub use scorer::{ScoredCandidate, best_guess, elimination_score, feedback_groups, score_all};
pub use session::{GameState, Session};
