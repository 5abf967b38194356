//! Embedded game datasets
//!
//! Datasets are compiled into the binary so the solver works without any
//! files on disk. One CSV per supported game, under `data/`.

pub const LOLDLE: &str = include_str!("../../data/loldle.csv");
pub const POKEDLE: &str = include_str!("../../data/pokedle.csv");
pub const ONEPIECEDLE: &str = include_str!("../../data/onepiecedle.csv");
pub const SMASHDLE: &str = include_str!("../../data/smashdle.csv");
pub const NARUTODLE: &str = include_str!("../../data/narutodle.csv");
pub const DOTADLE: &str = include_str!("../../data/dotadle.csv");
