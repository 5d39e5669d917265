//! AI opponent: difficulty tiers and move selection.

mod difficulty;
mod engine;

pub use difficulty::Difficulty;
pub use engine::{AiEngine, Decision, MEDIUM_BEST_MOVE_PROBABILITY, Rule};
