//! Difficulty tiers.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// AI strength, chosen once per session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Hard most of the time, Easy otherwise.
    #[default]
    Medium,
    /// Win, block, center, corner, anything.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy AI",
            Self::Medium => "Medium AI",
            Self::Hard => "Hard AI",
        }
    }
}
