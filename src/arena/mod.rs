//! Headless turn controller: plays matches between agents on the
//! authoritative state and tallies results.

mod episode;
mod metrics;

pub use episode::{play_match, MatchRecord, Turn};
pub use metrics::MatchStats;

/// Match-running configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of matches to play.
    pub games: usize,
    /// Turn cap; a match still running after this many turns has no winner.
    pub max_turns: usize,
    /// Base seed for every agent's RNG. Unset means seed from the OS.
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            max_turns: 200,
            seed: None,
        }
    }
}
