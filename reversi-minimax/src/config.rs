//! Search configuration

use reversi_core::Disc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static evaluation heuristic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    /// Own disc count minus opponent disc count
    DiscCount,
    /// Own legal-move count minus opponent legal-move count
    Mobility,
    /// Positional weight difference: corners over edges over interior
    Positional,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::DiscCount
    }
}

/// Configuration error
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be at least 1, got {0}")]
    DepthTooSmall(u32),
}

/// Search agent configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Disc the agent plays
    pub disc: Disc,
    /// Static evaluation heuristic
    pub heuristic: Heuristic,
    /// Whether alpha-beta cutoffs are applied
    pub prune: bool,
    /// Maximum search depth in plies (at least 1)
    pub max_depth: u32,
}

impl SearchConfig {
    /// Config for `disc` with default heuristic, pruning and depth
    pub fn new(disc: Disc) -> Self {
        Self {
            disc,
            heuristic: Heuristic::default(),
            prune: true,
            max_depth: 4,
        }
    }

    /// Set the evaluation heuristic
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Enable or disable alpha-beta pruning
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Set the maximum search depth
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The disc the agent plays against, always the complement of its own
    pub fn opponent(&self) -> Disc {
        self.disc.opponent()
    }

    /// Reject configurations the search has no defined behavior for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(ConfigError::DepthTooSmall(self.max_depth));
        }
        Ok(())
    }
}
