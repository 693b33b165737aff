//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default points per side.
pub const GRID_SIZE: usize = 4;

/// Largest supported grid side. Keeps every path well under
/// `geometry::MAX_PATH_STEPS` and the exact search small.
pub const MAX_GRID_SIZE: usize = 64;

/// Default number of (start, destination) pairs the bounded search checks.
pub const DEFAULT_SEARCH_BUDGET: u32 = 1000;

/// How `has_any_valid_move` explores candidate moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Stop after `budget` pair evaluations and assume a move exists.
    ///
    /// Biased toward "game continues": on a huge opening position the
    /// search can report a move without having found one.
    Bounded { budget: u32 },

    /// Evaluate every (start, destination) pair.
    Exact,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Bounded {
            budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Points per side (default: 4).
    pub grid_size: usize,

    /// End-of-game detection strategy.
    pub search: SearchMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            search: SearchMode::default(),
        }
    }
}

impl MatchConfig {
    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the search mode.
    #[must_use]
    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    /// Use the exact end-of-game search.
    #[must_use]
    pub fn exact(self) -> Self {
        self.with_search(SearchMode::Exact)
    }

    /// Check the configuration against the engine's limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if let SearchMode::Bounded { budget: 0 } = self.search {
            return Err(ConfigError::ZeroSearchBudget);
        }
        Ok(())
    }
}
