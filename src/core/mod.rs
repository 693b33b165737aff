//! Core match types: players, configuration, state.
//!
//! Everything else in the crate operates on a `MatchState` passed in
//! explicitly; nothing here is global.

pub mod config;
pub mod player;
pub mod state;

pub use config::{MatchConfig, SearchMode, DEFAULT_SEARCH_BUDGET, GRID_SIZE, MAX_GRID_SIZE};
pub use player::Player;
pub use state::{MatchState, Phase, Segment};
