//! # rust-linegame
//!
//! Rules engine for a two-player line-drawing game on a square grid of
//! points. Players take turns drawing straight or diagonal segments; the
//! player who makes the last legal move wins.
//!
//! ## Rules
//!
//! A segment may be drawn when:
//! - its endpoints are distinct and not blocked,
//! - it does not repeat an existing segment,
//! - it runs horizontally, vertically or diagonally,
//! - no point along it is blocked,
//! - it does not close a loop in the connection graph,
//! - it does not cross a segment it shares no endpoint with.
//!
//! Drawing a segment blocks every point strictly inside it. After the
//! first move, every move must start from an open end of the drawn path.
//!
//! ## Architecture
//!
//! - **Arena**: points live in a `Grid` and refer to each other by
//!   `PointId`; no shared pointers.
//! - **Explicit state**: every operation takes a `MatchState`. Nothing is
//!   global, so any number of matches can run side by side.
//! - **Persistent Data Structures**: segment history uses `im-rs`, so
//!   cloning a match is cheap.
//!
//! ## Modules
//!
//! - `core`: players, configuration, match state
//! - `grid`: point arena
//! - `geometry`: alignment, paths, segment crossing
//! - `graph`: cycle and forest checks
//! - `rules`: move legality, start points, end-of-game search
//! - `controller`: turns, phases, point activation
//! - `error`: typed rejection and configuration errors

pub mod controller;
pub mod core;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    MatchConfig, MatchState, Phase, Player, SearchMode, Segment,
    DEFAULT_SEARCH_BUDGET, GRID_SIZE, MAX_GRID_SIZE,
};

pub use crate::grid::{Coord, Grid, PointId};

pub use crate::rules::{
    check_move, has_any_valid_move, is_valid_move, legal_moves, search_moves,
    valid_start_points, Move, SearchReport,
};

pub use crate::controller::{init_match, Activation};

pub use crate::error::{ConfigError, IllegalMove, SnapshotError};
