//! The move-legality engine.
//!
//! - `legality`: single-move checks and start points
//! - `search`: "does any legal move remain?" and move enumeration
//!
//! Everything here is a pure function of `MatchState`; applying a move is
//! the controller's job.

pub mod legality;
pub mod search;

pub use legality::{check_move, is_valid_move, is_valid_start, valid_start_points, Move};
pub use search::{has_any_valid_move, legal_moves, search_moves, SearchReport};
