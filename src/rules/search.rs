//! End-of-game detection: does any legal move remain?

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::legality::{is_valid_move, valid_start_points, Move};
use crate::core::{MatchState, SearchMode};

/// Outcome of a move search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// First legal move found, in (start, destination) ID order.
    pub found: Option<Move>,

    /// (start, destination) pairs evaluated.
    pub evaluations: u32,

    /// The bounded search ran out of budget before finding a move.
    pub budget_exhausted: bool,
}

impl SearchReport {
    /// Whether the match should continue.
    ///
    /// An exhausted budget counts as "a move exists".
    #[must_use]
    pub fn move_exists(&self) -> bool {
        self.found.is_some() || self.budget_exhausted
    }
}

/// Look for any legal move from a valid start point to any grid point.
///
/// With `SearchMode::Bounded { budget }` at most `budget` pairs are
/// evaluated; if more pairs remain the search stops and reports an
/// exhausted budget. `SearchMode::Exact` checks every pair.
#[must_use]
pub fn search_moves(state: &MatchState, mode: SearchMode) -> SearchReport {
    let budget = match mode {
        SearchMode::Bounded { budget } => Some(budget),
        SearchMode::Exact => None,
    };

    let mut report = SearchReport::default();
    for from in valid_start_points(state) {
        for to in state.grid().ids() {
            if budget.is_some_and(|b| report.evaluations >= b) {
                warn!(
                    evaluations = report.evaluations,
                    "move search budget exhausted, assuming a move exists"
                );
                report.budget_exhausted = true;
                return report;
            }

            report.evaluations += 1;
            if is_valid_move(state, from, to) {
                report.found = Some(Move::new(from, to));
                return report;
            }
        }
    }

    debug!(evaluations = report.evaluations, "no legal move remains");
    report
}

/// Check whether the next player has any legal move, using the match's
/// configured search mode.
#[must_use]
pub fn has_any_valid_move(state: &MatchState) -> bool {
    search_moves(state, state.config().search).move_exists()
}

/// Every legal move from every valid start point.
///
/// On an empty board each pair appears in both directions.
#[must_use]
pub fn legal_moves(state: &MatchState) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in valid_start_points(state) {
        for to in state.grid().ids() {
            if is_valid_move(state, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}
