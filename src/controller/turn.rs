//! Turn handling: origin selection, move attempts, win detection.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{MatchConfig, MatchState, Phase, Player, Segment};
use crate::error::{ConfigError, IllegalMove};
use crate::graph::is_forest;
use crate::grid::{Grid, PointId};
use crate::rules::{check_move, has_any_valid_move, is_valid_start};

/// What a point activation did to the match.
///
/// Rejections are not errors: the match simply does not advance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Nothing changed.
    Ignored,

    /// The current player picked the origin of their next segment.
    OriginSelected { origin: PointId },

    /// The destination was illegal; the pending origin was dropped.
    SelectionCleared { origin: PointId, reason: IllegalMove },

    /// A segment was drawn and the turn passed to `next`.
    MovePlayed {
        segment: Segment,
        blocked: Vec<PointId>,
        next: Player,
    },

    /// A segment was drawn and no legal move remains.
    MatchWon {
        segment: Segment,
        blocked: Vec<PointId>,
        winner: Player,
    },
}

impl Activation {
    /// Check if a segment was drawn.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Activation::MovePlayed { .. } | Activation::MatchWon { .. })
    }
}

/// Start a match on a `grid_size` x `grid_size` grid with default settings.
///
/// ```
/// use rust_linegame::controller::init_match;
///
/// let state = init_match(4).unwrap();
/// assert_eq!(state.grid().len(), 16);
/// assert!(init_match(1).is_err());
/// ```
pub fn init_match(grid_size: usize) -> Result<MatchState, ConfigError> {
    MatchState::new(MatchConfig::default().with_grid_size(grid_size))
}

impl MatchState {
    /// Handle a click on `point`.
    ///
    /// Ignored once the match is finished, for unknown points and for
    /// blocked points (a pending origin survives a blocked click).
    /// Otherwise selects an origin or attempts a move, depending on phase.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn handle_point_activation(&mut self, point: PointId) -> Activation {
        match self.grid.point(point) {
            None => {
                debug!("activation outside the grid ignored");
                return Activation::Ignored;
            }
            Some(p) if p.blocked => {
                debug!("activation on blocked point ignored");
                return Activation::Ignored;
            }
            Some(_) => {}
        }

        match self.phase {
            Phase::Selecting => self.select_origin(point),
            Phase::OriginChosen { .. } => self.attempt_move(point),
            Phase::Finished { .. } => {
                debug!("activation after match end ignored");
                Activation::Ignored
            }
        }
    }

    /// Pick the origin of the next segment.
    ///
    /// Only effective while selecting, and only for a valid start point.
    pub fn select_origin(&mut self, point: PointId) -> Activation {
        if self.phase != Phase::Selecting || !is_valid_start(self, point) {
            return Activation::Ignored;
        }

        debug!(origin = %point, "origin selected");
        self.phase = Phase::OriginChosen { origin: point };
        Activation::OriginSelected { origin: point }
    }

    /// Try to draw a segment from the pending origin to `destination`.
    ///
    /// A legal move is recorded, its intermediate points are blocked and
    /// the match either passes the turn or ends with the mover as winner.
    /// An illegal move just drops the pending origin.
    pub fn attempt_move(&mut self, destination: PointId) -> Activation {
        let Phase::OriginChosen { origin } = self.phase else {
            return Activation::Ignored;
        };
        self.phase = Phase::Selecting;

        if let Err(reason) = check_move(self, origin, destination) {
            debug!(%origin, %destination, %reason, "selection cleared");
            return Activation::SelectionCleared { origin, reason };
        }

        let mover = self.current_player;
        let (segment, blocked) = self.apply_segment(origin, destination);
        debug_assert!(is_forest(self.grid.len(), |id| self.grid.neighbors(id)));

        if !has_any_valid_move(self) {
            info!(winner = %mover, segments = self.segments.len(), "match won");
            self.phase = Phase::Finished { winner: mover };
            return Activation::MatchWon {
                segment,
                blocked,
                winner: mover,
            };
        }

        let next = mover.opponent();
        self.current_player = next;
        debug!(%origin, %destination, %next, "move played");
        Activation::MovePlayed {
            segment,
            blocked,
            next,
        }
    }

    /// Select `from` and then attempt `to` in one call.
    ///
    /// Returns the selection result if `from` was not accepted as origin.
    pub fn play_move(&mut self, from: PointId, to: PointId) -> Activation {
        match self.handle_point_activation(from) {
            Activation::OriginSelected { .. } => self.handle_point_activation(to),
            other => other,
        }
    }

    /// Start over on a fresh grid with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::generate(self.config.grid_size);
        self.segments = Vector::new();
        self.current_player = Player::One;
        self.phase = Phase::Selecting;
        debug!("match reset");
    }
}
