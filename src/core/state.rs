//! Match state: the grid, drawn segments, turn and phase.
//!
//! ## MatchState
//!
//! Everything a match needs lives in one owned value:
//! - Configuration
//! - The point arena (connections and blocked flags)
//! - Drawn segments, in draw order
//! - Current player and controller phase
//!
//! There is no global state; independent matches can coexist. Cloning is
//! cheap because segments live in an `im` persistent vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::player::Player;
use crate::error::{ConfigError, SnapshotError};
use crate::graph::is_forest;
use crate::grid::{Coord, Grid, PointId};

/// A drawn line between two points, attributed to the player who drew it.
///
/// Endpoints are unordered for every rule; `from` is simply the origin
/// the player selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub from: PointId,
    pub to: PointId,
    pub player: Player,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(from: PointId, to: PointId, player: Player) -> Self {
        Self { from, to, player }
    }

    /// Check if this segment joins `a` and `b`, in either direction.
    #[must_use]
    pub fn joins(&self, a: PointId, b: PointId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Check if `point` is one of the endpoints.
    #[must_use]
    pub fn has_endpoint(&self, point: PointId) -> bool {
        self.from == point || self.to == point
    }
}

/// Controller phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to pick an origin.
    #[default]
    Selecting,
    /// Origin picked; waiting for the destination.
    OriginChosen { origin: PointId },
    /// No legal move remains. `winner` made the last move.
    Finished { winner: Player },
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) config: MatchConfig,
    pub(crate) grid: Grid,
    pub(crate) current_player: Player,
    pub(crate) segments: Vector<Segment>,
    pub(crate) phase: Phase,
}

impl MatchState {
    /// Start a fresh match.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player One
    /// - `phase`: Selecting
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::generate(config.grid_size);

        Ok(Self {
            config,
            grid,
            current_player: Player::One,
            segments: Vector::new(),
            phase: Phase::Selecting,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get the point arena.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is. After the match ends, the winner.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Drawn segments in draw order.
    #[must_use]
    pub fn segments(&self) -> &Vector<Segment> {
        &self.segments
    }

    /// Get the controller phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Origin selected by the current player, if any.
    #[must_use]
    pub fn pending_origin(&self) -> Option<PointId> {
        match self.phase {
            Phase::OriginChosen { origin } => Some(origin),
            _ => None,
        }
    }

    /// Check if the match is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Winner of a finished match.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Check if a segment joins `a` and `b`, in either direction.
    #[must_use]
    pub fn has_segment(&self, a: PointId, b: PointId) -> bool {
        self.segments.iter().any(|s| s.joins(a, b))
    }

    /// Turn banner text for the UI.
    ///
    /// ```
    /// use rust_linegame::core::{MatchConfig, MatchState};
    ///
    /// let state = MatchState::new(MatchConfig::default()).unwrap();
    /// assert_eq!(state.status_line(), "Player 1's Turn");
    /// ```
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Finished { winner } => {
                format!("{winner} made the last move. {winner} wins!")
            }
            _ => format!("{}'s Turn", self.current_player),
        }
    }

    // === Mutation ===

    /// Record a segment for the current player and apply its side effects:
    /// mutual connection and blocking of every intermediate point.
    ///
    /// Legality is the caller's responsibility. Returns the segment and the
    /// points it blocked.
    pub(crate) fn apply_segment(&mut self, from: PointId, to: PointId) -> (Segment, Vec<PointId>) {
        let segment = Segment::new(from, to, self.current_player);
        self.segments.push_back(segment);
        self.grid.connect(from, to);

        let blocked = self.grid.intermediate_points(from, to);
        for &point in &blocked {
            self.grid.block(point);
        }

        (segment, blocked)
    }

    // === Snapshots ===

    /// Encode the match with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a match encoded by [`MatchState::to_bytes`].
    ///
    /// Rejects snapshots whose grid does not match their configuration,
    /// that reference points outside the grid, or whose connections and
    /// blocked flags do not follow from the drawn segments.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: MatchState = bincode::deserialize(bytes)?;
        state.check_consistency()?;
        Ok(state)
    }

    fn check_consistency(&self) -> Result<(), SnapshotError> {
        self.config.validate()?;

        let size = self.config.grid_size;
        if self.grid.size() != size || self.grid.len() != size * size {
            return Err(SnapshotError::InvalidSnapshot(format!(
                "grid has {} points, config expects {}x{}",
                self.grid.len(),
                size,
                size
            )));
        }
        for (index, point) in self.grid.iter().enumerate() {
            let coord = Coord::new((index / size) as i32, (index % size) as i32);
            if point.id.index() != index || point.coord != coord {
                return Err(SnapshotError::InvalidSnapshot(format!(
                    "{} at {} stored at index {}",
                    point.id, point.coord, index
                )));
            }
        }
        if let Some(segment) = self
            .segments
            .iter()
            .find(|s| !self.grid.contains(s.from) || !self.grid.contains(s.to))
        {
            return Err(SnapshotError::InvalidSnapshot(format!(
                "segment {} - {} is off the grid",
                segment.from, segment.to
            )));
        }
        if let Some(origin) = self.pending_origin() {
            if !self.grid.contains(origin) {
                return Err(SnapshotError::InvalidSnapshot(format!(
                    "pending origin {origin} is off the grid"
                )));
            }
        }

        // Connections and blocked flags must follow from the segments alone.
        let mut links: Vec<Vec<PointId>> = vec![Vec::new(); self.grid.len()];
        let mut blocked = vec![false; self.grid.len()];
        for segment in self.segments.iter() {
            links[segment.from.index()].push(segment.to);
            links[segment.to.index()].push(segment.from);
            for point in self.grid.intermediate_points(segment.from, segment.to) {
                blocked[point.index()] = true;
            }
        }
        for point in self.grid.iter() {
            let expected = &links[point.id.index()];
            if point.degree() != expected.len()
                || !expected.iter().all(|&other| point.is_connected_to(other))
            {
                return Err(SnapshotError::InvalidSnapshot(format!(
                    "connections of {} do not match the segments",
                    point.id
                )));
            }
            if point.blocked != blocked[point.id.index()] {
                return Err(SnapshotError::InvalidSnapshot(format!(
                    "blocked flag of {} does not match the segments",
                    point.id
                )));
            }
        }
        if !is_forest(self.grid.len(), |id| self.grid.neighbors(id)) {
            return Err(SnapshotError::InvalidSnapshot(
                "segments close a loop".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    fn id(state: &MatchState, row: i32, col: i32) -> PointId {
        state.grid().id_at(Coord::new(row, col)).unwrap()
    }

    #[test]
    fn test_new_match() {
        let state = MatchState::new(MatchConfig::default()).unwrap();

        assert_eq!(state.grid().len(), 16);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.phase(), Phase::Selecting);
        assert!(state.segments().is_empty());
        assert!(state.pending_origin().is_none());
        assert!(!state.is_finished());
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result = MatchState::new(MatchConfig::default().with_grid_size(1));
        assert_eq!(result.unwrap_err(), ConfigError::GridTooSmall { size: 1 });
    }

    #[test]
    fn test_segment_joins_either_direction() {
        let segment = Segment::new(PointId(1), PointId(2), Player::One);

        assert!(segment.joins(PointId(1), PointId(2)));
        assert!(segment.joins(PointId(2), PointId(1)));
        assert!(!segment.joins(PointId(1), PointId(3)));
        assert!(segment.has_endpoint(PointId(2)));
        assert!(!segment.has_endpoint(PointId(3)));
    }

    #[test]
    fn test_apply_segment_side_effects() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        let from = id(&state, 0, 0);
        let to = id(&state, 0, 3);

        let (segment, blocked) = state.apply_segment(from, to);

        assert_eq!(segment, Segment::new(from, to, Player::One));
        assert_eq!(blocked, vec![id(&state, 0, 1), id(&state, 0, 2)]);
        assert!(state.grid().is_blocked(id(&state, 0, 1)));
        assert!(state.grid().is_blocked(id(&state, 0, 2)));
        assert!(!state.grid().is_blocked(from));
        assert!(state.has_segment(to, from));
        assert_eq!(state.grid().neighbors(from), &[to]);
        assert_eq!(state.grid().neighbors(to), &[from]);
    }

    #[test]
    fn test_status_line() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        assert_eq!(state.status_line(), "Player 1's Turn");

        state.current_player = Player::Two;
        assert_eq!(state.status_line(), "Player 2's Turn");

        state.phase = Phase::Finished { winner: Player::Two };
        assert_eq!(
            state.status_line(),
            "Player 2 made the last move. Player 2 wins!"
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        let snapshot = state.clone();

        state.apply_segment(PointId(0), PointId(5));

        assert_eq!(snapshot.segments().len(), 0);
        assert_eq!(state.segments().len(), 1);
        assert!(snapshot.grid().neighbors(PointId(0)).is_empty());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.apply_segment(PointId(0), PointId(15));
        state.phase = Phase::OriginChosen { origin: PointId(15) };

        let bytes = state.to_bytes().unwrap();
        let restored = MatchState::from_bytes(&bytes).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_from_bytes_rejects_mismatched_grid() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.grid = Grid::generate(3);

        let bytes = state.to_bytes().unwrap();
        let err = MatchState::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidSnapshot(_)));
    }

    fn assert_rejected(state: &MatchState) {
        let bytes = state.to_bytes().unwrap();
        let err = MatchState::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidSnapshot(_)), "{err}");
    }

    #[test]
    fn test_from_bytes_rejects_connection_without_segment() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.grid.connect(PointId(0), PointId(5));
        assert_rejected(&state);

        // The same connection backed by a segment is fine.
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.apply_segment(PointId(0), PointId(5));
        let restored = MatchState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_from_bytes_rejects_blocked_mismatch() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.apply_segment(PointId(0), PointId(1));
        state.grid.block(PointId(10));
        assert_rejected(&state);

        // Segment 0-3 blocks 1 and 2; a snapshot without those flags is stale.
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.segments.push_back(Segment::new(PointId(0), PointId(3), Player::One));
        state.grid.connect(PointId(0), PointId(3));
        assert_rejected(&state);
    }

    #[test]
    fn test_from_bytes_rejects_misplaced_coord() {
        let state = MatchState::new(MatchConfig::default()).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["grid"]["points"][3]["coord"]["row"] = serde_json::json!(3);
        value["grid"]["points"][3]["coord"]["col"] = serde_json::json!(0);
        let forged: MatchState = serde_json::from_value(value).unwrap();

        assert_eq!(forged.grid().point(PointId(3)).unwrap().coord, Coord::new(3, 0));
        assert_rejected(&forged);
    }

    #[test]
    fn test_from_bytes_rejects_loop() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.apply_segment(PointId(0), PointId(1));
        state.apply_segment(PointId(1), PointId(5));
        state.apply_segment(PointId(5), PointId(0));
        assert_rejected(&state);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = MatchState::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, SnapshotError::Bincode(_)));
    }

    #[test]
    fn test_json_serialization() {
        let mut state = MatchState::new(MatchConfig::default().with_grid_size(3)).unwrap();
        state.apply_segment(PointId(0), PointId(2));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
