//! Move legality and start points.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::MatchState;
use crate::error::IllegalMove;
use crate::geometry::{is_aligned, segments_intersect, Span};
use crate::graph::would_create_cycle;
use crate::grid::PointId;

/// A candidate segment from a start point to a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: PointId,
    pub to: PointId,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: PointId, to: PointId) -> Self {
        Self { from, to }
    }
}

/// Decide whether a segment from `from` to `to` may be drawn.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. distinct, unblocked endpoints
/// 2. no identical segment, in either direction
/// 3. straight or diagonal alignment
/// 4. no blocked point along the path
/// 5. no cycle in the connection graph
/// 6. no crossing with a segment that shares no endpoint with the candidate
///
/// Start-point eligibility is not checked here; see [`valid_start_points`].
pub fn check_move(state: &MatchState, from: PointId, to: PointId) -> Result<(), IllegalMove> {
    let grid = state.grid();
    let a = grid.point(from).ok_or(IllegalMove::UnknownPoint(from))?;
    let b = grid.point(to).ok_or(IllegalMove::UnknownPoint(to))?;

    if from == to {
        return Err(IllegalMove::SamePoint);
    }
    if a.blocked {
        return Err(IllegalMove::BlockedEndpoint(from));
    }
    if b.blocked {
        return Err(IllegalMove::BlockedEndpoint(to));
    }

    if state.has_segment(from, to) {
        return Err(IllegalMove::DuplicateSegment { from, to });
    }

    if !is_aligned(a.coord, b.coord) {
        return Err(IllegalMove::NotAligned { from, to });
    }

    if let Some(blocked) = grid
        .intermediate_points(from, to)
        .into_iter()
        .find(|&p| grid.is_blocked(p))
    {
        return Err(IllegalMove::BlockedPath(blocked));
    }

    if would_create_cycle(from, to, |id| grid.neighbors(id)) {
        return Err(IllegalMove::WouldCloseCycle { from, to });
    }

    let candidate = Span::new(a.coord, b.coord);
    for (index, segment) in state.segments().iter().enumerate() {
        if segment.has_endpoint(from) || segment.has_endpoint(to) {
            continue;
        }
        let Some(existing) = grid.span(segment.from, segment.to) else {
            continue;
        };
        if segments_intersect(&candidate, &existing) {
            return Err(IllegalMove::CrossesSegment { index });
        }
    }

    Ok(())
}

/// Check whether a segment from `from` to `to` may be drawn.
#[must_use]
pub fn is_valid_move(state: &MatchState, from: PointId, to: PointId) -> bool {
    match check_move(state, from, to) {
        Ok(()) => true,
        Err(reason) => {
            trace!(%from, %to, %reason, "move rejected");
            false
        }
    }
}

/// Points the next move may start from, sorted by ID.
///
/// Before the first segment every unblocked point qualifies. Afterwards a
/// move must extend the open end of a drawn path: the point must be
/// unblocked, an endpoint of some segment, and have at most one connection.
#[must_use]
pub fn valid_start_points(state: &MatchState) -> Vec<PointId> {
    let grid = state.grid();

    if state.segments().is_empty() {
        return grid.iter().filter(|p| !p.blocked).map(|p| p.id).collect();
    }

    let mut starts: Vec<PointId> = state
        .segments()
        .iter()
        .flat_map(|s| [s.from, s.to])
        .filter(|&id| grid.point(id).is_some_and(|p| !p.blocked && p.degree() <= 1))
        .collect();
    starts.sort_unstable();
    starts.dedup();
    starts
}

/// Check whether `point` is a valid start for the next move.
#[must_use]
pub fn is_valid_start(state: &MatchState, point: PointId) -> bool {
    valid_start_points(state).binary_search(&point).is_ok()
}
