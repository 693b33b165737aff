//! Point identification and per-point state.
//!
//! Every grid location has a `PointId`, a stable index into the match's
//! point arena. Ids are allocated row-major: `id = row * size + col`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable identifier for a grid point.
///
/// Points are compared by id, never by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// Create a new point ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({})", self.0)
    }
}

/// Grid coordinate. `row` grows downward, `col` grows rightward.
///
/// Signed so that direction arithmetic never underflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direct connections of a point.
///
/// Points on a single drawn path have at most two neighbours, so the
/// common case never spills to the heap.
pub type Connections = SmallVec<[PointId; 4]>;

/// A grid point: fixed identity plus the state a match mutates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Arena index of this point.
    pub id: PointId,

    /// Grid location.
    pub coord: Coord,

    /// Points joined to this one by a drawn segment.
    pub connections: Connections,

    /// Lies strictly inside a drawn segment. Never cleared within a match.
    pub blocked: bool,
}

impl Point {
    /// Create an unconnected, unblocked point.
    #[must_use]
    pub fn new(id: PointId, coord: Coord) -> Self {
        Self {
            id,
            coord,
            connections: SmallVec::new(),
            blocked: false,
        }
    }

    /// Check for a direct connection to `other`.
    #[must_use]
    pub fn is_connected_to(&self, other: PointId) -> bool {
        self.connections.contains(&other)
    }

    /// Number of direct connections.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Pixel centre of this point for a canvas with square cells.
    ///
    /// Returns `(x, y)`. Only the renderer cares about this; the rules
    /// work on grid coordinates.
    ///
    /// ```
    /// use rust_linegame::grid::{Coord, Point, PointId};
    ///
    /// let point = Point::new(PointId::new(6), Coord::new(1, 2));
    /// assert_eq!(point.pixel_center(100.0), (250.0, 150.0));
    /// ```
    #[must_use]
    pub fn pixel_center(&self, cell_size: f64) -> (f64, f64) {
        (
            f64::from(self.coord.col) * cell_size + cell_size / 2.0,
            f64::from(self.coord.row) * cell_size + cell_size / 2.0,
        )
    }
}
