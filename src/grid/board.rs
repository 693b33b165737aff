//! Point arena for a square grid.

use serde::{Deserialize, Serialize};

use super::point::{Coord, Point, PointId};
use crate::geometry::{intermediate_coords, Span};

/// Square grid of points, stored row-major.
///
/// The set of points is fixed at generation. Only connections and blocked
/// flags change afterwards, and only through the match controller.
///
/// ## Usage
///
/// ```
/// use rust_linegame::grid::{Coord, Grid, PointId};
///
/// let grid = Grid::generate(4);
/// assert_eq!(grid.len(), 16);
///
/// let id = grid.id_at(Coord::new(1, 2)).unwrap();
/// assert_eq!(id, PointId::new(6));
/// assert_eq!(grid.point(id).unwrap().coord, Coord::new(1, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    points: Vec<Point>,
}

impl Grid {
    /// Generate `size * size` unconnected, unblocked points.
    #[must_use]
    pub fn generate(size: usize) -> Self {
        let mut points = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let id = PointId((row * size + col) as u32);
                points.push(Point::new(id, Coord::new(row as i32, col as i32)));
            }
        }
        Self { size, points }
    }

    /// Points per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the grid has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if `id` refers to a point of this grid.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        id.index() < self.points.len()
    }

    /// Get a point by ID.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    /// Look up the point at a coordinate.
    #[must_use]
    pub fn id_at(&self, coord: Coord) -> Option<PointId> {
        let size = self.size as i32;
        if coord.row < 0 || coord.col < 0 || coord.row >= size || coord.col >= size {
            return None;
        }
        Some(PointId((coord.row * size + coord.col) as u32))
    }

    /// Iterate over all points in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Iterate over all point IDs in row-major order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> {
        (0..self.points.len() as u32).map(PointId)
    }

    /// Iterate over blocked points.
    pub fn blocked_points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().filter(|p| p.blocked).map(|p| p.id)
    }

    /// Check if a point is blocked. Unknown IDs are not blocked.
    #[must_use]
    pub fn is_blocked(&self, id: PointId) -> bool {
        self.point(id).is_some_and(|p| p.blocked)
    }

    /// Direct connections of a point. Unknown IDs have none.
    #[must_use]
    pub fn neighbors(&self, id: PointId) -> &[PointId] {
        self.point(id)
            .map(|p| p.connections.as_slice())
            .unwrap_or(&[])
    }

    /// Grid points strictly between `a` and `b`, ordered from `a`.
    ///
    /// Empty when the pair is not aligned.
    #[must_use]
    pub fn intermediate_points(&self, a: PointId, b: PointId) -> Vec<PointId> {
        let (Some(pa), Some(pb)) = (self.point(a), self.point(b)) else {
            return Vec::new();
        };
        intermediate_coords(pa.coord, pb.coord)
            .into_iter()
            .filter_map(|coord| self.id_at(coord))
            .collect()
    }

    /// Geometric span between two points.
    #[must_use]
    pub fn span(&self, a: PointId, b: PointId) -> Option<Span> {
        Some(Span::new(self.point(a)?.coord, self.point(b)?.coord))
    }

    // === Mutation ===

    /// Record a mutual connection between two points.
    ///
    /// Returns false if either ID is unknown.
    pub(crate) fn connect(&mut self, a: PointId, b: PointId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.points[a.index()].connections.push(b);
        self.points[b.index()].connections.push(a);
        true
    }

    /// Mark a point as blocked. Blocking is permanent.
    pub(crate) fn block(&mut self, id: PointId) {
        if let Some(point) = self.points.get_mut(id.index()) {
            point.blocked = true;
        }
    }
}
