//! Segment crossing test.
//!
//! Segments are treated as infinite lines `A x + B y = C` (with `x = col`,
//! `y = row`). Parallel lines never cross, and neither do collinear ones:
//! two segments lying on the same line are reported as not intersecting
//! even when they overlap. The move rules rely on that behaviour.
//!
//! Intersection points are compared against the segments' bounding boxes
//! with exact integer arithmetic, so endpoints that touch are detected
//! without rounding error.

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// A straight segment between two grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub from: Coord,
    pub to: Coord,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Line coefficients `(A, B, C)`.
    fn line(&self) -> (i64, i64, i64) {
        let (x1, y1) = (i64::from(self.from.col), i64::from(self.from.row));
        let (x2, y2) = (i64::from(self.to.col), i64::from(self.to.row));
        let a = y2 - y1;
        let b = x1 - x2;
        (a, b, a * x1 + b * y1)
    }

    /// Whether `num / den` (with `den > 0`) lies inside the bounding box
    /// on both axes, inclusive.
    fn contains_scaled(&self, num_x: i64, num_y: i64, den: i64) -> bool {
        let (x1, x2) = (i64::from(self.from.col), i64::from(self.to.col));
        let (y1, y2) = (i64::from(self.from.row), i64::from(self.to.row));
        x1.min(x2) * den <= num_x
            && num_x <= x1.max(x2) * den
            && y1.min(y2) * den <= num_y
            && num_y <= y1.max(y2) * den
    }
}

/// Check whether two segments cross.
///
/// Returns `false` for parallel and collinear segments.
///
/// ```
/// use rust_linegame::geometry::{segments_intersect, Span};
/// use rust_linegame::grid::Coord;
///
/// let a = Span::new(Coord::new(0, 0), Coord::new(1, 1));
/// let b = Span::new(Coord::new(0, 1), Coord::new(1, 0));
/// assert!(segments_intersect(&a, &b));
/// ```
#[must_use]
pub fn segments_intersect(s1: &Span, s2: &Span) -> bool {
    let (a1, b1, c1) = s1.line();
    let (a2, b2, c2) = s2.line();

    let mut det = a1 * b2 - a2 * b1;
    if det == 0 {
        return false;
    }

    let mut num_x = b2 * c1 - b1 * c2;
    let mut num_y = a1 * c2 - a2 * c1;
    if det < 0 {
        det = -det;
        num_x = -num_x;
        num_y = -num_y;
    }

    s1.contains_scaled(num_x, num_y, det) && s2.contains_scaled(num_x, num_y, det)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(r1: i32, c1: i32, r2: i32, c2: i32) -> Span {
        Span::new(Coord::new(r1, c1), Coord::new(r2, c2))
    }

    #[test]
    fn test_x_crossing_between_grid_points() {
        assert!(segments_intersect(&span(0, 0, 1, 1), &span(0, 1, 1, 0)));
    }

    #[test]
    fn test_plus_crossing_on_grid_point() {
        assert!(segments_intersect(&span(1, 0, 1, 2), &span(0, 1, 2, 1)));
    }

    #[test]
    fn test_disjoint() {
        assert!(!segments_intersect(&span(0, 0, 0, 1), &span(2, 0, 3, 1)));
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // Lines meet at (0, 2) but the second segment stops short.
        assert!(!segments_intersect(&span(0, 0, 0, 3), &span(1, 2, 3, 2)));
    }

    #[test]
    fn test_parallel() {
        assert!(!segments_intersect(&span(0, 0, 0, 3), &span(1, 0, 1, 3)));
        assert!(!segments_intersect(&span(0, 0, 2, 2), &span(0, 1, 2, 3)));
    }

    #[test]
    fn test_collinear_overlap_not_detected() {
        assert!(!segments_intersect(&span(0, 0, 0, 3), &span(0, 1, 0, 2)));
    }

    #[test]
    fn test_touching_endpoint_counts() {
        // T-junction: endpoint of one segment lies inside the other.
        assert!(segments_intersect(&span(0, 0, 0, 2), &span(0, 1, 2, 1)));
    }

    #[test]
    fn test_shared_endpoint_counts() {
        // Callers exempt shared endpoints; the raw test still sees a touch.
        assert!(segments_intersect(&span(0, 0, 1, 1), &span(1, 1, 2, 0)));
    }

    #[test]
    fn test_symmetric() {
        let a = span(0, 0, 3, 3);
        let b = span(0, 3, 3, 0);
        assert_eq!(segments_intersect(&a, &b), segments_intersect(&b, &a));

        let reversed = span(3, 3, 0, 0);
        assert_eq!(segments_intersect(&a, &b), segments_intersect(&reversed, &b));
    }
}
