//! Straight and diagonal paths between grid coordinates.

use crate::grid::Coord;

/// Upper bound on points collected by [`intermediate_coords`].
///
/// Grids are capped well below this, so the bound never binds.
pub const MAX_PATH_STEPS: usize = 100;

/// Check whether two coordinates share a horizontal, vertical or diagonal
/// grid line (one of the 8 compass directions).
///
/// ```
/// use rust_linegame::geometry::is_aligned;
/// use rust_linegame::grid::Coord;
///
/// assert!(is_aligned(Coord::new(0, 0), Coord::new(0, 3)));
/// assert!(is_aligned(Coord::new(0, 0), Coord::new(2, 2)));
/// assert!(!is_aligned(Coord::new(0, 0), Coord::new(2, 1)));
/// ```
#[must_use]
pub fn is_aligned(a: Coord, b: Coord) -> bool {
    let d_row = b.row - a.row;
    let d_col = b.col - a.col;
    d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs()
}

/// Unit step from `a` toward `b`, if the pair is aligned.
#[must_use]
fn unit_step(a: Coord, b: Coord) -> Option<(i32, i32)> {
    if !is_aligned(a, b) {
        return None;
    }
    Some(((b.row - a.row).signum(), (b.col - a.col).signum()))
}

/// Coordinates strictly between `a` and `b`, ordered from `a`.
///
/// Empty when the pair is not aligned, identical, or adjacent.
#[must_use]
pub fn intermediate_coords(a: Coord, b: Coord) -> Vec<Coord> {
    let mut out = Vec::new();
    let Some((step_row, step_col)) = unit_step(a, b) else {
        return out;
    };
    if a == b {
        return out;
    }

    let mut current = Coord::new(a.row + step_row, a.col + step_col);
    while current != b && out.len() < MAX_PATH_STEPS {
        out.push(current);
        current = Coord::new(current.row + step_row, current.col + step_col);
    }
    out
}
