//! The fixed set of points a match is played on.
//!
//! `Grid` is an arena: points are addressed by `PointId` and hold their
//! neighbours as IDs, so there is no aliasing between points.

mod board;
mod point;

pub use board::Grid;
pub use point::{Connections, Coord, Point, PointId};
