//! Connection graph queries.
//!
//! Adjacency lives on the grid points; these functions only need a way to
//! look up a point's neighbours, so they work on any adjacency source.

mod cycle;

pub use cycle::{is_forest, would_create_cycle};
