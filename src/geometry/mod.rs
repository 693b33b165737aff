//! Pure geometry over grid coordinates.
//!
//! - `path`: alignment test and the points strictly between two coordinates
//! - `intersect`: segment crossing test
//!
//! Nothing here knows about match state; the legality engine composes
//! these functions with the grid and the connection graph.

mod intersect;
mod path;

pub use intersect::{segments_intersect, Span};
pub use path::{intermediate_coords, is_aligned, MAX_PATH_STEPS};
