//! Vector Index Module
//!
//! Fixed-capacity vector storage and exact k-nearest-neighbor search.

mod distance;
mod store;

pub use distance::euclidean_distance;
pub use store::{Neighbor, VectorIndex};
