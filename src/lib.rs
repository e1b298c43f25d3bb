//! FLASHCORE - In-Memory Vector Index
//!
//! Fixed-capacity storage for identified feature vectors with exact
//! k-nearest-neighbor search under Euclidean distance, plus call-shape
//! stand-ins for the sibling inference-runtime and vault modules.

pub mod error;
pub mod index;
pub mod inference;
pub mod vault;

pub use error::{Error, Result};
pub use index::{euclidean_distance, Neighbor, VectorIndex};
pub use inference::InferenceRuntime;
pub use vault::Vault;
