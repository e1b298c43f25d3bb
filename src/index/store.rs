//! Vector Index
//!
//! Fixed-capacity storage for identified feature vectors with exact
//! k-nearest-neighbor search.

use tracing::debug;

use super::distance::euclidean_distance;
use crate::error::{Error, Result};

/// A stored (identifier, vector) pair, immutable once appended
#[derive(Debug, Clone)]
struct Entry {
    id: i64,
    vector: Vec<f32>,
}

/// A search result row: identifier plus Euclidean distance to the query
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Caller-supplied identifier of the stored vector
    pub id: i64,
    /// Euclidean distance to the query (lower = closer)
    pub distance: f32,
}

/// Fixed-capacity in-memory vector index.
///
/// Entries are appended in insertion order and never mutated or removed;
/// search is an exhaustive scan of every stored vector, O(n * d). Equal
/// distances rank in insertion order, so repeated queries against an
/// unmodified index return identical results.
///
/// The index holds no internal locking: `insert` takes `&mut self`, so the
/// single-writer discipline is enforced by ownership rather than documented
/// as a convention. Vectors cross the API boundary by copy only.
#[derive(Debug)]
pub struct VectorIndex {
    dimensions: usize,
    capacity: usize,
    entries: Vec<Entry>,
}

impl VectorIndex {
    /// Create an empty index for vectors of `dimensions` components,
    /// holding at most `capacity` entries.
    ///
    /// Both parameters are fixed for the lifetime of the index. Zero for
    /// either is rejected: a zero-dimension or zero-capacity index could
    /// never answer a query.
    pub fn new(dimensions: usize, capacity: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::InvalidArgument(
                "dimensions must be positive".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "capacity must be positive".to_string(),
            ));
        }

        Ok(Self {
            dimensions,
            capacity,
            entries: Vec::new(),
        })
    }

    /// Get the fixed vector dimensionality
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the index is at capacity
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Append a vector under a caller-supplied identifier.
    ///
    /// Exactly `dimensions` leading components of `vector` are copied;
    /// excess length is ignored, and a shorter buffer is rejected. Ids are
    /// not required to be unique - duplicates remain independently
    /// searchable. On any error the index is unchanged.
    pub fn insert(&mut self, vector: &[f32], id: i64) -> Result<()> {
        let vector = self.checked_components(vector, "vector")?;

        if self.entries.len() == self.capacity {
            return Err(Error::IndexFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(Entry {
            id,
            vector: vector.to_vec(),
        });
        debug!(id, stored = self.entries.len(), "Vector inserted");
        Ok(())
    }

    /// Find the `k` stored vectors nearest to `query` under Euclidean
    /// distance.
    ///
    /// Exactly `dimensions` leading components of `query` are read, with
    /// the same length rules as `insert`. `k` must be in
    /// `1..=len()`; an index holding fewer than `k` entries rejects the
    /// query rather than returning a short result, so the returned list
    /// always has exactly `k` rows, ascending by distance with ties in
    /// insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        let query = self.checked_components(query, "query")?;

        if k == 0 || k > self.entries.len() {
            return Err(Error::InvalidArgument(format!(
                "k must be in 1..={}, got {}",
                self.entries.len(),
                k
            )));
        }

        let mut neighbors: Vec<Neighbor> = self
            .entries
            .iter()
            .map(|entry| Neighbor {
                id: entry.id,
                distance: euclidean_distance(query, &entry.vector),
            })
            .collect();

        // Stable sort keeps insertion order for equal distances.
        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);

        debug!(k, scanned = self.entries.len(), "Search completed");
        Ok(neighbors)
    }

    /// Validate a caller buffer and narrow it to the indexed components
    fn checked_components<'a>(&self, buf: &'a [f32], what: &str) -> Result<&'a [f32]> {
        if buf.len() < self.dimensions {
            return Err(Error::InvalidArgument(format!(
                "{} has {} components, index requires {}",
                what,
                buf.len(),
                self.dimensions
            )));
        }
        Ok(&buf[..self.dimensions])
    }
}
