//! Adjacency storage: one contract, two strategies.
//!
//! Dispatch goes through an enum rather than `dyn` so traversal loops
//! compile down to direct slice iteration for either strategy.

mod list;
mod matrix;

pub use list::{AdjacencyRecord, ListStore};
pub use matrix::{MatrixStore, RowEdges};

use crate::config::Representation;
use crate::vertex::VertexIndex;

/// Weight stored for "no edge".
pub const ABSENT: f64 = f64::INFINITY;

/// Connectivity and weights between vertex indices.
///
/// Every edge is undirected and recorded on both endpoints with the same
/// weight. Out-of-range indices are ignored rather than panicking.
#[derive(Debug, Clone)]
pub enum AdjacencyStore {
    Matrix(MatrixStore),
    List(ListStore),
}

impl AdjacencyStore {
    pub fn new(representation: Representation, capacity: usize) -> Self {
        match representation {
            Representation::Matrix => AdjacencyStore::Matrix(MatrixStore::with_capacity(capacity)),
            Representation::List => AdjacencyStore::List(ListStore::with_capacity(capacity)),
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            AdjacencyStore::Matrix(_) => Representation::Matrix,
            AdjacencyStore::List(_) => Representation::List,
        }
    }

    /// Number of live vertex slots.
    pub fn len(&self) -> usize {
        match self {
            AdjacencyStore::Matrix(m) => m.len(),
            AdjacencyStore::List(l) => l.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        match self {
            AdjacencyStore::Matrix(m) => m.capacity(),
            AdjacencyStore::List(l) => l.capacity(),
        }
    }

    /// Number of undirected edges (self loops count once).
    pub fn edge_count(&self) -> usize {
        match self {
            AdjacencyStore::Matrix(m) => m.edge_count(),
            AdjacencyStore::List(l) => l.edge_count(),
        }
    }

    /// Open a slot for a new vertex at index `len`, growing if needed.
    pub fn push_vertex(&mut self) -> VertexIndex {
        match self {
            AdjacencyStore::Matrix(m) => m.push_vertex(),
            AdjacencyStore::List(l) => l.push_vertex(),
        }
    }

    /// Record `i <-> j` with `weight`, replacing any existing weight.
    /// Returns false if either index is out of range.
    pub fn connect(&mut self, i: VertexIndex, j: VertexIndex, weight: f64) -> bool {
        match self {
            AdjacencyStore::Matrix(m) => m.connect(i, j, weight),
            AdjacencyStore::List(l) => l.connect(i, j, weight),
        }
    }

    /// Drop the edge `i <-> j`. Returns true if one was present.
    pub fn disconnect(&mut self, i: VertexIndex, j: VertexIndex) -> bool {
        match self {
            AdjacencyStore::Matrix(m) => m.disconnect(i, j),
            AdjacencyStore::List(l) => l.disconnect(i, j),
        }
    }

    pub fn weight(&self, i: VertexIndex, j: VertexIndex) -> Option<f64> {
        match self {
            AdjacencyStore::Matrix(m) => m.weight(i, j),
            AdjacencyStore::List(l) => l.weight(i, j),
        }
    }

    /// Incident edges of `i` as `(neighbor, weight)`, in the strategy's
    /// adjacency order. Empty for an invalid index.
    pub fn edges(&self, i: VertexIndex) -> Edges<'_> {
        match self {
            AdjacencyStore::Matrix(m) => Edges::Matrix(m.edges(i)),
            AdjacencyStore::List(l) => Edges::List(l.records(i).iter()),
        }
    }

    /// Neighbor indices of `i`, lazily.
    pub fn neighbors(&self, i: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.edges(i).map(|(j, _)| j)
    }

    /// Drop every edge touching `i` and shift all greater indices down by one.
    pub fn remove_vertex(&mut self, i: VertexIndex) -> bool {
        match self {
            AdjacencyStore::Matrix(m) => m.remove_vertex(i),
            AdjacencyStore::List(l) => l.remove_vertex(i),
        }
    }
}

/// Iterator over `(neighbor, weight)` pairs of one vertex.
pub enum Edges<'a> {
    Matrix(RowEdges<'a>),
    List(std::slice::Iter<'a, AdjacencyRecord>),
}

impl Iterator for Edges<'_> {
    type Item = (VertexIndex, f64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Edges::Matrix(row) => row.next(),
            Edges::List(records) => records.next().map(|r| (r.neighbor, r.weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(capacity: usize) -> [AdjacencyStore; 2] {
        [
            AdjacencyStore::new(Representation::Matrix, capacity),
            AdjacencyStore::new(Representation::List, capacity),
        ]
    }

    fn filled(store: &mut AdjacencyStore, n: usize) {
        for _ in 0..n {
            store.push_vertex();
        }
    }

    #[test]
    fn test_symmetric_connect() {
        for mut store in both(4) {
            filled(&mut store, 3);
            assert!(store.connect(0, 2, 4.5));
            assert_eq!(store.weight(0, 2), Some(4.5));
            assert_eq!(store.weight(2, 0), Some(4.5));
            assert_eq!(store.neighbors(2).collect::<Vec<_>>(), vec![0]);
            assert_eq!(store.edge_count(), 1);
        }
    }

    #[test]
    fn test_connect_out_of_range_is_ignored() {
        for mut store in both(4) {
            filled(&mut store, 2);
            assert!(!store.connect(0, 2, 1.0));
            assert!(!store.connect(7, 0, 1.0));
            assert_eq!(store.edge_count(), 0);
            assert_eq!(store.neighbors(9).count(), 0);
        }
    }

    #[test]
    fn test_reconnect_overwrites_weight() {
        for mut store in both(4) {
            filled(&mut store, 2);
            store.connect(0, 1, 3.0);
            store.connect(1, 0, 7.0);
            assert_eq!(store.weight(0, 1), Some(7.0));
            assert_eq!(store.neighbors(0).count(), 1);
            assert_eq!(store.edge_count(), 1);
        }
    }

    #[test]
    fn test_disconnect() {
        for mut store in both(4) {
            filled(&mut store, 3);
            store.connect(0, 1, 1.0);
            store.connect(1, 2, 1.0);
            assert!(store.disconnect(1, 0));
            assert!(!store.disconnect(0, 1));
            assert_eq!(store.weight(0, 1), None);
            assert_eq!(store.neighbors(1).collect::<Vec<_>>(), vec![2]);
        }
    }

    #[test]
    fn test_self_loop_recorded_once() {
        for mut store in both(2) {
            filled(&mut store, 1);
            store.connect(0, 0, 2.0);
            assert_eq!(store.neighbors(0).collect::<Vec<_>>(), vec![0]);
            assert_eq!(store.edge_count(), 1);
        }
    }

    #[test]
    fn test_growth_keeps_edges() {
        for mut store in both(2) {
            filled(&mut store, 2);
            store.connect(0, 1, 9.0);
            filled(&mut store, 13);
            assert_eq!(store.len(), 15);
            assert!(store.capacity() >= 15);
            assert_eq!(store.weight(1, 0), Some(9.0));
            store.connect(0, 14, 2.0);
            assert_eq!(store.weight(14, 0), Some(2.0));
            assert_eq!(store.edge_count(), 2);
        }
    }

    #[test]
    fn test_remove_vertex_reindexes() {
        // 0-1, 1-2, 2-3, 0-3; remove 1 => old 2,3 become 1,2
        for mut store in both(4) {
            filled(&mut store, 4);
            store.connect(0, 1, 1.0);
            store.connect(1, 2, 2.0);
            store.connect(2, 3, 3.0);
            store.connect(0, 3, 4.0);
            assert!(store.remove_vertex(1));
            assert_eq!(store.len(), 3);
            assert_eq!(store.edge_count(), 2);
            assert_eq!(store.weight(1, 2), Some(3.0));
            assert_eq!(store.weight(0, 2), Some(4.0));
            assert_eq!(store.weight(0, 1), None);
            assert!(store.neighbors(0).all(|j| j < 3));
        }
    }

    #[test]
    fn test_remove_vertex_out_of_range() {
        for mut store in both(2) {
            filled(&mut store, 1);
            assert!(!store.remove_vertex(1));
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn test_slot_reused_after_removal_is_clean() {
        for mut store in both(3) {
            filled(&mut store, 3);
            store.connect(0, 2, 1.0);
            store.connect(1, 2, 1.0);
            store.remove_vertex(2);
            let fresh = store.push_vertex();
            assert_eq!(fresh, 2);
            assert_eq!(store.neighbors(fresh).count(), 0);
            assert_eq!(store.edge_count(), 0);
        }
    }

    #[test]
    fn test_neighbor_order_per_strategy() {
        let [mut matrix, mut list] = both(4);
        for store in [&mut matrix, &mut list] {
            filled(store, 4);
            store.connect(0, 3, 1.0);
            store.connect(0, 1, 1.0);
            store.connect(0, 2, 1.0);
        }
        assert_eq!(matrix.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.neighbors(0).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
