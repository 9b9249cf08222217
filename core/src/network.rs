use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{NetworkConfig, Representation};
use crate::error::{check_weight, Endpoint, GraphError};
use crate::path::{dijkstra, unweighted_path};
use crate::store::{AdjacencyStore, ABSENT};
use crate::traversal::{is_connected, Bfs, Dfs};
use crate::vertex::{VertexIndex, VertexTable};

/// Weight given to edges added without an explicit cost.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Edge descriptor as supplied by a map loader.
///
/// A missing `weight` means [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<P> {
    pub from: P,
    pub to: P,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl<P> EdgeRecord<P> {
    pub fn new(from: P, to: P) -> Self {
        Self { from, to, weight: None }
    }

    pub fn weighted(from: P, to: P, weight: f64) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }
}

/// Outcome of [`Network::load_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Undirected weighted network keyed by payload.
///
/// Payloads are compared by value: two equal payloads denote the same
/// vertex. Every query returns an owned snapshot, so results stay valid
/// after later mutation. Lookups by payload are linear scans.
#[derive(Debug, Clone)]
pub struct Network<P> {
    vertices: VertexTable<P>,
    store: AdjacencyStore,
}

impl<P> Network<P> {
    /// Empty network with the default configuration (list strategy).
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        let capacity = config.effective_capacity();
        Self {
            vertices: VertexTable::with_capacity(capacity),
            store: AdjacencyStore::new(config.representation, capacity),
        }
    }

    /// Empty network backed by the dense matrix strategy.
    pub fn matrix() -> Self {
        Self::with_config(NetworkConfig::new(Representation::Matrix))
    }

    /// Empty network backed by the sparse list strategy.
    pub fn list() -> Self {
        Self::with_config(NetworkConfig::new(Representation::List))
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    pub fn representation(&self) -> Representation {
        self.store.representation()
    }

    /// Payload at `index`, if live.
    pub fn vertex(&self, index: VertexIndex) -> Option<&P> {
        self.vertices.get(index)
    }

    /// All payloads in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &P> + '_ {
        self.vertices.iter()
    }

    /// First payload matching `predicate`, in index order.
    pub fn find<F>(&self, mut predicate: F) -> Option<&P>
    where
        F: FnMut(&P) -> bool,
    {
        self.vertices.iter().find(|p| predicate(*p))
    }

    /// True iff the vertices form a single component. Empty is not connected.
    pub fn is_connected(&self) -> bool {
        is_connected(&self.store)
    }

    fn payloads(&self, indices: impl IntoIterator<Item = VertexIndex>) -> Vec<P>
    where
        P: Clone,
    {
        indices
            .into_iter()
            .filter_map(|i| self.vertices.get(i).cloned())
            .collect()
    }
}

impl<P: PartialEq> Network<P> {
    pub fn index_of(&self, payload: &P) -> Option<VertexIndex> {
        self.vertices.index_of(payload)
    }

    pub fn contains(&self, payload: &P) -> bool {
        self.index_of(payload).is_some()
    }

    fn resolve(&self, a: &P, b: &P) -> Result<(VertexIndex, VertexIndex), GraphError> {
        let i = self
            .index_of(a)
            .ok_or(GraphError::VertexNotFound(Endpoint::Source))?;
        let j = self
            .index_of(b)
            .ok_or(GraphError::VertexNotFound(Endpoint::Destination))?;
        Ok((i, j))
    }

    /// Insert a vertex and return its index.
    ///
    /// A payload equal to an existing vertex is not inserted again; the
    /// existing index is returned.
    pub fn add_vertex(&mut self, payload: P) -> VertexIndex {
        if let Some(existing) = self.index_of(&payload) {
            return existing;
        }
        let index = self.vertices.add(payload);
        let slot = self.store.push_vertex();
        debug_assert_eq!(index, slot, "vertex table and adjacency store out of step");
        index
    }

    /// Connect two vertices with [`DEFAULT_WEIGHT`]. Returns false if either
    /// vertex is missing.
    pub fn add_edge(&mut self, a: &P, b: &P) -> bool {
        self.add_weighted_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Connect two vertices, replacing any existing weight between them.
    ///
    /// Missing vertices and invalid weights leave the network unchanged and
    /// return false; use [`Network::try_add_edge`] to learn why.
    pub fn add_weighted_edge(&mut self, a: &P, b: &P, weight: f64) -> bool {
        match self.try_add_edge(a, b, weight) {
            Ok(()) => true,
            Err(err @ GraphError::InvalidWeight(_)) => {
                tracing::warn!(error = %err, "edge rejected");
                false
            }
            Err(_) => false,
        }
    }

    pub fn try_add_edge(&mut self, a: &P, b: &P, weight: f64) -> Result<(), GraphError> {
        let weight = check_weight(weight)?;
        let (i, j) = self.resolve(a, b)?;
        self.store.connect(i, j, weight);
        Ok(())
    }

    /// Remove a vertex and every edge touching it. Later vertices move down
    /// one index. Returns the removed payload, or None if absent.
    pub fn remove_vertex(&mut self, payload: &P) -> Option<P> {
        let index = self.index_of(payload)?;
        let removed = self.vertices.remove(index)?;
        self.store.remove_vertex(index);
        tracing::debug!(index, remaining = self.vertices.len(), "vertex removed, indices renumbered");
        Some(removed)
    }

    /// Returns true if an edge was removed.
    pub fn remove_edge(&mut self, a: &P, b: &P) -> bool {
        match self.resolve(a, b) {
            Ok((i, j)) => self.store.disconnect(i, j),
            Err(_) => false,
        }
    }

    pub fn edge_weight(&self, a: &P, b: &P) -> Option<f64> {
        let (i, j) = self.resolve(a, b).ok()?;
        self.store.weight(i, j)
    }

    pub fn has_edge(&self, a: &P, b: &P) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Neighbors of `payload` in adjacency order, borrowed and lazy.
    pub fn neighbors_iter<'a>(&'a self, payload: &P) -> impl Iterator<Item = &'a P> + 'a {
        let index = self.index_of(payload).unwrap_or(usize::MAX);
        self.store
            .neighbors(index)
            .filter_map(move |j| self.vertices.get(j))
    }

    /// Total weight of the cheapest path, `0.0` for a vertex to itself, or
    /// `f64::INFINITY` when no path exists or either vertex is missing.
    pub fn path_weight(&self, a: &P, b: &P) -> f64 {
        match self.resolve(a, b) {
            Ok((i, j)) => dijkstra(&self.store, i, j).weight,
            Err(_) => ABSENT,
        }
    }

    /// Add every record, skipping (and logging) those that name a missing
    /// vertex or carry an invalid weight.
    pub fn load_edges<I>(&mut self, records: I) -> LoadSummary
    where
        I: IntoIterator<Item = EdgeRecord<P>>,
    {
        let mut summary = LoadSummary::default();
        for record in records {
            let weight = record.weight.unwrap_or(DEFAULT_WEIGHT);
            match self.try_add_edge(&record.from, &record.to, weight) {
                Ok(()) => summary.added += 1,
                Err(err) => {
                    tracing::warn!(error = %err, "edge record skipped");
                    summary.skipped += 1;
                }
            }
        }
        tracing::debug!(
            added = summary.added,
            skipped = summary.skipped,
            edges = self.edge_count(),
            "edge records loaded"
        );
        summary
    }
}

impl<P: PartialEq + Clone> Network<P> {
    /// Snapshot of the neighbors of `payload`; empty if it is absent.
    pub fn neighbors(&self, payload: &P) -> Vec<P> {
        self.neighbors_iter(payload).cloned().collect()
    }

    /// Breadth-first order from `start`; empty if it is absent.
    pub fn bfs(&self, start: &P) -> Vec<P> {
        match self.index_of(start) {
            Some(i) => self.payloads(Bfs::new(&self.store, i)),
            None => Vec::new(),
        }
    }

    /// Depth-first pre-order from `start`; empty if it is absent.
    pub fn dfs(&self, start: &P) -> Vec<P> {
        match self.index_of(start) {
            Some(i) => self.payloads(Dfs::new(&self.store, i)),
            None => Vec::new(),
        }
    }

    /// Cheapest path by total weight, endpoints included. Empty when no
    /// path exists or either vertex is missing.
    pub fn shortest_path(&self, a: &P, b: &P) -> Vec<P> {
        match self.resolve(a, b) {
            Ok((i, j)) => self.payloads(dijkstra(&self.store, i, j).path),
            Err(_) => Vec::new(),
        }
    }

    /// Path with the fewest edges, ignoring weights.
    pub fn fewest_hops_path(&self, a: &P, b: &P) -> Vec<P> {
        match self.resolve(a, b) {
            Ok((i, j)) => self.payloads(unweighted_path(&self.store, i, j)),
            Err(_) => Vec::new(),
        }
    }
}

impl<P> Default for Network<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex: `payload -> [(neighbor, weight), ...]`.
impl<P: fmt::Display> fmt::Display for Network<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, payload) in self.vertices.iter().enumerate() {
            write!(f, "{} -> [", payload)?;
            for (k, (j, w)) in self.store.edges(i).enumerate() {
                if k > 0 {
                    f.write_str(", ")?;
                }
                match self.vertices.get(j) {
                    Some(neighbor) => write!(f, "({}, {})", neighbor, w)?,
                    None => write!(f, "(#{}, {})", j, w)?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
