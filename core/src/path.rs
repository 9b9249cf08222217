use std::collections::VecDeque;

use crate::store::{AdjacencyStore, ABSENT};
use crate::vertex::VertexIndex;

/// Result of a weighted shortest-path query.
///
/// An unreachable or invalid target gives an empty `path` and an infinite
/// `weight`; callers check [`ShortestPath::is_found`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<VertexIndex>,
    pub weight: f64,
}

impl ShortestPath {
    fn not_found() -> Self {
        Self {
            path: Vec::new(),
            weight: ABSENT,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Shortest path by hop count using BFS with predecessor tracking.
///
/// Exits as soon as the target is discovered. Returns the path including
/// both endpoints, `[start]` when `start == target`, or an empty vector
/// when either index is invalid or no path exists.
pub fn unweighted_path(
    store: &AdjacencyStore,
    start: VertexIndex,
    target: VertexIndex,
) -> Vec<VertexIndex> {
    let n = store.len();
    if start >= n || target >= n {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let mut predecessor: Vec<Option<VertexIndex>> = vec![None; n];
    let mut discovered = vec![false; n];
    let mut queue = VecDeque::new();

    discovered[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in store.neighbors(current) {
            if discovered[neighbor] {
                continue;
            }
            discovered[neighbor] = true;
            predecessor[neighbor] = Some(current);

            if neighbor == target {
                return reconstruct(&predecessor, start, target);
            }
            queue.push_back(neighbor);
        }
    }

    Vec::new()
}

/// Array-based Dijkstra, O(V²).
///
/// Each round finalizes the unvisited vertex with the smallest tentative
/// weight, preferring the lowest index on ties, and stops once the target
/// is finalized. Weights are assumed non-negative.
pub fn dijkstra(store: &AdjacencyStore, start: VertexIndex, target: VertexIndex) -> ShortestPath {
    let n = store.len();
    if start >= n || target >= n {
        return ShortestPath::not_found();
    }
    if start == target {
        return ShortestPath {
            path: vec![start],
            weight: 0.0,
        };
    }

    let mut weight = vec![ABSENT; n];
    let mut finalized = vec![false; n];
    let mut predecessor: Vec<Option<VertexIndex>> = vec![None; n];
    weight[start] = 0.0;

    for _ in 0..n {
        let Some(u) = next_closest(&weight, &finalized) else {
            break;
        };
        finalized[u] = true;
        if u == target {
            break;
        }

        for (v, edge_weight) in store.edges(u) {
            if finalized[v] {
                continue;
            }
            let candidate = weight[u] + edge_weight;
            if candidate < weight[v] {
                weight[v] = candidate;
                predecessor[v] = Some(u);
            }
        }
    }

    if weight[target] == ABSENT {
        return ShortestPath::not_found();
    }

    let result = ShortestPath {
        path: reconstruct(&predecessor, start, target),
        weight: weight[target],
    };
    tracing::trace!(start, target, hops = result.hops(), weight = result.weight, "dijkstra");
    result
}

/// Unvisited vertex with the minimum finite tentative weight; the strict
/// comparison keeps the lowest index among equals.
fn next_closest(weight: &[f64], finalized: &[bool]) -> Option<VertexIndex> {
    let mut best: Option<VertexIndex> = None;
    let mut best_weight = ABSENT;
    for (j, &w) in weight.iter().enumerate() {
        if !finalized[j] && w < best_weight {
            best_weight = w;
            best = Some(j);
        }
    }
    best
}

/// Walk predecessors from `target` back to `start`, then reverse.
fn reconstruct(
    predecessor: &[Option<VertexIndex>],
    start: VertexIndex,
    target: VertexIndex,
) -> Vec<VertexIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessor[current] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Representation;

    const BOTH: [Representation; 2] = [Representation::Matrix, Representation::List];

    fn make_store(repr: Representation, n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyStore {
        let mut store = AdjacencyStore::new(repr, 4);
        for _ in 0..n {
            store.push_vertex();
        }
        for &(a, b, w) in edges {
            store.connect(a, b, w);
        }
        store
    }

    fn make_chain(repr: Representation, n: usize) -> AdjacencyStore {
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1, 1.0)).collect();
        make_store(repr, n, &edges)
    }

    fn make_cycle(repr: Representation, n: usize) -> AdjacencyStore {
        let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, 1.0)).collect();
        make_store(repr, n, &edges)
    }

    // --- Unweighted ---

    #[test]
    fn test_unweighted_chain() {
        for repr in BOTH {
            let store = make_chain(repr, 6);
            assert_eq!(unweighted_path(&store, 0, 5), vec![0, 1, 2, 3, 4, 5]);
            assert_eq!(unweighted_path(&store, 5, 2), vec![5, 4, 3, 2]);
        }
    }

    #[test]
    fn test_unweighted_cycle_takes_short_way() {
        for repr in BOTH {
            let store = make_cycle(repr, 6);
            assert_eq!(unweighted_path(&store, 0, 4), vec![0, 5, 4]);
        }
    }

    #[test]
    fn test_unweighted_ignores_weights() {
        for repr in BOTH {
            let store = make_store(repr, 3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 100.0)]);
            assert_eq!(unweighted_path(&store, 0, 2), vec![0, 2]);
        }
    }

    #[test]
    fn test_unweighted_self() {
        for repr in BOTH {
            let store = make_chain(repr, 3);
            assert_eq!(unweighted_path(&store, 1, 1), vec![1]);
        }
    }

    #[test]
    fn test_unweighted_no_path() {
        for repr in BOTH {
            let store = make_store(repr, 3, &[(0, 1, 1.0)]);
            assert!(unweighted_path(&store, 0, 2).is_empty());
        }
    }

    #[test]
    fn test_unweighted_invalid_indices() {
        for repr in BOTH {
            let store = make_chain(repr, 3);
            assert!(unweighted_path(&store, 9, 0).is_empty());
            assert!(unweighted_path(&store, 0, 9).is_empty());
        }
    }

    // --- Dijkstra ---

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        for repr in BOTH {
            let store = make_store(repr, 3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 100.0)]);
            let sp = dijkstra(&store, 0, 2);
            assert_eq!(sp.path, vec![0, 1, 2]);
            assert_eq!(sp.weight, 2.0);
            assert_eq!(sp.hops(), 2);
        }
    }

    #[test]
    fn test_dijkstra_scenario_with_expensive_branch() {
        // A=0, B=1, C=2, D=3
        for repr in BOTH {
            let store = make_store(repr, 4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 3, 5.0)]);
            let sp = dijkstra(&store, 0, 2);
            assert_eq!(sp.path, vec![0, 1, 2]);
            assert_eq!(sp.weight, 2.0);
            assert_eq!(dijkstra(&store, 2, 3).weight, 7.0);
        }
    }

    #[test]
    fn test_dijkstra_self_path_ignores_self_loop() {
        for repr in BOTH {
            let store = make_store(repr, 2, &[(0, 0, 3.0), (0, 1, 1.0)]);
            let sp = dijkstra(&store, 0, 0);
            assert_eq!(sp.path, vec![0]);
            assert_eq!(sp.weight, 0.0);
        }
    }

    #[test]
    fn test_dijkstra_unreachable() {
        for repr in BOTH {
            let store = make_store(repr, 2, &[]);
            let sp = dijkstra(&store, 0, 1);
            assert!(!sp.is_found());
            assert!(sp.path.is_empty());
            assert_eq!(sp.weight, f64::INFINITY);
        }
    }

    #[test]
    fn test_dijkstra_invalid_indices() {
        for repr in BOTH {
            let store = make_chain(repr, 2);
            assert_eq!(dijkstra(&store, 0, 5).weight, f64::INFINITY);
            assert!(dijkstra(&store, 5, 0).path.is_empty());
        }
    }

    #[test]
    fn test_dijkstra_tie_break_lowest_index() {
        // Two equal-cost routes 0-1-3 and 0-2-3; vertex 1 is finalized first,
        // so 3 is reached through 1.
        for repr in BOTH {
            let store = make_store(
                repr,
                4,
                &[(0, 2, 1.0), (2, 3, 1.0), (0, 1, 1.0), (1, 3, 1.0)],
            );
            assert_eq!(dijkstra(&store, 0, 3).path, vec![0, 1, 3]);
        }
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        for repr in BOTH {
            let store = make_store(repr, 3, &[(0, 1, 0.0), (1, 2, 0.0)]);
            let sp = dijkstra(&store, 0, 2);
            assert_eq!(sp.path, vec![0, 1, 2]);
            assert_eq!(sp.weight, 0.0);
        }
    }

    #[test]
    fn test_dijkstra_matches_hops_on_unit_weights() {
        for repr in BOTH {
            let store = make_cycle(repr, 9);
            for target in 0..9 {
                let sp = dijkstra(&store, 0, target);
                let hops = unweighted_path(&store, 0, target).len() - 1;
                assert_eq!(sp.weight, hops as f64);
            }
        }
    }
}
