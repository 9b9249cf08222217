use std::collections::VecDeque;

use crate::store::{AdjacencyStore, Edges};
use crate::vertex::VertexIndex;

/// Per-vertex traversal state. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// Discovered, not yet fully expanded.
    Frontier,
    Visited,
}

/// Breadth-first traversal from a start index.
///
/// Yields vertices in non-decreasing hop distance from the start; ties
/// follow the store's adjacency order. An invalid start yields nothing.
pub struct Bfs<'a> {
    store: &'a AdjacencyStore,
    state: Vec<VisitState>,
    queue: VecDeque<VertexIndex>,
}

impl<'a> Bfs<'a> {
    pub fn new(store: &'a AdjacencyStore, start: VertexIndex) -> Self {
        let mut state = vec![VisitState::Unvisited; store.len()];
        let mut queue = VecDeque::new();
        if start < store.len() {
            state[start] = VisitState::Frontier;
            queue.push_back(start);
        }
        Self { store, state, queue }
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<VertexIndex> {
        let current = self.queue.pop_front()?;
        self.state[current] = VisitState::Visited;
        for neighbor in self.store.neighbors(current) {
            if self.state[neighbor] == VisitState::Unvisited {
                self.state[neighbor] = VisitState::Frontier;
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }
}

/// Depth-first pre-order traversal with an explicit stack.
///
/// A vertex is yielded when it is pushed. Each stack frame keeps its own
/// cursor into the adjacency sequence, so the top frame resumes where it
/// left off and is popped only once no unvisited neighbor remains.
pub struct Dfs<'a> {
    store: &'a AdjacencyStore,
    state: Vec<VisitState>,
    stack: Vec<(VertexIndex, Edges<'a>)>,
    pending: Option<VertexIndex>,
}

impl<'a> Dfs<'a> {
    pub fn new(store: &'a AdjacencyStore, start: VertexIndex) -> Self {
        let mut state = vec![VisitState::Unvisited; store.len()];
        let mut stack = Vec::new();
        let mut pending = None;
        if start < store.len() {
            state[start] = VisitState::Frontier;
            stack.push((start, store.edges(start)));
            pending = Some(start);
        }
        Self {
            store,
            state,
            stack,
            pending,
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<VertexIndex> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        loop {
            let descend = {
                let (_, cursor) = self.stack.last_mut()?;
                let state = &self.state;
                cursor
                    .map(|(j, _)| j)
                    .find(|&j| state[j] == VisitState::Unvisited)
            };

            match descend {
                Some(next) => {
                    self.state[next] = VisitState::Frontier;
                    self.stack.push((next, self.store.edges(next)));
                    return Some(next);
                }
                None => {
                    if let Some((done, _)) = self.stack.pop() {
                        self.state[done] = VisitState::Visited;
                    }
                }
            }
        }
    }
}

/// True iff a BFS from index 0 reaches every vertex. An empty store is
/// not connected.
pub fn is_connected(store: &AdjacencyStore) -> bool {
    if store.is_empty() {
        return false;
    }
    Bfs::new(store, 0).count() == store.len()
}
