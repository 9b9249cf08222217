use crate::vertex::VertexIndex;

/// One entry in a vertex's neighbor list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyRecord {
    pub neighbor: VertexIndex,
    pub weight: f64,
}

/// Sparse per-vertex neighbor lists, kept in insertion order.
///
/// A pair is recorded at most once: connecting an already-connected pair
/// overwrites the weight in place on both sides.
#[derive(Debug, Clone)]
pub struct ListStore {
    lists: Vec<Vec<AdjacencyRecord>>,
    capacity: usize,
}

impl ListStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lists: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn edge_count(&self) -> usize {
        self.lists
            .iter()
            .enumerate()
            .map(|(i, list)| list.iter().filter(|r| r.neighbor >= i).count())
            .sum()
    }

    pub fn push_vertex(&mut self) -> VertexIndex {
        if self.lists.len() == self.capacity {
            let grown = self.capacity * 2;
            self.lists.reserve_exact(grown - self.lists.len());
            tracing::debug!(from = self.capacity, to = grown, "adjacency list table grown");
            self.capacity = grown;
        }
        self.lists.push(Vec::new());
        self.lists.len() - 1
    }

    pub fn records(&self, i: VertexIndex) -> &[AdjacencyRecord] {
        self.lists.get(i).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn upsert(list: &mut Vec<AdjacencyRecord>, neighbor: VertexIndex, weight: f64) {
        match list.iter_mut().find(|r| r.neighbor == neighbor) {
            Some(record) => record.weight = weight,
            None => list.push(AdjacencyRecord { neighbor, weight }),
        }
    }

    pub fn connect(&mut self, i: VertexIndex, j: VertexIndex, weight: f64) -> bool {
        let len = self.lists.len();
        if i >= len || j >= len {
            return false;
        }
        Self::upsert(&mut self.lists[i], j, weight);
        if i != j {
            Self::upsert(&mut self.lists[j], i, weight);
        }
        true
    }

    pub fn disconnect(&mut self, i: VertexIndex, j: VertexIndex) -> bool {
        let len = self.lists.len();
        if i >= len || j >= len {
            return false;
        }
        let before = self.lists[i].len();
        self.lists[i].retain(|r| r.neighbor != j);
        let removed = self.lists[i].len() != before;
        self.lists[j].retain(|r| r.neighbor != i);
        removed
    }

    pub fn weight(&self, i: VertexIndex, j: VertexIndex) -> Option<f64> {
        if j >= self.lists.len() {
            return None;
        }
        self.records(i)
            .iter()
            .find(|r| r.neighbor == j)
            .map(|r| r.weight)
    }

    /// Drop `index`'s own list, then rebuild every other list without
    /// records pointing at it, decrementing larger neighbor indices.
    pub fn remove_vertex(&mut self, index: VertexIndex) -> bool {
        if index >= self.lists.len() {
            return false;
        }
        self.lists.remove(index);
        for list in &mut self.lists {
            list.retain(|r| r.neighbor != index);
            for record in list.iter_mut() {
                if record.neighbor > index {
                    record.neighbor -= 1;
                }
            }
        }
        true
    }
}
