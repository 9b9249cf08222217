/// Dense index assigned to a vertex. Always in `0..len`.
pub type VertexIndex = usize;

/// Bidirectional mapping between payloads and dense indices.
///
/// Slots are kept contiguous: removing a vertex shifts every later payload
/// down by one, so the adjacency store must be reindexed in step.
#[derive(Debug, Clone)]
pub struct VertexTable<P> {
    slots: Vec<P>,
    capacity: usize,
}

impl<P> VertexTable<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a payload at the next free index, doubling capacity when full.
    pub fn add(&mut self, payload: P) -> VertexIndex {
        if self.slots.len() == self.capacity {
            self.capacity *= 2;
            self.slots.reserve_exact(self.capacity - self.slots.len());
        }
        self.slots.push(payload);
        self.slots.len() - 1
    }

    /// Remove the payload at `index`, shifting later slots down.
    pub fn remove(&mut self, index: VertexIndex) -> Option<P> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: VertexIndex) -> Option<&P> {
        self.slots.get(index)
    }

    pub fn is_valid(&self, index: VertexIndex) -> bool {
        index < self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Logical capacity. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.slots.iter()
    }
}

impl<P: PartialEq> VertexTable<P> {
    /// Linear equality scan. Returns the first match.
    pub fn index_of(&self, payload: &P) -> Option<VertexIndex> {
        self.slots.iter().position(|p| p == payload)
    }
}
