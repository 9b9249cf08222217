use super::ABSENT;
use crate::vertex::VertexIndex;

/// Dense weight grid, row-major, `capacity x capacity`.
///
/// Only the leading `len x len` block is live; every cell outside it holds
/// [`ABSENT`] so a slot handed out by `push_vertex` starts with no edges.
#[derive(Debug, Clone)]
pub struct MatrixStore {
    cells: Vec<f64>,
    capacity: usize,
    len: usize,
}

impl MatrixStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cells: vec![ABSENT; capacity * capacity],
            capacity,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn at(&self, i: VertexIndex, j: VertexIndex) -> usize {
        i * self.capacity + j
    }

    #[inline]
    fn valid(&self, i: VertexIndex) -> bool {
        i < self.len
    }

    pub fn edge_count(&self) -> usize {
        (0..self.len)
            .map(|i| (i..self.len).filter(|&j| self.cells[self.at(i, j)] < ABSENT).count())
            .sum()
    }

    pub fn push_vertex(&mut self) -> VertexIndex {
        if self.len == self.capacity {
            self.grow(self.capacity * 2);
        }
        let index = self.len;
        self.len += 1;
        self.clear_row_and_column(index);
        index
    }

    /// Reallocate to `new_capacity` and copy the live submatrix. O(n²).
    fn grow(&mut self, new_capacity: usize) {
        let mut cells = vec![ABSENT; new_capacity * new_capacity];
        for i in 0..self.len {
            let old_row = &self.cells[i * self.capacity..i * self.capacity + self.len];
            cells[i * new_capacity..i * new_capacity + self.len].copy_from_slice(old_row);
        }
        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            vertices = self.len,
            "adjacency matrix grown"
        );
        self.cells = cells;
        self.capacity = new_capacity;
    }

    fn clear_row_and_column(&mut self, index: VertexIndex) {
        for k in 0..self.capacity {
            let row = self.at(index, k);
            let col = self.at(k, index);
            self.cells[row] = ABSENT;
            self.cells[col] = ABSENT;
        }
    }

    pub fn connect(&mut self, i: VertexIndex, j: VertexIndex, weight: f64) -> bool {
        if !self.valid(i) || !self.valid(j) {
            return false;
        }
        let (ij, ji) = (self.at(i, j), self.at(j, i));
        self.cells[ij] = weight;
        self.cells[ji] = weight;
        true
    }

    pub fn disconnect(&mut self, i: VertexIndex, j: VertexIndex) -> bool {
        if self.weight(i, j).is_none() {
            return false;
        }
        let (ij, ji) = (self.at(i, j), self.at(j, i));
        self.cells[ij] = ABSENT;
        self.cells[ji] = ABSENT;
        true
    }

    pub fn weight(&self, i: VertexIndex, j: VertexIndex) -> Option<f64> {
        if !self.valid(i) || !self.valid(j) {
            return None;
        }
        let w = self.cells[self.at(i, j)];
        (w < ABSENT).then_some(w)
    }

    pub fn edges(&self, i: VertexIndex) -> RowEdges<'_> {
        let row = if self.valid(i) {
            let start = i * self.capacity;
            &self.cells[start..start + self.len]
        } else {
            &[]
        };
        RowEdges { row, next: 0 }
    }

    /// Shift rows below `index` up, columns right of it left, then clear
    /// the vacated last row and column. O(n²).
    pub fn remove_vertex(&mut self, index: VertexIndex) -> bool {
        if !self.valid(index) {
            return false;
        }
        let n = self.len;

        for i in index..n - 1 {
            for j in 0..n {
                let (dst, src) = (self.at(i, j), self.at(i + 1, j));
                self.cells[dst] = self.cells[src];
            }
        }
        for i in 0..n - 1 {
            for j in index..n - 1 {
                let (dst, src) = (self.at(i, j), self.at(i, j + 1));
                self.cells[dst] = self.cells[src];
            }
        }

        self.clear_row_and_column(n - 1);
        self.len = n - 1;
        true
    }
}

/// Finite entries of one matrix row, ascending by column.
pub struct RowEdges<'a> {
    row: &'a [f64],
    next: usize,
}

impl Iterator for RowEdges<'_> {
    type Item = (VertexIndex, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.row.len() {
            let j = self.next;
            self.next += 1;
            let w = self.row[j];
            if w < ABSENT {
                return Some((j, w));
            }
        }
        None
    }
}
