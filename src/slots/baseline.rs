//! Sort-on-insert baseline for the benchmark
//!
//! Stands in for an ordered index (B-tree, skip list) by appending and then
//! re-sorting the whole backing vector on every insert. This is deliberately
//! not a real logarithmic structure and must not be used outside benchmarks.

/// Ordered sequence that is fully re-sorted after each insertion
#[derive(Debug, Clone, Default)]
pub struct ResortingList<T> {
    data: Vec<T>,
}

impl<T: Ord> ResortingList<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append `value` and re-sort everything
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.data.sort();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0] <= w[1])
    }
}
