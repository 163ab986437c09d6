//! Bucketed item store
//!
//! One append-only bucket per category. Insertion resolves the label through
//! the store's [`SlotRegistry`] and pushes onto that slot's `Vec`, so its cost
//! does not depend on how many items or categories the store holds.

use super::category::CategorySet;
use super::registry::SlotRegistry;
use crate::error::Result;

/// Per-category item buckets
#[derive(Debug, Clone)]
pub struct BucketedStore<T> {
    registry: SlotRegistry,
    /// Indexed by slot
    buckets: Vec<Vec<T>>,
    len: usize,
}

impl<T> BucketedStore<T> {
    /// Create a store with one empty bucket per category
    pub fn new(categories: &CategorySet) -> Self {
        Self::with_capacity(categories, 0)
    }

    /// Create a store with `per_bucket` items reserved in every bucket
    pub fn with_capacity(categories: &CategorySet, per_bucket: usize) -> Self {
        let registry = SlotRegistry::new(categories);
        let buckets = (0..registry.len())
            .map(|_| Vec::with_capacity(per_bucket))
            .collect();

        Self {
            registry,
            buckets,
            len: 0,
        }
    }

    /// Append an item to the bucket for `label`
    ///
    /// Fails with `InvalidCategory` for labels outside the set; the store is
    /// left untouched in that case.
    pub fn insert(&mut self, label: &str, item: T) -> Result<()> {
        let slot = self.registry.resolve(label)?;
        self.buckets[slot].push(item);
        self.len += 1;
        Ok(())
    }

    /// Items in a bucket, in insertion order
    pub fn bucket(&self, label: &str) -> Result<&[T]> {
        let slot = self.registry.resolve(label)?;
        Ok(&self.buckets[slot])
    }

    pub fn bucket_len(&self, label: &str) -> Result<usize> {
        self.bucket(label).map(<[T]>::len)
    }

    /// Total number of items across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Item count per bucket, in category order
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.iter().map(|(label, items)| (label, items.len())).collect()
    }

    /// Buckets in category order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.registry
            .categories()
            .iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }
}
