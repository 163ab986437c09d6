//! Label to slot resolution

use super::category::CategorySet;
use super::record::MappedRecord;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Immutable label → slot index mapping
///
/// Built once from a [`CategorySet`]; slot indices are the label positions,
/// so they always cover `0..len()` without gaps.
#[derive(Debug, Clone)]
pub struct SlotRegistry {
    categories: CategorySet,
    slots: HashMap<String, usize>,
}

impl SlotRegistry {
    /// Create a registry for the given categories
    pub fn new(categories: &CategorySet) -> Self {
        let slots = categories
            .iter()
            .enumerate()
            .map(|(index, label)| (label.to_string(), index))
            .collect();

        Self {
            categories: categories.clone(),
            slots,
        }
    }

    /// Resolve a label to its slot index
    ///
    /// Labels are matched exactly; there is no case folding or trimming.
    pub fn resolve(&self, label: &str) -> Result<usize> {
        self.slots
            .get(label)
            .copied()
            .ok_or_else(|| Error::InvalidCategory(label.to_string()))
    }

    /// Label for a slot index
    pub fn label(&self, slot: usize) -> Option<&str> {
        self.categories.get(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Classify an item into its slot, passing both attributes through
    pub fn map_item<A, B>(&self, label: &str, attr1: A, attr2: B) -> Result<MappedRecord<A, B>> {
        let slot = self.resolve(label)?;
        Ok(MappedRecord::new(slot, attr1, attr2))
    }

    /// Map a file by size class into (slot, thickness, width)
    pub fn map_file<A, B>(
        &self,
        size_class: &str,
        thickness: A,
        width: B,
    ) -> Result<MappedRecord<A, B>> {
        self.map_item(size_class, thickness, width)
    }

    /// Map a task by priority into (slot, layer, duration)
    pub fn map_task<A, B>(
        &self,
        priority: &str,
        layer: A,
        duration: B,
    ) -> Result<MappedRecord<A, B>> {
        self.map_item(priority, layer, duration)
    }
}
