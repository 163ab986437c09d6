//! Category sets for slot assignment

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// File size classes used by the speed test
pub const SIZE_CLASSES: [&str; 6] = ["1K", "2K", "4K", "8K", "16K", "32K"];

/// Task priority classes used by the task manager
pub const PRIORITY_CLASSES: [&str; 4] = ["Low", "Medium", "High", "Critical"];

/// Size and priority classes in a single table
pub const COMBINED_CLASSES: [&str; 10] = [
    "1KB", "2KB", "4KB", "8KB", "16KB", "32KB", "Low", "Medium", "High", "Critical",
];

/// An ordered set of unique category labels
///
/// The position of a label is its slot index. The set is fixed once built;
/// registries and stores each take it by reference at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a category set, rejecting empty input and repeated labels
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyCategorySet);
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(Error::DuplicateCategory(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// `1K` through `32K`
    pub fn size_classes() -> Self {
        Self::from_static(&SIZE_CLASSES)
    }

    /// `Low`, `Medium`, `High`, `Critical`
    pub fn priority_classes() -> Self {
        Self::from_static(&PRIORITY_CLASSES)
    }

    /// Size classes followed by priority classes
    pub fn combined() -> Self {
        Self::from_static(&COMBINED_CLASSES)
    }

    // Presets are unique and non-empty, so validation is skipped.
    fn from_static(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Label at a slot index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.labels
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}
