//! Slot-Based Size/Attribute assignment (SBSA)
//!
//! Classifies items into a small, fixed set of named categories and keeps
//! one append-only bucket per category.
//!
//! # Architecture
//!
//! ```text
//! CategorySet ["Low", "Medium", "High", "Critical"]
//!   ├─→ SlotRegistry   Low→0  Medium→1  High→2  Critical→3
//!   │     └─→ map_item("Critical", 0, 4.5) → (3, 0, 4.5)
//!   └─→ BucketedStore
//!         ├─→ Low      → [task_0]
//!         ├─→ Medium   → [task_1]
//!         ├─→ High     → [task_2]
//!         └─→ Critical → [task_3, task_4]
//!
//! BenchmarkHarness
//!   ├─→ BucketedStore  O(1) amortized per insert
//!   └─→ ResortingList  full sort per insert (baseline)
//! ```

pub mod baseline;
pub mod bench;
pub mod category;
pub mod growth;
pub mod record;
pub mod registry;
pub mod store;

#[cfg(test)]
mod proptests;

pub use baseline::ResortingList;
pub use bench::{run, BenchmarkHarness, BenchmarkReport, WorkloadItem};
pub use category::CategorySet;
pub use growth::{growth_curve, GrowthPoint};
pub use record::MappedRecord;
pub use registry::SlotRegistry;
pub use store::BucketedStore;
