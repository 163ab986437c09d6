//! SBSA vs sort-on-insert benchmark harness
//!
//! Generates a synthetic file workload, then times one full insertion pass
//! into a fresh [`BucketedStore`] and one into a fresh [`ResortingList`].
//! Both passes borrow the same workload so no allocation is timed.

use super::baseline::ResortingList;
use super::category::CategorySet;
use super::store::BucketedStore;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One synthetic (category, id) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadItem {
    pub category: String,
    pub item_id: String,
}

/// Timings for one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Items inserted into each structure
    pub num_items: usize,
    /// Number of categories drawn from
    pub categories: usize,
    /// Wall-clock time of the bucketed pass
    pub bucketed: Duration,
    /// Wall-clock time of the sort-on-insert pass
    pub resorting: Duration,
    /// `resorting / bucketed`
    pub speedup: f64,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items: {} across {} categories", self.num_items, self.categories)?;
        writeln!(f, "SBSA Time: {:.4} seconds", self.bucketed.as_secs_f64())?;
        writeln!(
            f,
            "Simulated B-tree Time: {:.4} seconds",
            self.resorting.as_secs_f64()
        )?;
        write!(f, "Speedup: {:.1}x faster (SBSA vs log n)", self.speedup)
    }
}

/// Drives the comparison for one category set
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    categories: CategorySet,
    seed: Option<u64>,
}

impl BenchmarkHarness {
    /// Create an unseeded harness
    pub fn new(categories: CategorySet) -> Self {
        Self {
            categories,
            seed: None,
        }
    }

    /// Fix the workload RNG seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate `num_items` items named `file_{i}` with uniformly drawn categories
    pub fn generate_workload(&self, num_items: usize) -> Vec<WorkloadItem> {
        let mut rng = self.rng();
        let labels = self.categories.labels();

        (0..num_items)
            .map(|i| WorkloadItem {
                category: labels[rng.gen_range(0..labels.len())].clone(),
                item_id: format!("file_{}", i),
            })
            .collect()
    }

    /// Time both structures over a fresh workload of `num_items` items
    pub fn run(&self, num_items: usize) -> Result<BenchmarkReport> {
        if num_items == 0 {
            return Err(Error::InvalidInput(
                "benchmark requires at least one item".to_string(),
            ));
        }

        let workload = self.generate_workload(num_items);

        let start = Instant::now();
        let store = bucketed_pass(&self.categories, &workload)?;
        let bucketed = start.elapsed();

        debug!(counts = ?store.counts(), "Bucketed pass complete");
        if store.len() != num_items {
            return Err(Error::InvalidInput(format!(
                "bucketed pass stored {} of {} items",
                store.len(),
                num_items
            )));
        }

        let start = Instant::now();
        let list = resorting_pass(&workload);
        let resorting = start.elapsed();

        debug!(len = list.len(), "Resorting pass complete");

        if bucketed.is_zero() {
            return Err(Error::InvalidInput(format!(
                "bucketed pass over {} items measured zero time",
                num_items
            )));
        }

        let speedup = resorting.as_secs_f64() / bucketed.as_secs_f64();

        info!(
            num_items,
            categories = self.categories.len(),
            bucketed_us = bucketed.as_micros() as u64,
            resorting_us = resorting.as_micros() as u64,
            speedup,
            "Benchmark run complete"
        );

        Ok(BenchmarkReport {
            num_items,
            categories: self.categories.len(),
            bucketed,
            resorting,
            speedup,
        })
    }

    /// Run once per workload size, in the given order
    pub fn sweep(&self, sizes: &[usize]) -> Result<Vec<BenchmarkReport>> {
        info!(sizes = ?sizes, "Starting benchmark sweep");
        sizes.iter().map(|&n| self.run(n)).collect()
    }
}

/// Run a single unseeded benchmark
pub fn run(num_items: usize, categories: &CategorySet) -> Result<BenchmarkReport> {
    BenchmarkHarness::new(categories.clone()).run(num_items)
}

fn bucketed_pass<'a>(
    categories: &CategorySet,
    workload: &'a [WorkloadItem],
) -> Result<BucketedStore<&'a str>> {
    let mut store = BucketedStore::new(categories);
    for item in workload {
        store.insert(&item.category, item.item_id.as_str())?;
    }
    Ok(store)
}

fn resorting_pass(workload: &[WorkloadItem]) -> ResortingList<&str> {
    let mut list = ResortingList::new();
    for item in workload {
        list.insert(item.item_id.as_str());
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_shape() {
        let harness = BenchmarkHarness::new(CategorySet::size_classes()).with_seed(7);
        let workload = harness.generate_workload(100);

        assert_eq!(workload.len(), 100);
        assert_eq!(workload[0].item_id, "file_0");
        assert_eq!(workload[99].item_id, "file_99");
        assert!(workload
            .iter()
            .all(|item| harness.categories().contains(&item.category)));
    }

    #[test]
    fn test_seeded_workload_is_reproducible() {
        let harness = BenchmarkHarness::new(CategorySet::priority_classes()).with_seed(42);
        assert_eq!(harness.generate_workload(500), harness.generate_workload(500));
        assert_eq!(harness.seed(), Some(42));
    }

    #[test]
    fn test_workload_uses_every_category() {
        let harness = BenchmarkHarness::new(CategorySet::priority_classes()).with_seed(1);
        let workload = harness.generate_workload(1000);

        for label in harness.categories().iter() {
            assert!(
                workload.iter().any(|item| item.category == label),
                "No items drawn for {}",
                label
            );
        }
    }

    #[test]
    fn test_run_rejects_zero_items() {
        let harness = BenchmarkHarness::new(CategorySet::size_classes());
        assert!(matches!(harness.run(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_run_reports_timings() -> Result<()> {
        let report = run(1000, &CategorySet::size_classes())?;

        assert_eq!(report.num_items, 1000);
        assert_eq!(report.categories, 6);
        assert!(report.bucketed > Duration::ZERO);
        assert!(report.speedup.is_finite());
        assert!(report.speedup > 0.0);
        Ok(())
    }

    #[test]
    fn test_passes_store_everything() -> Result<()> {
        let categories = CategorySet::priority_classes();
        let harness = BenchmarkHarness::new(categories.clone()).with_seed(3);
        let workload = harness.generate_workload(250);

        let store = bucketed_pass(&categories, &workload)?;
        assert_eq!(store.len(), 250);

        let list = resorting_pass(&workload);
        assert_eq!(list.len(), 250);
        assert!(list.is_sorted());
        Ok(())
    }

    #[test]
    fn test_report_display() {
        let report = BenchmarkReport {
            num_items: 10,
            categories: 4,
            bucketed: Duration::from_millis(1),
            resorting: Duration::from_millis(250),
            speedup: 250.0,
        };
        let text = report.to_string();
        assert!(text.contains("SBSA Time: 0.0010 seconds"));
        assert!(text.contains("Simulated B-tree Time: 0.2500 seconds"));
        assert!(text.contains("Speedup: 250.0x"));
    }
}
