// SBSA - Slot-Based Size/Attribute assignment
// Constant-time category bucketing with a sort-based comparison harness

#![warn(rust_2018_idioms)]

pub mod config;
pub mod slots;

// Re-exports for convenience
pub use crate::config::SbsaConfig;
pub use slots::{
    BenchmarkHarness, BenchmarkReport, BucketedStore, CategorySet, MappedRecord, ResortingList,
    SlotRegistry,
};

/// SBSA error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Invalid category: {0}")]
        InvalidCategory(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("Category set must not be empty")]
        EmptyCategorySet,

        #[error("Duplicate category: {0}")]
        DuplicateCategory(String),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
