pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use core::classify::{classify, BulkSelection, Classification, ProtectedNames};
pub use core::delete::{DeleteFailure, DeletionExecutor, DeletionOutcome};
pub use core::git::{Branch, BranchLister, GitRepository, TrackingState};
pub use utils::{Result, SweepError};
