pub mod branch;
pub mod repository;

pub use branch::{Branch, BranchLister, TrackingState};
pub use repository::{execute_git_command, GitRepository};
