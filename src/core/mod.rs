pub mod classify;
pub mod delete;
pub mod git;
