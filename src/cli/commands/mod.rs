pub mod clean;
pub mod common;
pub mod config;
pub mod preview;
