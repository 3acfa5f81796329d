//! CLI command implementations

pub mod summary;
