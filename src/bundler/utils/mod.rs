//! Shared helpers for bundle stages.

pub mod fs;
