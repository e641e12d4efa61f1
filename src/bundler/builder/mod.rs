//! Bundle orchestration.
//!
//! - `orchestrator` - the [`Bundler`] that runs every stage in order

mod orchestrator;

pub use orchestrator::{BundleReport, Bundler};
