// file: src/pipeline/mod.rs
// description: search orchestration module exports
// reference: internal module structure

pub mod orchestrator;

pub use orchestrator::{NO_RESULTS_MESSAGE, RunReport, SearchPipeline, VariantOutcome};
