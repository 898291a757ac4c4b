// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use config::{Config, OutputConfig, SearchConfig, ThemeConfig};
pub use error::{Result, SearchError};
pub use extractor::{Annotation, Annotator, LexiconAnnotator, ThemeExtractor};
pub use fetcher::{SearchBackend, SerperClient};
pub use models::{Entity, EntityLabel, SearchResponse, SearchResult, SiteFilter, ThemeCount};
pub use pipeline::{RunReport, SearchPipeline, VariantOutcome};
pub use report::{ReportExporter, ResultFormatter};
pub use utils::Validator;
