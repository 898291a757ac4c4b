// file: src/extractor/mod.rs
// description: theme extraction module exports
// reference: internal module structure

pub mod annotator;
pub mod lexicon;
pub mod patterns;
pub mod theme;

pub use annotator::{Annotation, Annotator, LexiconAnnotator};
pub use theme::{ThemeExtractor, rank_terms};
