// file: src/models/theme.rs
// description: ranked theme term with its frequency

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub term: String,
    pub frequency: usize,
}

impl ThemeCount {
    pub fn new(term: impl Into<String>, frequency: usize) -> Self {
        Self {
            term: term.into(),
            frequency,
        }
    }
}
