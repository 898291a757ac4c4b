// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SearchError};

pub struct Validator;

impl Validator {
    pub fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(SearchError::Validation("Query is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_api_key(api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(SearchError::Validation("API key is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SearchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_top_n(top_n: usize) -> Result<()> {
        if top_n == 0 {
            return Err(SearchError::Validation(
                "top_n must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Truncates on a char boundary so multi-byte text never panics.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
