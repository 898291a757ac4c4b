// file: src/report/formatter.rs
// description: colored console rendering of result rows and ranked themes

use crate::models::{SearchResponse, SearchResult, ThemeCount};
use colored::Colorize;
use std::io::{self, Write};

/// Rows printed for one result set, plus their snippets for theme extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedResults {
    pub rows: Vec<SearchResult>,
    pub snippets: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_results<W: Write>(
        &self,
        out: &mut W,
        response: &SearchResponse,
    ) -> io::Result<FormattedResults> {
        if response.organic.is_empty() {
            writeln!(out, "No results found.")?;
            return Ok(FormattedResults::default());
        }

        let mut formatted = FormattedResults::default();
        for result in &response.organic {
            writeln!(
                out,
                "{} | {} | {}",
                result.link.blue(),
                result.title.green(),
                result.snippet.yellow()
            )?;
            formatted.snippets.push(result.snippet.clone());
            formatted.rows.push(result.clone());
        }

        Ok(formatted)
    }

    pub fn format_themes<W: Write>(&self, out: &mut W, themes: &[ThemeCount]) -> io::Result<()> {
        if themes.is_empty() {
            return Ok(());
        }

        writeln!(out, "\n{}", "Most Relevant Themes:".cyan())?;
        for theme in themes {
            writeln!(out, "{}: {}", theme.term, theme.frequency)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_rows_and_collect_snippets() {
        let response = SearchResponse::new(vec![
            SearchResult::new("https://github.com/x/y", "SSRF tool", "A tool"),
            SearchResult::new("https://github.com/a/b", "Other", ""),
        ]);
        let mut out = Vec::new();

        let formatted = ResultFormatter::new()
            .format_results(&mut out, &response)
            .unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(formatted.rows, response.organic);
        assert_eq!(formatted.snippets, vec!["A tool".to_string(), String::new()]);
        assert!(printed.contains("https://github.com/x/y"));
        assert!(printed.contains("SSRF tool"));
        assert_eq!(printed.lines().count(), 2);
    }

    #[test]
    fn test_empty_response_prints_notice() {
        let mut out = Vec::new();
        let formatted = ResultFormatter::new()
            .format_results(&mut out, &SearchResponse::default())
            .unwrap();

        assert_eq!(formatted, FormattedResults::default());
        assert_eq!(String::from_utf8(out).unwrap(), "No results found.\n");
    }

    #[test]
    fn test_format_themes() {
        let mut out = Vec::new();
        ResultFormatter::new()
            .format_themes(
                &mut out,
                &[ThemeCount::new("acme corp", 2), ThemeCount::new("ssrf", 1)],
            )
            .unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert!(printed.contains("Most Relevant Themes:"));
        assert!(printed.contains("acme corp: 2\n"));
        assert!(printed.ends_with("ssrf: 1\n"));
    }
}
