// file: src/pipeline/orchestrator.rs
// description: runs each site-filtered query in order, prints rows and ranks themes
// reference: sequential fetch, accumulate, extract once

use crate::error::{Result, SearchError};
use crate::extractor::{Annotator, ThemeExtractor};
use crate::fetcher::SearchBackend;
use crate::models::{SearchResult, SiteFilter, ThemeCount};
use crate::report::ResultFormatter;
use crate::utils::logging::format_error;
use crate::utils::validation::Validator;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const NO_RESULTS_MESSAGE: &str = "No results found for any of the queries.";

/// What happened to one query variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub filter: SiteFilter,
    pub query: String,
    pub result_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub query: String,
    pub variants: Vec<VariantOutcome>,
    pub results: Vec<SearchResult>,
    pub themes: Vec<ThemeCount>,
}

impl RunReport {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

pub struct SearchPipeline<B, A> {
    backend: B,
    extractor: ThemeExtractor<A>,
    formatter: ResultFormatter,
    top_n: usize,
}

impl<B: SearchBackend, A: Annotator> SearchPipeline<B, A> {
    pub fn new(backend: B, extractor: ThemeExtractor<A>, top_n: usize) -> Result<Self> {
        Validator::validate_top_n(top_n)?;

        Ok(Self {
            backend,
            extractor,
            formatter: ResultFormatter::new(),
            top_n,
        })
    }

    /// Fetches every requested variant in execution order. A failing variant
    /// contributes nothing; only a write failure on `out` aborts the run.
    pub async fn run<W: Write>(
        &self,
        query: &str,
        filters: &[SiteFilter],
        out: &mut W,
    ) -> Result<RunReport> {
        Validator::validate_query(query)?;

        let mut report = RunReport {
            query: query.to_string(),
            ..RunReport::default()
        };
        let mut snippets: Vec<String> = Vec::new();

        for filter in SiteFilter::ordered(filters) {
            let variant_query = filter.apply(query);
            info!("Searching {} variant: {}", filter, variant_query);
            let started = Instant::now();

            let outcome = match self.backend.search(&variant_query).await {
                Ok(response) => {
                    let formatted = self.formatter.format_results(out, &response)?;
                    debug!(
                        "{} variant returned {} results in {} ms",
                        filter,
                        formatted.rows.len(),
                        started.elapsed().as_millis()
                    );

                    let count = formatted.rows.len();
                    report.results.extend(formatted.rows);
                    snippets.extend(formatted.snippets);

                    VariantOutcome {
                        filter,
                        query: variant_query,
                        result_count: count,
                        error: None,
                    }
                }
                Err(err) => {
                    warn!("{} variant failed: {}", filter, err);
                    report_failure(out, &err)?;

                    VariantOutcome {
                        filter,
                        query: variant_query,
                        result_count: 0,
                        error: Some(describe_failure(&err)),
                    }
                }
            };

            report.variants.push(outcome);
        }

        if !report.has_results() {
            writeln!(out, "{}", NO_RESULTS_MESSAGE)?;
            return Ok(report);
        }

        report.themes = self.extractor.extract(&snippets, self.top_n);
        self.formatter.format_themes(out, &report.themes)?;

        Ok(report)
    }
}

fn describe_failure(err: &SearchError) -> String {
    match err {
        SearchError::Upstream { status, body } => format!(
            "status {}: {}",
            status,
            Validator::truncate_text(body.trim(), 200)
        ),
        other => other.to_string(),
    }
}

fn report_failure<W: Write>(out: &mut W, err: &SearchError) -> Result<()> {
    match err {
        SearchError::Upstream { status, body } => {
            writeln!(out, "{}", format_error(&format!("Error: {}", status)))?;
            writeln!(out, "{}", body)?;
        }
        other => writeln!(out, "{}", format_error(&format!("Error: {}", other)))?,
    }
    Ok(())
}
