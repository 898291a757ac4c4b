// file: src/models/site_filter.rs
// description: site qualifiers appended to the base query

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteFilter {
    General,
    GitHub,
    YouTube,
    ExploitDb,
}

impl SiteFilter {
    /// Execution order of the variants within one run.
    pub const ORDER: [SiteFilter; 4] = [
        SiteFilter::General,
        SiteFilter::GitHub,
        SiteFilter::YouTube,
        SiteFilter::ExploitDb,
    ];

    pub fn domain(&self) -> Option<&'static str> {
        match self {
            SiteFilter::General => None,
            SiteFilter::GitHub => Some("github.com"),
            SiteFilter::YouTube => Some("youtube.com"),
            SiteFilter::ExploitDb => Some("exploit-db.com"),
        }
    }

    pub fn apply(&self, query: &str) -> String {
        match self.domain() {
            Some(domain) => format!("{} site:{}", query, domain),
            None => query.to_string(),
        }
    }

    /// Maps the command line flags onto filters. With no flag set, the bare
    /// query runs only when `general_when_unfiltered` is enabled.
    pub fn from_flags(
        github: bool,
        youtube: bool,
        exploitdb: bool,
        general_when_unfiltered: bool,
    ) -> Vec<SiteFilter> {
        let mut filters = Vec::new();
        if github {
            filters.push(SiteFilter::GitHub);
        }
        if youtube {
            filters.push(SiteFilter::YouTube);
        }
        if exploitdb {
            filters.push(SiteFilter::ExploitDb);
        }
        if filters.is_empty() && general_when_unfiltered {
            filters.push(SiteFilter::General);
        }
        filters
    }

    /// Deduplicates and sorts the given filters into execution order.
    pub fn ordered(filters: &[SiteFilter]) -> Vec<SiteFilter> {
        Self::ORDER
            .iter()
            .copied()
            .filter(|f| filters.contains(f))
            .collect()
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteFilter::General => "general",
            SiteFilter::GitHub => "github",
            SiteFilter::YouTube => "youtube",
            SiteFilter::ExploitDb => "exploitdb",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_qualifier() {
        assert_eq!(SiteFilter::GitHub.apply("ssrf"), "ssrf site:github.com");
        assert_eq!(SiteFilter::YouTube.apply("ssrf"), "ssrf site:youtube.com");
        assert_eq!(SiteFilter::ExploitDb.apply("ssrf"), "ssrf site:exploit-db.com");
        assert_eq!(SiteFilter::General.apply("ssrf"), "ssrf");
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(
            SiteFilter::from_flags(true, false, true, false),
            vec![SiteFilter::GitHub, SiteFilter::ExploitDb]
        );
        assert_eq!(
            SiteFilter::from_flags(false, true, false, true),
            vec![SiteFilter::YouTube]
        );
    }

    #[test]
    fn test_no_flags_runs_general_only_when_enabled() {
        assert!(SiteFilter::from_flags(false, false, false, false).is_empty());
        assert_eq!(
            SiteFilter::from_flags(false, false, false, true),
            vec![SiteFilter::General]
        );
    }

    #[test]
    fn test_ordered() {
        let filters = [
            SiteFilter::ExploitDb,
            SiteFilter::GitHub,
            SiteFilter::ExploitDb,
        ];
        assert_eq!(
            SiteFilter::ordered(&filters),
            vec![SiteFilter::GitHub, SiteFilter::ExploitDb]
        );
    }
}
