// file: src/extractor/theme.rs
// description: frequency ranking of entity and noun-phrase terms across snippets
// reference: stable most-common counting over an insertion-ordered pool

use crate::extractor::annotator::{Annotation, Annotator};
use crate::models::{EntityLabel, ThemeCount};
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub struct ThemeExtractor<A> {
    annotator: A,
    categories: Vec<EntityLabel>,
}

impl<A: Annotator> ThemeExtractor<A> {
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            categories: EntityLabel::theme_defaults(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<EntityLabel>) -> Self {
        self.categories = categories;
        self
    }

    pub fn categories(&self) -> &[EntityLabel] {
        &self.categories
    }

    /// Ranks the most frequent terms over all snippets, joined with single spaces.
    pub fn extract<S: AsRef<str>>(&self, snippets: &[S], top_n: usize) -> Vec<ThemeCount> {
        let corpus = snippets
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        if top_n == 0 || corpus.trim().is_empty() {
            return Vec::new();
        }

        let annotation = self.annotator.annotate(&corpus);
        debug!(
            "Annotated {} chars: {} entities, {} noun phrases",
            corpus.len(),
            annotation.entities.len(),
            annotation.noun_phrases.len()
        );

        rank_terms(self.term_pool(annotation), top_n)
    }

    /// Retained entities followed by noun phrases, all lowercased. Noun phrases
    /// that are exactly a discarded entity stay out of the pool.
    fn term_pool(&self, annotation: Annotation) -> Vec<String> {
        let mut retained = Vec::new();
        let mut discarded = HashSet::new();

        for entity in annotation.entities {
            let term = entity.text.to_lowercase();
            if self.categories.contains(&entity.label) {
                retained.push(term);
            } else {
                discarded.insert(term);
            }
        }

        let phrases = annotation
            .noun_phrases
            .into_iter()
            .map(|p| p.to_lowercase())
            .filter(|p| !discarded.contains(p));

        retained.into_iter().chain(phrases).collect()
    }
}

/// Counts terms and returns the `top_n` most common. Equal counts keep the
/// order in which the terms first appeared.
pub fn rank_terms<I>(terms: I, top_n: usize) -> Vec<ThemeCount>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<ThemeCount> = Vec::new();

    for term in terms {
        if term.trim().is_empty() {
            continue;
        }
        match index.get(&term) {
            Some(&i) => counts[i].frequency += 1,
            None => {
                index.insert(term.clone(), counts.len());
                counts.push(ThemeCount::new(term, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(top_n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::annotator::LexiconAnnotator;
    use crate::models::Entity;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct FixedAnnotator {
        annotation: Annotation,
        calls: Cell<usize>,
    }

    impl FixedAnnotator {
        fn new(entities: Vec<Entity>, noun_phrases: Vec<&str>) -> Self {
            Self {
                annotation: Annotation {
                    entities,
                    noun_phrases: noun_phrases.into_iter().map(String::from).collect(),
                },
                calls: Cell::new(0),
            }
        }
    }

    impl Annotator for FixedAnnotator {
        fn annotate(&self, _text: &str) -> Annotation {
            self.calls.set(self.calls.get() + 1);
            self.annotation.clone()
        }
    }

    #[test]
    fn test_rank_terms_ties_keep_first_seen_order() {
        let terms = ["b", "a", "c", "a", "b", "d"].map(String::from);
        assert_eq!(
            rank_terms(terms, 3),
            vec![
                ThemeCount::new("b", 2),
                ThemeCount::new("a", 2),
                ThemeCount::new("c", 1)
            ]
        );
    }

    #[test]
    fn test_empty_snippets_yield_nothing() {
        let annotator = FixedAnnotator::new(vec![], vec!["x"]);
        let extractor = ThemeExtractor::new(&annotator);

        assert!(extractor.extract::<String>(&[], 5).is_empty());
        assert!(extractor.extract(&["", "  "], 5).is_empty());
        assert_eq!(annotator.calls.get(), 0);
    }

    #[test]
    fn test_zero_top_n() {
        let extractor = ThemeExtractor::new(LexiconAnnotator::new());
        assert!(extractor.extract(&["Acme Corp ships tools"], 0).is_empty());
    }

    #[test]
    fn test_entity_and_phrase_count_toward_same_term() {
        let annotator = FixedAnnotator::new(
            vec![
                Entity::new("GitHub", EntityLabel::Organization),
                Entity::new("Bob", EntityLabel::Person),
            ],
            vec!["github", "a repo", "Bob"],
        );
        let extractor = ThemeExtractor::new(annotator);

        assert_eq!(
            extractor.extract(&["irrelevant"], 5),
            vec![ThemeCount::new("github", 2), ThemeCount::new("a repo", 1)]
        );
    }

    #[test]
    fn test_custom_categories() {
        let annotator = FixedAnnotator::new(
            vec![
                Entity::new("London", EntityLabel::Location),
                Entity::new("Acme Corp", EntityLabel::Organization),
            ],
            vec![],
        );
        let extractor = ThemeExtractor::new(annotator).with_categories(vec![EntityLabel::Location]);

        assert_eq!(
            extractor.extract(&["irrelevant"], 5),
            vec![ThemeCount::new("london", 1)]
        );
    }

    #[test]
    fn test_case_insensitive_counting() {
        let extractor = ThemeExtractor::new(LexiconAnnotator::new());
        let themes = extractor.extract(&["Acme Corp is great", "acme corp rocks"], 1);

        assert_eq!(themes, vec![ThemeCount::new("acme corp", 3)]);
    }

    #[test]
    fn test_person_never_surfaces() {
        let extractor = ThemeExtractor::new(LexiconAnnotator::new());
        let themes = extractor.extract(&["Alice Johnson joined Acme Corp last year."], 5);

        assert_eq!(
            themes,
            vec![ThemeCount::new("acme corp", 2), ThemeCount::new("last year", 1)]
        );
        assert!(themes.iter().all(|t| !t.term.contains("alice")));
    }

    #[test]
    fn test_titled_person_never_surfaces() {
        let extractor = ThemeExtractor::new(LexiconAnnotator::new());
        let themes = extractor.extract(&["Dr. Alvarez joined Acme Corp."], 5);

        assert_eq!(themes, vec![ThemeCount::new("acme corp", 2)]);
        assert!(themes.iter().all(|t| !t.term.contains("alvarez") && t.term != "dr"));
    }

    #[test]
    fn test_ranked_output_is_bounded_and_sorted() {
        let extractor = ThemeExtractor::new(LexiconAnnotator::new());
        let snippets = [
            "Burp Suite is a web security testing tool by PortSwigger.",
            "The Burp Suite extension finds SSRF bugs in a web app.",
            "PortSwigger Web Security Academy has free SSRF labs.",
        ];
        let themes = extractor.extract(&snippets, 3);

        assert!(themes.len() <= 3);
        assert!(themes.iter().all(|t| t.frequency >= 1));
        assert!(themes.windows(2).all(|w| w[0].frequency >= w[1].frequency));
    }
}
