// file: src/extractor/annotator.rs
// description: text annotation producing named entities and noun phrases
// reference: lexicon and suffix rules over a regex tokenizer

use crate::extractor::lexicon::*;
use crate::extractor::patterns::{
    ACRONYM, NUMBER, TOKEN, VERSION, is_capitalized, is_sentence_boundary,
};
use crate::models::{Entity, EntityLabel};

/// Named entities and noun phrases found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub entities: Vec<Entity>,
    pub noun_phrases: Vec<String>,
}

pub trait Annotator {
    fn annotate(&self, text: &str) -> Annotation;
}

impl<T: Annotator + ?Sized> Annotator for &T {
    fn annotate(&self, text: &str) -> Annotation {
        (**self).annotate(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Det,
    Pron,
    Prep,
    Conj,
    Copula,
    Verb,
    Adv,
    Adj,
    Num,
    Noun,
    Propn,
    Punct,
}

#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub lower: String,
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
}

/// Rule-based annotator backed by the word lists in `lexicon`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnnotator;

impl LexiconAnnotator {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens: Vec<Token<'a>> = Vec::new();

        for m in TOKEN.find_iter(text) {
            let word = m.as_str();

            // "Dr." stays one token so the period neither ends a sentence nor splits a name
            if word == "."
                && let Some(prev) = tokens.last_mut()
                && prev.end == m.start()
                && TITLES.contains(prev.lower.as_str())
            {
                prev.end = m.end();
                prev.text = &text[prev.start..prev.end];
                prev.lower.push('.');
                continue;
            }

            let sentence_start = tokens
                .last()
                .is_none_or(|prev| is_sentence_boundary(prev.text));
            let prev_tag = tokens.last().map(|t| t.tag);
            let lower = word.to_lowercase();
            let tag = tag_word(word, &lower, sentence_start, prev_tag);

            tokens.push(Token {
                text: word,
                lower,
                start: m.start(),
                end: m.end(),
                tag,
            });
        }

        tokens
    }

    pub(crate) fn noun_chunks(&self, text: &str, tokens: &[Token<'_>]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut start: Option<usize> = None;
        let mut head: Option<usize> = None;

        let mut close = |start: &mut Option<usize>, head: &mut Option<usize>| {
            if let (Some(s), Some(h)) = (*start, *head) {
                chunks.push(text[tokens[s].start..tokens[h].end].to_string());
            }
            *start = None;
            *head = None;
        };

        for (i, token) in tokens.iter().enumerate() {
            match token.tag {
                Tag::Det => {
                    close(&mut start, &mut head);
                    start = Some(i);
                }
                Tag::Adj | Tag::Num => {
                    if head.is_some() {
                        close(&mut start, &mut head);
                    }
                    if start.is_none() {
                        if token.tag == Tag::Adj && follows_copula(tokens, i) {
                            continue;
                        }
                        start = Some(i);
                    }
                }
                Tag::Noun | Tag::Propn => {
                    if start.is_none() {
                        start = Some(i);
                    }
                    head = Some(i);
                }
                _ => close(&mut start, &mut head),
            }
        }
        close(&mut start, &mut head);

        chunks
    }

    pub(crate) fn entities(&self, text: &str, tokens: &[Token<'_>]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if tokens[i].tag != Tag::Propn {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i;
            let mut j = i + 1;
            loop {
                if j < tokens.len() && tokens[j].tag == Tag::Propn {
                    end = j;
                    j += 1;
                } else if j + 1 < tokens.len()
                    && (tokens[j].text == "&" || tokens[j].lower == "of")
                    && tokens[j + 1].tag == Tag::Propn
                {
                    end = j + 1;
                    j += 2;
                } else {
                    break;
                }
            }

            let base_end = end;
            let versioned = j < tokens.len() && VERSION.is_match(tokens[j].text);
            if versioned {
                end = j;
                j += 1;
            }

            let words: Vec<&str> = tokens[start..=base_end]
                .iter()
                .map(|t| t.lower.as_str())
                .collect();
            let single_acronym = start == base_end && ACRONYM.is_match(tokens[start].text);

            if let Some(label) = classify(&words, versioned, single_acronym) {
                let span = &text[tokens[start].start..tokens[end].end];
                entities.push(Entity::new(span, label));
            }

            i = j;
        }

        entities
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Annotation {
        let tokens = self.tokenize(text);
        Annotation {
            entities: self.entities(text, &tokens),
            noun_phrases: self.noun_chunks(text, &tokens),
        }
    }
}

fn tag_word(word: &str, lower: &str, sentence_start: bool, prev: Option<Tag>) -> Tag {
    if !word.chars().any(|c| c.is_alphanumeric()) {
        return Tag::Punct;
    }
    if NUMBER.is_match(word) {
        return Tag::Num;
    }
    if ACRONYM.is_match(word) {
        return Tag::Propn;
    }
    if let Some(tag) = closed_class(lower) {
        return tag;
    }
    if is_capitalized(word) {
        // A capital at sentence start only marks a name for words the rules do not know.
        if sentence_start && let Some(tag) = open_class(lower).or_else(|| suffix_class(lower)) {
            return tag;
        }
        return Tag::Propn;
    }
    if let Some(tag) = open_class(lower) {
        return tag;
    }
    if let Some(tag) = suffix_class(lower) {
        return tag;
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return match prev {
            Some(Tag::Det | Tag::Adj | Tag::Noun | Tag::Propn | Tag::Num) => Tag::Noun,
            _ => Tag::Verb,
        };
    }
    Tag::Noun
}

fn closed_class(lower: &str) -> Option<Tag> {
    if DETERMINERS.contains(lower) {
        Some(Tag::Det)
    } else if PRONOUNS.contains(lower) {
        Some(Tag::Pron)
    } else if PREPOSITIONS.contains(lower) {
        Some(Tag::Prep)
    } else if CONJUNCTIONS.contains(lower) {
        Some(Tag::Conj)
    } else if COPULAS.contains(lower) {
        Some(Tag::Copula)
    } else {
        None
    }
}

fn open_class(lower: &str) -> Option<Tag> {
    if VERBS.contains(lower) {
        Some(Tag::Verb)
    } else if ADVERBS.contains(lower) {
        Some(Tag::Adv)
    } else if ADJECTIVES.contains(lower) {
        Some(Tag::Adj)
    } else {
        None
    }
}

fn suffix_class(lower: &str) -> Option<Tag> {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return Some(Tag::Adv);
    }
    if len > 4 && lower.ends_with("ed") {
        return Some(Tag::Verb);
    }
    if len > 5 && (lower.ends_with("ize") || lower.ends_with("ify")) {
        return Some(Tag::Verb);
    }
    if len > 6
        && ["ous", "ful", "able", "ible", "less"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return Some(Tag::Adj);
    }
    None
}

/// True when the nearest preceding non-adverb token is a copula.
fn follows_copula(tokens: &[Token<'_>], i: usize) -> bool {
    tokens[..i]
        .iter()
        .rev()
        .find(|t| t.tag != Tag::Adv)
        .is_some_and(|t| t.tag == Tag::Copula)
}

fn classify(words: &[&str], versioned: bool, single_acronym: bool) -> Option<EntityLabel> {
    let span = words.join(" ");
    let first = *words.first()?;
    let last = *words.last()?;
    let multi = words.len() > 1;

    if KNOWN_EVENTS.contains(span.as_str()) || (multi && EVENT_SUFFIXES.contains(last)) {
        return Some(EntityLabel::Event);
    }
    if KNOWN_ORGS.contains(span.as_str()) || (multi && ORG_SUFFIXES.contains(last)) {
        return Some(EntityLabel::Organization);
    }
    if MONTHS.contains(first) || WEEKDAYS.contains(first) {
        return Some(EntityLabel::Date);
    }
    if KNOWN_PRODUCTS.contains(span.as_str()) || versioned {
        return Some(EntityLabel::Product);
    }
    if TITLES.contains(first.trim_end_matches('.')) || FIRST_NAMES.contains(first) {
        return Some(EntityLabel::Person);
    }
    if LOCATIONS.contains(span.as_str()) {
        return Some(EntityLabel::Location);
    }
    if single_acronym {
        return Some(EntityLabel::Organization);
    }
    if multi {
        return Some(EntityLabel::Other);
    }
    None
}
