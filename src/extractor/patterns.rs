// file: src/extractor/patterns.rs
// description: compiled regex patterns for tokenization and span classification
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Words keep inner apostrophes, ampersands, dots and hyphens (exploit-db.com, AT&T)
    // and may end in + or # (C++, C#). Any other non-space character is its own token.
    pub static ref TOKEN: Regex = Regex::new(
        r"\w(?:[\w'&+.\-]*[\w+#])?|[^\s\w]"
    ).expect("TOKEN regex is valid");

    pub static ref NUMBER: Regex = Regex::new(
        r"^\d+(?:[.,]\d+)*$"
    ).expect("NUMBER regex is valid");

    pub static ref VERSION: Regex = Regex::new(
        r"^[vV]?\d+(?:\.\d+)*$"
    ).expect("VERSION regex is valid");

    pub static ref ACRONYM: Regex = Regex::new(
        r"^[A-Z]{2,}[0-9]*$"
    ).expect("ACRONYM regex is valid");
}

pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

pub fn is_sentence_boundary(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | ":" | ";" | "|")
}
