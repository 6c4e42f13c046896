//! Query parsing: phrase splitting and wildcard term compilation.
//!
//! A query phrase becomes a sequence of [`Term`]s. Terms without wildcard
//! characters stay literal strings; terms containing `*` or `?` compile to a
//! regex where `*` means any run of characters and `?` means zero or one
//! character. The `?` semantics look off by one next to usual glob rules,
//! but they are what deployed help pages match, so they stay.

use regex::Regex;
use tracing::debug;

use crate::config::{SearchConfig, WordSplit};

/// One search term, ready to be matched against keyword entries.
#[derive(Debug, Clone)]
pub enum Term {
    /// Whole-keyword (or substring, in substring mode) comparison.
    /// Stored case-folded when folding is on.
    Literal(String),
    /// Compiled wildcard pattern.
    Wildcard(Regex),
}

impl Term {
    /// Does this term match the given keyword under the configured policy?
    pub fn matches(&self, keyword: &str, config: &SearchConfig) -> bool {
        match self {
            Term::Literal(word) => {
                let folded;
                let keyword = if config.case_folding {
                    folded = keyword.to_lowercase();
                    folded.as_str()
                } else {
                    keyword
                };
                if config.substring {
                    keyword.contains(word.as_str())
                } else {
                    keyword == word.as_str()
                }
            }
            Term::Wildcard(re) => re.is_match(keyword),
        }
    }

    /// Whether this term keeps scanning the keyword table after a hit.
    ///
    /// One keyword can correspond to only one exact term, so a plain literal
    /// stops at its first match. Wildcard and substring terms may match many
    /// keywords and scan the whole table.
    pub fn scans_all_keywords(&self, config: &SearchConfig) -> bool {
        config.substring || matches!(self, Term::Wildcard(_))
    }
}

/// A parsed query: the original phrase plus its compiled terms.
#[derive(Debug, Clone)]
pub struct Query {
    pub phrase: String,
    pub terms: Vec<Term>,
}

impl Query {
    /// Split and compile a raw phrase.
    ///
    /// An empty or whitespace-only phrase yields no terms; callers treat
    /// that as the "no query" outcome and skip the scan entirely.
    pub fn parse(raw: &str, config: &SearchConfig) -> Query {
        let phrase = raw.trim().to_string();
        let terms: Vec<Term> = split_terms(&phrase, config.word_split)
            .into_iter()
            .map(|word| compile_term(&word, config))
            .collect();
        debug!(phrase = %phrase, terms = terms.len(), "parsed query");
        Query { phrase, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Split the phrase into words at whitespace, and in extended mode also at
/// `+`, `_`, and `-`.
pub fn split_terms(phrase: &str, word_split: WordSplit) -> Vec<String> {
    let splittable = |c: char| match word_split {
        WordSplit::Whitespace => c.is_whitespace(),
        WordSplit::Extended => c.is_whitespace() || c == '+' || c == '_' || c == '-',
    };
    phrase
        .split(splittable)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_wildcard(word: &str) -> bool {
    word.contains('*') || word.contains('?')
}

fn compile_term(word: &str, config: &SearchConfig) -> Term {
    if !has_wildcard(word) {
        let word = if config.case_folding {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        return Term::Literal(word);
    }
    match Regex::new(&pattern_to_regex(word, config)) {
        Ok(re) => Term::Wildcard(re),
        // Escaping below covers every metacharacter, so compilation only
        // fails on pathological pattern sizes. Degrade to a literal.
        Err(_) => Term::Literal(word.to_string()),
    }
}

/// Translate a wildcard pattern into regex source.
///
/// `*` becomes `.*` and `?` becomes `.?` (zero or one). Everything else is
/// matched literally. The pattern anchors to the whole keyword unless
/// substring mode is on, and folds case with the rest of the search.
pub fn pattern_to_regex(pattern: &str, config: &SearchConfig) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    if config.case_folding {
        source.push_str("(?i)");
    }
    if !config.substring {
        source.push('^');
    }
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push_str(".?"),
            other => source.push_str(&regex::escape(&other.to_string())),
        }
    }
    if !config.substring {
        source.push('$');
    }
    source
}
