//! Search behavior configuration.
//!
//! The generated search page historically controlled all of this through a
//! block of mutable globals. Here the knobs live in one immutable
//! [`SearchConfig`] passed into the ranking call, so two searches on the
//! same index can run with different policies without touching shared state.

use serde::{Deserialize, Serialize};

/// How multi-term queries combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A document matching any term is a result.
    Any,
    /// Only documents matching every term are results.
    All,
}

/// Where the query phrase is split into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSplit {
    /// Split at whitespace only.
    Whitespace,
    /// Split at whitespace and at `+`, `_`, `-`.
    Extended,
}

/// Immutable per-search options.
///
/// Defaults mirror what the generated help pages ship with: case folding on,
/// whole-word matching, match-any, extended word splitting, highlighting off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Collect the distinct matched keywords so the renderer can highlight
    /// them in descriptions.
    pub highlighting: bool,
    /// Stop collecting keywords past this many; the output flags the
    /// overflow so the renderer can say highlighting was disabled.
    pub highlight_limit: usize,
    /// Mode used when the request doesn't say otherwise.
    pub match_default: MatchMode,
    /// Match a term anywhere inside a keyword instead of requiring the
    /// whole keyword to match.
    pub substring: bool,
    /// Lowercase terms before matching. Turn off for scripts where
    /// lowercasing is meaningless.
    pub case_folding: bool,
    pub word_split: WordSplit,
    /// Page sizes the renderer offers in its dropdown.
    pub per_page_options: Vec<usize>,
    /// Page size used when the request carries none.
    pub default_per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            highlighting: false,
            highlight_limit: 1000,
            match_default: MatchMode::Any,
            substring: false,
            case_folding: true,
            word_split: WordSplit::Extended,
            per_page_options: vec![10, 20, 50, 100],
            default_per_page: 10,
        }
    }
}
