//! Query-string parameter extraction with silent defaults.
//!
//! The search page is driven entirely by its URL: the phrase, page number,
//! page size, category, and match mode all arrive as `zoom_*` parameters.
//! Nothing here returns an error. A missing or malformed numeric parameter
//! falls back to its documented default, which is what a help page reloaded
//! with a mangled URL should do.

use std::str::FromStr;

use crate::config::{MatchMode, SearchConfig};

/// Extract a raw parameter value from a query string.
///
/// Accepts the string with or without its leading `?`. Pairs are split at
/// `&`, names compared after percent-decoding, and the first match wins.
/// `+` in a value decodes to a space, as form encoding says it should.
pub fn get_param(query_string: &str, name: &str) -> Option<String> {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    if query_string.is_empty() {
        return None;
    }
    for pair in query_string.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        if decode(key) == name {
            return Some(decode(value));
        }
    }
    None
}

/// Parse a value, or fall back to the given default on absence or garbage.
pub fn parse_or_default<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// Everything a search invocation needs from the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub phrase: String,
    /// 1-based result page.
    pub page: usize,
    pub per_page: usize,
    /// `None` searches all categories.
    pub category: Option<usize>,
    /// `None` defers to the configured default mode.
    pub match_all: Option<bool>,
}

impl SearchRequest {
    /// A request for the given phrase with every display option defaulted.
    pub fn with_phrase(phrase: impl Into<String>, config: &SearchConfig) -> SearchRequest {
        SearchRequest {
            phrase: phrase.into(),
            page: 1,
            per_page: config.default_per_page,
            category: None,
            match_all: None,
        }
    }

    /// Read the `zoom_*` parameters a generated help page passes along.
    ///
    /// Defaults on absence or parse failure: page 1, the configured page
    /// size, all categories, match-any. A negative `zoom_cat` is the "all
    /// categories" sentinel the pages emit.
    pub fn from_query_string(query_string: &str, config: &SearchConfig) -> SearchRequest {
        let phrase = get_param(query_string, "zoom_query").unwrap_or_default();

        let page = parse_or_default(get_param(query_string, "zoom_page").as_deref(), 1).max(1);
        let per_page = parse_or_default(
            get_param(query_string, "zoom_per_page").as_deref(),
            config.default_per_page,
        )
        .max(1);

        let category = get_param(query_string, "zoom_cat")
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|cat| usize::try_from(cat).ok());

        let match_all = get_param(query_string, "zoom_and")
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|flag| flag == 1);

        SearchRequest {
            phrase,
            page,
            per_page,
            category,
            match_all,
        }
    }

    /// The effective match mode once the configured default is applied.
    pub fn mode(&self, config: &SearchConfig) -> MatchMode {
        match self.match_all {
            Some(true) => MatchMode::All,
            Some(false) => MatchMode::Any,
            None => config.match_default,
        }
    }
}
