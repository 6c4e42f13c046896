//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docrank::{SearchConfig, SearchIndex, SearchOutcome, SearchPage, SearchRequest};

// Re-export canonical fixture builders from docrank::testing
pub use docrank::testing::{index_with_keywords, keyword, make_doc};

/// A small index shaped like real generator output for a Tcl help set:
/// two categories, titles, weighted keywords with cross-references.
pub fn help_index() -> SearchIndex {
    let mut index = index_with_keywords(
        7,
        vec![
            keyword("install", &[(0, 64)]),
            keyword("proc", &[(2, 80), (6, 4)]),
            keyword("string", &[(3, 72), (2, 8)]),
            keyword("regexp", &[(4, 88)]),
            keyword("pattern", &[(4, 30), (3, 12)]),
            keyword("debugger", &[(5, 60)]),
            keyword("compiler", &[(6, 66), (5, 6)]),
            keyword("command", &[(2, 20), (3, 18), (4, 16)]),
        ],
    );

    let titles = [
        "Installation Guide",
        "Release Notes",
        "proc Command",
        "string Command",
        "regexp Command",
        "Debugger Tutorial",
        "Compiler Overview",
    ];
    let categories = [0usize, 0, 1, 1, 1, 0, 0];
    for (doc, (title, category)) in titles.iter().zip(categories.iter()).enumerate() {
        index.docs[doc].title = (*title).to_string();
        index.docs[doc].category = Some(*category);
    }
    index.categories = vec!["User Guide".to_string(), "Reference".to_string()];
    index
}

/// Run a search from a raw query string and unwrap the result page.
pub fn page_for(index: &SearchIndex, query_string: &str) -> SearchPage {
    let config = SearchConfig::default();
    let request = SearchRequest::from_query_string(query_string, &config);
    match docrank::search(index, &request, &config) {
        SearchOutcome::Page(page) => page,
        SearchOutcome::NoQuery => panic!("expected results for {:?}", query_string),
    }
}
