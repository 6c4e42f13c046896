//! Wildcard and substring matching against the keyword table.

use super::common::{help_index, index_with_keywords, keyword};
use docrank::{rank, MatchMode, Query, SearchConfig, SearchOutcome, SearchRequest};

fn ranked_with(index: &docrank::SearchIndex, phrase: &str, config: &SearchConfig) -> docrank::RankedResults {
    let query = Query::parse(phrase, config);
    rank(index, &query, None, MatchMode::Any, config)
}

#[test]
fn star_spans_multiple_keywords() {
    let index = index_with_keywords(
        2,
        vec![
            keyword("parse", &[(0, 40), (1, 6)]),
            keyword("parser", &[(0, 25)]),
        ],
    );
    let config = SearchConfig::default();
    // "pars*" hits "parse" and "parser"; doc 0 collects both.
    let results = ranked_with(&index, "pars*", &config);
    assert_eq!(results.rows[0].doc, 0);
    assert_eq!(results.rows[0].matched_terms, 2);
    assert_eq!(results.rows[0].score, (40 + 25) * 2);
    assert_eq!(results.rows[1].doc, 1);
}

#[test]
fn question_mark_allows_zero_or_one_character() {
    let index = index_with_keywords(
        2,
        vec![keyword("tet", &[(0, 3)]), keyword("test", &[(1, 4)])],
    );
    let config = SearchConfig::default();
    let results = ranked_with(&index, "te?t", &config);
    let docs: Vec<usize> = results.rows.iter().map(|r| r.doc).collect();
    assert_eq!(docs, vec![1, 0]);
}

#[test]
fn exact_term_stops_after_its_first_keyword() {
    // Generators can emit duplicate keyword entries; an exact term only
    // credits the first one.
    let index = index_with_keywords(
        1,
        vec![keyword("proc", &[(0, 10)]), keyword("proc", &[(0, 99)])],
    );
    let config = SearchConfig::default();
    let results = ranked_with(&index, "proc", &config);
    assert_eq!(results.rows[0].score, 10);
    assert_eq!(results.rows[0].matched_terms, 1);
}

#[test]
fn wildcard_term_credits_duplicate_keywords() {
    let index = index_with_keywords(
        1,
        vec![keyword("proc", &[(0, 10)]), keyword("proc", &[(0, 99)])],
    );
    let config = SearchConfig::default();
    let results = ranked_with(&index, "pro*", &config);
    assert_eq!(results.rows[0].matched_terms, 2);
    assert_eq!(results.rows[0].score, (10 + 99) * 2);
}

#[test]
fn substring_mode_turns_every_term_into_a_scan() {
    let index = help_index();
    let config = SearchConfig {
        substring: true,
        ..SearchConfig::default()
    };
    // "comp" is a substring of "compiler" only.
    let results = ranked_with(&index, "comp", &config);
    let docs: Vec<usize> = results.rows.iter().map(|r| r.doc).collect();
    assert_eq!(docs, vec![6, 5]);
}

#[test]
fn case_folding_applies_to_wildcards_and_literals() {
    let index = help_index();
    let config = SearchConfig::default();

    let results = ranked_with(&index, "REGEXP", &config);
    assert_eq!(results.rows.len(), 1);

    let results = ranked_with(&index, "RegEx*", &config);
    assert_eq!(results.rows.len(), 1);
}

#[test]
fn case_sensitive_search_misses_wrong_case() {
    let index = help_index();
    let config = SearchConfig {
        case_folding: false,
        ..SearchConfig::default()
    };
    let results = ranked_with(&index, "REGEXP", &config);
    assert!(results.rows.is_empty());
}

#[test]
fn wildcards_flow_through_the_query_string() {
    let index = help_index();
    let config = SearchConfig::default();
    // %3F is '?', kept out of the parameter separator's way.
    let request = SearchRequest::from_query_string("zoom_query=deb%3Fugger", &config);
    let SearchOutcome::Page(page) = docrank::search(&index, &request, &config) else {
        panic!("expected a result page");
    };
    assert_eq!(page.summary.total_matches, 1);
    assert_eq!(page.rows[0].doc, 5);
}
