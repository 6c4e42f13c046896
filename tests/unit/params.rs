//! Query-string extraction against URLs the generated pages actually emit.

use docrank::{get_param, parse_or_default, MatchMode, SearchConfig, SearchRequest};

fn config() -> SearchConfig {
    SearchConfig::default()
}

#[test]
fn full_pagination_link_round_trips() {
    // The shape of a "next page" link the renderer emits.
    let qs = "?zoom_query=proc+args&zoom_page=2&zoom_per_page=10&zoom_cat=-1&zoom_and=0";
    let request = SearchRequest::from_query_string(qs, &config());
    assert_eq!(request.phrase, "proc args");
    assert_eq!(request.page, 2);
    assert_eq!(request.per_page, 10);
    assert_eq!(request.category, None);
    assert_eq!(request.mode(&config()), MatchMode::Any);
}

#[test]
fn leading_question_mark_is_optional() {
    assert_eq!(
        get_param("?zoom_query=a", "zoom_query"),
        get_param("zoom_query=a", "zoom_query")
    );
}

#[test]
fn values_may_contain_equals_signs() {
    assert_eq!(get_param("q=a%3Db&x=1", "q").as_deref(), Some("a=b"));
}

#[test]
fn missing_value_reads_as_empty() {
    assert_eq!(get_param("flag&x=1", "flag").as_deref(), Some(""));
}

#[test]
fn empty_query_string_has_no_parameters() {
    assert_eq!(get_param("", "zoom_query"), None);
    assert_eq!(get_param("?", "zoom_query"), None);
}

#[test]
fn utf8_phrases_decode() {
    let qs = "zoom_query=caf%C3%A9";
    assert_eq!(get_param(qs, "zoom_query").as_deref(), Some("café"));
}

#[test]
fn parse_or_default_ignores_surrounding_whitespace() {
    assert_eq!(parse_or_default::<usize>(Some(" 42 "), 1), 42);
}

#[test]
fn overflowing_numbers_fall_back_to_defaults() {
    let qs = "zoom_query=x&zoom_page=99999999999999999999999999";
    let request = SearchRequest::from_query_string(qs, &config());
    assert_eq!(request.page, 1);
}

#[test]
fn configured_default_page_size_is_honored() {
    let custom = SearchConfig {
        default_per_page: 20,
        ..SearchConfig::default()
    };
    let request = SearchRequest::from_query_string("zoom_query=x", &custom);
    assert_eq!(request.per_page, 20);
}

#[test]
fn match_default_applies_only_when_flag_is_absent() {
    let all_by_default = SearchConfig {
        match_default: MatchMode::All,
        ..SearchConfig::default()
    };
    let absent = SearchRequest::from_query_string("zoom_query=x", &all_by_default);
    assert_eq!(absent.mode(&all_by_default), MatchMode::All);

    let explicit = SearchRequest::from_query_string("zoom_query=x&zoom_and=0", &all_by_default);
    assert_eq!(explicit.mode(&all_by_default), MatchMode::Any);
}
