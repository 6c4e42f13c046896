//! Page slicing and the result-page link window.

use super::common::{index_with_keywords, keyword, page_for};
use docrank::{link_window, LinkWindow};

/// 25 documents all matching one keyword, weights descending by position.
fn index_of_25() -> docrank::SearchIndex {
    let postings: Vec<(usize, u32)> = (0..25).map(|doc| (doc, (25 - doc) as u32)).collect();
    index_with_keywords(25, vec![keyword("topic", &postings)])
}

#[test]
fn twenty_five_results_make_three_pages_of_ten() {
    let index = index_of_25();

    let first = page_for(&index, "zoom_query=topic&zoom_page=1");
    assert_eq!(first.summary.page_count, 3);
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.rows[0].doc, 0);
    assert_eq!(first.rows[9].doc, 9);

    let last = page_for(&index, "zoom_query=topic&zoom_page=3");
    assert_eq!(last.rows.len(), 5);
    assert_eq!(last.rows[0].doc, 20);
    assert_eq!(last.rows[4].doc, 24);
}

#[test]
fn page_size_comes_from_the_query_string() {
    let index = index_of_25();
    let page = page_for(&index, "zoom_query=topic&zoom_per_page=20&zoom_page=2");
    assert_eq!(page.summary.page_count, 2);
    assert_eq!(page.rows.len(), 5);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let index = index_of_25();
    let page = page_for(&index, "zoom_query=topic&zoom_page=9");
    assert!(page.rows.is_empty());
    assert_eq!(page.summary.total_matches, 25);
    assert_eq!(page.summary.page_count, 3);
}

#[test]
fn summary_counts_cover_all_pages_not_just_this_one() {
    let index = index_of_25();
    let page = page_for(&index, "zoom_query=topic&zoom_page=2");
    assert_eq!(page.summary.total_matches, 25);
    assert_eq!(page.summary.full_matches, 25);
}

#[test]
fn link_window_tracks_the_current_page() {
    assert_eq!(link_window(1, 3), LinkWindow { first: 1, last: 3 });
    assert_eq!(link_window(12, 40), LinkWindow { first: 2, last: 22 });
    assert_eq!(
        link_window(40, 40),
        LinkWindow {
            first: 30,
            last: 40
        }
    );
}
