//! Fixture builders shared between unit and integration tests.
//!
//! Public so `tests/` can reach them, but not part of the supported API.

use crate::types::{Document, KeywordEntry, Posting, SearchIndex};

/// A document with predictable metadata derived from its position.
pub fn make_doc(position: usize) -> Document {
    Document {
        title: format!("Page {}", position),
        url: format!("page{}.html", position),
        description: format!("Description of page {}", position),
        category: None,
    }
}

/// A keyword entry from `(doc, weight)` pairs.
pub fn keyword(term: &str, postings: &[(usize, u32)]) -> KeywordEntry {
    KeywordEntry {
        term: term.to_string(),
        postings: postings
            .iter()
            .map(|&(doc, weight)| Posting { doc, weight })
            .collect(),
    }
}

/// An index of `doc_count` generated documents and the given keyword table.
pub fn index_with_keywords(doc_count: usize, keywords: Vec<KeywordEntry>) -> SearchIndex {
    SearchIndex {
        docs: (0..doc_count).map(make_doc).collect(),
        categories: Vec::new(),
        keywords,
    }
}
