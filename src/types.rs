//! The building blocks of a help-site search index.
//!
//! These types are the explicit form of the parallel arrays a generated help
//! page embeds (`titles`, `urls`, `descriptions`, category assignments, and
//! the keyword table). Documents are identified by their zero-based position
//! in [`SearchIndex::docs`]; postings refer back to documents by that
//! position.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `doc < docs.len()`. A posting that points past the document
//!   list produces garbage rows.
//! - **Document**: `category`, when present, indexes into
//!   [`SearchIndex::categories`].
//!
//! The ranker trusts its input; run [`SearchIndex::validate`] once after
//! loading if the index comes from a generator you don't control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What users see when they get a search result.
///
/// Everything here is display metadata. The document's identity is its
/// position in the index's document list, which is what postings and
/// [`ResultRow`]s carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Index into the category name table, if the page is categorized.
    #[serde(default)]
    pub category: Option<usize>,
}

/// One document's contribution for a keyword: which document, and how much
/// finding the keyword there is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc: usize,
    pub weight: u32,
}

/// A keyword paired with the documents that contain it.
///
/// The keyword table is an ordered sequence, not a map: generators may emit
/// the same term more than once and each entry is scanned on its own. No
/// deduplication happens at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    pub term: String,
    pub postings: Vec<Posting>,
}

/// The complete searchable index for one documentation set.
///
/// Loaded once (from JSON for the CLI, or built in memory by an embedding
/// site generator) and never mutated by a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub docs: Vec<Document>,
    /// Category display names; `Document::category` indexes into this.
    #[serde(default)]
    pub categories: Vec<String>,
    pub keywords: Vec<KeywordEntry>,
}

impl SearchIndex {
    /// Whether this documentation set was generated with categories.
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Check referential integrity: every posting targets a real document
    /// and every category assignment a real category name.
    ///
    /// The ranker itself never runs this; a loaded index is trusted input.
    /// It exists for index authors, and the CLI's `inspect` runs it.
    pub fn validate(&self) -> Result<(), IndexError> {
        for entry in &self.keywords {
            for (position, posting) in entry.postings.iter().enumerate() {
                if posting.doc >= self.docs.len() {
                    return Err(IndexError::PostingOutOfBounds {
                        term: entry.term.clone(),
                        position,
                        doc: posting.doc,
                        docs_len: self.docs.len(),
                    });
                }
            }
        }
        for (doc, document) in self.docs.iter().enumerate() {
            if let Some(category) = document.category {
                if category >= self.categories.len() {
                    return Err(IndexError::CategoryOutOfBounds {
                        doc,
                        category,
                        categories_len: self.categories.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One ranked search result: a document position, its accumulated score,
/// and how many keyword hits contributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub doc: usize,
    pub score: u64,
    pub matched_terms: usize,
}

/// Error type for index integrity violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A posting targets a document position past the document list.
    PostingOutOfBounds {
        term: String,
        position: usize,
        doc: usize,
        docs_len: usize,
    },
    /// A document's category assignment has no matching category name.
    CategoryOutOfBounds {
        doc: usize,
        category: usize,
        categories_len: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::PostingOutOfBounds {
                term,
                position,
                doc,
                docs_len,
            } => {
                write!(
                    f,
                    "posting {} of keyword '{}' targets doc {} >= docs.len() {}",
                    position, term, doc, docs_len
                )
            }
            IndexError::CategoryOutOfBounds {
                doc,
                category,
                categories_len,
            } => {
                write!(
                    f,
                    "doc {} assigned category {} >= categories.len() {}",
                    doc, category, categories_len
                )
            }
        }
    }
}

impl std::error::Error for IndexError {}
