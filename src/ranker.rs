//! The result ranker: keyword scan, score accumulation, filtering, ordering.
//!
//! One invocation walks every query term across the keyword table,
//! accumulates per-document scores in a transient table, filters by
//! category and match mode, and sorts what survives. Nothing is cached
//! between invocations; re-running a search on the same index rebuilds the
//! table from scratch, which is what makes repeated pagination renders safe.
//!
//! # Score accumulation
//!
//! Scoring is deliberately non-linear. The first hit on a document sets its
//! score to the posting weight. Every later hit either adds 1, when the
//! running score is already past 10000 (a saturation guard against
//! high-frequency terms producing gigantic scores), or adds the weight and
//! then doubles the total, which strongly favors documents matched by more
//! than one term.

use tracing::debug;

use crate::config::{MatchMode, SearchConfig};
use crate::pagination::{page_count, page_range};
use crate::params::SearchRequest;
use crate::query::Query;
use crate::types::{ResultRow, SearchIndex};

/// Saturation threshold: past this, further hits add 1 instead of
/// compounding.
const SCORE_SATURATION: u64 = 10_000;

/// Every surviving row for a query, sorted, along with the counts the
/// renderer displays.
#[derive(Debug, Clone)]
pub struct RankedResults {
    /// All rows across every page, score descending, matched-term count
    /// breaking ties.
    pub rows: Vec<ResultRow>,
    /// How many terms the query had, for "matched m of n" displays.
    pub term_count: usize,
    /// Documents whose matched-term count reached the term count.
    pub full_matches: usize,
    /// Distinct keywords that matched, when highlighting is on.
    pub matched_keywords: Vec<String>,
    /// Keyword collection hit the configured limit and stopped.
    pub highlight_overflow: bool,
}

impl RankedResults {
    pub fn total_matches(&self) -> usize {
        self.rows.len()
    }

    /// Matches that hit some but not all terms. What the renderer prints
    /// next to the full-match count in match-any searches.
    pub fn partial_matches(&self) -> usize {
        self.rows.len() - self.full_matches.min(self.rows.len())
    }
}

struct Slot {
    score: u64,
    count: usize,
}

/// Rank every document in the index against a parsed query.
///
/// `category` of `None` searches all categories. An empty query produces
/// empty results without touching the keyword table; callers that need the
/// distinct "no query" display state check [`Query::is_empty`] first (or go
/// through [`search`]).
pub fn rank(
    index: &SearchIndex,
    query: &Query,
    category: Option<usize>,
    mode: MatchMode,
    config: &SearchConfig,
) -> RankedResults {
    let mut table: Vec<Slot> = index
        .docs
        .iter()
        .map(|_| Slot { score: 0, count: 0 })
        .collect();

    let mut matched_keywords: Vec<String> = Vec::new();
    let mut highlight_overflow = false;

    for term in &query.terms {
        for entry in &index.keywords {
            if !term.matches(&entry.term, config) {
                continue;
            }

            if config.highlighting && !highlight_overflow && !matched_keywords.contains(&entry.term)
            {
                matched_keywords.push(entry.term.clone());
                if matched_keywords.len() >= config.highlight_limit {
                    highlight_overflow = true;
                }
            }

            for posting in &entry.postings {
                // A posting past the document list means a broken index;
                // validate() reports it, the scan just skips it.
                let Some(slot) = table.get_mut(posting.doc) else {
                    debug!(doc = posting.doc, term = %entry.term, "posting out of bounds");
                    continue;
                };
                if slot.count == 0 {
                    slot.score = u64::from(posting.weight);
                } else if slot.score > SCORE_SATURATION {
                    slot.score += 1;
                } else {
                    slot.score = (slot.score + u64::from(posting.weight)) * 2;
                }
                // Counts every keyword hit, so one wildcard term matching
                // several keywords inflates this past the term count.
                slot.count += 1;
            }

            if !term.scans_all_keywords(config) {
                // One keyword can correspond to only one exact term.
                break;
            }
        }
    }

    let term_count = query.terms.len();
    let mut full_matches = 0usize;
    let mut rows: Vec<ResultRow> = Vec::new();

    for (doc, slot) in table.iter().enumerate() {
        if slot.score == 0 {
            continue;
        }
        if let Some(wanted) = category {
            if index.docs[doc].category != Some(wanted) {
                continue;
            }
        }
        if slot.count >= term_count {
            full_matches += 1;
        } else if mode == MatchMode::All {
            continue;
        }
        rows.push(ResultRow {
            doc,
            score: slot.score,
            matched_terms: slot.count,
        });
    }

    if rows.len() > 1 {
        rows.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(b.matched_terms.cmp(&a.matched_terms))
        });
    }

    debug!(
        terms = term_count,
        total = rows.len(),
        full = full_matches,
        "ranked query"
    );

    RankedResults {
        rows,
        term_count,
        full_matches,
        matched_keywords,
        highlight_overflow,
    }
}

/// Counts and coordinates for one rendered result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_matches: usize,
    pub full_matches: usize,
    /// `total - full`; shown in match-any searches with several terms.
    pub partial_matches: usize,
    pub term_count: usize,
    pub page: usize,
    pub per_page: usize,
    pub page_count: usize,
}

/// One page of results plus everything the renderer needs around it.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub summary: Summary,
    /// The rows inside the requested page only.
    pub rows: Vec<ResultRow>,
    pub matched_keywords: Vec<String>,
    pub highlight_overflow: bool,
}

/// Outcome of a search invocation as the renderer sees it.
///
/// "No query" is its own state, not an empty result list: the page renders
/// the bare form instead of a "no results found" line.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    NoQuery,
    Page(SearchPage),
}

/// Run a complete search: parse the phrase, rank, slice out the requested
/// page.
pub fn search(index: &SearchIndex, request: &SearchRequest, config: &SearchConfig) -> SearchOutcome {
    let query = Query::parse(&request.phrase, config);
    if query.is_empty() {
        return SearchOutcome::NoQuery;
    }

    let ranked = rank(index, &query, request.category, request.mode(config), config);

    let total = ranked.total_matches();
    let range = page_range(total, request.page, request.per_page);
    let summary = Summary {
        total_matches: total,
        full_matches: ranked.full_matches,
        partial_matches: ranked.partial_matches(),
        term_count: ranked.term_count,
        page: request.page,
        per_page: request.per_page,
        page_count: page_count(total, request.per_page),
    };

    SearchOutcome::Page(SearchPage {
        summary,
        rows: ranked.rows[range].to_vec(),
        matched_keywords: ranked.matched_keywords,
        highlight_overflow: ranked.highlight_overflow,
    })
}
