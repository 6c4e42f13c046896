//! Search ranking and frame-navigation helpers for static help sites.
//!
//! A documentation generator emits an index of pages and a weighted keyword
//! table; this crate turns a user's query-string into a ranked, paginated
//! result list for the page's renderer, and computes the URLs that show,
//! hide, and synchronize the navigation frame. Everything runs in memory on
//! data loaded once per page; there is no I/O on the search path.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌──────────────┐
//! │ params.rs  │────▶│  query.rs  │────▶│  ranker.rs   │
//! │ (zoom_*    │     │ (terms,    │     │ (scan, score,│
//! │  defaults) │     │  wildcards)│     │  filter,sort)│
//! └────────────┘     └────────────┘     └──────┬───────┘
//!                                              │
//!       ┌────────────┐     ┌────────────┐      ▼
//!       │   toc.rs   │     │ types.rs   │  ┌──────────────┐
//!       │ (frame     │     │ (index,    │  │pagination.rs │
//!       │  URLs)     │     │  rows)     │  │ (slices,     │
//!       └────────────┘     └────────────┘  │  link window)│
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docrank::{search, SearchConfig, SearchOutcome, SearchRequest};
//! # use docrank::{Document, KeywordEntry, Posting, SearchIndex};
//!
//! # let index = SearchIndex {
//! #     docs: vec![Document {
//! #         title: "Install".into(),
//! #         url: "install.html".into(),
//! #         description: String::new(),
//! #         category: None,
//! #     }],
//! #     categories: vec![],
//! #     keywords: vec![KeywordEntry {
//! #         term: "install".into(),
//! #         postings: vec![Posting { doc: 0, weight: 10 }],
//! #     }],
//! # };
//! let config = SearchConfig::default();
//! let request = SearchRequest::from_query_string("zoom_query=install", &config);
//! match search(&index, &request, &config) {
//!     SearchOutcome::Page(page) => {
//!         assert_eq!(page.summary.total_matches, 1);
//!         assert_eq!(index.docs[page.rows[0].doc].title, "Install");
//!     }
//!     SearchOutcome::NoQuery => unreachable!("query was non-empty"),
//! }
//! ```

// Module declarations
mod config;
mod pagination;
mod params;
mod query;
mod ranker;
pub mod testing;
mod toc;
mod types;

// Re-exports for public API
pub use config::{MatchMode, SearchConfig, WordSplit};
pub use pagination::{link_window, page_count, page_range, LinkWindow};
pub use params::{get_param, parse_or_default, SearchRequest};
pub use query::{pattern_to_regex, split_terms, Query, Term};
pub use ranker::{rank, search, RankedResults, SearchOutcome, SearchPage, Summary};
pub use toc::{
    current_target_href, page_param, split_doc_path, sync_frame_url, toc_node_id,
    toggle_frame_url, FramePosition, Location, SplitPath, SyncAction, TocEntry,
};
pub use types::{Document, IndexError, KeywordEntry, Posting, ResultRow, SearchIndex};
