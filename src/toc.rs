//! Table-of-contents frame synchronization.
//!
//! Help pages render either bare or inside a frameset with a navigation
//! tree. Toggling between the two is pure URL arithmetic: showing the tree
//! means loading the doc-set's `index.html` with the current page as a
//! `page` query parameter, hiding it means navigating straight to the page.
//! Syncing means finding which tree node corresponds to the page currently
//! in the content frame.
//!
//! None of this touches ranking. The caller tells us where the browser is
//! ([`Location`]) and whether a frameset is present ([`FramePosition`]);
//! everything else is string work.

use tracing::debug;

use crate::params::get_param;

/// The parts of the browser location the URL arithmetic needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Scheme with its trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Host, with port if any.
    pub host: String,
    /// Path component of the current URL.
    pub pathname: String,
}

/// Whether the current document sits inside the help frameset.
///
/// In the browser this was the `top == window` probe; embedders state it
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePosition {
    /// Not in a frameset; the navigation tree is hidden.
    Top,
    /// Inside the frameset; the navigation tree is showing.
    Framed,
}

/// One row of the navigation tree: a node identifier and the page (with
/// anchor) it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub node_id: String,
    pub href: String,
}

/// A current path split at the root of the document set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Directory of the doc-set root.
    pub dirname: String,
    /// Doc page made relative to that root.
    pub doc_page: String,
}

/// What a sync request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Navigate the whole window to this URL (the tree was hidden).
    Navigate(String),
    /// The tree is showing; re-display it at this node.
    SelectNode(String),
}

/// Split `path` at the root of the document set.
///
/// `doc_page` is the page's URL relative to the doc set and `depth` is how
/// many directories deep the current page sits. Each level peels one
/// trailing component off the current dirname onto the front of the doc
/// page, leaving `dirname` pointing at the doc-set root. Backslash
/// separators are normalized first; some browsers report Windows paths
/// with them.
pub fn split_doc_path(path: &str, doc_page: &str, depth: usize) -> SplitPath {
    let path = path.replace('\\', "/");
    let mut dirname = match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    };
    let mut doc_page = doc_page.to_string();
    for _ in 0..depth {
        let (parent, component) = match dirname.rfind('/') {
            Some(idx) => (dirname[..idx].to_string(), dirname[idx + 1..].to_string()),
            None => (String::new(), dirname.clone()),
        };
        doc_page = format!("{}/{}", component, doc_page);
        dirname = parent;
    }
    debug!(dirname = %dirname, doc_page = %doc_page, "split doc path");
    SplitPath { dirname, doc_page }
}

/// URL that shows or hides the navigation frame for `doc_page`.
///
/// Showing (from [`FramePosition::Top`]) produces
/// `<protocol>//<host><dirname>/index.html?page=<doc page>` with the doc
/// page's slashes escaped as `%2F` so the whole relative path survives as
/// one query value. Hiding (from [`FramePosition::Framed`]) produces a
/// direct path to the page, percent-escapes decoded.
pub fn toggle_frame_url(
    location: &Location,
    doc_page: &str,
    depth: usize,
    position: FramePosition,
) -> String {
    match position {
        FramePosition::Top => {
            let info = split_doc_path(&location.pathname, doc_page, depth);
            let escaped = info.doc_page.replace('/', "%2F");
            format!(
                "{}//{}{}/index.html?page={}",
                location.protocol, location.host, info.dirname, escaped
            )
        }
        FramePosition::Framed => {
            let path = location.pathname.replace('\\', "/");
            let dirname = match path.rfind('/') {
                Some(idx) => &path[..idx],
                None => "",
            };
            decode(&format!("{}/{}", dirname, doc_page))
        }
    }
}

/// Resolve a sync request for the page currently in the content frame.
///
/// With the tree hidden this is the same navigation as
/// [`toggle_frame_url`]. With the tree showing, the doc page is resolved
/// against the TOC and the matching node identifier comes back for the
/// caller to select in its tree control.
pub fn sync_frame_url(
    location: &Location,
    entries: &[TocEntry],
    doc_page: &str,
    depth: usize,
    position: FramePosition,
) -> SyncAction {
    match position {
        FramePosition::Top => {
            SyncAction::Navigate(toggle_frame_url(location, doc_page, depth, position))
        }
        FramePosition::Framed => {
            let info = split_doc_path(&decode(&location.pathname), &decode(doc_page), depth);
            let node_id = toc_node_id(entries, &info.doc_page);
            SyncAction::SelectNode(node_id.to_string())
        }
    }
}

/// Find the tree node whose href is `target_href`. Falls back to `"0"`,
/// the root, when the page is not in the TOC.
pub fn toc_node_id<'a>(entries: &'a [TocEntry], target_href: &str) -> &'a str {
    let node_id = entries
        .iter()
        .find(|entry| entry.href == target_href)
        .map_or("0", |entry| entry.node_id.as_str());
    debug!(target = %target_href, node = %node_id, "resolved toc node");
    node_id
}

/// Href for the named anchor within the currently displayed page.
///
/// The TOC stores hrefs as `file.html#anchor`, so the current URL is
/// stripped of any fragment and leading directories (either separator)
/// before the anchor is attached.
pub fn current_target_href(current_href: &str, anchor: &str) -> String {
    let mut href = current_href;
    if let Some(idx) = href.find('#') {
        href = &href[..idx];
    }
    if let Some(idx) = href.rfind('/') {
        href = &href[idx + 1..];
    }
    if let Some(idx) = href.rfind('\\') {
        href = &href[idx + 1..];
    }
    format!("{}#{}", href, anchor)
}

/// The `page` deep-link parameter a frameset index page receives from
/// [`toggle_frame_url`], decoded and ready to load into the content frame.
pub fn page_param(query_string: &str) -> Option<String> {
    get_param(query_string, "page")
}

fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
