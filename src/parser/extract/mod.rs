pub mod keywords;
pub mod sections;
pub mod tables;
pub mod variables;

use dom_query::{NodeRef, Selection};
use tracing::debug;

use super::anchor;
use super::category::{Category, Kind};
use super::context::PageContext;

/// One row of the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub kind: Kind,
    pub path: String,
}

/// What every pass knows about the page it is looking at.
pub struct Page<'a> {
    pub path: &'a str,
    pub basename: &'a str,
    pub token: Option<&'a str>,
    pub category: Category,
    pub context: &'a PageContext,
}

/// Collects entries and planned anchor insertions for one page.
///
/// Markers are only inserted by [`PageSink::apply`], after every pass has
/// finished matching, so no pass sees nodes added by an earlier one.
pub struct PageSink<'d> {
    path: String,
    entries: Vec<IndexEntry>,
    markers: Vec<(NodeRef<'d>, String)>,
}

impl<'d> PageSink<'d> {
    pub fn new(path: &str) -> Self {
        PageSink {
            path: path.to_string(),
            entries: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Entry pointing at the page itself.
    pub fn record_page(&mut self, name: String, kind: Kind) {
        debug!(kind = %kind, name = %name, "page entry");
        self.entries.push(IndexEntry {
            name,
            kind,
            path: self.path.clone(),
        });
    }

    /// Entry pointing at `anchor` inside the page.
    pub fn record(&mut self, name: String, kind: Kind, anchor: &str) {
        debug!(kind = %kind, name = %name, "entry");
        self.entries.push(IndexEntry {
            name,
            kind,
            path: format!("{}#{}", self.path, anchor),
        });
    }

    /// Plan a marker as the first child of `node`.
    pub fn mark(&mut self, node: NodeRef<'d>, anchor: String) {
        self.markers.push((node, anchor));
    }

    /// Insert all planned markers and hand back the recorded entries.
    pub fn apply(self) -> Vec<IndexEntry> {
        for (node, anchor) in &self.markers {
            Selection::from(*node).prepend_html(anchor::marker_html(anchor));
        }
        self.entries
    }
}

/// Name and anchor an element the same way in every pass: record the entry
/// and mark the element itself.
pub(crate) fn anchor_element<'d>(
    sink: &mut PageSink<'d>,
    node: NodeRef<'d>,
    kind: Kind,
    name: &str,
    display: String,
) {
    let id = anchor::anchor_id(kind, name);
    sink.record(display, kind, &id);
    sink.mark(node, id);
}

/// Element children of `node` with the given tag name.
pub(crate) fn child_elements<'d>(node: &NodeRef<'d>, tag: &str) -> Vec<NodeRef<'d>> {
    node.children()
        .into_iter()
        .filter(|child| {
            child
                .node_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        })
        .collect()
}

// ── Tests ──
