pub mod anchor;
pub mod category;
pub mod context;
pub mod extract;

use dom_query::Document;

use category::Category;
use context::PageContext;
use extract::{IndexEntry, Page, PageSink};

/// Result of processing one source page.
pub struct ProcessedPage {
    pub category: Category,
    pub entries: Vec<IndexEntry>,
    pub html: String,
}

/// Classify a page, run the extraction passes in order, insert the anchor
/// markers and serialize the result.
///
/// `path` is the page's path relative to the source directory and `basename`
/// its file name without the `.html` extension.
pub fn process_page(path: &str, basename: &str, html: &str) -> ProcessedPage {
    let doc = Document::from(html);
    let context = PageContext::from_document(&doc);
    let category = category::classify(basename, &context.up);
    let page = Page {
        path,
        basename,
        token: category::name_token(basename),
        category,
        context: &context,
    };

    let mut sink = PageSink::new(page.path);
    if let Some(name) = context.page_name(category) {
        sink.record_page(name, category.kind());
    }
    extract::tables::extract(&doc, &page, &mut sink);
    extract::keywords::extract(&doc, &page, &mut sink);
    extract::sections::extract(&doc, &page, &mut sink);
    extract::variables::extract(&doc, &page, &mut sink);
    let entries = sink.apply();

    ProcessedPage {
        category,
        entries,
        html: doc.html().to_string(),
    }
}

// ── Tests ──
