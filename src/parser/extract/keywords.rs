use dom_query::Document;

use super::{anchor_element, Page, PageSink};
use crate::parser::anchor::collapse;
use crate::parser::category::Category;

const KEYWORD_SELECTOR: &str = "div > h2 tt.LITERAL, div > h3 tt.LITERAL, \
                                div > h2 code.literal, div > h3 code.literal";

pub fn applies(page: &Page) -> bool {
    !matches!(page.category, Category::Type | Category::Module)
}

/// Clause names written as literals inside sub-headings, e.g. `WHERE` in the
/// SELECT reference page.
pub fn extract<'d>(doc: &'d Document, page: &Page, sink: &mut PageSink<'d>) {
    if !applies(page) {
        return;
    }

    let kind = page.category.kind();
    for node in doc.select(KEYWORD_SELECTOR).nodes() {
        let name = collapse(&node.text());
        if name.is_empty() {
            continue;
        }
        let display = match page.category {
            Category::Function => name.clone(),
            _ => format!("{} — {}", page.context.title, name),
        };
        anchor_element(sink, *node, kind, &name, display);
    }
}

// ── Tests ──
