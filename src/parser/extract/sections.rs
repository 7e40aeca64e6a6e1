use dom_query::{Document, Selection};

use super::{Page, PageSink};
use crate::parser::anchor::{anchor_id, collapse};
use crate::parser::category::{Category, Kind};

/// Two reference-section and two general-section containers.
const SECTION_CLASSES: &[&str] = &["REFSECT1", "REFSECT2", "SECT1", "SECT2"];
const FUNCTION_SELECTOR: &str = ".FUNCTION, .function";

fn heading_selector() -> String {
    SECTION_CLASSES
        .iter()
        .flat_map(|class| ["h1", "h2"].map(|h| format!("div.{class} > {h}")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every section heading gets a marker. Headings that name a function are
/// indexed on command and function pages, pointing at the section marker.
pub fn extract<'d>(doc: &'d Document, page: &Page, sink: &mut PageSink<'d>) {
    let indexes_functions = matches!(page.category, Category::Command | Category::Function);

    for heading in doc.select(&heading_selector()).nodes() {
        let id = anchor_id(Kind::Section, &collapse(&heading.text()));

        if indexes_functions {
            let function = Selection::from(*heading).select(FUNCTION_SELECTOR);
            if let Some(first) = function.nodes().first() {
                sink.record(collapse(&first.text()), Kind::Function, &id);
            }
        }

        sink.mark(*heading, id);
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::context::PageContext;
    use crate::parser::extract::IndexEntry;

    const PAGE: &str = r#"
        <div class="SECT1"><h1 class="SECT1">9.4. String Functions</h1>
          <div class="SECT2"><h2 class="SECT2">9.4.1. <tt class="FUNCTION">format</tt></h2></div>
        </div>
        <div class="REFSECT1"><h2>Description</h2></div>
        <div class="REFSECT2"><h3>Not a section heading</h3></div>
        <div class="SECT3"><h2><tt class="FUNCTION">ignored</tt></h2></div>"#;

    fn run(category: Category) -> (Document, Vec<IndexEntry>) {
        let doc = Document::from(PAGE);
        let ctx = PageContext::default();
        let page = Page {
            path: "functions-string.html",
            basename: "functions-string",
            token: Some("functions"),
            category,
            context: &ctx,
        };
        let mut sink = PageSink::new(page.path);
        extract(&doc, &page, &mut sink);
        let entries = sink.apply();
        (doc, entries)
    }

    #[test]
    fn selector_covers_all_containers() {
        let selector = heading_selector();
        assert!(selector.starts_with("div.REFSECT1 > h1, div.REFSECT1 > h2"));
        assert!(selector.ends_with("div.SECT2 > h2"));
    }

    #[test]
    fn every_section_heading_is_anchored() {
        let (doc, _) = run(Category::Guide);
        let names: Vec<String> = doc
            .select("a.dashAnchor")
            .nodes()
            .iter()
            .filter_map(|a| a.attr("name").map(|n| n.to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                "//apple_ref/cpp/Section/9.4.%20String%20Functions",
                "//apple_ref/cpp/Section/9.4.1.%20format",
                "//apple_ref/cpp/Section/Description",
            ]
        );
        assert_eq!(doc.select("h1 > a.dashAnchor:first-child").length(), 1);
    }

    #[test]
    fn guide_sections_are_not_indexed() {
        let (_, entries) = run(Category::Guide);
        assert!(entries.is_empty());
    }

    #[test]
    fn inline_function_is_indexed_against_section_anchor() {
        let (_, entries) = run(Category::Function);
        assert_eq!(
            entries,
            vec![IndexEntry {
                name: "format".into(),
                kind: Kind::Function,
                path: "functions-string.html#//apple_ref/cpp/Section/9.4.1.%20format".into(),
            }]
        );
    }

    #[test]
    fn command_pages_index_inline_functions() {
        let (_, entries) = run(Category::Command);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, Kind::Function);
    }
}
