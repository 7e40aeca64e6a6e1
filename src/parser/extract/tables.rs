use std::sync::LazyLock;

use dom_query::{Document, NodeRef, Selection};
use regex::Regex;

use super::{anchor_element, child_elements, Page, PageSink};
use crate::parser::anchor::collapse;
use crate::parser::category::{Category, Kind};

static OPERATOR_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Functions and )?Operators\s*$").unwrap());

const TABLE_SELECTOR: &str = "table.CALSTABLE";

pub fn applies(page: &Page) -> bool {
    matches!(page.category, Category::Type | Category::Module) || page.token == Some("functions")
}

/// Function, operator and type rows of structured tables.
pub fn extract<'d>(doc: &'d Document, page: &Page, sink: &mut PageSink<'d>) {
    if !applies(page) {
        return;
    }

    for table in doc.select(TABLE_SELECTOR).nodes() {
        let Some(kind) = row_kind(&header_text(table), page.category) else {
            continue;
        };

        for cell in first_cells(table) {
            let name = collapse(&cell.text());
            let display = match kind {
                Kind::Operator => operator_name(&page.context.title, &name),
                _ => name.clone(),
            };
            anchor_element(sink, cell, kind, &name, display);
        }
    }
}

/// Sub-kind announced by a table's first header cell.
pub fn row_kind(header: &str, category: Category) -> Option<Kind> {
    match header {
        "Function" => Some(Kind::Function),
        "Operator" => Some(Kind::Operator),
        "Name" if category == Category::Type => Some(Kind::Type),
        _ => None,
    }
}

/// "Mathematical Functions and Operators" + "+" → "Mathematical: +".
pub fn operator_name(title: &str, operator: &str) -> String {
    let stripped = OPERATOR_SUFFIX_RE.replace(title, "");
    format!("{}: {}", stripped.trim(), operator)
}

fn header_text(table: &NodeRef) -> String {
    child_elements(table, "thead")
        .iter()
        .flat_map(|thead| child_elements(thead, "tr"))
        .flat_map(|tr| child_elements(&tr, "th").into_iter().next())
        .next()
        .map(|th| Selection::from(th).text().trim().to_string())
        .unwrap_or_default()
}

fn first_cells<'d>(table: &NodeRef<'d>) -> Vec<NodeRef<'d>> {
    child_elements(table, "tbody")
        .iter()
        .flat_map(|tbody| child_elements(tbody, "tr"))
        .filter_map(|tr| child_elements(&tr, "td").into_iter().next())
        .collect()
}

// ── Tests ──
