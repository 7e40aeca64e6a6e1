use dom_query::Document;

use super::{anchor_element, Page, PageSink};
use crate::parser::anchor::collapse;
use crate::parser::category::Kind;

const VARIABLE_SELECTOR: &str = "div.VARIABLELIST dt .VARNAME, div.VARIABLELIST dt .varname";

pub fn applies(basename: &str) -> bool {
    basename.starts_with("runtime-config") || basename.contains("settings")
}

/// Configuration parameters defined in variable lists of settings pages.
pub fn extract<'d>(doc: &'d Document, page: &Page, sink: &mut PageSink<'d>) {
    if !applies(page.basename) {
        return;
    }

    for node in doc.select(VARIABLE_SELECTOR).nodes() {
        let name = collapse(&node.text());
        anchor_element(sink, *node, Kind::Variable, &name, name.clone());
    }
}

// ── Tests ──
