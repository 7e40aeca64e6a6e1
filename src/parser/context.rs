use dom_query::Document;

use super::category::Category;

/// Names pulled from a page's head and heading structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub title: String,
    pub h1: String,
    pub up: String,
}

impl PageContext {
    pub fn from_document(doc: &Document) -> Self {
        let title = doc.select("head > title").first().text().to_string();
        let h1 = doc.select("h1").first().text().to_string();
        let up = doc
            .select("head link[rel]")
            .nodes()
            .iter()
            .find(|link| {
                link.attr("rel")
                    .is_some_and(|rel| rel.trim().eq_ignore_ascii_case("up"))
            })
            .and_then(|link| link.attr("title"))
            .map(|t| t.to_string())
            .unwrap_or_default();
        PageContext { title, h1, up }
    }

    /// Display name of the whole-page entry, if this page gets one.
    pub fn page_name(&self, category: Category) -> Option<String> {
        match category {
            Category::Guide if self.h1.is_empty() => None,
            Category::Guide => Some(format!("{} — {}", self.h1, self.up)),
            _ if self.title.is_empty() => None,
            _ => Some(self.title.clone()),
        }
    }
}

// ── Tests ──
