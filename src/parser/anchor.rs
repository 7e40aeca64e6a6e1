use std::sync::LazyLock;

use regex::Regex;

use super::category::Kind;

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s+").unwrap());

pub const ANCHOR_CLASS: &str = "dashAnchor";

/// `//apple_ref/cpp/<kind>/<name>`, percent-encoded with spaces as `%20`.
///
/// The same string is stored as the index path fragment and as the `name`
/// attribute of the injected marker, so every extractor must build it here.
pub fn anchor_id(kind: Kind, name: &str) -> String {
    format!("//apple_ref/cpp/{}/{}", kind, urlencoding::encode(name))
}

pub fn marker_html(anchor: &str) -> String {
    format!(r#"<a name="{}" class="{}"></a>"#, anchor, ANCHOR_CLASS)
}

/// Drop line breaks together with the indentation after them, then trim.
pub fn collapse(text: &str) -> String {
    BREAK_RE.replace_all(text, "").trim().to_string()
}

// ── Tests ──
