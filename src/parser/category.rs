use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)-").unwrap());

pub const MODULES_PARENT: &str = "Additional Supplied Modules";

/// Index row type, stored verbatim in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Function,
    Operator,
    Type,
    Command,
    Guide,
    Service,
    Module,
    Section,
    Variable,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Function => "Function",
            Kind::Operator => "Operator",
            Kind::Type => "Type",
            Kind::Command => "Command",
            Kind::Guide => "Guide",
            Kind::Service => "Service",
            Kind::Module => "Module",
            Kind::Section => "Section",
            Kind::Variable => "Variable",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document category of a whole page. Unmatched pages are guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Function,
    Command,
    Guide,
    Type,
    Service,
    Module,
}

impl Category {
    pub fn kind(self) -> Kind {
        match self {
            Category::Function => Kind::Function,
            Category::Command => Kind::Command,
            Category::Guide => Kind::Guide,
            Category::Type => Kind::Type,
            Category::Service => Kind::Service,
            Category::Module => Kind::Module,
        }
    }
}

const TOKEN_RULES: &[(&str, Category)] = &[
    ("functions", Category::Function),
    ("sql", Category::Command),
    ("queries", Category::Command),
    ("tutorial", Category::Guide),
    ("datatype", Category::Type),
    ("app", Category::Service),
];

/// Leading word before the first hyphen: "functions" for "functions-string".
pub fn name_token(basename: &str) -> Option<&str> {
    TOKEN_RE
        .captures(basename)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn from_token(token: Option<&str>) -> Category {
    token
        .and_then(|t| TOKEN_RULES.iter().find(|(name, _)| *name == t))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Guide)
}

/// Parent titles may wrap across lines in the page head.
fn is_modules_parent(up: &str) -> bool {
    up.split_whitespace().eq(MODULES_PARENT.split_whitespace())
}

/// Filename lookup first, then the parent-title override.
pub fn classify(basename: &str, up: &str) -> Category {
    let category = from_token(name_token(basename));
    if is_modules_parent(up) {
        Category::Module
    } else {
        category
    }
}

// ── Tests ──
