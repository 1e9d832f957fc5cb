//! Prose: the text-or-list union behind every polymorphic case field.
//!
//! Case authors write "one or more lines of prose" three ways: leave the
//! field out, give a single string, or give an ordered list of strings.
//! `Prose` models that as a tagged union so downstream code never inspects
//! runtime types, and `bullets()` is the one coercion rule everyone shares.

use serde::{Deserialize, Serialize};

/// Sentinel rendered wherever a case record leaves a field unanswered.
pub const TBD: &str = "TBD";

/// One-or-more lines of prose, as authored.
///
/// Deserializes from a missing key (via `#[serde(default)]` at the use
/// site), JSON null, a bare string, or an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prose {
    /// Field absent or explicitly null.
    #[default]
    Empty,
    /// A single string, kept verbatim.
    Text(String),
    /// An ordered sequence of lines.
    List(Vec<String>),
}

impl Prose {
    /// Whether the field carries no renderable content at all.
    ///
    /// An empty list counts as empty; an empty string does not, since the
    /// coercion rule keeps authored strings verbatim.
    pub fn is_empty(&self) -> bool {
        match self {
            Prose::Empty => true,
            Prose::Text(_) => false,
            Prose::List(lines) => lines.is_empty(),
        }
    }

    /// The coercion rule: project this field into rendered bullet lines.
    ///
    /// Absent → one `TBD` bullet; a string → itself; a non-empty list →
    /// one bullet per entry in stored order; an empty list → one `TBD`
    /// bullet.
    pub fn bullets(&self) -> Vec<String> {
        match self {
            Prose::Empty => vec![TBD.to_string()],
            Prose::Text(text) => vec![text.clone()],
            Prose::List(lines) if lines.is_empty() => vec![TBD.to_string()],
            Prose::List(lines) => lines.clone(),
        }
    }
}

impl From<&str> for Prose {
    fn from(text: &str) -> Self {
        Prose::Text(text.to_string())
    }
}

impl From<Vec<String>> for Prose {
    fn from(lines: Vec<String>) -> Self {
        Prose::List(lines)
    }
}
