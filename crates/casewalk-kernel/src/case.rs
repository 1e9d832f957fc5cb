//! Case schema: the raw on-disk shape and its normalized counterpart.
//!
//! `RawCase` is exactly what a human-edited corpus record may contain:
//! every section optional, every inner field defaulted, string-or-list and
//! string-or-object unions where authors take shortcuts. `Case` is the
//! shape the rest of the system assumes: every section present, so
//! consumers branch on emptiness, never on absence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::prose::Prose;

/// A case record as it sits in the corpus: sections may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCase {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<Technical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethical: Option<Ethical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<Constraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_outcome: Option<DecisionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_a_glance: Option<BTreeMap<String, Value>>,
}

/// A fully-normalized case: every section exists, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_title: Option<String>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub technical: Technical,
    #[serde(default)]
    pub ethical: Ethical,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub decision_outcome: DecisionOutcome,
    #[serde(default)]
    pub at_a_glance: BTreeMap<String, Value>,
}

impl Case {
    /// Title to present: the display override when set, otherwise `title`.
    pub fn display_title(&self) -> &str {
        self.ui_title.as_deref().unwrap_or(&self.title)
    }
}

/// Scene-setting section: what was running, and what went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    #[serde(skip_serializing_if = "Prose::is_empty")]
    pub technical_operational_background: Prose,
    #[serde(skip_serializing_if = "Prose::is_empty")]
    pub triggering_condition_key_events: Prose,
}

/// Technical framing: the decision at hand and its NIST CSF mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technical {
    #[serde(skip_serializing_if = "Prose::is_empty")]
    pub decision_context: Prose,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nist_csf_mapping: Vec<CsfMapping>,
}

/// One NIST CSF function mapped onto the case, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsfMapping {
    pub function: String,
    #[serde(skip_serializing_if = "Categories::is_empty")]
    pub categories: Categories,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// CSF category identifiers: authors write a lone string or a sequence.
///
/// A lone string is treated as a one-element sequence everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    One(String),
    Many(Vec<String>),
}

impl Default for Categories {
    fn default() -> Self {
        Categories::Many(Vec::new())
    }
}

impl Categories {
    pub fn is_empty(&self) -> bool {
        match self {
            Categories::One(category) => category.is_empty(),
            Categories::Many(categories) => categories.is_empty(),
        }
    }

    /// Comma-joined presentation form, e.g. `"PR.AA, PR.DS"`.
    pub fn joined(&self) -> String {
        match self {
            Categories::One(category) => category.clone(),
            Categories::Many(categories) => categories.join(", "),
        }
    }
}

/// Ethical framing: tensions in play and the PFCE principle analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ethical {
    /// Canonical field name is plural; the legacy singular spelling is
    /// accepted on read and never written back.
    #[serde(alias = "tension", skip_serializing_if = "Vec::is_empty")]
    pub tensions: Vec<Tension>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pfce_analysis: Vec<PfceEntry>,
}

/// One ethical tension; the description may be left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One PFCE analysis entry: a structured principle/description pair, or a
/// bare string where the author skipped the structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PfceEntry {
    Entry {
        #[serde(default)]
        principle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Text(String),
}

/// One constraint on the decision: structured or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constraint {
    Structured {
        #[serde(rename = "type", default)]
        kind: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        effect_on_decision: Option<String>,
    },
    Plain(String),
}

/// Resolution section: what was decided and what followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionOutcome {
    #[serde(skip_serializing_if = "Prose::is_empty")]
    pub decision: Prose,
    #[serde(skip_serializing_if = "Prose::is_empty")]
    pub outcomes_implications: Prose,
    /// Reserved: carried through normalization, not yet rendered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ethical_implications: Vec<Value>,
}
