//! Open-ended decision log: raw form values in, persistable record out.
//!
//! The record mirrors the case schema's sections, but every description
//! leaf is raw practitioner text. Building is total: any bundle of form
//! values, including a completely blank one, produces a valid record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// `mode` value stamped on every open-ended record.
pub const OPEN_ENDED_MODE: &str = "open-ended";

/// Raw form values as collected, before any trimming or wrapping.
///
/// Multi-select fields carry the selected labels in selection order; the
/// matching rationale/description text applies to the whole selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogForm {
    pub incident_title: String,
    pub municipality: String,
    pub practitioner_role: String,
    pub notes: String,
    pub decision_context: String,
    pub csf_functions: Vec<String>,
    pub csf_rationale: String,
    pub tension: String,
    pub pfce_principles: Vec<String>,
    pub pfce_description: String,
    pub constraint: String,
    pub decision: String,
    pub outcomes_implications: String,
}

/// A persisted open-ended record. Immutable once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionLog {
    pub id: Uuid,
    pub mode: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub meta: LogMeta,
    #[serde(default)]
    pub technical: LogTechnical,
    #[serde(default)]
    pub ethical: LogEthical,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub decision_outcome: LogDecisionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogTechnical {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_context: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nist_csf_mapping: Vec<LogCsfEntry>,
}

/// One selected CSF function with the rationale shared by the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCsfEntry {
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEthical {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tensions: Vec<LogTension>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pfce_analysis: Vec<LogPfceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTension {
    pub description: String,
}

/// One selected PFCE principle with the description shared by the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPfceEntry {
    pub principle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogDecisionOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcomes_implications: Option<String>,
    /// Reserved, mirroring the case schema.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ethical_implications: Vec<Value>,
}

/// Assemble a decision log from form values.
///
/// Generates a fresh id and timestamp. Scalar texts are trimmed and wrap
/// to single-element sequences only when non-empty; multi-select labels
/// fan out one entry per label with the shared rationale attached to each.
pub fn build_log(form: LogForm) -> DecisionLog {
    let csf_rationale = clean(&form.csf_rationale);
    let pfce_description = clean(&form.pfce_description);

    DecisionLog {
        id: Uuid::new_v4(),
        mode: OPEN_ENDED_MODE.to_string(),
        timestamp: Utc::now(),
        meta: LogMeta {
            incident_title: clean(&form.incident_title),
            municipality: clean(&form.municipality),
            practitioner_role: clean(&form.practitioner_role),
            notes: clean(&form.notes),
        },
        technical: LogTechnical {
            decision_context: clean(&form.decision_context),
            nist_csf_mapping: labels(form.csf_functions)
                .into_iter()
                .map(|function| LogCsfEntry {
                    function,
                    rationale: csf_rationale.clone(),
                })
                .collect(),
        },
        ethical: LogEthical {
            tensions: clean(&form.tension)
                .map(|description| LogTension { description })
                .into_iter()
                .collect(),
            pfce_analysis: labels(form.pfce_principles)
                .into_iter()
                .map(|principle| LogPfceEntry {
                    principle,
                    description: pfce_description.clone(),
                })
                .collect(),
        },
        constraints: clean(&form.constraint).into_iter().collect(),
        decision_outcome: LogDecisionOutcome {
            decision: clean(&form.decision),
            outcomes_implications: clean(&form.outcomes_implications),
            ethical_implications: Vec::new(),
        },
    }
}

fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn labels(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .filter_map(|label| clean(&label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_builds_an_empty_record() {
        let log = build_log(LogForm::default());
        assert_eq!(log.mode, OPEN_ENDED_MODE);
        assert!(log.meta.incident_title.is_none());
        assert!(log.technical.decision_context.is_none());
        assert!(log.technical.nist_csf_mapping.is_empty());
        assert!(log.ethical.tensions.is_empty());
        assert!(log.ethical.pfce_analysis.is_empty());
        assert_eq!(log.constraints.len(), 0);
        assert!(log.decision_outcome.decision.is_none());
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let log = build_log(LogForm {
            tension: "   \n\t".to_string(),
            constraint: "  ".to_string(),
            ..LogForm::default()
        });
        assert!(log.ethical.tensions.is_empty());
        assert!(log.constraints.is_empty());
    }

    #[test]
    fn non_empty_scalars_wrap_to_single_element_sequences() {
        let log = build_log(LogForm {
            tension: "  uptime vs. evidence preservation ".to_string(),
            constraint: "no cyber insurance".to_string(),
            ..LogForm::default()
        });
        assert_eq!(log.ethical.tensions.len(), 1);
        assert_eq!(
            log.ethical.tensions[0].description,
            "uptime vs. evidence preservation"
        );
        assert_eq!(log.constraints, vec!["no cyber insurance".to_string()]);
    }

    #[test]
    fn multi_select_fans_out_with_shared_rationale() {
        let log = build_log(LogForm {
            csf_functions: vec!["Protect".to_string(), "Respond".to_string()],
            csf_rationale: "containment first".to_string(),
            pfce_principles: vec![
                "Justice".to_string(),
                "Autonomy".to_string(),
                "Explicability".to_string(),
            ],
            pfce_description: "who bears the outage".to_string(),
            ..LogForm::default()
        });

        let functions: Vec<&str> = log
            .technical
            .nist_csf_mapping
            .iter()
            .map(|entry| entry.function.as_str())
            .collect();
        assert_eq!(functions, ["Protect", "Respond"]);
        for entry in &log.technical.nist_csf_mapping {
            assert_eq!(entry.rationale.as_deref(), Some("containment first"));
        }

        assert_eq!(log.ethical.pfce_analysis.len(), 3);
        assert_eq!(log.ethical.pfce_analysis[0].principle, "Justice");
        for entry in &log.ethical.pfce_analysis {
            assert_eq!(entry.description.as_deref(), Some("who bears the outage"));
        }
    }

    #[test]
    fn blank_labels_are_dropped_from_selections() {
        let log = build_log(LogForm {
            csf_functions: vec![
                " Protect ".to_string(),
                String::new(),
                "Recover".to_string(),
            ],
            ..LogForm::default()
        });
        let functions: Vec<&str> = log
            .technical
            .nist_csf_mapping
            .iter()
            .map(|entry| entry.function.as_str())
            .collect();
        assert_eq!(functions, ["Protect", "Recover"]);
    }

    #[test]
    fn every_build_gets_a_fresh_id() {
        let first = build_log(LogForm::default());
        let second = build_log(LogForm::default());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn empty_meta_fields_are_omitted_from_the_record() {
        let log = build_log(LogForm {
            municipality: "Oldsmar, FL".to_string(),
            ..LogForm::default()
        });
        let value = serde_json::to_value(&log).expect("log should serialize");
        let meta = value.get("meta").expect("meta section present");
        assert_eq!(meta.get("municipality").and_then(|v| v.as_str()), Some("Oldsmar, FL"));
        assert!(meta.get("incident_title").is_none());
        assert!(value.get("timestamp").is_some());
    }
}
