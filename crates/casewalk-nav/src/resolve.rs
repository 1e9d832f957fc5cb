//! Step content resolution: (normalized case, step) to renderer content.
//!
//! Each step is a pure projection of one slice of the case. Dispatch is a
//! fixed table keyed by step index rather than a conditional chain, so the
//! per-step rules stay independently testable.

use casewalk_kernel::case::{Case, Constraint, PfceEntry};
use casewalk_kernel::principles::principle_definition;
use casewalk_kernel::prose::{Prose, TBD};

use crate::content::{Bullet, StepContent};
use crate::state::StepIndex;

type BodyFn = fn(&Case) -> Vec<Bullet>;

/// Heading and body rule per step, in walkthrough order.
const STEPS: [(&str, BodyFn); 9] = [
    ("Technical & Operational Background", background_body),
    ("Triggering Condition & Key Events", trigger_body),
    ("Decision Context", context_body),
    ("NIST CSF Mapping", csf_body),
    ("Ethical Tensions", tensions_body),
    ("PFCE Analysis", pfce_body),
    ("Constraints", constraints_body),
    ("Decision", decision_body),
    ("Outcomes & Implications", outcomes_body),
];

/// Resolve the content for one step of a case walkthrough.
pub fn resolve(case: &Case, step: StepIndex) -> StepContent {
    let (heading, body) = STEPS[usize::from(step.get() - 1)];
    StepContent {
        step: step.get(),
        heading: heading.to_string(),
        body: body(case),
    }
}

fn prose_body(prose: &Prose) -> Vec<Bullet> {
    prose.bullets().into_iter().map(Bullet::bare).collect()
}

fn background_body(case: &Case) -> Vec<Bullet> {
    prose_body(&case.background.technical_operational_background)
}

fn trigger_body(case: &Case) -> Vec<Bullet> {
    prose_body(&case.background.triggering_condition_key_events)
}

fn context_body(case: &Case) -> Vec<Bullet> {
    prose_body(&case.technical.decision_context)
}

fn csf_body(case: &Case) -> Vec<Bullet> {
    let mapping = &case.technical.nist_csf_mapping;
    if mapping.is_empty() {
        return vec![Bullet::bare(TBD)];
    }
    mapping
        .iter()
        .map(|entry| Bullet {
            text: format!("{} — {}", entry.function, entry.categories.joined()),
            sublines: entry.rationale.iter().cloned().collect(),
            note: None,
        })
        .collect()
}

fn tensions_body(case: &Case) -> Vec<Bullet> {
    let tensions = &case.ethical.tensions;
    if tensions.is_empty() {
        return vec![Bullet::bare(TBD)];
    }
    tensions
        .iter()
        .map(|tension| Bullet::bare(text_or_tbd(tension.description.as_deref())))
        .collect()
}

fn pfce_body(case: &Case) -> Vec<Bullet> {
    let entries = &case.ethical.pfce_analysis;
    if entries.is_empty() {
        return vec![Bullet::bare(TBD)];
    }
    entries
        .iter()
        .map(|entry| match entry {
            PfceEntry::Entry {
                principle,
                description,
            } => Bullet {
                text: format!("{}: {}", principle, text_or_tbd(description.as_deref())),
                sublines: Vec::new(),
                note: principle_definition(principle).map(str::to_string),
            },
            PfceEntry::Text(text) => Bullet::bare(text.clone()),
        })
        .collect()
}

fn constraints_body(case: &Case) -> Vec<Bullet> {
    let constraints = &case.constraints;
    if constraints.is_empty() {
        return vec![Bullet::bare(TBD)];
    }
    constraints
        .iter()
        .map(|constraint| match constraint {
            Constraint::Structured {
                kind,
                description,
                effect_on_decision,
            } => Bullet {
                text: format!("{} – {}", kind, text_or_tbd(description.as_deref())),
                sublines: effect_on_decision
                    .iter()
                    .map(|effect| format!("Effect on decision: {}", effect))
                    .collect(),
                note: None,
            },
            Constraint::Plain(text) => Bullet::bare(text.clone()),
        })
        .collect()
}

fn decision_body(case: &Case) -> Vec<Bullet> {
    prose_body(&case.decision_outcome.decision)
}

fn outcomes_body(case: &Case) -> Vec<Bullet> {
    prose_body(&case.decision_outcome.outcomes_implications)
}

/// Missing text renders the sentinel; present text renders verbatim.
fn text_or_tbd(text: Option<&str>) -> String {
    match text {
        Some(text) => text.to_string(),
        None => TBD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewalk_kernel::case::RawCase;
    use casewalk_kernel::normalize;

    fn case_from(json: &str) -> Case {
        let raw: RawCase = serde_json::from_str(json).expect("fixture should parse");
        normalize(raw)
    }

    fn empty_case() -> Case {
        case_from("{}")
    }

    #[test]
    fn every_step_resolves_on_the_empty_case() {
        let case = empty_case();
        for raw in 1..=9u8 {
            let content = resolve(&case, StepIndex::new(raw));
            assert_eq!(content.step, raw);
            assert!(!content.heading.is_empty());
            assert_eq!(content.body.len(), 1);
            assert_eq!(content.body[0].text, TBD);
        }
    }

    #[test]
    fn headings_follow_the_walkthrough_order() {
        let case = empty_case();
        let headings: Vec<String> = (1..=9u8)
            .map(|raw| resolve(&case, StepIndex::new(raw)).heading)
            .collect();
        assert_eq!(
            headings,
            [
                "Technical & Operational Background",
                "Triggering Condition & Key Events",
                "Decision Context",
                "NIST CSF Mapping",
                "Ethical Tensions",
                "PFCE Analysis",
                "Constraints",
                "Decision",
                "Outcomes & Implications",
            ]
        );
    }

    #[test]
    fn prose_sequence_renders_one_bullet_per_entry() {
        let case = case_from(
            r#"{"background": {"technical_operational_background": ["x", "y"]}}"#,
        );
        let content = resolve(&case, StepIndex::new(1));
        let texts: Vec<&str> = content.body.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, ["x", "y"]);
    }

    #[test]
    fn scalar_prose_renders_a_single_bullet() {
        let case = case_from(r#"{"technical": {"decision_context": "pay or rebuild"}}"#);
        let content = resolve(&case, StepIndex::new(3));
        assert_eq!(content.body.len(), 1);
        assert_eq!(content.body[0].text, "pay or rebuild");
    }

    #[test]
    fn csf_entry_renders_function_categories_and_rationale() {
        let case = case_from(
            r#"{"technical": {"nist_csf_mapping": [
                {"function": "Protect", "categories": ["PR.AA", "PR.DS"], "rationale": "r"}
            ]}}"#,
        );
        let content = resolve(&case, StepIndex::new(4));
        assert_eq!(content.body.len(), 1);
        assert_eq!(content.body[0].text, "Protect — PR.AA, PR.DS");
        assert_eq!(content.body[0].sublines, vec!["r".to_string()]);
    }

    #[test]
    fn csf_lone_category_string_is_a_one_element_sequence() {
        let case = case_from(
            r#"{"technical": {"nist_csf_mapping": [
                {"function": "Respond", "categories": "RS.MI"}
            ]}}"#,
        );
        let content = resolve(&case, StepIndex::new(4));
        assert_eq!(content.body[0].text, "Respond — RS.MI");
        assert!(content.body[0].sublines.is_empty());
    }

    #[test]
    fn tension_without_description_renders_the_sentinel() {
        let case = case_from(
            r#"{"ethical": {"tensions": [
                {"description": "uptime vs. evidence"},
                {}
            ]}}"#,
        );
        let content = resolve(&case, StepIndex::new(5));
        let texts: Vec<&str> = content.body.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, ["uptime vs. evidence", TBD]);
    }

    #[test]
    fn canonical_principle_attaches_its_definition() {
        let case = case_from(
            r#"{"ethical": {"pfce_analysis": [
                {"principle": "Justice", "description": "d"}
            ]}}"#,
        );
        let content = resolve(&case, StepIndex::new(6));
        assert_eq!(content.body[0].text, "Justice: d");
        let note = content.body[0].note.as_deref().expect("Justice has a definition");
        assert!(note.contains("fairly"));
    }

    #[test]
    fn unknown_principle_carries_no_note() {
        let case = case_from(
            r#"{"ethical": {"pfce_analysis": [
                {"principle": "Solidarity", "description": "d"}
            ]}}"#,
        );
        let content = resolve(&case, StepIndex::new(6));
        assert_eq!(content.body[0].text, "Solidarity: d");
        assert!(content.body[0].note.is_none());
    }

    #[test]
    fn plain_string_pfce_entry_falls_back_to_a_bare_bullet() {
        let case = case_from(r#"{"ethical": {"pfce_analysis": ["unstructured note"]}}"#);
        let content = resolve(&case, StepIndex::new(6));
        assert_eq!(content.body[0], Bullet::bare("unstructured note"));
    }

    #[test]
    fn structured_constraint_renders_type_description_and_effect() {
        let case = case_from(
            r#"{"constraints": [
                {"type": "legal", "description": "no ransom statute", "effect_on_decision": "forces rebuild"},
                "budget freeze"
            ]}"#,
        );
        let content = resolve(&case, StepIndex::new(7));
        assert_eq!(content.body[0].text, "legal – no ransom statute");
        assert_eq!(
            content.body[0].sublines,
            vec!["Effect on decision: forces rebuild".to_string()]
        );
        assert_eq!(content.body[1], Bullet::bare("budget freeze"));
    }

    #[test]
    fn decision_and_outcomes_read_the_outcome_section() {
        let case = case_from(
            r#"{"decision_outcome": {
                "decision": "refused payment",
                "outcomes_implications": ["weeks of outage", "$18M recovery"]
            }}"#,
        );
        assert_eq!(
            resolve(&case, StepIndex::new(8)).body[0].text,
            "refused payment"
        );
        let outcomes = resolve(&case, StepIndex::new(9));
        assert_eq!(outcomes.body.len(), 2);
        assert_eq!(outcomes.body[1].text, "$18M recovery");
    }
}
