//! Total normalization from `RawCase` to `Case`.
//!
//! Missing sections become empty sections; everything present is carried
//! through untouched. Normalizing never fails and never invents content
//! beyond empty defaults, so downstream code branches on emptiness alone.

use crate::case::{Case, RawCase};

/// Fill in every missing section of `raw` with its empty default.
pub fn normalize(raw: RawCase) -> Case {
    Case {
        id: raw.id,
        title: raw.title,
        ui_title: raw.ui_title,
        background: raw.background.unwrap_or_default(),
        technical: raw.technical.unwrap_or_default(),
        ethical: raw.ethical.unwrap_or_default(),
        constraints: raw.constraints.unwrap_or_default(),
        decision_outcome: raw.decision_outcome.unwrap_or_default(),
        at_a_glance: raw.at_a_glance.unwrap_or_default(),
    }
}

impl From<RawCase> for Case {
    fn from(raw: RawCase) -> Self {
        normalize(raw)
    }
}

impl From<Case> for RawCase {
    fn from(case: Case) -> Self {
        RawCase {
            id: case.id,
            title: case.title,
            ui_title: case.ui_title,
            background: Some(case.background),
            technical: Some(case.technical),
            ethical: Some(case.ethical),
            constraints: Some(case.constraints),
            decision_outcome: Some(case.decision_outcome),
            at_a_glance: Some(case.at_a_glance),
        }
    }
}
