//! Renderer-facing structured content.
//!
//! A `StepContent` is everything the renderer needs to draw one step:
//! a heading and a body of bullets. Bullets may carry indented sublines
//! (rationale, effect on decision) and a supplementary note (canonical
//! principle definition) the renderer places as it sees fit.

use serde::{Deserialize, Serialize};

/// One step of a walkthrough, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContent {
    pub step: u8,
    pub heading: String,
    pub body: Vec<Bullet>,
}

/// One body line with optional attached detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sublines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Bullet {
    /// A bullet with no sublines and no note.
    pub fn bare(text: impl Into<String>) -> Self {
        Bullet {
            text: text.into(),
            sublines: Vec::new(),
            note: None,
        }
    }
}
