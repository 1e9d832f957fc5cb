//! Session navigation state machine.
//!
//! State is an explicit value: every transition consumes a `NavState` and
//! returns the successor, so sessions are unit-testable without a hosting
//! environment. Transitions are total. Out-of-range steps are clamped,
//! never rejected; there is no invalid-transition error.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A walkthrough step, always within `[1, 9]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct StepIndex(u8);

impl StepIndex {
    pub const FIRST: StepIndex = StepIndex(1);
    pub const LAST: StepIndex = StepIndex(9);

    /// Build a step index, clamping out-of-range input into `[1, 9]`.
    pub fn new(raw: u8) -> Self {
        StepIndex(raw.clamp(Self::FIRST.0, Self::LAST.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following step; saturates at the last step.
    pub fn next(self) -> Self {
        StepIndex::new(self.0.saturating_add(1))
    }

    /// The preceding step; saturates at the first step.
    pub fn previous(self) -> Self {
        StepIndex::new(self.0.saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl Default for StepIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u8> for StepIndex {
    fn from(raw: u8) -> Self {
        StepIndex::new(raw)
    }
}

impl From<StepIndex> for u8 {
    fn from(step: StepIndex) -> u8 {
        step.0
    }
}

impl Display for StepIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which surface the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Selecting,
    Walking { step: StepIndex },
}

/// Discrete user actions reported by the renderer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Explicit case selection from the selecting view.
    Pick(String),
    Next,
    Previous,
    Exit,
    /// External selector path: changes the active case identity without
    /// going through `Pick`. The case-switch guard reacts afterwards.
    SelectCase(String),
}

/// One session's navigation state.
///
/// Invariant, maintained by the transitions: `Walking` implies
/// `active_case` is set, and the step is always clamped to `[1, 9]`.
/// Nothing here is persisted; a session's state dies with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub view: View,
    pub active_case: Option<String>,
    /// The last case identity the machine has already reacted to.
    pub previous_case: Option<String>,
}

impl NavState {
    /// Fresh session on the case-selection surface.
    pub fn selecting() -> Self {
        NavState {
            view: View::Selecting,
            active_case: None,
            previous_case: None,
        }
    }

    /// Deep-link entry straight into a walkthrough at the given step.
    ///
    /// `previous_case` is left unset so the first identity observation
    /// records rather than resets.
    pub fn walking(case_id: &str, step: StepIndex) -> Self {
        NavState {
            view: View::Walking { step },
            active_case: Some(case_id.to_string()),
            previous_case: None,
        }
    }

    /// The step currently shown, if walking.
    pub fn step(&self) -> Option<StepIndex> {
        match self.view {
            View::Walking { step } => Some(step),
            View::Selecting => None,
        }
    }

    /// Apply one user action and return the successor state.
    pub fn apply(self, action: NavAction) -> NavState {
        let stepped = match action {
            NavAction::Pick(case_id) => NavState {
                view: View::Walking {
                    step: StepIndex::FIRST,
                },
                active_case: Some(case_id.clone()),
                previous_case: Some(case_id),
            },
            NavAction::Exit => NavState {
                view: View::Selecting,
                active_case: None,
                previous_case: self.previous_case,
            },
            NavAction::Next => match self.view {
                View::Walking { step } => NavState {
                    view: View::Walking { step: step.next() },
                    ..self
                },
                View::Selecting => self,
            },
            NavAction::Previous => match self.view {
                View::Walking { step } => NavState {
                    view: View::Walking {
                        step: step.previous(),
                    },
                    ..self
                },
                View::Selecting => self,
            },
            NavAction::SelectCase(case_id) => NavState {
                active_case: Some(case_id),
                ..self
            },
        };
        stepped.reconcile()
    }

    /// React to a case identity observed outside the action stream
    /// (e.g. a selector whose state lives in the driver).
    pub fn observe_case(self, selected: &str) -> NavState {
        self.apply(NavAction::SelectCase(selected.to_string()))
    }

    /// Case-switch guard: while walking, an active identity that differs
    /// from the last one reacted to forces a reset to step 1. The very
    /// first observation records the identity without resetting, since
    /// there is no prior position to be stale relative to.
    fn reconcile(mut self) -> NavState {
        if !matches!(self.view, View::Walking { .. }) {
            return self;
        }
        let Some(active) = self.active_case.clone() else {
            return self;
        };
        match self.previous_case.as_deref() {
            None => {
                self.previous_case = Some(active);
            }
            Some(previous) if previous != active => {
                self.view = View::Walking {
                    step: StepIndex::FIRST,
                };
                self.previous_case = Some(active);
            }
            Some(_) => {}
        }
        self
    }

    /// Renderer-facing snapshot of the current state.
    pub fn snapshot(&self) -> NavSnapshot {
        match self.view {
            View::Selecting => NavSnapshot {
                view: "selecting".to_string(),
                active_case: self.active_case.clone(),
                step: None,
                can_previous: false,
                can_next: false,
                at_end: false,
            },
            View::Walking { step } => NavSnapshot {
                view: "walking".to_string(),
                active_case: self.active_case.clone(),
                step: Some(step.get()),
                can_previous: !step.is_first(),
                can_next: !step.is_last(),
                at_end: step.is_last(),
            },
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::selecting()
    }
}

/// What the renderer needs to draw the navigation chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot {
    pub view: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u8>,
    pub can_previous: bool,
    pub can_next: bool,
    pub at_end: bool,
}
