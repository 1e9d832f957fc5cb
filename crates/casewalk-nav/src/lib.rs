//! # casewalk-nav
//!
//! Walkthrough navigation for Casewalk sessions.
//!
//! This crate provides:
//! - `NavState` / `NavAction`, the explicit-value session state machine
//! - `StepIndex`, the clamped nine-step position
//! - `resolve`, the fixed per-step projection from case to content
//! - `StepContent` / `Bullet`, the renderer-facing content shapes
//!
//! Every transition is pure and total: state goes in, state comes out,
//! and out-of-range input is clamped rather than rejected. Storage and
//! presentation live elsewhere (`casewalk-store`, the CLI renderer).
//!
//! ## Control flow
//!
//! ```text
//! NavAction (pick / next / previous / exit / select)
//!     │  NavState::apply
//! NavState (selecting | walking step 1..9)
//!     │  resolve(case, step)
//! StepContent (heading + bullets)
//! ```

pub mod content;
pub mod resolve;
pub mod state;

pub use content::{Bullet, StepContent};
pub use resolve::resolve;
pub use state::{NavAction, NavSnapshot, NavState, StepIndex, View};
