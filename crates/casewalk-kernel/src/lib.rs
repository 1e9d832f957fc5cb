//! # casewalk-kernel
//!
//! Core data model for guided walkthroughs of municipal-cybersecurity
//! ethics cases.
//!
//! This crate provides:
//! - `Prose`, the text-or-list union with its `"TBD"` coercion rule
//! - `RawCase` / `Case`, the on-disk and normalized case shapes
//! - `normalize`, the total fill-in-the-defaults pass
//! - the canonical PFCE principle definition table
//! - `LogForm` / `DecisionLog`, the open-ended mode record and its builder
//!
//! It intentionally carries no navigation state and touches no storage.
//! Those concerns live in `casewalk-nav` and `casewalk-store`.
//!
//! ## Data model
//!
//! ```text
//! RawCase (on disk, sections optional)
//!     │  normalize
//! Case (every section present, possibly empty)
//!     │  resolve (casewalk-nav)
//! StepContent (heading + bullets, renderer-ready)
//! ```

pub mod case;
pub mod log;
pub mod normalize;
pub mod principles;
pub mod prose;

pub use case::{
    Background, Case, Categories, Constraint, CsfMapping, DecisionOutcome, Ethical, PfceEntry,
    RawCase, Technical, Tension,
};
pub use log::{
    DecisionLog, LogCsfEntry, LogForm, LogMeta, LogPfceEntry, LogTension, OPEN_ENDED_MODE,
    build_log,
};
pub use normalize::normalize;
pub use principles::{PRINCIPLE_DEFINITIONS, principle_definition};
pub use prose::{Prose, TBD};
