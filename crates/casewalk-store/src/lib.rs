//! # casewalk-store
//!
//! Durable storage for Casewalk: the read-only case corpus and the
//! append-only decision log store.
//!
//! The two halves have opposite failure postures:
//! - corpus reads fail soft: a missing or malformed case is an absent
//!   case, and only a corrupt index is an error
//! - log writes fail loud: a save that did not land is always surfaced
//!
//! ## Layout
//!
//! ```text
//! <cases root>/index.json       ordered case index
//! <cases root>/cases/<id>.json  one raw case per file
//! <logs root>/<uuid>.json       one decision log per save
//! ```

pub mod corpus;
pub mod logs;

pub use corpus::{CASES_DIR, CaseStore, CaseSummary, CorpusError, INDEX_FILE};
pub use logs::{LogStore, LogStoreError, SaveReceipt};
