//! Case corpus: read-only file store of case records.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/
//!   index.json          # ordered array of { id, title, ui_title? }
//!   cases/<id>.json     # one raw case record per file
//! ```
//!
//! The index order is the presentation order and is stable across calls.
//! Individual case loads fail soft: an unknown id, a missing file, or a
//! malformed record is an absent case, never an error. Only a corrupt
//! index is surfaced, since it means the whole corpus is unusable.

use casewalk_kernel::case::RawCase;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.json";
pub const CASES_DIR: &str = "cases";

/// One index row: enough to render the case-selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_title: Option<String>,
}

impl CaseSummary {
    /// Title to present: the display override when set, otherwise `title`.
    pub fn display_title(&self) -> &str {
        self.ui_title.as_deref().unwrap_or(&self.title)
    }
}

/// Errors opening a corpus. Case-level problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read case index {0}: {1}")]
    Io(String, String),

    #[error("malformed case index {0}: {1}")]
    Index(String, String),
}

/// A read-only view over one corpus root.
#[derive(Debug, Clone)]
pub struct CaseStore {
    root: PathBuf,
    index: Vec<CaseSummary>,
}

impl CaseStore {
    /// Open the corpus at `root`.
    ///
    /// A missing index file is an empty corpus, not an error; the caller
    /// renders a "no cases" state. A present but unparseable index is a
    /// `CorpusError`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let root = root.as_ref().to_path_buf();
        let index_path = root.join(INDEX_FILE);

        let index = if index_path.exists() {
            let text = fs::read_to_string(&index_path)
                .map_err(|e| CorpusError::Io(index_path.display().to_string(), e.to_string()))?;
            serde_json::from_str(&text)
                .map_err(|e| CorpusError::Index(index_path.display().to_string(), e.to_string()))?
        } else {
            Vec::new()
        };

        Ok(CaseStore { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The index rows in presentation order.
    pub fn list_cases(&self) -> &[CaseSummary] {
        &self.index
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.iter().any(|summary| summary.id == id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Load one raw case record.
    ///
    /// Soft failure by contract: an unknown or unsafe id, a missing file,
    /// and malformed JSON all yield `None`. A record whose own `id` field
    /// is blank inherits the id it is stored under.
    pub fn load_case(&self, id: &str) -> Option<RawCase> {
        if !safe_id(id) {
            return None;
        }
        let text = fs::read_to_string(self.case_path(id)).ok()?;
        let mut raw: RawCase = serde_json::from_str(&text).ok()?;
        if raw.id.is_empty() {
            raw.id = id.to_string();
        }
        Some(raw)
    }

    pub fn case_path(&self, id: &str) -> PathBuf {
        self.root.join(CASES_DIR).join(format!("{id}.json"))
    }
}

/// Ids become file names; anything that could escape the cases directory
/// is treated as unknown.
fn safe_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && id != "." && id != ".."
}
