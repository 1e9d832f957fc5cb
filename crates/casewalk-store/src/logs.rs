//! Decision log store: append-only, one file per record.
//!
//! Every record lands at `<root>/<id>.json` with create-new semantics.
//! Ids are generated fresh per build, so an existing file means something
//! is wrong and the save fails loud instead of replacing it. The write is
//! buffered, flushed, and fsynced before the receipt is produced.

use casewalk_kernel::log::DecisionLog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Errors saving a decision log. Always surfaced to the caller: a save
/// that did not land must never look like one that did.
#[derive(Debug, thiserror::Error)]
pub enum LogStoreError {
    #[error("failed to serialize decision log: {0}")]
    Serialize(String),

    #[error("decision log already exists: {0}")]
    AlreadyExists(String),

    #[error("failed to write decision log {0}: {1}")]
    Io(String, String),
}

/// The user-presentable handle to a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub id: String,
    pub path: PathBuf,
    /// `sha256:` digest of the exact bytes written.
    pub digest: String,
    pub saved_at: DateTime<Utc>,
}

/// An append-only store rooted at one directory.
#[derive(Debug, Clone)]
pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    /// Remember the root. Directories are created on first save.
    pub fn open(root: impl AsRef<Path>) -> Self {
        LogStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    /// Persist one record and return its receipt.
    pub fn save(&self, log: &DecisionLog) -> Result<SaveReceipt, LogStoreError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| LogStoreError::Io(self.root.display().to_string(), e.to_string()))?;

        let mut bytes = serde_json::to_vec_pretty(log)
            .map_err(|e| LogStoreError::Serialize(e.to_string()))?;
        bytes.push(b'\n');

        let id = log.id.to_string();
        let path = self.log_path(&id);
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(LogStoreError::AlreadyExists(path.display().to_string()));
            }
            Err(err) => {
                return Err(LogStoreError::Io(path.display().to_string(), err.to_string()));
            }
        };

        let mut writer = std::io::BufWriter::new(file);
        writer
            .write_all(&bytes)
            .map_err(|e| LogStoreError::Io(path.display().to_string(), e.to_string()))?;
        writer
            .flush()
            .map_err(|e| LogStoreError::Io(path.display().to_string(), e.to_string()))?;
        let file = writer
            .into_inner()
            .map_err(|e| LogStoreError::Io(path.display().to_string(), e.to_string()))?;
        file.sync_all()
            .map_err(|e| LogStoreError::Io(path.display().to_string(), e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = format!("sha256:{:x}", hasher.finalize());

        Ok(SaveReceipt {
            id,
            path,
            digest,
            saved_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewalk_kernel::log::{LogForm, build_log};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_logs(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "casewalk-logs-{prefix}-{}-{unique}",
            std::process::id()
        ))
    }

    #[test]
    fn save_lands_the_record_and_returns_its_receipt() {
        let root = temp_logs("save");
        let store = LogStore::open(&root);
        let log = build_log(LogForm {
            municipality: "Oldsmar, FL".to_string(),
            decision: "isolated the HMI".to_string(),
            ..LogForm::default()
        });

        let receipt = store.save(&log).expect("save should succeed");
        assert_eq!(receipt.id, log.id.to_string());
        assert_eq!(receipt.path, store.log_path(&receipt.id));

        let written = fs::read(&receipt.path).expect("record should exist");
        let mut hasher = Sha256::new();
        hasher.update(&written);
        assert_eq!(receipt.digest, format!("sha256:{:x}", hasher.finalize()));

        let text = String::from_utf8(written).expect("record should be utf-8");
        assert!(text.contains("\"mode\": \"open-ended\""));
        assert!(text.contains("Oldsmar, FL"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn saving_the_same_record_twice_is_rejected() {
        let root = temp_logs("duplicate");
        let store = LogStore::open(&root);
        let log = build_log(LogForm::default());

        store.save(&log).expect("first save should succeed");
        match store.save(&log) {
            Err(LogStoreError::AlreadyExists(path)) => {
                assert!(path.contains(&log.id.to_string()));
            }
            other => panic!("expected already-exists error, got {other:?}"),
        }

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn unrelated_records_never_collide() {
        let root = temp_logs("collide");
        let store = LogStore::open(&root);

        let first = store
            .save(&build_log(LogForm::default()))
            .expect("first save should succeed");
        let second = store
            .save(&build_log(LogForm::default()))
            .expect("second save should succeed");
        assert_ne!(first.path, second.path);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn unwritable_destination_is_surfaced() {
        let root = temp_logs("unwritable");
        fs::create_dir_all(&root).expect("root should create");
        let store = LogStore::open(&root);
        let log = build_log(LogForm::default());

        // Occupy the destination path with a directory so create_new fails.
        fs::create_dir_all(store.log_path(&log.id.to_string()))
            .expect("blocking dir should create");

        assert!(store.save(&log).is_err());

        let _ = fs::remove_dir_all(root);
    }
}
