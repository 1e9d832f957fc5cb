use crate::config::{CONFIG_FILE, DEFAULT_CASES_DIR, DEFAULT_LOGS_DIR};
use crate::support::{exit_error, print_json, yes_no};
use casewalk_kernel::case::RawCase;
use casewalk_store::{CASES_DIR, CaseSummary, INDEX_FILE};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled sample cases, written verbatim when seeding.
const SEED_CASES: [&str; 2] = [
    include_str!("../../assets/baltimore.json"),
    include_str!("../../assets/oldsmar.json"),
];

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub root: PathBuf,
    pub corpus_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
    pub created_corpus_dir: bool,
    pub created_logs_dir: bool,
    pub created_config: bool,
    pub seeded: Vec<String>,
}

pub fn init_layout(path: impl AsRef<Path>, force_seed: bool) -> Result<InitOutcome, String> {
    let root = path.as_ref().to_path_buf();

    if !root.exists() {
        fs::create_dir_all(&root)
            .map_err(|e| format!("failed to create init path {}: {e}", root.display()))?;
    }
    if !root.is_dir() {
        return Err(format!("init path is not a directory: {}", root.display()));
    }

    let corpus_dir = root.join(DEFAULT_CASES_DIR);
    let records_dir = corpus_dir.join(CASES_DIR);
    let created_corpus_dir = !corpus_dir.exists();
    fs::create_dir_all(&records_dir)
        .map_err(|e| format!("failed to create corpus {}: {e}", records_dir.display()))?;

    let logs_dir = root.join(DEFAULT_LOGS_DIR);
    let created_logs_dir = !logs_dir.exists();
    fs::create_dir_all(&logs_dir)
        .map_err(|e| format!("failed to create log directory {}: {e}", logs_dir.display()))?;

    let config_path = root.join(CONFIG_FILE);
    let created_config = !config_path.exists();
    if created_config {
        fs::write(&config_path, default_config_body())
            .map_err(|e| format!("failed to write {}: {e}", config_path.display()))?;
    }

    let index_path = corpus_dir.join(INDEX_FILE);
    let mut index: Vec<CaseSummary> = if index_path.exists() {
        let text = fs::read_to_string(&index_path)
            .map_err(|e| format!("failed to read {}: {e}", index_path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("refusing to seed over a corrupt index {}: {e}", index_path.display()))?
    } else {
        Vec::new()
    };

    let mut seeded = Vec::new();
    if index.is_empty() || force_seed {
        for asset in SEED_CASES {
            let summary = seed_summary(asset)?;
            let record_path = records_dir.join(format!("{}.json", summary.id));
            fs::write(&record_path, asset)
                .map_err(|e| format!("failed to write {}: {e}", record_path.display()))?;
            if !index.iter().any(|existing| existing.id == summary.id) {
                index.push(summary.clone());
            }
            seeded.push(summary.id);
        }

        let rendered = serde_json::to_string_pretty(&index)
            .map_err(|e| format!("failed to encode case index: {e}"))?;
        fs::write(&index_path, format!("{rendered}\n"))
            .map_err(|e| format!("failed to write {}: {e}", index_path.display()))?;
    }

    Ok(InitOutcome {
        root,
        corpus_dir,
        logs_dir,
        config_path,
        created_corpus_dir,
        created_logs_dir,
        created_config,
        seeded,
    })
}

pub fn run(path: String, force_seed: bool, json: bool) {
    let outcome = init_layout(&path, force_seed).unwrap_or_else(|e| exit_error(e));

    if json {
        let payload = json!({
            "action": "init",
            "root": outcome.root.display().to_string(),
            "corpusPath": outcome.corpus_dir.display().to_string(),
            "logsPath": outcome.logs_dir.display().to_string(),
            "configPath": outcome.config_path.display().to_string(),
            "createdCorpusDir": outcome.created_corpus_dir,
            "createdLogsDir": outcome.created_logs_dir,
            "createdConfig": outcome.created_config,
            "seeded": outcome.seeded,
        });
        print_json(&payload);
        return;
    }

    println!("casewalk init {path}");
    println!();
    println!("  Root: {}", outcome.root.display());
    println!("  Corpus: {}", outcome.corpus_dir.display());
    println!("  Logs: {}", outcome.logs_dir.display());
    println!("  Config: {}", outcome.config_path.display());
    println!("  Created corpus dir: {}", yes_no(outcome.created_corpus_dir));
    println!("  Created logs dir: {}", yes_no(outcome.created_logs_dir));
    println!("  Created config: {}", yes_no(outcome.created_config));
    if outcome.seeded.is_empty() {
        println!("  Seeded: none (corpus already populated)");
    } else {
        println!("  Seeded: {}", outcome.seeded.join(", "));
    }
}

fn default_config_body() -> String {
    format!("[paths]\ncases = \"{DEFAULT_CASES_DIR}\"\nlogs = \"{DEFAULT_LOGS_DIR}\"\n")
}

fn seed_summary(asset: &str) -> Result<CaseSummary, String> {
    let raw: RawCase =
        serde_json::from_str(asset).map_err(|e| format!("invalid bundled case: {e}"))?;
    if raw.id.is_empty() {
        return Err("bundled case is missing an id".to_string());
    }
    Ok(CaseSummary {
        id: raw.id,
        title: raw.title,
        ui_title: raw.ui_title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewalk_store::CaseStore;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_root(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "casewalk-init-{prefix}-{}-{unique}",
            std::process::id()
        ))
    }

    #[test]
    fn fresh_init_scaffolds_and_seeds() {
        let root = temp_root("fresh");
        let outcome = init_layout(&root, false).expect("init should succeed");

        assert!(outcome.created_corpus_dir);
        assert!(outcome.created_logs_dir);
        assert!(outcome.created_config);
        assert_eq!(outcome.seeded, ["baltimore", "oldsmar"]);
        assert!(outcome.config_path.exists());
        assert!(outcome.logs_dir.is_dir());

        let store = CaseStore::open(&outcome.corpus_dir).expect("corpus should open");
        let ids: Vec<&str> = store.list_cases().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["baltimore", "oldsmar"]);
        let raw = store.load_case("oldsmar").expect("seed should load");
        assert_eq!(raw.title, "Oldsmar Water Treatment Intrusion");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn second_init_leaves_a_populated_corpus_alone() {
        let root = temp_root("repeat");
        init_layout(&root, false).expect("first init should succeed");

        let marker = root
            .join(DEFAULT_CASES_DIR)
            .join(CASES_DIR)
            .join("baltimore.json");
        fs::write(&marker, r#"{"id": "baltimore", "title": "Edited"}"#)
            .expect("edit should write");

        let outcome = init_layout(&root, false).expect("second init should succeed");
        assert!(outcome.seeded.is_empty());
        let text = fs::read_to_string(&marker).expect("record should read");
        assert!(text.contains("Edited"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn force_seed_rewrites_the_bundled_cases() {
        let root = temp_root("force");
        init_layout(&root, false).expect("first init should succeed");

        let marker = root
            .join(DEFAULT_CASES_DIR)
            .join(CASES_DIR)
            .join("baltimore.json");
        fs::write(&marker, r#"{"id": "baltimore", "title": "Edited"}"#)
            .expect("edit should write");

        let outcome = init_layout(&root, true).expect("forced init should succeed");
        assert_eq!(outcome.seeded, ["baltimore", "oldsmar"]);
        let text = fs::read_to_string(&marker).expect("record should read");
        assert!(text.contains("Baltimore Ransomware Response"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn init_path_that_is_a_file_is_rejected() {
        let root = temp_root("file");
        fs::write(&root, "not a directory").expect("fixture should write");

        match init_layout(&root, false) {
            Err(message) => assert!(message.contains("not a directory")),
            Ok(_) => panic!("expected init to reject a file path"),
        }

        let _ = fs::remove_file(root);
    }
}
