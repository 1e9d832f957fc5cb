//! CLI configuration: `casewalk.toml` and path resolution.
//!
//! Precedence per path: explicit flag, then the config file, then the
//! built-in default. A missing config file is the default configuration;
//! a config file named with `--config` must exist.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "casewalk.toml";
pub const DEFAULT_CASES_DIR: &str = "cases";
pub const DEFAULT_LOGS_DIR: &str = ".casewalk/logs";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub cases: Option<String>,
    pub logs: Option<String>,
}

impl Config {
    /// Load the configuration, from `explicit` when given, otherwise from
    /// `casewalk.toml` in the working directory when present.
    pub fn load(explicit: Option<&str>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(CONFIG_FILE),
        };
        if !path.exists() {
            if explicit.is_some() {
                return Err(format!("config file not found: {}", path.display()));
            }
            return Ok(Config::default());
        }
        Self::load_file(&path)
    }

    pub fn load_file(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&text).map_err(|e| format!("failed to parse {}: {e}", path.display()))
    }

    /// Corpus root: flag over file over `cases`.
    pub fn cases_dir(&self, flag: Option<&str>) -> PathBuf {
        resolve(flag, self.paths.cases.as_deref(), DEFAULT_CASES_DIR)
    }

    /// Log root: flag over file over `.casewalk/logs`.
    pub fn logs_dir(&self, flag: Option<&str>) -> PathBuf {
        resolve(flag, self.paths.logs.as_deref(), DEFAULT_LOGS_DIR)
    }
}

fn resolve(flag: Option<&str>, file: Option<&str>, default: &str) -> PathBuf {
    PathBuf::from(flag.or(file).unwrap_or(default))
}
