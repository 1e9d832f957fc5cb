use crate::config::Config;
use casewalk_kernel::case::Case;
use casewalk_kernel::normalize;
use casewalk_store::CaseStore;
use std::path::Path;

pub fn exit_error(message: String) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn load_config_or_exit(config_arg: Option<&str>) -> Config {
    Config::load(config_arg).unwrap_or_else(|e| exit_error(e))
}

pub fn open_corpus_or_exit(dir: &Path) -> CaseStore {
    CaseStore::open(dir).unwrap_or_else(|e| exit_error(e.to_string()))
}

pub fn load_case_or_exit(store: &CaseStore, id: &str) -> Case {
    match store.load_case(id) {
        Some(raw) => normalize(raw),
        None => exit_error(format!("case not found: {id}")),
    }
}

pub fn print_json(payload: &serde_json::Value) {
    let rendered = serde_json::to_string_pretty(payload)
        .unwrap_or_else(|err| exit_error(format!("failed to render json output: {err}")));
    println!("{rendered}");
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
