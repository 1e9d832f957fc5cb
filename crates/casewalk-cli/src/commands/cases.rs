use crate::support::{load_config_or_exit, open_corpus_or_exit, print_json};
use serde_json::json;

pub fn run(cases: Option<String>, config: Option<String>, json: bool) {
    let config = load_config_or_exit(config.as_deref());
    let dir = config.cases_dir(cases.as_deref());
    let store = open_corpus_or_exit(&dir);

    if json {
        let payload = json!({
            "action": "cases",
            "corpusPath": store.root().display().to_string(),
            "count": store.len(),
            "cases": store.list_cases(),
        });
        print_json(&payload);
        return;
    }

    println!("casewalk cases");
    println!();
    println!("  Corpus: {}", store.root().display());
    if store.is_empty() {
        println!("  No cases available");
        return;
    }
    println!("  Count: {}", store.len());
    println!();
    for summary in store.list_cases() {
        println!("  - {}  [{}]", summary.display_title(), summary.id);
    }
}
