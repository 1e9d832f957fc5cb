use crate::render::write_step;
use crate::support::{exit_error, load_case_or_exit, load_config_or_exit, open_corpus_or_exit, print_json};
use casewalk_nav::{NavState, StepIndex, resolve};
use serde_json::json;
use std::io::Write;

pub fn run(case_id: String, step: u8, cases: Option<String>, config: Option<String>, json: bool) {
    let config = load_config_or_exit(config.as_deref());
    let store = open_corpus_or_exit(&config.cases_dir(cases.as_deref()));
    let case = load_case_or_exit(&store, &case_id);

    let step = StepIndex::new(step);
    let state = NavState::walking(&case_id, step);
    let content = resolve(&case, step);

    if json {
        let payload = json!({
            "action": "show",
            "caseId": case_id,
            "title": case.display_title(),
            "content": content,
            "nav": state.snapshot(),
        });
        print_json(&payload);
        return;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "casewalk show {case_id}")
        .and_then(|_| write_step(&mut out, case.display_title(), &content, &state.snapshot()))
        .unwrap_or_else(|e| exit_error(format!("failed to write output: {e}")));
}
