use crate::support::{exit_error, load_config_or_exit, print_json};
use casewalk_kernel::{LogForm, build_log};
use casewalk_store::LogStore;
use chrono::SecondsFormat;
use serde_json::json;

pub struct Args {
    pub incident_title: Option<String>,
    pub municipality: Option<String>,
    pub practitioner_role: Option<String>,
    pub notes: Option<String>,
    pub decision_context: Option<String>,
    pub csf_functions: Vec<String>,
    pub csf_rationale: Option<String>,
    pub tension: Option<String>,
    pub pfce_principles: Vec<String>,
    pub pfce_description: Option<String>,
    pub constraint: Option<String>,
    pub decision: Option<String>,
    pub outcomes_implications: Option<String>,
    pub logs: Option<String>,
    pub config: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let config = load_config_or_exit(args.config.as_deref());
    let store = LogStore::open(config.logs_dir(args.logs.as_deref()));

    let form = LogForm {
        incident_title: args.incident_title.unwrap_or_default(),
        municipality: args.municipality.unwrap_or_default(),
        practitioner_role: args.practitioner_role.unwrap_or_default(),
        notes: args.notes.unwrap_or_default(),
        decision_context: args.decision_context.unwrap_or_default(),
        csf_functions: args.csf_functions,
        csf_rationale: args.csf_rationale.unwrap_or_default(),
        tension: args.tension.unwrap_or_default(),
        pfce_principles: args.pfce_principles,
        pfce_description: args.pfce_description.unwrap_or_default(),
        constraint: args.constraint.unwrap_or_default(),
        decision: args.decision.unwrap_or_default(),
        outcomes_implications: args.outcomes_implications.unwrap_or_default(),
    };

    let log = build_log(form);
    let receipt = store
        .save(&log)
        .unwrap_or_else(|e| exit_error(format!("failed to save decision log: {e}")));

    if args.json {
        let payload = json!({
            "action": "log.submit",
            "mode": log.mode,
            "receipt": receipt,
        });
        print_json(&payload);
        return;
    }

    println!("casewalk log submit");
    println!();
    println!("  Log ID: {}", receipt.id);
    println!("  Path: {}", receipt.path.display());
    println!("  Digest: {}", receipt.digest);
    println!(
        "  Saved At: {}",
        receipt.saved_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
}
