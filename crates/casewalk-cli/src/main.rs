//! Casewalk CLI: the `casewalk` command.

mod cli;
mod commands;
mod config;
mod render;
mod support;

use clap::Parser;
use cli::{Cli, Commands, LogCommands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            path,
            force_seed,
            json,
        } => commands::init::run(path, force_seed, json),

        Commands::Cases {
            cases,
            config,
            json,
        } => commands::cases::run(cases, config, json),

        Commands::Show {
            case_id,
            step,
            cases,
            config,
            json,
        } => commands::show::run(case_id, step, cases, config, json),

        Commands::Walk {
            case_id,
            cases,
            config,
        } => commands::walk::run(case_id, cases, config),

        Commands::Log { command } => match command {
            LogCommands::Submit {
                incident_title,
                municipality,
                practitioner_role,
                notes,
                decision_context,
                csf_functions,
                csf_rationale,
                tension,
                pfce_principles,
                pfce_description,
                constraint,
                decision,
                outcomes_implications,
                logs,
                config,
                json,
            } => commands::log_submit::run(commands::log_submit::Args {
                incident_title,
                municipality,
                practitioner_role,
                notes,
                decision_context,
                csf_functions,
                csf_rationale,
                tension,
                pfce_principles,
                pfce_description,
                constraint,
                decision,
                outcomes_implications,
                logs,
                config,
                json,
            }),
        },
    }
}
