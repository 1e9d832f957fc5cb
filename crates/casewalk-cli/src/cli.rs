use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "casewalk",
    about = "Casewalk: guided walkthroughs of municipal-cybersecurity ethics cases",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a corpus layout and seed the bundled sample cases
    Init {
        /// Project root to initialize
        #[arg(default_value = ".")]
        path: String,

        /// Reseed the sample cases even when the corpus is not empty
        #[arg(long)]
        force_seed: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the case index in presentation order
    Cases {
        /// Path to the case corpus
        #[arg(long)]
        cases: Option<String>,

        /// Path to casewalk.toml
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Project one step of one case, without a session
    Show {
        /// Case identifier
        case_id: String,

        /// Step to show (1..9; out of range clamps)
        #[arg(long, default_value = "1")]
        step: u8,

        /// Path to the case corpus
        #[arg(long)]
        cases: Option<String>,

        /// Path to casewalk.toml
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk a case step by step in an interactive session
    Walk {
        /// Case to pick immediately; omit to start at the selector
        case_id: Option<String>,

        /// Path to the case corpus
        #[arg(long)]
        cases: Option<String>,

        /// Path to casewalk.toml
        #[arg(long)]
        config: Option<String>,
    },

    /// Decision log commands
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Build an open-ended decision log from flags and save it
    Submit {
        /// Incident title
        #[arg(long)]
        incident_title: Option<String>,

        /// Municipality the incident concerns
        #[arg(long)]
        municipality: Option<String>,

        /// Role of the practitioner filling the log
        #[arg(long)]
        practitioner_role: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// The decision at hand
        #[arg(long)]
        decision_context: Option<String>,

        /// Selected NIST CSF function (repeatable, ordered)
        #[arg(long = "csf-function")]
        csf_functions: Vec<String>,

        /// Rationale shared by the selected CSF functions
        #[arg(long)]
        csf_rationale: Option<String>,

        /// The ethical tension in play
        #[arg(long)]
        tension: Option<String>,

        /// Selected PFCE principle (repeatable, ordered)
        #[arg(long = "pfce-principle")]
        pfce_principles: Vec<String>,

        /// Description shared by the selected PFCE principles
        #[arg(long)]
        pfce_description: Option<String>,

        /// Constraint on the decision
        #[arg(long)]
        constraint: Option<String>,

        /// What was decided
        #[arg(long)]
        decision: Option<String>,

        /// Outcomes and implications
        #[arg(long)]
        outcomes_implications: Option<String>,

        /// Directory decision logs are written to
        #[arg(long)]
        logs: Option<String>,

        /// Path to casewalk.toml
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
