mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillgate",
    about = "Classify installed skills by risk tier and generate agent permission allowlists",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ or .git/)
    #[arg(long, global = true, env = "SKILLGATE_ROOT")]
    root: Option<PathBuf>,

    /// Skills directory, relative to the root (default: from config, else `skills`)
    #[arg(long, global = true)]
    skills_dir: Option<PathBuf>,

    /// Autonomy level: 1 (local only), 2 (+ external writes), 3 (+ publishing)
    #[arg(allow_negative_numbers = true)]
    level: Option<String>,

    /// Output mode: report, json, or raw [default: report]
    mode: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the risk tier of every discovered skill
    Classify {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Inspect and validate .claude/skillgate.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let skills_dir = cli.skills_dir.as_deref();
    let result = match cli.command {
        Some(Commands::Classify { json }) => cmd::classify::run(&root, skills_dir, json),
        Some(Commands::Config { subcommand }) => cmd::config::run(&root, subcommand),
        None => cmd::generate::run(
            &root,
            cli.level.as_deref(),
            cli.mode.as_deref(),
            skills_dir,
        ),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
