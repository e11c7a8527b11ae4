//! quizrun CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed command-line quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a quiz session
    Run {
        /// Path to the YAML problem file
        #[arg(long)]
        problems: Option<PathBuf>,

        /// Session time limit in seconds
        #[arg(long)]
        limit: Option<u64>,

        /// Comma-separated scripted answers (answers the quiz without a console)
        #[arg(long)]
        answers: Option<String>,

        /// Write the session report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate problem files
    Validate {
        /// Path to a problem file or directory
        #[arg(long)]
        problems: PathBuf,
    },

    /// Show the problems in a file
    List {
        /// Path to the YAML problem file
        #[arg(long)]
        problems: PathBuf,
    },

    /// Create a starter config and example problem file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            problems,
            limit,
            answers,
            report,
            config,
        } => commands::run::execute(problems, limit, answers, report, config).await,
        Commands::Validate { problems } => commands::validate::execute(problems),
        Commands::List { problems } => commands::list::execute(problems),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
