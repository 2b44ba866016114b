//! socagen CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "socagen",
    version,
    about = "Assessment scoring and SOCA report generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer file and generate SOCA reports
    Assess {
        /// Path to the questionnaire JSON
        #[arg(long)]
        questionnaire: PathBuf,

        /// Path to the answers JSON (question id → answer)
        #[arg(long)]
        answers: PathBuf,

        /// Student name
        #[arg(long, default_value = "Student")]
        student: String,

        /// Student class/grade
        #[arg(long, default_value = "Other")]
        class: String,

        /// Generator to use (overrides config)
        #[arg(long)]
        generator: Option<String>,

        /// Model to use (overrides config)
        #[arg(long)]
        model: Option<String>,

        /// Results document path (overrides config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List persisted assessment records
    Records {
        /// Only show records for this student
        #[arg(long)]
        student: Option<String>,

        /// Results document path (overrides config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete persisted assessment records
    Purge {
        /// Delete every record
        #[arg(long)]
        all: bool,

        /// Delete records for this student
        #[arg(long)]
        student: Option<String>,

        /// Delete records before this date (YYYY-MM-DD)
        #[arg(long)]
        before: Option<String>,

        /// Results document path (overrides config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a questionnaire file
    Validate {
        /// Path to the questionnaire JSON
        #[arg(long)]
        questionnaire: PathBuf,
    },

    /// Create starter config and example questionnaire
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| {
                tracing_subscriber::EnvFilter::new(
                    "socagen_core=info,socagen_providers=info,socagen_store=info,socagen_cli=info",
                )
            },
        ))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            questionnaire,
            answers,
            student,
            class,
            generator,
            model,
            results,
            config,
        } => {
            commands::assess::execute(commands::assess::AssessArgs {
                questionnaire,
                answers,
                student,
                class,
                generator,
                model,
                results,
                config,
            })
            .await
        }
        Commands::Records {
            student,
            results,
            config,
        } => commands::records::execute(student, results, config),
        Commands::Purge {
            all,
            student,
            before,
            results,
            config,
        } => commands::purge::execute(all, student, before, results, config),
        Commands::Validate { questionnaire } => commands::validate::execute(questionnaire),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
