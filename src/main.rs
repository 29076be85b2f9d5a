use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use lnat_check::cli::validate::ValidateOptions;
use lnat_check::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lnat-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quality checks for LNAT practice questions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a question batch for authenticity and type variety
    Validate {
        /// JSON file with the question batch
        questions: PathBuf,

        /// File with the source passage
        #[arg(short, long)]
        passage: Option<PathBuf>,

        /// Assign question types before scoring
        #[arg(short, long)]
        classify: bool,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Assign a question type to every question in a batch
    Classify {
        /// JSON file with the question batch
        questions: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Check a list of answer options for length and wording imbalance
    #[command(name = "audit-options")]
    AuditOptions {
        /// Answer options in display order
        #[arg(required = true)]
        options: Vec<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Session operations
    #[command(subcommand)]
    Session(lnat_check::cli::session::SessionCommands),

    /// Sample passage bank operations
    #[command(subcommand)]
    Passages(lnat_check::cli::passages::PassageCommands),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

/// Returns false when a check ran but did not pass
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Validate {
            questions,
            passage,
            classify,
            json,
        } => {
            let options = ValidateOptions { classify, json };
            lnat_check::cli::validate::run(&questions, passage.as_deref(), &options)
        }

        Commands::Classify { questions, json } => {
            lnat_check::cli::classify::run(&questions, json)?;
            Ok(true)
        }

        Commands::AuditOptions { options, json } => lnat_check::cli::audit_options::run(&options, json),

        Commands::Session(cmd) => {
            lnat_check::cli::session::run(cmd)?;
            Ok(true)
        }

        Commands::Passages(cmd) => lnat_check::cli::passages::run(cmd),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "lnat-check", &mut io::stdout());
            Ok(true)
        }
    }
}
