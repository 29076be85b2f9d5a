//! Session CLI commands

use crate::models::{LnatConfig, SessionData, TestMode, Topic};
use crate::session::{JsonFileStore, SessionStore};
use crate::Result;
use clap::Subcommand;
use colored::Colorize;
use std::env;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the stored session and its results
    Show {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Start a new session, replacing any stored one
    New {
        /// Practice or timed mock mode
        #[arg(short, long, value_enum, default_value_t = TestMode::Practice)]
        mode: TestMode,

        /// Topics to draw passages from (repeatable)
        #[arg(short, long = "topic", value_enum)]
        topics: Vec<Topic>,
    },

    /// Remove the stored session
    Clear,
}

pub fn run(cmd: SessionCommands) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = LnatConfig::load(&project_root)?;
    let store = JsonFileStore::new(config.session_dir(&project_root));

    match cmd {
        SessionCommands::Show { json } => {
            let session = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
                return Ok(());
            }

            match session {
                Some(session) => print_session(&session),
                None => println!("{}", "No session stored".yellow()),
            }
        }

        SessionCommands::New { mode, topics } => {
            let topics = if topics.is_empty() { vec![Topic::All] } else { topics };
            let session = SessionData::new(mode, topics, &config.mock);
            store.save(&session)?;
            println!(
                "{}",
                format!("🚀 Started {} session ({})", session.mode, store.path().display()).green()
            );
        }

        SessionCommands::Clear => {
            store.clear()?;
            println!("{}", "🧹 Session cleared".green());
        }
    }

    Ok(())
}

fn print_session(session: &SessionData) {
    let results = session.results();
    let topics = session
        .selected_topics
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{}", format!("Session ({})", session.mode).cyan().bold());
    println!();
    println!("   Topics:    {}", topics);
    println!("   Passages:  {}", session.passages.len());
    println!("   Score:     {}/{} ({}%)", results.correct, results.total, results.percentage);
    println!("   Flagged:   {}", session.flagged_questions.len());
    println!("   Cost:      ${:.4}", session.cost);

    if session.mode == TestMode::Mock {
        let minutes = session.time_remaining / 60_000;
        let seconds = (session.time_remaining / 1000) % 60;
        println!("   Remaining: {}:{:02}", minutes, seconds);
    }
}
