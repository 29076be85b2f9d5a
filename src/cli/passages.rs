//! Passage bank CLI commands

use crate::models::PassageBank;
use crate::Result;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum PassageCommands {
    /// List the distinct topics in a passage bank
    Topics {
        /// JSON file with `{ "passages": [...] }`
        bank: PathBuf,
    },

    /// Pick a random passage, optionally restricted to some topics
    Random {
        /// JSON file with `{ "passages": [...] }`
        bank: PathBuf,

        /// Topic to draw from (repeatable; "All Topics" matches everything)
        #[arg(short, long = "topic")]
        topics: Vec<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },
}

/// Returns false when no passage matched
pub fn run(cmd: PassageCommands) -> Result<bool> {
    match cmd {
        PassageCommands::Topics { bank } => {
            let bank = PassageBank::load(&bank)?;
            for topic in bank.topics() {
                println!("{}", topic);
            }
            Ok(true)
        }

        PassageCommands::Random { bank, topics, json } => {
            let bank = PassageBank::load(&bank)?;
            let picked = bank.random(topics.as_slice(), &mut rand::thread_rng());

            if json {
                println!("{}", serde_json::to_string_pretty(&picked)?);
                return Ok(picked.is_some());
            }

            match picked {
                Some(passage) => {
                    println!("{}", format!("{} ({})", passage.id, passage.topic).cyan().bold());
                    if let Some(source) = &passage.source {
                        println!("{}", source.bright_black());
                    }
                    println!();
                    println!("{}", passage.text);
                    Ok(true)
                }
                None => {
                    println!("{}", "No passage matches the selected topics".yellow());
                    Ok(false)
                }
            }
        }
    }
}
