use anyhow::Context;
use clap::{Parser, Subcommand};
use prereq_core::config::{Handbook, CONDITIONS_ENV, DEFAULT_CONDITIONS_PATH};
use prereq_core::PrereqEngine;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check course prerequisites", long_about = None)]
struct Args {
    /// Path to the course -> condition JSON file
    #[arg(short, long, env = CONDITIONS_ENV, default_value = DEFAULT_CONDITIONS_PATH)]
    conditions: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether completed courses unlock a target course
    Check {
        /// The course to check
        target: String,

        /// Completed course codes
        courses: Vec<String>,
    },
    /// Show how a course's condition was parsed
    Explain {
        /// The course to explain
        target: String,

        /// Print the expression tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every course the completed courses unlock
    Unlocked {
        /// Completed course codes
        courses: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let handbook = Handbook::from_path(&args.conditions)
        .with_context(|| format!("failed to load {}", args.conditions.display()))?;
    log::info!("Loaded {} courses", handbook.len());
    let engine = PrereqEngine::new(handbook);

    match args.command {
        Commands::Check { target, courses } => {
            let courses = normalize_codes(courses);
            let unlocked = engine.is_unlocked(&courses, &target.to_uppercase())?;
            let status = if unlocked { "unlocked" } else { "locked" };
            println!("{}: {}", target.to_uppercase(), status);
        }
        Commands::Explain { target, json } => {
            let condition = engine.condition_for(&target.to_uppercase())?;
            if json {
                println!("{}", serde_json::to_string_pretty(condition.as_ref())?);
            } else {
                println!("{}", condition);
            }
        }
        Commands::Unlocked { courses } => {
            let courses = normalize_codes(courses);
            for course in engine.unlocked_courses(&courses) {
                println!("{}", course);
            }
        }
    }

    Ok(())
}

/// Accept codes given as separate or comma-separated arguments
fn normalize_codes(courses: Vec<String>) -> Vec<String> {
    courses
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}
