use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use rapport::{
    CriteriaSet, ReportRenderer, ReportWriter, SkipReason, audit, parse_transcript_file,
};

#[derive(Parser)]
#[command(name = "rapport")]
#[command(author, version, about = "Customer support transcript quality auditor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a transcript and print the audit report
    Audit {
        /// Input transcript file ([HH:MM:SS] Author: message lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the machine-readable report (JSON)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a transcript and show message statistics without scoring
    Inspect {
        /// Input transcript file ([HH:MM:SS] Author: message lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            input,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            audit_transcript(input, json)
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn audit_transcript(input: PathBuf, json: Option<PathBuf>) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript =
        parse_transcript_file(&input).context("Failed to load input transcript")?;

    info!(
        "Parsed {} messages ({} lines skipped)",
        transcript.messages.len(),
        transcript.skipped.len()
    );

    let criteria = CriteriaSet::default();
    let report = audit(&transcript.messages, &criteria);

    if let Some(path) = json {
        ReportWriter::new(&report).write_json(&path)?;
        info!("JSON report written to {:?}", path);
    }

    print!("{}", ReportRenderer::new(&report).format());

    Ok(())
}

fn inspect_transcript(input: PathBuf) -> Result<()> {
    info!("Inspecting transcript from {:?}", input);
    let transcript =
        parse_transcript_file(&input).context("Failed to load input transcript")?;

    println!("Transcript Inspection");
    println!("=====================");
    println!("Messages: {}", transcript.messages.len());
    println!(
        "Duration: {}",
        rapport::analysis::total_duration(&transcript.messages)
    );
    println!();

    println!("Skipped Lines");
    println!("-------------");
    println!(
        "Blank: {}",
        transcript.skipped_count(SkipReason::Blank)
    );
    println!(
        "Missing separator: {}",
        transcript.skipped_count(SkipReason::MissingSeparator)
    );
    println!(
        "Missing author: {}",
        transcript.skipped_count(SkipReason::MissingAuthor)
    );
    println!(
        "Empty content: {}",
        transcript.skipped_count(SkipReason::EmptyContent)
    );
    println!();

    println!("Author Statistics");
    println!("-----------------");
    let mut author_counts: HashMap<String, usize> = HashMap::new();
    for message in &transcript.messages {
        *author_counts.entry(message.author.to_lowercase()).or_insert(0) += 1;
    }
    let mut authors: Vec<(&String, &usize)> = author_counts.iter().collect();
    authors.sort();
    for (author, count) in authors {
        let untimed = transcript
            .messages
            .iter()
            .filter(|m| m.author.to_lowercase() == *author && m.time_of_day.is_none())
            .count();
        println!("{}: {} messages, {} without timestamp", author, count, untimed);
    }

    Ok(())
}
