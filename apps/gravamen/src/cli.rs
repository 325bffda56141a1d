//! # CLI Module
//!
//! clap definitions and command bodies. Command bodies are plain functions
//! over parsed arguments so integration tests can drive them without
//! spawning the binary.

use clap::{Parser, Subcommand};
use gravamen_core::{
    Frequency, IncidentDraft, ParseInputError, Scale, SeverityBand, ViolationKind,
    WeightReference, band_for_score, severity_score,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    name = "gravamen",
    version,
    about = "Human-rights incident severity engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single incident from its three inputs.
    Classify {
        /// Violation category token (see `gravamen weights`).
        #[arg(long)]
        violation: String,
        /// Impact scale token.
        #[arg(long)]
        scale: String,
        /// Recurrence frequency token.
        #[arg(long)]
        frequency: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Assess every draft row in a JSON file.
    Batch {
        /// Path to a JSON array of incident draft records.
        #[arg(long)]
        input: PathBuf,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the weight tables and band thresholds.
    Weights {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "127.0.0.1:7400")]
        addr: SocketAddr,
    },
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseInputError),
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Classify {
            violation,
            scale,
            frequency,
            json,
        } => cmd_classify(&violation, &scale, &frequency, json),
        Command::Batch { input, json } => cmd_batch(&input, json),
        Command::Weights { json } => cmd_weights(json),
        Command::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(crate::api::serve(addr))?;
            Ok(())
        }
    }
}

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    severity: SeverityBand,
    score: f64,
    violation_weight: u32,
    scale_weight: u32,
    frequency_weight: u32,
}

/// Classify one incident from raw tokens and print the result.
pub fn cmd_classify(
    violation: &str,
    scale: &str,
    frequency: &str,
    json: bool,
) -> Result<(), CliError> {
    let violation: ViolationKind = violation.parse()?;
    let scale: Scale = scale.parse()?;
    let frequency: Frequency = frequency.parse()?;

    let score = severity_score(violation, scale, frequency);
    let severity = band_for_score(score);

    if json {
        let output = ClassifyOutput {
            severity,
            score,
            violation_weight: violation.base_weight(),
            scale_weight: scale.weight(),
            frequency_weight: frequency.weight(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("severity:  {severity}");
        println!("score:     {score:.2}");
        println!("violation: {violation} (weight {})", violation.base_weight());
        println!("scale:     {scale} (weight {})", scale.weight());
        println!("frequency: {frequency} (weight {})", frequency.weight());
    }

    Ok(())
}

// =============================================================================
// BATCH COMMAND
// =============================================================================

#[derive(Debug, Serialize)]
struct BatchRow {
    summary: String,
    severity: Option<SeverityBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<&'static str>,
}

/// Assess every draft in a JSON file.
///
/// Incomplete rows print as `pending` with their missing fields; they do
/// not abort the batch. Unreadable files and malformed JSON do.
pub fn cmd_batch(input: &Path, json: bool) -> Result<(), CliError> {
    let content = std::fs::read_to_string(input)?;
    let drafts: Vec<IncidentDraft> = serde_json::from_str(&content)?;

    let rows: Vec<BatchRow> = drafts
        .iter()
        .map(|draft| BatchRow {
            summary: draft.summary.clone(),
            severity: draft.assess(),
            score: draft.score(),
            missing: draft.missing_fields(),
        })
        .collect();

    let assessed = rows.iter().filter(|row| row.severity.is_some()).count();
    tracing::info!(total = rows.len(), assessed, "batch assessed");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (index, row) in rows.iter().enumerate() {
        let summary = if row.summary.is_empty() {
            "(no summary)"
        } else {
            row.summary.as_str()
        };
        match (row.severity, row.score) {
            (Some(severity), Some(score)) => {
                println!("{}. {summary}: {severity} ({score:.2})", index + 1);
            }
            _ => {
                println!(
                    "{}. {summary}: pending (missing {})",
                    index + 1,
                    row.missing.join(", ")
                );
            }
        }
    }

    Ok(())
}

// =============================================================================
// WEIGHTS COMMAND
// =============================================================================

/// Print the weight-reference tables.
pub fn cmd_weights(json: bool) -> Result<(), CliError> {
    let reference = WeightReference::collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reference)?);
        return Ok(());
    }

    println!("violation categories:");
    for row in &reference.violations {
        println!("  {:<26} {:>3}  {}", row.token, row.weight, row.label);
    }

    println!("scales:");
    for row in &reference.scales {
        println!("  {:<26} {:>3}  {}", row.token, row.weight, row.label);
    }

    println!("frequencies:");
    for row in &reference.frequencies {
        println!("  {:<26} {:>3}  {}", row.token, row.weight, row.label);
    }

    println!("band thresholds (average <= upper):");
    for row in &reference.thresholds {
        match row.upper {
            Some(upper) => println!("  {:<10} <= {upper}", row.band.token()),
            None => println!("  {:<10} above", row.band.token()),
        }
    }

    Ok(())
}
