use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use carbon_score::{calculate_carbon_score, logging, read_bulk, ScoreResult};

/// Score every respondent in a CSV of survey answers.
#[derive(Parser)]
struct Args {
    path: PathBuf,
    /// Print one JSON object per line
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Row<'a> {
    id: &'a str,
    #[serde(flatten)]
    result: &'a ScoreResult,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let file = File::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;
    let mut scored = 0usize;
    let mut skipped = 0usize;
    for row in read_bulk(BufReader::new(file)) {
        match row {
            Ok((id, answers)) => {
                let result = calculate_carbon_score(&answers);
                if args.json {
                    println!("{}", serde_json::to_string(&Row { id: &id, result: &result })?);
                } else {
                    println!(
                        "id = {}, total = {:.1}, impact = {}",
                        id, result.total_score, result.impact_category
                    );
                }
                scored += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping row");
                skipped += 1;
            }
        }
    }
    tracing::info!(scored, skipped, "bulk scoring finished");
    Ok(())
}
