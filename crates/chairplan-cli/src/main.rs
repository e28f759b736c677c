//! chairplan — count chairs per room in an ASCII floor plan.
//!
//! Reads a plan file, runs the scanning pipeline from `chairplan-logic`,
//! and prints the grand total followed by one block per room:
//!
//! ```text
//! total:
//!     W: 3, P: 2, S: 1, C: 0
//! living room:
//!     W: 1, P: 0, S: 1, C: 0
//! ```
//!
//! Usage:
//!   chairplan --plan apartment.txt
//!   chairplan -p apartment.txt --json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chairplan_logic::constants::chair_types;
use chairplan_logic::plan::process_plan;
use chairplan_logic::room::Room;
use chairplan_logic::tally::{total_chairs, ChairCounts};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chairplan", about = "Count chairs per room in an ASCII floor plan")]
struct Cli {
    /// Path to the plan file.
    #[arg(short, long, default_value = "plan.txt")]
    plan: PathBuf,

    /// Emit rooms and totals as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    total: &'a ChairCounts,
    rooms: &'a [Room],
}

/// One display block: name, then counts in the fixed W, P, S, C order with
/// zeros for markers the mapping doesn't carry.
fn render(name: &str, counts: &ChairCounts) -> String {
    let fields: Vec<String> = chair_types::DISPLAY_ORDER
        .iter()
        .map(|&m| format!("{}: {}", m, counts.get(&m).copied().unwrap_or(0)))
        .collect();
    format!("{}:\n    {}", name, fields.join(", "))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.plan)
        .with_context(|| format!("failed to read plan file {}", cli.plan.display()))?;

    let rooms = process_plan(&text);
    let total = total_chairs(&rooms);
    tracing::debug!(rooms = rooms.len(), "plan scanned");

    if cli.json {
        let report = Report {
            total: &total,
            rooms: &rooms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render("total", &total));
    for room in &rooms {
        println!("{}", render(&room.name, &room.chairs));
    }
    Ok(())
}
