mod error;
mod summary;

use clap::{Parser, Subcommand};
use msw_deck::{BuiltWell, DeckFile};
use msw_segments::DiagnosticLog;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "msw")]
#[command(about = "Multi-segment well topology builder", long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a deck and build every well in it
    Validate {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
    },
    /// List the wells of a deck
    Wells {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
    },
    /// Show the resolved segments of a well
    Segments {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
        /// Well name
        well: String,
    },
    /// Show the segments of each branch of a well, in outlet order
    Branches {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
        /// Well name
        well: String,
        /// Only this branch
        #[arg(short, long)]
        branch: Option<i32>,
    },
    /// Show the connections of a well and the segments they are allocated to
    Connections {
        /// Path to the deck file (YAML or JSON)
        deck_path: PathBuf,
        /// Well name
        well: String,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Validate { deck_path } => cmd_validate(&deck_path, json),
        Commands::Wells { deck_path } => cmd_wells(&deck_path, json),
        Commands::Segments { deck_path, well } => cmd_segments(&deck_path, &well, json),
        Commands::Branches {
            deck_path,
            well,
            branch,
        } => cmd_branches(&deck_path, &well, branch, json),
        Commands::Connections { deck_path, well } => cmd_connections(&deck_path, &well, json),
    }
}

fn load_deck(path: &Path) -> CliResult<DeckFile> {
    msw_deck::load(path).map_err(|source| CliError::Deck {
        path: path.to_path_buf(),
        source,
    })
}

fn build_well(deck: &DeckFile, well: &str) -> CliResult<BuiltWell> {
    let mut log = DiagnosticLog::default();
    let result = msw_deck::build_named_well(deck, well, &mut log);
    report(&log);
    Ok(result?)
}

fn report(log: &DiagnosticLog) {
    for diagnostic in log.warnings() {
        eprintln!("{diagnostic}");
    }
    for diagnostic in log.notes() {
        tracing::info!("{}", diagnostic.message);
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_validate(deck_path: &Path, json: bool) -> CliResult<()> {
    if !json {
        println!("Validating deck: {}", deck_path.display());
    }
    let deck = load_deck(deck_path)?;

    let mut log = DiagnosticLog::default();
    let result = msw_deck::build_deck(&deck, &mut log);
    report(&log);
    let wells = result?;

    let summaries: Vec<_> = wells
        .iter()
        .map(|w| summary::well_summary(&w.segments))
        .collect();
    if json {
        return print_json(&summaries);
    }
    for s in &summaries {
        println!("✓ {}: {} segments on {} branches", s.well, s.segments, s.branches.len());
    }
    println!("✓ Deck is valid ({} warnings)", log.warnings().count());
    Ok(())
}

fn cmd_wells(deck_path: &Path, json: bool) -> CliResult<()> {
    let deck = load_deck(deck_path)?;
    let names: Vec<&str> = deck.wells.iter().map(|w| w.name()).collect();

    if json {
        return print_json(&names);
    }
    if names.is_empty() {
        println!("No wells found in deck");
    } else {
        println!("Wells in deck ({}):", deck.units);
        for well in &deck.wells {
            println!(
                "  {} - {} ({} records, {} devices, {} connections)",
                well.name(),
                well.welsegs.info_type,
                well.welsegs.records.len(),
                well.sicd.len() + well.aicd.len() + well.valves.len(),
                well.connections.len()
            );
        }
    }
    Ok(())
}

fn cmd_segments(deck_path: &Path, well: &str, json: bool) -> CliResult<()> {
    let deck = load_deck(deck_path)?;
    let set = build_well(&deck, well)?.segments;
    let rows = summary::segment_rows(&set, deck.units)?;

    if json {
        return print_json(&rows);
    }
    println!(
        "Segments of {} (lengths in {}):",
        set.well_name(),
        deck.units.length_name()
    );
    println!(
        "  {:>5} {:>6} {:>6} {:>12} {:>12} {:>12} {:>10}  {}",
        "seg", "branch", "outlet", "length", "total", "depth", "volume", "type"
    );
    for r in &rows {
        println!(
            "  {:>5} {:>6} {:>6} {:>12.3} {:>12.3} {:>12.3} {:>10.4}  {} ({})",
            r.segment,
            r.branch,
            r.outlet,
            r.length,
            r.total_length,
            r.depth,
            r.volume,
            r.kind,
            r.type_id
        );
    }
    Ok(())
}

fn cmd_branches(deck_path: &Path, well: &str, branch: Option<i32>, json: bool) -> CliResult<()> {
    let deck = load_deck(deck_path)?;
    let set = build_well(&deck, well)?.segments;
    let rows = summary::branch_rows(&set, branch)?;

    if json {
        return print_json(&rows);
    }
    for row in &rows {
        let numbers: Vec<String> = row.segments.iter().map(i32::to_string).collect();
        println!("  branch {}: {}", row.branch, numbers.join(" -> "));
    }
    Ok(())
}

fn cmd_connections(deck_path: &Path, well: &str, json: bool) -> CliResult<()> {
    let deck = load_deck(deck_path)?;
    let built = build_well(&deck, well)?;
    let rows = summary::connection_rows(&built.connections, deck.units);

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No connections for {}", built.segments.well_name());
        return Ok(());
    }
    println!(
        "Connections of {} (lengths in {}):",
        built.segments.well_name(),
        deck.units.length_name()
    );
    for r in &rows {
        let depth = r
            .center_depth
            .map_or_else(|| "cell".to_string(), |d| format!("{d:.3}"));
        println!(
            "  segment {:>4}: {:>10.3} .. {:<10.3} depth {}",
            r.segment, r.perf_start, r.perf_end, depth
        );
    }
    Ok(())
}
