//! hotpaths CLI - mine frequently traversed paths from extracted trip rows
//!
//! Usage:
//!   hotpaths <rows-file> [--output <dir>] [--min-support <n>] [--max-cardinality <k>]
//!
//! The rows file is the ingestion collaborator's export: one
//! `<trip_id>,<segment_id>` pair per line, grouped by trip id, ordered by
//! traversal time within each trip. Results land in one
//! `frequent_paths_<k>` file per cardinality.

use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use hotpaths::{
    trips_from_rows, AliasTable, FileSink, MiningConfig, MiningSession, MiningStats, Trip,
};

#[derive(Parser)]
#[command(name = "hotpaths")]
#[command(about = "Mine frequently traversed paths and report their properties", long_about = None)]
struct Cli {
    /// File of extracted (trip_id, segment_id) rows, one comma-separated
    /// pair per line
    rows: PathBuf,

    /// Output directory for the per-cardinality result files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Minimum traversal count for a path to be considered frequent
    #[arg(short = 's', long, default_value = "2")]
    min_support: u64,

    /// Highest cardinality to mine, inclusive
    #[arg(short = 'c', long, default_value = "5")]
    max_cardinality: usize,

    /// Dump a compact-alias table for the corpus segment ids (debugging aid)
    #[arg(long)]
    compact_ids: bool,

    /// Write a JSON run summary next to the result files
    #[arg(long)]
    json: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("Minimum traversal count is: {}", cli.min_support);
    println!("Max cardinality is: {}", cli.max_cardinality);

    let raw_trips = load_rows(&cli.rows)?;
    println!(
        "Loaded {} raw trip records from {}",
        raw_trips.len(),
        cli.rows.display()
    );

    let config = MiningConfig {
        min_support: cli.min_support,
        max_cardinality: cli.max_cardinality,
    };

    let mut session = MiningSession::from_raw_trips(raw_trips);

    if cli.compact_ids {
        dump_alias_table(session.trips(), &cli.output)?;
    }

    let mut sink = FileSink::new(&cli.output)?;
    let stats = session.run(&config, &mut sink)?;

    print_summary(&stats);

    if cli.json {
        let summary_path = cli.output.join("summary.json");
        let file = File::create(&summary_path)?;
        serde_json::to_writer_pretty(file, &stats)?;
        println!("Summary written to {}", summary_path.display());
    }

    println!("Done");
    Ok(())
}

/// Load `<trip_id>,<segment_id>` rows from the collaborator's export file.
///
/// Blank lines are ignored; a line without a comma is malformed input from
/// the extraction step and aborts the run.
fn load_rows(path: &PathBuf) -> Result<Vec<Trip>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (trip_id, segment) = line
            .split_once(',')
            .ok_or_else(|| format!("{}:{}: expected '<trip_id>,<segment_id>'", path.display(), number + 1))?;
        rows.push((trip_id.trim().to_string(), segment.trim().to_string()));
    }

    Ok(trips_from_rows(rows))
}

/// Write the corpus alias table as `segment_aliases` in the output
/// directory, one `<token>\t<segment_id>` line per distinct segment.
fn dump_alias_table(
    trips: &[Trip],
    output: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output)?;
    let table = AliasTable::from_trips(trips);

    let path = output.join("segment_aliases");
    let mut file = File::create(&path)?;
    for (token, segment) in table.iter() {
        writeln!(file, "{token}\t{segment}")?;
    }

    println!(
        "Alias table: {} distinct segments written to {}",
        table.len(),
        path.display()
    );
    Ok(())
}

fn print_summary(stats: &MiningStats) {
    println!("\n{}", "-".repeat(60));
    println!("RESULTS");
    println!("{}", "-".repeat(60));
    println!("Corrected trips: {}", stats.trip_count);
    if stats.rejected_trips > 0 {
        println!("Rejected records: {}", stats.rejected_trips);
    }
    for (i, size) in stats.level_sizes.iter().enumerate() {
        println!("Cardinality {}: {} frequent paths", i + 1, size);
    }
    println!("Levels written: {}", stats.levels_written);
}
