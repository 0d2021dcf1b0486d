//! Command implementations for the SWPC processor CLI
//!
//! This module contains the command execution logic: logging setup, input
//! resolution, pipeline invocation, and emission to stdout. Logs go to
//! stderr so the machine-readable stream stays clean.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::cli::args::{Args, Commands, FluxArgs, GeomagArgs};
use crate::emit;
use crate::error::Result;
use crate::flux::extractor;
use crate::geomag::parser;
use crate::schema;

/// Main command runner for the SWPC processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Geomag(geomag_args) => run_geomag(geomag_args),
        Commands::Flux(flux_args) => run_flux(flux_args),
    }
}

/// Geomag command runner
///
/// 1. Set up logging
/// 2. Short-circuit to the schema reporter when requested
/// 3. Read the bulletin from file, stdin, or the network
/// 4. Parse and emit day records as JSON
pub fn run_geomag(args: GeomagArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);
    args.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The schema describes the output shape without reading any input
    if args.schema {
        let schema = schema::day_record_schema(args.array);
        writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        return Ok(());
    }

    let options = args.emit_options();
    let source = args.source();
    let content = source.read()?;

    let mut records = parser::parse_file(&content)?;
    if !options.include_source_line {
        for record in &mut records {
            record.source_line = None;
        }
    }

    info!("emitting {} day records", records.len());
    emit::write_json_records(&mut out, &records, options.array_wrap)
}

/// Flux command runner: read the dump, project the requested columns,
/// emit simplified CSV.
pub fn run_flux(args: FluxArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);
    args.validate()?;

    let content = std::fs::read_to_string(&args.file)?;
    debug!(
        "read {} bytes from {}",
        content.len(),
        args.file.display()
    );

    let projection = extractor::project_columns(&content, &args.columns.columns)?;
    info!("projected {} rows", projection.rows.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit::write_projection_csv(&mut out, &projection)
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("swpc_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("logging initialized at level: {}", log_level);
}
