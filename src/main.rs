//! placecards - CLI tool to print reservation placecards from a booking export.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use placecards::config::DEFAULT_STYLE_FILE;
use placecards::{
    check_style, generate_from_csv, generate_sample_card, load_style_config, select_bookings,
    validate_bookings, Generation, Placecard, PlacecardError, Selection, ServiceFilter,
    StyleConfig, StyleOverrides,
};

/// Generate printable "RESERVED" placecards, four per landscape page.
#[derive(Parser, Debug)]
#[command(name = "placecards")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Booking export (CSV) with columns: Service or Event, Time,
    /// Number of People, Customer, Table(s)
    #[arg(short, long, required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Output PDF path (defaults to brewvino_placecards_<service>.pdf next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Service period to print: all, lunch or dinner
    #[arg(short, long, default_value = "all", value_parser = parse_service)]
    service: ServiceFilter,

    /// Style file (JSON); built-in defaults are used when it is missing
    #[arg(short, long, default_value = DEFAULT_STYLE_FILE)]
    config: PathBuf,

    /// Font family: Helvetica, Times-Roman or Courier
    #[arg(long)]
    font: Option<String>,

    /// Title font size in points (10-30)
    #[arg(long)]
    title_size: Option<f64>,

    /// Content font size in points (8-24)
    #[arg(long)]
    content_size: Option<f64>,

    /// Do not outline cards
    #[arg(long)]
    no_border: bool,

    /// Border and header rule color (name or #rrggbb)
    #[arg(long)]
    border_color: Option<String>,

    /// Card background color (name or #rrggbb)
    #[arg(long)]
    background_color: Option<String>,

    /// Text color (name or #rrggbb)
    #[arg(long)]
    text_color: Option<String>,

    /// Log the first N bookings after filtering, without writing a PDF
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Validate bookings and style only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print the normalized placecards as JSON instead of writing a PDF
    #[arg(long)]
    debug: bool,

    /// Write a single preview card with the current style instead of reading bookings
    #[arg(long)]
    sample: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn style_overrides(&self) -> StyleOverrides {
        StyleOverrides {
            font_family: self.font.clone(),
            title_font_size: self.title_size,
            content_font_size: self.content_size,
            border: self.no_border.then_some(false),
            border_color: self.border_color.clone(),
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
        }
    }

    fn output_path(&self, default_name: &str) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let dir = self
            .input
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        dir.join(default_name)
    }
}

fn parse_service(s: &str) -> std::result::Result<ServiceFilter, String> {
    ServiceFilter::from_name(s).ok_or_else(|| format!("unknown service '{}' (all, lunch, dinner)", s))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Library failures exit with their error code; anything else exits with 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PlacecardError>()
        .map_or(1, PlacecardError::exit_status)
}

fn run(args: &Args) -> Result<()> {
    // Load style and apply command-line edits
    let mut style = load_style_config(&args.config).config;
    args.style_overrides()
        .apply(&mut style)
        .context("Invalid style option")?;

    if args.sample {
        let pdf = generate_sample_card(&style).context("Failed to generate preview card")?;
        let output_path = args.output_path("placecard_preview.pdf");
        return write_output(&output_path, &pdf);
    }

    let Some(input) = args.input.as_deref() else {
        bail!("No input file given");
    };

    info!("Processing: {}", input.display());

    if args.preview.is_some() || args.debug || args.validate {
        return inspect(args, input, &style);
    }

    let pdf = match generate_from_csv(input, args.service, &style)
        .with_context(|| format!("Failed to process {}", input.display()))?
    {
        Generation::Document(pdf) => pdf,
        Generation::NoMatches => return Ok(()),
    };

    let output_path = args.output_path(&args.service.output_file_name());
    write_output(&output_path, &pdf)
}

/// Preview, debug and validate-only modes. Nothing is written.
fn inspect(args: &Args, input: &Path, style: &StyleConfig) -> Result<()> {
    let records = match select_bookings(input, args.service)
        .with_context(|| format!("Failed to read {}", input.display()))?
    {
        Selection::Records(records) => records,
        Selection::Empty => return Ok(()),
    };

    if let Some(count) = args.preview {
        for booking in records.iter().take(count) {
            info!(
                "  {} | {} | {} | {} | {}",
                booking.service_category.as_deref().unwrap_or(""),
                booking.time_text(),
                booking.party_size_text(),
                booking.customer_name.as_deref().unwrap_or(""),
                booking.table_spec.as_deref().unwrap_or("")
            );
        }
    }

    let validation = validate_bookings(&records);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    // Debug output
    if args.debug {
        let cards: Vec<Placecard> = records.iter().map(Placecard::from_booking).collect();
        let json = serde_json::to_string_pretty(&cards)?;
        println!("{}", json);
    }

    if args.validate {
        check_style(style).context("Style validation failed")?;
        info!("Validation passed");
    }

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(PlacecardError::from)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}
