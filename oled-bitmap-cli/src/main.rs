use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, Level};
use serde::Serialize;

use oled_bitmap::config::{ConvertOptions, PartialOptions};
use oled_bitmap::convert::{convert, ConversionReport};
use oled_bitmap::header::{preview, PREVIEW_CHARS};

/// Convert a PNG logo into a C header for a 128x64 SSD1306 OLED display
#[derive(Parser)]
#[command(name = "oled-bitmap", version)]
struct Args {
    /// Input PNG file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output header file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// C symbol stem; the array is named <SYMBOL>_bitmap
    #[arg(short, long)]
    symbol: Option<String>,

    /// TOML file providing input, output and symbol
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the start of the generated header
    #[arg(long, conflicts_with = "json")]
    preview: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the human-readable summary
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Summary {
    input: String,
    output: String,
    original_width: u32,
    original_height: u32,
    color: String,
    width: u32,
    height: u32,
    bytes: usize,
}

impl Summary {
    fn new(opts: &ConvertOptions, report: &ConversionReport) -> Self {
        Summary {
            input: opts.input.display().to_string(),
            output: report.output.display().to_string(),
            original_width: report.source.width,
            original_height: report.source.height,
            color: report.source.color.clone(),
            width: report.width,
            height: report.height,
            bytes: report.byte_count,
        }
    }
}

/// Human-readable summary printed after a successful run.
fn summary_lines(report: &ConversionReport) -> Vec<String> {
    vec![
        format!(
            "Original image: {}x{} pixels, mode: {}",
            report.source.width, report.source.height, report.source.color
        ),
        format!(
            "Converted to: {}x{} pixels, 1-bit monochrome",
            report.width, report.height
        ),
        format!("Generated {} bytes of bitmap data", report.byte_count),
        format!("C bitmap header saved to: {}", report.output.display()),
    ]
}

fn preview_text(report: &ConversionReport) -> String {
    format!(
        "\nPreview of generated header:\n{}",
        preview(&report.header, PREVIEW_CHARS)
    )
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

/// Merge command line, config file and defaults, in that order.
fn resolve_options(args: &Args) -> Result<ConvertOptions> {
    let from_cli = PartialOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        symbol: args.symbol.clone(),
    };

    let from_file = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PartialOptions::from_toml(&toml_str)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => PartialOptions::default(),
    };

    Ok(from_cli.or(from_file).resolve())
}

fn main() -> Result<()> {
    let args = Args::parse();

    simple_logger::init_with_level(log_level(args.verbose)).context("initializing logger")?;

    let opts = resolve_options(&args)?;
    debug!(
        "input={} output={} symbol={}",
        opts.input.display(),
        opts.output.display(),
        opts.symbol
    );

    let report = convert(&opts)
        .with_context(|| format!("converting {}", opts.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&Summary::new(&opts, &report))?);
    } else if !args.quiet {
        for line in summary_lines(&report) {
            println!("{line}");
        }
    }

    if args.preview {
        println!("{}", preview_text(&report));
    }

    Ok(())
}
