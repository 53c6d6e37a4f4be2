//! ChartCraft CLI — inspect and exercise serialized chart configurations.
//!
//! Commands:
//! - `kinds` — list every registered function kind with defaults and capabilities
//! - `inspect` — decode a chart string and describe its configuration
//! - `roundtrip` — decode a chart string and print its canonical re-encoding
//! - `render` — decode a chart string, evaluate it over a CSV price file,
//!   and print a data-set summary table

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use chartcraft_core::{Bar, ChartBase, ChartColors, FunctionKind, PriceSeries, StockChart};

#[derive(Parser)]
#[command(name = "chartcraft", about = "ChartCraft CLI — chart configuration tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered function kind.
    Kinds,
    /// Decode a serialized chart string and describe it.
    Inspect {
        /// Chart string, e.g. "type:price;overlays:[SMA(50),BAND(20,2)]".
        chart: String,
    },
    /// Decode a chart string and print its canonical re-encoding.
    Roundtrip {
        chart: String,
    },
    /// Evaluate a chart over a CSV price file and summarize its data sets.
    Render {
        chart: String,

        /// CSV with header date,open,high,low,close,volume (dates YYYY-MM-DD).
        #[arg(long)]
        prices: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds => run_kinds(),
        Commands::Inspect { chart } => run_inspect(&chart),
        Commands::Roundtrip { chart } => run_roundtrip(&chart),
        Commands::Render { chart, prices } => run_render(&chart, &prices),
    }
}

fn run_kinds() -> Result<()> {
    println!("{:<6} {:<10} {:<20} capability", "token", "arity", "defaults");
    for kind in FunctionKind::ALL {
        let defaults = kind.create().serialize();
        let capability = if kind.is_indicator() { "indicator" } else { "overlay" };
        println!("{:<6} {:<10} {:<20} {}", kind.token(), kind.arity(), defaults, capability);
    }
    Ok(())
}

fn run_inspect(text: &str) -> Result<()> {
    let chart = decode(text)?;

    println!("type: {}", chart.base().type_token());
    if let ChartBase::Indicator(function) = chart.base() {
        println!("base indicator: {}", function.label());
    }
    println!("overlays: {}", chart.overlay_count());
    for overlay in chart.overlays() {
        println!("  {}", overlay.label());
    }
    Ok(())
}

fn run_roundtrip(text: &str) -> Result<()> {
    let chart = decode(text)?;
    println!("{}", chart.serialize());
    Ok(())
}

fn run_render(text: &str, prices: &Path) -> Result<()> {
    let mut chart = decode(text)?;
    let series = load_series(prices)?;

    let sets = chart
        .data_sets(&series)
        .context("failed to build data sets")?;

    println!("{:<16} {:<9} {:<7} last", "label", "color", "type");
    for set in sets {
        let last = set
            .values
            .iter()
            .rev()
            .find(|v| !v.is_nan())
            .map_or("-".to_string(), |v| format!("{v:.2}"));
        println!(
            "{:<16} {:<9} {:<7} {}",
            set.label,
            set.color.to_string(),
            format!("{:?}", set.line_type),
            last
        );
    }
    Ok(())
}

fn decode(text: &str) -> Result<StockChart> {
    StockChart::deserialize(text, ChartColors::default())
        .with_context(|| format!("failed to decode chart string {text:?}"))
}

fn load_series(path: &Path) -> Result<PriceSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut bars = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 6 {
            anyhow::bail!("line {}: expected 6 columns, got {}", line + 2, record.len());
        }
        bars.push(Bar {
            date: NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
                .with_context(|| format!("line {}: bad date {:?}", line + 2, &record[0]))?,
            open: record[1].parse()?,
            high: record[2].parse()?,
            low: record[3].parse()?,
            close: record[4].parse()?,
            volume: record[5].parse()?,
        });
    }

    PriceSeries::new(bars).context("price CSV failed series validation")
}
