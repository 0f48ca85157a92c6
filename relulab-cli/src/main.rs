//! ReLU Lab CLI — compute the curve and export it for use outside the dashboard.
//!
//! Commands:
//! - `sample` — run one render pass for a half-width and write JSON or CSV
//! - `properties` — print the math notes shown in the dashboard's expander

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use relulab_core::content;
use relulab_core::params::HalfWidth;
use relulab_core::render::{on_half_width_change, RenderState};

#[derive(Parser)]
#[command(
    name = "relulab",
    about = "ReLU curve sampler — compute and export the dashboard's data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the curve and zero baseline for a half-width and export them.
    Sample {
        /// Half of the x-axis span; the sample covers [-N, N]. Valid: 5..=50.
        #[arg(long, default_value_t = HalfWidth::DEFAULT)]
        half_width: i32,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the mathematical properties shown in the dashboard's expander.
    Properties,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            half_width,
            format,
            output,
        } => run_sample(half_width, format, output),
        Commands::Properties => run_properties(),
    }
}

fn run_sample(half_width: i32, format: Format, output: Option<PathBuf>) -> Result<()> {
    let state = on_half_width_change(half_width)
        .with_context(|| format!("invalid --half-width {half_width}"))?;

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        Format::Json => write_json(&mut *out, &state)?,
        Format::Csv => write_csv(&mut *out, &state)?,
    }

    if let Some(path) = output {
        eprintln!(
            "Wrote {} curve points + {} baseline points to {}",
            state.curve.len(),
            state.baseline.len(),
            path.display()
        );
    }
    Ok(())
}

fn write_json(out: &mut dyn Write, state: &RenderState) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, state)?;
    writeln!(out)?;
    Ok(())
}

/// One row per point, flagged by series name so both traces share a file.
fn write_csv(out: &mut dyn Write, state: &RenderState) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["series", "x", "y"])?;
    for series in [&state.curve, &state.baseline] {
        for (x, y) in series.points() {
            writer.write_record([series.name.as_str(), &x.to_string(), &y.to_string()])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn run_properties() -> Result<()> {
    println!("{}", content::PAGE_TITLE);
    println!("{}", content::SECTION_HEADING);
    println!();
    println!("{}", content::INTRO);
    println!();
    for line in content::FORMULA_LINES {
        println!("{line}");
    }
    println!();
    for p in &content::MATH_PROPERTIES {
        println!("- {}: {}", p.name, p.detail);
    }
    Ok(())
}
