use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panelbore::{init_logging, DecodeMode, DecodeOptions, DecodeReport, EncodeOptions, Transform};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "panelbore", version)]
#[command(about = "Inspect and re-orient MPR panel drilling programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dimensions, holes and edge bands of a drilling program
    Info {
        /// Path to the .mpr program
        file: PathBuf,
        /// Emit machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Skip malformed hole blocks instead of aborting
        #[arg(long)]
        lenient: bool,
    },
    /// Re-orient a program and write it back out
    Rework {
        /// Input .mpr program
        input: PathBuf,
        /// Output .mpr program
        #[arg(short, long)]
        output: PathBuf,
        /// Clockwise rotation in degrees (0, 90, 180 or 270)
        #[arg(long, default_value_t = 0)]
        rotate: u32,
        /// Mirror across the vertical centerline
        #[arg(long)]
        mirror: bool,
        /// Skip malformed hole blocks instead of aborting
        #[arg(long)]
        lenient: bool,
        /// Compress equal-spaced vertical hole runs on output
        #[arg(long)]
        group_runs: bool,
    },
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Info {
            file,
            json,
            lenient,
        } => info(&file, json, lenient),
        Commands::Rework {
            input,
            output,
            rotate,
            mirror,
            lenient,
            group_runs,
        } => rework(&input, &output, rotate, mirror, lenient, group_runs),
    }
}

fn decode_file(path: &Path, lenient: bool) -> Result<DecodeReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let options = DecodeOptions {
        mode: if lenient {
            DecodeMode::Lenient
        } else {
            DecodeMode::Strict
        },
    };
    let mut report = panelbore::decode_with_options(&text, options)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    if report.skipped_blocks > 0 {
        warn!(
            skipped = report.skipped_blocks,
            "malformed hole blocks were skipped"
        );
    }
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        report.panel.set_name(stem);
    }
    Ok(report)
}

fn info(file: &Path, json: bool, lenient: bool) -> Result<()> {
    let report = decode_file(file, lenient)?;
    let panel = &report.panel;

    if json {
        println!("{}", serde_json::to_string_pretty(panel)?);
        return Ok(());
    }

    println!("{}", panel.name());
    println!(
        "  size: {} x {} x {} mm",
        panel.length_x(),
        panel.width_y(),
        panel.thickness_z()
    );
    println!(
        "  holes: {} vertical, {} horizontal",
        panel.vertical_holes().len(),
        panel.horizontal_holes().len()
    );
    let edges = panel.edges();
    println!(
        "  bands: top={} bottom={} left={} right={}",
        edges.top, edges.bottom, edges.left, edges.right
    );
    for comment in panel.comments() {
        println!("  note: {}", comment);
    }
    if report.skipped_blocks > 0 {
        println!("  skipped blocks: {}", report.skipped_blocks);
    }
    Ok(())
}

fn rework(
    input: &Path,
    output: &Path,
    rotate: u32,
    mirror: bool,
    lenient: bool,
    group_runs: bool,
) -> Result<()> {
    let report = decode_file(input, lenient)?;
    let transform = Transform::from_degrees(rotate, mirror)?;

    let derived = panelbore::apply(&report.panel, transform);
    let text = panelbore::encode_with_options(&derived, EncodeOptions { group_runs });
    fs::write(output, text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} -> {} ({} holes, rotated {}°{})",
        input.display(),
        output.display(),
        derived.hole_count(),
        rotate,
        if mirror { ", mirrored" } else { "" }
    );
    Ok(())
}
