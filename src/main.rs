mod catalog;
mod error;
mod heuristics;
mod loader;
mod parser;
mod pipeline;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::heuristics::Heuristics;
use crate::parser::Extractor;
use crate::pipeline::RunSummary;

#[derive(Parser)]
#[command(name = "agent_catalog", about = "Extract agent records from scraped markdown into a JSON catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every envelope in a directory into one catalog
    Extract {
        /// Directory of *.json scrape envelopes
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Heuristics override file (TOML/JSON/YAML)
        #[arg(long)]
        heuristics: Option<PathBuf>,
        /// Max documents to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Extract one envelope (or raw .md file) and print the agent
    Inspect {
        path: PathBuf,
        #[arg(long)]
        heuristics: Option<PathBuf>,
    },
    /// Per-agent overview of a directory
    Stats {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        heuristics: Option<PathBuf>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    // stdout carries JSON, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            heuristics,
            limit,
        } => {
            let extractor = load_extractor(heuristics.as_deref())?;
            let summary = run_directory(&input, limit, &extractor)?;
            let count = summary.catalog.len();

            match &output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    summary.catalog.write_json(&mut writer)?;
                    writer.flush()?;
                    println!("Wrote {} agents to {}", count, path.display());
                }
                None => {
                    summary.catalog.write_json(io::stdout().lock())?;
                    eprintln!("Found {} agents", count);
                }
            }
        }
        Commands::Inspect { path, heuristics } => {
            let extractor = load_extractor(heuristics.as_deref())?;
            let markdown = loader::load_markdown(&path)?;
            let agent = extractor.parse(&markdown);
            if agent.name.is_empty() {
                eprintln!("No top-level heading in {}; agent would be discarded.", path.display());
            }
            serde_json::to_writer_pretty(io::stdout().lock(), &agent)?;
            println!();
        }
        Commands::Stats {
            input,
            heuristics,
            limit,
        } => {
            let extractor = load_extractor(heuristics.as_deref())?;
            let summary = run_directory(&input, limit, &extractor)?;
            print_stats(&summary);
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_elapsed(elapsed));
    }

    Ok(())
}

fn load_extractor(path: Option<&Path>) -> anyhow::Result<Extractor> {
    let heuristics = Heuristics::load(path).context("loading heuristics")?;
    Ok(Extractor::new(heuristics)?)
}

fn run_directory(
    input: &Path,
    limit: Option<usize>,
    extractor: &Extractor,
) -> anyhow::Result<RunSummary> {
    let sources = loader::collect_sources(input, limit)?;
    info!("Processing {} documents from {}", sources.len(), input.display());

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let summary = pipeline::build_catalog(&sources, extractor, &pb);
    pb.finish_and_clear();

    info!(
        agents = summary.catalog.len(),
        skipped = summary.skipped,
        unnamed = summary.unnamed,
        "Extraction finished"
    );
    Ok(summary)
}

fn print_stats(summary: &RunSummary) {
    if summary.catalog.is_empty() {
        println!("No agents found.");
    } else {
        println!(
            "{:>3} | {:<20} | {:<12} | {:>9} | {:>5}",
            "#", "Agent", "Role", "Abilities", "Media"
        );
        println!("{}", "-".repeat(62));
        for (i, agent) in summary.catalog.agents.values().enumerate() {
            println!(
                "{:>3} | {:<20} | {:<12} | {:>9} | {:>5}",
                i + 1,
                fit_column(&agent.name, 20),
                fit_column(&agent.role, 12),
                agent.abilities.len(),
                agent.media.len()
            );
        }
    }

    println!(
        "\n{} documents | {} agents | {} malformed | {} without heading",
        summary.documents,
        summary.catalog.len(),
        summary.skipped,
        summary.unnamed
    );
}

/// Fit `s` into a table column of `width` chars, marking a cut with `…`.
fn fit_column(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs();
    match secs {
        0..=59 => format!("{:.1}s", d.as_secs_f64()),
        _ => format!("{}m {:02}s", secs / 60, secs % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_column_stays_within_width() {
        assert_eq!(fit_column("Jett", 12), "Jett");
        assert_eq!(fit_column("Controller", 10), "Controller");
        let cut = fit_column("Initiator Sentinel", 12);
        assert_eq!(cut, "Initiator S…");
        assert_eq!(cut.chars().count(), 12);
    }

    #[test]
    fn fit_column_counts_chars() {
        assert_eq!(fit_column("KAY/Ø-ÆØÅ", 5), "KAY/…");
    }

    #[test]
    fn elapsed_switches_to_minutes() {
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1m 05s");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "62m 05s");
    }
}
