//! CLI entry point for txregions.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use txregions::config::{Config, MissingChromosome, OutputFormat};
use txregions::output::write_matches;
use txregions::types::CoordinateOrdering;

/// Report covered exons of selected transcripts.
///
/// Joins an exon table against a coverage file and prints every exon of the
/// requested transcripts that overlaps a covered region.
#[derive(Parser, Debug)]
#[command(name = "txregions")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gzip-compressed coverage file (required)
    #[arg(short = 'c', long = "coverage")]
    coverage: PathBuf,

    /// Transcript(s) to report, space-separated (required)
    #[arg(short = 't', long = "transcripts", num_args = 1.., required = true)]
    transcripts: Vec<String>,

    /// Exon table: chrom, start, end, gene symbol, transcript, exon number (required)
    #[arg(short = 'e', long = "exon_file")]
    exon_file: PathBuf,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format: legacy or tsv
    #[arg(short = 'f', long = "format", default_value = "legacy")]
    format: String,

    /// Coordinate comparison: numeric or lexical (lexical still requires integer coordinates)
    #[arg(long = "compare", default_value = "numeric")]
    compare: String,

    /// Chromosome without coverage: fail or skip
    #[arg(long = "missing-chrom", default_value = "fail")]
    missing_chrom: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Build configuration
    let mut config = Config::new();
    config.format = args
        .format
        .parse::<OutputFormat>()
        .context("Format can only be one of the following: legacy or tsv")?;
    config.ordering = args
        .compare
        .parse::<CoordinateOrdering>()
        .context("Comparison can only be one of the following: numeric or lexical")?;
    config.missing_chromosome = args
        .missing_chrom
        .parse::<MissingChromosome>()
        .context("Missing chromosome policy can only be one of the following: fail or skip")?;

    info!("Parsing exon table: {}", args.exon_file.display());
    info!("Parsing coverage file: {}", args.coverage.display());

    let matches = txregions::collect_matches(
        &args.transcripts,
        &args.coverage,
        &args.exon_file,
        &config,
    )
    .context("Failed to collect covered exons")?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            let file = File::create(path).context("Failed to create output file")?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_matches(&mut writer, &matches, config.format).context("Failed to write output")?;

    info!(
        "Done! {} covered exon(s) across {} transcript(s)",
        matches.len(),
        args.transcripts.len()
    );
    Ok(())
}
