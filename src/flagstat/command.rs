//! Functionality relating to the `satherapist parse-flagstat` subcommand itself.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use num_format::Locale;
use num_format::ToFormattedString;
use tracing::info;
use tracing::warn;

use crate::flagstat::classify;
use crate::flagstat::config::ReportConfig;
use crate::flagstat::metrics;
use crate::flagstat::report;

/// Clap arguments for the `satherapist parse-flagstat` subcommand.
#[derive(Args, Debug)]
pub struct ParseFlagstatArgs {
    /// Text output of `samtools flagstat`. Reads from stdin if omitted or `-`.
    #[arg(value_name = "FLAGSTAT")]
    src: Option<PathBuf>,

    /// Output a JSON document (including the original flagstat text) instead
    /// of the text report.
    #[arg(short, long)]
    json: bool,

    /// Number of reads in the FASTQ file(s) that are expected to show up in
    /// the alignment.
    #[arg(short = 'e', long, value_name = "U64")]
    fastq_read_count: Option<u64>,
}

impl ParseFlagstatArgs {
    fn config(&self) -> ReportConfig {
        ReportConfig {
            json: self.json,
            fastq_read_count: self.fastq_read_count,
        }
    }
}

/// Opens the flagstat source: a file, or stdin for `None` and `-`.
fn open(src: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match src {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open file: {}", path.display()))?;
            info!("Reading flagstat output from {}.", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        _ => {
            info!("Reading flagstat output from stdin.");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

/// Main function for the `satherapist parse-flagstat` subcommand.
pub fn parse(args: ParseFlagstatArgs) -> anyhow::Result<()> {
    info!("Starting parse-flagstat subcommand.");
    let config = args.config();

    // (1) Classify every line of the input.
    let reader = open(args.src.as_ref())?;
    let outcome = classify::scan(reader)?;
    if !outcome.warnings.is_empty() {
        let line_numbers: Vec<usize> = outcome.warnings.iter().map(|w| w.line_number).collect();
        warn!(
            "Skipped {} of {} lines that matched no flagstat category (line numbers: {:?}).",
            outcome.warnings.len().to_formatted_string(&Locale::en),
            outcome.lines_read.to_formatted_string(&Locale::en),
            line_numbers
        );
    }

    // (2) Derive the metrics that span multiple categories.
    let mut flagstat = metrics::finalize(outcome.record, &config);

    // (3) Render and print the report.
    let output = report::render(&mut flagstat, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.as_bytes())
        .context("failed to write report to stdout")?;
    if config.json {
        writeln!(handle).context("failed to write report to stdout")?;
    }

    Ok(())
}
