//! Classifies flagstat lines and accumulates them into a [`FlagstatRecord`].

use std::io::BufRead;

use num_format::Locale;
use num_format::ToFormattedString;
use regex::Captures;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::patterns::CaptureScheme;
use super::patterns::Category;
use super::patterns::PATTERNS;
use super::record::Counts;
use super::record::FlagstatRecord;
use crate::errors::FlagstatError;

/// The values parsed out of a single recognized line.
#[derive(Clone, Debug, PartialEq)]
pub struct Classified {
    /// The category the line belongs to.
    pub category: Category,

    /// The QC-passed and QC-failed counts.
    pub counts: Counts,

    /// The QC-passed percentage, for categories that print one (and only
    /// when it was not `N/A`).
    pub percentage: Option<f64>,
}

/// A line that did not match any known category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnrecognizedLine {
    /// The one-based line number within the input.
    pub line_number: usize,

    /// The trimmed text of the line.
    pub text: String,
}

/// The result of scanning an entire flagstat report.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Everything that was parsed out of the input.
    pub record: FlagstatRecord,

    /// Lines that were skipped because they matched no category.
    pub warnings: Vec<UnrecognizedLine>,

    /// The total number of lines read.
    pub lines_read: usize,
}

/// The largest count accepted on a flagstat line. `samtools` counts with
/// signed 64-bit integers, so anything larger is malformed.
pub const MAX_COUNT: u64 = i64::MAX as u64;

fn parse_count(captures: &Captures<'_>, group: usize, line: &str) -> Result<u64, FlagstatError> {
    let raw = &captures[group];
    let count = raw.parse::<u64>().map_err(|e| FlagstatError::Parse {
        line: line.to_string(),
        cause: format!("count {:?} is not a valid integer: {}", raw, e),
    })?;

    if count > MAX_COUNT {
        return Err(FlagstatError::Parse {
            line: line.to_string(),
            cause: format!("count {} exceeds the maximum of {}", count, MAX_COUNT),
        });
    }

    Ok(count)
}

/// Classifies a single (already trimmed) line.
///
/// Returns `Ok(None)` if the line matches none of the known shapes. A line
/// that matches a shape but carries a number that cannot be parsed (e.g. a
/// count above [`MAX_COUNT`]) is an error.
pub fn classify(line: &str) -> Result<Option<Classified>, FlagstatError> {
    let (pattern, captures) = match PATTERNS
        .iter()
        .find_map(|p| p.regex.captures(line).map(|c| (p, c)))
    {
        Some(hit) => hit,
        None => return Ok(None),
    };

    let counts = Counts(
        parse_count(&captures, 1, line)?,
        parse_count(&captures, 2, line)?,
    );

    let percentage = match pattern.scheme {
        CaptureScheme::Counts => None,
        CaptureScheme::CountsWithPercentage => match captures.get(3) {
            Some(m) => Some(m.as_str().parse::<f64>().map_err(|e| FlagstatError::Parse {
                line: line.to_string(),
                cause: format!("percentage {:?} is not a valid float: {}", m.as_str(), e),
            })?),
            None => None,
        },
    };

    Ok(Some(Classified {
        category: pattern.category,
        counts,
        percentage,
    }))
}

/// Reads a flagstat report line by line, recording every recognized line
/// into a fresh [`FlagstatRecord`].
///
/// Unrecognized lines are logged, collected into
/// [`ScanOutcome::warnings`], and skipped. Read failures and unparsable
/// numbers abort the scan.
pub fn scan<R>(reader: R) -> Result<ScanOutcome, FlagstatError>
where
    R: BufRead,
{
    let mut record = FlagstatRecord::default();
    let mut warnings = Vec::new();
    let mut lines_read = 0;

    for result in reader.lines() {
        let raw = result?;
        lines_read += 1;

        let line = raw.trim();
        record.input.push_str(line);
        record.input.push('\n');

        match classify(line)? {
            Some(classified) => {
                debug!(
                    "Line {} recorded as {}: {:?}",
                    lines_read, classified.category, classified.counts
                );
                record.set(classified);
            }
            None => {
                warn!("unrecognized flagstat line: {:?}", line);
                warnings.push(UnrecognizedLine {
                    line_number: lines_read,
                    text: line.to_string(),
                });
            }
        }
    }

    info!(
        "Read {} lines ({} unrecognized).",
        lines_read.to_formatted_string(&Locale::en),
        warnings.len().to_formatted_string(&Locale::en)
    );

    Ok(ScanOutcome {
        record,
        warnings,
        lines_read,
    })
}
