//! `satherapist` is a command line tool that turns the text output of
//! `samtools flagstat` into a short alignment quality report (or a JSON
//! document). This package is composed of both a library crate, as well as a
//! binary crate.
//!
//! ```
//! use satherapist::flagstat::classify::scan;
//! use satherapist::flagstat::config::ReportConfig;
//! use satherapist::flagstat::metrics::finalize;
//! use satherapist::flagstat::record::Counts;
//!
//! let input = "1000 + 0 in total (QC-passed reads + QC-failed reads)\n950 + 0 primary\n";
//! let outcome = scan(input.as_bytes()).unwrap();
//! let flagstat = finalize(outcome.record, &ReportConfig::default());
//!
//! assert_eq!(flagstat.record.total, Counts(1000, 0));
//! assert_eq!(flagstat.record.primary, Counts(950, 0));
//! ```
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod errors;
pub mod flagstat;
pub mod utils;
