//! Functionality related to the `satherapist parse-flagstat` subcommand.
//!
//! The text written by `samtools flagstat` flows through four stages:
//!
//! 1. [`classify::scan`] reads the report line by line, matching each line
//!    against the [`patterns`] table and accumulating a
//!    [`record::FlagstatRecord`].
//! 2. [`metrics::finalize`] computes the metrics that depend on more than one
//!    category.
//! 3. [`report::render`] produces either a text report or JSON.
//! 4. [`command::parse`] ties the above together for the command line.

pub mod classify;
pub mod command;
pub mod config;
pub mod metrics;
pub mod patterns;
pub mod record;
pub mod report;
