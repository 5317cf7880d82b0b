//! Metrics derived from more than one flagstat category.
//!
//! Ratios are computed without guarding against a zero denominator: an empty
//! category produces `inf` (or `NaN` for `0 / 0`) and that value is reported
//! as-is.

use tracing::debug;

use super::config::ReportConfig;
use super::record::FlagstatRecord;

/// How the user-supplied read count compares with the reads in the report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadCountReconciliation {
    /// No expected read count was supplied.
    NotSupplied,

    /// The expected read count equals the primary (QC-passed + QC-failed)
    /// count.
    AllAccountedFor,

    /// The expected read count differs from the primary count.
    Mismatch {
        /// The read count supplied by the user.
        supplied: u64,

        /// The primary count found in the report.
        observed: u128,
    },
}

/// Metrics computed once all lines of the report have been read.
#[derive(Clone, Debug)]
pub struct DerivedMetrics {
    /// QC-failed reads as a percentage of QC-passed reads.
    pub qc_fail_percent: f64,

    /// Properly paired reads as a percentage of primary mapped reads
    /// (QC-passed only).
    pub properly_paired_given_primary_mapped_percent: f64,

    /// Reads paired in sequencing that are not primary mapped. Signed, since
    /// an inconsistent report can make this negative. Wide enough to hold
    /// the difference of any two count sums.
    pub unmapped_reads: i128,

    /// Reads with their mate on a different chromosome at mapQ>=5, as a
    /// percentage of all reads with their mate on a different chromosome
    /// (QC-passed only).
    pub high_quality_diff_chr_percent: f64,

    /// The expected read count check.
    pub reconciliation: ReadCountReconciliation,
}

/// A record that has been read to completion along with its derived metrics.
#[derive(Clone, Debug)]
pub struct FinalizedFlagstat {
    /// The parsed record.
    pub record: FlagstatRecord,

    /// The metrics derived from `record`.
    pub metrics: DerivedMetrics,
}

fn percent(numerator: u64, denominator: u64) -> f64 {
    numerator as f64 / denominator as f64 * 100.0
}

/// Compares the expected read count (if any) with the primary count.
pub fn reconcile(record: &FlagstatRecord, expected: Option<u64>) -> ReadCountReconciliation {
    match expected {
        None => ReadCountReconciliation::NotSupplied,
        Some(supplied) => {
            let observed = record.primary.total();
            if u128::from(supplied) == observed {
                ReadCountReconciliation::AllAccountedFor
            } else {
                ReadCountReconciliation::Mismatch { supplied, observed }
            }
        }
    }
}

/// Computes the [`DerivedMetrics`] for a fully scanned record.
pub fn compute(record: &FlagstatRecord, expected_reads: Option<u64>) -> DerivedMetrics {
    let qc_fail_percent = percent(record.total.fail(), record.total.pass());

    let properly_paired_given_primary_mapped_percent =
        percent(record.properly_paired.pass(), record.primary_mapped.pass());

    let unmapped_reads =
        record.paired_in_seq.total() as i128 - record.primary_mapped.total() as i128;

    let high_quality_diff_chr_percent =
        percent(record.mate_diff_chr_mapq5.pass(), record.mate_diff_chr.pass());

    let reconciliation = reconcile(record, expected_reads);

    DerivedMetrics {
        qc_fail_percent,
        properly_paired_given_primary_mapped_percent,
        unmapped_reads,
        high_quality_diff_chr_percent,
        reconciliation,
    }
}

/// Finalizes a scanned record: stores the expected read count on the record
/// and computes the derived metrics.
pub fn finalize(mut record: FlagstatRecord, config: &ReportConfig) -> FinalizedFlagstat {
    let expected_reads = config.expected_reads();
    record.fastq_read_count = expected_reads.unwrap_or(0);

    let metrics = compute(&record, expected_reads);
    debug!("Derived metrics: {:?}", metrics);

    FinalizedFlagstat { record, metrics }
}
