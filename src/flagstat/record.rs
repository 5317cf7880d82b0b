//! The accumulated contents of a flagstat report.

use serde::Deserialize;
use serde::Serialize;

use super::classify::Classified;
use super::patterns::Category;

/// A `(QC-passed, QC-failed)` pair of counts. Serialized as a two element
/// array, e.g. `[1000, 0]`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Counts(pub u64, pub u64);

impl Counts {
    /// The QC-passed count.
    pub fn pass(&self) -> u64 {
        self.0
    }

    /// The QC-failed count.
    pub fn fail(&self) -> u64 {
        self.1
    }

    /// The QC-passed and QC-failed counts summed. Widened so the sum of two
    /// `u64` counts cannot overflow.
    pub fn total(&self) -> u128 {
        u128::from(self.0) + u128::from(self.1)
    }
}

/// Every value parsed out of a flagstat report, along with the report itself.
///
/// Percentages are taken verbatim from the text and are never recomputed
/// from the counts. They are `None` when the line was missing or when
/// `samtools` printed `N/A`.
///
/// Metrics derived from more than one category live in
/// [`DerivedMetrics`](super::metrics::DerivedMetrics) and are not part of
/// this struct (nor of its serialized form).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FlagstatRecord {
    /// The trimmed input lines, each followed by a newline.
    pub input: String,

    /// The rendered text report. Empty when JSON output was requested.
    pub output: String,

    /// The number of reads the user expects to find, or zero if not
    /// supplied.
    pub fastq_read_count: u64,

    /// `in total`
    pub total: Counts,

    /// `primary`
    pub primary: Counts,

    /// `secondary`
    pub secondary: Counts,

    /// `supplementary`
    pub supplementary: Counts,

    /// `duplicates`
    pub duplicates: Counts,

    /// `primary duplicates`
    pub primary_duplicates: Counts,

    /// `mapped`
    pub mapped: Counts,

    /// QC-passed percentage printed on the `mapped` line.
    pub mapped_percent: Option<f64>,

    /// `primary mapped`
    pub primary_mapped: Counts,

    /// QC-passed percentage printed on the `primary mapped` line.
    pub primary_mapped_percent: Option<f64>,

    /// `paired in sequencing`
    pub paired_in_seq: Counts,

    /// `read1`
    pub read1: Counts,

    /// `read2`
    pub read2: Counts,

    /// `properly paired`
    pub properly_paired: Counts,

    /// QC-passed percentage printed on the `properly paired` line.
    pub properly_paired_percent: Option<f64>,

    /// `with itself and mate mapped`
    pub with_mate_mapped: Counts,

    /// `singletons`
    pub singletons: Counts,

    /// QC-passed percentage printed on the `singletons` line.
    pub singletons_percent: Option<f64>,

    /// `with mate mapped to a different chr`
    pub mate_diff_chr: Counts,

    /// `with mate mapped to a different chr (mapQ>=5)`
    pub mate_diff_chr_mapq5: Counts,
}

impl FlagstatRecord {
    /// Writes a classified line into the field for its category, overwriting
    /// any earlier value for that category.
    pub fn set(&mut self, classified: Classified) {
        let Classified {
            category,
            counts,
            percentage,
        } = classified;

        match category {
            Category::Total => self.total = counts,
            Category::Primary => self.primary = counts,
            Category::Secondary => self.secondary = counts,
            Category::Supplementary => self.supplementary = counts,
            Category::Duplicates => self.duplicates = counts,
            Category::PrimaryDuplicates => self.primary_duplicates = counts,
            Category::Mapped => {
                self.mapped = counts;
                self.mapped_percent = percentage;
            }
            Category::PrimaryMapped => {
                self.primary_mapped = counts;
                self.primary_mapped_percent = percentage;
            }
            Category::PairedInSequencing => self.paired_in_seq = counts,
            Category::Read1 => self.read1 = counts,
            Category::Read2 => self.read2 = counts,
            Category::ProperlyPaired => {
                self.properly_paired = counts;
                self.properly_paired_percent = percentage;
            }
            Category::WithMateMapped => self.with_mate_mapped = counts,
            Category::Singletons => {
                self.singletons = counts;
                self.singletons_percent = percentage;
            }
            Category::MateDiffChr => self.mate_diff_chr = counts,
            Category::MateDiffChrMapQ5 => self.mate_diff_chr_mapq5 = counts,
        }
    }
}

#[cfg(test)]
impl FlagstatRecord {
    /// Gets the counts recorded for a category.
    pub fn counts(&self, category: Category) -> Counts {
        match category {
            Category::Total => self.total,
            Category::Primary => self.primary,
            Category::Secondary => self.secondary,
            Category::Supplementary => self.supplementary,
            Category::Duplicates => self.duplicates,
            Category::PrimaryDuplicates => self.primary_duplicates,
            Category::Mapped => self.mapped,
            Category::PrimaryMapped => self.primary_mapped,
            Category::PairedInSequencing => self.paired_in_seq,
            Category::Read1 => self.read1,
            Category::Read2 => self.read2,
            Category::ProperlyPaired => self.properly_paired,
            Category::WithMateMapped => self.with_mate_mapped,
            Category::Singletons => self.singletons,
            Category::MateDiffChr => self.mate_diff_chr,
            Category::MateDiffChrMapQ5 => self.mate_diff_chr_mapq5,
        }
    }
}
