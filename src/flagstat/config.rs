//! Options that control how a flagstat report is finalized and rendered.

/// The output format of a report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// A multi-paragraph, human readable summary.
    Text,

    /// The full [`FlagstatRecord`](super::record::FlagstatRecord) as JSON.
    Json,
}

/// Options passed from the command line into the library.
#[derive(Clone, Debug, Default)]
pub struct ReportConfig {
    /// Whether the record should be emitted as JSON rather than as text.
    pub json: bool,

    /// The number of reads the user expects to be accounted for (usually the
    /// number of reads in the source FASTQ files). `Some(0)` is treated the
    /// same as `None`.
    pub fastq_read_count: Option<u64>,
}

impl ReportConfig {
    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// The expected read count, with zero collapsed into "not supplied".
    pub fn expected_reads(&self) -> Option<u64> {
        self.fastq_read_count.filter(|n| *n > 0)
    }
}
