//! Renders a [`FinalizedFlagstat`] as either a text report or JSON.

use std::fmt::Write;

use super::config::OutputFormat;
use super::config::ReportConfig;
use super::metrics::FinalizedFlagstat;
use super::metrics::ReadCountReconciliation;
use crate::errors::FlagstatError;
use crate::utils::display::OptionalPercentageFormat;
use crate::utils::display::PercentageFormat;

/// Builds the human readable report. Only QC-passed counts are reported,
/// except for secondary alignments and the read count check, which use both.
pub fn text_report(flagstat: &FinalizedFlagstat) -> String {
    let FinalizedFlagstat { record, metrics } = flagstat;
    let mut report = String::from("Report\n");

    // Writing to a `String` cannot fail.
    match metrics.reconciliation {
        ReadCountReconciliation::NotSupplied => {}
        ReadCountReconciliation::AllAccountedFor => report.push_str("all reads accounted for. "),
        ReadCountReconciliation::Mismatch { supplied, observed } => {
            let _ = write!(
                report,
                "Read count mismatch between user provided fastq read count and flagstat: \
                 {} != {}. ",
                supplied, observed
            );
        }
    }

    let _ = writeln!(
        report,
        "QC fail fraction: {}. Only passing used for counts in this report.",
        PercentageFormat(metrics.qc_fail_percent)
    );

    let _ = writeln!(
        report,
        "{} reads ({}) are primarily mapped of which {} ({}) are aligned and spaced as \
         expected. {} additional secondary alignments have been recorded.",
        OptionalPercentageFormat(record.primary_mapped_percent),
        record.primary_mapped.pass(),
        PercentageFormat(metrics.properly_paired_given_primary_mapped_percent),
        record.properly_paired.pass(),
        record.secondary.total()
    );

    let _ = writeln!(
        report,
        "{} unmapped include {} singletons",
        metrics.unmapped_reads,
        record.singletons.pass()
    );

    let _ = writeln!(
        report,
        "Structural variation evidence in {} reads where mates mapped to a different chr \
         of which {} ({}) are high quality mappings. {} Supplementary mappings could also \
         indicate SV",
        record.mate_diff_chr.pass(),
        PercentageFormat(metrics.high_quality_diff_chr_percent),
        record.mate_diff_chr_mapq5.pass(),
        record.supplementary.pass()
    );

    report
}

/// Serializes the record (without the derived metrics) as pretty printed
/// JSON.
pub fn json_report(flagstat: &FinalizedFlagstat) -> Result<String, FlagstatError> {
    Ok(serde_json::to_string_pretty(&flagstat.record)?)
}

/// Renders the report in the format selected by `config`.
///
/// For text output the report is also stored in the record's `output`
/// field. For JSON output that field is left empty, since the JSON document
/// itself is the output.
pub fn render(
    flagstat: &mut FinalizedFlagstat,
    config: &ReportConfig,
) -> Result<String, FlagstatError> {
    match config.format() {
        OutputFormat::Text => {
            let report = text_report(flagstat);
            flagstat.record.output = report.clone();
            Ok(report)
        }
        OutputFormat::Json => {
            flagstat.record.output.clear();
            json_report(flagstat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flagstat::classify::scan;
    use crate::flagstat::metrics::finalize;
    use crate::flagstat::record::Counts;
    use crate::flagstat::record::FlagstatRecord;

    const EXAMPLE: &str = "\
1000 + 0 in total (QC-passed reads + QC-failed reads)
950 + 0 primary
900 + 0 mapped (90.00% : N/A)
900 + 0 primary mapped (90.00% : N/A)
950 + 0 paired in sequencing
800 + 0 properly paired (80.00% : N/A)
10 + 0 singletons (1.00% : N/A)
5 + 0 with mate mapped to a different chr
2 + 0 with mate mapped to a different chr (mapQ>=5)
";

    fn finalized(config: &ReportConfig) -> FinalizedFlagstat {
        let outcome = scan(EXAMPLE.as_bytes()).unwrap();
        finalize(outcome.record, config)
    }

    #[test]
    fn test_text_report() {
        let config = ReportConfig::default();
        let mut flagstat = finalized(&config);
        let report = render(&mut flagstat, &config).unwrap();

        let expected = "Report\n\
            QC fail fraction: 0.00%. Only passing used for counts in this report.\n\
            90.00% reads (900) are primarily mapped of which 88.89% (800) are aligned and \
            spaced as expected. 0 additional secondary alignments have been recorded.\n\
            50 unmapped include 10 singletons\n\
            Structural variation evidence in 5 reads where mates mapped to a different chr \
            of which 40.00% (2) are high quality mappings. 0 Supplementary mappings could \
            also indicate SV\n";

        assert_eq!(report, expected);
        assert_eq!(flagstat.record.output, expected);
    }

    #[test]
    fn test_text_report_all_reads_accounted_for() {
        let config = ReportConfig {
            json: false,
            fastq_read_count: Some(950),
        };
        let report = render(&mut finalized(&config), &config).unwrap();
        assert!(report.starts_with("Report\nall reads accounted for. QC fail fraction"));
    }

    #[test]
    fn test_text_report_read_count_mismatch() {
        let config = ReportConfig {
            json: false,
            fastq_read_count: Some(1200),
        };
        let report = render(&mut finalized(&config), &config).unwrap();
        assert!(report.contains(
            "Read count mismatch between user provided fastq read count and flagstat: \
             1200 != 950."
        ));
        assert!(!report.contains("all reads accounted for"));
    }

    #[test]
    fn test_text_report_surfaces_non_finite_values() {
        let record = FlagstatRecord {
            properly_paired: Counts(10, 0),
            ..Default::default()
        };
        let flagstat = finalize(record, &ReportConfig::default());
        let report = text_report(&flagstat);

        assert!(report.contains("QC fail fraction: NaN%."));
        assert!(report.contains("N/A reads (0) are primarily mapped of which inf% (10)"));
        assert!(report.contains("of which NaN% (0) are high quality mappings"));
    }

    #[test]
    fn test_json_report_round_trips_record() {
        let config = ReportConfig {
            json: true,
            fastq_read_count: Some(950),
        };
        let mut flagstat = finalized(&config);
        let json = render(&mut flagstat, &config).unwrap();

        let parsed: FlagstatRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, flagstat.record);
        assert_eq!(parsed.output, "");
        assert_eq!(parsed.input, EXAMPLE);
        assert_eq!(parsed.fastq_read_count, 950);
        assert_eq!(parsed.total, Counts(1000, 0));
        assert_eq!(parsed.primary_mapped, Counts(900, 0));
        assert_eq!(parsed.primary_mapped_percent, Some(90.0));
    }

    #[test]
    fn test_json_report_excludes_derived_metrics() {
        let config = ReportConfig {
            json: true,
            fastq_read_count: None,
        };
        let json = render(&mut finalized(&config), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 23);
        assert!(!object.contains_key("pppmp"));
        assert!(!object.contains_key("unmapped_reads"));
        assert_eq!(object["mate_diff_chr_mapq5"], serde_json::json!([2, 0]));

        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys[0], "input");
        assert_eq!(keys[1], "output");
        assert_eq!(keys[2], "fastq_read_count");
    }
}
