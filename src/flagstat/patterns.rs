//! The table of line shapes emitted by `samtools flagstat`.
//!
//! Each line of a flagstat report looks like
//!
//! `<QC-passed> + <QC-failed> <description>[ (<percentage>% : <percentage>%)]`
//!
//! Several descriptions are textual suffixes of one another (`duplicates` and
//! `primary duplicates`, `mapped` and `primary mapped`, and the two
//! `with mate mapped to a different chr` lines). Every shape below is anchored
//! at both ends, so at most one of them can match a given line. The table is
//! also ordered from most to least specific so that a first-match lookup
//! stays correct if a shape is ever loosened.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// The leading `<pass> + <fail> ` shared by every flagstat line.
const COUNTS: &str = r"^(\d+) \+ (\d+) ";

/// The trailing `(<pct>% : <pct>%)` group. The QC-passed percentage is
/// captured; `samtools` prints `N/A` when the denominator is zero.
const PERCENTAGES: &str = r"(?: \((?:(\d+(?:\.\d+)?)%|N/A)[^)]*\))?$";

/// A category of statistic reported by `samtools flagstat`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    /// `in total (QC-passed reads + QC-failed reads)`
    Total,
    /// `primary`
    Primary,
    /// `secondary`
    Secondary,
    /// `supplementary`
    Supplementary,
    /// `duplicates`
    Duplicates,
    /// `primary duplicates`
    PrimaryDuplicates,
    /// `mapped (..)`
    Mapped,
    /// `primary mapped (..)`
    PrimaryMapped,
    /// `paired in sequencing`
    PairedInSequencing,
    /// `read1`
    Read1,
    /// `read2`
    Read2,
    /// `properly paired (..)`
    ProperlyPaired,
    /// `with itself and mate mapped`
    WithMateMapped,
    /// `singletons (..)`
    Singletons,
    /// `with mate mapped to a different chr`
    MateDiffChr,
    /// `with mate mapped to a different chr (mapQ>=5)`
    MateDiffChrMapQ5,
}

impl Category {
    /// All categories in the order `samtools flagstat` prints them.
    pub const ALL: [Category; 16] = [
        Category::Total,
        Category::Primary,
        Category::Secondary,
        Category::Supplementary,
        Category::Duplicates,
        Category::PrimaryDuplicates,
        Category::Mapped,
        Category::PrimaryMapped,
        Category::PairedInSequencing,
        Category::Read1,
        Category::Read2,
        Category::ProperlyPaired,
        Category::WithMateMapped,
        Category::Singletons,
        Category::MateDiffChr,
        Category::MateDiffChrMapQ5,
    ];

    /// The snake case name of the category. These match the keys used in the
    /// JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Total => "total",
            Category::Primary => "primary",
            Category::Secondary => "secondary",
            Category::Supplementary => "supplementary",
            Category::Duplicates => "duplicates",
            Category::PrimaryDuplicates => "primary_duplicates",
            Category::Mapped => "mapped",
            Category::PrimaryMapped => "primary_mapped",
            Category::PairedInSequencing => "paired_in_seq",
            Category::Read1 => "read1",
            Category::Read2 => "read2",
            Category::ProperlyPaired => "properly_paired",
            Category::WithMateMapped => "with_mate_mapped",
            Category::Singletons => "singletons",
            Category::MateDiffChr => "mate_diff_chr",
            Category::MateDiffChrMapQ5 => "mate_diff_chr_mapq5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many numeric groups a shape captures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureScheme {
    /// The QC-passed and QC-failed counts only.
    Counts,

    /// The two counts followed by the (possibly `N/A`) QC-passed percentage.
    CountsWithPercentage,
}

/// A single entry in the pattern table.
#[derive(Debug)]
pub struct CategoryPattern {
    /// The category a matching line is recorded under.
    pub category: Category,

    /// The numeric groups captured by `regex`.
    pub scheme: CaptureScheme,

    /// The anchored shape of the line.
    pub regex: Regex,
}

impl CategoryPattern {
    fn new(category: Category, description: &str, scheme: CaptureScheme) -> Self {
        let pattern = match scheme {
            CaptureScheme::Counts => format!("{}{}$", COUNTS, description),
            CaptureScheme::CountsWithPercentage => {
                format!("{}{}{}", COUNTS, description, PERCENTAGES)
            }
        };

        // The shapes are fixed at compile time, so a failure here is a
        // programming error rather than a runtime condition.
        let regex = Regex::new(&pattern).expect("flagstat pattern to compile");

        CategoryPattern {
            category,
            scheme,
            regex,
        }
    }
}

/// Builds the ordered pattern table. Prefer [`PATTERNS`], which builds the
/// table once.
pub fn build_pattern_table() -> Vec<CategoryPattern> {
    use CaptureScheme::*;

    vec![
        CategoryPattern::new(
            Category::Total,
            r"in total(?: \([^)]*\))?",
            Counts,
        ),
        CategoryPattern::new(Category::PrimaryDuplicates, "primary duplicates", Counts),
        CategoryPattern::new(
            Category::PrimaryMapped,
            "primary mapped",
            CountsWithPercentage,
        ),
        CategoryPattern::new(Category::Primary, "primary", Counts),
        CategoryPattern::new(Category::Secondary, "secondary", Counts),
        CategoryPattern::new(Category::Supplementary, "supplementary", Counts),
        CategoryPattern::new(Category::Duplicates, "duplicates", Counts),
        CategoryPattern::new(Category::Mapped, "mapped", CountsWithPercentage),
        CategoryPattern::new(
            Category::PairedInSequencing,
            "paired in sequencing",
            Counts,
        ),
        CategoryPattern::new(Category::Read1, "read1", Counts),
        CategoryPattern::new(Category::Read2, "read2", Counts),
        CategoryPattern::new(
            Category::ProperlyPaired,
            "properly paired",
            CountsWithPercentage,
        ),
        CategoryPattern::new(
            Category::WithMateMapped,
            "with itself and mate mapped",
            Counts,
        ),
        CategoryPattern::new(Category::Singletons, "singletons", CountsWithPercentage),
        CategoryPattern::new(
            Category::MateDiffChrMapQ5,
            r"with mate mapped to a different chr \(mapQ>=5\)",
            Counts,
        ),
        CategoryPattern::new(
            Category::MateDiffChr,
            "with mate mapped to a different chr",
            Counts,
        ),
    ]
}

lazy_static! {
    /// The compiled, ordered pattern table.
    pub static ref PATTERNS: Vec<CategoryPattern> = build_pattern_table();
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// One line per category, as printed by `samtools flagstat`.
    pub const CANONICAL: [(&str, Category); 16] = [
        (
            "1000 + 3 in total (QC-passed reads + QC-failed reads)",
            Category::Total,
        ),
        ("950 + 3 primary", Category::Primary),
        ("40 + 0 secondary", Category::Secondary),
        ("10 + 0 supplementary", Category::Supplementary),
        ("20 + 0 duplicates", Category::Duplicates),
        ("18 + 0 primary duplicates", Category::PrimaryDuplicates),
        ("900 + 0 mapped (90.00% : 0.00%)", Category::Mapped),
        (
            "890 + 0 primary mapped (93.68% : 0.00%)",
            Category::PrimaryMapped,
        ),
        ("950 + 3 paired in sequencing", Category::PairedInSequencing),
        ("475 + 2 read1", Category::Read1),
        ("475 + 1 read2", Category::Read2),
        (
            "800 + 0 properly paired (84.21% : 0.00%)",
            Category::ProperlyPaired,
        ),
        ("870 + 0 with itself and mate mapped", Category::WithMateMapped),
        ("10 + 0 singletons (1.05% : 0.00%)", Category::Singletons),
        (
            "5 + 0 with mate mapped to a different chr",
            Category::MateDiffChr,
        ),
        (
            "2 + 0 with mate mapped to a different chr (mapQ>=5)",
            Category::MateDiffChrMapQ5,
        ),
    ];

    #[test]
    fn test_table_covers_every_category_once() {
        let table = build_pattern_table();
        assert_eq!(table.len(), Category::ALL.len());

        let categories: HashSet<Category> = table.iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_patterns_are_mutually_exclusive() {
        for (line, expected) in CANONICAL {
            let hits: Vec<Category> = PATTERNS
                .iter()
                .filter(|p| p.regex.is_match(line))
                .map(|p| p.category)
                .collect();
            assert_eq!(hits, vec![expected], "line: {}", line);
        }
    }

    #[test]
    fn test_specific_shapes_come_first() {
        let position = |category: Category| {
            PATTERNS
                .iter()
                .position(|p| p.category == category)
                .unwrap()
        };

        assert!(position(Category::PrimaryDuplicates) < position(Category::Duplicates));
        assert!(position(Category::PrimaryMapped) < position(Category::Mapped));
        assert!(position(Category::PrimaryDuplicates) < position(Category::Primary));
        assert!(position(Category::MateDiffChrMapQ5) < position(Category::MateDiffChr));
    }

    #[test]
    fn test_percentage_schemes() {
        let with_percentage: HashSet<Category> = PATTERNS
            .iter()
            .filter(|p| p.scheme == CaptureScheme::CountsWithPercentage)
            .map(|p| p.category)
            .collect();

        assert_eq!(
            with_percentage,
            HashSet::from([
                Category::Mapped,
                Category::PrimaryMapped,
                Category::ProperlyPaired,
                Category::Singletons,
            ])
        );
    }

    #[test]
    fn test_not_applicable_percentage_still_matches() {
        let mapped = PATTERNS
            .iter()
            .find(|p| p.category == Category::Mapped)
            .unwrap();
        let captures = mapped.regex.captures("0 + 0 mapped (N/A : N/A)").unwrap();
        assert!(captures.get(3).is_none());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::PairedInSequencing.name(), "paired_in_seq");
        assert_eq!(Category::MateDiffChrMapQ5.to_string(), "mate_diff_chr_mapq5");
    }
}
