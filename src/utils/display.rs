//! Utilities related to displaying things.

use std::fmt;

/// Displays a percentage with two decimal places followed by `%`. Non-finite
/// values are displayed as Rust formats them (`inf`, `NaN`).
pub struct PercentageFormat(pub f64);

impl fmt::Display for PercentageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Displays a percentage that may be missing, such as one printed as `N/A` by
/// `samtools flagstat`.
pub struct OptionalPercentageFormat(pub Option<f64>);

impl fmt::Display for OptionalPercentageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => PercentageFormat(value).fmt(f),
            None => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_format() {
        assert_eq!(PercentageFormat(88.888_888).to_string(), "88.89%");
        assert_eq!(PercentageFormat(40.0).to_string(), "40.00%");
        assert_eq!(PercentageFormat(f64::INFINITY).to_string(), "inf%");
        assert_eq!(PercentageFormat(f64::NAN).to_string(), "NaN%");
    }

    #[test]
    fn test_optional_percentage_format() {
        assert_eq!(OptionalPercentageFormat(Some(90.0)).to_string(), "90.00%");
        assert_eq!(OptionalPercentageFormat(None).to_string(), "N/A");
    }
}
