use crate::data::types::rna::{MixedBasePolicy, Normalizer};
use std::path::PathBuf;

/// The directory reports are written to unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "Peptides";
/// The file extension used for reports unless configured otherwise.
pub const DEFAULT_EXTENSION: &str = "pep";

/// Settings for turning input files into peptide reports.
///
/// ```
/// # use rnapep::prelude::*;
/// let config = ReportConfig {
///     extension: "txt".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.output_dir.to_str(), Some("Peptides"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory the reports are written to. It is created when missing.
    pub output_dir: PathBuf,
    /// Extension of each report, without the leading dot.
    pub extension:  String,
    /// Handling of input mixing `T` and `U`.
    pub mixed:      MixedBasePolicy,
    /// Also print each peptide listing to stdout.
    pub print:      bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension:  DEFAULT_EXTENSION.to_string(),
            mixed:      MixedBasePolicy::default(),
            print:      false,
        }
    }
}

impl ReportConfig {
    /// The [`Normalizer`] matching this configuration.
    #[inline]
    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new().with_mixed_policy(self.mixed)
    }
}
