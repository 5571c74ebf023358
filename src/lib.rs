#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Sequence types, the genetic code, and error handling.
pub mod data;
/// Writing peptide reports and processing input files.
pub mod report;
/// Codon scanning and peptide extraction.
pub mod scan;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;
/// Sequence search and/or replacement.
pub(crate) mod search;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{
        StdGeneticCode,
        err::{GetCode, NormalizeError, OrFail, ReportError, ScanError},
        types::{
            amino_acids::AminoAcids,
            peptide::Peptide,
            rna::{MixedBasePolicy, Normalizer, RnaSequence, ToRna, normalize},
        },
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_rna;
    pub use crate::report::{ProcessedFile, ReportConfig, clean, print_peptides, process_file, process_files, write_report};
    pub use crate::scan::{CodonScanner, CodonTable, Extraction, PeptideIter, ScanResult, extract_all, scan_once};
}
