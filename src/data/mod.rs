//! ## Sequence types, the genetic code, and error handling.
//!
//! ## Alphabets
//!
//! *rnapep* works on uppercase, unambiguous sequences only. Raw text may use
//! either the DNA alphabet (`ACGT`) or the RNA alphabet (`ACGU`), and is
//! normalized into an [`RnaSequence`] before any scanning takes place. IUPAC
//! ambiguity codes, gaps, and lowercase bases are rejected.
//!
//! Amino acids use the standard one-letter codes, and stop codons translate
//! to `*` under [`StdGeneticCode`].
//!
//! ```
//! # use rnapep::prelude::*;
//! let rna = normalize("ATG GCC TGA").unwrap();
//! assert_eq!(rna.as_bytes(), b"AUGGCCUGA");
//! assert_eq!(StdGeneticCode::get(b"GCC"), Some(b'A'));
//! assert!(StdGeneticCode::is_stop_codon(b"UGA"));
//! ```
//!
//! ## Errors in *rnapep*
//!
//! As a library, *rnapep* aims to avoid making assumptions on the style of
//! error handling chosen by users, in particular by not adopting any error
//! handling crate as a dependency. Errors are enums such as
//! [`NormalizeError`] and [`ScanError`], which the user can match on or
//! display. File handling uses [`std::io::Error`], with the path added to the
//! message and the original error kept as its [`Error::source`].
//!
//! [`RnaSequence`]: types::rna::RnaSequence
//! [`NormalizeError`]: err::NormalizeError
//! [`ScanError`]: err::ScanError
//! [`Error::source`]: std::error::Error::source

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for the sequence types, like
/// [`RnaSequence`](self::types::rna::RnaSequence) and
/// [`Peptide`](self::types::peptide::Peptide).
pub mod types;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;

pub use constants::mappings::StdGeneticCode;
pub use types::{amino_acids, peptide, rna};

pub(crate) use constants::{alphas, mappings};
