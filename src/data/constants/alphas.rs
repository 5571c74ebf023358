#![allow(dead_code)]
/// Canonical RNA bases.
pub(crate) const RNA_BASES: &[u8; 4] = b"ACGU";
/// Canonical DNA bases.
pub(crate) const DNA_BASES: &[u8; 4] = b"ACGT";
/// Every base accepted by the normalizer before any recoding takes place.
pub(crate) const RNA_OR_DNA_BASES: &[u8; 5] = b"ACGTU";

/// The one-letter codes of the 20 standard amino acids.
pub(crate) const AMINO_ACIDS_UC: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";
/// The standard amino acids plus the stop symbol `*`.
pub(crate) const AMINO_ACIDS_WITH_STOP_UC: &[u8; 21] = b"ACDEFGHIKLMNPQRSTVWY*";
