use super::{amino_acids::AminoAcids, rna::RnaSequence};

/// A translated open reading frame: the amino acid chain from a start codon up
/// to, but excluding, the first in-frame stop codon, together with the RNA
/// that encodes it.
///
/// Peptides are only created by the
/// [`CodonScanner`](crate::scan::CodonScanner). The `source` spans the start
/// codon through the stop codon inclusive, so its length is a multiple of 3
/// and the chain holds exactly one residue fewer than there are codons.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Peptide {
    chain:  AminoAcids,
    source: RnaSequence,
    start:  usize,
}

impl Peptide {
    #[inline]
    pub(crate) fn new(chain: AminoAcids, source: &[u8], start: usize) -> Self {
        debug_assert!(source.len() >= 6 && source.len() % 3 == 0);
        debug_assert_eq!(chain.len(), source.len() / 3 - 1);

        Peptide {
            chain,
            source: RnaSequence(source.to_vec()),
            start,
        }
    }

    /// The amino acid chain, beginning with `M` and without the stop symbol.
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &AminoAcids {
        &self.chain
    }

    /// The subsequence from the start codon through the stop codon.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &RnaSequence {
        &self.source
    }

    /// Offset of the start codon in the scanned sequence.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset of the first base of the stop codon in the scanned sequence.
    #[inline]
    #[must_use]
    pub fn stop(&self) -> usize {
        self.start + self.source.len() - 3
    }

    /// Offset one past the stop codon in the scanned sequence.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.source.len()
    }

    /// Consumes the peptide, returning the chain and source subsequence.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (AminoAcids, RnaSequence) {
        (self.chain, self.source)
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Peptide: {}", self.chain)?;
        writeln!(f, "Subset of RNA Sequence: {}", self.source)
    }
}
