//! ## Codon scanning and peptide extraction
//!
//! A scan reads an [`RnaSequence`] codon by codon in a fixed reading frame,
//! starting at some offset. It seeks the first start codon (`AUG`), collects
//! amino acids from there, and completes at the first in-frame stop codon.
//! [`CodonScanner::extract_all`] repeats this from offset 0, resuming right
//! after each stop codon, until a scan fails to find a stop.
//!
//! ```
//! # use rnapep::prelude::*;
//! let seq = normalize("AUGUUUUGAAUGUUUUUU").unwrap();
//! let extraction = extract_all(&seq).unwrap();
//!
//! assert_eq!(extraction.peptides().len(), 1);
//! assert_eq!(extraction.peptides()[0].chain().as_bytes(), b"MF");
//! assert_eq!(extraction.peptides()[0].source().as_bytes(), b"AUGUUUUGA");
//! assert_eq!(extraction.last_successful_end(), 8);
//! ```

use crate::data::{
    err::ScanError,
    mappings::StdGeneticCode,
    types::{amino_acids::AminoAcids, peptide::Peptide, rna::RnaSequence},
};

#[cfg(test)]
mod test;

/// A lookup from codons to one-letter amino acid codes, injected into the
/// [`CodonScanner`].
pub trait CodonTable {
    /// Translates a full codon, returning `None` if the table has no entry for
    /// it.
    fn translate(&self, codon: &[u8; 3]) -> Option<u8>;

    /// The amino acid marking the start of a peptide.
    #[inline]
    fn start_symbol(&self) -> u8 {
        StdGeneticCode::START
    }

    /// The symbol marking the end of a peptide.
    #[inline]
    fn stop_symbol(&self) -> u8 {
        StdGeneticCode::STOP
    }
}

impl CodonTable for StdGeneticCode {
    #[inline]
    fn translate(&self, codon: &[u8; 3]) -> Option<u8> {
        StdGeneticCode::get(codon)
    }
}

impl<T: CodonTable + ?Sized> CodonTable for &T {
    #[inline]
    fn translate(&self, codon: &[u8; 3]) -> Option<u8> {
        (**self).translate(codon)
    }

    #[inline]
    fn start_symbol(&self) -> u8 {
        (**self).start_symbol()
    }

    #[inline]
    fn stop_symbol(&self) -> u8 {
        (**self).stop_symbol()
    }
}

/// The state of a single scan pass. A pass that leaves the sequence before
/// reaching [`ScanState::Done`] becomes [`ScanResult::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingStart,
    InChain { start: usize },
    Done { start: usize, stop: usize },
}

impl ScanState {
    /// Consumes one translated codon found at `offset`.
    #[inline]
    fn advance(self, aa: u8, offset: usize, start_symbol: u8, stop_symbol: u8, chain: &mut AminoAcids) -> Self {
        match self {
            ScanState::SeekingStart if aa == start_symbol => {
                chain.push(aa);
                ScanState::InChain { start: offset }
            }
            ScanState::SeekingStart => ScanState::SeekingStart,
            ScanState::InChain { start } if aa == stop_symbol => ScanState::Done { start, stop: offset },
            ScanState::InChain { start } => {
                chain.push(aa);
                ScanState::InChain { start }
            }
            ScanState::Done { .. } => self,
        }
    }
}

/// The outcome of [`CodonScanner::scan_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// A start codon and an in-frame stop codon were found. `amino_acids`
    /// begins with the start residue and excludes the stop.
    Found {
        amino_acids: AminoAcids,
        start:       usize,
        stop:        usize,
    },
    /// The scan ran off the end of the sequence (or into a trailing partial
    /// codon) without finding a stop. `start` is the start codon's offset if
    /// one was found and the scan's starting offset otherwise. `end` is where
    /// the cursor stopped and may lie past the end of the sequence.
    Failed { start: usize, end: usize },
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ScanResult::Failed { .. })
    }
}

/// Finds peptides in an [`RnaSequence`] using an injected [`CodonTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CodonScanner<G = StdGeneticCode> {
    table: G,
}

impl CodonScanner<StdGeneticCode> {
    /// Creates a scanner using the standard genetic code.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(StdGeneticCode)
    }
}

impl<G: CodonTable> CodonScanner<G> {
    /// Creates a scanner using the provided codon table.
    #[inline]
    #[must_use]
    pub fn with_table(table: G) -> Self {
        CodonScanner { table }
    }

    /// The codon table in use.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &G {
        &self.table
    }

    /// Performs a single forward pass beginning at offset `from`, see
    /// [`ScanResult`].
    ///
    /// The reading frame is fixed by `from`: the cursor always advances by
    /// one full codon.
    ///
    /// ## Errors
    ///
    /// Returns [`ScanError::MalformedCodon`] if a full codon is not in the
    /// codon table.
    pub fn scan_once(&self, seq: &RnaSequence, from: usize) -> Result<ScanResult, ScanError> {
        let (start_symbol, stop_symbol) = (self.table.start_symbol(), self.table.stop_symbol());
        let mut chain = AminoAcids::new();
        let mut state = ScanState::SeekingStart;
        let mut b = from;

        while b < seq.len() && !matches!(state, ScanState::Done { .. }) {
            if let Some(codon) = seq.codon_at(b) {
                let aa = self
                    .table
                    .translate(codon)
                    .ok_or(ScanError::MalformedCodon { codon: *codon, offset: b })?;
                state = state.advance(aa, b, start_symbol, stop_symbol, &mut chain);
            }
            b += 3;
        }

        Ok(match state {
            ScanState::Done { start, stop } => ScanResult::Found {
                amino_acids: chain,
                start,
                stop,
            },
            ScanState::SeekingStart => ScanResult::Failed { start: from, end: b },
            ScanState::InChain { start } => ScanResult::Failed { start, end: b },
        })
    }

    /// Creates an iterator over every peptide in `seq`, see
    /// [`extract_all`](CodonScanner::extract_all).
    #[inline]
    #[must_use]
    pub fn peptides<'a>(&'a self, seq: &'a RnaSequence) -> PeptideIter<'a, G> {
        PeptideIter {
            scanner: self,
            seq,
            offset: 0,
            last_successful_end: 0,
            open_start: None,
            finished: false,
        }
    }

    /// Extracts every peptide from `seq`.
    ///
    /// Scanning begins at offset 0. After each peptide, the next scan resumes
    /// immediately after its stop codon. Extraction ends at the first scan
    /// that finds no stop codon, or when the end of the sequence is reached.
    ///
    /// ## Errors
    ///
    /// Returns [`ScanError::MalformedCodon`] if a full codon is not in the
    /// codon table.
    pub fn extract_all(&self, seq: &RnaSequence) -> Result<Extraction, ScanError> {
        let mut iter = self.peptides(seq);
        let peptides = iter.by_ref().collect::<Result<Vec<_>, _>>()?;

        Ok(Extraction {
            peptides,
            last_successful_end: iter.last_successful_end,
            open_start: iter.open_start,
            sequence_len: seq.len(),
        })
    }
}

/// Iterator over the peptides of an [`RnaSequence`], created by
/// [`CodonScanner::peptides`].
///
/// Yields `Err` at most once, after which it is exhausted.
#[derive(Debug)]
pub struct PeptideIter<'a, G> {
    scanner:             &'a CodonScanner<G>,
    seq:                 &'a RnaSequence,
    offset:              usize,
    last_successful_end: usize,
    open_start:          Option<usize>,
    finished:            bool,
}

impl<G> PeptideIter<'_, G> {
    /// The offset of the final base of the last peptide's stop codon, or 0 if
    /// no peptide has been found yet.
    #[inline]
    #[must_use]
    pub fn last_successful_end(&self) -> usize {
        self.last_successful_end
    }

    /// The offset of a start codon whose reading frame ran off the sequence
    /// without a stop, once the iterator has reached it.
    #[inline]
    #[must_use]
    pub fn open_start(&self) -> Option<usize> {
        self.open_start
    }
}

impl<G: CodonTable> Iterator for PeptideIter<'_, G> {
    type Item = Result<Peptide, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.offset >= self.seq.len() {
            self.finished = true;
            return None;
        }

        let result = match self.scanner.scan_once(self.seq, self.offset) {
            Ok(result) => result,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        match result {
            ScanResult::Found {
                amino_acids,
                start,
                stop,
            } => {
                let end = stop + 3;
                self.last_successful_end = stop + 2;
                self.offset = end;
                Some(Ok(Peptide::new(amino_acids, &self.seq[start..end], start)))
            }
            ScanResult::Failed { start, .. } => {
                // Without a start codon, `start` is just where the scan began
                let table = &self.scanner.table;
                if self.seq.codon_at(start).and_then(|c| table.translate(c)) == Some(table.start_symbol()) {
                    self.open_start = Some(start);
                }
                self.finished = true;
                None
            }
        }
    }
}

impl<G: CodonTable> std::iter::FusedIterator for PeptideIter<'_, G> {}

/// The peptides extracted from one sequence and how far parsing succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    peptides:            Vec<Peptide>,
    last_successful_end: usize,
    open_start:          Option<usize>,
    sequence_len:        usize,
}

impl Extraction {
    /// The peptides in the order they occur.
    #[inline]
    #[must_use]
    pub fn peptides(&self) -> &[Peptide] {
        &self.peptides
    }

    /// Consumes the extraction, returning the peptides.
    #[inline]
    #[must_use]
    pub fn into_peptides(self) -> Vec<Peptide> {
        self.peptides
    }

    /// The offset of the final base of the last peptide's stop codon, or 0 if
    /// no peptide was extracted.
    #[inline]
    #[must_use]
    pub fn last_successful_end(&self) -> usize {
        self.last_successful_end
    }

    /// The offset of a start codon that was never followed by an in-frame
    /// stop codon, if extraction ended on one.
    #[inline]
    #[must_use]
    pub fn open_start(&self) -> Option<usize> {
        self.open_start
    }

    /// The length of the scanned sequence.
    #[inline]
    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// The share of the sequence, as a percentage, covered up to
    /// [`last_successful_end`](Extraction::last_successful_end). Returns
    /// `None` for an empty sequence.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_parsed(&self) -> Option<f64> {
        if self.sequence_len == 0 {
            None
        } else {
            Some(self.last_successful_end as f64 / self.sequence_len as f64 * 100.0)
        }
    }
}

/// Performs a single scan with the standard genetic code, see
/// [`CodonScanner::scan_once`].
///
/// ## Errors
///
/// Returns [`ScanError::MalformedCodon`] if a full codon is not made of RNA
/// bases.
#[inline]
pub fn scan_once(seq: &RnaSequence, from: usize) -> Result<ScanResult, ScanError> {
    CodonScanner::new().scan_once(seq, from)
}

/// Extracts every peptide with the standard genetic code, see
/// [`CodonScanner::extract_all`].
///
/// ## Errors
///
/// Returns [`ScanError::MalformedCodon`] if a full codon is not made of RNA
/// bases.
#[inline]
pub fn extract_all(seq: &RnaSequence) -> Result<Extraction, ScanError> {
    CodonScanner::new().extract_all(seq)
}
