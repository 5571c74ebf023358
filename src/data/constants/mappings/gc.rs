use super::{NOT_A_BASE, RNA_BASE_INDEX};

macro_rules! fill_std_gc {
    ($( $key: expr => $val: expr ),*) => {{
        let mut table = StdGeneticCode::new_raw_table();
        $( StdGeneticCode::insert(&mut table, $key, $val); )*
        StdGeneticCode::assert_total(&table);
        table
   }}
}

/// The _standard_ genetic code over the RNA alphabet, stored as a 64-entry
/// lookup table indexed by the 2-bit encoding of each base.
///
/// Stop codons are translated to `*`. Codons containing any byte other than
/// uppercase `A`, `C`, `G`, or `U` are not part of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdGeneticCode;

static STD_GENETIC_CODE: [u8; StdGeneticCode::TABLE_SIZE] = fill_std_gc!(
    b"AAA"=>b'K', b"AAC"=>b'N', b"AAG"=>b'K', b"AAU"=>b'N', b"ACA"=>b'T', b"ACC"=>b'T', b"ACG"=>b'T', b"ACU"=>b'T',
    b"AGA"=>b'R', b"AGC"=>b'S', b"AGG"=>b'R', b"AGU"=>b'S', b"AUA"=>b'I', b"AUC"=>b'I', b"AUG"=>b'M', b"AUU"=>b'I',
    b"CAA"=>b'Q', b"CAC"=>b'H', b"CAG"=>b'Q', b"CAU"=>b'H', b"CCA"=>b'P', b"CCC"=>b'P', b"CCG"=>b'P', b"CCU"=>b'P',
    b"CGA"=>b'R', b"CGC"=>b'R', b"CGG"=>b'R', b"CGU"=>b'R', b"CUA"=>b'L', b"CUC"=>b'L', b"CUG"=>b'L', b"CUU"=>b'L',
    b"GAA"=>b'E', b"GAC"=>b'D', b"GAG"=>b'E', b"GAU"=>b'D', b"GCA"=>b'A', b"GCC"=>b'A', b"GCG"=>b'A', b"GCU"=>b'A',
    b"GGA"=>b'G', b"GGC"=>b'G', b"GGG"=>b'G', b"GGU"=>b'G', b"GUA"=>b'V', b"GUC"=>b'V', b"GUG"=>b'V', b"GUU"=>b'V',
    b"UAA"=>b'*', b"UAC"=>b'Y', b"UAG"=>b'*', b"UAU"=>b'Y', b"UCA"=>b'S', b"UCC"=>b'S', b"UCG"=>b'S', b"UCU"=>b'S',
    b"UGA"=>b'*', b"UGC"=>b'C', b"UGG"=>b'W', b"UGU"=>b'C', b"UUA"=>b'L', b"UUC"=>b'F', b"UUG"=>b'L', b"UUU"=>b'F'
);

impl StdGeneticCode {
    /// The number of codons over a four letter alphabet.
    pub const TABLE_SIZE: usize = 64;
    /// The amino acid encoded by the start codon `AUG`.
    pub const START: u8 = b'M';
    /// The symbol used for stop codons.
    pub const STOP: u8 = b'*';

    const EMPTY: u8 = 0;

    /// Retrieves the amino acid corresponding to a codon, or return `None` if
    /// the codon is not made of three uppercase RNA bases.
    ///
    /// ## Panics
    ///
    /// Panics if codon has fewer than three elements. Any additional elements
    /// past the first three are ignored.
    #[inline]
    #[must_use]
    pub fn get(codon: &[u8]) -> Option<u8> {
        Self::get_index(codon).map(|index| STD_GENETIC_CODE[index])
    }

    /// Determine whether the provided codon is a stop codon. Any additional
    /// elements past the first three are ignored and partial codons are
    /// considered `false`.
    #[inline]
    #[must_use]
    pub fn is_stop_codon(c: &[u8]) -> bool {
        c.len() > 2 && matches!(&[c[0], c[1], c[2]], b"UAA" | b"UAG" | b"UGA")
    }

    /// Determine whether the provided codon is the start codon `AUG`. Partial
    /// codons are considered `false`.
    #[inline]
    #[must_use]
    pub fn is_start_codon(c: &[u8]) -> bool {
        c.len() > 2 && &c[..3] == b"AUG"
    }

    #[must_use]
    const fn new_raw_table() -> [u8; Self::TABLE_SIZE] {
        [Self::EMPTY; Self::TABLE_SIZE]
    }

    #[inline]
    const fn insert(table: &mut [u8; Self::TABLE_SIZE], codon: &[u8], aa: u8) {
        let Some(index) = Self::get_index(codon) else {
            panic!("Only uppercase RNA codons belong in the genetic code.");
        };

        assert!(table[index] == Self::EMPTY, "A codon was inserted twice.");
        table[index] = aa;
    }

    /// Every slot must be filled, otherwise a valid RNA codon would silently
    /// translate to the empty byte.
    const fn assert_total(table: &[u8; Self::TABLE_SIZE]) {
        let mut i = 0;
        while i < Self::TABLE_SIZE {
            assert!(table[i] != Self::EMPTY, "The genetic code is missing a codon.");
            i += 1;
        }
    }

    #[must_use]
    #[inline]
    const fn get_index(codon: &[u8]) -> Option<usize> {
        let (a, b, c) = (
            RNA_BASE_INDEX[codon[0] as usize],
            RNA_BASE_INDEX[codon[1] as usize],
            RNA_BASE_INDEX[codon[2] as usize],
        );

        if a == NOT_A_BASE || b == NOT_A_BASE || c == NOT_A_BASE {
            None
        } else {
            Some(((a as usize) << 4) | ((b as usize) << 2) | c as usize)
        }
    }
}
