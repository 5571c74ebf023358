use crate::data::alphas::*;

pub(crate) mod gc;


pub use gc::*;

//
// For if: u8 -> bool
//

/// A boolean mapping of the uppercase bases accepted before normalization.
pub(crate) const IS_RNA_OR_DNA_UC: [bool; 256] = make_is_alpha_mapping(RNA_OR_DNA_BASES);

/// A boolean mapping of the uppercase canonical RNA bases.
pub(crate) const IS_RNA_UC: [bool; 256] = make_is_alpha_mapping(RNA_BASES);

/// A boolean mapping of the ASCII whitespace bytes removed by the normalizer.
pub(crate) const IS_ASCII_WHITESPACE: [bool; 256] = make_is_alpha_mapping(b" \t\n\r\x0C");

//
// For indexing: u8 -> u8 else sentinel
//

/// Sentinel returned by [`RNA_BASE_INDEX`] for any byte that is not an
/// uppercase RNA base.
pub(crate) const NOT_A_BASE: u8 = u8::MAX;

/// Maps `A`, `C`, `G`, and `U` to the 2-bit indices 0 through 3. Every other
/// byte maps to [`NOT_A_BASE`].
#[rustfmt::skip]
pub(crate) const RNA_BASE_INDEX: [u8; 256] = make_mapping_with_default(
    b"ACGU",
    &[0, 1, 2, 3],
    NOT_A_BASE,
);

/// Utility function for building *is alpha*-like maps
const fn make_is_alpha_mapping<const N: usize>(alpha: &[u8; N]) -> [bool; 256] {
    let mut mapping = [false; 256];
    let mut i = 0;

    while i < N {
        mapping[alpha[i] as usize] = true;
        i += 1;
    }
    mapping
}

/// Utility function for making a mapping with a default value.
const fn make_mapping_with_default<const N: usize>(from_byte: &[u8; N], dest_byte: &[u8; N], all_others: u8) -> [u8; 256] {
    let mut mapping = [all_others; 256];
    let mut i = 0;

    while i < N {
        mapping[from_byte[i] as usize] = dest_byte[i];
        i += 1;
    }
    mapping
}
