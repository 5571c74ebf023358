use super::RnaSequence;
use crate::{
    data::{
        err::NormalizeError,
        mappings::{IS_ASCII_WHITESPACE, IS_RNA_OR_DNA_UC},
    },
    search::replace_all_bytes,
};

/// How the [`Normalizer`] treats input that contains both `T` and `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixedBasePolicy {
    /// Fail with [`NormalizeError::MixedAlphabet`].
    #[default]
    Reject,
    /// Return the input unchanged, keeping its `T` bases. Codons containing
    /// `T` are later reported as malformed by the scanner.
    PassThrough,
}

/// Validates and canonicalizes raw text into an [`RnaSequence`].
///
/// All ASCII whitespace is removed and only uppercase `ACGTU` are accepted.
/// Input without any `U` is treated as DNA and has every `T` replaced with
/// `U`. Input that already contains `U` is kept as is, subject to the
/// [`MixedBasePolicy`] when `T` is present as well.
///
/// ```
/// # use rnapep::prelude::*;
/// let rna = Normalizer::new().normalize("ATG TTT\nTGA").unwrap();
/// assert_eq!(rna.as_bytes(), b"AUGUUUUGA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    mixed: MixedBasePolicy,
}

impl Normalizer {
    /// Creates a [`Normalizer`] that rejects mixed `T`/`U` input.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy used for input containing both `T` and `U`.
    #[inline]
    #[must_use]
    pub fn with_mixed_policy(mut self, mixed: MixedBasePolicy) -> Self {
        self.mixed = mixed;
        self
    }

    /// The policy used for input containing both `T` and `U`.
    #[inline]
    #[must_use]
    pub fn mixed_policy(&self) -> MixedBasePolicy {
        self.mixed
    }

    /// Normalizes `raw` into an [`RnaSequence`].
    ///
    /// ## Errors
    ///
    /// Returns [`NormalizeError::InvalidAlphabet`] for any byte other than
    /// whitespace or uppercase `ACGTU`, and [`NormalizeError::MixedAlphabet`]
    /// when both `T` and `U` occur under [`MixedBasePolicy::Reject`].
    pub fn normalize(&self, raw: impl AsRef<[u8]>) -> Result<RnaSequence, NormalizeError> {
        let raw = raw.as_ref();
        let mut bases = Vec::with_capacity(raw.len());
        let (mut has_t, mut has_u) = (false, false);

        for &byte in raw {
            if IS_ASCII_WHITESPACE[byte as usize] {
                continue;
            }

            if !IS_RNA_OR_DNA_UC[byte as usize] {
                return Err(NormalizeError::InvalidAlphabet {
                    byte,
                    position: bases.len(),
                });
            }

            has_t |= byte == b'T';
            has_u |= byte == b'U';
            bases.push(byte);
        }

        match (has_t, has_u) {
            (true, false) => replace_all_bytes(&mut bases, b'T', b'U'),
            (true, true) if self.mixed == MixedBasePolicy::Reject => return Err(NormalizeError::MixedAlphabet),
            _ => {}
        }

        Ok(RnaSequence(bases))
    }
}

/// Normalizes `raw` into an [`RnaSequence`] using the default [`Normalizer`].
///
/// ## Errors
///
/// See [`Normalizer::normalize`].
#[inline]
pub fn normalize(raw: impl AsRef<[u8]>) -> Result<RnaSequence, NormalizeError> {
    Normalizer::new().normalize(raw)
}

/// Provides normalization into an [`RnaSequence`] for raw text types.
pub trait ToRna: AsRef<[u8]> {
    /// Normalizes with the default [`Normalizer`].
    ///
    /// ## Errors
    ///
    /// See [`Normalizer::normalize`].
    #[inline]
    fn to_rna(&self) -> Result<RnaSequence, NormalizeError> {
        normalize(self)
    }
}

impl ToRna for String {}
impl ToRna for str {}
impl ToRna for Vec<u8> {}
impl ToRna for [u8] {}
