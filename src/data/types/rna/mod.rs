use crate::data::mappings::IS_RNA_UC;

mod sanitize;
mod std_traits;


pub use sanitize::*;

/// [`RnaSequence`] is a transparent, new-type wrapper around [`Vec<u8>`] that
/// holds a normalized RNA sequence.
///
/// Values are produced by [`normalize`] (or a configured [`Normalizer`]) and
/// are immutable afterwards. With the default [`MixedBasePolicy::Reject`]
/// every byte is one of `A`, `C`, `G`, or `U`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct RnaSequence(pub(crate) Vec<u8>);

impl RnaSequence {
    /// Creates a new, empty [`RnaSequence`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        RnaSequence(Vec::new())
    }

    /// Consumes a [`Vec<u8>`] and returns an [`RnaSequence`] without
    /// normalizing or validating it.
    #[inline]
    #[must_use]
    pub fn from_vec_unchecked(v: Vec<u8>) -> Self {
        RnaSequence(v)
    }

    /// Consumes the [`RnaSequence`] and returns the underlying [`Vec<u8>`].
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// The length of the stored sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtains the bases as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Create an iterator over the bases as `u8`.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Gets the base (or range of bases) at the zero-based index, returning an
    /// `Option`.
    #[inline]
    pub fn get<I>(&self, index: I) -> Option<&I::Output>
    where
        I: std::slice::SliceIndex<[u8]>, {
        self.0.get(index)
    }

    /// Gets the codon beginning at the zero-based `offset`, returning `None`
    /// when fewer than three bases remain.
    #[inline]
    #[must_use]
    pub fn codon_at(&self, offset: usize) -> Option<&[u8; 3]> {
        self.0.get(offset..offset.checked_add(3)?)?.try_into().ok()
    }

    /// Gets the bases grouped into codons as a slice of arrays, starting with
    /// the first base. Any trailing bases are included in the second tuple
    /// entry.
    #[inline]
    #[must_use]
    pub fn as_codons(&self) -> (&[[u8; 3]], &[u8]) {
        self.0.as_chunks::<3>()
    }

    /// Returns `true` if every base is an uppercase `A`, `C`, `G`, or `U`.
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0.iter().all(|&b| IS_RNA_UC[b as usize])
    }
}
