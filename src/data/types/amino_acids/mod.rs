/// [`AminoAcids`] is a transparent, new-type wrapper around [`Vec<u8>`] that
/// holds one-letter amino acid codes.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct AminoAcids(pub(crate) Vec<u8>);

impl AminoAcids {
    /// Creates a new [`AminoAcids`] empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        AminoAcids(Vec::new())
    }

    /// Creates an empty [`AminoAcids`] with room for `capacity` residues.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AminoAcids(Vec::with_capacity(capacity))
    }

    /// Consumes a [`Vec<u8>`] and return [`AminoAcids`] without checking for
    /// validity.
    #[inline]
    #[must_use]
    pub fn from_vec_unchecked(v: Vec<u8>) -> Self {
        AminoAcids(v)
    }

    /// Consumes [`AminoAcids`] and returns a [`Vec<u8>`].
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Gets the amino acids as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The number of residues.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, aa: u8) {
        self.0.push(aa);
    }
}

impl AsRef<[u8]> for AminoAcids {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<&[u8; N]> for AminoAcids {
    fn from(bytes: &[u8; N]) -> Self {
        AminoAcids(bytes.to_vec())
    }
}

impl FromIterator<u8> for AminoAcids {
    fn from_iter<T: IntoIterator<Item = u8>>(iterable: T) -> Self {
        AminoAcids(iterable.into_iter().collect())
    }
}

impl std::fmt::Display for AminoAcids {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::fmt::Debug for AminoAcids {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "AminoAcids({})", String::from_utf8_lossy(&self.0))
    }
}
