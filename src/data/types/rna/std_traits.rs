use super::*;

// Conversion
impl AsRef<[u8]> for RnaSequence {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<RnaSequence> for Vec<u8> {
    #[inline]
    fn from(seq: RnaSequence) -> Self {
        seq.0
    }
}

impl<'a> IntoIterator for &'a RnaSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<&str> for RnaSequence {
    type Error = crate::data::err::NormalizeError;

    #[inline]
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

impl TryFrom<&[u8]> for RnaSequence {
    type Error = crate::data::err::NormalizeError;

    #[inline]
    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

impl std::str::FromStr for RnaSequence {
    type Err = crate::data::err::NormalizeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

// Indexing
impl std::ops::Index<usize> for RnaSequence {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::Index<std::ops::Range<usize>> for RnaSequence {
    type Output = [u8];

    #[inline]
    fn index(&self, index: std::ops::Range<usize>) -> &[u8] {
        &self.0[index]
    }
}

// Display
impl std::fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::fmt::Debug for RnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "RnaSequence({})", String::from_utf8_lossy(&self.0))
    }
}
