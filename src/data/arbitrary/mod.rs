//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for *rnapep*'s sequence types, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::data::{alphas::RNA_OR_DNA_BASES, types::rna::RnaSequence};
use arbitrary::{Arbitrary, Result, Unstructured};

/// Generates any bytes at all, so the result may violate the normalized
/// alphabet. Useful for fuzzing the scanner itself.
impl<'a> Arbitrary<'a> for RnaSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(RnaSequence(Vec::<u8>::arbitrary(u)?))
    }
}

/// A wrapper around [`RnaSequence`] such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates bases in `ACGU`.
#[derive(Debug, Clone)]
pub struct RnaAcgu(pub RnaSequence);

impl std::ops::Deref for RnaAcgu {
    type Target = RnaSequence;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> Arbitrary<'a> for RnaAcgu {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGU";
        Ok(RnaAcgu(RnaSequence(
            u.arbitrary_iter::<u8>()?
                .flatten()
                .map(|b| ALPHA[b as usize % ALPHA.len()])
                .collect(),
        )))
    }
}

/// Raw text made of `ACGTU` and whitespace, the input accepted by the
/// normalizer (mixed `T`/`U` included).
#[derive(Debug, Clone)]
pub struct RawNucleotideText(pub Vec<u8>);

impl<'a> Arbitrary<'a> for RawNucleotideText {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(RawNucleotideText(
            u.arbitrary_iter::<u8>()?
                .flatten()
                .map(|b| match b % 8 {
                    0..5 => RNA_OR_DNA_BASES[b as usize % RNA_OR_DNA_BASES.len()],
                    5 => b' ',
                    _ => b'\n',
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn generated_text_always_normalizes() {
        let data: Vec<u8> = (0..=255u8).cycle().take(2_000).collect();
        let mut u = Unstructured::new(&data);

        let raw = RawNucleotideText::arbitrary(&mut u).unwrap();
        let pass = Normalizer::new().with_mixed_policy(MixedBasePolicy::PassThrough);
        assert!(pass.normalize(&raw.0).is_ok());

        let rna = RnaAcgu::arbitrary(&mut Unstructured::new(&data)).unwrap();
        assert!(rna.is_canonical());
        assert!(extract_all(&rna).is_ok());
    }
}
