use crate::data::{alphas::RNA_BASES, types::rna::RnaSequence};

#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates a seeded, random [`RnaSequence`] over `ACGU`.
#[must_use]
pub fn rand_rna(length: usize, seed: u64) -> RnaSequence {
    RnaSequence(rand_sequence(RNA_BASES, length, seed))
}

#[cfg(test)]
mod test {
    use super::{rand_rna, rand_sequence};

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"AUGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, u) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, u), &b| match b {
            b'A' => (a + 1, c, g, u),
            b'C' => (a, c + 1, g, u),
            b'G' => (a, c, g + 1, u),
            b'U' => (a, c, g, u + 1),
            _ => (a, c, g, u),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(u > 0);
    }

    #[test]
    fn rand_rna_is_canonical_and_seeded() {
        let s = rand_rna(500, 3);
        assert!(s.is_canonical());
        assert_eq!(s, rand_rna(500, 3));
        assert_ne!(s, rand_rna(500, 4));
    }
}
