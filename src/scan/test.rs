use super::*;
use crate::data::{
    err::ScanError,
    types::rna::{MixedBasePolicy, Normalizer, normalize},
};

fn rna(s: &str) -> RnaSequence {
    normalize(s).unwrap()
}

/// Decodes whole codons with the standard genetic code.
fn decode(seq: &RnaSequence) -> Vec<u8> {
    seq.as_codons().0.iter().map(|c| StdGeneticCode::get(c).unwrap()).collect()
}

#[test]
fn scan_finds_first_peptide() {
    let seq = rna("AUGUUUUGAAUGUUUUUU");

    assert_eq!(
        scan_once(&seq, 0).unwrap(),
        ScanResult::Found {
            amino_acids: b"MF".into(),
            start:       0,
            stop:        6,
        }
    );
}

#[test]
fn scan_without_stop_fails() {
    let seq = rna("AUGUUUUGAAUGUUUUUU");
    assert_eq!(scan_once(&seq, 9).unwrap(), ScanResult::Failed { start: 9, end: 18 });

    let seq = rna("AAAAAA");
    let result = scan_once(&seq, 0).unwrap();
    assert!(result.is_failed());
    assert_eq!(result, ScanResult::Failed { start: 0, end: 6 });
}

#[test]
fn scan_stops_at_partial_codon() {
    // The trailing `UU` is skipped over, so the cursor ends past the sequence
    let seq = rna("AUGCCCUU");
    assert_eq!(scan_once(&seq, 0).unwrap(), ScanResult::Failed { start: 0, end: 9 });

    let seq = rna("AU");
    assert_eq!(scan_once(&seq, 0).unwrap(), ScanResult::Failed { start: 0, end: 3 });
}

#[test]
fn scan_past_end() {
    let seq = rna("AUGUAA");
    assert_eq!(scan_once(&seq, 6).unwrap(), ScanResult::Failed { start: 6, end: 6 });
    assert_eq!(scan_once(&seq, 10).unwrap(), ScanResult::Failed { start: 10, end: 10 });
}

#[test]
fn scan_keeps_reading_frame() {
    // `AUG` at offset 1 is never in frame 0
    let seq = rna("AAUGUAAAA");
    assert_eq!(scan_once(&seq, 0).unwrap(), ScanResult::Failed { start: 0, end: 9 });

    assert_eq!(
        scan_once(&seq, 1).unwrap(),
        ScanResult::Found {
            amino_acids: b"M".into(),
            start:       1,
            stop:        4,
        }
    );
}

#[test]
fn stop_before_start_is_ignored() {
    let seq = rna("UAAAUGUGA");
    assert_eq!(
        scan_once(&seq, 0).unwrap(),
        ScanResult::Found {
            amino_acids: b"M".into(),
            start:       3,
            stop:        6,
        }
    );
}

#[test]
fn later_start_codons_are_residues() {
    let seq = rna("AUGAUGGGGUAG");
    assert_eq!(
        scan_once(&seq, 0).unwrap(),
        ScanResult::Found {
            amino_acids: b"MMG".into(),
            start:       0,
            stop:        9,
        }
    );
}

#[test]
fn extract_documented_example() {
    let seq = rna("AUGUUUUGAAUGUUUUUU");
    let extraction = extract_all(&seq).unwrap();

    assert_eq!(extraction.peptides().len(), 1);
    let peptide = &extraction.peptides()[0];
    assert_eq!(peptide.chain().to_string(), "MF");
    assert_eq!(peptide.source().to_string(), "AUGUUUUGA");
    assert_eq!((peptide.start(), peptide.stop(), peptide.end()), (0, 6, 9));

    assert_eq!(extraction.last_successful_end(), 8);
    assert_eq!(extraction.open_start(), Some(9));
    assert_eq!(extraction.sequence_len(), 18);

    let percent = extraction.percent_parsed().unwrap();
    assert!((percent - 800.0 / 18.0).abs() < 1e-9);
}

#[test]
fn extract_without_start() {
    let extraction = extract_all(&rna("AAAAAA")).unwrap();
    assert!(extraction.peptides().is_empty());
    assert_eq!(extraction.last_successful_end(), 0);
    assert_eq!(extraction.open_start(), None);
    assert_eq!(extraction.percent_parsed(), Some(0.0));
}

#[test]
fn extract_empty() {
    let extraction = extract_all(&RnaSequence::new()).unwrap();
    assert!(extraction.peptides().is_empty());
    assert_eq!(extraction.last_successful_end(), 0);
    assert_eq!(extraction.percent_parsed(), None);
}

#[test]
fn extract_consecutive_peptides() {
    let seq = rna("AUGUAAAUGCCCUAG");
    let extraction = extract_all(&seq).unwrap();

    let chains: Vec<_> = extraction.peptides().iter().map(|p| p.chain().to_string()).collect();
    let sources: Vec<_> = extraction.peptides().iter().map(|p| p.source().to_string()).collect();
    assert_eq!(chains, ["M", "MP"]);
    assert_eq!(sources, ["AUGUAA", "AUGCCCUAG"]);

    // The sequence is consumed exactly, so no scan fails
    assert_eq!(extraction.last_successful_end(), 14);
    assert_eq!(extraction.open_start(), None);
}

#[test]
fn extract_resumes_after_stop() {
    // The nested `AUG` at offset 3 belongs to the first peptide
    let seq = rna("AUGAUGUAAGGGAUGUGA");
    let peptides = extract_all(&seq).unwrap().into_peptides();

    assert_eq!(peptides.len(), 2);
    assert_eq!(peptides[0].chain().as_bytes(), b"MM");
    assert_eq!(peptides[1].chain().as_bytes(), b"M");
    assert_eq!(peptides[1].start(), 12);
}

#[test]
fn extract_stops_on_unterminated_frame() {
    let seq = rna("AUGUGAAUGCCCCCCAUGUAA");
    let extraction = extract_all(&seq).unwrap();

    // The frame opened at 6 absorbs the `AUG` at 15 as a residue
    assert_eq!(extraction.peptides().len(), 2);
    assert_eq!(extraction.peptides()[1].source().as_bytes(), b"AUGCCCCCCAUGUAA");

    let seq = rna("AUGUGAAUGCCCCC");
    let extraction = extract_all(&seq).unwrap();
    assert_eq!(extraction.peptides().len(), 1);
    assert_eq!(extraction.last_successful_end(), 5);
    assert_eq!(extraction.open_start(), Some(6));
}

#[test]
fn peptide_iter_is_fused() {
    let seq = rna("AUGUGAAUGCCC");
    let scanner = CodonScanner::new();
    let mut iter = scanner.peptides(&seq);

    assert!(matches!(iter.next(), Some(Ok(_))));
    assert_eq!(iter.last_successful_end(), 5);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
    assert_eq!(iter.open_start(), Some(6));
}

#[test]
fn malformed_codon_is_an_error() {
    let seq = Normalizer::new()
        .with_mixed_policy(MixedBasePolicy::PassThrough)
        .normalize("AUGUUUTTTUAA")
        .unwrap();

    assert_eq!(
        extract_all(&seq),
        Err(ScanError::MalformedCodon {
            codon:  *b"TTT",
            offset: 6,
        })
    );

    let scanner = CodonScanner::new();
    let mut iter = scanner.peptides(&seq);
    assert!(matches!(iter.next(), Some(Err(ScanError::MalformedCodon { offset: 6, .. }))));
    assert!(iter.next().is_none());
}

/// A table without `UUU`, used to check that lookups are never defaulted.
struct NoPhenylalanine;

impl CodonTable for NoPhenylalanine {
    fn translate(&self, codon: &[u8; 3]) -> Option<u8> {
        if codon == b"UUU" { None } else { StdGeneticCode::get(codon) }
    }
}

#[test]
fn injected_table_is_used() {
    let seq = rna("AUGUUCUAAAUGUUUUAA");
    let scanner = CodonScanner::with_table(NoPhenylalanine);

    assert_eq!(
        scanner.extract_all(&seq),
        Err(ScanError::MalformedCodon {
            codon:  *b"UUU",
            offset: 12,
        })
    );

    let borrowed = CodonScanner::with_table(&NoPhenylalanine);
    assert!(borrowed.scan_once(&seq, 0).is_ok());
    assert_eq!(scanner.table().translate(b"UUC"), Some(b'F'));
}

/// A table where `GUG` starts a peptide and `UGG` ends it.
struct AlternateSymbols;

impl CodonTable for AlternateSymbols {
    fn translate(&self, codon: &[u8; 3]) -> Option<u8> {
        match codon {
            b"GUG" => Some(b'^'),
            b"UGG" => Some(b'$'),
            _ => StdGeneticCode::get(codon),
        }
    }

    fn start_symbol(&self) -> u8 {
        b'^'
    }

    fn stop_symbol(&self) -> u8 {
        b'$'
    }
}

#[test]
fn table_symbols_drive_the_scan() {
    let seq = rna("AUGGUGCCCUGG");
    let scanner = CodonScanner::with_table(AlternateSymbols);

    assert_eq!(
        scanner.scan_once(&seq, 0).unwrap(),
        ScanResult::Found {
            amino_acids: b"^P".into(),
            start:       3,
            stop:        9,
        }
    );
}

#[test]
fn peptide_invariants() {
    let seq = rna("CCCAUGAAACCCGGGUUUUAGAUGUGA");
    let extraction = extract_all(&seq).unwrap();
    assert_eq!(extraction.peptides().len(), 2);
    assert_eq!(extraction.peptides()[0].chain().as_bytes(), b"MKPGF");

    for peptide in extraction.peptides() {
        let source = peptide.source();
        assert_eq!(source.len() % 3, 0);
        assert!(source.len() >= 6);
        assert_eq!(peptide.chain().len(), source.len() / 3 - 1);
        assert_eq!(&seq[peptide.start()..peptide.end()], source.as_bytes());

        let mut expected = peptide.chain().as_bytes().to_vec();
        expected.push(b'*');
        assert_eq!(decode(source), expected);
    }
}

#[test]
fn peptide_display() {
    let peptides = extract_all(&rna("AUGUUUUGA")).unwrap().into_peptides();
    assert_eq!(peptides[0].to_string(), "Peptide: MF\nSubset of RNA Sequence: AUGUUUUGA\n");

    let (chain, source) = peptides[0].clone().into_parts();
    assert_eq!(chain.as_bytes(), b"MF");
    assert_eq!(source.as_bytes(), b"AUGUUUUGA");
}

#[cfg(feature = "rand")]
#[test]
fn random_sequences_round_trip() {
    use crate::generate::rand_rna;

    for seed in 0..50 {
        let seq = rand_rna(600, seed);
        let extraction = extract_all(&seq).unwrap();
        let mut previous_end = 0;

        for peptide in extraction.peptides() {
            assert!(peptide.start() >= previous_end);
            assert_eq!(peptide.chain().as_bytes()[0], b'M');

            let mut expected = peptide.chain().as_bytes().to_vec();
            expected.push(b'*');
            assert_eq!(decode(peptide.source()), expected);
            assert!(!peptide.chain().as_bytes().contains(&b'*'));

            previous_end = peptide.end();
        }

        match extraction.peptides().last() {
            Some(last) => assert_eq!(extraction.last_successful_end(), last.end() - 1),
            None => assert_eq!(extraction.last_successful_end(), 0),
        }
        assert!(extraction.percent_parsed().unwrap() <= 100.0);
    }
}
