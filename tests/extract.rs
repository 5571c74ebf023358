use rnapep::prelude::*;

#[test]
fn dna_text_to_report() {
    let seq = "ATG TTT TGA\nATG TTT TTT".to_rna().unwrap();
    let extraction = extract_all(&seq).unwrap();

    assert_eq!(extraction.peptides().len(), 1);
    let peptide = &extraction.peptides()[0];
    assert_eq!(peptide.chain().as_bytes(), b"MF");
    assert_eq!(peptide.source().as_bytes(), b"AUGUUUUGA");
    assert_eq!(extraction.last_successful_end(), 8);
    assert_eq!(extraction.open_start(), Some(9));

    let mut out = Vec::new();
    write_report(&mut out, "gene.txt", &extraction).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Parsed through 44.44% of RNA Sequence\n"));
}

#[test]
fn iterating_matches_extract_all() {
    let seq = normalize("AUGAAAUAGCCCAUGGGGUGAAUGCUGUAA").unwrap();
    let scanner = CodonScanner::new();

    let iterated: Vec<Peptide> = scanner.peptides(&seq).collect::<Result<_, _>>().unwrap();
    let extraction = scanner.extract_all(&seq).unwrap();

    assert_eq!(iterated, extraction.peptides());
    let chains: Vec<String> = iterated.iter().map(|p| p.chain().to_string()).collect();
    assert_eq!(chains, ["MK", "MG", "ML"]);
}

#[test]
fn scan_once_reports_failure_span() {
    let seq = normalize("CCCAUGCCC").unwrap();
    assert_eq!(scan_once(&seq, 0).unwrap(), ScanResult::Failed { start: 3, end: 9 });

    let seq = normalize("GGGGGG").unwrap();
    assert!(scan_once(&seq, 0).unwrap().is_failed());
}

#[test]
fn rejected_text_never_reaches_scanner() {
    assert_eq!(
        normalize("AUGNUAA"),
        Err(NormalizeError::InvalidAlphabet { byte: b'N', position: 3 })
    );
    assert_eq!(normalize("ATGU"), Err(NormalizeError::MixedAlphabet));
}

#[test]
fn files_round_trip_through_reports() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first.txt");
    let second = tmp.path().join("second.dna");
    std::fs::write(&first, "AUGCCCUAA").unwrap();
    std::fs::write(&second, "ATGATGTGA\n").unwrap();

    let config = ReportConfig {
        output_dir: tmp.path().join("Peptides"),
        ..Default::default()
    };
    let results = process_files(&[&first, &second], &config).unwrap();
    let reports: Vec<ProcessedFile> = results.into_iter().collect::<Result<_, _>>().unwrap();

    assert_eq!(reports[0].report, config.output_dir.join("first.pep"));
    assert_eq!(reports[1].report, config.output_dir.join("second.pep"));

    let text = std::fs::read_to_string(&reports[1].report).unwrap();
    assert!(text.contains("Peptide: MM\nSubset of RNA Sequence: AUGAUGUGA\n"));
    assert!(text.ends_with("Parsed through 88.89% of RNA Sequence\n"));

    assert_eq!(clean(&[&config.output_dir]).unwrap(), 1);
    assert!(!config.output_dir.exists());
}
