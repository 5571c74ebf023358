use super::{ReportConfig, create_dir, report_path, write_report};
use crate::{
    data::err::ReportError,
    scan::{CodonScanner, Extraction},
};
use rayon::prelude::*;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The result of turning one input file into a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    /// The input that was read.
    pub input:      PathBuf,
    /// The report that was written.
    pub report:     PathBuf,
    /// The peptides found and the parse coverage.
    pub extraction: Extraction,
}

/// Reads `input`, extracts its peptides, and writes the report into
/// `config.output_dir`, which must already exist.
///
/// ## Errors
///
/// Fails if the input cannot be read or normalized, if a malformed codon is
/// found, or if the report cannot be written. Nothing is written for inputs
/// that fail before extraction completes.
pub fn process_file(input: &Path, config: &ReportConfig) -> Result<ProcessedFile, ReportError> {
    let raw = std::fs::read(input).map_err(io_err(input))?;
    let seq = config.normalizer().normalize(&raw).map_err(|source| ReportError::Normalize {
        path: input.to_path_buf(),
        source,
    })?;

    let extraction = CodonScanner::new().extract_all(&seq).map_err(|source| ReportError::Scan {
        path: input.to_path_buf(),
        source,
    })?;

    if let Some(start) = extraction.open_start() {
        log::debug!(
            "{}: the reading frame opened at offset {start} has no stop codon",
            input.display()
        );
    }

    let report = report_path(input, &config.output_dir, &config.extension);
    let file = File::create(&report).map_err(io_err(&report))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &input.to_string_lossy(), &extraction).map_err(io_err(&report))?;
    writer.flush().map_err(io_err(&report))?;

    log::info!(
        "{}: {} peptide(s) written to {}",
        input.display(),
        extraction.peptides().len(),
        report.display()
    );

    Ok(ProcessedFile {
        input: input.to_path_buf(),
        report,
        extraction,
    })
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ReportError {
    let path = path.to_path_buf();
    move |source| ReportError::Io { path, source }
}

/// Creates the output directory and processes every input in parallel. The
/// results are returned in the order of `inputs`, and a failing input does
/// not affect the others.
///
/// ## Errors
///
/// The outer error is returned only when the output directory cannot be
/// created.
pub fn process_files<P>(inputs: &[P], config: &ReportConfig) -> std::io::Result<Vec<Result<ProcessedFile, ReportError>>>
where
    P: AsRef<Path> + Sync, {
    create_dir(&config.output_dir)?;

    Ok(inputs
        .par_iter()
        .map(|input| process_file(input.as_ref(), config))
        .collect())
}
