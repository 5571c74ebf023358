//! ## Peptide reports
//!
//! Writers for the per-input report file and the stdout listing, and the
//! directory helpers used by the `rnapep` binary.

use crate::{
    data::{err::with_path_context, types::peptide::Peptide},
    scan::Extraction,
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

mod config;
mod pipeline;


pub use config::*;
pub use pipeline::*;

/// Writes the report for one input: a header naming the source, each
/// peptide's chain and RNA subset, and how much of the sequence was parsed.
///
/// An empty sequence is reported as parsed through `0.00%`.
///
/// ## Errors
///
/// Propagates any error from `writer`.
pub fn write_report<W: Write>(writer: &mut W, source_name: &str, extraction: &Extraction) -> io::Result<()> {
    writeln!(writer, "Original File: {source_name}\n")?;
    for peptide in extraction.peptides() {
        write!(writer, "{peptide}")?;
    }
    writeln!(
        writer,
        "\nParsed through {:.2}% of RNA Sequence",
        extraction.percent_parsed().unwrap_or(0.0)
    )
}

/// Writes a listing of `peptides` followed by their total.
///
/// ## Errors
///
/// Propagates any error from `writer`.
pub fn print_peptides<W: Write>(writer: &mut W, peptides: &[Peptide]) -> io::Result<()> {
    for peptide in peptides {
        writeln!(writer, "Peptide: {}", peptide.chain())?;
        writeln!(writer, "Sequence: {}", peptide.source())?;
        writeln!(writer)?;
    }

    let mut buffer = itoa::Buffer::new();
    writer.write_all(b"Total Peptides: ")?;
    writer.write_all(buffer.format(peptides.len()).as_bytes())?;
    writer.write_all(b"\n")
}

/// The path of the report for `input`: its file stem plus `extension`, inside
/// `output_dir`.
#[must_use]
pub fn report_path(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

/// Creates `dir` and any missing parents. Existing directories are left
/// untouched.
///
/// ## Errors
///
/// The path is added to any IO error, keeping the original as its source.
pub fn create_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| with_path_context("could not create directory", dir, e))
}

/// Recursively removes each directory in `dirs` that exists, returning how
/// many were removed.
///
/// ## Errors
///
/// The path is added to any IO error. Directories after the failing one are
/// not removed.
pub fn clean<P: AsRef<Path>>(dirs: &[P]) -> io::Result<usize> {
    let mut removed = 0;

    for dir in dirs.iter().map(AsRef::as_ref) {
        if !dir.exists() {
            log::debug!("Skipping {}, it does not exist", dir.display());
            continue;
        }

        std::fs::remove_dir_all(dir).map_err(|e| with_path_context("could not remove directory", dir, e))?;
        log::info!("Removed {}", dir.display());
        removed += 1;
    }

    Ok(removed)
}
