use std::{
    error::Error,
    fmt::Display,
    path::{Path, PathBuf},
};

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

#[derive(Debug)]
struct PathContextError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl Display for PathContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for PathContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Wraps an IO error with a description and the path it concerns. The
/// original error remains available through [`Error::source`].
pub(crate) fn with_path_context(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
    std::io::Error::other(PathContextError {
        description: format!("{description}: '{path}'", path = path.display()),
        source:      Box::new(err),
    })
}

/// Errors raised while turning raw text into an
/// [`RnaSequence`](crate::data::types::rna::RnaSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// A byte outside of `ACGTU` was found. The position is counted after
    /// whitespace has been removed.
    InvalidAlphabet { byte: u8, position: usize },
    /// The input contained both `T` and `U`.
    MixedAlphabet,
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NormalizeError::InvalidAlphabet { byte, position } => {
                write!(f, "Invalid character {:?} found at position {position}", char::from(*byte))
            }
            NormalizeError::MixedAlphabet => write!(f, "The sequence mixes DNA (T) and RNA (U) bases"),
        }
    }
}

impl Error for NormalizeError {}
impl GetCode for NormalizeError {}

/// Errors raised by the codon scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A full codon had no entry in the genetic code. After normalization this
    /// indicates a mismatch between the normalizer and the codon table in use.
    MalformedCodon { codon: [u8; 3], offset: usize },
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScanError::MalformedCodon { codon, offset } => write!(
                f,
                "The codon {codon} at offset {offset} is not in the genetic code",
                codon = String::from_utf8_lossy(codon)
            ),
        }
    }
}

impl Error for ScanError {}
impl GetCode for ScanError {}

/// Errors raised while processing one input file into a report. The input
/// path is always included in the message.
#[derive(Debug)]
pub enum ReportError {
    Io { path: PathBuf, source: std::io::Error },
    Normalize { path: PathBuf, source: NormalizeError },
    Scan { path: PathBuf, source: ScanError },
}

impl ReportError {
    /// The input or output path the error is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ReportError::Io { path, .. } | ReportError::Normalize { path, .. } | ReportError::Scan { path, .. } => path,
        }
    }
}

impl Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ReportError::Io { path, source } => write!(f, "Could not access {}: {source}", path.display()),
            ReportError::Normalize { path, source } => write!(f, "Invalid sequence in {}: {source}", path.display()),
            ReportError::Scan { path, source } => write!(f, "Could not translate {}: {source}", path.display()),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::Normalize { source, .. } => Some(source),
            ReportError::Scan { source, .. } => Some(source),
        }
    }
}

impl GetCode for ReportError {
    fn get_code(&self) -> i32 {
        match self {
            ReportError::Io { source, .. } => source.get_code(),
            _ => 1,
        }
    }
}
