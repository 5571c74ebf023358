//! # rnapep - translate RNA/DNA text files into peptides
//!
//! ```bash
//! # Write Peptides/seq1.pep and Peptides/seq2.pep
//! rnapep -f seq1.txt seq2.txt
//!
//! # Custom output directory and extension, with a listing on stdout
//! rnapep -f seq1.txt -o out -e txt -p
//!
//! # Remove previous output
//! rnapep -c Peptides
//! ```

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use rnapep::prelude::*;
use simple_logger::SimpleLogger;
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

fn main() {
    let matches = Command::new("rnapep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate RNA or DNA sequences into peptides")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .value_name("FILE")
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Sequence files to translate"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(rnapep::report::DEFAULT_OUTPUT_DIR)
                .help("Directory receiving the reports"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .value_name("EXT")
                .default_value(rnapep::report::DEFAULT_EXTENSION)
                .help("Extension of the report files"),
        )
        .arg(
            Arg::new("clean")
                .short('c')
                .long("clean")
                .value_name("DIR")
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("files")
                .help("Remove the given directories and exit"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Also print the peptides and their total to stdout"),
        )
        .arg(
            Arg::new("allow-mixed")
                .long("allow-mixed")
                .action(ArgAction::SetTrue)
                .help("Pass input containing both T and U through unchanged"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
        .arg_required_else_help(true)
        .get_matches();

    let level = if matches.get_flag("quiet") {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .unwrap_or_else(|e| eprintln!("Logging is unavailable: {e}"));

    if let Some(dirs) = matches.get_many::<PathBuf>("clean") {
        let dirs: Vec<&PathBuf> = dirs.collect();
        clean(&dirs).unwrap_or_die("Could not clean the output directories.");
        return;
    }

    let inputs: Vec<&PathBuf> = matches.get_many::<PathBuf>("files").into_iter().flatten().collect();
    if inputs.is_empty() {
        log::warn!("No input files were given.");
        return;
    }

    let mut config = ReportConfig {
        print: matches.get_flag("print"),
        ..Default::default()
    };
    if let Some(dir) = matches.get_one::<PathBuf>("output") {
        config.output_dir.clone_from(dir);
    }
    if let Some(ext) = matches.get_one::<String>("extension") {
        config.extension.clone_from(ext);
    }
    if matches.get_flag("allow-mixed") {
        config.mixed = MixedBasePolicy::PassThrough;
    }

    let results = process_files(&inputs, &config).unwrap_or_die("Could not create the output directory.");

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for result in results {
        match result {
            Ok(processed) if config.print => {
                print_peptides(&mut writer, processed.extraction.peptides())
                    .unwrap_or_die("Could not write to stdout.");
            }
            Ok(_) => {}
            Err(e) => log::warn!("Invalid input skipped. {e}"),
        }
    }
    writer.flush().unwrap_or_die("Could not write to stdout.");
}
