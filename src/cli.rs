//! Command-line interface for the extractor.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::extractor::extract_file;

/// Extract run text from a word-processing XML document.
#[derive(Parser)]
#[command(name = "doctext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the XML file to extract text from
    pub path: Option<PathBuf>,

    /// Arguments beyond the first path are accepted and ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    pub extra: Vec<OsString>,
}

/// Run the CLI.
///
/// With no path argument this is a no-op: no output, no error. Otherwise
/// the file is extracted and the matched texts are printed newline-joined.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.path {
        Some(path) => extract_command(&path),
        None => Ok(()),
    }
}

/// Execute the extraction and print the result.
fn extract_command(path: &std::path::Path) -> Result<()> {
    let texts = extract_file(path)?;
    if !texts.is_empty() {
        println!("{}", texts.join("\n"));
    }
    Ok(())
}
