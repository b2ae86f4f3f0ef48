//! Command-line interface
//!
//! The presentation layer: collects file paths, page-range strings, and
//! passwords from arguments, checks nothing beyond what `clap` enforces,
//! and forwards to the manager layer. Reports are printed human-readable
//! by default or as JSON with `--json`.

use crate::error::Result;
use crate::manager::PdfManager;
use crate::pages::{parse_page_ranges, parse_range_groups};
use crate::session::Session;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Merge, split, extract, and password-protect PDF files.
#[derive(Parser, Debug)]
#[command(name = "pdfman")]
#[command(version)]
#[command(about = "PDF toolbox - merge, split, extract, protect", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Print the operation report as JSON instead of a message
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge two or more PDFs into a single document, in argument order
    Merge {
        /// Input PDF files (at least two, merged in this order)
        #[arg(required = true, num_args = 2.., value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Split a PDF into one output file per page-range token
    ///
    /// Each comma-separated token of --pages becomes its own document:
    /// --pages "1-3,5" writes split_0.pdf (pages 1-3) and split_1.pdf
    /// (page 5).
    Split {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory for the split_<n>.pdf output files
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Page ranges, 1-based (e.g. "1-3, 5-10, 11")
        #[arg(short, long, value_name = "RANGE")]
        pages: String,
    },

    /// Extract pages from a PDF into a single new document
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Page ranges, 1-based (e.g. "1-3, 5-10, 11")
        #[arg(short, long, value_name = "RANGE")]
        pages: String,
    },

    /// Extract the text of every page into one text file
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output text file (defaults to the input path with .txt)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract embedded raster images as numbered JPEG files
    Images {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory for the image_<n>.jpg output files
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// Copy a PDF into a password-protected sibling (<stem>_encrypted.pdf)
    Protect {
        /// Input PDF file (left untouched)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Password for the new document
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },

    /// Remove a PDF password, writing a decrypted sibling (<stem>_decrypted.pdf)
    Unprotect {
        /// Input PDF file (left untouched)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Current password of the document
        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },
}

/// Run the parsed command to completion.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge { inputs, output } => {
            let manager = manager_for(inputs);
            let report = manager.merge(&output)?;
            emit(cli.json, &report, || {
                format!(
                    "Merged {} files into {} ({} pages)",
                    report.input_count,
                    report.output.display(),
                    report.page_count
                )
            })
        }
        Command::Split {
            input,
            output_dir,
            pages,
        } => {
            let groups = parse_range_groups(&pages)?;
            let manager = manager_for(vec![input]);
            let report = manager.split(&output_dir, &groups)?;
            emit(cli.json, &report, || {
                format!(
                    "Split into {} files in {}",
                    report.outputs.len(),
                    output_dir.display()
                )
            })
        }
        Command::Extract {
            input,
            output,
            pages,
        } => {
            let indices = parse_page_ranges(&pages)?;
            let manager = manager_for(vec![input]);
            let report = manager.extract_pages(&output, &indices)?;
            emit(cli.json, &report, || {
                format!(
                    "Extracted {} pages into {}",
                    report.page_count,
                    report.output.display()
                )
            })
        }
        Command::Text { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("txt"));
            let manager = manager_for(vec![input]);
            let report = manager.extract_text(&output)?;
            emit(cli.json, &report, || {
                format!(
                    "Extracted {} characters into {}",
                    report.chars,
                    report.output.display()
                )
            })
        }
        Command::Images { input, output_dir } => {
            let manager = manager_for(vec![input]);
            let report = manager.extract_images(&output_dir)?;
            emit(cli.json, &report, || {
                format!(
                    "Extracted {} images into {}",
                    report.outputs.len(),
                    output_dir.display()
                )
            })
        }
        Command::Protect { input, password } => {
            let manager = manager_for(vec![input]);
            let report = manager.protect(&password)?;
            emit(cli.json, &report, || {
                format!("Protected copy written to {}", report.output.display())
            })
        }
        Command::Unprotect { input, password } => {
            let manager = manager_for(vec![input]);
            let report = manager.unprotect(&password)?;
            emit(cli.json, &report, || {
                format!("Decrypted copy written to {}", report.output.display())
            })
        }
    }
}

fn manager_for(inputs: Vec<PathBuf>) -> PdfManager {
    let mut session = Session::new();
    session.select(inputs);
    PdfManager::with_session(session)
}

fn emit<R, F>(json: bool, report: &R, message: F) -> Result<()>
where
    R: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", message());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merge() {
        let cli = Cli::parse_from(["pdfman", "merge", "a.pdf", "b.pdf", "-o", "out.pdf"]);
        match cli.command {
            Command::Merge { inputs, output } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(output, PathBuf::from("out.pdf"));
            }
            other => panic!("expected merge, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_merge_rejects_single_input() {
        let result = Cli::try_parse_from(["pdfman", "merge", "a.pdf", "-o", "out.pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_split_with_pages() {
        let cli = Cli::parse_from(["pdfman", "split", "a.pdf", "-p", "1-3,5", "-d", "/tmp"]);
        match cli.command {
            Command::Split {
                input,
                output_dir,
                pages,
            } => {
                assert_eq!(input, PathBuf::from("a.pdf"));
                assert_eq!(output_dir, PathBuf::from("/tmp"));
                assert_eq!(pages, "1-3,5");
            }
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_text_default_output() {
        let cli = Cli::parse_from(["pdfman", "text", "a.pdf"]);
        match cli.command {
            Command::Text { input, output } => {
                assert_eq!(input, PathBuf::from("a.pdf"));
                assert!(output.is_none());
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::parse_from(["pdfman", "protect", "a.pdf", "-p", "s3cret", "--json"]);
        assert!(cli.json);
    }
}
