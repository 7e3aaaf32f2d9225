//! CLI command definitions and handlers

mod analyze;
mod extract;
mod list;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Readcraft - readability analysis for Minecraft Education worlds
///
/// 100% LOCAL - the archive never leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "readcraft")]
#[command(
    version,
    about = "Score the reading difficulty of Minecraft Education world text — seven classic readability formulas over the .lang files inside an .mcworld or .mctemplate archive",
    long_about = "Readcraft unpacks the language resource files from a Minecraft Education \
.mcworld or .mctemplate archive, extracts the natural-language strings from the largest \
one, and scores them with seven classic readability formulas (Flesch Reading Ease, \
Flesch-Kincaid, Gunning Fog, SMOG, Coleman-Liau, ARI, Linsear Write), plus a \
reading-level interpretation for educators.\n\n\
Run without a subcommand to analyze an archive:\n  \
readcraft lesson.mcworld",
    after_help = "\
Examples:
  readcraft lesson.mcworld                         Analyze an archive
  readcraft analyze lesson.mcworld --format json   JSON output for scripting
  readcraft analyze lesson.mcworld --format plain -o report.txt
  readcraft analyze lesson.mcworld --dump-text extracted.txt
  readcraft extract lesson.mcworld                 Print the extracted text only
  readcraft list lesson.mcworld                    List .lang entries by size"
)]
pub struct Cli {
    /// Path to the .mcworld or .mctemplate archive
    #[arg(global = true, value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an archive: extract text, score readability, report
    #[command(after_help = "\
Examples:
  readcraft analyze lesson.mcworld                   Terminal report
  readcraft analyze lesson.mcworld --format json     JSON output for scripting
  readcraft analyze lesson.mcworld --format plain -o report.txt
  readcraft analyze lesson.mcworld --dump-text extracted.txt")]
    Analyze {
        /// Output format: text, json, plain (or txt)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "plain", "txt"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Also write the raw extracted text blob to this file
        #[arg(long)]
        dump_text: Option<PathBuf>,
    },

    /// Extract the readable text from the largest .lang file and print it
    Extract {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the .lang entries in an archive with their sizes
    List,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Analyze {
            ref format,
            ref output,
            ref dump_text,
        }) => {
            let archive = require_archive(&cli)?;
            analyze::run(&archive, format, output.as_deref(), dump_text.as_deref())
        }
        Some(Commands::Extract { ref output }) => {
            let archive = require_archive(&cli)?;
            extract::run(&archive, output.as_deref())
        }
        Some(Commands::List) => {
            let archive = require_archive(&cli)?;
            list::run(&archive)
        }
        None => {
            let archive = require_archive(&cli)?;
            analyze::run(&archive, "text", None, None)
        }
    }
}

/// The archive argument is positional and optional at the clap level so the
/// help output stays clean; every command needs it.
fn require_archive(cli: &Cli) -> Result<PathBuf> {
    let Some(ref archive) = cli.archive else {
        bail!("missing archive path. Usage: readcraft <ARCHIVE>");
    };
    validate_archive_path(archive)?;
    Ok(archive.clone())
}

/// Upfront file checks shared by all commands: extension and existence.
fn validate_archive_path(path: &Path) -> Result<()> {
    if !crate::archive::is_supported_archive(path) {
        bail!(crate::error::ReadcraftError::InvalidArchiveType(
            path.display().to_string()
        ));
    }
    if !path.is_file() {
        bail!("archive not found: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_analyze() {
        let cli = Cli::parse_from(["readcraft", "world.mcworld"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.archive.as_deref(), Some(Path::new("world.mcworld")));
    }

    #[test]
    fn test_analyze_flags() {
        let cli = Cli::parse_from([
            "readcraft",
            "analyze",
            "world.mcworld",
            "--format",
            "json",
            "-o",
            "out.json",
        ]);
        match cli.command {
            Some(Commands::Analyze { format, output, .. }) => {
                assert_eq!(format, "json");
                assert_eq!(output.as_deref(), Some(Path::new("out.json")));
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_extension_rejected() {
        let err = validate_archive_path(Path::new("notes.zip")).expect_err("should reject");
        assert!(err.to_string().contains(".mcworld"));
    }
}
