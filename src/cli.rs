//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ocrclean - clean OCR text and compare documents using LLMs
#[derive(Parser)]
#[command(
    name = "ocrclean",
    about = "Clean OCR text and compare documents using LLMs",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Clean an OCR text file
    Clean {
        /// Path to the input OCR text file
        input_file: PathBuf,

        /// Path to save the cleaned text file
        output_file: PathBuf,

        /// LLM to use (e.g. gemini, claude, mistral); defaults to the configured model
        #[arg(long)]
        model: Option<String>,
    },

    /// Perform a quick, high-level comparison of two files
    CompareQuick {
        /// Path to the first file (e.g. cleaned text)
        file_a: PathBuf,

        /// Path to the second file (e.g. reference text)
        file_b: PathBuf,

        /// LLM to use; defaults to the configured model
        #[arg(long)]
        model: Option<String>,
    },

    /// Perform a detailed, line-by-line comparison of two files
    CompareDetailed {
        /// Path to the first file
        file_a: PathBuf,

        /// Path to the second file
        file_b: PathBuf,

        /// LLM to use; defaults to the configured model
        #[arg(long)]
        model: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_clean() {
        let cli = Cli::parse_from(["ocrclean", "clean", "scan.txt", "out.txt"]);
        if let Command::Clean {
            input_file,
            output_file,
            model,
        } = cli.command
        {
            assert_eq!(input_file, PathBuf::from("scan.txt"));
            assert_eq!(output_file, PathBuf::from("out.txt"));
            assert!(model.is_none());
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn test_cli_parse_clean_with_model() {
        let cli = Cli::parse_from(["ocrclean", "clean", "scan.txt", "out.txt", "--model", "mistral"]);
        if let Command::Clean { model, .. } = cli.command {
            assert_eq!(model.as_deref(), Some("mistral"));
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn test_cli_parse_compare_quick() {
        let cli = Cli::parse_from(["ocrclean", "compare-quick", "a.txt", "b.txt"]);
        assert!(matches!(cli.command, Command::CompareQuick { .. }));
    }

    #[test]
    fn test_cli_parse_compare_detailed() {
        let cli = Cli::parse_from(["ocrclean", "compare-detailed", "a.txt", "b.txt"]);
        if let Command::CompareDetailed { file_a, file_b, model } = cli.command {
            assert_eq!(file_a, PathBuf::from("a.txt"));
            assert_eq!(file_b, PathBuf::from("b.txt"));
            assert!(model.is_none());
        } else {
            panic!("Expected CompareDetailed command");
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ocrclean"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["ocrclean", "frobnicate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_missing_args() {
        assert!(Cli::try_parse_from(["ocrclean", "clean", "scan.txt"]).is_err());
        assert!(Cli::try_parse_from(["ocrclean", "compare-quick", "a.txt"]).is_err());
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["ocrclean", "-c", "/path/to/config.yml", "compare-quick", "a.txt", "b.txt"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
