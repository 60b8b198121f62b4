//! Command-line interface definitions for picdupe.
//!
//! This module defines the CLI arguments using the clap derive API: an
//! opt-in delete flag, the directory to scan, and the required similarity
//! percentage.
//!
//! # Example
//!
//! ```bash
//! # Report groups of similar images under ~/Pictures at 90% similarity
//! picdupe ~/Pictures 90
//!
//! # Also delete all but one representative per group
//! picdupe -d ~/Pictures 90
//!
//! # Verbose mode for debugging
//! picdupe -v ~/Pictures 90
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Find and remove perceptually similar images.
///
/// picdupe fingerprints every image under a directory, groups images whose
/// fingerprints fall within the similarity threshold, and with `--delete`
/// keeps only one representative per group.
#[derive(Debug, Parser)]
#[command(name = "picdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Delete all but one representative per group of similar images
    ///
    /// Warning: Deletion is permanent. Without this flag picdupe only
    /// reports the groups it found.
    #[arg(short = 'd', long = "delete")]
    pub delete: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory to scan recursively for images
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Required similarity as a percentage in [0, 100]
    ///
    /// 100 accepts only identical fingerprints; 0 accepts any pair.
    #[arg(value_name = "SIMILARITY", value_parser = parse_percentage)]
    pub similarity: f64,
}

/// Parse a similarity percentage in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use picdupe::cli::parse_percentage;
///
/// assert_eq!(parse_percentage("90").unwrap(), 90.0);
/// assert_eq!(parse_percentage("87.5").unwrap(), 87.5);
/// assert!(parse_percentage("101").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the string is not a number or falls outside the
/// accepted range.
pub fn parse_percentage(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid percentage: '{s}'"))?;

    if !(0.0..=100.0).contains(&value) {
        return Err("percentage must be between 0 and 100".to_string());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage_valid() {
        assert_eq!(parse_percentage("0").unwrap(), 0.0);
        assert_eq!(parse_percentage("100").unwrap(), 100.0);
        assert_eq!(parse_percentage("87.5").unwrap(), 87.5);
        assert_eq!(parse_percentage("  90  ").unwrap(), 90.0);
    }

    #[test]
    fn test_parse_percentage_errors() {
        assert!(parse_percentage("").is_err());
        assert!(parse_percentage("abc").is_err());
        assert!(parse_percentage("-1").is_err());
        assert!(parse_percentage("100.1").is_err());
        assert!(parse_percentage("NaN").is_err());
    }

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::try_parse_from(["picdupe", "/some/path", "90"]).unwrap();
        assert!(!cli.delete);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.directory, PathBuf::from("/some/path"));
        assert_eq!(cli.similarity, 90.0);
    }

    #[test]
    fn test_cli_parse_delete_flag() {
        let cli = Cli::try_parse_from(["picdupe", "-d", "/photos", "85"]).unwrap();
        assert!(cli.delete);

        let cli = Cli::try_parse_from(["picdupe", "--delete", "/photos", "85"]).unwrap();
        assert!(cli.delete);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::try_parse_from(["picdupe", "-v", "/photos", "85"]).unwrap();
        assert_eq!(cli.verbose, 1);

        let cli = Cli::try_parse_from(["picdupe", "-vv", "/photos", "85"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["picdupe", "-v", "-q", "/photos", "85"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_arguments() {
        assert!(Cli::try_parse_from(["picdupe"]).is_err());
        assert!(Cli::try_parse_from(["picdupe", "/photos"]).is_err());
    }

    #[test]
    fn test_cli_out_of_range_percentage() {
        assert!(Cli::try_parse_from(["picdupe", "/photos", "101"]).is_err());
        assert!(Cli::try_parse_from(["picdupe", "/photos", "-5"]).is_err());
    }

    #[test]
    fn test_cli_version_flag() {
        // clap exits early on --version, which is an error in try_parse_from
        let result = Cli::try_parse_from(["picdupe", "--version"]);
        assert!(result.is_err());
    }
}
