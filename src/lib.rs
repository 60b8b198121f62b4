//! picdupe - Perceptually Similar Image Finder
//!
//! A cross-platform Rust CLI application that scans a directory tree for
//! images, fingerprints each one with a perceptual hash, groups images whose
//! fingerprints fall within a configurable similarity threshold, and
//! optionally deletes all but one representative per group to reclaim disk
//! space.

pub mod actions;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod similarity;

use anyhow::Context;
use bytesize::ByteSize;

use crate::actions::reclaim_group;
use crate::cli::Cli;
use crate::error::ExitCode;
use crate::scanner::{scan_directory, PerceptualHasher};
use crate::similarity::{group_similar, SimilarityThreshold};

/// Run the application with parsed CLI arguments.
///
/// Orchestrates the pipeline: traversal → fingerprinting → grouping →
/// reporting → optional reclamation. Only the group listing and the
/// total-saved line go to stdout; everything else goes to the log.
///
/// # Errors
///
/// Returns an error if the similarity threshold is out of range or if the
/// scan aborts on a traversal or fingerprint failure.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let threshold = SimilarityThreshold::from_percentage(cli.similarity)?;
    let hasher = PerceptualHasher::new();

    let store = scan_directory(&cli.directory, &hasher)
        .with_context(|| format!("failed to scan {}", cli.directory.display()))?;
    log::info!("Fingerprinted {} image(s)", store.len());

    let metric = hasher.metric();
    let groups = group_similar(store.entries(), threshold, &metric);
    log::info!("Found {} similar group(s)", groups.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_groups(&mut out, &groups)?;

    if cli.delete {
        let mut total_saved = 0u64;
        for group in &groups {
            // A failed group is logged and skipped; its partial byte count
            // is discarded with the error.
            match reclaim_group(group, &metric) {
                Ok(saved) => total_saved += saved,
                Err(err) => log::warn!("Error deleting images: {err}"),
            }
        }
        report::write_total_saved(&mut out, total_saved)?;
        log::info!("Reclaimed {}", ByteSize::b(total_saved));
    }

    Ok(ExitCode::Success)
}
