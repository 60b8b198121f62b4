//! picdupe - Perceptually Similar Image Finder
//!
//! Entry point for the picdupe CLI application.

use clap::Parser;
use picdupe::{cli::Cli, error::ExitCode};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the application logic
    match picdupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
