//! # check-semantic-version CLI
//!
//! Binary entry point. Parses arguments with `clap`, runs the version check,
//! and maps the outcome to the process exit code: 0 when the declared and
//! expected versions match, 1 on a failed check or on any extraction or
//! calculator error.
//!
//! The core logic lives in the library crate; this binary is a thin wrapper
//! around it.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if !cli.execute()? {
        std::process::exit(1);
    }

    Ok(())
}
