//! gh-digest: turn a GitHub activity export into a Markdown digest
//!
//! Reads the JSON files of one export directory and writes a single
//! LLM-friendly Markdown summary, grouped by repository and sorted by date.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gh_digest::config::Config;
use gh_digest::pipeline::{self, DigestError};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match execute(&config) {
        Ok(path) => {
            println!("Generated: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &Config) -> anyhow::Result<PathBuf> {
    match pipeline::run(config) {
        Err(DigestError::Config(e)) => Err(e.into()),
        result => result.with_context(|| {
            format!(
                "could not generate digest for {}",
                config.directory.display()
            )
        }),
    }
}
