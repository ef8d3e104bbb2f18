use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recovery_core::document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

/// Reconstruct a Shamir secret from a JSON share document and list the
/// shares that disagree with it.
#[derive(Debug, Parser)]
#[command(name = "recover-secret", version, about)]
struct Cli {
    /// Path to the share document.
    input: PathBuf,

    /// How to print the secret and the incorrect shares.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn run(cli: &Cli) -> Result<()> {
    let doc = document::load(&cli.input).with_context(|| {
        format!("could not load shares from {}", cli.input.display())
    })?;
    let recovery = doc.recover().context("secret recovery failed")?;

    match cli.format {
        Format::Text => println!("{recovery}"),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&recovery)
                .context("could not serialize the recovery")?
        ),
    }

    if !recovery.is_consistent() {
        eprintln!(
            "warning: {} of {} shares disagree with the reconstructed polynomial",
            recovery.bad_shares.len(),
            doc.shares().len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
