//! dumap: print a size-annotated JSON tree of a directory.
//!
//! Thin binary entry point. All logic lives in the `dumap-core` crate.
//!
//! ```text
//! dumap ../drivers/bundle/ > bundle.json
//! ```

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use dumap_core::{export, scanner, ScanOptions};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the document only.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = ScanOptions::default();

    let tree = scanner::scan(&cli.path, &options)
        .with_context(|| format!("failed to scan {}", cli.path.display()))?;

    // Render fully before touching stdout so a failure never leaves a
    // truncated document behind.
    let document = export::to_json_string(&tree).context("failed to render tree")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(document.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write to stdout")?;

    Ok(())
}
