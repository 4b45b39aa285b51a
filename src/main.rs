//! rmtree — reMarkable document store as a tree.
//!
//! Thin binary entry point. All logic lives in the `rmtree-core` crate.

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::Cli;
use rmtree_core::{load_items, Hierarchy, Materializer, TreeRenderer};
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("rmtree version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Diagnostics go to stderr; stdout carries only the tree and summary.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    if !cli.path.exists() {
        bail!("Path '{}' does not exist", cli.path.display());
    }
    if cli.symlinks && !cli.output.exists() {
        bail!("Output Path '{}' does not exist", cli.output.display());
    }

    tracing::info!("Loading {}", cli.path.display());
    let items = load_items(&cli.path).context("Error loading items")?;
    let hierarchy = Hierarchy::build(items);

    if cli.symlinks {
        // Symlink targets must resolve from wherever the output lives.
        let source = std::fs::canonicalize(&cli.path)
            .with_context(|| format!("cannot resolve '{}'", cli.path.display()))?;
        let report = Materializer::new(&hierarchy, &source, &cli.output).run();
        println!("{}", report.summary);
    } else {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        TreeRenderer::new(&hierarchy, cli.format_policy()).render(&mut out)?;
        out.flush()?;
    }

    Ok(())
}
