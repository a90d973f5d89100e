// src/bin/lattice.rs
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;

use lattice_core::compiler;
use lattice_core::config::{self, Config};
use lattice_core::corpus;
use lattice_core::error::LatticeError;
use lattice_core::reporting;

#[derive(Parser)]
#[command(name = "lattice")]
#[command(about = "Knowledge graph compiler: stable ids and related-item graphs")]
#[command(version)]
struct Cli {
    /// Content root containing entities/ and pages/
    #[arg(long, default_value = "content")]
    content_dir: PathBuf,

    /// Directory for compiled artifacts (graph.json, backlinks.json, tags.json)
    #[arg(long, default_value = "build")]
    out_dir: PathBuf,

    /// Identifier registry file (defaults to <content-dir>/registry.json)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Similarity report from the external content-similarity scorer
    #[arg(long)]
    similarity: Option<PathBuf>,

    /// Acknowledge intentional slug restructuring: downgrades identifier
    /// reassignment from fatal to a warning
    #[arg(long)]
    allow_reassignment: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = build_config(&cli);
    config.load_tuning()?;

    if config.verbose {
        println!(
            "compiling {} -> {}",
            config.content_dir.display(),
            config.out_dir.display()
        );
    }

    match compiler::run(&config) {
        Ok(output) => {
            if !output.stats.reassigned.is_empty() {
                // Only reachable with --allow-reassignment; still worth eyes.
                let corpus = corpus::load(&config.content_dir)?;
                reporting::print_reassignments(&output.stats.reassigned, &corpus, true);
            }
            reporting::print_summary(&output.stats);
            Ok(())
        }
        Err(e) => report_failure(&config, e),
    }
}

fn build_config(cli: &Cli) -> Config {
    let registry = cli
        .registry
        .clone()
        .unwrap_or_else(|| config::default_registry_path(&cli.content_dir));
    let mut config = Config::new(cli.content_dir.clone(), cli.out_dir.clone(), registry);
    config.similarity_path = cli.similarity.clone();
    config.allow_reassignment = cli.allow_reassignment;
    config.verbose = cli.verbose;
    config
}

/// Fatal integrity/stability errors get the full console report before the
/// non-zero exit. Mention discovery needs the corpus; reload it read-only
/// (assignment never ran on these paths, so the reload has no side effects).
fn report_failure(config: &Config, error: LatticeError) -> Result<()> {
    let corpus = corpus::load(&config.content_dir).unwrap_or_default();
    match &error {
        LatticeError::IdConflict(conflicts) => {
            reporting::print_conflicts(conflicts, &corpus);
            Err(anyhow!("build aborted: identifier conflicts"))
        }
        LatticeError::Reassignment(moved) => {
            reporting::print_reassignments(moved, &corpus, false);
            Err(anyhow!("build aborted: identifier stability violation"))
        }
        _ => Err(error.into()),
    }
}
