use std::{fs, path::PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::{
    error::{Error, Result},
    migration::{self, MigrationReport},
    store::MemoryGraph,
};

/// Migrates `rdfs:seeAlso` / `rdfs:comment` annotations into reified OWL
/// axioms carrying NCIT cross-references.
#[derive(Debug, Parser)]
#[command(name = "ncit-extract", version, about)]
pub struct Cli {
    /// Ontology file to read; any serialization the parser detects.
    pub source_file: PathBuf,
    /// Destination for the rewritten ontology, written as RDF/XML.
    pub destination_file: PathBuf,
    /// Prints the resolved paths and enables debug diagnostics.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the migration described by the parsed arguments.
///
/// Validates the source path, creates missing destination parents, then
/// loads, rewrites and saves the ontology, confirming each stage on stdout.
pub fn run(cli: &Cli) -> Result<MigrationReport> {
    if cli.verbose {
        println!("source:      {}", cli.source_file.display());
        println!("destination: {}", cli.destination_file.display());
    }

    if !cli.source_file.exists() {
        return Err(Error::SourceMissing {
            path: cli.source_file.clone(),
        });
    }
    if !cli.source_file.is_file() {
        return Err(Error::SourceNotFile {
            path: cli.source_file.clone(),
        });
    }
    if let Some(parent) = cli.destination_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Save {
                path: cli.destination_file.clone(),
                source,
            })?;
        }
    }

    let mut store = MemoryGraph::load(&cli.source_file)?;
    println!(
        "{} loaded ontology from {}",
        "✔".green(),
        cli.source_file.display()
    );

    let report = migration::rewrite(&mut store);
    println!(
        "{} processed {} classes ({} skipped)",
        "✔".green(),
        report.processed,
        report.skipped
    );

    store.save(&cli.destination_file)?;
    println!(
        "{} saved ontology to {}",
        "✔".green(),
        cli.destination_file.display()
    );

    Ok(report)
}
