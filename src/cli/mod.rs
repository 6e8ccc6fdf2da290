//! Command-line interface for hgnc-db.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **fetch**: Print the records matching a gene identifier
//! - **lookup**: Convert gene identifiers into another field
//! - **fields**: List the HGNC field catalog
//! - **info**: Summarise a loaded dataset
//!
//! ## Usage
//!
//! ```text
//! # Full record for a symbol (aliases and previous symbols resolve)
//! hgnc-db fetch --data hgnc_complete_set.txt.gz GBA
//!
//! # Convert identifiers of any naming system to Entrez IDs
//! hgnc-db lookup --data hgnc_complete_set.txt --target entrez_id BRCA1 HGNC:11998 ENSG00000146648
//!
//! # Query an unindexed field
//! hgnc-db fetch --data hgnc_complete_set.txt --field location 17q21.31 --format tsv
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::store::HgncDatabase;
use crate::core::field::{Field, UnknownFieldError};

pub mod fetch;
pub mod fields;
pub mod info;
pub mod lookup;

#[derive(Parser)]
#[command(name = "hgnc-db")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Query HGNC gene nomenclature records by any gene identifier")]
#[command(
    long_about = "hgnc-db loads the HGNC complete set into memory and answers queries keyed by gene symbol, alias, previous symbol, HGNC ID, Entrez ID, Ensembl gene ID or UCSC ID.\n\nOutdated symbols are resolved to the current approved symbol unless --no-normalize is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the records matching a value
    Fetch(fetch::FetchArgs),

    /// Print one field of the records matching each value
    Lookup(lookup::LookupArgs),

    /// List known fields
    Fields(fields::FieldsArgs),

    /// Summarise a dataset
    Info(info::InfoArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Dataset location, shared by every command that loads data
#[derive(Args)]
pub struct DataArgs {
    /// HGNC complete set TSV file (hgnc_complete_set.txt[.gz])
    #[arg(short, long, required = true)]
    pub data: PathBuf,

    /// Read the data file as gzip (implied by a .gz extension)
    #[arg(long)]
    pub gzip: bool,
}

impl DataArgs {
    pub fn is_gzipped(&self) -> bool {
        self.gzip
            || self
                .data
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    }

    /// Load the dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn load(&self, verbose: bool) -> anyhow::Result<HgncDatabase> {
        let db = HgncDatabase::load_tsv(&self.data, self.is_gzipped())
            .with_context(|| format!("Could not load {}", self.data.display()))?;

        if verbose {
            eprintln!("Loaded {} records from {}", db.len(), self.data.display());
        }

        Ok(db)
    }
}

/// clap value parser for field names
pub(crate) fn parse_field(s: &str) -> Result<Field, UnknownFieldError> {
    s.parse()
}
