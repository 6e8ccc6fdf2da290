//! # hgnc-db
//!
//! An in-memory, read-only database of HGNC gene nomenclature records.
//!
//! Genes are referred to by many identifiers: the approved symbol, aliases
//! and previous symbols, HGNC IDs, Entrez IDs, Ensembl gene IDs, UCSC IDs.
//! `hgnc-db` loads the HGNC complete set once, indexes the identifier
//! columns, and answers lookups keyed by any of them, resolving outdated
//! symbols to the current one.
//!
//! ## Features
//!
//! - **Indexed lookups**: hash indexes on the seven identifier columns
//! - **Scan fallback**: any other column can be queried with the same semantics
//! - **Symbol normalization**: aliases and previous symbols resolve to the approved symbol
//! - **Identifier detection**: guesses the naming system of a free-form gene string
//! - **Lock-free reads**: a loaded database is `Send + Sync` and never mutated
//!
//! ## Example
//!
//! ```rust,no_run
//! use hgnc_db::{Field, HgncDatabase};
//! use std::path::Path;
//!
//! let db = HgncDatabase::load_tsv(Path::new("hgnc_complete_set.txt.gz"), true).unwrap();
//!
//! for record in db.fetch("BRCA1", Field::Symbol) {
//!     println!("{}\t{}", record.hgnc_id(), record.name());
//! }
//!
//! assert_eq!(db.symbol_to_entrez_id("TP53"), Some("7157"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Database loading, indexes and symbol tables
//! - [`core`]: Field catalog and record type
//! - [`query`]: Fetch/lookup, identifier classification and conversions
//! - [`parsing`]: HGNC TSV ingestion
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod query;

// Re-export commonly used types for convenience
pub use catalog::store::{DatabaseStats, HgncDatabase, LoadError};
pub use core::field::Field;
pub use core::record::Record;
pub use query::classify::classify_gene;
pub use query::engine::QueryOptions;
