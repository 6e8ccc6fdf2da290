//! Queries over a loaded [`HgncDatabase`](crate::HgncDatabase).
//!
//! Two primitives carry every query:
//!
//! - [`fetch`](crate::HgncDatabase::fetch): records whose field equals a value
//!   (like `grep`)
//! - [`lookup`](crate::HgncDatabase::lookup): one field of each of those
//!   records (like `grep | cut`)
//!
//! Indexed fields are answered from hash indexes; any other field falls back
//! to a scan with identical matching rules. Queries by `symbol` first resolve
//! aliases and previous symbols to the current symbol, unless normalization
//! is turned off.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hgnc_db::{Field, HgncDatabase};
//! use hgnc_db::query::classify::classify_gene;
//! use std::path::Path;
//!
//! let db = HgncDatabase::load_tsv(Path::new("hgnc_complete_set.txt.gz"), true).unwrap();
//!
//! // Previous symbol GBA resolves to GBA1
//! let ids = db.lookup("GBA", Field::Symbol, Field::EntrezId);
//!
//! // Any naming system, auto-detected
//! let gene = "ENSG00000012048";
//! let records = db.fetch(gene, classify_gene(gene));
//! ```

pub mod classify;
pub mod convert;
pub mod engine;
