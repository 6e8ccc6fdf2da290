//! The in-memory HGNC database and its indexes.
//!
//! Loading reads the dataset once and builds, in the same pass:
//!
//! - the record store, where a record's row order is its position
//! - a value -> positions hash index for each indexed [`Field`](crate::Field)
//! - the set of current symbols and the alias/previous symbol map used to
//!   resolve outdated symbols
//!
//! Nothing is mutated after load apart from the normalization flag, which is
//! atomic, so a loaded database can be shared across threads behind a plain
//! reference or an `Arc`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hgnc_db::HgncDatabase;
//! use std::path::Path;
//!
//! // Download hgnc_complete_set.txt from https://www.genenames.org/download/archive/
//! let db = HgncDatabase::load_tsv(Path::new("hgnc_complete_set.txt.gz"), true).unwrap();
//! println!("{} records", db.len());
//! ```

pub mod index;
pub mod store;
pub mod symbols;
