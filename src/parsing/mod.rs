//! Ingestion of the HGNC complete set (`hgnc_complete_set.txt[.gz]`).
//!
//! The file is tab-separated. The first line names the columns; every later
//! line is one gene record in the same column order. Cells may be wrapped in
//! double quotes or padded with spaces, and trailing cells may be missing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hgnc_db::parsing::tsv::{open, RecordReader};
//! use std::path::Path;
//!
//! let reader = RecordReader::new(open(Path::new("hgnc_complete_set.txt.gz"), true).unwrap()).unwrap();
//! for record in reader {
//!     println!("{}", record.unwrap().symbol());
//! }
//! ```

pub mod tsv;
