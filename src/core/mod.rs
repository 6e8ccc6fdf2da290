//! Core data types for HGNC gene records.
//!
//! - [`Field`]: the closed catalog of HGNC columns, seven of which are indexed
//! - [`Record`]: one dataset row, stored as a fixed array over [`Field`]
//!
//! ## Indexed fields
//!
//! | Field | Example |
//! |-------|---------|
//! | `hgnc_id` | HGNC:1100 |
//! | `symbol` | BRCA1 |
//! | `entrez_id` | 672 |
//! | `ensembl_gene_id` | ENSG00000012048 |
//! | `ucsc_id` | uc002ict.4 |
//! | `refseq_accession` | NM_007294 |
//! | `omim_id` | 113705 |
//!
//! Every other field can still be queried, but through a linear scan.

pub mod field;
pub mod record;
