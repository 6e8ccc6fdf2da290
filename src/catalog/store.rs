use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::info;

use crate::catalog::index::FieldIndex;
use crate::catalog::symbols::SymbolTable;
use crate::core::field::Field;
use crate::core::record::Record;
use crate::parsing::tsv::{self, ParseError, RecordReader};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load HGNC data: {0}")]
    Parse(#[from] ParseError),
}

/// Summary counts for a loaded database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub records: usize,
    pub canonical_symbols: usize,
    pub aliases: usize,
    /// Aliases claimed by more than one symbol; the last record won
    pub reassigned_aliases: usize,
    /// Distinct values per indexed field
    pub indexed_keys: BTreeMap<Field, usize>,
}

impl DatabaseStats {
    /// Distinct values summed over every indexed field
    pub fn total_indexed_keys(&self) -> usize {
        self.indexed_keys.values().sum()
    }
}

/// The loaded HGNC dataset with its indexes.
///
/// Everything except the normalization flag is immutable after construction,
/// so a shared `&HgncDatabase` can serve queries from any number of threads.
#[derive(Debug)]
pub struct HgncDatabase {
    /// All records; a record's position in this vec is its identity
    pub(crate) records: Vec<Record>,

    /// Index: indexed field value -> positions in `records`
    pub(crate) index: FieldIndex,

    /// Canonical symbols and alias -> symbol map
    pub(crate) symbols: SymbolTable,

    /// Whether `symbol` queries resolve aliases by default
    auto_normalize: AtomicBool,
}

impl HgncDatabase {
    /// Load an HGNC TSV file, e.g. `hgnc_complete_set.txt.gz`
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Open` if the file cannot be opened, or
    /// `LoadError::Parse` if it cannot be read, decompressed, or has no header.
    pub fn load_tsv(path: &Path, gzipped: bool) -> Result<Self, LoadError> {
        let reader = tsv::open(path, gzipped).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(reader)
    }

    /// Load from any buffered TSV source. The first line must be the header.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the header is missing or reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let records = RecordReader::new(reader)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    /// Build the database and all indexes from already parsed records, in a
    /// single pass. Positions are assigned in iteration order from 0.
    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut db = Self {
            records: Vec::new(),
            index: FieldIndex::new(),
            symbols: SymbolTable::new(),
            auto_normalize: AtomicBool::new(true),
        };

        for record in records {
            let position = db.records.len();
            db.symbols.insert_record(&record);
            db.index.insert(position, &record);
            db.records.push(record);
        }

        let stats = db.stats();
        info!(
            "Loaded {} HGNC records ({} symbols, {} aliases, {} indexed keys)",
            stats.records,
            stats.canonical_symbols,
            stats.aliases,
            stats.total_indexed_keys()
        );

        db
    }

    /// Turn automatic alias resolution for `symbol` queries on or off.
    ///
    /// The setting applies to every later [`fetch`](Self::fetch) and
    /// [`lookup`](Self::lookup) until changed again. Queries that must not
    /// depend on it should use the `_with` variants.
    pub fn set_auto_normalize(&self, enabled: bool) {
        self.auto_normalize.store(enabled, Ordering::Release);
    }

    pub fn auto_normalize(&self) -> bool {
        self.auto_normalize.load(Ordering::Acquire)
    }

    /// Resolve an alias or previous symbol to its current symbol, honouring
    /// the normalization flag. Input is always trimmed.
    pub fn normalize_symbol<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.symbols.normalize(symbol, self.auto_normalize())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// All records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at `position`, if any
    pub fn record(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            records: self.records.len(),
            canonical_symbols: self.symbols.canonical_count(),
            aliases: self.symbols.alias_count(),
            reassigned_aliases: self.symbols.reassigned_count(),
            indexed_keys: Field::INDEXED
                .iter()
                .map(|&field| (field, self.index.distinct_values(field)))
                .collect(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
