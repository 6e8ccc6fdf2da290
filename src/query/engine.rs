use std::iter::Enumerate;
use std::slice;

use crate::catalog::store::HgncDatabase;
use crate::core::field::Field;
use crate::core::record::Record;

/// Per-query settings, independent of the database-wide flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Resolve alias and previous symbols when querying by `symbol`
    pub normalize_symbols: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            normalize_symbols: true,
        }
    }
}

/// Positions of matching records, from the index or from a scan
enum Positions<'a> {
    Indexed(slice::Iter<'a, usize>),
    Scan {
        records: Enumerate<slice::Iter<'a, Record>>,
        field: Field,
        value: &'a str,
    },
}

impl Iterator for Positions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Positions::Indexed(positions) => positions.next().copied(),
            Positions::Scan {
                records,
                field,
                value,
            } => records
                .find(|(_, record)| record.get(*field) == *value)
                .map(|(position, _)| position),
        }
    }
}

impl HgncDatabase {
    /// Options reflecting the current database-wide normalization flag
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            normalize_symbols: self.auto_normalize(),
        }
    }

    /// Records whose `query` field equals `value`, in load order.
    ///
    /// `symbol` queries go through alias resolution first (see
    /// [`set_auto_normalize`](Self::set_auto_normalize)). Indexed fields are
    /// answered from the index, other fields by comparing every record.
    /// An empty `value` matches nothing.
    pub fn fetch(&self, value: &str, query: Field) -> Vec<&Record> {
        self.fetch_with(value, query, self.query_options())
    }

    /// [`fetch`](Self::fetch) with explicit options instead of the shared flag
    pub fn fetch_with(&self, value: &str, query: Field, options: QueryOptions) -> Vec<&Record> {
        let records = &self.records;
        self.positions(value, query, options)
            .map(move |position| &records[position])
            .collect()
    }

    /// The `target` field of every record [`fetch`](Self::fetch) would return.
    ///
    /// One entry per matching record, empty where the record has no value.
    pub fn lookup(&self, value: &str, query: Field, target: Field) -> Vec<&str> {
        self.lookup_with(value, query, target, self.query_options())
    }

    /// [`lookup`](Self::lookup) with explicit options instead of the shared flag
    pub fn lookup_with(
        &self,
        value: &str,
        query: Field,
        target: Field,
        options: QueryOptions,
    ) -> Vec<&str> {
        let records = &self.records;
        self.positions(value, query, options)
            .map(move |position| records[position].get(target))
            .collect()
    }

    /// `target` of the first matching record
    pub(crate) fn lookup_first(&self, value: &str, query: Field, target: Field) -> Option<&str> {
        let records = &self.records;
        self.positions(value, query, self.query_options())
            .next()
            .map(move |position| records[position].get(target))
    }

    fn positions<'a>(&'a self, value: &'a str, query: Field, options: QueryOptions) -> Positions<'a> {
        if value.is_empty() {
            let none: &[usize] = &[];
            return Positions::Indexed(none.iter());
        }

        let value = if query == Field::Symbol {
            self.symbols.normalize(value, options.normalize_symbols)
        } else {
            value
        };

        match self.index.positions(query, value) {
            Some(positions) => Positions::Indexed(positions.iter()),
            None => Positions::Scan {
                records: self.records.iter().enumerate(),
                field: query,
                value,
            },
        }
    }
}
