use std::collections::HashMap;

use crate::core::field::Field;
use crate::core::record::Record;

/// Value -> record positions, one map per indexed field.
///
/// Positions are appended in load order, so each list is sorted ascending.
#[derive(Debug, Default)]
pub struct FieldIndex {
    slots: [HashMap<String, Vec<usize>>; Field::INDEXED_COUNT],
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every non-empty indexed value of `record` under `position`
    pub fn insert(&mut self, position: usize, record: &Record) {
        for (slot, field) in Field::INDEXED.iter().enumerate() {
            let value = record.get(*field);
            if value.is_empty() {
                continue;
            }
            self.slots[slot]
                .entry(value.to_string())
                .or_default()
                .push(position);
        }
    }

    /// Positions of records whose `field` equals `value`.
    ///
    /// Returns `None` when `field` is not indexed, so the caller has to scan.
    /// An indexed field with no such value yields an empty slice.
    pub fn positions(&self, field: Field, value: &str) -> Option<&[usize]> {
        let slot = field.indexed_slot()?;
        Some(self.slots[slot].get(value).map_or(&[][..], Vec::as_slice))
    }

    /// Number of distinct values held for `field`; 0 for unindexed fields
    pub fn distinct_values(&self, field: Field) -> usize {
        field
            .indexed_slot()
            .map_or(0, |slot| self.slots[slot].len())
    }
}
