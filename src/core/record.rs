use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::io::Write;

use crate::core::field::Field;

/// Separator of multi-valued cells (alias lists, MANE select pairs)
pub const LIST_SEPARATOR: char = '|';

/// Split a `|`-separated cell into trimmed, non-empty tokens
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// One row of the HGNC dataset.
///
/// Values live in a fixed array indexed by [`Field::index`], so every field is
/// always present; cells that were blank or missing in the source are empty
/// strings. A record is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Box<[String; Field::COUNT]>,
}

impl Record {
    /// Create a record where every field is empty
    pub(crate) fn empty() -> Self {
        Self {
            values: Box::new(std::array::from_fn(|_| String::new())),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    /// Value of `field`, or `""` if the source cell was blank
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Iterate over `(field, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    /// Full field -> value map, for presentation layers
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Field, String> {
        self.iter()
            .map(|(field, value)| (field, value.to_string()))
            .collect()
    }

    /// Full map keyed by header name
    #[must_use]
    pub fn to_str_map(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, value)| (field.as_str(), value.to_string()))
            .collect()
    }

    /// Serialize as a JSON object of header name -> value
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails, which cannot happen for
    /// string values.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Write the record as one line of JSON
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_json<W: Write>(&self, mut writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)
    }

    /// Parse a date column. Returns `None` for non-date fields, blank cells,
    /// and values that are not `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self, field: Field) -> Option<NaiveDate> {
        if !field.is_date() {
            return None;
        }
        NaiveDate::parse_from_str(self.get(field), "%Y-%m-%d").ok()
    }

    pub fn hgnc_id(&self) -> &str {
        self.get(Field::HgncId)
    }

    pub fn symbol(&self) -> &str {
        self.get(Field::Symbol)
    }

    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    pub fn locus_group(&self) -> &str {
        self.get(Field::LocusGroup)
    }

    pub fn locus_type(&self) -> &str {
        self.get(Field::LocusType)
    }

    pub fn status(&self) -> &str {
        self.get(Field::Status)
    }

    pub fn location(&self) -> &str {
        self.get(Field::Location)
    }

    pub fn entrez_id(&self) -> &str {
        self.get(Field::EntrezId)
    }

    pub fn ensembl_gene_id(&self) -> &str {
        self.get(Field::EnsemblGeneId)
    }

    pub fn ucsc_id(&self) -> &str {
        self.get(Field::UcscId)
    }

    pub fn refseq_accession(&self) -> &str {
        self.get(Field::RefseqAccession)
    }

    pub fn omim_id(&self) -> &str {
        self.get(Field::OmimId)
    }

    pub fn mane_select(&self) -> &str {
        self.get(Field::ManeSelect)
    }

    /// Alias symbols, split on `|`
    pub fn alias_symbols(&self) -> impl Iterator<Item = &str> {
        split_list(self.get(Field::AliasSymbol))
    }

    /// Previously approved symbols, split on `|`
    pub fn prev_symbols(&self) -> impl Iterator<Item = &str> {
        split_list(self.get(Field::PrevSymbol))
    }
}

impl FromIterator<(Field, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        let mut record = Self::empty();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}
