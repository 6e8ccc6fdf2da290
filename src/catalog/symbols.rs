use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::core::record::Record;

/// Canonical symbols plus the alias/previous symbol -> canonical map
#[derive(Debug, Default)]
pub struct SymbolTable {
    canonical: HashSet<String>,
    aliases: HashMap<String, String>,
    reassigned: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record's symbol and every alias/previous symbol pointing at it.
    ///
    /// An alias already claimed by another symbol is taken over by this one,
    /// so the last record in file order wins.
    pub fn insert_record(&mut self, record: &Record) {
        let symbol = record.symbol();
        self.canonical.insert(symbol.to_string());

        for alias in record.alias_symbols().chain(record.prev_symbols()) {
            if let Some(previous) = self.aliases.insert(alias.to_string(), symbol.to_string()) {
                if previous != symbol {
                    debug!("Alias '{alias}' reassigned from '{previous}' to '{symbol}'");
                    self.reassigned += 1;
                }
            }
        }
    }

    /// Symbol to use for an indexed `symbol` lookup.
    ///
    /// The input is always trimmed. With `enabled`, a known alias or
    /// previous symbol resolves to its current symbol; current symbols and
    /// unknown strings come back unchanged.
    pub fn normalize<'a>(&'a self, symbol: &'a str, enabled: bool) -> &'a str {
        let symbol = symbol.trim();
        if !enabled || self.canonical.contains(symbol) {
            return symbol;
        }
        self.resolve_alias(symbol).unwrap_or(symbol)
    }

    pub fn is_canonical(&self, symbol: &str) -> bool {
        self.canonical.contains(symbol)
    }

    /// Current symbol an alias or previous symbol belongs to
    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn canonical_count(&self) -> usize {
        self.canonical.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Aliases that moved to a different symbol during load
    pub fn reassigned_count(&self) -> usize {
        self.reassigned
    }
}
