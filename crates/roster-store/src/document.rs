//! Persisted document form
//!
//! One JSON document holds a set of named tables plus the name of the
//! primary table. The registry only ever serves one table at a time,
//! but the document keeps the named-table indirection so a file holding
//! several tables still loads: the configured name wins when present,
//! otherwise the primary table is served.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use roster_core::Table;

/// The full persisted state: named tables plus a primary designation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the table served when the configured name is absent.
    pub primary: String,
    /// All tables, keyed by name.
    pub tables: BTreeMap<String, Table>,
}

impl Document {
    /// Create a document holding one empty table under `table_name`,
    /// designated primary.
    pub fn new(table_name: &str) -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(table_name.to_string(), Table::empty());
        Self {
            primary: table_name.to_string(),
            tables,
        }
    }

    /// Resolve which table a configured name selects: the named table if
    /// present, otherwise the primary table. Returns the winning key.
    pub fn select<'a>(&'a self, configured: &'a str) -> Option<&'a str> {
        if self.tables.contains_key(configured) {
            return Some(configured);
        }
        self.tables
            .get_key_value(&self.primary)
            .map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_one_empty_table() {
        let doc = Document::new("accounts");
        assert_eq!(doc.primary, "accounts");
        assert_eq!(doc.tables.len(), 1);
        assert!(doc.tables["accounts"].is_empty());
    }

    #[test]
    fn test_select_prefers_configured_name() {
        let mut doc = Document::new("accounts");
        doc.tables.insert("archive".to_string(), Table::empty());

        assert_eq!(doc.select("archive"), Some("archive"));
    }

    #[test]
    fn test_select_falls_back_to_primary() {
        let doc = Document::new("accounts");
        assert_eq!(doc.select("missing"), Some("accounts"));
    }

    #[test]
    fn test_select_none_when_primary_missing() {
        let doc = Document {
            primary: "gone".to_string(),
            tables: BTreeMap::new(),
        };
        assert_eq!(doc.select("also-gone"), None);
    }
}
