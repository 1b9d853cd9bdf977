//! Table store with an explicit open/mutate/save lifecycle
//!
//! The store owns the in-memory document and the path it persists to.
//! Opening either hydrates the document from disk (validating every
//! table against the schema) or bootstraps an empty one and persists it
//! immediately so subsequent opens are idempotent. Saving always
//! rewrites the whole file through the atomic-write primitive.

use std::fs;
use std::path::PathBuf;

use roster_core::Table;

use crate::atomic::atomic_write;
use crate::document::Document;
use crate::errors::{Result, StoreError};

/// Disk-backed store serving one selected table.
#[derive(Debug)]
pub struct TableStore {
    path: PathBuf,
    /// Key of the served table within the document.
    selected: String,
    document: Document,
}

impl TableStore {
    /// Open the store at `path`, serving the table named `table_name`.
    ///
    /// If the file exists it is parsed and validated; the table named
    /// `table_name` is selected if present, otherwise the document's
    /// primary table. If the file does not exist, a document holding a
    /// single empty table is created and persisted immediately.
    ///
    /// # Errors
    ///
    /// Any read, parse, or validation failure is returned as the
    /// corresponding [`StoreError`]; a store cannot serve commands from
    /// malformed state.
    pub fn open(path: impl Into<PathBuf>, table_name: &str) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            let store = Self {
                document: Document::new(table_name),
                selected: table_name.to_string(),
                path,
            };
            store.save()?;
            tracing::debug!(
                component = "store",
                op = "open",
                path = %store.path.display(),
                table = %store.selected,
                "bootstrapped empty registry"
            );
            return Ok(store);
        }

        let bytes = fs::read(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let document: Document =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        for (name, table) in &document.tables {
            table.validate().map_err(|source| StoreError::Malformed {
                path: path.clone(),
                table: name.clone(),
                source,
            })?;
        }

        let selected = document
            .select(table_name)
            .ok_or_else(|| StoreError::NoSuchTable {
                path: path.clone(),
                table: table_name.to_string(),
            })?
            .to_string();

        tracing::debug!(
            component = "store",
            op = "open",
            path = %path.display(),
            table = %selected,
            rows = document.tables[&selected].len(),
            "loaded registry"
        );

        Ok(Self {
            path,
            selected,
            document,
        })
    }

    /// The served table.
    pub fn table(&self) -> &Table {
        &self.document.tables[&self.selected]
    }

    /// Mutable access to the served table.
    ///
    /// Callers must follow a successful mutation with [`save`](Self::save).
    pub fn table_mut(&mut self) -> &mut Table {
        self.document
            .tables
            .get_mut(&self.selected)
            .expect("selected table exists by construction")
    }

    /// Persist the full document, overwriting prior state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the file cannot be replaced;
    /// the previous on-disk state survives a failed write.
    pub fn save(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.document)
            .expect("document serialization is infallible");
        atomic_write(&self.path, &bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            component = "store",
            op = "save",
            path = %self.path.display(),
            rows = self.table().len(),
            "persisted registry"
        );
        Ok(())
    }

    /// Name of the served table within the document.
    pub fn table_name(&self) -> &str {
        &self.selected
    }
}
