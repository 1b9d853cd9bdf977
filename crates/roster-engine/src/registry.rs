//! The registry service: four command handlers over one shared table
//!
//! Every handler first confirms a store is loaded; an unloaded registry
//! answers every command with the same unavailable message and touches
//! nothing. Validation (column existence, row range, name lookup)
//! completes entirely before any in-memory mutation, and persistence
//! runs exactly once per successful mutation, never on a rejected one.

use std::path::PathBuf;

use tokio::sync::RwLock;

use roster_core::{find_all, find_first, Column, Record, Request, FIRST_DATA_ROW};
use roster_store::errors::Result;
use roster_store::TableStore;

/// Response sent when no table is loaded.
const STORE_UNAVAILABLE: &str = "Account data is not loaded.";

/// The single shared registry instance.
///
/// Mutating handlers take the write half of the lock for their whole
/// read-validate-mutate-persist sequence, so two concurrent updates are
/// linearized rather than interleaved. Read handlers share the read
/// half and see either the pre- or post-update state of a row, never a
/// partial write.
#[derive(Debug)]
pub struct Registry {
    store: RwLock<Option<TableStore>>,
}

impl Registry {
    /// Create a registry with no store loaded.
    ///
    /// Every handler responds with an unavailable message until a store
    /// is opened. Mirrors the window between process start and data
    /// load in the original deployment.
    pub fn unloaded() -> Self {
        Self {
            store: RwLock::new(None),
        }
    }

    /// Open the backing store and return a serving registry.
    ///
    /// # Errors
    ///
    /// Propagates any [`roster_store::StoreError`] from
    /// [`TableStore::open`]; a registry cannot serve from malformed
    /// state.
    pub fn open(path: impl Into<PathBuf>, table_name: &str) -> Result<Self> {
        let store = TableStore::open(path, table_name)?;
        Ok(Self {
            store: RwLock::new(Some(store)),
        })
    }

    /// Route a typed request to its handler.
    pub async fn handle(&self, request: Request) -> Result<String> {
        match request {
            Request::SearchRank { rank } => self.search_rank(&rank).await,
            Request::ShowRank { name } => self.show_rank(&name).await,
            Request::UpdateByName {
                name,
                column,
                value,
            } => self.update_by_name(&name, &column, &value).await,
            Request::UpdateCell { row, column, value } => {
                self.update_cell(row, &column, &value).await
            }
        }
    }

    /// List every account whose rank matches the query.
    ///
    /// An empty result is a normal outcome, reported as plain text.
    pub async fn search_rank(&self, query: &str) -> Result<String> {
        let guard = self.store.read().await;
        let Some(store) = guard.as_ref() else {
            return Ok(STORE_UNAVAILABLE.to_string());
        };

        let hits = find_all(store.table(), Column::Rank, query);
        if hits.is_empty() {
            return Ok(format!(
                "No rows found with rank exactly matching '{}'.",
                query.trim()
            ));
        }

        let mut lines = vec![format!("Accounts with rank '{}':", query.trim())];
        for (row, record) in hits {
            lines.push(render_row(row, record));
        }
        Ok(lines.join("\n"))
    }

    /// Look up an account by name and report its rank.
    pub async fn show_rank(&self, query: &str) -> Result<String> {
        let guard = self.store.read().await;
        let Some(store) = guard.as_ref() else {
            return Ok(STORE_UNAVAILABLE.to_string());
        };

        let Some((_, record)) = find_first(store.table(), Column::Name, query) else {
            return Ok(format!(
                "No row found with name exactly matching '{}'.",
                query.trim()
            ));
        };

        let stored_name = record.get(Column::Name).unwrap_or(query).trim();
        match record.get(Column::Rank) {
            Some(rank) => Ok(format!("The rank for '{stored_name}' is: {rank}")),
            None => Ok(format!("'{stored_name}' does not have a rank listed.")),
        }
    }

    /// Overwrite one cell of the first row whose name matches, then
    /// persist.
    pub async fn update_by_name(&self, name: &str, column: &str, value: &str) -> Result<String> {
        let mut guard = self.store.write().await;
        let Some(store) = guard.as_mut() else {
            return Ok(STORE_UNAVAILABLE.to_string());
        };

        // Both validations complete before any mutation
        let Some(resolved) = Column::resolve(column) else {
            tracing::warn!(component = "engine", op = "update_name", column, "unknown column");
            return Ok(invalid_column(column));
        };
        let Some((row, _)) = find_first(store.table(), Column::Name, name) else {
            return Ok(format!(
                "No row found with name exactly matching '{}'.",
                name.trim()
            ));
        };

        set_cell(store, row, resolved, value)?;

        tracing::info!(
            component = "engine",
            op = "update_name",
            row,
            column = resolved.name(),
            "updated cell"
        );
        Ok(format!(
            "Updated row {} where name='{}', column '{}' to '{}'.",
            row,
            name.trim(),
            resolved.name(),
            value
        ))
    }

    /// Overwrite one cell addressed by 1-based row number, then persist.
    ///
    /// Row 1 is the header and is never addressable.
    pub async fn update_cell(&self, row: u32, column: &str, value: &str) -> Result<String> {
        let mut guard = self.store.write().await;
        let Some(store) = guard.as_mut() else {
            return Ok(STORE_UNAVAILABLE.to_string());
        };

        // Both validations complete before any mutation
        let Some(resolved) = Column::resolve(column) else {
            tracing::warn!(component = "engine", op = "update_cell", column, "unknown column");
            return Ok(invalid_column(column));
        };
        let max_row = store.table().row_count();
        if row < FIRST_DATA_ROW || row > max_row {
            tracing::warn!(component = "engine", op = "update_cell", row, max_row, "row out of range");
            return Ok(format!(
                "Row number {row} is out of range ({FIRST_DATA_ROW} - {max_row})."
            ));
        }

        set_cell(store, row, resolved, value)?;

        tracing::info!(
            component = "engine",
            op = "update_cell",
            row,
            column = resolved.name(),
            "updated cell"
        );
        Ok(format!(
            "Updated row {}, column '{}' to '{}'.",
            row,
            resolved.name(),
            value
        ))
    }
}

/// Mutate one validated cell and persist the full table.
fn set_cell(store: &mut TableStore, row: u32, column: Column, value: &str) -> Result<()> {
    store
        .table_mut()
        .record_mut(row)
        .expect("row validated against the table before mutation")
        .set(column, value);
    store.save()
}

fn invalid_column(column: &str) -> String {
    format!(
        "Invalid column '{}'. Valid columns: {}",
        column,
        Column::valid_names()
    )
}

/// One line listing the row number and every field of a record.
fn render_row(row: u32, record: &Record) -> String {
    let fields = record
        .fields()
        .map(|(column, value)| format!("{}={}", column.name(), value.unwrap_or("")))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Row {row}: {fields}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_lists_every_field() {
        let mut record = Record::empty();
        record.set(Column::Name, "Adi4386");
        record.set(Column::Rank, "plat 1");

        let line = render_row(2, &record);
        assert!(line.starts_with("Row 2: "));
        assert!(line.contains("name=Adi4386"));
        assert!(line.contains("rank=plat 1"));
        assert!(line.contains("email="), "absent fields still listed");
    }

    #[test]
    fn test_invalid_column_lists_valid_names() {
        let msg = invalid_column("elo");
        assert!(msg.contains("'elo'"));
        for column in Column::ALL {
            assert!(msg.contains(column.name()));
        }
    }
}
