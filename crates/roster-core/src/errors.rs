use thiserror::Error;

/// Result type alias using TableError
pub type Result<T> = std::result::Result<T, TableError>;

/// Structural violations of the table's schema invariants.
///
/// These only surface when hydrating a table from persisted state; an
/// in-memory table built through the typed API cannot violate them.
#[derive(Debug, Error)]
pub enum TableError {
    /// The header row does not match the account schema.
    #[error("table header does not match the account schema (expected: {expected})")]
    HeaderMismatch { expected: String },

    /// A data row has the wrong number of cells.
    #[error("row {row} has {width} cells, schema requires {expected}")]
    RowWidthMismatch {
        row: u32,
        width: usize,
        expected: usize,
    },
}
