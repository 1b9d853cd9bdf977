//! Record and Table models
//!
//! A table is one header row followed by an ordered sequence of records.
//! Row numbering is 1-based and includes the header: row 1 is always the
//! header, data rows begin at row 2. Row order is stable and meaningful;
//! it is the tie-break for first-match lookups and the addressing scheme
//! for direct row updates.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TableError};
use crate::schema::{Column, COLUMN_COUNT};

/// Row number of the first data row (row 1 is the header).
pub const FIRST_DATA_ROW: u32 = 2;

/// One account record: one optional text value per schema column.
///
/// `None` means no data was ever entered for that field; it is distinct
/// from an empty string and never matches a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    cells: Vec<Option<String>>,
}

impl Record {
    /// Create a record with every field absent.
    pub fn empty() -> Self {
        Self {
            cells: vec![None; COLUMN_COUNT],
        }
    }

    /// Get the value of a field, if present.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells.get(column.index()).and_then(|c| c.as_deref())
    }

    /// Number of cells in this record.
    ///
    /// Always [`COLUMN_COUNT`] for records built through the typed API;
    /// may differ for records deserialized from malformed state, which
    /// [`Table::validate`] rejects.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Overwrite a field with a new value.
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.index()] = Some(value.into());
    }

    /// Iterate over all fields in ordinal order.
    pub fn fields(&self) -> impl Iterator<Item = (Column, Option<&str>)> {
        Column::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::empty()
    }
}

/// Header row plus ordered records; the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create an empty table holding only the header row.
    pub fn empty() -> Self {
        Self {
            header: Column::header(),
            rows: Vec::new(),
        }
    }

    /// Highest valid row number (the header counts as row 1).
    ///
    /// An empty table has a row count of 1; the first data row, once
    /// present, is row 2.
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32 + 1
    }

    /// Number of data records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the table holds no data records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the record at a 1-based row number.
    ///
    /// Returns `None` for the header row and anything past the end.
    pub fn record(&self, row: u32) -> Option<&Record> {
        if row < FIRST_DATA_ROW {
            return None;
        }
        self.rows.get((row - FIRST_DATA_ROW) as usize)
    }

    /// Mutable access to the record at a 1-based row number.
    pub fn record_mut(&mut self, row: u32) -> Option<&mut Record> {
        if row < FIRST_DATA_ROW {
            return None;
        }
        self.rows.get_mut((row - FIRST_DATA_ROW) as usize)
    }

    /// Iterate over `(row_number, record)` pairs in row order.
    pub fn records(&self) -> impl Iterator<Item = (u32, &Record)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i as u32 + FIRST_DATA_ROW, r))
    }

    /// Append a record at the end of the table.
    ///
    /// There is no row-insertion command; this exists for construction
    /// (bootstrap, hydration, tests).
    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// Validate the table against the schema: header names in ordinal
    /// order and the exact schema width on every data row.
    pub fn validate(&self) -> Result<()> {
        let expected = Column::header();
        let header_ok = self.header.len() == expected.len()
            && self
                .header
                .iter()
                .zip(expected.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b));
        if !header_ok {
            return Err(TableError::HeaderMismatch {
                expected: Column::valid_names(),
            });
        }
        for (row, record) in self.records() {
            if record.width() != COLUMN_COUNT {
                return Err(TableError::RowWidthMismatch {
                    row,
                    width: record.width(),
                    expected: COLUMN_COUNT,
                });
            }
        }
        Ok(())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}
