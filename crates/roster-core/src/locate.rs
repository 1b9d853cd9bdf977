//! Linear-scan lookup primitives
//!
//! Matching is exact after trimming leading/trailing whitespace and
//! case-folding both sides. Absent cells never match, even an empty
//! query. Linear complexity is fine at the scale of a manually curated
//! registry; no secondary index.

use crate::schema::Column;
use crate::table::{Record, Table};

/// Normalize a value for comparison: trim, then case-fold.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Find every record whose `column` value matches `query`, in row order.
///
/// Pure read: no mutation, no persistence.
pub fn find_all<'a>(table: &'a Table, column: Column, query: &str) -> Vec<(u32, &'a Record)> {
    let needle = normalize(query);
    table
        .records()
        .filter(|(_, record)| {
            record
                .get(column)
                .map(|cell| normalize(cell) == needle)
                .unwrap_or(false)
        })
        .collect()
}

/// Find the first record whose `column` value matches `query`.
///
/// "First" means the lowest row number; duplicate values are permitted
/// and later rows are never considered.
pub fn find_first<'a>(table: &'a Table, column: Column, query: &str) -> Option<(u32, &'a Record)> {
    let needle = normalize(query);
    table.records().find(|(_, record)| {
        record
            .get(column)
            .map(|cell| normalize(cell) == needle)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_ranks(ranks: &[Option<&str>]) -> Table {
        let mut table = Table::empty();
        for rank in ranks {
            let mut record = Record::empty();
            if let Some(rank) = rank {
                record.set(Column::Rank, *rank);
            }
            table.push(record);
        }
        table
    }

    #[test]
    fn test_match_is_trimmed_and_case_insensitive() {
        let table = table_with_ranks(&[Some(" plat 1 ")]);
        let hits = find_all(&table, Column::Rank, "Plat 1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 2);
    }

    #[test]
    fn test_absent_cell_never_matches() {
        let table = table_with_ranks(&[None, Some("plat 1")]);
        let hits = find_all(&table, Column::Rank, "plat 1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 3, "row with absent rank is skipped");
    }

    #[test]
    fn test_absent_cell_does_not_match_empty_query() {
        let table = table_with_ranks(&[None]);
        assert!(find_all(&table, Column::Rank, "").is_empty());
    }

    #[test]
    fn test_find_all_returns_rows_in_order() {
        let table = table_with_ranks(&[Some("plat 1"), Some("gold 2"), Some("PLAT 1")]);
        let rows: Vec<u32> = find_all(&table, Column::Rank, "plat 1")
            .iter()
            .map(|(row, _)| *row)
            .collect();
        assert_eq!(rows, vec![2, 4]);
    }

    #[test]
    fn test_find_first_takes_lowest_row() {
        let mut table = Table::empty();
        for rank in ["plat 1", "ascendant 3"] {
            let mut record = Record::empty();
            record.set(Column::Name, "Adi4386");
            record.set(Column::Rank, rank);
            table.push(record);
        }

        let (row, record) = find_first(&table, Column::Name, "adi4386").unwrap();
        assert_eq!(row, 2);
        assert_eq!(record.get(Column::Rank), Some("plat 1"));
    }

    #[test]
    fn test_find_first_none_on_no_match() {
        let table = table_with_ranks(&[Some("plat 1")]);
        assert!(find_first(&table, Column::Rank, "gold 3").is_none());
    }
}
