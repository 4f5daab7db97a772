//! Spreadsheet address lists
//!
//! The workbook backend sits behind [`TabularParser`] so it can be swapped or
//! faked in tests. Rows come back as header -> cell text mappings; only the
//! `address` and `amount` columns are used.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use super::{ImportError, ImportedRow};

/// One spreadsheet row keyed by header text
pub type TabularRow = HashMap<String, String>;

const ADDRESS_COLUMN: &str = "address";
const AMOUNT_COLUMN: &str = "amount";

/// Converts workbook bytes into rows of the first sheet
pub trait TabularParser: Send + Sync {
    fn parse_tabular(&self, bytes: &[u8]) -> Result<Vec<TabularRow>, ImportError>;
}

/// Convert tabular rows into imported rows. Missing cells become empty
/// strings; no row is dropped.
pub fn rows_from_tabular(rows: Vec<TabularRow>) -> Vec<ImportedRow> {
    rows.into_iter()
        .map(|mut row| ImportedRow {
            address: row.remove(ADDRESS_COLUMN).unwrap_or_default(),
            amount: row.remove(AMOUNT_COLUMN).unwrap_or_default(),
        })
        .collect()
}

/// `.xlsx` backend built on calamine
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineParser;

impl TabularParser for CalamineParser {
    fn parse_tabular(&self, bytes: &[u8]) -> Result<Vec<TabularRow>, ImportError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| ImportError::Spreadsheet(e.to_string()))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| ImportError::Spreadsheet(e.to_string()))?,
            None => return Ok(Vec::new()),
        };

        Ok(rows_from_range(&range))
    }
}

/// Map a sheet range to rows, using its first row as headers.
///
/// Rows whose cells are all empty are skipped; a row with content only in
/// unnamed columns is kept as an empty mapping.
pub(super) fn rows_from_range(range: &Range<Data>) -> Vec<TabularRow> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<Option<String>> = header.iter().map(cell_text).collect();

    rows.filter_map(|cells| {
        let values: Vec<Option<String>> = cells.iter().map(cell_text).collect();
        if values.iter().all(Option::is_none) {
            return None;
        }

        let mut row = TabularRow::new();
        for (name, value) in headers.iter().zip(values) {
            if let (Some(name), Some(value)) = (name, value) {
                row.entry(name.clone()).or_insert(value);
            }
        }
        Some(row)
    })
    .collect()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        // Display drops the trailing ".0" of whole numbers
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
