//! Spreadsheet grid export parsing.
//!
//! The export is plain CSV with a header row. Only the three named columns
//! matter; whatever else the curators keep in the sheet is ignored.

use log::debug;

use crate::types::errors::{WishlistError, WishlistResult};

/// Header names of the columns the grid must provide.
const WEAPON_COLUMN: &str = "Weapon";
const PERK1_COLUMN: &str = "Perk 1";
const PERK2_COLUMN: &str = "Perk 2";

/// One spreadsheet line, cells untouched, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub weapon: String,
    pub perk1: String,
    pub perk2: String,
}

/// Parse the CSV grid export into rows.
///
/// The first record is the header; the required columns are located by
/// name, case-insensitively, so the curators can reorder or add columns
/// freely. Records with an empty weapon cell (spacer lines in the sheet)
/// are dropped.
pub fn parse_grid(text: &str) -> WishlistResult<Vec<GridRow>> {
    let mut records = parse_csv(text)?.into_iter();

    let header = records
        .next()
        .ok_or_else(|| WishlistError::Sheet("grid export is empty".into()))?;
    let weapon_col = find_column(&header, WEAPON_COLUMN)?;
    let perk1_col = find_column(&header, PERK1_COLUMN)?;
    let perk2_col = find_column(&header, PERK2_COLUMN)?;

    let mut rows = Vec::new();
    for record in records {
        let weapon = cell(&record, weapon_col);
        if weapon.is_empty() {
            continue;
        }
        rows.push(GridRow {
            weapon,
            perk1: cell(&record, perk1_col),
            perk2: cell(&record, perk2_col),
        });
    }

    debug!("Grid: parsed {} rows", rows.len());
    Ok(rows)
}

fn cell(record: &[String], column: usize) -> String {
    record
        .get(column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn find_column(header: &[String], name: &str) -> WishlistResult<usize> {
    header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            WishlistError::SchemaDrift(format!("grid export has no '{name}' column"))
        })
}

/// Minimal RFC-4180 reader: quoted fields, doubled quotes, separators and
/// line breaks inside quotes. Records with no non-empty field are dropped.
fn parse_csv(text: &str) -> WishlistResult<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            // part of a CRLF; the '\n' that follows ends the record
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                if record.iter().any(|cell| !cell.is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(WishlistError::Sheet("unterminated quoted field".into()));
    }
    // final record without a trailing newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        if record.iter().any(|cell| !cell.is_empty()) {
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
