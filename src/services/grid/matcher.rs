//! Row matching: joins grid rows against the catalog index by normalized key.

use log::{info, warn};

use crate::services::catalog::index::CatalogIndex;
use crate::services::catalog::normalizer::normalize_name;
use crate::services::catalog::records::DefinitionHash;
use crate::services::grid::sheet::GridRow;

// ─── Result Types ────────────────────────────────────────────────────────────

/// A grid row joined to catalog identifiers. Perk order follows the row,
/// not the catalog; it is significant downstream.
#[derive(Debug, Clone)]
pub struct MatchedRow {
    pub weapon_hash: DefinitionHash,
    pub perk_hashes: (DefinitionHash, DefinitionHash),
    pub row: GridRow,
}

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMiss {
    /// The weapon name resolved to no catalog key.
    Weapon(String),
    /// A perk name resolved to no catalog key.
    Perk(String),
}

/// A dropped row: 1-based input position (header excluded) and cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub position: usize,
    pub miss: RowMiss,
}

/// Outcome of one matching pass over the grid.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub matched: Vec<MatchedRow>,
    pub skipped: Vec<SkippedRow>,
}

// ─── Matching ────────────────────────────────────────────────────────────────

/// Match rows strictly in input order.
///
/// A miss on any of the three fields drops the whole row: one diagnostic on
/// the reporting channel, no partial output, and the next row is processed
/// as if nothing happened.
pub fn match_rows(rows: &[GridRow], index: &CatalogIndex) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for (offset, row) in rows.iter().enumerate() {
        let position = offset + 1;
        match match_row(row, index) {
            Ok(matched) => outcome.matched.push(matched),
            Err(miss) => {
                let cause = match &miss {
                    RowMiss::Weapon(name) => format!("unknown weapon '{name}'"),
                    RowMiss::Perk(name) => format!("unknown perk '{name}'"),
                };
                warn!("Grid row {position} ('{}'): {cause}; row skipped", row.weapon);
                outcome.skipped.push(SkippedRow { position, miss });
            }
        }
    }

    info!(
        "Matched {} grid rows, skipped {}",
        outcome.matched.len(),
        outcome.skipped.len()
    );
    outcome
}

fn match_row(row: &GridRow, index: &CatalogIndex) -> Result<MatchedRow, RowMiss> {
    let weapon_hash = index
        .weapon(&normalize_name(&row.weapon))
        .ok_or_else(|| RowMiss::Weapon(row.weapon.clone()))?;
    let perk1 = index
        .perk(&normalize_name(&row.perk1))
        .ok_or_else(|| RowMiss::Perk(row.perk1.clone()))?;
    let perk2 = index
        .perk(&normalize_name(&row.perk2))
        .ok_or_else(|| RowMiss::Perk(row.perk2.clone()))?;

    Ok(MatchedRow {
        weapon_hash,
        perk_hashes: (perk1, perk2),
        row: row.clone(),
    })
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
