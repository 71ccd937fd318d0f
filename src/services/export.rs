//! Lookup-table export: `name,hash` CSVs the curators import back into the
//! spreadsheet as validation ranges.

use std::fs;
use std::path::Path;

use log::info;

use crate::services::catalog::records::DefinitionHash;
use crate::types::errors::WishlistResult;

/// Write one lookup table, sorted by display name (ties by hash).
pub fn write_lookup_csv(path: &Path, rows: &[(String, DefinitionHash)]) -> WishlistResult<()> {
    let mut sorted: Vec<&(String, DefinitionHash)> = rows.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut body = String::from("name,hash\n");
    for (name, hash) in sorted {
        body.push_str(&csv_cell(name));
        body.push(',');
        body.push_str(&hash.to_string());
        body.push('\n');
    }

    fs::write(path, body)?;
    info!("Wrote {} lookup rows to {}", rows.len(), path.display());
    Ok(())
}

/// Quote a cell when it carries a separator, quote, or line break.
fn csv_cell(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weapon_names.csv");

        write_lookup_csv(
            &path,
            &[("Zealot's Reward".into(), 3), ("Adhortative".into(), 1)],
        )
        .unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "name,hash\nAdhortative,1\nZealot's Reward,3\n");
    }

    #[test]
    fn test_names_with_separators_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perk_names.csv");

        write_lookup_csv(&path, &[("Fires, twice".into(), 7)]).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "name,hash\n\"Fires, twice\",7\n");
    }

    #[test]
    fn test_name_ties_break_by_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.csv");

        write_lookup_csv(&path, &[("Rampage".into(), 9), ("Rampage".into(), 2)]).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "name,hash\nRampage,2\nRampage,9\n");
    }
}
