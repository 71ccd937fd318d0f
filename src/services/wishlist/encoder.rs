//! Wishlist directive rendering for the downstream consumer.
//!
//! File format: a `title:` line, a `description:` line, then one directive
//! per matched row:
//!
//! ```text
//! dimwishlist:item=<weaponId>&perks=<perk1Id>,<perk2Id>#notes: <comment>
//! ```

use crate::services::grid::matcher::MatchedRow;

/// Directive scheme understood by DIM-style wishlist readers.
const SCHEME: &str = "dimwishlist";

/// Render the two fixed header lines.
pub fn render_header(title: &str, description: &str) -> String {
    format!("title:{title}\ndescription:{description}\n")
}

/// Build the conventional note for a matched row from its original,
/// unnormalized cells, so the curators' spelling survives into the output.
pub fn roll_note(matched: &MatchedRow) -> String {
    let row = &matched.row;
    format!("{}: {} + {}", row.weapon, row.perk1, row.perk2)
}

/// Encode one matched row as a single directive line.
///
/// Identifiers render as decimal integers; perk order is preserved exactly
/// as matched. A line break in the note would terminate the directive
/// early, so CR/LF are replaced with spaces.
pub fn encode_line(matched: &MatchedRow, note: &str) -> String {
    let (perk1, perk2) = matched.perk_hashes;
    format!(
        "{SCHEME}:item={}&perks={},{}#notes: {}",
        matched.weapon_hash,
        perk1,
        perk2,
        sanitize_note(note)
    )
}

/// Render the complete wishlist file body.
pub fn render_wishlist(title: &str, description: &str, matches: &[MatchedRow]) -> String {
    let mut body = render_header(title, description);
    for matched in matches {
        body.push_str(&encode_line(matched, &roll_note(matched)));
        body.push('\n');
    }
    body
}

fn sanitize_note(note: &str) -> String {
    note.replace(['\r', '\n'], " ").trim().to_string()
}
