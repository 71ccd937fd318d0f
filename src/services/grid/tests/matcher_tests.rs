use super::*;
use crate::services::catalog::index::CatalogIndex;
use crate::services::catalog::records::{
    CategoryDefinition, DefinitionTable, DisplayProperties, ItemDefinition, PlugSetDefinition,
    ReusablePlugItem, SocketBlock, SocketEntry,
};

fn row(weapon: &str, perk1: &str, perk2: &str) -> GridRow {
    GridRow {
        weapon: weapon.into(),
        perk1: perk1.into(),
        perk2: perk2.into(),
    }
}

/// One weapon ("Mythoclast", 1) rolling "Rampage" (10) and "Zen Moment" (11).
fn index() -> CatalogIndex {
    let categories = DefinitionTable::from_iter([(
        5,
        CategoryDefinition {
            hash: 5,
            display_properties: DisplayProperties {
                name: "Weapon".into(),
            },
        },
    )]);

    let mut items = DefinitionTable::new();
    items.insert(
        1,
        ItemDefinition {
            hash: 1,
            display_properties: DisplayProperties {
                name: "Mythoclast".into(),
            },
            item_category_hashes: vec![5],
            sockets: SocketBlock {
                socket_entries: vec![SocketEntry {
                    randomized_plug_set_hash: Some(100),
                }],
            },
        },
    );
    for (hash, name) in [(10, "Rampage"), (11, "Zen Moment")] {
        items.insert(
            hash,
            ItemDefinition {
                hash,
                display_properties: DisplayProperties { name: name.into() },
                ..Default::default()
            },
        );
    }

    let plug_sets = DefinitionTable::from_iter([(
        100,
        PlugSetDefinition {
            hash: 100,
            reusable_plug_items: vec![
                ReusablePlugItem { plug_item_hash: 10 },
                ReusablePlugItem { plug_item_hash: 11 },
            ],
        },
    )]);

    CatalogIndex::build(&categories, &items, &plug_sets).unwrap()
}

#[test]
fn test_matches_rows_in_input_order() {
    let rows = vec![
        row("Mythoclast", "Rampage", "Zen Moment"),
        row("Mythoclast", "Zen Moment", "Rampage"),
    ];

    let outcome = match_rows(&rows, &index());
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.matched.len(), 2);
    assert_eq!(outcome.matched[0].weapon_hash, 1);
    // Perk order preserved exactly as the row spelled it
    assert_eq!(outcome.matched[0].perk_hashes, (10, 11));
    assert_eq!(outcome.matched[1].perk_hashes, (11, 10));
}

#[test]
fn test_join_tolerates_formatting_drift() {
    let rows = vec![row("MYTHOCLAST!", "rampage", "Zen  Moment")];

    let outcome = match_rows(&rows, &index());
    assert_eq!(outcome.matched.len(), 1);
    assert_eq!(outcome.matched[0].perk_hashes, (10, 11));
}

#[test]
fn test_unknown_weapon_skips_only_its_row() {
    let rows = vec![
        row("Mythoclast", "Rampage", "Zen Moment"),
        row("Gjallarhorn", "Rampage", "Zen Moment"),
        row("Mythoclast", "Zen Moment", "Rampage"),
    ];

    let outcome = match_rows(&rows, &index());
    assert_eq!(outcome.matched.len(), 2);
    assert_eq!(
        outcome.skipped,
        vec![SkippedRow {
            position: 2,
            miss: RowMiss::Weapon("Gjallarhorn".into()),
        }]
    );
}

#[test]
fn test_one_bad_perk_discards_whole_row() {
    let rows = vec![row("Mythoclast", "Rampage", "Unknown Perk")];

    let outcome = match_rows(&rows, &index());
    assert!(outcome.matched.is_empty());
    assert_eq!(
        outcome.skipped,
        vec![SkippedRow {
            position: 1,
            miss: RowMiss::Perk("Unknown Perk".into()),
        }]
    );
}

#[test]
fn test_original_row_travels_with_the_match() {
    let rows = vec![row("MYTHOCLAST!", "Rampage", "Zen Moment")];

    let outcome = match_rows(&rows, &index());
    // The source row keeps its unnormalized spelling for the note
    assert_eq!(outcome.matched[0].row.weapon, "MYTHOCLAST!");
}
