use super::*;
use crate::services::catalog::records::{
    DisplayProperties, ReusablePlugItem, SocketBlock, SocketEntry,
};

fn weapon(hash: DefinitionHash, name: &str, plug_set_refs: &[Option<DefinitionHash>]) -> ItemDefinition {
    ItemDefinition {
        hash,
        display_properties: DisplayProperties { name: name.into() },
        sockets: SocketBlock {
            socket_entries: plug_set_refs
                .iter()
                .map(|reference| SocketEntry {
                    randomized_plug_set_hash: *reference,
                })
                .collect(),
        },
        ..Default::default()
    }
}

fn plug_set(hash: DefinitionHash, plug_items: &[DefinitionHash]) -> (DefinitionHash, PlugSetDefinition) {
    (
        hash,
        PlugSetDefinition {
            hash,
            reusable_plug_items: plug_items
                .iter()
                .map(|item| ReusablePlugItem { plug_item_hash: *item })
                .collect(),
        },
    )
}

fn perk_item(hash: DefinitionHash, name: &str) -> (DefinitionHash, ItemDefinition) {
    (
        hash,
        ItemDefinition {
            hash,
            display_properties: DisplayProperties { name: name.into() },
            ..Default::default()
        },
    )
}

#[test]
fn test_fixed_sockets_contribute_nothing() {
    let plug_sets = DefinitionTable::from_iter([plug_set(100, &[10, 11])]);
    let gun = weapon(1, "Mythoclast", &[Some(100), None]);

    let perks = weapon_roll_perks(&gun, &plug_sets).unwrap();
    assert_eq!(perks, BTreeSet::from([10, 11]));
}

#[test]
fn test_overlapping_plug_sets_dedup() {
    let plug_sets = DefinitionTable::from_iter([
        plug_set(100, &[10, 11, 12]),
        plug_set(200, &[11, 12, 13]),
    ]);
    let gun = weapon(1, "Mythoclast", &[Some(100), Some(200)]);

    let perks = weapon_roll_perks(&gun, &plug_sets).unwrap();
    assert_eq!(perks.len(), 4);
    assert_eq!(perks, BTreeSet::from([10, 11, 12, 13]));
}

#[test]
fn test_repeated_plug_set_reference_dedups() {
    let plug_sets = DefinitionTable::from_iter([plug_set(100, &[10, 11])]);
    let gun = weapon(1, "Mythoclast", &[Some(100), Some(100)]);

    let perks = weapon_roll_perks(&gun, &plug_sets).unwrap();
    assert_eq!(perks, BTreeSet::from([10, 11]));
}

#[test]
fn test_missing_plug_set_is_fatal() {
    let plug_sets = DefinitionTable::new();
    let gun = weapon(1, "Mythoclast", &[Some(100)]);

    let err = weapon_roll_perks(&gun, &plug_sets).unwrap_err();
    assert!(matches!(err, WishlistError::MissingReference(_)));
    assert!(err.to_string().contains("plug set 100"));
}

#[test]
fn test_all_roll_perks_resolves_names() {
    let plug_sets = DefinitionTable::from_iter([plug_set(100, &[10]), plug_set(200, &[11])]);
    let guns = vec![
        weapon(1, "Mythoclast", &[Some(100)]),
        weapon(2, "Messenger", &[Some(200)]),
    ];
    let mut items: DefinitionTable<ItemDefinition> =
        DefinitionTable::from_iter([perk_item(10, "Rampage"), perk_item(11, "Zen Moment")]);
    for gun in &guns {
        items.insert(gun.hash, gun.clone());
    }

    let perks = all_roll_perks(guns.iter(), &items, &plug_sets).unwrap();
    assert_eq!(perks.len(), 2);
    assert_eq!(perks[&10], "Rampage");
    assert_eq!(perks[&11], "Zen Moment");
}

#[test]
fn test_unresolvable_perk_item_is_fatal() {
    let plug_sets = DefinitionTable::from_iter([plug_set(100, &[10])]);
    let gun = weapon(1, "Mythoclast", &[Some(100)]);
    let items = DefinitionTable::from_iter([(1, gun.clone())]);

    let err = all_roll_perks([&gun], &items, &plug_sets).unwrap_err();
    assert!(matches!(err, WishlistError::MissingReference(_)));
}
