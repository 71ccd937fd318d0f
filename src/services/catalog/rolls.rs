//! Random-roll resolution over the item → socket → plug-set → plug-item graph.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::services::catalog::records::{
    DefinitionHash, DefinitionTable, ItemDefinition, PlugSetDefinition,
};
use crate::types::errors::{WishlistError, WishlistResult};

/// Collect every perk obtainable as a random roll on a single weapon.
///
/// Each socket carrying a randomized plug-set reference is dereferenced and
/// its reusable plug items folded into one set; fixed sockets are skipped.
/// Set semantics dedup across sockets and across repeated plug-set
/// references. A reference to an absent plug set aborts the resolution: a
/// partially resolved set is indistinguishable from a legitimately small
/// one downstream.
pub fn weapon_roll_perks(
    weapon: &ItemDefinition,
    plug_sets: &DefinitionTable<PlugSetDefinition>,
) -> WishlistResult<BTreeSet<DefinitionHash>> {
    let mut perks = BTreeSet::new();

    for socket in &weapon.sockets.socket_entries {
        let Some(plug_set_hash) = socket.randomized_plug_set_hash else {
            // fixed socket
            continue;
        };

        let plug_set = plug_sets.get(&plug_set_hash).ok_or_else(|| {
            WishlistError::MissingReference(format!(
                "weapon {} ({}) references unknown plug set {}",
                weapon.hash, weapon.display_properties.name, plug_set_hash
            ))
        })?;

        perks.extend(
            plug_set
                .reusable_plug_items
                .iter()
                .map(|plug| plug.plug_item_hash),
        );
    }

    Ok(perks)
}

/// Resolve the global random-roll perk map, perk hash → display name.
///
/// Aggregates `weapon_roll_perks` over every supplied weapon, then
/// dereferences each reached perk through the item table for its name.
pub fn all_roll_perks<'a>(
    weapons: impl IntoIterator<Item = &'a ItemDefinition>,
    items: &DefinitionTable<ItemDefinition>,
    plug_sets: &DefinitionTable<PlugSetDefinition>,
) -> WishlistResult<BTreeMap<DefinitionHash, String>> {
    let mut perk_hashes = BTreeSet::new();
    for weapon in weapons {
        perk_hashes.extend(weapon_roll_perks(weapon, plug_sets)?);
    }

    let mut perks = BTreeMap::new();
    for hash in perk_hashes {
        let item = items.get(&hash).ok_or_else(|| {
            WishlistError::MissingReference(format!(
                "plug item {hash} is absent from the item table"
            ))
        })?;
        perks.insert(hash, item.display_properties.name.clone());
    }

    debug!("Resolved {} distinct random-roll perks", perks.len());
    Ok(perks)
}

#[cfg(test)]
#[path = "tests/rolls_tests.rs"]
mod tests;
