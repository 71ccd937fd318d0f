//! Immutable name → hash lookup index over the weapon and perk domains.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{info, warn};

use crate::services::catalog::normalizer::normalize_name;
use crate::services::catalog::records::{
    CategoryDefinition, DefinitionHash, DefinitionTable, ItemDefinition, PlugSetDefinition,
};
use crate::services::catalog::rolls;
use crate::types::errors::{WishlistError, WishlistResult};

/// Display name of the item category that marks weapons.
const WEAPON_CATEGORY_NAME: &str = "Weapon";

/// Find the hash of the one category named "Weapon".
///
/// There is no alternate join key, so this is strict: zero candidates or
/// more than one is schema drift, never a first-match guess.
pub fn weapon_category_hash(
    categories: &DefinitionTable<CategoryDefinition>,
) -> WishlistResult<DefinitionHash> {
    let mut candidates = categories
        .values()
        .filter(|category| category.display_properties.name == WEAPON_CATEGORY_NAME)
        .map(|category| category.hash);

    let Some(hash) = candidates.next() else {
        return Err(WishlistError::SchemaDrift(format!(
            "no item category named '{WEAPON_CATEGORY_NAME}'"
        )));
    };
    if let Some(other) = candidates.next() {
        return Err(WishlistError::SchemaDrift(format!(
            "multiple item categories named '{WEAPON_CATEGORY_NAME}': {hash} and {other}"
        )));
    }
    Ok(hash)
}

/// All items tagged with the weapon category, in ascending-hash order.
pub fn weapon_definitions<'a>(
    categories: &DefinitionTable<CategoryDefinition>,
    items: &'a DefinitionTable<ItemDefinition>,
) -> WishlistResult<Vec<&'a ItemDefinition>> {
    let weapon_category = weapon_category_hash(categories)?;

    let weapons: Vec<&ItemDefinition> = items
        .values()
        .filter(|item| item.item_category_hashes.contains(&weapon_category))
        .collect();

    info!(
        "Catalog: {} weapons under category {}",
        weapons.len(),
        weapon_category
    );
    Ok(weapons)
}

/// Normalized-name lookups for both sides of the join. Built once from the
/// raw tables, immutable thereafter, passed by reference into the matcher.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    weapons_by_key: BTreeMap<String, DefinitionHash>,
    perks_by_key: BTreeMap<String, DefinitionHash>,
}

impl CatalogIndex {
    /// Build the index straight from the three raw definition tables.
    pub fn build(
        categories: &DefinitionTable<CategoryDefinition>,
        items: &DefinitionTable<ItemDefinition>,
        plug_sets: &DefinitionTable<PlugSetDefinition>,
    ) -> WishlistResult<Self> {
        let weapons = weapon_definitions(categories, items)?;
        let perks = rolls::all_roll_perks(weapons.iter().copied(), items, plug_sets)?;
        Ok(Self::from_parts(&weapons, &perks))
    }

    /// Assemble the index from already-resolved weapon and perk listings.
    ///
    /// When two entries collide under normalization the first one indexed
    /// wins; the input order is ascending hash, so the winner is stable
    /// between runs. Every displaced entry is reported via `warn!`.
    pub fn from_parts(
        weapons: &[&ItemDefinition],
        perks: &BTreeMap<DefinitionHash, String>,
    ) -> Self {
        let mut weapons_by_key = BTreeMap::new();
        for weapon in weapons {
            insert_first_wins(
                &mut weapons_by_key,
                &weapon.display_properties.name,
                weapon.hash,
                "weapon",
            );
        }

        let mut perks_by_key = BTreeMap::new();
        for (hash, name) in perks {
            insert_first_wins(&mut perks_by_key, name, *hash, "perk");
        }

        Self {
            weapons_by_key,
            perks_by_key,
        }
    }

    pub fn weapon(&self, key: &str) -> Option<DefinitionHash> {
        self.weapons_by_key.get(key).copied()
    }

    pub fn perk(&self, key: &str) -> Option<DefinitionHash> {
        self.perks_by_key.get(key).copied()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons_by_key.len()
    }

    pub fn perk_count(&self) -> usize {
        self.perks_by_key.len()
    }
}

/// Index one entry under its normalized key, keeping the first on collision.
/// Entries whose name normalizes to the empty key are unmatchable and are
/// not indexed at all.
fn insert_first_wins(
    map: &mut BTreeMap<String, DefinitionHash>,
    name: &str,
    hash: DefinitionHash,
    kind: &str,
) {
    let key = normalize_name(name);
    if key.is_empty() {
        return;
    }

    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(hash);
        }
        Entry::Occupied(slot) => {
            warn!(
                "Catalog: {kind} '{name}' ({hash}) collides with {} under key '{}'; keeping the first",
                slot.get(),
                slot.key()
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
