//! Raw definition records from the content blobs.
//!
//! Each blob is a heterogeneous attribute bag keyed by stringified hash;
//! only the fields the pipeline reads are modeled, everything else is
//! dropped on deserialization. Optional attributes default so that sparse
//! records (items without sockets, categories without names) still decode.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Canonical identifier used uniformly across every definition table.
pub type DefinitionHash = u32;

/// A definition table decoded with native integer keys. `BTreeMap` keeps
/// every later iteration in ascending-hash order, so "first" is always the
/// same entry between runs.
pub type DefinitionTable<T> = BTreeMap<DefinitionHash, T>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayProperties {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    pub hash: DefinitionHash,
    #[serde(default)]
    pub display_properties: DisplayProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub hash: DefinitionHash,
    #[serde(default)]
    pub display_properties: DisplayProperties,
    #[serde(default)]
    pub item_category_hashes: Vec<DefinitionHash>,
    #[serde(default)]
    pub sockets: SocketBlock,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketBlock {
    #[serde(default)]
    pub socket_entries: Vec<SocketEntry>,
}

/// One socket on an item. A fixed socket carries no randomized plug-set
/// reference and never contributes to rolls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketEntry {
    #[serde(default)]
    pub randomized_plug_set_hash: Option<DefinitionHash>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugSetDefinition {
    pub hash: DefinitionHash,
    #[serde(default)]
    pub reusable_plug_items: Vec<ReusablePlugItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReusablePlugItem {
    pub plug_item_hash: DefinitionHash,
}
