pub mod services;
pub mod types;

use std::fs;

use log::info;

use services::bungie::BungieClient;
use services::catalog::index::{self, CatalogIndex};
use services::catalog::records::{
    CategoryDefinition, DefinitionHash, DefinitionTable, ItemDefinition, PlugSetDefinition,
};
use services::catalog::rolls;
use services::config::{Config, GridSource};
use services::grid::{matcher, sheet};
use services::wishlist::encoder;
use services::{bungie, export};
use types::errors::WishlistResult;

/// Run the whole pipeline: fetch, resolve, match, encode, write.
///
/// Everything is pulled to completion before any matching begins; any
/// fetch or catalog-construction failure aborts the run with no partial
/// output. Only row-level lookup misses are survivable.
pub fn run(config: &Config) -> WishlistResult<()> {
    let client = BungieClient::new(&config.api_key)?;

    let manifest = client.fetch_manifest()?;
    let categories: DefinitionTable<CategoryDefinition> =
        client.fetch_component(&manifest, bungie::CATEGORY_COMPONENT)?;
    let items: DefinitionTable<ItemDefinition> =
        client.fetch_component(&manifest, bungie::ITEM_COMPONENT)?;
    let plug_sets: DefinitionTable<PlugSetDefinition> =
        client.fetch_component(&manifest, bungie::PLUG_SET_COMPONENT)?;

    let weapons = index::weapon_definitions(&categories, &items)?;
    let perks = rolls::all_roll_perks(weapons.iter().copied(), &items, &plug_sets)?;

    if let Some(dir) = &config.lookup_export_dir {
        let weapon_rows: Vec<(String, DefinitionHash)> = weapons
            .iter()
            .map(|weapon| (weapon.display_properties.name.clone(), weapon.hash))
            .collect();
        let perk_rows: Vec<(String, DefinitionHash)> = perks
            .iter()
            .map(|(hash, name)| (name.clone(), *hash))
            .collect();

        export::write_lookup_csv(&dir.join("weapon_names.csv"), &weapon_rows)?;
        export::write_lookup_csv(&dir.join("perk_names.csv"), &perk_rows)?;
    }

    let catalog = CatalogIndex::from_parts(&weapons, &perks);
    info!(
        "Catalog index ready: {} weapons, {} perks",
        catalog.weapon_count(),
        catalog.perk_count()
    );

    let grid_text = match &config.grid_source {
        GridSource::Url(url) => client.fetch_text(url)?,
        GridSource::File(path) => fs::read_to_string(path)?,
    };
    let rows = sheet::parse_grid(&grid_text)?;

    let outcome = matcher::match_rows(&rows, &catalog);

    let body = encoder::render_wishlist(&config.title, &config.description, &outcome.matched);
    fs::write(&config.output_path, body)?;

    info!(
        "Wrote {} directives to {} ({} rows skipped)",
        outcome.matched.len(),
        config.output_path.display(),
        outcome.skipped.len()
    );
    Ok(())
}
