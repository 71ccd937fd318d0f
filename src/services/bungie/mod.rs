//! Blocking client for the platform manifest and content-blob endpoints.
//!
//! The manifest is the root index into the content blobs: pulling the three
//! definition components separately avoids downloading the entirety of the
//! game data every run. The API is self-referential and undocumented;
//! spelunking is best done through <https://data.destinysets.com>.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::services::catalog::records::DefinitionTable;
use crate::types::errors::{WishlistError, WishlistResult};

/// Host serving both the platform API and the content blobs.
const PLATFORM_HOST: &str = "https://www.bungie.net";

/// Manifest endpoint.
const MANIFEST_URL: &str = "https://www.bungie.net/Platform/Destiny2/Manifest/";

/// Locale whose content paths are resolved.
const LOCALE: &str = "en";

/// Header carrying the API key on every platform request.
const API_KEY_HEADER: &str = "X-API-Key";

/// Content components the pipeline consumes.
pub const ITEM_COMPONENT: &str = "DestinyInventoryItemDefinition";
pub const CATEGORY_COMPONENT: &str = "DestinyItemCategoryDefinition";
pub const PLUG_SET_COMPONENT: &str = "DestinyPlugSetDefinition";

/// Platform envelope wrapped around every API payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope<T> {
    error_status: String,
    #[serde(default)]
    message: String,
    response: Option<T>,
}

/// Root index mapping component names to content-blob URL paths, per locale.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    json_world_component_content_paths: HashMap<String, HashMap<String, String>>,
}

impl Manifest {
    /// URL path of a component's content blob for the configured locale.
    fn component_path(&self, component: &str) -> WishlistResult<&str> {
        self.json_world_component_content_paths
            .get(LOCALE)
            .and_then(|paths| paths.get(component))
            .map(String::as_str)
            .ok_or_else(|| {
                WishlistError::SchemaDrift(format!(
                    "manifest has no '{LOCALE}' content path for {component}"
                ))
            })
    }
}

pub struct BungieClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl BungieClient {
    pub fn new(api_key: &str) -> WishlistResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
        })
    }

    /// Fetch and validate the manifest envelope.
    pub fn fetch_manifest(&self) -> WishlistResult<Manifest> {
        info!("Fetching manifest");
        self.try_fetch_manifest()
            .map_err(|e| WishlistError::Fetch(format!("manifest: {e}")))
    }

    /// Download one content blob and decode it with native integer keys.
    pub fn fetch_component<T: DeserializeOwned>(
        &self,
        manifest: &Manifest,
        component: &str,
    ) -> WishlistResult<DefinitionTable<T>> {
        let url = format!("{PLATFORM_HOST}{}", manifest.component_path(component)?);
        info!("Fetching content blob: {component}");
        self.try_get_json(&url)
            .map_err(|e| WishlistError::Fetch(format!("{component}: {e}")))
    }

    /// Fetch an arbitrary text document (the spreadsheet export).
    pub fn fetch_text(&self, url: &str) -> WishlistResult<String> {
        self.try_fetch_text(url)
            .map_err(|e| WishlistError::Fetch(format!("grid export: {e}")))
    }

    fn try_fetch_manifest(&self) -> anyhow::Result<Manifest> {
        let envelope: Envelope<Manifest> = self.try_get_json(MANIFEST_URL)?;

        if envelope.error_status != "Success" {
            anyhow::bail!("{} ({})", envelope.error_status, envelope.message);
        }
        envelope
            .response
            .context("envelope carried no response body")
    }

    fn try_get_json<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!("GET {url}: HTTP {}", response.status());
        }
        Ok(response.json()?)
    }

    fn try_fetch_text(&self, url: &str) -> anyhow::Result<String> {
        let response = self.http.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("GET {url}: HTTP {}", response.status());
        }
        Ok(response.text()?)
    }
}
