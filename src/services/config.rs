//! Environment-driven configuration for a one-shot run.

use std::env;
use std::path::PathBuf;

use crate::types::errors::{WishlistError, WishlistResult};

const DEFAULT_OUTPUT: &str = "wishlist.txt";
const DEFAULT_TITLE: &str = "Grid rolls";

/// Where the grid export comes from.
#[derive(Debug, Clone)]
pub enum GridSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub grid_source: GridSource,
    pub output_path: PathBuf,
    pub title: String,
    pub description: String,
    /// When set, also dump the weapon/perk lookup CSVs into this directory.
    pub lookup_export_dir: Option<PathBuf>,
}

impl Config {
    /// Assemble configuration from the environment.
    pub fn from_env() -> WishlistResult<Self> {
        let api_key = require("BUNGIE_API_KEY")?;

        let grid_source = match (optional("GRID_SHEET_URL"), optional("GRID_SHEET_PATH")) {
            (Some(url), None) => GridSource::Url(url),
            (None, Some(path)) => GridSource::File(PathBuf::from(path)),
            (Some(_), Some(_)) => {
                return Err(WishlistError::Config(
                    "set only one of GRID_SHEET_URL and GRID_SHEET_PATH".into(),
                ))
            }
            (None, None) => {
                return Err(WishlistError::Config(
                    "set GRID_SHEET_URL or GRID_SHEET_PATH".into(),
                ))
            }
        };

        let description = optional("WISHLIST_DESCRIPTION").unwrap_or_else(|| {
            format!("Generated on {}", chrono::Local::now().format("%Y-%m-%d"))
        });

        Ok(Self {
            api_key,
            grid_source,
            output_path: optional("WISHLIST_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            title: optional("WISHLIST_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description,
            lookup_export_dir: optional("LOOKUP_EXPORT_DIR").map(PathBuf::from),
        })
    }
}

fn require(name: &str) -> WishlistResult<String> {
    optional(name)
        .ok_or_else(|| WishlistError::Config(format!("missing environment variable {name}")))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
