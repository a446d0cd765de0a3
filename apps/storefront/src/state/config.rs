//! # Configuration State
//!
//! Store configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Config file (`--config <path>`, else `storefront.toml` in the
//!    platform config directory)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Avengers Gear Store"
//! currency_code = "USD"
//! currency_symbol = "$"
//! data_layer_enabled = true
//!
//! [notification]
//! fade_after_ms = 500
//! hide_after_ms = 500
//!
//! [[catalog]]
//! id = "shield-001"
//! name = "Vibranium Shield"
//! price = "49.99"
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_core::{Product, ProductAttributes, DEFAULT_CURRENCY};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Title of the confirmation view; not tied to the store name.
pub const THANK_YOU_TITLE: &str = "Thank You - Order Complete";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Shown in the page titles.
    pub store_name: String,

    /// Currency code (ISO 4217) attached to ecommerce events.
    pub currency_code: String,

    /// Currency symbol for cart rows and totals.
    pub currency_symbol: String,

    /// When false the session runs with no data layer at all, like a page
    /// where the tag manager snippet never loaded.
    pub data_layer_enabled: bool,

    /// "Added to cart" toast timings.
    pub notification: NotificationConfig,

    /// Products offered on the home page.
    pub catalog: Vec<CatalogEntry>,
}

/// Timings for the add-to-cart notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Visible → fading.
    pub fade_after_ms: u64,
    /// Fading → hidden.
    pub hide_after_ms: u64,
}

impl NotificationConfig {
    pub fn fade_after(&self) -> Duration {
        Duration::from_millis(self.fade_after_ms)
    }

    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            fade_after_ms: 500,
            hide_after_ms: 500,
        }
    }
}

/// A product card as written in config. Prices stay text until validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl CatalogEntry {
    fn new(id: &str, name: &str, price: &str) -> Self {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    /// The attributes the product card's "add" control carries.
    pub fn attributes(&self) -> ProductAttributes {
        ProductAttributes::new(&self.id, &self.name, &self.price)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Avengers Gear Store".to_string(),
            currency_code: DEFAULT_CURRENCY.to_string(),
            currency_symbol: "$".to_string(),
            data_layer_enabled: true,
            notification: NotificationConfig::default(),
            catalog: vec![
                CatalogEntry::new("shield-001", "Vibranium Shield", "49.99"),
                CatalogEntry::new("hammer-002", "Mjolnir Replica", "79.99"),
                CatalogEntry::new("gauntlet-003", "Infinity Gauntlet", "129.99"),
            ],
        }
    }
}

impl StoreConfig {
    /// Loads configuration: defaults, then file, then environment.
    ///
    /// An explicit `path` must exist. The default location is optional.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => StoreConfig::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => StoreConfig::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    StoreConfig::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded store config");
        Ok(config)
    }

    /// Applies `STOREFRONT_*` overrides through a lookup function.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: store name in page titles
    /// - `STOREFRONT_CURRENCY`: currency code on ecommerce events
    /// - `STOREFRONT_DATA_LAYER`: `off`/`false`/`0` disables the data layer
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(currency) = lookup("STOREFRONT_CURRENCY") {
            self.currency_code = currency;
        }

        if let Some(flag) = lookup("STOREFRONT_DATA_LAYER") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "off" | "false" | "0" => self.data_layer_enabled = false,
                "on" | "true" | "1" => self.data_layer_enabled = true,
                other => warn!(value = other, "Ignoring STOREFRONT_DATA_LAYER"),
            }
        }
    }

    pub fn home_title(&self) -> String {
        format!("{} - Home", self.store_name)
    }

    pub fn cart_title(&self) -> String {
        format!("{} - Cart", self.store_name)
    }

    pub fn thank_you_title(&self) -> &'static str {
        THANK_YOU_TITLE
    }

    /// Validates every catalog entry into a product.
    pub fn products(&self) -> AppResult<Vec<Product>> {
        self.catalog
            .iter()
            .map(|entry| {
                Product::try_from(&entry.attributes()).map_err(|source| {
                    AppError::InvalidCatalogEntry {
                        id: entry.id.clone(),
                        source,
                    }
                })
            })
            .collect()
    }

    /// Looks up a catalog entry by product id.
    pub fn catalog_entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|e| e.id == id)
    }
}

/// `storefront.toml` in the platform config directory.
///
/// - **Linux**: `~/.config/storefront/storefront.toml`
/// - **macOS**: `~/Library/Application Support/com.storefront.storefront/storefront.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "storefront", "storefront")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.home_title(), "Avengers Gear Store - Home");
        assert_eq!(config.cart_title(), "Avengers Gear Store - Cart");
        assert_eq!(config.thank_you_title(), "Thank You - Order Complete");
        assert_eq!(config.notification.fade_after(), Duration::from_millis(500));
        assert_eq!(config.products().unwrap().len(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            store_name = "Test Store"

            [notification]
            fade_after_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Test Store");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.notification.fade_after_ms, 100);
        assert_eq!(config.notification.hide_after_ms, 500);
        assert_eq!(config.catalog.len(), 3);
    }

    #[test]
    fn test_from_file_with_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            data_layer_enabled = false

            [[catalog]]
            id = "cape-010"
            name = "Cloak of Levitation"
            price = "59.50"
            "#
        )
        .unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert!(!config.data_layer_enabled);
        let products = config.products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.cents(), Some(5950));
    }

    #[test]
    fn test_from_file_errors() {
        let missing = StoreConfig::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(AppError::ConfigRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_name = [").unwrap();
        assert!(matches!(
            StoreConfig::from_file(file.path()),
            Err(AppError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_invalid_catalog_entry() {
        let mut config = StoreConfig::default();
        config.catalog.push(CatalogEntry::new("bad", "Bad", "cheap"));
        assert!(matches!(
            config.products(),
            Err(AppError::InvalidCatalogEntry { ref id, .. }) if id == "bad"
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_STORE_NAME", "Env Store"),
            ("STOREFRONT_CURRENCY", "EUR"),
            ("STOREFRONT_DATA_LAYER", "off"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Env Store");
        assert_eq!(config.currency_code, "EUR");
        assert!(!config.data_layer_enabled);
    }

    #[test]
    fn test_env_ignores_unknown_flag() {
        let mut config = StoreConfig::default();
        config.apply_env(|key| (key == "STOREFRONT_DATA_LAYER").then(|| "maybe".to_string()));
        assert!(config.data_layer_enabled);
    }

    #[test]
    fn test_catalog_lookup() {
        let config = StoreConfig::default();
        let entry = config.catalog_entry("hammer-002").unwrap();
        assert_eq!(entry.attributes().price, "79.99");
        assert!(config.catalog_entry("nope").is_none());
    }
}
