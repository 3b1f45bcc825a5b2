//! # Configuration
//!
//! Settings come from an optional TOML file and `STOREFRONT_*` environment variables,
//! in that order. Every field has a default, so an empty file (or none at all) is a
//! working configuration.
//!
//! ```toml
//! log_level = "debug"
//! admin_pin = "pai2024"
//! default_combo_price = 100
//!
//! [[menu]]
//! name = "Mogodu"
//! price = 75
//! category = "Traditional Dishes"
//! combo = "Mogodu & Pap"
//!
//! [[menu]]
//! name = "Mogodu & Pap"
//! price = 100
//! category = "Combo Meals"
//! ```
//!
//! | Variable | Effect |
//! |---|---|
//! | `STOREFRONT_CONFIG` | path of the TOML file to load |
//! | `STOREFRONT_ADMIN_PIN` | replaces `admin_pin` |
//! | `STOREFRONT_LOG_LEVEL` | replaces `log_level` |

use crate::catalog::DEFAULT_COMBO_PRICE;
use crate::model::{MenuCategory, MenuItemCreate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const ENV_PREFIX: &str = "STOREFRONT_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid environment override: {0}")]
    Env(#[from] envy::Error),

    #[error("channel_buffer must be at least 1")]
    ZeroChannelBuffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Request queue capacity of each table actor.
    pub channel_buffer: usize,
    pub admin_pin: String,
    /// Combo price for dishes with neither a combo entry nor a `combo_price`.
    pub default_combo_price: u32,
    /// Dishes loaded into the menu at startup.
    pub menu: Vec<MenuSeed>,
}

/// One dish in the startup menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSeed {
    pub name: String,
    pub description: Option<String>,
    pub price: u32,
    pub category: MenuCategory,
    pub combo_price: Option<u32>,
    /// Name of this dish's combo entry elsewhere in the list.
    pub combo: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuSeed {
    fn new(name: &str, price: u32, category: MenuCategory) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            price,
            category,
            combo_price: None,
            combo: None,
            available: true,
        }
    }

    /// Insert payload for this dish. The combo link is set after every dish exists.
    pub fn to_create(&self) -> MenuItemCreate {
        MenuItemCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            combo_price: self.combo_price,
            combo_with: None,
            available: self.available,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let mut skop = MenuSeed::new("Skop", 85, MenuCategory::TraditionalDishes);
        skop.description = Some("Slow-cooked sheep's head".to_string());
        skop.combo_price = Some(110);

        let mut mogodu = MenuSeed::new("Mogodu", 75, MenuCategory::TraditionalDishes);
        mogodu.combo = Some("Mogodu & Pap".to_string());

        let mut mogodu_pap = MenuSeed::new("Mogodu & Pap", 100, MenuCategory::ComboMeals);
        mogodu_pap.description = Some("Tripe stew served with pap".to_string());

        Self {
            log_level: "info".to_string(),
            channel_buffer: 32,
            admin_pin: "pai2024".to_string(),
            default_combo_price: DEFAULT_COMBO_PRICE,
            menu: vec![
                skop,
                mogodu,
                MenuSeed::new("Chicken Feet", 50, MenuCategory::TraditionalDishes),
                mogodu_pap,
            ],
        }
    }
}

/// Values read from `STOREFRONT_*` variables.
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    config: Option<PathBuf>,
    admin_pin: Option<String>,
    log_level: Option<String>,
}

impl StorefrontConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the tables cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::vars())
    }

    /// Loads configuration from the given environment variables.
    pub fn load_from<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides: EnvOverrides = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        let mut config = match &overrides.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(pin) = overrides.admin_pin {
            config.admin_pin = pin;
        }
        if let Some(level) = overrides.log_level {
            config.log_level = level;
        }
        config.validate()?;
        Ok(config)
    }
}
