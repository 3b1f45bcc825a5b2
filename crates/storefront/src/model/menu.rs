/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemUpdate`])
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

/// Menu section. Stored as its display label, e.g. `"Traditional Dishes"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MenuCategory {
    TraditionalDishes,
    ComboMeals,
    Other(String),
}

impl MenuCategory {
    pub fn as_str(&self) -> &str {
        match self {
            MenuCategory::TraditionalDishes => "Traditional Dishes",
            MenuCategory::ComboMeals => "Combo Meals",
            MenuCategory::Other(label) => label,
        }
    }
}

impl From<String> for MenuCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Traditional Dishes" => MenuCategory::TraditionalDishes,
            "Combo Meals" => MenuCategory::ComboMeals,
            _ => MenuCategory::Other(label),
        }
    }
}

impl From<&str> for MenuCategory {
    fn from(label: &str) -> Self {
        MenuCategory::from(label.to_string())
    }
}

impl From<MenuCategory> for String {
    fn from(category: MenuCategory) -> Self {
        category.as_str().to_string()
    }
}

impl Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    /// Price in whole Rand.
    pub price: u32,
    pub category: MenuCategory,
    /// Price of the dish's combo when no combo entry exists on the menu.
    pub combo_price: Option<u32>,
    /// Explicit link from a traditional dish to its combo entry.
    pub combo_with: Option<MenuItemId>,
    pub available: bool,
}

impl MenuItem {
    pub fn new(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            combo_price: params.combo_price,
            combo_with: params.combo_with,
            available: params.available,
        }
    }
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: u32,
    pub category: MenuCategory,
    pub combo_price: Option<u32>,
    pub combo_with: Option<MenuItemId>,
    pub available: bool,
}

impl MenuItemCreate {
    /// An available dish with no description, combo price or combo link.
    pub fn new(name: impl Into<String>, price: u32, category: impl Into<MenuCategory>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            combo_price: None,
            combo_with: None,
            available: true,
        }
    }
}

/// Partial update for a menu item. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub price: Option<u32>,
    pub available: Option<bool>,
    pub combo_with: Option<MenuItemId>,
}
