//! # Menu Grouping
//!
//! Turns the flat menu into the cards customers pick from: one [`ProcessedGroup`] per
//! traditional dish, each offering the plain dish and its combo.
//!
//! A dish's combo is found by, in order:
//! 1. its explicit `combo_with` link,
//! 2. the first "Combo Meals" entry whose name contains the dish name (case-insensitive),
//! 3. a synthesised `"<dish> & Pap"` at the dish's `combo_price`, or the default price.
//!
//! Everything here is pure and cheap; callers re-derive groups from the fetched menu
//! whenever they need them.

use crate::model::{ItemKind, MenuCategory, MenuItem, MenuItemId, NewCartItem};
use serde::Serialize;

pub const DEFAULT_COMBO_PRICE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DishOption {
    /// `None` for a synthesised combo.
    pub menu_item_id: Option<MenuItemId>,
    pub name: String,
    pub price: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedGroup {
    /// Slug of the traditional dish's name.
    pub id: String,
    /// Upper-cased dish name for display.
    pub name: String,
    pub description: String,
    pub image: String,
    pub traditional: DishOption,
    pub combo: DishOption,
}

impl ProcessedGroup {
    /// The cart line for one of this group's two options.
    ///
    /// The traditional option uses the group slug as its id, the combo `"<slug>-pap"`.
    pub fn cart_item(&self, kind: ItemKind) -> NewCartItem {
        match kind {
            ItemKind::Traditional => NewCartItem::new(
                self.id.clone(),
                self.traditional.name.clone(),
                self.traditional.price,
                kind,
            ),
            ItemKind::Combo => NewCartItem::new(
                format!("{}-pap", self.id),
                self.combo.name.clone(),
                self.combo.price,
                kind,
            ),
        }
    }
}

/// Lower-cases a name and joins its words with `-`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn group_menu(items: &[MenuItem], default_combo_price: u32) -> Vec<ProcessedGroup> {
    items
        .iter()
        .filter(|item| item.category == MenuCategory::TraditionalDishes)
        .map(|item| group_for(item, items, default_combo_price))
        .collect()
}

fn group_for(item: &MenuItem, items: &[MenuItem], default_combo_price: u32) -> ProcessedGroup {
    let slug = slugify(&item.name);
    let combo = find_combo(item, items);

    let combo_option = match combo {
        Some(combo) => DishOption {
            menu_item_id: Some(combo.id),
            name: combo.name.clone(),
            price: combo.price,
            description: combo
                .description
                .clone()
                .unwrap_or_else(|| format!("{} with pap", item.name)),
        },
        None => DishOption {
            menu_item_id: None,
            name: format!("{} & Pap", item.name),
            price: item.combo_price.unwrap_or(default_combo_price),
            description: format!("{} with pap", item.name),
        },
    };

    ProcessedGroup {
        name: item.name.to_uppercase(),
        description: item
            .description
            .clone()
            .unwrap_or_else(|| "Traditional South African dish".to_string()),
        image: format!("/south-african-{slug}.png"),
        traditional: DishOption {
            menu_item_id: Some(item.id),
            name: item.name.clone(),
            price: item.price,
            description: item
                .description
                .clone()
                .unwrap_or_else(|| "Traditional preparation".to_string()),
        },
        combo: combo_option,
        id: slug,
    }
}

fn find_combo<'a>(item: &MenuItem, items: &'a [MenuItem]) -> Option<&'a MenuItem> {
    if let Some(linked) = item
        .combo_with
        .and_then(|id| items.iter().find(|candidate| candidate.id == id))
    {
        return Some(linked);
    }

    let needle = item.name.to_lowercase();
    items.iter().find(|candidate| {
        candidate.category == MenuCategory::ComboMeals
            && candidate.name.to_lowercase().contains(&needle)
    })
}

/// The id of the only menu entry with exactly this name and price, if there is one.
pub fn resolve_menu_item_id(items: &[MenuItem], name: &str, price: u32) -> Option<MenuItemId> {
    let mut matches = items
        .iter()
        .filter(|item| item.name == name && item.price == price);
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItemCreate;

    fn dish(id: u32, name: &str, price: u32, category: MenuCategory) -> MenuItem {
        MenuItem::new(MenuItemId(id), MenuItemCreate::new(name, price, category))
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Chicken  Feet"), "chicken-feet");
        assert_eq!(slugify("Skop"), "skop");
        assert_eq!(slugify("Beef\tStew Special"), "beef-stew-special");
    }

    #[test]
    fn test_substring_match_pairs_combo() {
        let items = vec![
            dish(1, "Mogodu", 75, MenuCategory::TraditionalDishes),
            dish(2, "mogodu & pap", 100, MenuCategory::ComboMeals),
        ];

        let groups = group_menu(&items, DEFAULT_COMBO_PRICE);

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.id, "mogodu");
        assert_eq!(group.name, "MOGODU");
        assert_eq!(group.description, "Traditional South African dish");
        assert_eq!(group.combo.menu_item_id, Some(MenuItemId(2)));
        assert_eq!(group.combo.price, 100);
        assert_eq!(group.combo.description, "Mogodu with pap");
    }

    #[test]
    fn test_explicit_link_beats_substring_match() {
        let mut skop = dish(1, "Skop", 85, MenuCategory::TraditionalDishes);
        skop.combo_with = Some(MenuItemId(3));
        let items = vec![
            skop,
            dish(2, "Skop & Pap", 110, MenuCategory::ComboMeals),
            dish(3, "Sheep Head Platter", 120, MenuCategory::ComboMeals),
        ];

        let groups = group_menu(&items, DEFAULT_COMBO_PRICE);
        assert_eq!(groups[0].combo.menu_item_id, Some(MenuItemId(3)));
        assert_eq!(groups[0].combo.price, 120);
    }

    #[test]
    fn test_missing_combo_is_synthesised() {
        let mut trotters = dish(1, "Trotters", 90, MenuCategory::TraditionalDishes);
        trotters.combo_price = Some(115);
        let items = vec![
            trotters,
            dish(2, "Chicken Feet", 60, MenuCategory::TraditionalDishes),
            dish(3, "Cold Drink", 20, MenuCategory::Other("Drinks".into())),
        ];

        let groups = group_menu(&items, DEFAULT_COMBO_PRICE);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].combo.name, "Trotters & Pap");
        assert_eq!(groups[0].combo.price, 115);
        assert!(groups[0].combo.menu_item_id.is_none());
        assert_eq!(groups[1].combo.price, 100);
        assert_eq!(groups[1].image, "/south-african-chicken-feet.png");
    }

    #[test]
    fn test_cart_items_for_group() {
        let items = vec![
            dish(1, "Mogodu", 75, MenuCategory::TraditionalDishes),
            dish(2, "Mogodu & Pap", 100, MenuCategory::ComboMeals),
        ];
        let group = &group_menu(&items, DEFAULT_COMBO_PRICE)[0];

        let combo = group.cart_item(ItemKind::Combo);
        assert_eq!(combo.id, "mogodu-pap");
        assert_eq!(combo.price, 100);
        let plain = group.cart_item(ItemKind::Traditional);
        assert_eq!(plain.id, "mogodu");
        assert_eq!(plain.name, "Mogodu");
    }

    #[test]
    fn test_resolve_requires_unique_exact_match() {
        let items = vec![
            dish(1, "Skop", 85, MenuCategory::TraditionalDishes),
            dish(2, "Pap", 20, MenuCategory::TraditionalDishes),
            dish(3, "Pap", 20, MenuCategory::Other("Sides".into())),
        ];

        assert_eq!(resolve_menu_item_id(&items, "Skop", 85), Some(MenuItemId(1)));
        assert_eq!(resolve_menu_item_id(&items, "Skop", 90), None);
        assert_eq!(resolve_menu_item_id(&items, "skop", 85), None);
        assert_eq!(resolve_menu_item_id(&items, "Pap", 20), None);
    }
}
