//! [`ActorEntity`] implementation for [`MenuItem`].

use super::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(MenuError::ValidationError(
                "menu item name must not be empty".to_string(),
            ));
        }
        Ok(Self::new(id, params))
    }

    /// Applies price, availability and combo-link changes.
    ///
    /// A dish cannot be linked to itself as its own combo.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if update.combo_with == Some(self.id) {
            return Err(MenuError::ValidationError(format!(
                "{} cannot be its own combo",
                self.id
            )));
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(combo) = update.combo_with {
            self.combo_with = Some(combo);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuCategory;

    #[test]
    fn test_blank_name_is_rejected() {
        let params = MenuItemCreate::new("  ", 85, MenuCategory::TraditionalDishes);
        let result = MenuItem::from_create_params(MenuItemId(1), params);
        assert!(matches!(result, Err(MenuError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_toggles_availability_and_links_combo() {
        let params = MenuItemCreate::new("Mogodu", 75, MenuCategory::TraditionalDishes);
        let mut item = MenuItem::from_create_params(MenuItemId(1), params).unwrap();

        item.on_update(
            MenuItemUpdate {
                available: Some(false),
                combo_with: Some(MenuItemId(2)),
                ..Default::default()
            },
            &(),
        )
        .await
        .unwrap();

        assert!(!item.available);
        assert_eq!(item.combo_with, Some(MenuItemId(2)));
        assert_eq!(item.price, 75);
    }

    #[tokio::test]
    async fn test_self_link_is_rejected() {
        let params = MenuItemCreate::new("Skop", 85, MenuCategory::TraditionalDishes);
        let mut item = MenuItem::from_create_params(MenuItemId(3), params).unwrap();

        let result = item
            .on_update(
                MenuItemUpdate {
                    combo_with: Some(MenuItemId(3)),
                    ..Default::default()
                },
                &(),
            )
            .await;
        assert!(matches!(result, Err(MenuError::ValidationError(_))));
    }
}
