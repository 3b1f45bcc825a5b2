//! # Menu Client
//!
//! The menu catalog reader. Wraps a `ResourceClient<MenuItem>` and exposes the
//! filtered, ordered view the storefront shows to customers.
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<MenuError>() {
                Ok(err) => *err,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every available dish, ordered by category and then name.
    ///
    /// The table has no filtered select, so every row is listed and unavailable dishes
    /// are dropped here, in the client. A failure is returned as-is; there is no retry.
    #[instrument(skip(self))]
    pub async fn fetch_available(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let mut items: Vec<MenuItem> = self
            .inner
            .list()
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .filter(|item| item.available)
            .collect();
        items.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        debug!(count = items.len(), "Fetched available menu");
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn set_available(
        &self,
        id: MenuItemId,
        available: bool,
    ) -> Result<MenuItem, MenuError> {
        let update = MenuItemUpdate {
            available: Some(available),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Point a traditional dish at its combo entry.
    #[instrument(skip(self))]
    pub async fn link_combo(
        &self,
        id: MenuItemId,
        combo: MenuItemId,
    ) -> Result<MenuItem, MenuError> {
        let update = MenuItemUpdate {
            combo_with: Some(combo),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuCategory;
    use actor_framework::mock::{create_mock_client, expect_update, MockClient};

    fn item(id: u32, name: &str, category: MenuCategory, available: bool) -> MenuItem {
        let mut params = MenuItemCreate::new(name, 85, category);
        params.available = available;
        MenuItem::new(MenuItemId(id), params)
    }

    #[tokio::test]
    async fn test_fetch_available_filters_and_orders() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_ok(vec![
            item(1, "Skop", MenuCategory::TraditionalDishes, true),
            item(2, "Mogodu & Pap", MenuCategory::ComboMeals, true),
            item(3, "Chicken Feet", MenuCategory::TraditionalDishes, false),
            item(4, "Mogodu", MenuCategory::TraditionalDishes, true),
        ]);
        let client = MenuClient::new(mock.client());

        let menu = client.fetch_available().await.unwrap();

        let names: Vec<_> = menu.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Mogodu & Pap", "Mogodu", "Skop"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_failure_is_a_readable_error() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let client = MenuClient::new(mock.client());

        let err = client.fetch_available().await.unwrap_err();
        assert_eq!(
            err,
            MenuError::ActorCommunicationError("Actor closed".to_string())
        );
        assert!(err.to_string().contains("Actor closed"));
    }

    #[tokio::test]
    async fn test_set_available_sends_only_availability() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.set_available(MenuItemId(4), false).await });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, MenuItemId(4));
        assert_eq!(update.available, Some(false));
        assert!(update.price.is_none());
        assert!(update.combo_with.is_none());
        responder
            .send(Ok(item(4, "Mogodu", MenuCategory::TraditionalDishes, false)))
            .unwrap();

        let updated = task.await.unwrap().unwrap();
        assert!(!updated.available);
    }
}
