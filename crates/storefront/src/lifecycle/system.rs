use crate::admin::AdminGate;
use crate::board::OrderBoard;
use crate::checkout::CheckoutService;
use crate::clients::{CartClient, MenuClient, OrderClient};
use crate::config::{MenuSeed, StorefrontConfig};
use crate::menu_actor::MenuError;
use crate::model::MenuItemId;
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Starts and stops the storefront's tables and hands out the services built on them.
///
/// # Architecture
///
/// Three table actors, none of which depend on each other:
/// - **Menu**: the dishes on offer
/// - **Orders**: submitted orders with their line items
/// - **Carts**: one cart per customer session
///
/// # Example
///
/// ```rust
/// use storefront::config::StorefrontConfig;
/// use storefront::lifecycle::StorefrontSystem;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), String> {
/// let config = StorefrontConfig::default();
/// let system = StorefrontSystem::new(&config);
/// system.seed_menu(&config.menu).await.map_err(|e| e.to_string())?;
///
/// let menu = system.menu_client.fetch_available().await.map_err(|e| e.to_string())?;
/// assert!(!menu.is_empty());
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct StorefrontSystem {
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub cart_client: CartClient,

    admin_pin: String,
    default_combo_price: u32,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns every table actor. Must be called inside a Tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Self {
        let (menu_actor, menu_client) = crate::menu_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);
        let (cart_actor, cart_client) = crate::cart_actor::new(config.channel_buffer);

        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));

        Self {
            menu_client,
            order_client,
            cart_client,
            admin_pin: config.admin_pin.clone(),
            default_combo_price: config.default_combo_price,
            handles: vec![menu_handle, order_handle, cart_handle],
        }
    }

    /// Inserts the given dishes, then links each dish to its named combo.
    ///
    /// A combo name that matches no seeded dish is logged and skipped.
    pub async fn seed_menu(&self, seeds: &[MenuSeed]) -> Result<Vec<MenuItemId>, MenuError> {
        let mut ids = Vec::with_capacity(seeds.len());
        let mut by_name = HashMap::new();
        for seed in seeds {
            let id = self.menu_client.create_menu_item(seed.to_create()).await?;
            by_name.insert(seed.name.as_str(), id);
            ids.push(id);
        }

        for (seed, id) in seeds.iter().zip(&ids) {
            let Some(combo_name) = &seed.combo else {
                continue;
            };
            match by_name.get(combo_name.as_str()) {
                Some(combo_id) => {
                    self.menu_client.link_combo(*id, *combo_id).await?;
                }
                None => warn!(dish = %seed.name, combo = %combo_name, "Unknown combo, not linked"),
            }
        }

        info!(count = ids.len(), "Menu seeded");
        Ok(ids)
    }

    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(
            self.menu_client.clone(),
            self.order_client.clone(),
            self.cart_client.clone(),
        )
    }

    /// A fresh, unmounted order board. Unmount or drop it before [`shutdown`](Self::shutdown).
    pub fn board(&self) -> OrderBoard {
        OrderBoard::new(self.order_client.clone(), self.menu_client.clone())
    }

    pub fn admin_gate(&self) -> AdminGate {
        AdminGate::new(self.admin_pin.clone())
    }

    pub fn default_combo_price(&self) -> u32 {
        self.default_combo_price
    }

    /// Drops every client and waits for the actors to finish.
    ///
    /// Services handed out earlier hold client clones; they must be dropped first or
    /// the matching actor keeps running.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Closing the last sender ends each actor's receive loop.
        drop(self.menu_client);
        drop(self.order_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
