//! Demo run: seed the menu, place an order through a cart, and walk it through the
//! kitchen on the order board.

use storefront::admin::AdminGate;
use storefront::board::{available_actions, BoardAction};
use storefront::catalog::group_menu;
use storefront::checkout::CheckoutForm;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::model::ItemKind;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!("Starting storefront");
    let system = StorefrontSystem::new(&config);
    system
        .seed_menu(&config.menu)
        .await
        .map_err(|e| e.to_string())?;

    // Customer side
    let span = tracing::info_span!("customer");
    let confirmation = async {
        let menu = system
            .menu_client
            .fetch_available()
            .await
            .map_err(|e| e.to_string())?;
        let groups = group_menu(&menu, system.default_combo_price());
        info!(groups = groups.len(), "Menu loaded");

        let cart = system
            .cart_client
            .open_cart()
            .await
            .map_err(|e| e.to_string())?;
        if let Some(first) = groups.first() {
            let plain = first.cart_item(ItemKind::Traditional);
            system.cart_client.add_item(cart, plain.clone()).await.map_err(|e| e.to_string())?;
            system.cart_client.add_item(cart, plain).await.map_err(|e| e.to_string())?;
        }
        if let Some(second) = groups.get(1) {
            let combo = second.cart_item(ItemKind::Combo);
            system.cart_client.add_item(cart, combo).await.map_err(|e| e.to_string())?;
        }
        let state = system.cart_client.state(cart).await.map_err(|e| e.to_string())?;
        info!(items = state.total_item_count(), subtotal = state.subtotal(), "Cart ready");

        let form = CheckoutForm {
            full_name: "Thabo Mokoena".to_string(),
            phone_number: "+27 81 454 1020".to_string(),
            pickup_location: "montana".to_string(),
            special_instructions: None,
            payment_method: "cash_on_pickup".to_string(),
        };
        system
            .checkout()
            .submit(cart, &form)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(path = %confirmation.path, "Customer redirected");

    // Kitchen side
    let span = tracing::info_span!("kitchen");
    async {
        let session = system
            .admin_gate()
            .login(&config.admin_pin)
            .map_err(|e| e.to_string())?;
        info!(since = %session.started_at, "Admin session open");

        AdminGate::require(Some(&session)).map_err(|e| e.to_string())?;
        let mut board = system.board();
        board.mount().await.map_err(|e| e.to_string())?;

        let id = confirmation.order_id;
        loop {
            let Some(row) = board.orders().into_iter().find(|row| row.order.id == id) else {
                warn!(%id, "Order missing from board");
                break;
            };
            let Some(action) = available_actions(&row.order).into_iter().next() else {
                break;
            };
            match action {
                BoardAction::Advance(_) => {
                    let status = board.advance(id).await.map_err(|e| e.to_string())?;
                    info!(%id, %status, "Order advanced");
                }
                BoardAction::MarkPaid => {
                    board.mark_paid(id).await.map_err(|e| e.to_string())?;
                    info!(%id, "Payment received");
                }
            }
        }

        info!(stats = ?board.stats(), "Board summary");
        board.unmount();
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Storefront stopped");
    Ok(())
}
