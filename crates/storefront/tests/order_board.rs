use std::time::Duration;
use storefront::board::{available_actions, BoardAction, BoardError};
use storefront::checkout::CheckoutForm;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{ItemKind, NewCartItem, OrderId, OrderStatus, PaymentStatus};
use storefront::order_actor::OrderError;
use tokio::time::timeout;

async fn seeded_system() -> StorefrontSystem {
    let config = StorefrontConfig::default();
    let system = StorefrontSystem::new(&config);
    system.seed_menu(&config.menu).await.unwrap();
    system
}

async fn place_order(system: &StorefrontSystem, payment_method: &str) -> OrderId {
    let cart = system.cart_client.open_cart().await.unwrap();
    system
        .cart_client
        .add_item(cart, NewCartItem::new("skop", "Skop", 85, ItemKind::Traditional))
        .await
        .unwrap();
    let form = CheckoutForm {
        full_name: "Naledi".to_string(),
        phone_number: "+27814541020".to_string(),
        pickup_location: "annlin".to_string(),
        special_instructions: None,
        payment_method: payment_method.to_string(),
    };
    system
        .checkout()
        .submit(cart, &form)
        .await
        .unwrap()
        .order_id
}

#[tokio::test]
async fn test_board_follows_new_orders() {
    let system = seeded_system().await;
    let mut board = system.board();
    board.mount().await.unwrap();
    assert!(board.orders().is_empty());

    let mut snapshots = board.watch();
    let first = place_order(&system, "cash_on_pickup").await;
    let second = place_order(&system, "online").await;

    timeout(
        Duration::from_secs(2),
        snapshots.wait_for(|rows| rows.len() == 2),
    )
    .await
    .expect("board did not refresh")
    .expect("board closed");

    let rows = board.orders();
    // Newest first.
    assert_eq!(rows[0].order.id, second);
    assert_eq!(rows[1].order.id, first);
    assert_eq!(rows[1].lines[0].name.as_deref(), Some("Skop"));
    assert_eq!(board.stats().pending, 2);

    assert!(board.unmount());
    drop(board);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_store_does_not_guard_raw_status_writes() {
    let system = seeded_system().await;
    let id = place_order(&system, "cash_on_pickup").await;
    let board = system.board();

    let row = board
        .refresh()
        .await
        .unwrap()
        .into_iter()
        .find(|row| row.order.id == id)
        .unwrap();
    assert!(!available_actions(&row.order)
        .contains(&BoardAction::Advance(OrderStatus::Collected)));

    // Not offered by the board, but the write itself goes through.
    board
        .set_order_status(id, OrderStatus::Collected)
        .await
        .unwrap();

    let row = board.orders().into_iter().find(|row| row.order.id == id).unwrap();
    assert_eq!(row.order.order_status, OrderStatus::Collected);
    assert_eq!(row.order.payment_status, PaymentStatus::Pending);

    drop(board);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_requires_payment_before_collection() {
    let system = seeded_system().await;
    let id = place_order(&system, "cash_on_pickup").await;
    let board = system.board();

    assert_eq!(board.advance(id).await.unwrap(), OrderStatus::Preparing);
    assert_eq!(board.advance(id).await.unwrap(), OrderStatus::Ready);
    assert_eq!(
        board.advance(id).await,
        Err(BoardError::Order(OrderError::PaymentRequired {
            id,
            to: OrderStatus::Collected
        }))
    );

    board.mark_paid(id).await.unwrap();
    assert_eq!(board.advance(id).await.unwrap(), OrderStatus::Collected);
    assert_eq!(board.advance(id).await.unwrap(), OrderStatus::Completed);
    assert_eq!(
        board.advance(id).await,
        Err(BoardError::Order(OrderError::AlreadyCompleted(id)))
    );
    assert_eq!(board.stats().completed, 1);

    drop(board);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_subscription_is_taken_and_released_once() {
    let system = seeded_system().await;
    let mut board = system.board();

    board.mount().await.unwrap();
    assert_eq!(board.mount().await, Err(BoardError::AlreadyMounted));
    assert!(board.is_mounted());

    assert!(board.unmount());
    assert!(!board.unmount());
    assert!(!board.is_mounted());

    drop(board);
    timeout(Duration::from_secs(2), system.shutdown())
        .await
        .expect("actors did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_unknown_order_update_is_rejected() {
    let system = seeded_system().await;
    let board = system.board();

    let result = board
        .set_payment_status(OrderId(99), PaymentStatus::Paid)
        .await;
    assert_eq!(
        result,
        Err(BoardError::Order(OrderError::NotFound("order_99".to_string())))
    );

    drop(board);
    system.shutdown().await.unwrap();
}
