use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::checkout::{CheckoutHandoff, CheckoutSession};
use crate::clients::{CartClient, NotificationClient, OrderClient, WishlistClient};
use super::{seed, AppError, ShopSettings};

/// First order number handed out by checkout.
const FIRST_ORDER_NUMBER: u64 = 2002;

/// The running storefront: one store actor per list.
///
/// Responsible for seeding and starting the actors, wiring the clients and
/// handling shutdown.
pub struct ShopSystem {
    pub order_client: OrderClient,
    pub cart_client: CartClient,
    pub wishlist_client: WishlistClient,
    pub notification_client: NotificationClient,
    settings: ShopSettings,
    order_numbers: Arc<AtomicU64>,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new(settings: ShopSettings) -> Self {
        let mut handles = Vec::new();

        let orders = spawn_store("orders", &settings, seed::orders(), &mut handles);
        let order_client = OrderClient::new(orders);

        let cart = spawn_store("cart", &settings, seed::cart(), &mut handles);
        let cart_client = CartClient::new(cart, settings.shipping_fee);

        let wishlist = spawn_store("wishlist", &settings, seed::wishlist(), &mut handles);
        let wishlist_client = WishlistClient::new(wishlist);

        let notifications = spawn_store("notifications", &settings, seed::notifications(), &mut handles);
        let notification_client = NotificationClient::new(notifications);

        info!(stores = handles.len(), "Shop system started");
        Self {
            order_client,
            cart_client,
            wishlist_client,
            notification_client,
            settings,
            order_numbers: Arc::new(AtomicU64::new(FIRST_ORDER_NUMBER)),
            handles,
        }
    }

    pub fn settings(&self) -> &ShopSettings {
        &self.settings
    }

    /// Opens the checkout screen for `handoff` under a fresh order number.
    pub fn start_checkout(&self, handoff: CheckoutHandoff) -> CheckoutSession {
        let order_number = self.order_numbers.fetch_add(1, Ordering::SeqCst);
        CheckoutSession::new(
            handoff,
            order_number,
            self.settings.estimated_delivery.clone(),
            self.settings.receipt_redirect(),
        )
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        // Stores stop once every client is gone and their mailboxes close.
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.wishlist_client);
        drop(self.notification_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(AppError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Ids for new rows continue after the highest seeded id.
fn id_sequence(after: u64) -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(after + 1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

fn spawn_store<T>(
    label: &'static str,
    settings: &ShopSettings,
    rows: Vec<T>,
    handles: &mut Vec<JoinHandle<()>>,
) -> ResourceClient<T>
where
    T: Entity<Id = u64>,
{
    let last_id = rows.iter().map(|item| *item.id()).max().unwrap_or(0);
    let (actor, client) = ResourceActor::seeded(label, settings.buffer_size, id_sequence(last_id), rows);
    handles.push(tokio::spawn(actor.run()));
    client
}
