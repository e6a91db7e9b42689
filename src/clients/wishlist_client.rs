use tracing::{info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::CartClient;
use crate::domain::{CartCreate, WishlistItem};
use crate::wishlist_actor::WishlistError;

/// Client for interacting with the wishlist store.
#[derive(Clone)]
pub struct WishlistClient {
    inner: ResourceClient<WishlistItem>,
}

impl_basic_client!(WishlistClient, WishlistItem, WishlistError, wishlist_item);
impl_swipe_removal!(WishlistClient, WishlistItem, WishlistError, wishlist_item);

impl WishlistClient {
    /// Copies a saved product into the cart as a new, unselected line.
    ///
    /// The wishlist entry stays where it is.
    #[instrument(skip(self, cart))]
    pub async fn add_to_cart(&self, id: u64, cart: &CartClient) -> Result<u64, WishlistError> {
        let item = self
            .inner
            .get(id)
            .await?
            .ok_or_else(|| WishlistError::NotFound(id.to_string()))?;

        if !item.in_stock {
            warn!(product = %item.name, "Product out of stock");
            return Err(WishlistError::OutOfStock(item.name));
        }

        let line = CartCreate {
            name: item.name,
            price: item.price,
            quantity: 1,
            image_ref: item.image_ref,
        };
        let cart_id = cart.add_item(line).await?;
        info!(cart_id, "Added to cart");
        Ok(cart_id)
    }
}
