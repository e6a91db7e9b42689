use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::checkout::CheckoutHandoff;
use crate::domain::{CartCreate, CartItem, CartPatch, CartSummary};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
    shipping_fee: u64,
}

impl_client_methods!(CartClient, CartItem, CartError, cart_item);
impl_swipe_removal!(CartClient, CartItem, CartError, cart_item);

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>, shipping_fee: u64) -> Self {
        Self { inner, shipping_fee }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, item: CartCreate) -> Result<u64, CartError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(CartError::from)
    }

    /// Flips the selection of one line and returns the new state.
    #[instrument(skip(self))]
    pub async fn toggle_selected(&self, id: u64) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CartAction::ToggleSelected).await? {
            CartActionResult::ToggleSelected(selected) => Ok(selected),
            other => Err(CartError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn adjust_quantity(&self, id: u64, delta: i32) -> Result<u32, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CartAction::AdjustQuantity(delta)).await? {
            CartActionResult::AdjustQuantity(quantity) => Ok(quantity),
            other => Err(CartError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Selects every line, or clears the selection when everything is already selected.
    ///
    /// Returns the selection state applied to all lines.
    #[instrument(skip(self))]
    pub async fn toggle_select_all(&self) -> Result<bool, CartError> {
        let items = self.inner.list().await?;
        let select = !items.iter().all(|item| item.selected);
        for item in items.iter().filter(|item| item.selected != select) {
            let patch = CartPatch { selected: Some(select), ..CartPatch::default() };
            self.inner.update(item.id, patch).await?;
        }
        debug!(select, lines = items.len(), "Selection applied");
        Ok(select)
    }

    /// Totals over the currently selected lines.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.inner.snapshot(), self.shipping_fee)
    }

    /// Packages the selected lines for the checkout screen.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<CheckoutHandoff, CartError> {
        let items = self.inner.list().await?;
        let handoff = CheckoutHandoff::from_items(
            items.into_iter().filter(|item| item.selected).collect(),
            self.shipping_fee,
        );
        if handoff.items.is_empty() {
            return Err(CartError::NothingSelected);
        }
        info!(lines = handoff.items.len(), total = handoff.total, "Checkout prepared");
        Ok(handoff)
    }
}
