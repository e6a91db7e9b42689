use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{CartCreate, CartItem, CartPatch};
use super::actions::{CartAction, CartActionResult};

impl Entity for CartItem {
    type Id = u64;
    type CreateParams = CartCreate;
    type Patch = CartPatch;
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// New lines start unselected.
    fn from_create_params(id: u64, params: CartCreate) -> Result<Self, FrameworkError> {
        Ok(CartItem::new(id, params.name, params.price, params.quantity, params.image_ref))
    }

    fn on_update(&mut self, patch: CartPatch) -> Result<(), FrameworkError> {
        if let Some(quantity) = patch.quantity {
            if quantity == 0 {
                return Err(FrameworkError::Rejected("Quantity must be at least 1".into()));
            }
            self.quantity = quantity;
        }
        if let Some(selected) = patch.selected {
            self.selected = selected;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, FrameworkError> {
        match action {
            CartAction::ToggleSelected => {
                self.selected = !self.selected;
                Ok(CartActionResult::ToggleSelected(self.selected))
            }
            CartAction::AdjustQuantity(delta) => {
                let adjusted = i64::from(self.quantity) + i64::from(delta);
                self.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
                Ok(CartActionResult::AdjustQuantity(self.quantity))
            }
        }
    }
}
