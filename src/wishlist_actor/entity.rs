use std::convert::Infallible;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::WishlistItem;

impl Entity for WishlistItem {
    type Id = u64;
    type CreateParams = Infallible;
    type Patch = Infallible;
    type Action = Infallible;
    type ActionResult = ();

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(_id: u64, params: Infallible) -> Result<Self, FrameworkError> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), FrameworkError> {
        match patch {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), FrameworkError> {
        match action {}
    }
}
