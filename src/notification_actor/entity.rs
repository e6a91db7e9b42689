use std::convert::Infallible;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::Notification;
use super::actions::NotificationAction;

impl Entity for Notification {
    type Id = u64;
    type CreateParams = Infallible;
    type Patch = Infallible;
    type Action = NotificationAction;
    /// Whether the notification was unread before the action.
    type ActionResult = bool;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(_id: u64, params: Infallible) -> Result<Self, FrameworkError> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), FrameworkError> {
        match patch {}
    }

    fn handle_action(&mut self, action: NotificationAction) -> Result<bool, FrameworkError> {
        match action {
            NotificationAction::MarkRead => {
                let was_new = self.is_new;
                self.is_new = false;
                Ok(was_new)
            }
        }
    }
}
