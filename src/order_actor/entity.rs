use std::convert::Infallible;
use tracing::{info, warn};
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{CancellationStatus, Order, OrderStatus};
use super::actions::{OrderAction, TransitionOutcome};

impl Entity for Order {
    type Id = u64;
    // Orders only exist through seeding and change only through actions.
    type CreateParams = Infallible;
    type Patch = Infallible;
    type Action = OrderAction;
    type ActionResult = TransitionOutcome;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(_id: u64, params: Infallible) -> Result<Self, FrameworkError> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), FrameworkError> {
        match patch {}
    }

    fn on_delete(&self) -> Result<(), FrameworkError> {
        Err(FrameworkError::Rejected(format!("Order {} cannot be deleted", self.id)))
    }

    /// An ignored request may become valid once the order moves on.
    fn acknowledges(outcome: &TransitionOutcome) -> bool {
        outcome.is_applied()
    }

    /// Applies one lifecycle transition.
    ///
    /// Unmet preconditions are not errors. They are logged and reported as
    /// [`TransitionOutcome::Ignored`].
    fn handle_action(&mut self, action: OrderAction) -> Result<TransitionOutcome, FrameworkError> {
        let from = self.status;
        let name = action.name();
        let applied = match (from, action) {
            (OrderStatus::ToPay, OrderAction::Cancel { reason }) => {
                self.status = OrderStatus::Cancelled;
                self.cancellation_status = Some(CancellationStatus::Processing);
                self.cancellation_reason = Some(reason);
                true
            }
            (OrderStatus::ToShip, OrderAction::Ship) => {
                self.status = OrderStatus::ToReceive;
                true
            }
            (OrderStatus::ToReceive, OrderAction::Complete) => {
                self.status = OrderStatus::Completed;
                true
            }
            (OrderStatus::Completed, OrderAction::Rate) if !self.is_rated => {
                self.is_rated = true;
                true
            }
            (OrderStatus::Completed, OrderAction::RequestReturn { reason }) => {
                self.status = OrderStatus::ReturnRefunded;
                self.cancellation_status = Some(CancellationStatus::Processing);
                self.cancellation_reason = Some(reason);
                true
            }
            (
                OrderStatus::Cancelled | OrderStatus::ReturnRefunded,
                OrderAction::ResolveCancellation(
                    outcome @ (CancellationStatus::Cancelled | CancellationStatus::Rejected),
                ),
            ) if self.cancellation_status == Some(CancellationStatus::Processing) => {
                self.cancellation_status = Some(outcome);
                true
            }
            _ => false,
        };

        debug_assert!(self.is_consistent(), "order {} left inconsistent", self.id);

        if applied {
            info!(order_id = self.id, action = name, from = %from, to = %self.status, "Transition applied");
            Ok(TransitionOutcome::Applied { from, to: self.status })
        } else {
            warn!(order_id = self.id, action = name, status = %from, "Transition precondition not met; ignoring");
            Ok(TransitionOutcome::Ignored)
        }
    }
}
