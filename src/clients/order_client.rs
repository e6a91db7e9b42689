use tracing::{debug, instrument, warn};
use crate::actor_framework::{FrameworkError, RequestKey, ResourceClient};
use crate::domain::{CancellationStatus, Order, OrderStatus};
use crate::navigation::TransitionRequest;
use crate::order_actor::{Feedback, OrderAction, OrderError, TransitionOutcome};

/// Client for the order store, the single mutation authority for orders.
///
/// Every transition resolves to a [`TransitionOutcome`]; unknown ids and unmet
/// preconditions come back as [`TransitionOutcome::Ignored`] rather than errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: u64, reason: String) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::Cancel { reason }, None).await
    }

    #[instrument(skip(self))]
    pub async fn ship(&self, id: u64) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::Ship, None).await
    }

    #[instrument(skip(self))]
    pub async fn complete(&self, id: u64) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::Complete, None).await
    }

    #[instrument(skip(self))]
    pub async fn rate(&self, id: u64) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::Rate, None).await
    }

    #[instrument(skip(self))]
    pub async fn request_return(&self, id: u64, reason: String) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::RequestReturn { reason }, None).await
    }

    #[instrument(skip(self))]
    pub async fn resolve_cancellation(
        &self,
        id: u64,
        outcome: CancellationStatus,
    ) -> Result<TransitionOutcome, OrderError> {
        self.transition(id, OrderAction::ResolveCancellation(outcome), None).await
    }

    /// Validates the rating form, then marks the order as rated.
    #[instrument(skip(self, feedback), fields(stars = feedback.stars))]
    pub async fn submit_feedback(&self, id: u64, feedback: &Feedback) -> Result<TransitionOutcome, OrderError> {
        feedback.validate()?;
        self.rate(id).await
    }

    /// Applies a cross-screen request. Redelivery of the same request is not reapplied.
    #[instrument(skip(self, request), fields(order_id = request.order_id, key = %request.key))]
    pub async fn consume(&self, request: &TransitionRequest) -> Result<TransitionOutcome, OrderError> {
        if let Some(previous) = request.previous_status {
            debug!(previous_status = %previous, "Consuming transition request");
        }
        self.transition(request.order_id, request.action(), Some(request.key)).await
    }

    /// Orders in exactly `status`, in seeding order.
    #[instrument(skip(self))]
    pub async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.list().await?;
        Ok(orders.into_iter().filter(|order| order.status == status).collect())
    }

    async fn transition(
        &self,
        id: u64,
        action: OrderAction,
        key: Option<RequestKey>,
    ) -> Result<TransitionOutcome, OrderError> {
        debug!(action = action.name(), "Sending request");
        match self.inner.perform_keyed_action(id, action, key).await {
            Ok(outcome) => Ok(outcome),
            Err(FrameworkError::NotFound(_)) => {
                warn!(order_id = id, "Order not found; ignoring transition");
                Ok(TransitionOutcome::Ignored)
            }
            Err(e) => Err(e.into()),
        }
    }
}
