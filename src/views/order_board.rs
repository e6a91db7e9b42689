use tokio::sync::watch;
use tracing::{debug, info, instrument};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderStatus};
use crate::navigation::{keys, RouteParams, TransitionRequest};
use crate::order_actor::{Feedback, OrderError, TransitionOutcome};

/// The tabbed order history screen.
///
/// Reads orders from the store snapshot and never mutates them itself: every
/// change goes through [`OrderClient`].
pub struct OrderBoard {
    client: OrderClient,
    orders: watch::Receiver<Vec<Order>>,
    active_tab: OrderStatus,
}

impl OrderBoard {
    /// Opens the board on the tab named by `activeTab`, or To Pay.
    pub fn new(client: OrderClient, params: &RouteParams) -> Self {
        let orders = client.subscribe();
        let active_tab = params.parse(keys::ACTIVE_TAB).unwrap_or(OrderStatus::ToPay);
        Self { client, orders, active_tab }
    }

    pub fn active_tab(&self) -> OrderStatus {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: OrderStatus) {
        self.active_tab = tab;
    }

    /// Orders on the active tab, in seeding order.
    pub fn visible(&self) -> Vec<Order> {
        self.orders
            .borrow()
            .iter()
            .filter(|order| order.status == self.active_tab)
            .cloned()
            .collect()
    }

    pub fn order(&self, id: u64) -> Option<Order> {
        self.orders.borrow().iter().find(|order| order.id == id).cloned()
    }

    /// Whether the rate button is offered for `id`.
    pub fn can_rate(&self, id: u64) -> bool {
        self.order(id)
            .is_some_and(|order| order.status == OrderStatus::Completed && !order.is_rated)
    }

    /// Consumes a request left in the route parameters by another screen.
    ///
    /// The request parameters are cleared afterwards and `activeTab` is set to
    /// the tab now showing, so reading the same parameters again is harmless.
    #[instrument(skip(self, params))]
    pub async fn on_route_params(&mut self, params: &mut RouteParams) -> Result<TransitionOutcome, OrderError> {
        if let Some(tab) = params.parse(keys::ACTIVE_TAB) {
            self.active_tab = tab;
        }
        let Some(request) = TransitionRequest::from_params(params) else {
            return Ok(TransitionOutcome::Ignored);
        };
        let outcome = self.client.consume(&request).await?;
        if outcome.is_applied() {
            self.active_tab = request.focus();
        }
        TransitionRequest::clear_params(params);
        params.insert(keys::ACTIVE_TAB, self.active_tab);
        debug!(key = %request.key, tab = %self.active_tab, "Route request consumed");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn confirm_received(&mut self, id: u64) -> Result<TransitionOutcome, OrderError> {
        let outcome = self.client.complete(id).await?;
        self.follow(outcome);
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn mark_shipped(&mut self, id: u64) -> Result<TransitionOutcome, OrderError> {
        let outcome = self.client.ship(id).await?;
        self.follow(outcome);
        Ok(outcome)
    }

    #[instrument(skip(self, feedback))]
    pub async fn submit_feedback(&mut self, id: u64, feedback: &Feedback) -> Result<TransitionOutcome, OrderError> {
        let outcome = self.client.submit_feedback(id, feedback).await?;
        self.follow(outcome);
        Ok(outcome)
    }

    fn follow(&mut self, outcome: TransitionOutcome) {
        if let Some(tab) = outcome.focus() {
            info!(tab = %tab, "Switching tab");
            self.active_tab = tab;
        }
    }
}
