use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use crate::actor_framework::RequestKey;
use crate::domain::OrderStatus;
use crate::order_actor::OrderAction;
use super::RouteParams;

/// Parameter names used between the order screens.
pub mod keys {
    pub const ACTIVE_TAB: &str = "activeTab";
    pub const REQUEST_ID: &str = "requestId";
    pub const PREVIOUS_STATUS: &str = "previousStatus";
    pub const CANCELLED_ORDER_ID: &str = "cancelledOrderId";
    pub const CANCELLATION_REASON: &str = "cancellationReason";
    pub const RETURNED_ORDER_ID: &str = "returnedOrderId";
    pub const RETURN_REASON: &str = "returnReason";
    pub const RATED_ORDER_ID: &str = "ratedOrderId";

    /// Everything a transition request writes, apart from the tab.
    pub const REQUEST: [&str; 7] = [
        REQUEST_ID,
        PREVIOUS_STATUS,
        CANCELLED_ORDER_ID,
        CANCELLATION_REASON,
        RETURNED_ORDER_ID,
        RETURN_REASON,
        RATED_ORDER_ID,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Cancel { reason: String },
    Return { reason: String },
    Rated,
}

/// A state change asked for by a screen that does not own the order list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub key: RequestKey,
    pub order_id: u64,
    pub kind: TransitionKind,
    pub previous_status: Option<OrderStatus>,
}

impl TransitionRequest {
    pub fn cancel(order_id: u64, reason: impl Into<String>, previous_status: OrderStatus) -> Self {
        Self::new(order_id, TransitionKind::Cancel { reason: reason.into() }, Some(previous_status))
    }

    pub fn request_return(order_id: u64, reason: impl Into<String>, previous_status: OrderStatus) -> Self {
        Self::new(order_id, TransitionKind::Return { reason: reason.into() }, Some(previous_status))
    }

    pub fn rated(order_id: u64) -> Self {
        Self::new(order_id, TransitionKind::Rated, Some(OrderStatus::Completed))
    }

    /// The key defaults to a digest of the request, so re-reading the same
    /// parameters always yields the same key.
    fn new(order_id: u64, kind: TransitionKind, previous_status: Option<OrderStatus>) -> Self {
        let mut hasher = DefaultHasher::new();
        order_id.hash(&mut hasher);
        kind.hash(&mut hasher);
        Self {
            key: RequestKey(hasher.finish()),
            order_id,
            kind,
            previous_status,
        }
    }

    pub fn with_key(mut self, key: RequestKey) -> Self {
        self.key = key;
        self
    }

    pub fn action(&self) -> OrderAction {
        match &self.kind {
            TransitionKind::Cancel { reason } => OrderAction::Cancel { reason: reason.clone() },
            TransitionKind::Return { reason } => OrderAction::RequestReturn { reason: reason.clone() },
            TransitionKind::Rated => OrderAction::Rate,
        }
    }

    /// Tab the order board shows once this request has been handled.
    pub fn focus(&self) -> OrderStatus {
        match self.kind {
            TransitionKind::Cancel { .. } => OrderStatus::Cancelled,
            TransitionKind::Return { .. } => OrderStatus::ReturnRefunded,
            TransitionKind::Rated => OrderStatus::Completed,
        }
    }

    pub fn to_params(&self) -> RouteParams {
        let mut params = RouteParams::new()
            .with(keys::ACTIVE_TAB, self.focus())
            .with(keys::REQUEST_ID, self.key.0);
        if let Some(previous) = self.previous_status {
            params.insert(keys::PREVIOUS_STATUS, previous);
        }
        match &self.kind {
            TransitionKind::Cancel { reason } => {
                params.insert(keys::CANCELLED_ORDER_ID, self.order_id);
                params.insert(keys::CANCELLATION_REASON, reason);
            }
            TransitionKind::Return { reason } => {
                params.insert(keys::RETURNED_ORDER_ID, self.order_id);
                params.insert(keys::RETURN_REASON, reason);
            }
            TransitionKind::Rated => {
                params.insert(keys::RATED_ORDER_ID, self.order_id);
            }
        }
        params
    }

    /// Reads a pending request out of `params`, if one is present.
    ///
    /// A malformed order id falls back to `0`, which matches no order, and a
    /// missing reason to the empty string.
    pub fn from_params(params: &RouteParams) -> Option<Self> {
        let previous_status = params.parse(keys::PREVIOUS_STATUS);
        let reason = |key: &str| params.get(key).unwrap_or_default().to_string();

        let request = if params.contains(keys::CANCELLED_ORDER_ID) && params.contains(keys::PREVIOUS_STATUS) {
            let order_id = params.parse_or(keys::CANCELLED_ORDER_ID, 0);
            let kind = TransitionKind::Cancel { reason: reason(keys::CANCELLATION_REASON) };
            Self::new(order_id, kind, previous_status)
        } else if params.contains(keys::RETURNED_ORDER_ID) && params.contains(keys::PREVIOUS_STATUS) {
            let order_id = params.parse_or(keys::RETURNED_ORDER_ID, 0);
            let kind = TransitionKind::Return { reason: reason(keys::RETURN_REASON) };
            Self::new(order_id, kind, previous_status)
        } else if params.contains(keys::RATED_ORDER_ID) {
            Self::new(params.parse_or(keys::RATED_ORDER_ID, 0), TransitionKind::Rated, previous_status)
        } else {
            return None;
        };

        Some(match params.parse(keys::REQUEST_ID) {
            Some(id) => request.with_key(RequestKey(id)),
            None => request,
        })
    }

    /// Acknowledges a consumed request by clearing its parameters.
    pub fn clear_params(params: &mut RouteParams) {
        for key in keys::REQUEST {
            params.remove(key);
        }
    }
}
