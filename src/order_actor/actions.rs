use crate::domain::{CancellationStatus, OrderStatus};

/// Lifecycle transitions that can be requested for an order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Cancels an unpaid order.
    Cancel { reason: String },
    /// Hands a paid order to the courier.
    Ship,
    /// Confirms receipt of a delivered order.
    Complete,
    /// Records that feedback was left for a completed order.
    Rate,
    /// Asks for a return or refund of a completed order.
    RequestReturn { reason: String },
    /// Settles a pending cancellation or return request.
    ///
    /// Only `Cancelled` and `Rejected` are accepted as outcomes.
    ResolveCancellation(CancellationStatus),
}

impl OrderAction {
    pub fn name(&self) -> &'static str {
        match self {
            OrderAction::Cancel { .. } => "cancel",
            OrderAction::Ship => "ship",
            OrderAction::Complete => "complete",
            OrderAction::Rate => "rate",
            OrderAction::RequestReturn { .. } => "request_return",
            OrderAction::ResolveCancellation(_) => "resolve_cancellation",
        }
    }
}

/// What a transition request did to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied { from: OrderStatus, to: OrderStatus },
    /// Preconditions were not met, or the order does not exist. Nothing changed.
    Ignored,
}

impl TransitionOutcome {
    /// The board tab that should come into view after this outcome.
    pub fn focus(&self) -> Option<OrderStatus> {
        match self {
            TransitionOutcome::Applied { to, .. } => Some(*to),
            TransitionOutcome::Ignored => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }
}
