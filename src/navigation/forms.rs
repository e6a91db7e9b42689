use crate::domain::Order;
use super::TransitionRequest;

pub const CANCELLATION_REASONS: [&str; 7] = [
    "Ordered by mistake",
    "Changed my mind",
    "Found a Better Price",
    "Item too expensive",
    "Delivery takes too long",
    "Duplicate order",
    "Other reason",
];

pub const RETURN_REASONS: [&str; 8] = [
    "Product damaged or defective",
    "Wrong item received",
    "Item not as described",
    "Changed my mind",
    "Size doesn't fit",
    "Quality not as expected",
    "Received incomplete order",
    "Other reason",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Purpose {
    Cancel,
    Return,
}

/// The reason picker plus confirmation tick-box shown before cancelling or
/// returning an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonForm {
    purpose: Purpose,
    selected: Option<&'static str>,
    confirmed: bool,
}

impl ReasonForm {
    pub fn cancellation() -> Self {
        Self { purpose: Purpose::Cancel, selected: None, confirmed: false }
    }

    pub fn return_request() -> Self {
        Self { purpose: Purpose::Return, selected: None, confirmed: false }
    }

    pub fn reasons(&self) -> &'static [&'static str] {
        match self.purpose {
            Purpose::Cancel => &CANCELLATION_REASONS,
            Purpose::Return => &RETURN_REASONS,
        }
    }

    /// Picks a reason from the list. Anything not on the list is refused.
    pub fn select(&mut self, reason: &str) -> bool {
        match self.reasons().iter().find(|r| **r == reason) {
            Some(found) => {
                self.selected = Some(*found);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.confirmed
    }

    /// Builds the request for `order`, or `None` while the form is incomplete.
    pub fn submit(&self, order: &Order) -> Option<TransitionRequest> {
        if !self.confirmed {
            return None;
        }
        let reason = self.selected?;
        Some(match self.purpose {
            Purpose::Cancel => TransitionRequest::cancel(order.id, reason, order.status),
            Purpose::Return => TransitionRequest::request_return(order.id, reason, order.status),
        })
    }
}
