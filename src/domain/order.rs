use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where an order sits in its lifecycle. Labels match the order board tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    ToPay,
    ToShip,
    ToReceive,
    Completed,
    Cancelled,
    ReturnRefunded,
}

impl OrderStatus {
    /// Tabs of the order board, left to right.
    pub const TABS: [OrderStatus; 6] = [
        OrderStatus::ToPay,
        OrderStatus::ToShip,
        OrderStatus::ToReceive,
        OrderStatus::Completed,
        OrderStatus::ReturnRefunded,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::ToPay => "To Pay",
            OrderStatus::ToShip => "To Ship",
            OrderStatus::ToReceive => "To Receive",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::ReturnRefunded => "Return/Refunded",
        }
    }

    /// Whether cancellation details may be attached in this status.
    pub fn carries_cancellation(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::ReturnRefunded)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        OrderStatus::TABS
            .into_iter()
            .find(|status| status.label() == trimmed)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Progress of a cancellation or return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancellationStatus {
    Processing,
    Cancelled,
    Rejected,
}

impl CancellationStatus {
    pub fn label(self) -> &'static str {
        match self {
            CancellationStatus::Processing => "Processing",
            CancellationStatus::Cancelled => "Cancelled",
            CancellationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CancellationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    pub product_name: String,
    /// Unit price in whole pesos.
    pub price: u64,
    pub quantity: u32,
    pub image_ref: String,
    pub cancellation_status: Option<CancellationStatus>,
    pub cancellation_reason: Option<String>,
    pub is_rated: bool,
}

impl Order {
    /// Creates an unpaid, unrated order with no cancellation details.
    pub fn new(
        id: u64,
        product_name: impl Into<String>,
        price: u64,
        quantity: u32,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status: OrderStatus::ToPay,
            product_name: product_name.into(),
            price,
            quantity,
            image_ref: image_ref.into(),
            cancellation_status: None,
            cancellation_reason: None,
            is_rated: false,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_cancellation(mut self, status: CancellationStatus, reason: impl Into<String>) -> Self {
        self.cancellation_status = Some(status);
        self.cancellation_reason = Some(reason.into());
        self
    }

    pub fn line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }

    /// Cancellation details only appear on cancelled or returned orders, and
    /// only completed orders can be rated.
    pub fn is_consistent(&self) -> bool {
        let details = self.cancellation_status.is_some() || self.cancellation_reason.is_some();
        (!details || self.status.carries_cancellation())
            && (!self.is_rated || self.status == OrderStatus::Completed)
    }
}
