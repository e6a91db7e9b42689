//! Checkout hand-off and simulated payment.
//!
//! No order is stored from here: the hand-off is recomputed from the item
//! list every time and payment only produces a receipt or a redirect.

use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};
use crate::domain::{format_peso, CartItem, CartSummary};
use crate::navigation::RouteParams;

pub mod keys {
    pub const SELECTED_ITEMS: &str = "selectedItems";
    pub const SUBTOTAL: &str = "subtotal";
    pub const SHIPPING_FEE: &str = "shippingFee";
    pub const TOTAL: &str = "total";
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Please select a payment method")]
    PaymentMethodRequired,
    #[error("Could not encode checkout items: {0}")]
    Encoding(String),
}

/// What the cart passes to the checkout screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutHandoff {
    pub items: Vec<CartItem>,
    pub subtotal: u64,
    pub shipping_fee: u64,
    pub total: u64,
}

impl CheckoutHandoff {
    /// Every passed line counts, whether or not it is still flagged selected.
    ///
    /// Items whose totals overflow fall back to an empty hand-off.
    pub fn from_items(items: Vec<CartItem>, shipping_fee: u64) -> Self {
        let selected: Vec<CartItem> = items.iter().cloned().map(CartItem::selected).collect();
        let Some(summary) = CartSummary::checked_of(&selected, shipping_fee) else {
            warn!(lines = items.len(), "Checkout totals overflow; showing an empty order");
            return Self::default();
        };
        Self {
            items,
            subtotal: summary.subtotal,
            shipping_fee: summary.shipping_fee,
            total: summary.total,
        }
    }

    pub fn to_params(&self) -> Result<RouteParams, CheckoutError> {
        let items = serde_json::to_string(&self.items).map_err(|e| CheckoutError::Encoding(e.to_string()))?;
        Ok(RouteParams::new()
            .with(keys::SELECTED_ITEMS, items)
            .with(keys::SUBTOTAL, self.subtotal)
            .with(keys::SHIPPING_FEE, self.shipping_fee)
            .with(keys::TOTAL, self.total))
    }

    /// Rebuilds the hand-off on the checkout side.
    ///
    /// Missing or malformed values fall back to no items and a zero fee. The
    /// totals are recomputed from the items; passed totals are only checked.
    pub fn from_params(params: &RouteParams) -> Self {
        let items: Vec<CartItem> = match params.get(keys::SELECTED_ITEMS) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed checkout items; showing an empty order");
                Vec::new()
            }),
            None => Vec::new(),
        };
        let handoff = Self::from_items(items, params.parse_or(keys::SHIPPING_FEE, 0));
        if let Some(passed) = params.parse::<u64>(keys::TOTAL) {
            if passed != handoff.total {
                warn!(passed, recomputed = handoff.total, "Checkout total mismatch; using recomputed total");
            }
        }
        handoff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Gcash,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Gcash => "Gcash",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confirmation shown after a cash-on-delivery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_number: String,
    pub total_amount: String,
    pub payment_method: PaymentMethod,
    pub estimated_delivery: String,
    /// How long the confirmation stays up before returning home.
    pub dismiss_after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// Continue on the GCash screen with this amount.
    RedirectToGcash { total: u64 },
    Placed(Receipt),
}

/// The checkout screen state.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    handoff: CheckoutHandoff,
    payment: Option<PaymentMethod>,
    order_number: u64,
    estimated_delivery: String,
    receipt_dismiss_after: Duration,
}

impl CheckoutSession {
    pub fn new(
        handoff: CheckoutHandoff,
        order_number: u64,
        estimated_delivery: impl Into<String>,
        receipt_dismiss_after: Duration,
    ) -> Self {
        Self {
            handoff,
            payment: None,
            order_number,
            estimated_delivery: estimated_delivery.into(),
            receipt_dismiss_after,
        }
    }

    pub fn order_number(&self) -> u64 {
        self.order_number
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    #[instrument(skip(self), fields(order_number = self.order_number, total = self.handoff.total))]
    pub fn place_order(&self) -> Result<PaymentOutcome, CheckoutError> {
        if self.handoff.total == 0 {
            return Err(CheckoutError::EmptyCart);
        }
        let method = self.payment.ok_or(CheckoutError::PaymentMethodRequired)?;
        let outcome = match method {
            PaymentMethod::Gcash => PaymentOutcome::RedirectToGcash { total: self.handoff.total },
            PaymentMethod::CashOnDelivery => PaymentOutcome::Placed(Receipt {
                order_number: format!("#{}", self.order_number),
                total_amount: format_peso(self.handoff.total),
                payment_method: method,
                estimated_delivery: self.estimated_delivery.clone(),
                dismiss_after: self.receipt_dismiss_after,
            }),
        };
        info!(payment = %method, "Order placed");
        Ok(outcome)
    }
}
