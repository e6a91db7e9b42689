use serde::{Deserialize, Serialize};
use tracing::warn;

/// A line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    #[serde(alias = "image")]
    pub image_ref: String,
    #[serde(default)]
    pub selected: bool,
}

impl CartItem {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: u64,
        quantity: u32,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity: quantity.max(1),
            image_ref: image_ref.into(),
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// `None` when the line total does not fit in a `u64`.
    pub fn line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

/// Payload for adding a new line to the cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub image_ref: String,
}

/// Payload for updating an existing cart line.
#[derive(Debug, Clone, Default)]
pub struct CartPatch {
    pub quantity: Option<u32>,
    pub selected: Option<bool>,
}

/// Totals over the selected lines of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub total_items: u32,
    pub subtotal: u64,
    pub shipping_fee: u64,
    pub total: u64,
}

impl CartSummary {
    /// Shipping is only charged when at least one line is selected.
    ///
    /// Totals that overflow are logged and reported as an empty summary.
    pub fn of<'a>(items: impl IntoIterator<Item = &'a CartItem>, shipping_fee: u64) -> Self {
        Self::checked_of(items, shipping_fee).unwrap_or_else(|| {
            warn!("Cart totals overflow; reporting an empty summary");
            CartSummary::default()
        })
    }

    /// Like [`CartSummary::of`], but `None` on overflow.
    pub fn checked_of<'a>(items: impl IntoIterator<Item = &'a CartItem>, shipping_fee: u64) -> Option<Self> {
        let mut summary = CartSummary::default();
        let mut any_selected = false;
        for item in items.into_iter().filter(|item| item.selected) {
            any_selected = true;
            summary.total_items = summary.total_items.checked_add(item.quantity)?;
            summary.subtotal = summary.subtotal.checked_add(item.line_total()?)?;
        }
        summary.shipping_fee = if any_selected { shipping_fee } else { 0 };
        summary.total = summary.subtotal.checked_add(summary.shipping_fee)?;
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_selected_lines_only() {
        let items = vec![
            CartItem::new(1, "Fuzz Pedal", 11999, 2, "fuzz.png").selected(),
            CartItem::new(2, "Condenser Mic", 27500, 3, "mic.png"),
            CartItem::new(3, "Headphones", 9990, 1, "phones.png").selected(),
        ];

        let summary = CartSummary::of(&items, 300);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.subtotal, 2 * 11999 + 9990);
        assert_eq!(summary.shipping_fee, 300);
        assert_eq!(summary.total, 2 * 11999 + 9990 + 300);
    }

    #[test]
    fn test_no_shipping_without_selection() {
        let items = vec![CartItem::new(1, "Drum Kit", 129900, 1, "kit.png")];
        assert_eq!(CartSummary::of(&items, 300), CartSummary::default());
    }

    #[test]
    fn test_overflowing_totals_are_detected() {
        let items = vec![CartItem::new(1, "Boutique Amp", u64::MAX, 2, "amp.png").selected()];
        assert_eq!(items[0].line_total(), None);
        assert_eq!(CartSummary::checked_of(&items, 300), None);
        assert_eq!(CartSummary::of(&items, 300), CartSummary::default());

        let items = vec![CartItem::new(1, "Boutique Amp", u64::MAX, 1, "amp.png").selected()];
        assert_eq!(CartSummary::checked_of(&items, 300), None);
    }

    #[test]
    fn test_quantity_never_starts_below_one() {
        assert_eq!(CartItem::new(1, "Strings", 900, 0, "s.png").quantity, 1);
    }

    #[test]
    fn test_deserializes_screen_json() {
        let json = r#"{"id":6,"name":"Classic Fuzz","price":11999,"quantity":2,"image":"fuzz.jpg","selected":true}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.image_ref, "fuzz.jpg");
        assert!(item.selected);
    }
}
