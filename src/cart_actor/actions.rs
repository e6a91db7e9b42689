/// Custom actions for cart lines.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Flips the checkout selection of a line.
    ToggleSelected,
    /// Changes the quantity by `delta`, never going below one.
    AdjustQuantity(i32),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    ToggleSelected(bool),
    AdjustQuantity(u32),
}
