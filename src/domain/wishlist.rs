/// A product the customer saved for later.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub image_ref: String,
    pub in_stock: bool,
}

impl WishlistItem {
    pub fn new(id: u64, name: impl Into<String>, price: u64, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_ref: image_ref.into(),
            in_stock: true,
        }
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}
