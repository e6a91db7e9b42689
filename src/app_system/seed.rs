//! Mock catalogue data every store starts with.

use crate::domain::{
    CancellationStatus, CartItem, Notification, NotificationKind, Order, OrderStatus, WishlistItem,
};

pub fn orders() -> Vec<Order> {
    vec![
        Order::new(1, "Clifton Hofner style Violin Bass", 13800, 1, "violin-bass.jpg"),
        Order::new(2, "Vintage Valve Amp 40W", 11000, 2, "valve-amp.jpg").with_status(OrderStatus::ToShip),
        Order::new(3, "Fender Stratocaster Kit", 8500, 1, "strat-kit.jpg").with_status(OrderStatus::Completed),
        Order::new(4, "Extra Guitar Strings (Set of 3)", 900, 3, "strings.jpg"),
        Order::new(5, "Pedalboard Power Supply", 4500, 1, "power-supply.jpg")
            .with_status(OrderStatus::Cancelled)
            .with_cancellation(CancellationStatus::Cancelled, "Changed my mind"),
        Order::new(6, "Pedalboard Power Supply", 4500, 1, "power-supply.jpg").with_status(OrderStatus::ToReceive),
        Order::new(7, "Guitar Tuner Pro", 1200, 1, "tuner.jpg")
            .with_status(OrderStatus::Cancelled)
            .with_cancellation(CancellationStatus::Processing, "Found a better price elsewhere"),
        Order::new(8, "Guitar Tuner Pro", 1200, 1, "tuner.jpg")
            .with_status(OrderStatus::ReturnRefunded)
            .with_cancellation(CancellationStatus::Cancelled, "Found a better price elsewhere"),
    ]
}

pub fn cart() -> Vec<CartItem> {
    vec![
        CartItem::new(1, "Clifton Hofner style Violin Bass", 13800, 1, "violin-bass.jpg"),
        CartItem::new(2, "Vintage T-Style Electric Guitar", 89900, 1, "t-style.jpg"),
        CartItem::new(3, "Rosewood Acoustic Dreadnought", 64950, 1, "dreadnought.jpg"),
        CartItem::new(4, "P-Bass Style Electric Bass", 105000, 1, "p-bass.jpg"),
        CartItem::new(5, "15W All-Tube Combo Amplifier", 42000, 1, "combo-amp.jpg"),
        CartItem::new(6, "Classic Fuzz Distortion Pedal", 11999, 2, "fuzz.jpg").selected(),
        CartItem::new(7, "5-Piece Maple Drum Kit (Natural Finish)", 129900, 1, "drum-kit.jpg"),
        CartItem::new(8, "88-Key Weighted Digital Piano", 98500, 1, "digital-piano.jpg"),
        CartItem::new(9, "Professional Alto Saxophone", 155000, 1, "alto-sax.jpg"),
        CartItem::new(10, "Large Diaphragm Studio Condenser Mic", 27500, 3, "condenser-mic.jpg"),
        CartItem::new(11, "Studio Reference Monitor Headphones", 9990, 1, "headphones.jpg"),
    ]
}

pub fn wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem::new(1, "Clifton Hofner style Violin Bass", 13800, "violin-bass.jpg"),
        WishlistItem::new(2, "Vintage Valve Amp 40W", 11000, "valve-amp.jpg"),
        WishlistItem::new(3, "Fender Stratocaster Kit", 8500, "strat-kit.jpg").out_of_stock(),
        WishlistItem::new(214, "Extra Guitar Strings (Set of 3)", 900, "strings.jpg"),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, NotificationKind::Sale, "Flash Sale Alert!", "20% off all acoustic guitars ends tonight!", "1h ago"),
        Notification::new(2, NotificationKind::Update, "Order Shipped", "Your order #39482 is now out for delivery.", "5h ago"),
        Notification::new(3, NotificationKind::System, "New Privacy Policy", "We updated our terms and conditions. Tap to review.", "1d ago").read(),
        Notification::new(4, NotificationKind::Sale, "New Product Drop", "Check out the limited edition \"Midnight Burst\" Strat.", "2d ago").read(),
        Notification::new(5, NotificationKind::Update, "Inventory Update", "The vintage Gibson Les Paul is back in stock!", "3d ago").read(),
    ]
}
