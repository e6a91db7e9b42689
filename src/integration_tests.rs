#[cfg(test)]
mod tests {
    use std::time::Duration;
    use crate::app_system::{ShopSettings, ShopSystem};
    use crate::checkout::{CheckoutHandoff, PaymentMethod, PaymentOutcome};
    use crate::domain::{CancellationStatus, Order, OrderStatus};
    use crate::gesture::{GestureSample, Release, SwipeConfig};
    use crate::navigation::{keys, ReasonForm, RouteParams, TransitionRequest};
    use crate::order_actor::{Feedback, TransitionOutcome};
    use crate::views::OrderBoard;
    use crate::wishlist_actor::WishlistError;

    const FRAME: Duration = Duration::from_millis(16);

    fn start() -> ShopSystem {
        ShopSystem::new(ShopSettings::default())
    }

    fn ids(orders: &[Order]) -> Vec<u64> {
        orders.iter().map(|order| order.id).collect()
    }

    async fn order(system: &ShopSystem, id: u64) -> Order {
        system.order_client.get_order(id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_seeded_board_tabs() {
        let system = start();
        let orders = &system.order_client;

        assert_eq!(ids(&orders.list_by_status(OrderStatus::ToPay).await.unwrap()), vec![1, 4]);
        assert_eq!(ids(&orders.list_by_status(OrderStatus::Cancelled).await.unwrap()), vec![5, 7]);
        assert_eq!(ids(&orders.list_by_status(OrderStatus::ReturnRefunded).await.unwrap()), vec![8]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rate_is_applied_once() {
        let system = start();
        let orders = &system.order_client;

        let first = orders.rate(3).await.unwrap();
        assert_eq!(first, TransitionOutcome::Applied { from: OrderStatus::Completed, to: OrderStatus::Completed });
        assert_eq!(orders.rate(3).await.unwrap(), TransitionOutcome::Ignored);

        let completed = orders.list_by_status(OrderStatus::Completed).await.unwrap();
        assert!(completed.iter().any(|order| order.id == 3 && order.is_rated));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_preconditions_leave_orders_untouched() {
        let system = start();
        let orders = &system.order_client;
        let before = orders.list_orders().await.unwrap();

        // Order 7 is cancelled with the request still processing.
        assert_eq!(orders.request_return(7, "wrong item".into()).await.unwrap(), TransitionOutcome::Ignored);
        // Only unpaid orders can be cancelled.
        for id in [2, 3, 6, 8] {
            assert_eq!(orders.cancel(id, "Changed my mind".into()).await.unwrap(), TransitionOutcome::Ignored);
        }
        assert_eq!(orders.complete(1).await.unwrap(), TransitionOutcome::Ignored);
        assert_eq!(orders.ship(99).await.unwrap(), TransitionOutcome::Ignored);

        assert_eq!(orders.list_orders().await.unwrap(), before);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_full_lifecycle_keeps_orders_consistent() {
        let system = start();
        let orders = &system.order_client;

        assert!(orders.ship(2).await.unwrap().is_applied());
        assert_eq!(order(&system, 2).await.status, OrderStatus::ToReceive);
        assert!(orders.complete(2).await.unwrap().is_applied());
        assert!(orders.request_return(2, "Wrong item received".into()).await.unwrap().is_applied());
        assert!(orders.cancel(4, "Duplicate order".into()).await.unwrap().is_applied());
        assert!(orders.resolve_cancellation(7, CancellationStatus::Rejected).await.unwrap().is_applied());
        assert_eq!(
            orders.resolve_cancellation(7, CancellationStatus::Cancelled).await.unwrap(),
            TransitionOutcome::Ignored
        );
        assert_eq!(
            orders.resolve_cancellation(2, CancellationStatus::Processing).await.unwrap(),
            TransitionOutcome::Ignored
        );

        let returned = order(&system, 2).await;
        assert_eq!(returned.status, OrderStatus::ReturnRefunded);
        assert_eq!(returned.cancellation_reason.as_deref(), Some("Wrong item received"));
        assert_eq!(order(&system, 7).await.cancellation_status, Some(CancellationStatus::Rejected));

        for order in orders.list_orders().await.unwrap() {
            assert!(order.is_consistent(), "order {} is inconsistent", order.id);
            if order.cancellation_status.is_some() {
                assert!(matches!(order.status, OrderStatus::Cancelled | OrderStatus::ReturnRefunded));
            }
        }

        // Orders are never removed.
        assert_eq!(system.order_client.snapshot().len(), 8);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_redelivered_request_is_not_reapplied() {
        let system = start();
        let orders = &system.order_client;
        let request = TransitionRequest::request_return(3, "Item not as described", OrderStatus::Completed);

        let first = orders.consume(&request).await.unwrap();
        let redelivered = TransitionRequest::from_params(&request.to_params()).unwrap();
        let second = orders.consume(&redelivered).await.unwrap();

        // The replay reports the original outcome rather than a fresh precondition failure.
        assert!(first.is_applied());
        assert_eq!(second, first);
        let returned = order(&system, 3).await;
        assert_eq!(returned.status, OrderStatus::ReturnRefunded);
        assert_eq!(returned.cancellation_status, Some(CancellationStatus::Processing));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_early_request_applies_once_precondition_holds() {
        let system = start();
        let orders = &system.order_client;
        let rated = TransitionRequest::rated(6);

        // Order 6 has not been received yet.
        assert_eq!(orders.consume(&rated).await.unwrap(), TransitionOutcome::Ignored);
        assert!(orders.complete(6).await.unwrap().is_applied());

        let applied = orders.consume(&rated).await.unwrap();
        assert_eq!(applied, TransitionOutcome::Applied { from: OrderStatus::Completed, to: OrderStatus::Completed });
        assert!(order(&system, 6).await.is_rated);

        // From here on the same request replays its outcome.
        assert_eq!(orders.consume(&rated).await.unwrap(), applied);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_board_consumes_route_requests() {
        let system = start();
        let params = RouteParams::new().with(keys::ACTIVE_TAB, "Completed");
        let mut board = OrderBoard::new(system.order_client.clone(), &params);
        assert_eq!(board.active_tab(), OrderStatus::Completed);
        assert_eq!(ids(&board.visible()), vec![3]);
        assert!(board.can_rate(3));

        // The cancel screen fills in its form for order 4.
        let mut form = ReasonForm::cancellation();
        form.select("Found a Better Price");
        form.set_confirmed(true);
        let request = form.submit(&board.order(4).unwrap()).unwrap();
        let mut route = request.to_params();

        board.select_tab(OrderStatus::ToPay);
        let outcome = board.on_route_params(&mut route).await.unwrap();
        assert!(outcome.is_applied());
        assert_eq!(board.active_tab(), OrderStatus::Cancelled);
        assert_eq!(ids(&board.visible()), vec![4, 5, 7]);
        assert_eq!(route.len(), 1);
        assert_eq!(route.get(keys::ACTIVE_TAB), Some("Cancelled"));

        // Reading the same route again changes nothing.
        assert_eq!(board.on_route_params(&mut route).await.unwrap(), TransitionOutcome::Ignored);

        drop(board);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_board_follows_shipping_and_feedback() {
        let system = start();
        let mut board = OrderBoard::new(system.order_client.clone(), &RouteParams::new());
        assert_eq!(board.active_tab(), OrderStatus::ToPay);

        board.mark_shipped(2).await.unwrap();
        assert_eq!(board.active_tab(), OrderStatus::ToReceive);
        assert_eq!(ids(&board.visible()), vec![2, 6]);

        board.confirm_received(6).await.unwrap();
        assert_eq!(board.active_tab(), OrderStatus::Completed);

        let short = Feedback::new(4, "ok");
        assert!(board.submit_feedback(6, &short).await.is_err());
        assert!(board.can_rate(6));

        board.submit_feedback(6, &Feedback::new(4, "Quiet and reliable supply")).await.unwrap();
        assert!(!board.can_rate(6));

        drop(board);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_route_ids_are_ignored() {
        let system = start();
        let mut board = OrderBoard::new(system.order_client.clone(), &RouteParams::new());
        let before = system.order_client.snapshot();

        let mut route = RouteParams::new().with(keys::RATED_ORDER_ID, "three");
        assert_eq!(board.on_route_params(&mut route).await.unwrap(), TransitionOutcome::Ignored);
        assert_eq!(board.active_tab(), OrderStatus::ToPay);
        assert_eq!(system.order_client.snapshot(), before);

        drop(board);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_notification_swipe_gate_and_removal() {
        let system = start();
        let notifications = &system.notification_client;
        let mut rows = notifications.swipe_list(SwipeConfig::notification());
        rows.layout(&1, 320.0);
        assert_eq!(notifications.unread_count(), 2);

        // Too diagonal for a notification row.
        assert!(!rows.pointer_move(&1, GestureSample::new(-30.0, -20.0)));
        assert_eq!(rows.release(&1, GestureSample::new(-100.0, -20.0)), Release::Ignored);

        assert!(rows.pointer_move(&1, GestureSample::new(-30.0, -5.0)));
        assert_eq!(rows.release(&1, GestureSample::horizontal(-100.0)), Release::Commit);
        let mut removed = Vec::new();
        for _ in 0..20 {
            removed.extend(rows.advance(FRAME).await.unwrap());
        }
        assert_eq!(removed, vec![1]);
        assert_eq!(notifications.unread_count(), 1);

        assert_eq!(notifications.mark_all_read().await.unwrap(), 1);
        assert_eq!(notifications.unread_count(), 0);

        drop(rows);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_wishlist_to_cart() {
        let system = start();
        let cart = &system.cart_client;

        let err = system.wishlist_client.add_to_cart(3, cart).await.unwrap_err();
        assert_eq!(err, WishlistError::OutOfStock("Fender Stratocaster Kit".into()));

        let line = system.wishlist_client.add_to_cart(1, cart).await.unwrap();
        assert_eq!(line, 12);
        let added = cart.get_cart_item(line).await.unwrap().unwrap();
        assert_eq!(added.quantity, 1);
        assert!(!added.selected);
        assert!(system.wishlist_client.get_wishlist_item(1).await.unwrap().is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cart_selection_and_checkout() {
        let system = start();
        let cart = &system.cart_client;

        assert!(cart.toggle_select_all().await.unwrap());
        assert!(cart.snapshot().iter().all(|item| item.selected));
        assert!(!cart.toggle_select_all().await.unwrap());
        assert_eq!(cart.summary().shipping_fee, 0);
        assert!(cart.checkout().await.is_err());

        cart.toggle_selected(6).await.unwrap();
        cart.toggle_selected(11).await.unwrap();
        assert_eq!(cart.adjust_quantity(11, -1).await.unwrap(), 1);
        let handoff = cart.checkout().await.unwrap();
        assert_eq!(handoff.total, 2 * 11999 + 9990 + 300);
        assert_eq!(cart.summary().total, handoff.total);

        let params = handoff.to_params().unwrap();
        let mut session = system.start_checkout(CheckoutHandoff::from_params(&params));
        session.select_payment(PaymentMethod::Gcash);
        assert_eq!(session.place_order().unwrap(), PaymentOutcome::RedirectToGcash { total: handoff.total });

        session.select_payment(PaymentMethod::CashOnDelivery);
        let PaymentOutcome::Placed(receipt) = session.place_order().unwrap() else {
            panic!("Expected a receipt");
        };
        assert_eq!(receipt.order_number, "#2002");
        assert_eq!(receipt.total_amount, "₱34,288");
        assert_eq!(receipt.dismiss_after, Duration::from_secs(4));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cart_row_swipe_deletes_line() {
        let system = start();
        let cart = &system.cart_client;
        let mut rows = cart.swipe_list(system.settings().list_row_swipe());
        rows.layout(&7, 360.0);
        rows.layout(&9, 360.0);

        // Short drag springs back.
        rows.pointer_move(&9, GestureSample::horizontal(-50.0));
        assert_eq!(rows.release(&9, GestureSample::horizontal(-50.0)), Release::SnapBack);

        rows.pointer_move(&7, GestureSample::horizontal(-90.0));
        assert_eq!(rows.release(&7, GestureSample::horizontal(-100.0)), Release::Commit);
        let mut removed = Vec::new();
        for _ in 0..200 {
            removed.extend(rows.advance(FRAME).await.unwrap());
        }

        assert_eq!(removed, vec![7]);
        assert_eq!(rows.offset(&9), Some(0.0));
        let remaining: Vec<u64> = cart.list_cart_items().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(remaining, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 11]);

        drop(rows);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_wishlist_row_swipe_removes_entry() {
        let system = start();
        let wishlist = &system.wishlist_client;
        let mut rows = wishlist.swipe_list(system.settings().list_row_swipe());
        assert_eq!(rows.ids(), vec![1, 2, 3, 214]);
        rows.layout(&2, 360.0);
        rows.layout(&214, 360.0);

        rows.pointer_move(&214, GestureSample::horizontal(-50.0));
        assert_eq!(rows.release(&214, GestureSample::horizontal(-50.0)), Release::SnapBack);

        rows.pointer_move(&2, GestureSample::horizontal(-80.0));
        assert_eq!(rows.release(&2, GestureSample::horizontal(-100.0)), Release::Commit);

        // Still saved while the row slides out.
        assert!(rows.advance(FRAME).await.unwrap().is_empty());
        assert!(wishlist.get_wishlist_item(2).await.unwrap().is_some());

        let mut removed = Vec::new();
        for _ in 0..200 {
            removed.extend(rows.advance(FRAME).await.unwrap());
        }
        assert_eq!(removed, vec![2]);
        assert_eq!(rows.ids(), vec![1, 3, 214]);
        assert_eq!(rows.offset(&214), Some(0.0));

        wishlist.remove_wishlist_item(3).await.unwrap();
        let saved: Vec<u64> = wishlist.list_wishlist_items().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(saved, vec![1, 214]);

        drop(rows);
        system.shutdown().await.unwrap();
    }
}
