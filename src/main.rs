mod actor_framework;
mod app_system;
mod cart_actor;
mod checkout;
mod clients;
mod domain;
mod gesture;
mod navigation;
mod notification_actor;
mod order_actor;
mod views;
mod wishlist_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use std::time::Duration;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{load_settings, setup_tracing, AppError, ShopSystem};
use crate::checkout::{CheckoutHandoff, PaymentMethod, PaymentOutcome};
use crate::gesture::GestureSample;
use crate::navigation::{ReasonForm, RouteParams};
use crate::order_actor::Feedback;
use crate::views::OrderBoard;
use crate::wishlist_actor::WishlistError;

const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let settings = load_settings();
    info!(shipping_fee = settings.shipping_fee, "Starting gear shop");
    let system = ShopSystem::new(settings);

    let span = tracing::info_span!("order_history");
    async {
        let mut board = OrderBoard::new(system.order_client.clone(), &RouteParams::new());
        info!(tab = %board.active_tab(), visible = board.visible().len(), "Order board opened");

        // Another screen cancels order 1 and hands the request back through the route.
        if let Some(order) = board.order(1) {
            let mut form = ReasonForm::cancellation();
            form.select("Changed my mind");
            form.set_confirmed(true);
            if let Some(request) = form.submit(&order) {
                let mut params = request.to_params();
                let outcome = board.on_route_params(&mut params).await?;
                info!(?outcome, tab = %board.active_tab(), "Cancellation handled");
            }
        }

        board.mark_shipped(2).await?;
        board.confirm_received(6).await?;

        let feedback = Feedback::new(5, "Plays beautifully and stays in tune.");
        let outcome = board.submit_feedback(3, &feedback).await?;
        info!(?outcome, can_rate_again = board.can_rate(3), "Feedback submitted");
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cart");
    let handoff = async {
        let cart = &system.cart_client;
        let mut rows = cart.swipe_list(system.settings().list_row_swipe());
        rows.layout(&7, 360.0);
        rows.pointer_move(&7, GestureSample::horizontal(-40.0));
        rows.release(&7, GestureSample::horizontal(-120.0));
        let mut removed = Vec::new();
        for _ in 0..30 {
            removed.extend(rows.advance(FRAME).await?);
        }
        info!(?removed, "Swiped away cart lines");

        cart.toggle_selected(11).await?;
        cart.adjust_quantity(11, 1).await?;
        let summary = cart.summary();
        info!(items = summary.total_items, total = summary.total, "Cart summary");
        Ok::<_, AppError>(cart.checkout().await?)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    async {
        // The checkout screen only sees the route parameters.
        let params = handoff.to_params()?;
        let mut session = system.start_checkout(CheckoutHandoff::from_params(&params));
        session.select_payment(PaymentMethod::CashOnDelivery);
        match session.place_order()? {
            PaymentOutcome::Placed(receipt) => info!(
                order_number = %receipt.order_number,
                total = %receipt.total_amount,
                delivery = %receipt.estimated_delivery,
                "Receipt shown"
            ),
            PaymentOutcome::RedirectToGcash { total } => info!(total, "Continuing to GCash"),
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    match system.wishlist_client.add_to_cart(3, &system.cart_client).await {
        Ok(line) => info!(line, "Wishlist item added to cart"),
        Err(WishlistError::OutOfStock(name)) => warn!(%name, "Cannot add to cart"),
        Err(e) => error!(error = %e, "Wishlist request failed"),
    }

    let read = system.notification_client.mark_all_read().await?;
    info!(read, unread = system.notification_client.unread_count(), "Notifications read");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
