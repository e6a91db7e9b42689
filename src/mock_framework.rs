//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, RequestKey, ResourceClient, ResourceRequest, Response};
use tokio::sync::{mpsc, watch};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing *client* logic (e.g. `OrderClient`) there is no need to spin up a
/// full `ResourceActor`. The mock client sends into a channel the test owns, so the
/// test can inspect each request and answer it however the case needs.
///
/// `snapshot` is what the client reports as the latest published list.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
    snapshot: Vec<T>,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    // The publishing half is dropped; the receiver keeps the last value.
    let (_, snapshots) = watch::channel(snapshot);
    (ResourceClient::new(sender, snapshots), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Option<RequestKey>, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, key, respond_to }) => Some((id, action, key, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::{CartClient, OrderClient};
    use crate::domain::{CartCreate, CartItem, Order, OrderStatus};
    use crate::navigation::TransitionRequest;
    use crate::order_actor::{Feedback, FeedbackError, OrderAction, OrderError, TransitionOutcome};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<CartItem>(10, Vec::new());
        let cart = CartClient::new(client, 300);

        let create_task = tokio::spawn(async move {
            let line = CartCreate { name: "Capo".into(), price: 450, quantity: 1, image_ref: "capo.png".into() };
            cart.add_item(line).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Capo");
        responder.send(Ok(12)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(12));
    }

    #[tokio::test]
    async fn test_consume_sends_request_key() {
        let (client, mut receiver) = create_mock_client::<Order>(10, Vec::new());
        let orders = OrderClient::new(client);
        let request = TransitionRequest::cancel(4, "Duplicate order", OrderStatus::ToPay);
        let expected_key = request.key;

        let task = tokio::spawn(async move { orders.consume(&request).await });

        let (id, action, key, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, 4);
        assert_eq!(action, OrderAction::Cancel { reason: "Duplicate order".into() });
        assert_eq!(key, Some(expected_key));
        let applied = TransitionOutcome::Applied { from: OrderStatus::ToPay, to: OrderStatus::Cancelled };
        responder.send(Ok(applied)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(applied));
    }

    #[tokio::test]
    async fn test_unknown_order_is_ignored_not_an_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10, Vec::new());
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.complete(99).await });

        let (_, _, key, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(key, None);
        responder.send(Err(FrameworkError::NotFound("99".into()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(TransitionOutcome::Ignored));
    }

    #[tokio::test]
    async fn test_invalid_feedback_never_reaches_the_store() {
        let (client, mut receiver) = create_mock_client::<Order>(10, Vec::new());
        let orders = OrderClient::new(client);

        let result = orders.submit_feedback(3, &Feedback::new(0, "Lovely tone overall")).await;
        assert_eq!(result, Err(OrderError::InvalidFeedback(FeedbackError::RatingRequired)));

        drop(orders);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_checkout_refused_without_selection() {
        let (client, mut receiver) = create_mock_client::<CartItem>(10, Vec::new());
        let cart = CartClient::new(client, 300);

        let task = tokio::spawn(async move { cart.checkout().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![CartItem::new(1, "Capo", 450, 1, "capo.png")])).unwrap();

        assert_eq!(task.await.unwrap(), Err(crate::cart_actor::CartError::NothingSelected));
    }

    #[tokio::test]
    async fn test_summary_reads_snapshot_without_request() {
        let snapshot = vec![
            CartItem::new(1, "Capo", 450, 2, "capo.png").selected(),
            CartItem::new(2, "Strap", 800, 1, "strap.png"),
        ];
        let (client, mut receiver) = create_mock_client::<CartItem>(10, snapshot);
        let cart = CartClient::new(client, 300);

        let summary = cart.summary();
        assert_eq!(summary.total, 2 * 450 + 300);

        drop(cart);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_swipe_removal_sends_delete() {
        let (client, mut receiver) = create_mock_client::<CartItem>(10, Vec::new());
        let cart = CartClient::new(client, 300);

        let task = tokio::spawn(async move { cart.remove_cart_item(5).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, 5);
        responder.send(Ok(())).unwrap();
        assert_eq!(task.await.unwrap(), Ok(()));

        assert!(expect_get::<CartItem>(&mut receiver).await.is_none());
    }
}
