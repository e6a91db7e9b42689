use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::Notification;
use crate::notification_actor::{NotificationAction, NotificationError};

/// Client for interacting with the notification feed.
#[derive(Clone)]
pub struct NotificationClient {
    inner: ResourceClient<Notification>,
}

impl_basic_client!(NotificationClient, Notification, NotificationError, notification);
impl_swipe_removal!(NotificationClient, Notification, NotificationError, notification);

impl NotificationClient {
    /// Marks every notification as read and returns how many were unread.
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self) -> Result<usize, NotificationError> {
        let mut changed = 0;
        for notification in self.inner.list().await?.into_iter().filter(|n| n.is_new) {
            if self.inner.perform_action(notification.id, NotificationAction::MarkRead).await? {
                changed += 1;
            }
        }
        debug!(changed, "Marked notifications read");
        Ok(changed)
    }

    pub fn unread_count(&self) -> usize {
        self.inner.snapshot().iter().filter(|n| n.is_new).count()
    }
}
