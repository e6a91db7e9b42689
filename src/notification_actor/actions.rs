#[derive(Debug, Clone)]
pub enum NotificationAction {
    MarkRead,
}
