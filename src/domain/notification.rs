#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Sale,
    Update,
    System,
}

/// An entry in the notification feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative age as shown in the feed, e.g. "5h ago".
    pub time_label: String,
    pub is_new: bool,
}

impl Notification {
    pub fn new(
        id: u64,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            time_label: time_label.into(),
            is_new: true,
        }
    }

    pub fn read(mut self) -> Self {
        self.is_new = false;
        self
    }
}
