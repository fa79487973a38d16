//! Header notifications.

/// One entry in the notifications menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub age: String,
}

/// Notification list and the unread badge count.
#[derive(Debug, Clone)]
pub struct NotificationState {
    items: Vec<Notification>,
    unread: usize,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    /// Starts with the demo notifications and a badge of 4.
    pub fn new() -> Self {
        Self {
            items: vec![
                Notification {
                    title: "New order received".to_string(),
                    age: "2 minutes ago".to_string(),
                },
                Notification {
                    title: "Server update completed".to_string(),
                    age: "1 hour ago".to_string(),
                },
            ],
            unread: 4,
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Badge text; `None` hides the badge.
    pub fn badge(&self) -> Option<String> {
        match self.unread {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}
