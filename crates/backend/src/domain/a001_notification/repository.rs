use std::sync::Arc;

use contracts::domain::a001_notification::aggregate::{
    Notification, NotificationId, NotificationKind,
};
use tokio::sync::RwLock;

/// In-memory notification storage
#[derive(Clone, Default)]
pub struct NotificationStore {
    items: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationStore {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Notifications of one kind, newest first
    pub async fn list_by_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        let items = self.items.read().await;
        let mut result: Vec<Notification> = items
            .iter()
            .filter(|n| n.kind == kind)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    pub async fn insert(&self, notification: Notification) -> NotificationId {
        let id = notification.id;
        self.items.write().await.push(notification);
        id
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}
