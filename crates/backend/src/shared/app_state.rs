use crate::domain::a001_notification::repository::NotificationStore;

/// Shared state of the HTTP handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub notifications: NotificationStore,
}

impl AppState {
    pub fn new(notifications: NotificationStore) -> Self {
        Self { notifications }
    }
}
