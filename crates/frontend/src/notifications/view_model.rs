/// Notification items found in a response document, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPage<T> {
    pub items: Vec<T>,
}

impl<T> NotificationPage<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the notification list should do with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ListUpdate<T> {
    /// Leave the current items in place.
    Keep,
    /// Drop every current item and show these instead.
    Replace(Vec<T>),
}

impl<T> From<NotificationPage<T>> for ListUpdate<T> {
    /// A response without items is a no-op, not an empty list.
    fn from(page: NotificationPage<T>) -> Self {
        if page.is_empty() {
            Self::Keep
        } else {
            Self::Replace(page.items)
        }
    }
}
