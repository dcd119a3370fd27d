//! Markup contract between the notification page and the browser controller.
//!
//! The server renders elements with these classes and attributes; the wasm
//! controller looks them up.

/// Class of every clickable tab.
pub const TAB_CLASS: &str = "tab";

/// Class marking the currently selected tab.
pub const ACTIVE_CLASS: &str = "active";

/// Class of the single container holding the notification items.
pub const NOTIFICATION_LIST_CLASS: &str = "notification-list";

/// Class of one notification entry.
pub const NOTIFICATION_ITEM_CLASS: &str = "notification-item";

/// Attribute carrying a tab's filter (`dataset.isAction` in JS).
pub const IS_ACTION_ATTRIBUTE: &str = "data-is-action";

/// Text of the blocking alert shown when a tab request fails.
pub const COMMUNICATION_FAILED: &str = "通信に失敗しました。";

/// CSS selector for a class name, e.g. `notification-item` -> `.notification-item`.
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}
