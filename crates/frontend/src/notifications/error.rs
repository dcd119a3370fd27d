use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// No tab carries the active marker when a click arrives.
    #[error("no active tab")]
    NoActiveTab,

    #[error("unknown tab index {0}")]
    UnknownTab(usize),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Network(String),

    #[error("failed to parse response document: {0}")]
    Parse(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("failed to build query string: {0}")]
    Query(String),
}

impl NotificationError {
    /// Failures of the request itself. These end in the user-facing alert;
    /// everything else is either a no-op or a defect surfaced to the page.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Network(_))
    }

    pub fn dom(value: JsValue) -> Self {
        Self::Dom(js_message(&value))
    }

    pub fn parse(value: JsValue) -> Self {
        Self::Parse(js_message(&value))
    }
}

impl From<NotificationError> for JsValue {
    fn from(err: NotificationError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failures() {
        assert!(NotificationError::Status(500).is_request_failure());
        assert!(NotificationError::Network("offline".into()).is_request_failure());
        assert!(!NotificationError::Parse("bad".into()).is_request_failure());
        assert!(!NotificationError::NoActiveTab.is_request_failure());
    }
}
