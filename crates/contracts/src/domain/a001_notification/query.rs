use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::NotificationKind;

/// Query string of a notification page request: `?isAction=<value>`.
///
/// The browser sends whatever string the clicked element carried, including
/// the literal `undefined`, so the value stays a raw string here and is only
/// interpreted by [`NotificationFilter::from_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationQuery {
    #[serde(rename = "isAction", default, skip_serializing_if = "Option::is_none")]
    pub is_action: Option<String>,
}

impl NotificationQuery {
    pub fn new(is_action: impl Into<String>) -> Self {
        Self {
            is_action: Some(is_action.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unsupported isAction value: {0}")]
    InvalidValue(String),
}

/// Which notifications a page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationFilter {
    #[default]
    Action,
    Info,
}

impl NotificationFilter {
    /// Missing or empty `isAction` selects action notifications.
    pub fn from_query(query: &NotificationQuery) -> Result<Self, FilterError> {
        match query.is_action.as_deref() {
            None | Some("") | Some("true") => Ok(Self::Action),
            Some("false") => Ok(Self::Info),
            Some(other) => Err(FilterError::InvalidValue(other.to_string())),
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Action => NotificationKind::Action,
            Self::Info => NotificationKind::Info,
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Action, Self::Info]
    }
}
