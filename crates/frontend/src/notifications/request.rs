use contracts::domain::a001_notification::query::NotificationQuery;

use super::error::NotificationError;

/// What an absent `isAction` attribute turns into on the wire.
pub const UNDEFINED_IS_ACTION: &str = "undefined";

/// A tab request: `GET <page>?isAction=<value>`, answered with an HTML
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub url: String,
}

impl NotificationRequest {
    pub const METHOD: &'static str = "GET";

    /// Builds the request for the page at `page_url`.
    ///
    /// `page_url` is the full location; any query string or fragment it has
    /// is replaced so the request carries `isAction` only.
    pub fn for_page(page_url: &str, is_action: Option<&str>) -> Result<Self, NotificationError> {
        let query = NotificationQuery::new(is_action.unwrap_or(UNDEFINED_IS_ACTION));
        let query_string =
            serde_qs::to_string(&query).map_err(|e| NotificationError::Query(e.to_string()))?;

        Ok(Self {
            url: format!("{}?{}", page_base(page_url), query_string),
        })
    }
}

fn page_base(page_url: &str) -> &str {
    match page_url.find(|c| c == '?' || c == '#') {
        Some(end) => &page_url[..end],
        None => page_url,
    }
}
