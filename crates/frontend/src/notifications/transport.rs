use contracts::shared::dom_contract::{class_selector, NOTIFICATION_ITEM_CLASS};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{AbortSignal, DomParser, Element, SupportedType};

use super::error::NotificationError;
use super::request::NotificationRequest;
use super::view_model::NotificationPage;

/// Sends the tab request and extracts the notification items of the answer.
///
/// Only status 200 counts as success. Aborting `signal` makes the request
/// resolve with [`NotificationError::Network`].
pub async fn fetch_notification_page(
    request: &NotificationRequest,
    signal: &AbortSignal,
) -> Result<NotificationPage<Element>, NotificationError> {
    let response = Request::get(&request.url)
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(|e| NotificationError::Network(e.to_string()))?;

    if response.status() != 200 {
        return Err(NotificationError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| NotificationError::Network(e.to_string()))?;

    parse_notification_page(&body)
}

/// Parses `html` as a detached document and collects its notification items.
pub fn parse_notification_page(html: &str) -> Result<NotificationPage<Element>, NotificationError> {
    let parser = DomParser::new().map_err(NotificationError::parse)?;
    let document = parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(NotificationError::parse)?;

    let nodes = document
        .query_selector_all(&class_selector(NOTIFICATION_ITEM_CLASS))
        .map_err(NotificationError::parse)?;

    let items = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    Ok(NotificationPage::new(items))
}
