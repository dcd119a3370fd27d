//! Browser binding of the notification tabs.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::dom_contract::{
    class_selector, ACTIVE_CLASS, IS_ACTION_ATTRIBUTE, NOTIFICATION_ITEM_CLASS,
    NOTIFICATION_LIST_CLASS, TAB_CLASS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, Document, Element, Event, EventTarget};

use super::controller::{Completion, NotificationController, NotificationSurface};
use super::error::NotificationError;
use super::state::TabId;
use super::transport;

/// The live page.
///
/// The `active` class is written from the [`TabId`] the controller hands
/// over; it is never read back after binding.
pub struct DomSurface {
    document: Document,
    tabs: Vec<Element>,
}

impl DomSurface {
    pub fn new(document: Document, tabs: Vec<Element>) -> Self {
        Self { document, tabs }
    }

    fn notification_list(&self) -> Result<Element, NotificationError> {
        let selector = class_selector(NOTIFICATION_LIST_CLASS);
        self.document
            .query_selector(&selector)
            .map_err(NotificationError::dom)?
            .ok_or_else(|| NotificationError::Dom(format!("{} not found", selector)))
    }
}

impl NotificationSurface for DomSurface {
    type Item = Element;

    fn render_active(&mut self, active: TabId) {
        for (index, tab) in self.tabs.iter().enumerate() {
            let classes = tab.class_list();
            let result = if index == active.0 {
                classes.add_1(ACTIVE_CLASS)
            } else {
                classes.remove_1(ACTIVE_CLASS)
            };
            if let Err(err) = result {
                log::warn!("failed to render tab {}: {:?}", index, err);
            }
        }
    }

    fn render_items(&mut self, items: Vec<Element>) -> Result<usize, NotificationError> {
        let list = self.notification_list()?;

        // stage the new items first so a failure leaves the list untouched;
        // appending adopts the nodes from the parsed response document
        let staged = self.document.create_document_fragment();
        for item in &items {
            staged.append_child(item).map_err(NotificationError::dom)?;
        }

        // static NodeList, safe to walk while removing
        let current = list
            .query_selector_all(&class_selector(NOTIFICATION_ITEM_CLASS))
            .map_err(NotificationError::dom)?;
        for i in 0..current.length() {
            let Some(node) = current.get(i) else { continue };
            if let Some(parent) = node.parent_node() {
                parent.remove_child(&node).map_err(NotificationError::dom)?;
            }
        }

        list.append_child(&staged).map_err(NotificationError::dom)?;
        Ok(current.length() as usize)
    }

    fn alert(&mut self, message: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(err) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", err);
        }
    }
}

struct ClickSession {
    controller: NotificationController<DomSurface>,
    /// Aborts the request holding the in-flight slot.
    abort: Option<AbortController>,
}

/// Attaches the click handler to every tab on the page.
///
/// Must run once per page load: a second call binds a second handler to
/// each tab and every click then sends two requests.
pub fn bind_tabs() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let nodes = document.query_selector_all(&class_selector(TAB_CLASS))?;
    let tabs: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    if tabs.is_empty() {
        log::debug!("no notification tabs on this page");
        return Ok(());
    }

    let active = tabs
        .iter()
        .position(|tab| tab.class_list().contains(ACTIVE_CLASS))
        .map(TabId);
    if active.is_none() {
        log::warn!("none of {} tabs is marked {}", tabs.len(), ACTIVE_CLASS);
    }

    let surface = DomSurface::new(document, tabs.clone());
    let session = Rc::new(RefCell::new(ClickSession {
        controller: NotificationController::new(surface, tabs.len(), active),
        abort: None,
    }));

    for (index, tab) in tabs.iter().enumerate() {
        let session = Rc::clone(&session);
        let handler = Closure::<dyn FnMut(Event) -> Result<(), JsValue>>::new(
            move |event: Event| on_tab_click(&session, TabId(index), &event),
        );
        tab.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        // the handler lives as long as the page
        handler.forget();
    }

    log::info!("bound {} notification tabs", tabs.len());
    Ok(())
}

/// `data-is-action` of the element the click landed on. This is not
/// normalized to the tab root: a click on child markup without the
/// attribute yields `None`.
fn target_is_action(target: Option<EventTarget>) -> Option<String> {
    target?
        .dyn_ref::<Element>()?
        .get_attribute(IS_ACTION_ATTRIBUTE)
}

/// An `Err` here is thrown back to the event dispatcher.
fn on_tab_click(
    session: &Rc<RefCell<ClickSession>>,
    tab: TabId,
    event: &Event,
) -> Result<(), JsValue> {
    let is_action = target_is_action(event.target());
    let page_url = web_sys::window()
        .ok_or_else(|| JsValue::from_str("window is not available"))?
        .location()
        .href()?;

    let (pending, signal) = {
        let mut session = session.borrow_mut();
        let pending = session
            .controller
            .click(tab, &page_url, is_action.as_deref())?;

        if let Some(previous) = session.abort.take() {
            log::debug!("aborting request superseded by {}", pending.ticket.0);
            previous.abort();
        }
        let abort = AbortController::new()?;
        let signal = abort.signal();
        session.abort = Some(abort);
        (pending, signal)
    };

    let session = Rc::clone(session);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = transport::fetch_notification_page(&pending.request, &signal).await;

        let mut session = session.borrow_mut();
        match session.controller.complete(pending.ticket, outcome) {
            Ok(Completion::Stale) => {}
            Ok(completion) => {
                session.abort = None;
                log::debug!("request {} finished: {:?}", pending.ticket.0, completion);
            }
            Err(err) => {
                session.abort = None;
                log::error!("failed to apply notification response: {}", err);
            }
        }
    });

    Ok(())
}
