use contracts::shared::dom_contract::COMMUNICATION_FAILED;

use super::error::NotificationError;
use super::request::NotificationRequest;
use super::state::{NotificationTabsState, RequestTicket, TabId};
use super::view_model::{ListUpdate, NotificationPage};

/// The view the controller renders into.
///
/// The browser implementation lives in [`super::dom`]; tests use an
/// in-memory page.
pub trait NotificationSurface {
    type Item;

    /// Shows `active` as the only selected tab.
    fn render_active(&mut self, active: TabId);

    /// Removes every current notification item, then appends `items` in
    /// order. Returns how many items were removed.
    fn render_items(&mut self, items: Vec<Self::Item>) -> Result<usize, NotificationError>;

    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
}

/// A request started by a click, to be finished with
/// [`NotificationController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub superseded: Option<RequestTicket>,
    pub request: NotificationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Replaced { removed: usize, inserted: usize },
    Unchanged,
    Alerted,
    /// A later click took the in-flight slot; the response was dropped.
    Stale,
}

pub struct NotificationController<S> {
    state: NotificationTabsState,
    surface: S,
}

impl<S: NotificationSurface> NotificationController<S> {
    pub fn new(surface: S, tab_count: usize, active: Option<TabId>) -> Self {
        Self {
            state: NotificationTabsState::new(tab_count, active),
            surface,
        }
    }

    pub fn state(&self) -> &NotificationTabsState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles a click on `tab`.
    ///
    /// `is_action` is the data attribute of the element the click landed on,
    /// which may be a child of the tab rather than the tab itself.
    pub fn click(
        &mut self,
        tab: TabId,
        page_url: &str,
        is_action: Option<&str>,
    ) -> Result<PendingRequest, NotificationError> {
        let request = NotificationRequest::for_page(page_url, is_action)?;
        let selection = self.state.select(tab)?;
        self.surface.render_active(tab);

        log::debug!(
            "tab {} -> {}, {} {}",
            selection.previous.0,
            tab.0,
            NotificationRequest::METHOD,
            request.url
        );

        Ok(PendingRequest {
            ticket: selection.ticket,
            superseded: selection.superseded,
            request,
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<NotificationPage<S::Item>, NotificationError>,
    ) -> Result<Completion, NotificationError> {
        if !self.state.settle(ticket) {
            log::debug!("dropping response of superseded request {}", ticket.0);
            return Ok(Completion::Stale);
        }

        let page = match outcome {
            Ok(page) => page,
            Err(err) if err.is_request_failure() => {
                log::warn!("notification request failed: {}", err);
                self.surface.alert(COMMUNICATION_FAILED);
                return Ok(Completion::Alerted);
            }
            Err(NotificationError::Parse(reason)) => {
                log::warn!("ignoring unparsable notification response: {}", reason);
                return Ok(Completion::Unchanged);
            }
            Err(err) => return Err(err),
        };

        match ListUpdate::from(page) {
            ListUpdate::Keep => Ok(Completion::Unchanged),
            ListUpdate::Replace(items) => {
                let inserted = items.len();
                let removed = self.surface.render_items(items)?;
                Ok(Completion::Replaced { removed, inserted })
            }
        }
    }
}
