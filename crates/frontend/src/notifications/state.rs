use super::error::NotificationError;

/// Position of a tab in document order at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub usize);

/// Identifies the request a click started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

/// Result of moving the selection to another tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub previous: TabId,
    pub ticket: RequestTicket,
    /// Request that held the in-flight slot before this click, if any.
    pub superseded: Option<RequestTicket>,
}

/// Selected tab plus the single in-flight request slot.
///
/// This is the source of truth for the `active` marker; the DOM class is
/// rendered from `active`, never read back.
#[derive(Debug, Clone, Default)]
pub struct NotificationTabsState {
    pub tab_count: usize,
    pub active: Option<TabId>,
    pub in_flight: Option<RequestTicket>,
    next_ticket: u64,
}

impl NotificationTabsState {
    pub fn new(tab_count: usize, active: Option<TabId>) -> Self {
        let active = active.filter(|tab| tab.0 < tab_count);
        Self {
            tab_count,
            active,
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Marks `tab` active and gives the in-flight slot to a new ticket.
    ///
    /// Fails without touching the state when no tab is active yet.
    pub fn select(&mut self, tab: TabId) -> Result<Selection, NotificationError> {
        let previous = self.active.ok_or(NotificationError::NoActiveTab)?;
        if tab.0 >= self.tab_count {
            return Err(NotificationError::UnknownTab(tab.0));
        }

        self.next_ticket += 1;
        let ticket = RequestTicket(self.next_ticket);
        let superseded = self.in_flight.replace(ticket);
        self.active = Some(tab);

        Ok(Selection {
            previous,
            ticket,
            superseded,
        })
    }

    /// Releases the slot if `ticket` still holds it.
    ///
    /// Returns `false` for a stale ticket, whose response must be dropped.
    pub fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == Some(tab)
    }
}
