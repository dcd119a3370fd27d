//! Notification tabs.
//!
//! Clicking a tab on the notification page fetches the same page with
//! `?isAction=<value>` and swaps the `notification-item` nodes of the
//! `notification-list` container for the ones in the response.
//!
//! The decision logic ([`controller`], [`state`], [`request`], [`view_model`])
//! has no DOM dependency; [`dom`] and [`transport`] bind it to the browser.

pub mod controller;
pub mod dom;
pub mod error;
pub mod request;
pub mod state;
pub mod transport;
pub mod view_model;
