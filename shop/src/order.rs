//! Order state: the checkout workflow's request → success/failure machine.
//!
//! Each placement attempt moves through `idle → placing → confirmed` or
//! `idle → placing → failed`, expressed here through the `loading`,
//! `error`, and `current_order` fields. History is append-only with the
//! most recent order first.

use crate::types::Order;

/// State of the order domain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderState {
    /// The order confirmed by the most recent placement, until dismissed
    pub current_order: Option<Order>,
    /// All confirmed orders, most recent first
    pub history: Vec<Order>,
    /// Placement in flight
    pub loading: bool,
    /// Last placement error
    pub error: Option<String>,
}

impl OrderState {
    /// Enter the `placing` state, clearing any previous failure
    pub fn begin_placement(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed placement
    pub fn fail_placement(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Record a confirmed placement
    ///
    /// The order becomes `current_order` and is prepended to the history.
    pub fn confirm(&mut self, order: Order) {
        self.loading = false;
        self.current_order = Some(order.clone());
        self.history.insert(0, order);
    }

    /// Dismiss the confirmation, keeping the history
    pub fn clear_current(&mut self) {
        self.current_order = None;
        self.error = None;
    }
}
