//! Error types returned by the event bus.
//!
//! The taxonomy is intentionally small: both variants are returned
//! synchronously from a subscribe/unsubscribe call and neither leaves the bus
//! in a modified state. Failures inside subscriber callbacks are never turned
//! into a [`BusError`].

use thiserror::Error;

use crate::subscribers::SubscriptionId;

/// # Errors produced by subscription management.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// A subscription with the same identity is already registered.
    ///
    /// The existing subscription is left untouched.
    #[error("already subscribed: {id}")]
    AlreadySubscribed {
        /// Identity that collided with a live subscription.
        id: SubscriptionId,
    },

    /// The receiver handle of a method subscription does not resolve to a live
    /// shared instance, so it has no stable identity.
    #[error("not a pointer: receiver handle does not refer to a live instance")]
    NotAPointer,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventbus::BusError;
    ///
    /// assert_eq!(BusError::NotAPointer.as_label(), "bus_not_a_pointer");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::AlreadySubscribed { .. } => "bus_already_subscribed",
            BusError::NotAPointer => "bus_not_a_pointer",
        }
    }
}
