//! # Subscribers of an event bus.
//!
//! This module provides the types that describe *who* receives published values:
//! - [`Callback`] - shared callback (`Arc<dyn Fn(T)>`) and the [`callback`] helper
//! - [`SubscriptionId`] - identity used for duplicate detection and removal
//! - [`Owner`] - reference-like receiver handle for method subscriptions
//!
//! ## Subscription forms
//! ```text
//! function:  bus.subscribe_fn(&cb)                      id = addr(cb)
//! method:    bus.subscribe_method(&client, Client::rx)  id = (addr(client), addr(Client::rx))
//! ```

mod owner;
mod subscription;

pub use owner::Owner;
pub use subscription::{Callback, SubscriptionId, callback};

pub(crate) use subscription::Subscription;
