//! # Subscription entries and their identities.
//!
//! A [`Subscription`] pairs a [`Callback`] with the [`SubscriptionId`] used to
//! find it again on unsubscribe. Identities are derived from run-time addresses,
//! so callers never have to name their subscriptions:
//!
//! ```text
//! subscribe_fn(&cb)               ──► SubscriptionId::Func   { addr(Arc<cb>) }
//! subscribe_method(&owner, M::f)  ──► SubscriptionId::Method { addr(Arc<owner>), addr(M::f) }
//! ```
//!
//! ## Rules
//! - Cloning the same `Arc` callback yields the same identity.
//! - Two separately allocated closures never share an identity, even if they
//!   are logically equal.
//! - An entry keeps its callback (and, for methods, its receiver) alive, so an
//!   address cannot be reused by another allocation while the entry is registered.
//! - Method identity uses the address of the method item. The compiler may merge
//!   two methods with identical bodies, in which case they share an identity.

use std::fmt;
use std::sync::Arc;

/// Shared callback invoked with each published value.
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

/// Wraps a closure into a [`Callback`], letting the payload type drive inference.
///
/// ## Example
/// ```rust
/// use eventbus::{Callback, callback};
///
/// let cb: Callback<String> = callback(|msg: String| println!("{msg}"));
/// let same = cb.clone(); // same identity as `cb`
/// # let _ = same;
/// ```
pub fn callback<T, F>(f: F) -> Callback<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Opaque identity of a registered subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionId {
    /// Plain function subscription, keyed by the callback allocation.
    Func(usize),
    /// Bound method subscription, keyed by receiver allocation and method address.
    Method {
        /// Address of the receiver's shared allocation.
        owner: usize,
        /// Address of the bound method.
        method: usize,
    },
}

impl SubscriptionId {
    /// Identity of a plain function subscription.
    pub fn of_fn<T>(cb: &Callback<T>) -> Self {
        SubscriptionId::Func(Arc::as_ptr(cb).cast::<()>() as usize)
    }

    /// Identity of a `(receiver, method)` subscription.
    pub fn of_method<R, T>(owner: &Arc<R>, method: fn(&R, T)) -> Self {
        SubscriptionId::Method {
            owner: Arc::as_ptr(owner).cast::<()>() as usize,
            method: method as usize,
        }
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionId::Func(addr) => write!(f, "fn@{addr:#x}"),
            SubscriptionId::Method { owner, method } => {
                write!(f, "method@{owner:#x}/{method:#x}")
            }
        }
    }
}

/// One registered receiver. Never mutated after creation.
pub(crate) struct Subscription<T> {
    id: SubscriptionId,
    callback: Callback<T>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(id: SubscriptionId, callback: Callback<T>) -> Self {
        Self { id, callback }
    }

    #[inline]
    pub(crate) fn id(&self) -> SubscriptionId {
        self.id
    }

    #[inline]
    pub(crate) fn call(&self, value: T) {
        (self.callback)(value)
    }

    /// Owned handle to the callback, for dispatch outside the subscriber list.
    pub(crate) fn callback(&self) -> Callback<T> {
        Arc::clone(&self.callback)
    }
}

impl<T> Clone for Subscription<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}
