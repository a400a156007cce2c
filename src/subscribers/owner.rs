//! # Receiver handles for method subscriptions.
//!
//! A method subscription is keyed by the address of its receiver, so the
//! receiver must live in a shared allocation whose address stays put after the
//! call returns. [`Owner`] encodes that contract in the type system: only
//! reference-like handles implement it, and a plain value cannot be passed.
//!
//! | Handle     | Resolves to                        |
//! |------------|------------------------------------|
//! | `Arc<R>`   | always the pointed-to instance     |
//! | `Weak<R>`  | the instance while it is alive     |
//!
//! A handle that does not resolve (a `Weak` whose target is gone, or
//! `Weak::new()`) is reported as [`BusError::NotAPointer`](crate::BusError::NotAPointer).

use std::sync::{Arc, Weak};

/// Reference-like handle to a subscription receiver.
pub trait Owner<R> {
    /// Returns a strong handle to the receiver, or `None` if the handle does
    /// not refer to a live instance.
    fn resolve(&self) -> Option<Arc<R>>;
}

impl<R> Owner<R> for Arc<R> {
    fn resolve(&self) -> Option<Arc<R>> {
        Some(Arc::clone(self))
    }
}

impl<R> Owner<R> for Weak<R> {
    fn resolve(&self) -> Option<Arc<R>> {
        self.upgrade()
    }
}
