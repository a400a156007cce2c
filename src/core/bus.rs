//! # EventBus: typed single-topic fan-out.
//!
//! [`EventBus<T>`] keeps an ordered list of subscriptions and the last published
//! value behind one reader/writer lock.
//!
//! ## Architecture
//! ```text
//! subscribe_* / unsubscribe_*            publish(v) / publish_async(v)
//!        │                                      │
//!        ▼  write lock                          ▼  write lock
//!   build new Vec ──► swap Arc            last_value = v; snap = Arc::clone(list)
//!                                               │  unlock
//!                                               ▼
//!                         publish:        for sub in snap { sub(v.clone()) }     (caller's thread, in order)
//!                         publish_async:  for sub in snap { dispatch(sub, v) }   (independent jobs)
//! ```
//!
//! ## Rules
//! - The subscriber list is copy-on-write: every mutation installs a fresh `Vec`,
//!   so a snapshot held by an in-flight publish is never modified.
//! - The lock is never held while a callback runs; callbacks may call back into
//!   the bus (e.g. unsubscribe themselves) without deadlocking.
//! - Subscribers present at snapshot time receive the value exactly once;
//!   subscribers added during dispatch do not receive it.
//! - A panic in a synchronous callback unwinds into the publisher and skips the
//!   remaining subscribers of that publish. Async panics are caught per job.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::core::config::BusConfig;
use crate::core::dispatch::Dispatcher;
use crate::error::BusError;
use crate::subscribers::{Callback, Owner, Subscription, SubscriptionId};

/// State guarded as a unit by the bus lock.
struct State<T> {
    subscribers: Arc<Vec<Subscription<T>>>,
    last_value: T,
}

/// Typed event channel fanning each published value out to its subscribers.
///
/// ### Properties
/// - **Typed**: one payload type per bus; each subscriber gets its own clone.
/// - **Shareable**: `Send + Sync`, meant to be shared behind an `Arc`.
/// - **Stateful**: remembers the most recently published value.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use eventbus::{Callback, EventBus, callback};
///
/// let bus: EventBus<String> = EventBus::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let cb: Callback<String> = callback(move |msg: String| sink.lock().unwrap().push(msg));
///
/// bus.subscribe_fn(&cb)?;
/// bus.publish("hello".to_string());
/// bus.unsubscribe_fn(&cb);
/// bus.publish("world".to_string());
///
/// assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
/// assert_eq!(bus.last_value(), "world");
/// # Ok::<(), eventbus::BusError>(())
/// ```
pub struct EventBus<T> {
    name: Cow<'static, str>,
    state: RwLock<State<T>>,
    dispatcher: Dispatcher,
}

impl<T> EventBus<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    /// Creates an empty bus with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Creates an empty bus with the given configuration.
    #[must_use]
    pub fn with_config(cfg: BusConfig) -> Self {
        Self::build(cfg, T::default())
    }
}

impl<T> EventBus<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty bus whose last value starts at `initial`.
    ///
    /// Useful for payload types without a meaningful `Default`.
    #[must_use]
    pub fn with_initial(cfg: BusConfig, initial: T) -> Self {
        Self::build(cfg, initial)
    }

    fn build(cfg: BusConfig, initial: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(&cfg),
            name: cfg.name,
            state: RwLock::new(State {
                subscribers: Arc::new(Vec::new()),
                last_value: initial,
            }),
        }
    }

    /// Returns the bus name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a plain callback.
    ///
    /// The identity is the callback's allocation: passing a clone of the same
    /// `Arc` again fails, a separately allocated closure does not.
    ///
    /// ### Errors
    /// [`BusError::AlreadySubscribed`] if `callback` is already registered.
    pub fn subscribe_fn(&self, callback: &Callback<T>) -> Result<SubscriptionId, BusError> {
        let id = SubscriptionId::of_fn(callback);
        self.insert(Subscription::new(id, Arc::clone(callback)))
    }

    /// Registers `method` bound to the receiver behind `owner`.
    ///
    /// The identity is `(receiver, method)`: the same method may be registered
    /// once per receiver instance. The subscription holds a strong reference to
    /// the receiver until it is unsubscribed.
    ///
    /// ### Errors
    /// - [`BusError::NotAPointer`] if `owner` does not resolve to a live instance.
    /// - [`BusError::AlreadySubscribed`] if this pair is already registered.
    pub fn subscribe_method<R, O>(
        &self,
        owner: &O,
        method: fn(&R, T),
    ) -> Result<SubscriptionId, BusError>
    where
        O: Owner<R>,
        R: Send + Sync + 'static,
    {
        let receiver = self.resolve(owner)?;
        let id = SubscriptionId::of_method(&receiver, method);
        let callback: Callback<T> = Arc::new(move |value: T| method(&receiver, value));
        self.insert(Subscription::new(id, callback))
    }

    /// Removes a plain callback.
    ///
    /// Returns `true` if a subscription was removed. Removing a callback that
    /// is not registered is not an error.
    pub fn unsubscribe_fn(&self, callback: &Callback<T>) -> bool {
        self.remove(SubscriptionId::of_fn(callback))
    }

    /// Removes the `(receiver, method)` subscription.
    ///
    /// Returns `Ok(true)` if a subscription was removed and `Ok(false)` if none matched.
    ///
    /// ### Errors
    /// [`BusError::NotAPointer`] if `owner` does not resolve to a live instance,
    /// checked before any lookup.
    pub fn unsubscribe_method<R, O>(&self, owner: &O, method: fn(&R, T)) -> Result<bool, BusError>
    where
        O: Owner<R>,
    {
        let receiver = self.resolve(owner)?;
        Ok(self.remove(SubscriptionId::of_method(&receiver, method)))
    }

    /// Removes the subscription registered under `id`, as returned by a subscribe call.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.remove(id)
    }

    /// Publishes `value` and runs every subscriber on the calling thread, in
    /// registration order, before returning.
    pub fn publish(&self, value: T) {
        let snapshot = self.record(value.clone());
        trace!(bus = %self.name, subscribers = snapshot.len(), "publish");

        for sub in snapshot.iter() {
            sub.call(value.clone());
        }
    }

    /// Publishes `value` and hands every subscriber to independent execution.
    ///
    /// Returns immediately; callbacks may run in any order and after this
    /// call returns. A panicking callback is logged and does not affect others.
    ///
    /// Without a tokio runtime (configured or ambient) every delivery gets its
    /// own OS thread. High-rate publishers on plain threads should pin a runtime
    /// with [`BusConfig::with_runtime`].
    pub fn publish_async(&self, value: T) {
        let snapshot = self.record(value.clone());
        trace!(bus = %self.name, subscribers = snapshot.len(), "publish_async");

        for sub in snapshot.iter() {
            let callback = sub.callback();
            let value = value.clone();
            self.dispatcher.dispatch(sub.id(), move || callback(value));
        }
    }

    /// Returns the most recently published value, or the initial value if
    /// nothing was published yet.
    #[must_use]
    pub fn last_value(&self) -> T {
        self.state.read().last_value.clone()
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscribers_count(&self) -> usize {
        self.state.read().subscribers.len()
    }

    /// Returns true if `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.state.read().subscribers.iter().any(|s| s.id() == id)
    }

    fn resolve<R, O: Owner<R>>(&self, owner: &O) -> Result<Arc<R>, BusError> {
        owner.resolve().ok_or_else(|| {
            warn!(bus = %self.name, "receiver handle does not refer to a live instance");
            BusError::NotAPointer
        })
    }

    /// Stores the last value and returns a snapshot of the subscriber list.
    fn record(&self, value: T) -> Arc<Vec<Subscription<T>>> {
        let mut state = self.state.write();
        state.last_value = value;
        Arc::clone(&state.subscribers)
    }

    fn insert(&self, sub: Subscription<T>) -> Result<SubscriptionId, BusError> {
        let id = sub.id();
        let count = {
            let mut state = self.state.write();
            if state.subscribers.iter().any(|s| s.id() == id) {
                drop(state);
                warn!(bus = %self.name, %id, "duplicate subscription rejected");
                return Err(BusError::AlreadySubscribed { id });
            }

            let mut next = Vec::with_capacity(state.subscribers.len() + 1);
            next.extend(state.subscribers.iter().cloned());
            next.push(sub);
            state.subscribers = Arc::new(next);
            state.subscribers.len()
        };

        debug!(bus = %self.name, %id, subscribers = count, "subscribed");
        Ok(id)
    }

    fn remove(&self, id: SubscriptionId) -> bool {
        let count = {
            let mut state = self.state.write();
            if !state.subscribers.iter().any(|s| s.id() == id) {
                return false;
            }

            let next: Vec<_> = state
                .subscribers
                .iter()
                .filter(|s| s.id() != id)
                .cloned()
                .collect();
            state.subscribers = Arc::new(next);
            state.subscribers.len()
        };

        debug!(bus = %self.name, %id, subscribers = count, "unsubscribed");
        true
    }
}

impl<T> Default for EventBus<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("name", &self.name)
            .field("subscribers", &self.state.read().subscribers.len())
            .finish_non_exhaustive()
    }
}
