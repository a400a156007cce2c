//! # eventbus
//!
//! **eventbus** is a typed, in-process publish/subscribe primitive for Rust.
//!
//! One [`EventBus<T>`] carries one payload type and one stream of events. A
//! published value fans out to every registered callback, either on the
//! publisher's thread ([`EventBus::publish`]) or as independent jobs
//! ([`EventBus::publish_async`]). The bus also remembers the last value it saw.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   subscribe_fn(&cb)          subscribe_method(&client, Client::receive)
//!          │                                  │
//!          ▼                                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventBus<T>                                                      │
//! │  RwLock {                                                         │
//! │    subscribers: Arc<Vec<Subscription<T>>>   (copy-on-write)       │
//! │    last_value:  T                                                 │
//! │  }                                                                │
//! │  Dispatcher (async jobs, panic isolation)                         │
//! └──────┬──────────────────────────────────────────────────┬─────────┘
//!        │ publish(v)                                       │ publish_async(v)
//!        ▼                                                  ▼
//!   snapshot, unlock                                   snapshot, unlock
//!   cb1(v) ─► cb2(v) ─► cbN(v)                  ┌──────────┼──────────┐
//!   (caller's thread, in order)                 ▼          ▼          ▼
//!                                             job1       job2       jobN
//!                                           (blocking pool or OS thread)
//! ```
//!
//! ### Identity
//! ```text
//! subscribe_fn(&cb)                     ─► SubscriptionId::Func(addr(cb))
//! subscribe_method(&owner, Type::method) ─► SubscriptionId::Method { addr(owner), addr(method) }
//! ```
//! Registering the same identity twice fails with [`BusError::AlreadySubscribed`];
//! unsubscribing an unknown identity is a no-op.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Bus**           | Subscribe, unsubscribe, publish (sync/async), queries.       | [`EventBus`]                                |
//! | **Subscribers**   | Callbacks, identities, receiver handles for methods.         | [`Callback`], [`SubscriptionId`], [`Owner`] |
//! | **Errors**        | Typed subscription errors.                                   | [`BusError`]                                |
//! | **Configuration** | Bus name and async dispatch runtime.                         | [`BusConfig`]                               |
//!
//! ## Logging
//! The crate emits [`tracing`] records (subscribe/unsubscribe at `debug`,
//! publish at `trace`, rejected registrations at `warn`, async subscriber
//! panics at `error`). It never installs a subscriber itself.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use eventbus::{BusError, EventBus};
//!
//! struct Client {
//!     name: &'static str,
//!     inbox: Mutex<Vec<String>>,
//! }
//!
//! impl Client {
//!     fn receive(&self, msg: String) {
//!         self.inbox.lock().unwrap().push(format!("{} got {msg}", self.name));
//!     }
//! }
//!
//! fn main() -> Result<(), BusError> {
//!     let bus: EventBus<String> = EventBus::new();
//!     let bob = Arc::new(Client { name: "bob", inbox: Mutex::new(Vec::new()) });
//!     let alice = Arc::new(Client { name: "alice", inbox: Mutex::new(Vec::new()) });
//!
//!     bus.subscribe_method(&bob, Client::receive)?;
//!     bus.subscribe_method(&alice, Client::receive)?;
//!     bus.publish("ping".to_string());
//!
//!     bus.unsubscribe_method(&bob, Client::receive)?;
//!     bus.publish("pong".to_string());
//!
//!     assert_eq!(*bob.inbox.lock().unwrap(), vec!["bob got ping"]);
//!     assert_eq!(*alice.inbox.lock().unwrap(), vec!["alice got ping", "alice got pong"]);
//!     assert_eq!(bus.last_value(), "pong");
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{BusConfig, EventBus};
pub use error::BusError;
pub use subscribers::{Callback, Owner, SubscriptionId, callback};
