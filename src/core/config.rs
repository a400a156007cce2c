//! # Bus configuration.
//!
//! Provides [`BusConfig`], the settings an [`EventBus`](crate::EventBus) is built with.
//!
//! ## Sentinel values
//! - `runtime = None` → async dispatch uses the ambient tokio runtime of the
//!   publishing thread, or a detached OS thread when there is none.

use std::borrow::Cow;

use tokio::runtime::Handle;

/// Configuration for a single [`EventBus`](crate::EventBus).
///
/// ## Field semantics
/// - `name`: label attached to every log record of the bus and to fallback dispatch threads
/// - `runtime`: tokio runtime that runs [`publish_async`](crate::EventBus::publish_async) callbacks
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Human-readable bus name used in logs.
    pub name: Cow<'static, str>,

    /// Explicit runtime for asynchronous dispatch.
    ///
    /// When set, callbacks run on this runtime's blocking pool regardless of
    /// which thread published. When `None`, the publishing thread's runtime is
    /// used if it has one, and otherwise each delivery spawns its own OS thread.
    pub runtime: Option<Handle>,
}

impl BusConfig {
    /// Default configuration with a custom bus name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Pins asynchronous dispatch to `handle`.
    #[must_use]
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Name given to OS threads spawned when no runtime is available.
    #[inline]
    pub fn thread_name(&self) -> String {
        format!("{}-dispatch", self.name)
    }
}

impl Default for BusConfig {
    /// Default configuration:
    ///
    /// - `name = "eventbus"`
    /// - `runtime = None` (ambient runtime, else OS thread)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("eventbus"),
            runtime: None,
        }
    }
}
