//! # Dispatcher: fire-and-forget execution of async deliveries.
//!
//! [`Dispatcher`] runs each delivery of [`EventBus::publish_async`](crate::EventBus::publish_async)
//! as an independent job.
//!
//! ## What it guarantees
//! - `dispatch()` returns without waiting for the job.
//! - Panics inside a job are caught and logged (isolation).
//!
//! ## What it does **not** guarantee
//! - No ordering between jobs.
//! - No completion before the bus or the publisher goes away.
//! - No cancellation of a job once dispatched.
//! - No bound on concurrent jobs. Without a runtime each job is a fresh OS
//!   thread, so `N` publishes to `M` subscribers spawn `N × M` threads. Pin a
//!   runtime with [`BusConfig::with_runtime`] to run jobs on its bounded
//!   blocking pool instead.
//!
//! ## Diagram
//! ```text
//! dispatch(job)
//!     ├─ configured runtime? ──► rt.spawn_blocking(guarded(job))
//!     ├─ ambient runtime?    ──► Handle::current().spawn_blocking(guarded(job))
//!     └─ otherwise           ──► std::thread "<bus>-dispatch" ─► guarded(job)
//!
//! guarded(job) = catch_unwind(job) ─► Err(panic) ─► tracing::error!
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tokio::runtime::Handle;
use tracing::error;

use crate::core::config::BusConfig;
use crate::subscribers::SubscriptionId;

/// Schedules delivery jobs away from the publishing thread.
#[derive(Clone, Debug)]
pub(crate) struct Dispatcher {
    bus: Cow<'static, str>,
    thread_name: String,
    runtime: Option<Handle>,
}

impl Dispatcher {
    pub(crate) fn new(cfg: &BusConfig) -> Self {
        Self {
            bus: cfg.name.clone(),
            thread_name: cfg.thread_name(),
            runtime: cfg.runtime.clone(),
        }
    }

    /// Runs `job` independently of the caller.
    ///
    /// Callbacks are synchronous and may block, so on a runtime they go to the
    /// blocking pool rather than the async workers.
    pub(crate) fn dispatch<F>(&self, id: SubscriptionId, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let bus = self.bus.clone();
        let guarded = move || run_isolated(&bus, id, job);

        if let Some(rt) = self.runtime.clone().or_else(|| Handle::try_current().ok()) {
            drop(rt.spawn_blocking(guarded));
            return;
        }

        if let Err(err) = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(guarded)
        {
            error!(bus = %self.bus, %id, error = %err, "failed to spawn dispatch thread; delivery dropped");
        }
    }
}

fn run_isolated<F: FnOnce()>(bus: &str, id: SubscriptionId, job: F) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(job)) {
        error!(bus, %id, panic = panic_message(payload.as_ref()), "async subscriber panicked");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
