//! # Example: simple
//!
//! Minimal example of a single function subscriber.
//!
//! Demonstrates how to:
//! - Wrap a closure into a [`Callback`].
//! - Subscribe it, publish a few values, and unsubscribe it again.
//! - Read the last published value back.
//!
//! ## Flow
//! ```text
//! subscribe_fn(&cb)
//!     ├─► publish("hello")  ──► cb("hello")
//!     ├─► publish("world")  ──► cb("world")
//!     ├─► unsubscribe_fn(&cb)
//!     └─► publish("!")      ──► (nobody)   last_value() == "!"
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventbus=debug cargo run --example simple
//! ```

use eventbus::{Callback, EventBus, callback};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bus: EventBus<String> = EventBus::new();
    let cb: Callback<String> = callback(|message: String| tracing::info!(%message, "received"));

    bus.subscribe_fn(&cb)?;
    bus.publish("hello".into());
    bus.publish("world".into());

    bus.unsubscribe_fn(&cb);
    bus.publish("!".into());

    tracing::info!(last = %bus.last_value(), subscribers = bus.subscribers_count(), "done");
    Ok(())
}
