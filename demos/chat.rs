//! # Example: chat
//!
//! A server owns an [`EventBus`] of chat messages; clients connect by
//! subscribing one of their methods and disconnect by unsubscribing it.
//!
//! Demonstrates how to:
//! - Use method subscriptions so the same method is registered once per client.
//! - Publish from a background thread while clients come and go.
//! - Carry a struct payload through the bus.
//!
//! ## Flow
//! ```text
//! bob.connect()   ──► subscribe_method(&bob,   Client::receive)
//! alice.connect() ──► subscribe_method(&alice, Client::receive)
//! sender thread   ──► publish(Message) x3 ──► every client except the sender logs it
//! bob.disconnect()──► unsubscribe_method(&bob, Client::receive)
//! alice.send()    ──► nobody else is listening
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example chat
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eventbus::{BusConfig, BusError, EventBus};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct Message {
    sender: String,
    text: String,
}

struct Server {
    bus: EventBus<Message>,
}

struct Client {
    name: String,
    server: Arc<Server>,
}

impl Client {
    fn new(name: &str, server: &Arc<Server>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            server: Arc::clone(server),
        })
    }

    fn receive(&self, message: Message) {
        if message.sender == self.name {
            return;
        }
        info!(client = %self.name, from = %message.sender, text = %message.text, "got message");
    }

    fn send(&self, text: &str) {
        self.server.bus.publish(Message {
            sender: self.name.clone(),
            text: text.to_string(),
        });
    }

    fn connect(self: &Arc<Self>) -> Result<(), BusError> {
        info!(client = %self.name, "connected");
        self.server.bus.subscribe_method(self, Client::receive)?;
        Ok(())
    }

    fn disconnect(self: &Arc<Self>) -> Result<(), BusError> {
        info!(client = %self.name, "disconnected");
        self.server.bus.unsubscribe_method(self, Client::receive)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server = Arc::new(Server {
        bus: EventBus::with_config(BusConfig::named("chat")),
    });

    let bob = Client::new("Bob", &server);
    bob.connect()?;
    let alice = Client::new("Alice", &server);
    alice.connect()?;

    let sender = {
        let (bob, alice) = (Arc::clone(&bob), Arc::clone(&alice));
        thread::spawn(move || {
            for i in 0..3 {
                if i % 2 == 0 {
                    bob.send("Hello!");
                } else {
                    alice.send("Ola!");
                }
                thread::sleep(Duration::from_millis(200));
            }
        })
    };
    sender
        .join()
        .map_err(|_| anyhow::anyhow!("sender thread panicked"))?;

    bob.disconnect()?;
    alice.send("Where are you?");

    info!(
        subscribers = server.bus.subscribers_count(),
        last = %server.bus.last_value().text,
        "chat closed"
    );
    alice.disconnect()?;
    Ok(())
}
