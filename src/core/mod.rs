//! Bus core: state, dispatch and configuration.
//!
//! The only public API from this module is [`EventBus`] and its [`BusConfig`].
//!
//! Internal modules:
//! - [`bus`]: subscriber list, last value, synchronous and asynchronous publish;
//! - [`dispatch`]: independent execution of async deliveries with panic isolation;
//! - [`config`]: bus name and runtime selection.

mod bus;
mod config;
mod dispatch;

pub use bus::EventBus;
pub use config::BusConfig;
