//! Network module.
//!
//! Contains the Dialer capability, the Connection manager (dial, handshake,
//! teardown, writes) and the chat read loop.

mod connection;
mod dialer;
mod read_loop;

pub use connection::Connection;
pub use dialer::{Dialer, TcpDialer};

#[cfg(test)]
pub(crate) use dialer::testing;
