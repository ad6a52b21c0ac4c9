//! Network Module
//!
//! UDP rcon client.
//!
//! ## Architecture
//! - One client owns one blocking socket
//! - Send, then drain replies until the receive timeout fires
//! - No threads, no queues, no in-flight multiplexing

mod client;

pub use client::RconClient;
