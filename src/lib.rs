//! # qrcon
//!
//! Admin console client for legacy Quake-derived game servers:
//! - Password-authenticated rcon commands over connectionless UDP
//! - Multi-datagram response draining with timeout-as-terminator semantics
//! - Windows-1252 wire charset for this server generation
//! - Typed command builders and player-slot extraction from status reports
//! - Regex-driven chat command dispatch for admin tooling
//!
//! ## Data Flow
//!
//! ```text
//!  caller ──► Command / raw line
//!                  │
//!                  ▼
//!           protocol::codec ──► one request datagram ──► UDP socket
//!                                                          │
//!           accumulated text ◄── decode + clean ◄── 0..n reply datagrams
//!                  │
//!                  ▼
//!           StatusParser (optional) ──► player slots
//! ```
//!
//! The wire protocol has no request id: one client, one socket, one
//! outstanding request. `RconClient::send` takes `&mut self` to make that
//! invariant a compile-time property.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod dispatch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RconError, Result};
pub use config::ClientConfig;
pub use network::RconClient;
pub use protocol::{Command, PrintTarget, StatusParser};
pub use dispatch::{Args, CommandRegistry};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of qrcon
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
