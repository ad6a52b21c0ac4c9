//! Protocol Module
//!
//! Defines the rcon wire protocol spoken by this server generation.
//!
//! ## Protocol Format (connectionless UDP)
//!
//! ### Request Datagram
//! ```text
//! ┌─────────────────┬─────────┬──────────┬─────┬─────────┐
//! │ FF FF FF FF (4) │ "rcon " │ password │ " " │ command │
//! └─────────────────┴─────────┴──────────┴─────┴─────────┘
//! ```
//!
//! ### Response Datagram (one or more per request)
//! ```text
//! ┌─────────────────┬───────────┬──────────────────────────┐
//! │ FF FF FF FF (4) │ "print\n" │ text (may contain NULs)  │
//! └─────────────────┴───────────┴──────────────────────────┘
//! ```
//!
//! Everything after the out-of-band marker is Windows-1252, not UTF-8.
//! There is no length field, no response count, and no request id: the end
//! of a response is signaled only by the absence of further datagrams
//! within the receive timeout window.

mod codec;
mod command;
mod status;

pub use codec::{decode_datagram, encode_command};
pub use command::{Command, PrintTarget};
pub use status::StatusParser;

/// Out-of-band marker opening every request and response datagram
pub const OOB_MARKER: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Per-packet echo header the server prepends to each response datagram
pub const PRINT_HEADER: &[u8] = b"\xFF\xFF\xFF\xFFprint\n";

/// Receive buffer size per datagram
pub const RECV_BUFFER_SIZE: usize = 1024;
