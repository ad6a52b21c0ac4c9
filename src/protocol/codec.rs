//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! The charset is Windows-1252, a compatibility requirement of this server
//! generation: accented characters in player names and messages occupy one
//! byte on the wire. Do not swap it for UTF-8 without breaking wire
//! compatibility. Characters with no Windows-1252 mapping are replaced at
//! encode time, never rejected.

use bytes::{BufMut, Bytes, BytesMut};
use encoding_rs::WINDOWS_1252;

use super::{OOB_MARKER, PRINT_HEADER};

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a command line into a single request datagram
///
/// Format: marker (4) + "rcon " + password + " " + command, with everything
/// after the marker in Windows-1252. The client never fragments; if the
/// server splits anything it is the response side only.
pub fn encode_command(password: &str, command: &str) -> Bytes {
    let line = format!("rcon {} {}", password, command);
    let (encoded, _, _) = WINDOWS_1252.encode(&line);

    let mut datagram = BytesMut::with_capacity(OOB_MARKER.len() + encoded.len());
    datagram.put_slice(&OOB_MARKER);
    datagram.put_slice(&encoded);

    datagram.freeze()
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Clean and decode one response datagram
///
/// Cleaning order: drop every NUL byte, then drop one occurrence of the
/// per-packet `print` echo header, then decode the remainder as
/// Windows-1252. Single-byte charset, so byte-level cleaning and decoded
/// text cleaning are equivalent.
pub fn decode_datagram(datagram: &[u8]) -> String {
    let mut bytes: Vec<u8> = datagram.iter().copied().filter(|&b| b != 0x00).collect();

    if let Some(at) = find(&bytes, PRINT_HEADER) {
        bytes.drain(at..at + PRINT_HEADER.len());
    }

    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    text.into_owned()
}

/// First occurrence of `needle` in `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
