//! Rcon Client
//!
//! Owns the UDP socket and speaks the rcon protocol: encode one command
//! datagram, transmit, then drain response datagrams until the receive
//! timeout fires.
//!
//! The protocol carries no request id, so responses cannot be correlated;
//! only one request may be outstanding per socket. `send` takes `&mut self`
//! so the borrow checker enforces that serialization instead of a lock.

use std::io::ErrorKind;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{RconError, Result};
use crate::protocol::{
    decode_datagram, encode_command, Command, PrintTarget, StatusParser, RECV_BUFFER_SIZE,
};

/// Blocking rcon client for one game server
pub struct RconClient {
    /// Bound local socket, receive timeout already set
    socket: UdpSocket,

    /// Remote server endpoint
    remote: SocketAddr,

    /// Shared admin password, sent with every request
    password: String,

    /// Parser for `status` reports
    parser: StatusParser,
}

impl RconClient {
    /// Bind a socket and remember the server endpoint
    ///
    /// No handshake is performed; the password is only validated implicitly
    /// by whether the server acts on later commands. Fails if the remote
    /// address does not resolve or the local bind cannot be satisfied.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let remote = config
            .remote_addr
            .to_socket_addrs()
            .map_err(|e| RconError::Address(format!("{}: {}", config.remote_addr, e)))?
            .next()
            .ok_or_else(|| RconError::Address(config.remote_addr.clone()))?;

        tracing::info!("Binding rcon client to {}", config.bind_addr);
        let socket = UdpSocket::bind(config.bind_addr.as_str())?;
        socket.set_read_timeout(Some(Duration::from_millis(config.timeout_ms)))?;
        tracing::info!("Ready to send commands to {}", remote);

        Ok(Self {
            socket,
            remote,
            password: config.password.clone(),
            parser: StatusParser::new(),
        })
    }

    /// Send a raw command line and collect the server's reply text
    ///
    /// Best effort: a transmit failure is logged and yields an empty
    /// response rather than an error, so a polling admin loop keeps going.
    /// An empty return also just means the server sent nothing within one
    /// timeout window.
    pub fn send(&mut self, command: &str) -> String {
        let datagram = encode_command(&self.password, command);

        tracing::debug!("rcon > {}", command);
        if let Err(e) = self.socket.send_to(&datagram, self.remote) {
            tracing::error!("Failed to transmit rcon command: {}", e);
            return String::new();
        }

        self.drain()
    }

    /// Collect response datagrams until the receive timeout fires
    ///
    /// The timeout is the ONLY terminator the protocol offers, and hitting
    /// it is normal completion, not an error. It bounds the wait for each
    /// next datagram; a server trickling data inside the window can extend
    /// the total duration.
    fn drain(&mut self) -> String {
        let mut response = String::new();
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        loop {
            match self.socket.recv(&mut buf) {
                Ok(received) => response.push_str(&decode_datagram(&buf[..received])),
                Err(ref e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    // No more datagrams: the response is complete
                    break;
                }
                Err(e) => {
                    tracing::warn!("Receive error while draining response: {}", e);
                    break;
                }
            }
        }

        response
    }

    /// Send a typed command
    pub fn command(&mut self, command: &Command) -> String {
        self.send(&command.to_string())
    }

    // =========================================================================
    // Typed Commands
    // =========================================================================

    /// Add an IP to the server ban list
    pub fn add_ip(&mut self, ip: &str) -> String {
        self.command(&Command::AddIp { ip: ip.to_string() })
    }

    /// Remove an IP from the server ban list
    pub fn remove_ip(&mut self, ip: &str) -> String {
        self.command(&Command::RemoveIp { ip: ip.to_string() })
    }

    /// Kick the player in a slot
    pub fn kick(&mut self, slot: u8) -> String {
        self.command(&Command::Kick { slot })
    }

    /// Ban the player in a slot
    pub fn ban(&mut self, slot: u8) -> String {
        self.command(&Command::Ban { slot })
    }

    /// Request the player table; `truncate` keeps it column-aligned
    pub fn status(&mut self, truncate: bool) -> String {
        self.command(&Command::Status { truncate })
    }

    /// Broadcast a chat line as the server
    pub fn say(&mut self, message: &str) -> String {
        self.command(&Command::Say {
            message: message.to_string(),
        })
    }

    /// Whisper a chat line to one slot
    pub fn tell(&mut self, slot: u8, message: &str) -> String {
        self.command(&Command::Tell {
            slot,
            message: message.to_string(),
        })
    }

    /// Restart the current round
    pub fn new_round(&mut self) -> String {
        self.command(&Command::NewRound)
    }

    /// Change the map
    pub fn map(&mut self, name: &str) -> String {
        self.command(&Command::Map {
            name: name.to_string(),
        })
    }

    /// Change the game mode, optionally switching map at the same time
    pub fn mode(&mut self, id: u32, map: Option<&str>) -> String {
        self.command(&Command::Mode {
            id,
            map: map.map(str::to_string),
        })
    }

    /// Print to a player's screen, or to their console only
    pub fn print(&mut self, target: PrintTarget, message: &str, console_only: bool) -> String {
        self.command(&Command::Print {
            target,
            message: message.to_string(),
            console_only,
        })
    }

    /// Connected player slots, via a truncated `status` request
    pub fn player_slots(&mut self) -> Vec<u8> {
        let report = self.status(true);
        self.parser.player_slots(&report)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The remote server endpoint
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    /// The bound local address
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }
}
