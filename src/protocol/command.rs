//! Command definitions
//!
//! Typed admin commands and their wire text.
//!
//! Each variant renders to the exact console line the server expects, with
//! every argument interpolated. `Display` is the single source of truth
//! for the templates.

use std::fmt;

/// Recipient of a server print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintTarget {
    /// Every connected player
    All,

    /// One player slot
    Slot(u8),
}

impl fmt::Display for PrintTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintTarget::All => write!(f, "all"),
            PrintTarget::Slot(slot) => write!(f, "{}", slot),
        }
    }
}

/// A typed admin command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an IP to the server ban list
    AddIp { ip: String },

    /// Remove an IP from the server ban list
    RemoveIp { ip: String },

    /// Disconnect the player in a slot
    Kick { slot: u8 },

    /// Ban the player in a slot
    Ban { slot: u8 },

    /// Request the player table; `truncate` keeps the report column-aligned
    Status { truncate: bool },

    /// Broadcast a chat line as the server
    Say { message: String },

    /// Whisper a chat line to one slot
    Tell { slot: u8, message: String },

    /// Restart the current round
    NewRound,

    /// Change the map
    Map { name: String },

    /// Change the game mode, optionally switching map at the same time
    Mode { id: u32, map: Option<String> },

    /// Print to a player's screen, or to their console only
    Print {
        target: PrintTarget,
        message: String,
        console_only: bool,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddIp { ip } => write!(f, "addip \"{}\"", ip),
            Command::RemoveIp { ip } => write!(f, "removeip \"{}\"", ip),
            Command::Kick { slot } => write!(f, "kick {}", slot),
            Command::Ban { slot } => write!(f, "ban {}", slot),
            Command::Status { truncate: true } => write!(f, "status"),
            Command::Status { truncate: false } => write!(f, "status notrunc"),
            Command::Say { message } => write!(f, "svsay \"{}\"", message),
            Command::Tell { slot, message } => write!(f, "svtell {} \"{}\"", slot, message),
            Command::NewRound => write!(f, "newround"),
            Command::Map { name } => write!(f, "map \"{}\"", name),
            Command::Mode { id, map: None } => write!(f, "mbmode {}", id),
            Command::Mode { id, map: Some(map) } => write!(f, "mbmode {} \"{}\"", id, map),
            Command::Print {
                target,
                message,
                console_only,
            } => {
                let verb = if *console_only { "svprintcon" } else { "svprint" };
                write!(f, "{} {} \"{}\"", verb, target, message)
            }
        }
    }
}
