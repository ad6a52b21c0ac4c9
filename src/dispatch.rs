//! Chat command dispatch
//!
//! Routes incoming chat/console lines to registered handlers. The typical
//! handler body calls back into [`RconClient`](crate::network::RconClient)
//! with a typed command.
//!
//! A registry entry is `{pattern, require-prefix flag, separator, handler}`
//! and carries no per-dispatch state: every dispatch builds a fresh
//! argument list, so one registry can serve concurrent callers each holding
//! their own context.

use regex::Regex;

use crate::error::{RconError, Result};

/// Default argument separator
const DEFAULT_SEPARATOR: char = ' ';

// =============================================================================
// Arguments
// =============================================================================

/// Positional arguments split from the text after a command verb
///
/// Built fresh for each dispatch and handed to the handler by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    values: Vec<String>,
}

impl Args {
    /// Split an argument tail on a separator; an empty tail has no arguments
    fn split(tail: &str, separator: char) -> Self {
        let values = if tail.is_empty() {
            Vec::new()
        } else {
            tail.split(separator).map(str::to_string).collect()
        };

        Self { values }
    }

    /// Required argument at a position
    pub fn get(&self, index: usize) -> Result<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or(RconError::MissingArgument(index))
    }

    /// Optional argument at a position, with a fallback
    pub fn get_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.values.get(index).map(String::as_str).unwrap_or(default)
    }

    /// Required slot-number argument at a position
    ///
    /// A present-but-unparsable value is invalid even where a missing one
    /// would have a default.
    pub fn get_u8(&self, index: usize) -> Result<u8> {
        let value = self.get(index)?;
        value.parse().map_err(|_| RconError::InvalidArgument {
            index,
            value: value.to_string(),
        })
    }

    /// Optional slot-number argument at a position, with a fallback
    pub fn get_u8_or(&self, index: usize, default: u8) -> Result<u8> {
        match self.values.get(index) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|_| RconError::InvalidArgument {
                index,
                value: value.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Handler invoked with the speaker's slot, the split arguments, and the
/// caller's context
pub type Handler<C> = dyn Fn(u8, &Args, &mut C) -> Result<()>;

struct Entry<C> {
    pattern: Regex,
    require_prefix: bool,
    separator: char,
    handler: Box<Handler<C>>,
}

/// Stateless registry of chat commands
///
/// Entries are tried in registration order; the first whose pattern matches
/// handles the message.
pub struct CommandRegistry<C> {
    entries: Vec<Entry<C>>,
}

impl<C> CommandRegistry<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a command with the default single-space separator
    ///
    /// `verb` is a regex fragment; alternations must bring their own
    /// grouping (e.g. `(?:kick|k)`). The full line pattern becomes
    /// `^!?<verb>( <args>)?$`.
    pub fn register<F>(&mut self, verb: &str, require_prefix: bool, handler: F) -> Result<()>
    where
        F: Fn(u8, &Args, &mut C) -> Result<()> + 'static,
    {
        self.register_with_separator(verb, require_prefix, DEFAULT_SEPARATOR, handler)
    }

    /// Register a command with a custom argument separator
    pub fn register_with_separator<F>(
        &mut self,
        verb: &str,
        require_prefix: bool,
        separator: char,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(u8, &Args, &mut C) -> Result<()> + 'static,
    {
        let pattern = Regex::new(&format!("^!?{}(?: (.*))?$", verb))?;

        self.entries.push(Entry {
            pattern,
            require_prefix,
            separator,
            handler: Box::new(handler),
        });

        Ok(())
    }

    /// Route one message; returns whether any command handled it
    ///
    /// A handler error is logged and the message still counts as handled:
    /// it matched, and falling through to later entries would let a second
    /// command fire for the same line.
    pub fn dispatch(&self, slot: u8, message: &str, context: &mut C) -> bool {
        for entry in &self.entries {
            if entry.require_prefix && !message.starts_with('!') {
                continue;
            }

            let Some(captures) = entry.pattern.captures(message) else {
                continue;
            };

            let tail = captures.get(1).map(|m| m.as_str()).unwrap_or("");
            let args = Args::split(tail, entry.separator);

            tracing::debug!("Dispatching {:?} for slot {}", message, slot);
            if let Err(e) = (entry.handler)(slot, &args, context) {
                tracing::error!("Command handler failed: {}", e);
            }

            return true;
        }

        false
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
