//! Command Dispatch
//!
//! This module executes translated commands against the shared keyspace and
//! the read-only server configuration.
//!
//! ## Supported Commands
//!
//! - `PING [message]` - Test connection
//! - `ECHO message` - Echo message
//! - `SET key value [<option> <milliseconds>]` - Store a value, optionally
//!   with a relative expiry in milliseconds
//! - `GET key` - Read a value (nil if absent or expired)
//! - `CONFIG GET parameter` - Read a startup parameter (`dir`, `dbfilename`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandHandler                          │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │  │  execute()  │───>│  dispatch   │───>│   Reply     │     │
//! │  └─────────────┘    └──────┬──────┘    └─────────────┘     │
//! │                            │                                │
//! │                            ▼                                │
//! │                 Keyspace / ServerConfig                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dispatch is a pure function of (command, keyspace, config): the handler
//! carries no state of its own and every failure becomes an error reply,
//! never a closed connection.

use crate::commands::Command;
use crate::config::ServerConfig;
use crate::protocol::RespValue;
use crate::storage::{Keyspace, Lookup};
use std::sync::Arc;

/// The closed set of reply shapes the dispatcher can produce.
///
/// Shared between dispatch and encoding so no runtime type inspection is
/// needed: every variant has exactly one wire form, chosen in
/// [`Reply::into_resp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Encoded as a simple string: `+text\r\n`
    Simple(String),
    /// Encoded as `:n\r\n`
    Integer(i64),
    /// Encoded as `-message\r\n`
    Error(String),
    /// Encoded as the null bulk string: `$-1\r\n`
    Null,
    /// Encoded as an array of bulk strings
    Strings(Vec<String>),
}

impl Reply {
    /// Shorthand for an error reply.
    pub fn error(msg: impl Into<String>) -> Self {
        Reply::Error(msg.into())
    }

    /// Converts the reply into its protocol value for serialization.
    pub fn into_resp(self) -> RespValue {
        match self {
            Reply::Simple(s) => RespValue::SimpleString(s),
            Reply::Integer(n) => RespValue::Integer(n),
            Reply::Error(msg) => RespValue::Error(msg),
            Reply::Null => RespValue::null_bulk_string(),
            Reply::Strings(items) => RespValue::array(
                items.into_iter().map(RespValue::bulk_string).collect(),
            ),
        }
    }

    /// Serializes the reply straight to wire bytes. Never fails.
    pub fn serialize(self) -> Vec<u8> {
        self.into_resp().serialize()
    }
}

/// Dispatches commands against the keyspace and startup configuration.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    /// The shared keyspace
    keyspace: Arc<Keyspace>,
    /// Read-only startup configuration, queried by CONFIG GET
    config: Arc<ServerConfig>,
}

impl CommandHandler {
    /// Creates a new command handler.
    pub fn new(keyspace: Arc<Keyspace>, config: Arc<ServerConfig>) -> Self {
        Self { keyspace, config }
    }

    /// Executes one command and returns the reply.
    ///
    /// Every outcome, including bad arity and unknown verbs, is a reply;
    /// execution never aborts the connection.
    pub fn execute(&self, command: &Command) -> Reply {
        let verb = match command.verb() {
            Some(verb) => verb,
            None => return Reply::error("ERR empty command"),
        };

        let args = command.arguments();

        match verb.as_str() {
            "PING" => self.cmd_ping(args),
            "ECHO" => self.cmd_echo(args),
            "SET" => self.cmd_set(args),
            "GET" => self.cmd_get(args),
            "CONFIG" => self.cmd_config(args),
            _ => Reply::error(format!("ERR unknown command '{}'", verb)),
        }
    }

    /// PING [message]
    fn cmd_ping(&self, args: &[String]) -> Reply {
        match args {
            [] => Reply::Simple("PONG".to_string()),
            [msg] => Reply::Simple(msg.clone()),
            _ => Reply::error("ERR wrong number of arguments for 'PING' command"),
        }
    }

    /// ECHO message
    fn cmd_echo(&self, args: &[String]) -> Reply {
        match args {
            [msg] => Reply::Simple(msg.clone()),
            _ => Reply::error("ERR wrong number of arguments for 'ECHO' command"),
        }
    }

    /// SET key value [<option> <milliseconds>]
    fn cmd_set(&self, args: &[String]) -> Reply {
        if args.len() < 2 {
            return Reply::error("ERR wrong number of arguments for 'SET' command");
        }

        match self.keyspace.set(args) {
            Ok(()) => Reply::Simple("OK".to_string()),
            Err(e) => Reply::error(format!("ERR {}", e)),
        }
    }

    /// GET key
    fn cmd_get(&self, args: &[String]) -> Reply {
        match args {
            [key] => match self.keyspace.get(key) {
                Lookup::Found(value) => Reply::Simple(value),
                // Absent and expired both read as nil.
                Lookup::Missing | Lookup::Expired => Reply::Null,
            },
            _ => Reply::error("ERR wrong number of arguments for 'GET' command"),
        }
    }

    /// CONFIG GET parameter
    ///
    /// The subcommand must be the literal uppercase `GET`, while verbs are
    /// matched case-insensitively. The asymmetry is historical and kept
    /// as-is.
    fn cmd_config(&self, args: &[String]) -> Reply {
        match args {
            [subcommand, param] => {
                if subcommand != "GET" {
                    return Reply::error("ERR expected 'GET' as second argument");
                }
                match self.config.get_parameter(param) {
                    Some(value) => Reply::Strings(vec![param.clone(), value.to_string()]),
                    // Unknown parameter is a lookup miss, not an error.
                    None => Reply::Null,
                }
            }
            _ => Reply::error("ERR wrong number of arguments for 'CONFIG' command"),
        }
    }
}
