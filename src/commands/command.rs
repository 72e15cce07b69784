//! Command Translation
//!
//! Flattens one decoded [`RespValue`] request into an ordered list of
//! strings: the verb followed by its arguments. Clients normally send an
//! array of bulk strings, but a bare simple or bulk string is also accepted
//! as a one-element command.

use crate::protocol::RespValue;
use thiserror::Error;

/// Errors produced while flattening a request into a command.
///
/// These are command-level failures: the frame itself was well-formed RESP,
/// so the connection stays open and the client gets an error reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A null array or null bulk string cannot carry a command
    #[error("null request")]
    NullRequest,

    /// An array element was itself an array
    #[error("nested array in command")]
    NestedArray,

    /// An element had no textual representation (integer, error, binary)
    #[error("command argument is not a string")]
    NonTextArgument,
}

/// One client command: the verb plus its arguments, in order.
///
/// The verb (element 0) is compared case-insensitively by the dispatcher;
/// arguments keep their original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    /// Builds a command directly from its parts. Mostly useful in tests.
    pub fn from_parts(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Flattens a decoded request into a command.
    ///
    /// An array becomes its elements' textual contents in order; a scalar
    /// simple/bulk string becomes a single-element command.
    pub fn from_resp(value: RespValue) -> Result<Self, CommandError> {
        match value {
            RespValue::Array(Some(elements)) => {
                let mut args = Vec::with_capacity(elements.len());
                for element in elements {
                    match element {
                        RespValue::Array(_) => return Err(CommandError::NestedArray),
                        other => match other.as_str() {
                            Some(s) => args.push(s.to_string()),
                            None => return Err(CommandError::NonTextArgument),
                        },
                    }
                }
                Ok(Self { args })
            }
            RespValue::Array(None) | RespValue::BulkString(None) => {
                Err(CommandError::NullRequest)
            }
            scalar => match scalar.as_str() {
                Some(s) => Ok(Self {
                    args: vec![s.to_string()],
                }),
                None => Err(CommandError::NonTextArgument),
            },
        }
    }

    /// The uppercased verb, or `None` for a zero-length command.
    pub fn verb(&self) -> Option<String> {
        self.args.first().map(|v| v.to_uppercase())
    }

    /// The arguments after the verb.
    pub fn arguments(&self) -> &[String] {
        if self.args.is_empty() {
            &[]
        } else {
            &self.args[1..]
        }
    }

    /// The full argument list including the verb.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// True for a zero-length command.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
