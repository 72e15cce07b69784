//! Command Processing
//!
//! This module implements the command layer for redlet: translating a
//! decoded protocol value into a verb-plus-arguments command, and
//! dispatching that command against the keyspace and startup configuration.
//!
//! ## Architecture
//!
//! ```text
//! Client Request
//!       │
//!       ▼
//! ┌─────────────────┐
//! │  RESP Parser    │  (protocol module)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Command      │  (translation: array/scalar -> Vec<String>)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (dispatch on uppercased verb)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Keyspace     │  (storage module)
//! └─────────────────┘
//! ```
//!
//! ## Supported Commands
//!
//! - `PING [message]`
//! - `ECHO message`
//! - `SET key value [<option> <milliseconds>]`
//! - `GET key`
//! - `CONFIG GET parameter`

pub mod command;
pub mod handler;

// Re-export the main types
pub use command::{Command, CommandError};
pub use handler::{CommandHandler, Reply};
