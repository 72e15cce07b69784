//! Connection Module
//!
//! This module manages individual client connections to redlet. Each
//! accepted connection is handled by its own async task, so the server can
//! serve many concurrent clients with no connection cap or pooling.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     TCP Listener                            │
//! │                      (main.rs)                              │
//! └──────────────────────┬──────────────────────────────────────┘
//!                        │
//!                        │ accept()
//!                        ▼
//!           ┌────────────────────────┐
//!           │   For each client...   │
//!           └────────────┬───────────┘
//!                        │
//!                        │ spawn task
//!                        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 ConnectionHandler                           │
//! │                                                             │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │ Read bytes  │──>│ Parse RESP  │──>│ Translate + │       │
//! │  └─────────────┘   └─────────────┘   │  dispatch   │       │
//! │                                      └──────┬──────┘       │
//! │                                             ▼              │
//! │                                      ┌─────────────┐       │
//! │                                      │ Send reply  │       │
//! │                                      └─────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - **Async I/O**: Tokio for non-blocking network operations
//! - **Buffer Management**: BytesMut accumulation buffer per connection
//! - **Pipelining**: Multiple commands in a single TCP packet are answered
//!   in order
//! - **Statistics**: Connection and command counters
//!
//! Per-connection ordering is guaranteed; nothing orders commands across
//! different connections beyond the keyspace's per-key serialization.

pub mod handler;

// Re-export commonly used types
pub use handler::{handle_connection, ConnectionError, ConnectionHandler, ConnectionStats};
