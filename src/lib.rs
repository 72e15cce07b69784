//! # redlet - A Minimal Redis-Compatible Key-Value Server
//!
//! redlet is a small, Redis-compatible, in-memory key-value server written
//! in Rust. It speaks the RESP wire protocol and serves a string keyspace
//! with optional per-key expiry.
//!
//! ## Features
//!
//! - **Redis-Compatible**: RESP framing plus `PING`, `ECHO`, `SET`, `GET`,
//!   and `CONFIG GET`
//! - **Concurrent**: Sharded keyspace with RwLock for concurrent access
//! - **Lazy Expiry**: `SET ... <option> <ms>` entries are masked at read
//!   time once expired, never swept
//! - **Async I/O**: Built on Tokio, one task per connection
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                             redlet                                │
//! │                                                                   │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐            │
//! │  │ TCP Server  │───>│ Connection  │───>│  Command    │            │
//! │  │ (Listener)  │    │  Handler    │    │  Handler    │            │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘            │
//! │                                               │                   │
//! │  ┌─────────────┐                              ▼                   │
//! │  │    RESP     │    ┌──────────────────────────────────────────┐  │
//! │  │   Parser    │    │                 Keyspace                 │  │
//! │  │             │    │  ┌────────┐ ┌────────┐ ┌────────┐        │  │
//! │  └─────────────┘    │  │Shard 0 │ │Shard 1 │ │...N    │        │  │
//! │                     │  │RwLock  │ │RwLock  │ │shards  │        │  │
//! │  ┌─────────────┐    │  └────────┘ └────────┘ └────────┘        │  │
//! │  │ServerConfig │    └──────────────────────────────────────────┘  │
//! │  │ (read-only) │                                                  │
//! │  └─────────────┘                                                  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows: listener → connection handler → parser → command
//! translation → dispatch (reads/writes the keyspace) → reply
//! serialization → socket write.
//!
//! ## Quick Start
//!
//! ```ignore
//! use redlet::commands::CommandHandler;
//! use redlet::config::ServerConfig;
//! use redlet::connection::{handle_connection, ConnectionStats};
//! use redlet::storage::Keyspace;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() {
//!     let keyspace = Arc::new(Keyspace::new());
//!     let config = Arc::new(ServerConfig::default());
//!     let stats = Arc::new(ConnectionStats::new());
//!
//!     let listener = TcpListener::bind("127.0.0.1:6379").await.unwrap();
//!
//!     loop {
//!         let (stream, addr) = listener.accept().await.unwrap();
//!         let handler = CommandHandler::new(Arc::clone(&keyspace), Arc::clone(&config));
//!         let stats = Arc::clone(&stats);
//!
//!         tokio::spawn(handle_connection(stream, addr, handler, stats));
//!     }
//! }
//! ```
//!
//! ## Supported Commands
//!
//! - `PING [message]`
//! - `ECHO message`
//! - `SET key value [<option> <milliseconds>]`
//! - `GET key`
//! - `CONFIG GET parameter` (`dir`, `dbfilename`)
//!
//! ## Module Overview
//!
//! - [`protocol`]: RESP parser and value types
//! - [`commands`]: Command translation and dispatch
//! - [`storage`]: Thread-safe keyspace with lazy expiry
//! - [`connection`]: Client connection management
//! - [`config`]: Read-only startup configuration

pub mod commands;
pub mod config;
pub mod connection;
pub mod protocol;
pub mod storage;

// Re-export commonly used types for convenience
pub use commands::{Command, CommandHandler, Reply};
pub use config::ServerConfig;
pub use connection::{handle_connection, ConnectionStats};
pub use protocol::{ParseError, RespParser, RespValue};
pub use storage::{Keyspace, Lookup};

/// The default port redlet listens on (same as Redis)
pub const DEFAULT_PORT: u16 = 6379;

/// The default host redlet binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Version of redlet
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
