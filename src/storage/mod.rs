//! Keyspace Module
//!
//! This module provides the shared in-memory keyspace for redlet: a
//! thread-safe, sharded map of key to value tokens with optional per-key
//! expiry.
//!
//! ## Features
//!
//! - **Sharded Storage**: 64 independent shards reduce lock contention
//! - **RwLock**: Multiple concurrent readers, exclusive writers
//! - **Lazy Expiry**: Expired entries are masked on read, never removed
//!
//! There is deliberately no background sweeper and no eviction policy.
//!
//! ## Example
//!
//! ```
//! use redlet::storage::{Keyspace, Lookup};
//! use std::sync::Arc;
//!
//! let keyspace = Arc::new(Keyspace::new());
//!
//! keyspace
//!     .set(&["name".to_string(), "redlet".to_string()])
//!     .unwrap();
//! assert_eq!(keyspace.get("name"), Lookup::Found("redlet".to_string()));
//! ```

pub mod engine;

// Re-export commonly used types
pub use engine::{Entry, Keyspace, KeyspaceStats, Lookup, SetError};
