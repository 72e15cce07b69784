//! Concurrency-Safe Keyspace with Lazy Expiry
//!
//! This module implements the shared keyspace for redlet: a map of key to
//! stored value tokens with an optional absolute expiry instant.
//!
//! ## Design Decisions
//!
//! 1. **Sharded Locks**: Instead of one big lock, we use multiple shards to
//!    reduce contention. Writes to distinct keys land on independent locks;
//!    writes to the same key are serialized by its shard lock.
//! 2. **Lazy Expiry Only**: An expired entry is masked at read time but
//!    never removed. There is no background sweeper and no eviction; memory
//!    for expired keys is retained until the key is overwritten.
//! 3. **Last Writer Wins**: A SET fully overwrites any previous entry for
//!    the key, including its expiry.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Keyspace                              │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐           │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ │ Shard N │           │
//! │  │ RwLock  │ │ RwLock  │ │ RwLock  │ │ RwLock  │           │
//! │  │ HashMap │ │ HashMap │ │ HashMap │ │ HashMap │           │
//! │  └─────────┘ └─────────┘ └─────────┘ └─────────┘           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are distributed across shards using a hash function.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Number of shards for the keyspace.
/// More shards = less lock contention, but more memory overhead.
/// 64 is a good balance for most workloads.
const NUM_SHARDS: usize = 64;

/// Errors returned by [`Keyspace::set`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    /// SET needs at least a key and a value
    #[error("missing key and value")]
    MissingKeyValue,

    /// The trailing expiry token did not parse as integer milliseconds
    #[error("invalid expiry milliseconds: {0}")]
    InvalidExpiry(String),
}

/// Outcome of a keyspace read.
///
/// `Expired` is distinct from `Missing`: the entry is still physically
/// present in storage, it is only masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The key exists and has not expired; carries the space-joined value.
    Found(String),
    /// The key was never set (or was fully overwritten away).
    Missing,
    /// The key exists but its expiry instant has passed.
    Expired,
}

/// A stored value with its optional expiry.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The value tokens, rendered space-joined on read
    pub tokens: Vec<String>,
    /// Absolute expiry instant (None = never expires), fixed at write time
    pub expires_at: Option<Instant>,
}

impl Entry {
    /// Creates a new entry without expiry.
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            expires_at: None,
        }
    }

    /// Creates a new entry expiring `ttl` from now.
    pub fn with_ttl(tokens: Vec<String>, ttl: Duration) -> Self {
        Self {
            tokens,
            expires_at: Some(Instant::now() + ttl),
        }
    }

    /// Checks if this entry is past its expiry instant.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| Instant::now() >= exp)
            .unwrap_or(false)
    }
}

/// A single shard containing a portion of the keyspace.
#[derive(Debug, Default)]
struct Shard {
    data: RwLock<HashMap<String, Entry>>,
}

/// Point-in-time keyspace statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyspaceStats {
    /// Number of entries physically in storage (expired ones included)
    pub entries: u64,
    /// Total GET operations served
    pub get_ops: u64,
    /// Total SET operations applied
    pub set_ops: u64,
    /// Reads that found the key but masked it as expired
    pub expired_reads: u64,
}

/// The shared keyspace for redlet.
///
/// Designed to be wrapped in an `Arc` and shared across all connection
/// tasks. All operations are thread-safe; there is no cross-key atomicity.
///
/// # Example
///
/// ```
/// use redlet::storage::{Keyspace, Lookup};
///
/// let keyspace = Keyspace::new();
/// keyspace
///     .set(&["name".to_string(), "redlet".to_string()])
///     .unwrap();
/// assert_eq!(keyspace.get("name"), Lookup::Found("redlet".to_string()));
/// assert_eq!(keyspace.get("missing"), Lookup::Missing);
/// ```
pub struct Keyspace {
    /// Sharded storage for reduced lock contention
    shards: Vec<Shard>,

    /// Statistics: entries physically stored (expired ones included)
    entry_count: AtomicU64,

    /// Statistics: total GET operations
    get_count: AtomicU64,

    /// Statistics: total SET operations
    set_count: AtomicU64,

    /// Statistics: reads masked because the entry had expired
    expired_read_count: AtomicU64,
}

impl std::fmt::Debug for Keyspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyspace")
            .field("shards", &self.shards.len())
            .field("entries", &self.entry_count.load(Ordering::Relaxed))
            .field("get_ops", &self.get_count.load(Ordering::Relaxed))
            .field("set_ops", &self.set_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for Keyspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyspace {
    /// Creates a new, empty keyspace.
    pub fn new() -> Self {
        let shards = (0..NUM_SHARDS).map(|_| Shard::default()).collect();

        Self {
            shards,
            entry_count: AtomicU64::new(0),
            get_count: AtomicU64::new(0),
            set_count: AtomicU64::new(0),
            expired_read_count: AtomicU64::new(0),
        }
    }

    /// Determines which shard a key belongs to.
    #[inline]
    fn shard_index(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % NUM_SHARDS
    }

    /// Gets the shard for a given key.
    #[inline]
    fn get_shard(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    /// Applies a SET from its raw argument list. `args[0]` is the key.
    ///
    /// - Exactly 2 args: store `args[1..]` with no expiry.
    /// - More than 2 args: the last two are consumed as an expiry option.
    ///   Only the final token is validated (integer milliseconds); the
    ///   option-name token before it is accepted as-is. That laxity matches
    ///   the historical behavior of this command and is kept deliberately.
    ///
    /// Expiry is resolved once, here, to an absolute instant.
    pub fn set(&self, args: &[String]) -> Result<(), SetError> {
        if args.len() < 2 {
            return Err(SetError::MissingKeyValue);
        }

        let key = args[0].clone();

        let entry = if args.len() > 2 {
            let ms_token = &args[args.len() - 1];
            let ms: u64 = ms_token
                .parse()
                .map_err(|_| SetError::InvalidExpiry(ms_token.clone()))?;
            let tokens = args[1..args.len() - 2].to_vec();
            Entry::with_ttl(tokens, Duration::from_millis(ms))
        } else {
            Entry::new(args[1..].to_vec())
        };

        self.set_count.fetch_add(1, Ordering::Relaxed);

        let shard = self.get_shard(&key);
        let mut data = shard.data.write().unwrap();

        if data.insert(key, entry).is_none() {
            self.entry_count.fetch_add(1, Ordering::Relaxed);
        }

        Ok(())
    }

    /// Reads a key.
    ///
    /// An expired entry is masked, never removed: the read reports
    /// [`Lookup::Expired`] and leaves storage untouched.
    pub fn get(&self, key: &str) -> Lookup {
        self.get_count.fetch_add(1, Ordering::Relaxed);

        let shard = self.get_shard(key);
        let data = shard.data.read().unwrap();

        match data.get(key) {
            Some(entry) if entry.is_expired() => {
                self.expired_read_count.fetch_add(1, Ordering::Relaxed);
                Lookup::Expired
            }
            Some(entry) => Lookup::Found(entry.tokens.join(" ")),
            None => Lookup::Missing,
        }
    }

    /// Returns true if the key physically occupies storage, expired or not.
    ///
    /// Exposes the lazy-expiry invariant: a key masked by [`Keyspace::get`]
    /// is still present here.
    pub fn contains_raw(&self, key: &str) -> bool {
        let shard = self.get_shard(key);
        let data = shard.data.read().unwrap();
        data.contains_key(key)
    }

    /// Returns the number of entries physically in storage.
    ///
    /// Expired-but-unswept entries are counted; this is an approximation
    /// under concurrent writes because it uses relaxed atomic ordering.
    pub fn len(&self) -> u64 {
        self.entry_count.load(Ordering::Relaxed)
    }

    /// Returns true if the keyspace holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns keyspace statistics.
    pub fn stats(&self) -> KeyspaceStats {
        KeyspaceStats {
            entries: self.entry_count.load(Ordering::Relaxed),
            get_ops: self.get_count.load(Ordering::Relaxed),
            set_ops: self.set_count.load(Ordering::Relaxed),
            expired_reads: self.expired_read_count.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_then_get() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["foo", "bar"])).unwrap();
        assert_eq!(keyspace.get("foo"), Lookup::Found("bar".to_string()));
    }

    #[test]
    fn test_get_missing() {
        let keyspace = Keyspace::new();
        assert_eq!(keyspace.get("nope"), Lookup::Missing);
    }

    #[test]
    fn test_set_overwrites() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["foo", "bar"])).unwrap();
        keyspace.set(&args(&["foo", "baz"])).unwrap();
        assert_eq!(keyspace.get("foo"), Lookup::Found("baz".to_string()));
        assert_eq!(keyspace.len(), 1);
    }

    #[test]
    fn test_set_too_few_args() {
        let keyspace = Keyspace::new();
        assert_eq!(keyspace.set(&args(&["foo"])), Err(SetError::MissingKeyValue));
        assert_eq!(keyspace.set(&[]), Err(SetError::MissingKeyValue));
    }

    #[test]
    fn test_set_with_px_expiry() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["foo", "bar", "PX", "50"])).unwrap();
        assert_eq!(keyspace.get("foo"), Lookup::Found("bar".to_string()));

        thread::sleep(Duration::from_millis(60));
        assert_eq!(keyspace.get("foo"), Lookup::Expired);
    }

    #[test]
    fn test_expired_entry_retained_in_storage() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["foo", "bar", "PX", "10"])).unwrap();
        thread::sleep(Duration::from_millis(20));

        // Masked on read, but never swept.
        assert_eq!(keyspace.get("foo"), Lookup::Expired);
        assert!(keyspace.contains_raw("foo"));
        assert_eq!(keyspace.len(), 1);
    }

    #[test]
    fn test_overwrite_clears_expiry() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["foo", "old", "PX", "10"])).unwrap();
        thread::sleep(Duration::from_millis(20));
        keyspace.set(&args(&["foo", "new"])).unwrap();
        assert_eq!(keyspace.get("foo"), Lookup::Found("new".to_string()));
    }

    #[test]
    fn test_expiry_option_name_not_validated() {
        // Only the trailing integer is checked; the option-name token can
        // be anything.
        let keyspace = Keyspace::new();
        keyspace
            .set(&args(&["foo", "bar", "WHATEVER", "5000"]))
            .unwrap();
        assert_eq!(keyspace.get("foo"), Lookup::Found("bar".to_string()));
    }

    #[test]
    fn test_expiry_token_must_be_integer() {
        let keyspace = Keyspace::new();
        let err = keyspace
            .set(&args(&["foo", "bar", "PX", "soon"]))
            .unwrap_err();
        assert_eq!(err, SetError::InvalidExpiry("soon".to_string()));
        assert_eq!(keyspace.get("foo"), Lookup::Missing);
    }

    #[test]
    fn test_multi_token_value_joined_on_read() {
        let keyspace = Keyspace::new();
        keyspace
            .set(&args(&["greeting", "hello", "world", "PX", "60000"]))
            .unwrap();
        assert_eq!(
            keyspace.get("greeting"),
            Lookup::Found("hello world".to_string())
        );
    }

    #[test]
    fn test_stats_counters() {
        let keyspace = Keyspace::new();
        keyspace.set(&args(&["a", "1"])).unwrap();
        keyspace.set(&args(&["b", "2", "PX", "5"])).unwrap();
        thread::sleep(Duration::from_millis(15));
        keyspace.get("a");
        keyspace.get("b");

        let stats = keyspace.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.set_ops, 2);
        assert_eq!(stats.get_ops, 2);
        assert_eq!(stats.expired_reads, 1);
    }

    #[test]
    fn test_concurrent_disjoint_keys() {
        // N writers on disjoint keys: every writer reads back its own value.
        let keyspace = Arc::new(Keyspace::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let keyspace = Arc::clone(&keyspace);
                thread::spawn(move || {
                    for i in 0..1_000 {
                        let key = format!("k:{}:{}", t, i);
                        let value = format!("v:{}:{}", t, i);
                        keyspace.set(&[key.clone(), value.clone()]).unwrap();
                        assert_eq!(keyspace.get(&key), Lookup::Found(value));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(keyspace.len(), 8_000);
    }

    #[test]
    fn test_concurrent_same_key_last_writer_wins() {
        let keyspace = Arc::new(Keyspace::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let keyspace = Arc::clone(&keyspace);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        keyspace
                            .set(&["shared".to_string(), format!("writer:{}", t)])
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // The surviving value is whichever write completed last; it must be
        // intact, not interleaved.
        match keyspace.get("shared") {
            Lookup::Found(v) => assert!(v.starts_with("writer:")),
            other => panic!("unexpected lookup result: {:?}", other),
        }
        assert_eq!(keyspace.len(), 1);
    }
}
