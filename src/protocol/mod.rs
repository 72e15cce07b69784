//! RESP Protocol Implementation
//!
//! This module provides the wire-protocol layer: an incremental decoder for
//! incoming requests and the serializer for outgoing replies.
//!
//! ## Overview
//!
//! RESP is a simple, binary-safe protocol used by Redis for client-server
//! communication. Requests are normally arrays of bulk strings; replies can
//! be any RESP type.
//!
//! ## Modules
//!
//! - `types`: Defines the `RespValue` enum and serialization
//! - `parser`: Incremental parser for incoming RESP data
//!
//! ## Example
//!
//! ```ignore
//! use redlet::protocol::{parse_message, RespValue};
//!
//! // Parsing incoming data
//! let data = b"*2\r\n$3\r\nGET\r\n$4\r\nname\r\n";
//! let (value, consumed) = parse_message(data).unwrap().unwrap();
//!
//! // Creating responses
//! let response = RespValue::simple_string("PONG");
//! let bytes = response.serialize();
//! ```

pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use parser::{parse_message, ParseError, ParseResult, RespParser};
pub use types::RespValue;
