// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Dynamic codec for MAVLink messages
//!
//! Runtime message handling without compile-time type knowledge.
//! Enables generic tools, bridges, and introspection.
//!
//! # Features
//!
//! - **DialectTable**: message descriptors built from a definition table
//! - **DynamicMessage**: field map with runtime type checking
//! - **JSON bridge**: marshal/unmarshal and draft-07 schema generation
//!
//! # Example
//!
//! ```rust
//! use mavcodec::dynamic::DialectTable;
//! use mavcodec::MavlinkVersion;
//!
//! let table = DialectTable::common().unwrap();
//! let mut hud = table.create_by_name("VFR_HUD").unwrap();
//! hud.set_field("airspeed", 12.5f32).unwrap();
//! hud.set_field("heading", 270i16).unwrap();
//!
//! let bytes = table.encode(&hud, MavlinkVersion::V2).unwrap();
//! let back = table.decode(74, &bytes, MavlinkVersion::V2).unwrap();
//! assert_eq!(back.get("heading").and_then(|v| v.as_i64()), Some(270));
//!
//! let json = back.marshal_json().unwrap();
//! assert!(json.contains("\"airspeed\":12.5"));
//! ```

mod dialect;
mod json;
mod message;
mod schema;
mod value;

pub use dialect::{parse_type_spec, CompatIssue, DialectTable, MessageDefinition};
pub use message::DynamicMessage;
pub use schema::{schema_for, DRAFT_07};
pub use value::DynamicValue;
