// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! # mavcodec - MAVLink payload codec
//!
//! Encodes and decodes MAVLink message payloads (the bytes between the frame
//! header and the frame checksum), for both V1 and V2 framing.
//!
//! ## Two codecs, one layout
//!
//! ```text
//! +-------------------------+      +---------------------------------+
//! | #[derive(MavMessage)]   |      | DialectTable (JSON definitions) |
//! | static structs          |      | DynamicMessage field maps       |
//! +------------+------------+      +----------------+----------------+
//!              |                                    |
//!              +------> MessageDescriptor::build <--+
//!                       (wire order, sizes, crc_extra)
//!                                   |
//!                       scalar codec + frame rules
//! ```
//!
//! Both paths build their [`MessageDescriptor`] through the same function, so
//! field order and CRC-extra agree for the same definition, and a static
//! struct and a dynamic message holding the same values encode to the same
//! bytes.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MavMessage`] | Static message type, derived with `#[derive(MavMessage)]` |
//! | [`MessageRegistry`] | Read-mostly descriptor cache for static types |
//! | [`DialectTable`](dynamic::DialectTable) | Descriptors built from a definition table |
//! | [`DynamicMessage`](dynamic::DynamicMessage) | Runtime field map with JSON bridge |
//!
//! ## Modules Overview
//!
//! - [`types`] - field type table and descriptor builder
//! - [`ser`] - scalar codec, cursors and V1/V2 frame rules
//! - [`dynamic`] - dialect tables, dynamic messages, JSON and JSON Schema
//! - [`dialects`] - built-in static message types

// Lets `#[derive(MavMessage)]` expand to `::mavcodec::...` inside this crate.
extern crate self as mavcodec;

pub mod crc;
pub mod dialects;
pub mod dynamic;
mod enums;
pub mod error;
pub mod message;
pub mod registry;
pub mod ser;
pub mod types;

pub use crc::Crc16X25;
pub use error::{Error, MessageKey, Result};
pub use mavcodec_derive::MavMessage;
pub use message::{decode_message, encode_message, MavMessage};
pub use registry::{LookupStats, MessageRegistry};
pub use ser::{MavlinkVersion, WireValue};
pub use types::{FieldDescriptor, FieldSpec, FieldType, MessageDescriptor};
