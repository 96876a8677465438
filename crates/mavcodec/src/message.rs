// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Static codec: compile-time message types.
//!
//! Types implement [`MavMessage`] through `#[derive(MavMessage)]`. The derive
//! only emits the declaration-ordered field list and a per-field dispatch
//! keyed by declaration index; the wire walk below is shared by every type and
//! driven entirely by the [`MessageDescriptor`].
//!
//! ```
//! use mavcodec::{MavMessage, MavlinkVersion, MessageRegistry};
//!
//! #[derive(Debug, Clone, PartialEq, MavMessage)]
//! #[mavlink(id = 74, name = "VFR_HUD")]
//! struct VfrHud {
//!     airspeed: f32,
//!     groundspeed: f32,
//!     heading: i16,
//!     throttle: u16,
//!     alt: f32,
//!     climb: f32,
//! }
//!
//! let registry = MessageRegistry::new();
//! let hud = VfrHud { airspeed: 1.0, groundspeed: 0.0, heading: 90, throttle: 0, alt: 0.0, climb: 0.0 };
//! let bytes = registry.encode(&hud, MavlinkVersion::V2).unwrap();
//! let back: VfrHud = registry.decode(&bytes, MavlinkVersion::V2).unwrap();
//! assert_eq!(back, hud);
//! ```

use crate::error::Result;
use crate::ser::{finish_encode, prepare_decode, Cursor, CursorMut, MavlinkVersion};
use crate::types::{FieldDescriptor, FieldSpec, MessageDescriptor};

/// A message type with a fixed, compile-time field layout.
pub trait MavMessage: Sized {
    const ID: u32;
    /// Wire name (UPPER_SNAKE_CASE).
    const NAME: &'static str;
    /// Fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Instance with every field at its zero value.
    fn zeroed() -> Self;

    /// Write the field declared at `index`.
    fn encode_field(&self, index: usize, cursor: &mut CursorMut<'_>, field: &FieldDescriptor);

    /// Read the field declared at `index`.
    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>, field: &FieldDescriptor);

    /// Build this type's descriptor. Prefer [`MessageRegistry`](crate::MessageRegistry),
    /// which builds it once.
    fn build_descriptor() -> Result<MessageDescriptor> {
        MessageDescriptor::build(Self::NAME, Self::ID, Self::FIELDS)
    }
}

/// Encode `message` against its descriptor.
pub fn encode_message<M: MavMessage>(
    descriptor: &MessageDescriptor,
    message: &M,
    version: MavlinkVersion,
) -> Vec<u8> {
    let mut payload = vec![0u8; descriptor.payload_len(version)];
    {
        let mut cursor = CursorMut::new(&mut payload);
        for field in descriptor.fields_for(version) {
            message.encode_field(field.index, &mut cursor, field);
        }
    }
    let payload = finish_encode(payload, version);
    log::trace!(
        "[static] encoded {} ({}): {} bytes",
        descriptor.name(),
        version,
        payload.len()
    );
    payload
}

/// Decode a payload into `M`. Fields absent from a V1 frame keep their zero value.
pub fn decode_message<M: MavMessage>(
    descriptor: &MessageDescriptor,
    payload: &[u8],
    version: MavlinkVersion,
) -> Result<M> {
    let buf = prepare_decode(descriptor, payload, version)?;
    let mut cursor = Cursor::new(&buf);
    let mut message = M::zeroed();
    for field in descriptor.fields_for(version) {
        message.decode_field(field.index, &mut cursor, field);
    }
    log::trace!(
        "[static] decoded {} ({}) from {} bytes",
        descriptor.name(),
        version,
        payload.len()
    );
    Ok(message)
}
