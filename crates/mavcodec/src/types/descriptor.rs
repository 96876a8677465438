// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Message descriptors: wire-ordered field layout, payload sizes and CRC-extra.
//!
//! A descriptor is built once per message from its declaration-ordered field
//! list ([`FieldSpec`]), whether that list comes from `#[derive(MavMessage)]`
//! or from a dialect definition table. Both paths go through
//! [`MessageDescriptor::build`], so field order and CRC-extra are identical
//! for the same definition.

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashSet;

use crate::crc::Crc16X25;
use crate::error::{Error, Result};
use crate::ser::MavlinkVersion;
use crate::types::FieldType;

/// Largest payload a MAVLink frame can carry.
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Largest message id representable in a V2 frame (24 bits).
pub const MAX_MESSAGE_ID: u32 = 0x00FF_FFFF;

/// Field as declared, before wire reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: Cow<'static, str>,
    pub ftype: FieldType,
    pub is_enum: bool,
    /// 0 for scalars, element count for arrays, buffer length for `char` strings.
    pub array_length: usize,
    pub is_extension: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<Cow<'static, str>>, ftype: FieldType) -> Self {
        Self {
            name: name.into(),
            ftype,
            is_enum: false,
            array_length: 0,
            is_extension: false,
        }
    }

    pub fn array(mut self, length: usize) -> Self {
        self.array_length = length;
        self
    }

    pub fn enumerated(mut self) -> Self {
        self.is_enum = true;
        self
    }

    pub fn extension(mut self) -> Self {
        self.is_extension = true;
        self
    }
}

/// Field of a built descriptor, in wire position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ftype: FieldType,
    pub is_enum: bool,
    pub array_length: usize,
    /// Declaration position.
    pub index: usize,
    pub is_extension: bool,
}

impl FieldDescriptor {
    /// Bytes occupied on the wire.
    pub fn size(&self) -> usize {
        self.ftype.size() * self.array_length.max(1)
    }

    /// `char` fields are strings, scalar or not.
    pub fn is_string(&self) -> bool {
        self.ftype == FieldType::Char
    }

    /// Fixed-length array of numbers (strings excluded).
    pub fn is_array(&self) -> bool {
        self.array_length > 0 && !self.is_string()
    }

    /// Human-readable type, e.g. `uint16`, `float[4]`, `char[16]`.
    pub fn type_label(&self) -> String {
        if self.array_length > 0 {
            format!("{}[{}]", self.ftype.short_name(), self.array_length)
        } else {
            self.ftype.short_name().to_string()
        }
    }
}

/// Immutable layout of one message, shared by every codec that handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    name: String,
    id: u32,
    fields: Vec<FieldDescriptor>,
    normal_count: usize,
    size_normal: usize,
    size_extended: usize,
    crc_extra: u8,
}

impl MessageDescriptor {
    /// Validate, reorder and fingerprint a declaration-ordered field list.
    pub fn build(name: &str, id: u32, specs: &[FieldSpec]) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidDefinition(format!(
                "message {} has an empty name",
                id
            )));
        }
        if id > MAX_MESSAGE_ID {
            return Err(Error::InvalidDefinition(format!(
                "{}: id {} does not fit in 24 bits",
                name, id
            )));
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(Error::InvalidDefinition(format!(
                    "{}: field {} has an empty name",
                    name, index
                )));
            }
            if !seen.insert(spec.name.as_ref()) {
                return Err(Error::InvalidDefinition(format!(
                    "{}: duplicate field '{}'",
                    name, spec.name
                )));
            }
            if spec.is_enum && !spec.ftype.can_back_enum() {
                return Err(Error::UnsupportedType {
                    message: name.to_string(),
                    field: spec.name.to_string(),
                    type_name: format!("enum backed by {}", spec.ftype.wire_name()),
                });
            }
            if spec.array_length > usize::from(u8::MAX) {
                return Err(Error::InvalidDefinition(format!(
                    "{}.{}: array length {} exceeds 255",
                    name, spec.name, spec.array_length
                )));
            }
            fields.push(FieldDescriptor {
                name: spec.name.to_string(),
                ftype: spec.ftype,
                is_enum: spec.is_enum,
                array_length: spec.array_length,
                index,
                is_extension: spec.is_extension,
            });
        }

        reorder_fields(&mut fields);

        let normal_count = fields.iter().take_while(|f| !f.is_extension).count();
        let size_normal: usize = fields[..normal_count].iter().map(FieldDescriptor::size).sum();
        let size_extended: usize = fields.iter().map(FieldDescriptor::size).sum();
        if size_extended > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidDefinition(format!(
                "{}: payload of {} bytes exceeds {}",
                name, size_extended, MAX_PAYLOAD_LEN
            )));
        }

        let crc_extra = compute_crc_extra(name, &fields[..normal_count]);

        log::debug!(
            "[descriptor] built {} (id {}): {} fields, size {}/{}, crc_extra {}",
            name,
            id,
            fields.len(),
            size_normal,
            size_extended,
            crc_extra
        );

        Ok(Self {
            name: name.to_string(),
            id,
            fields,
            normal_count,
            size_normal,
            size_extended,
            crc_extra,
        })
    }

    /// Wire name (UPPER_SNAKE_CASE).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// All fields in wire order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields carried by a frame of the given version, in wire order.
    pub fn fields_for(&self, version: MavlinkVersion) -> &[FieldDescriptor] {
        match version {
            MavlinkVersion::V1 => &self.fields[..self.normal_count],
            MavlinkVersion::V2 => &self.fields,
        }
    }

    /// Field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn size_normal(&self) -> usize {
        self.size_normal
    }

    pub fn size_extended(&self) -> usize {
        self.size_extended
    }

    /// Untruncated payload length for the given version.
    pub fn payload_len(&self, version: MavlinkVersion) -> usize {
        match version {
            MavlinkVersion::V1 => self.size_normal,
            MavlinkVersion::V2 => self.size_extended,
        }
    }

    pub fn crc_extra(&self) -> u8 {
        self.crc_extra
    }

    pub fn has_extensions(&self) -> bool {
        self.normal_count < self.fields.len()
    }
}

/// Canonical MAVLink field order: non-extension fields by descending element
/// size, then extensions in declaration order. Ties keep declaration order.
fn reorder_fields(fields: &mut [FieldDescriptor]) {
    fields.sort_by_key(|f| {
        let weight = if f.is_extension { 0 } else { f.ftype.size() };
        (f.is_extension, Reverse(weight), f.index)
    });
}

/// CRC-extra over the message name and the wire-ordered base fields.
fn compute_crc_extra(name: &str, base_fields: &[FieldDescriptor]) -> u8 {
    let mut crc = Crc16X25::new();
    crc.write(name.as_bytes());
    crc.write(b" ");
    for field in base_fields {
        crc.write(field.ftype.wire_name().as_bytes());
        crc.write(b" ");
        crc.write(field.name.as_bytes());
        crc.write(b" ");
        if field.array_length > 0 {
            crc.write(&[field.array_length as u8]);
        }
    }
    let sum = crc.sum16();
    ((sum & 0xFF) as u8) ^ ((sum >> 8) as u8)
}
