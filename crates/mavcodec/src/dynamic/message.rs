// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! DynamicMessage container for runtime field access.
//!
//! A `DynamicMessage` is owned by whoever holds it; sharing one across
//! threads requires the caller's own locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dynamic::DynamicValue;
use crate::error::{Error, Result};
use crate::ser::{
    decode_scalar, encode_scalar, finish_encode, prepare_decode, Cursor, CursorMut, MavlinkVersion,
};
use crate::types::{FieldDescriptor, MessageDescriptor};

/// Message whose layout is only known at runtime.
///
/// Fields start unset. Unset fields encode as their zero value and are
/// omitted from JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicMessage {
    descriptor: Arc<MessageDescriptor>,
    fields: HashMap<String, DynamicValue>,
}

impl DynamicMessage {
    /// Create an empty message.
    pub fn new(descriptor: Arc<MessageDescriptor>) -> Self {
        Self {
            descriptor,
            fields: HashMap::new(),
        }
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    pub fn id(&self) -> u32 {
        self.descriptor.id()
    }

    /// Wire name of the message.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Alias of [`name`](Self::name).
    pub fn get_name(&self) -> &str {
        self.name()
    }

    /// Get a field value by name, `None` if unset.
    pub fn get(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of set fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Set fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldDescriptor, &DynamicValue)> {
        self.descriptor
            .fields()
            .iter()
            .filter_map(|f| self.fields.get(&f.name).map(|v| (f, v)))
    }

    /// Set a field value by name.
    ///
    /// The value's variant and array-ness must match the field exactly.
    /// Array length is not checked: encoding zero-fills missing elements and
    /// drops extra ones.
    pub fn set_field(&mut self, name: &str, value: impl Into<DynamicValue>) -> Result<()> {
        let field = self.field_descriptor(name)?;
        let value = value.into();
        if !value.matches_field(field) {
            return Err(Error::type_mismatch(name, field.type_label()));
        }
        let key = field.name.clone();
        self.fields.insert(key, value);
        Ok(())
    }

    /// Unset a field, returning its previous value.
    pub fn clear(&mut self, name: &str) -> Option<DynamicValue> {
        self.fields.remove(name)
    }

    /// Field descriptor by name, `UnknownField` if the message has none.
    pub(crate) fn field_descriptor(&self, name: &str) -> Result<&FieldDescriptor> {
        self.descriptor
            .field(name)
            .ok_or_else(|| Error::UnknownField {
                message: self.descriptor.name().to_string(),
                field: name.to_string(),
            })
    }

    /// Store a value already checked against its field.
    pub(crate) fn insert_checked(&mut self, name: String, value: DynamicValue) {
        self.fields.insert(name, value);
    }

    /// Encode to a payload. Unset fields are written as zero.
    pub fn encode(&self, version: MavlinkVersion) -> Vec<u8> {
        let descriptor = &self.descriptor;
        let mut payload = vec![0u8; descriptor.payload_len(version)];
        {
            let mut cursor = CursorMut::new(&mut payload);
            for field in descriptor.fields_for(version) {
                encode_field(&mut cursor, field, self.fields.get(&field.name));
            }
        }
        let payload = finish_encode(payload, version);
        log::trace!(
            "[dynamic] encoded {} ({}): {} bytes",
            descriptor.name(),
            version,
            payload.len()
        );
        payload
    }

    /// Decode a payload. Every field carried by `version` is set.
    pub fn decode(
        descriptor: Arc<MessageDescriptor>,
        payload: &[u8],
        version: MavlinkVersion,
    ) -> Result<Self> {
        let buf = prepare_decode(&descriptor, payload, version)?;
        let mut cursor = Cursor::new(&buf);
        let wire_fields = descriptor.fields_for(version);
        let mut fields = HashMap::with_capacity(wire_fields.len());
        for field in wire_fields {
            fields.insert(field.name.clone(), decode_field(&mut cursor, field));
        }
        log::trace!(
            "[dynamic] decoded {} ({}) from {} bytes",
            descriptor.name(),
            version,
            payload.len()
        );
        Ok(Self { descriptor, fields })
    }
}

fn encode_field(cursor: &mut CursorMut<'_>, field: &FieldDescriptor, value: Option<&DynamicValue>) {
    if field.is_array() {
        let items = value.and_then(DynamicValue::as_array).unwrap_or(&[]);
        let zero = DynamicValue::zero_scalar(field.ftype);
        for i in 0..field.array_length {
            let item = items.get(i).unwrap_or(&zero);
            encode_scalar(cursor.slot(field.ftype.size()), item, field);
        }
    } else {
        let slot = cursor.slot(field.size());
        match value {
            Some(value) => {
                encode_scalar(slot, value, field);
            }
            None => slot.fill(0),
        }
    }
}

fn decode_field(cursor: &mut Cursor<'_>, field: &FieldDescriptor) -> DynamicValue {
    if field.is_array() {
        let items = (0..field.array_length)
            .map(|_| decode_scalar(cursor.take(field.ftype.size()), field).0)
            .collect();
        DynamicValue::Array(items)
    } else {
        decode_scalar(cursor.take(field.size()), field).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSpec, FieldType};

    fn attitude_like() -> Arc<MessageDescriptor> {
        Arc::new(
            MessageDescriptor::build(
                "ATT_POS_MOCAP",
                138,
                &[
                    FieldSpec::new("time_usec", FieldType::Uint64),
                    FieldSpec::new("q", FieldType::Float).array(4),
                    FieldSpec::new("x", FieldType::Float),
                    FieldSpec::new("y", FieldType::Float),
                    FieldSpec::new("z", FieldType::Float),
                    FieldSpec::new("covariance", FieldType::Float)
                        .array(21)
                        .extension(),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_set_field_type_checks() {
        let mut msg = DynamicMessage::new(attitude_like());
        msg.set_field("time_usec", 5u64).unwrap();
        msg.set_field("q", [1.0f32, 0.0, 0.0, 0.0]).unwrap();

        assert!(matches!(
            msg.set_field("time_usec", 5u32),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            msg.set_field("x", vec![1.0f32]),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            msg.set_field("q", 1.0f32),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            msg.set_field("nope", 1.0f32),
            Err(Error::UnknownField { .. })
        ));
        assert_eq!(msg.get("time_usec"), Some(&DynamicValue::U64(5)));
        assert_eq!(msg.len(), 2);
    }

    #[test]
    fn test_unset_fields_encode_as_zero() {
        let msg = DynamicMessage::new(attitude_like());
        assert_eq!(msg.encode(MavlinkVersion::V1), vec![0u8; 36]);
        assert_eq!(msg.encode(MavlinkVersion::V2), vec![0u8]);
    }

    #[test]
    fn test_short_array_zero_filled() {
        let mut msg = DynamicMessage::new(attitude_like());
        msg.set_field("q", vec![2.0f32]).unwrap();
        let bytes = msg.encode(MavlinkVersion::V1);

        let back = DynamicMessage::decode(attitude_like(), &bytes, MavlinkVersion::V1).unwrap();
        assert_eq!(
            back.get("q"),
            Some(&DynamicValue::from([2.0f32, 0.0, 0.0, 0.0]))
        );
        assert!(!back.is_set("covariance"));
    }

    #[test]
    fn test_v2_round_trip_with_extension() {
        let mut msg = DynamicMessage::new(attitude_like());
        msg.set_field("time_usec", 123_456u64).unwrap();
        msg.set_field("q", [1.0f32, 0.5, 0.25, 0.125]).unwrap();
        msg.set_field("x", 1.0f32).unwrap();
        msg.set_field("y", -2.0f32).unwrap();
        msg.set_field("z", 3.5f32).unwrap();
        let mut cov = [0.0f32; 21];
        cov[3] = 9.0;
        msg.set_field("covariance", cov).unwrap();

        let bytes = msg.encode(MavlinkVersion::V2);
        let back = DynamicMessage::decode(attitude_like(), &bytes, MavlinkVersion::V2).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_fields_in_wire_order() {
        let mut msg = DynamicMessage::new(attitude_like());
        msg.set_field("x", 1.0f32).unwrap();
        msg.set_field("time_usec", 1u64).unwrap();
        let names: Vec<&str> = msg.fields().map(|(f, _)| f.name.as_str()).collect();
        assert_eq!(names, vec!["time_usec", "x"]);
        assert_eq!(msg.clear("x"), Some(DynamicValue::F32(1.0)));
        assert!(!msg.is_set("x"));
    }
}
