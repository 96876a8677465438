// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! JSON Schema (draft-07) generation.
//!
//! Every document produced by [`DynamicMessage::to_json`] for a message
//! validates against that message's schema, so the type mapping here must
//! track the one in the JSON bridge.

use serde_json::{json, Map, Value};

use crate::dynamic::DynamicMessage;
use crate::types::{FieldDescriptor, FieldType, MessageDescriptor};

pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Schema for `descriptor`, identified as `<prefix>/<topic>`.
pub fn schema_for(descriptor: &MessageDescriptor, prefix: &str, topic: &str) -> Value {
    let base = format!("{}/{}", prefix, topic);
    let mut properties = Map::new();
    for field in descriptor.fields() {
        let mut property = field_schema(field);
        if let Value::Object(obj) = &mut property {
            obj.insert(
                "title".to_string(),
                Value::String(format!("{}/{}", base, field.name)),
            );
        }
        properties.insert(field.name.clone(), property);
    }

    json!({
        "$schema": DRAFT_07,
        "$id": base,
        "title": base,
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    })
}

impl DynamicMessage {
    /// Schema for this message's type.
    pub fn json_schema(&self, prefix: &str, topic: &str) -> Value {
        schema_for(self.descriptor(), prefix, topic)
    }
}

fn field_schema(field: &FieldDescriptor) -> Value {
    if field.is_string() {
        return json!({ "type": "string" });
    }
    if field.is_array() {
        if field.ftype == FieldType::Uint8 {
            return json!({ "type": "string", "contentEncoding": "base64" });
        }
        return json!({
            "type": "array",
            "items": element_schema(field.ftype),
        });
    }
    element_schema(field.ftype)
}

fn element_schema(ftype: FieldType) -> Value {
    let (min, max): (Value, Value) = match ftype {
        FieldType::Double | FieldType::Float => return json!({ "type": "number" }),
        FieldType::Char => return json!({ "type": "string" }),
        FieldType::Uint64 => (0.into(), u64::MAX.into()),
        FieldType::Int64 => (i64::MIN.into(), i64::MAX.into()),
        FieldType::Uint32 => (0.into(), u32::MAX.into()),
        FieldType::Int32 => (i32::MIN.into(), i32::MAX.into()),
        FieldType::Uint16 => (0.into(), u16::MAX.into()),
        FieldType::Int16 => (i16::MIN.into(), i16::MAX.into()),
        FieldType::Uint8 => (0.into(), u8::MAX.into()),
        FieldType::Int8 => (i8::MIN.into(), i8::MAX.into()),
    };
    json!({ "type": "integer", "minimum": min, "maximum": max })
}
