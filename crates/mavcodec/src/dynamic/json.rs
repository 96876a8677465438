// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! JSON marshal/unmarshal for [`DynamicMessage`].
//!
//! Mapping:
//! - numbers and booleans map to JSON numbers and booleans
//! - `char` fields map to JSON strings
//! - `uint8` arrays map to base64 strings (STANDARD alphabet, padded)
//! - every other array maps to a JSON array
//!
//! Unmarshal is strict: an unknown key or a value of the wrong shape fails
//! the whole call and leaves the message untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Number, Value};

use crate::dynamic::{DynamicMessage, DynamicValue};
use crate::error::{Error, Result};
use crate::types::{FieldDescriptor, FieldType};

/// Field name reported when the document itself is not an object.
const ROOT: &str = "<root>";

impl DynamicMessage {
    /// JSON object with one key per set field.
    pub fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        for (field, value) in self.fields() {
            obj.insert(field.name.clone(), field_to_json(field, value)?);
        }
        Ok(Value::Object(obj))
    }

    /// Serialize set fields to JSON text.
    pub fn marshal_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Serialize set fields to indented JSON text.
    pub fn marshal_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }

    /// Parse JSON text and set every field it names.
    pub fn unmarshal_json(&mut self, text: &str) -> Result<()> {
        let json: Value = serde_json::from_str(text)?;
        self.from_json_value(&json)
    }

    /// Set every field named by a JSON object. Fields absent from it are left as they are.
    pub fn from_json_value(&mut self, json: &Value) -> Result<()> {
        let Value::Object(obj) = json else {
            return Err(Error::type_mismatch(ROOT, "JSON object"));
        };

        let mut staged = Vec::with_capacity(obj.len());
        for (key, value) in obj {
            let field = self.field_descriptor(key)?;
            staged.push((field.name.clone(), json_to_field(field, value)?));
        }
        for (name, value) in staged {
            self.insert_checked(name, value);
        }
        Ok(())
    }
}

fn field_to_json(field: &FieldDescriptor, value: &DynamicValue) -> Result<Value> {
    if field.is_array() && field.ftype == FieldType::Uint8 {
        if let Some(bytes) = value.as_bytes() {
            return Ok(Value::String(STANDARD.encode(bytes)));
        }
    }
    value_to_json(&field.name, value)
}

fn value_to_json(name: &str, value: &DynamicValue) -> Result<Value> {
    Ok(match value {
        DynamicValue::Bool(b) => Value::Bool(*b),
        DynamicValue::U8(n) => Value::from(*n),
        DynamicValue::U16(n) => Value::from(*n),
        DynamicValue::U32(n) => Value::from(*n),
        DynamicValue::U64(n) => Value::from(*n),
        DynamicValue::I8(n) => Value::from(*n),
        DynamicValue::I16(n) => Value::from(*n),
        DynamicValue::I32(n) => Value::from(*n),
        DynamicValue::I64(n) => Value::from(*n),
        DynamicValue::F32(x) => float_to_json(name, f64::from(*x))?,
        DynamicValue::F64(x) => float_to_json(name, *x)?,
        DynamicValue::String(s) => Value::String(s.clone()),
        DynamicValue::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| value_to_json(name, item))
                .collect::<Result<Vec<_>>>()?,
        ),
    })
}

fn float_to_json(name: &str, x: f64) -> Result<Value> {
    Number::from_f64(x)
        .map(Value::Number)
        .ok_or_else(|| Error::NonFiniteFloat {
            field: name.to_string(),
        })
}

fn json_to_field(field: &FieldDescriptor, json: &Value) -> Result<DynamicValue> {
    if field.is_string() {
        return match json {
            Value::String(s) => Ok(DynamicValue::String(s.clone())),
            _ => Err(Error::type_mismatch(&field.name, field.type_label())),
        };
    }

    if field.is_array() {
        return match json {
            Value::String(s) if field.ftype == FieldType::Uint8 => STANDARD
                .decode(s)
                .map(DynamicValue::from)
                .map_err(|_| Error::type_mismatch(&field.name, "base64 string")),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(field.array_length);
                for item in items {
                    out.push(json_to_scalar(field, item)?);
                }
                Ok(DynamicValue::Array(out))
            }
            _ => Err(Error::type_mismatch(&field.name, field.type_label())),
        };
    }

    json_to_scalar(field, json)
}

/// Parse one element of `field`, narrowing to the exact width.
fn json_to_scalar(field: &FieldDescriptor, json: &Value) -> Result<DynamicValue> {
    let mismatch = || Error::type_mismatch(&field.name, field.ftype.short_name());
    let Value::Number(n) = json else {
        return Err(mismatch());
    };

    let value = match field.ftype {
        FieldType::Double => DynamicValue::F64(n.as_f64().ok_or_else(mismatch)?),
        FieldType::Float => {
            let x = n.as_f64().ok_or_else(mismatch)?;
            let narrowed = x as f32;
            if narrowed.is_infinite() {
                return Err(mismatch());
            }
            DynamicValue::F32(narrowed)
        }
        FieldType::Uint64 => DynamicValue::U64(n.as_u64().ok_or_else(mismatch)?),
        FieldType::Int64 => DynamicValue::I64(n.as_i64().ok_or_else(mismatch)?),
        FieldType::Uint32 => DynamicValue::U32(narrow_unsigned(n).ok_or_else(mismatch)?),
        FieldType::Uint16 => DynamicValue::U16(narrow_unsigned(n).ok_or_else(mismatch)?),
        FieldType::Uint8 => DynamicValue::U8(narrow_unsigned(n).ok_or_else(mismatch)?),
        FieldType::Int32 => DynamicValue::I32(narrow_signed(n).ok_or_else(mismatch)?),
        FieldType::Int16 => DynamicValue::I16(narrow_signed(n).ok_or_else(mismatch)?),
        FieldType::Int8 => DynamicValue::I8(narrow_signed(n).ok_or_else(mismatch)?),
        FieldType::Char => return Err(mismatch()),
    };
    Ok(value)
}

fn narrow_unsigned<T: TryFrom<u64>>(n: &Number) -> Option<T> {
    n.as_u64().and_then(|v| T::try_from(v).ok())
}

fn narrow_signed<T: TryFrom<i64>>(n: &Number) -> Option<T> {
    n.as_i64().and_then(|v| T::try_from(v).ok())
}
