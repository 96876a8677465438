// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Dynamic value types.

use crate::types::{FieldDescriptor, FieldType};

/// A dynamic value that can hold any MAVLink field.
///
/// Arrays are homogeneous; [`DynamicMessage::set_field`](super::DynamicMessage::set_field)
/// rejects an array whose elements do not all match the field type.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Array(Vec<DynamicValue>),
}

impl DynamicValue {
    /// Zero value of a single element of `ftype`.
    ///
    /// `char` elements are strings, so their zero is the empty string.
    pub fn zero_scalar(ftype: FieldType) -> Self {
        match ftype {
            FieldType::Double => Self::F64(0.0),
            FieldType::Uint64 => Self::U64(0),
            FieldType::Int64 => Self::I64(0),
            FieldType::Float => Self::F32(0.0),
            FieldType::Uint32 => Self::U32(0),
            FieldType::Int32 => Self::I32(0),
            FieldType::Uint16 => Self::U16(0),
            FieldType::Int16 => Self::I16(0),
            FieldType::Uint8 => Self::U8(0),
            FieldType::Int8 => Self::I8(0),
            FieldType::Char => Self::String(String::new()),
        }
    }

    /// Value an absent field encodes as: 0, 0.0, empty string or a zero-filled array.
    pub fn zero_for(field: &FieldDescriptor) -> Self {
        if field.is_array() {
            Self::Array(vec![Self::zero_scalar(field.ftype); field.array_length])
        } else {
            Self::zero_scalar(field.ftype)
        }
    }

    /// Whether this value is a single element of `ftype`.
    pub fn is_scalar_of(&self, ftype: FieldType) -> bool {
        matches!(
            (ftype, self),
            (FieldType::Double, Self::F64(_))
                | (FieldType::Uint64, Self::U64(_))
                | (FieldType::Int64, Self::I64(_))
                | (FieldType::Float, Self::F32(_))
                | (FieldType::Uint32, Self::U32(_))
                | (FieldType::Int32, Self::I32(_))
                | (FieldType::Uint16, Self::U16(_))
                | (FieldType::Int16, Self::I16(_))
                | (FieldType::Uint8, Self::U8(_))
                | (FieldType::Int8, Self::I8(_))
                | (FieldType::Char, Self::String(_))
        )
    }

    /// Exact variant and array-ness check against a field.
    pub fn matches_field(&self, field: &FieldDescriptor) -> bool {
        if field.is_array() {
            match self {
                Self::Array(items) => items.iter().all(|v| v.is_scalar_of(field.ftype)),
                _ => false,
            }
        } else {
            self.is_scalar_of(field.ftype)
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "uint8",
            Self::U16(_) => "uint16",
            Self::U32(_) => "uint32",
            Self::U64(_) => "uint64",
            Self::I8(_) => "int8",
            Self::I16(_) => "int16",
            Self::I32(_) => "int32",
            Self::I64(_) => "int64",
            Self::F32(_) => "float",
            Self::F64(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U8(v) => Some(u64::from(*v)),
            Self::U16(v) => Some(u64::from(*v)),
            Self::U32(v) => Some(u64::from(*v)),
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any signed integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I8(v) => Some(i64::from(*v)),
            Self::I16(v) => Some(i64::from(*v)),
            Self::I32(v) => Some(i64::from(*v)),
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F32(v) => Some(f64::from(*v)),
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as array.
    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Raw bytes of a `uint8` array.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        let items = self.as_array()?;
        items
            .iter()
            .map(|v| match v {
                Self::U8(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

// Conversion traits
macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive!(
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
);

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DynamicValue>, const N: usize> From<[T; N]> for DynamicValue {
    fn from(v: [T; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSpec, MessageDescriptor};

    fn fields() -> MessageDescriptor {
        MessageDescriptor::build(
            "T",
            1,
            &[
                FieldSpec::new("q", FieldType::Float).array(4),
                FieldSpec::new("count", FieldType::Uint16),
                FieldSpec::new("name", FieldType::Char).array(8),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_primitive_values() {
        let v = DynamicValue::from(42u32);
        assert_eq!(v.as_u64(), Some(42));
        assert_eq!(v.as_i64(), None);

        let v = DynamicValue::from(std::f64::consts::PI);
        assert_eq!(v.as_f64(), Some(std::f64::consts::PI));

        let v = DynamicValue::from("hello");
        assert_eq!(v.as_str(), Some("hello"));
    }

    #[test]
    fn test_zero_for() {
        let desc = fields();
        let q = desc.field("q").unwrap();
        assert_eq!(
            DynamicValue::zero_for(q),
            DynamicValue::from([0.0f32, 0.0, 0.0, 0.0])
        );
        assert_eq!(
            DynamicValue::zero_for(desc.field("name").unwrap()),
            DynamicValue::from("")
        );
        assert_eq!(
            DynamicValue::zero_for(desc.field("count").unwrap()),
            DynamicValue::U16(0)
        );
    }

    #[test]
    fn test_matches_field() {
        let desc = fields();
        let q = desc.field("q").unwrap();
        let count = desc.field("count").unwrap();
        let name = desc.field("name").unwrap();

        assert!(DynamicValue::from(vec![1.0f32, 2.0]).matches_field(q));
        assert!(!DynamicValue::from(vec![1.0f64]).matches_field(q));
        assert!(!DynamicValue::F32(1.0).matches_field(q));

        assert!(DynamicValue::U16(3).matches_field(count));
        assert!(!DynamicValue::U32(3).matches_field(count));
        assert!(!DynamicValue::from(vec![3u16]).matches_field(count));

        assert!(DynamicValue::from("abc").matches_field(name));
        assert!(!DynamicValue::Bool(true).matches_field(name));
    }

    #[test]
    fn test_as_bytes() {
        let v = DynamicValue::from(vec![1u8, 2, 3]);
        assert_eq!(v.as_bytes(), Some(vec![1, 2, 3]));
        assert_eq!(DynamicValue::from(vec![1u16]).as_bytes(), None);
    }
}
