// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Little-endian scalar codec.
//!
//! [`Scalar`] is the per-primitive building block used by both codecs: the
//! static path reaches it through [`WireValue`](super::WireValue), the dynamic
//! path through [`decode_scalar`] / [`encode_scalar`].
//!
//! None of these functions validate buffer length: callers run the frame
//! rules first, which guarantee the full layout is addressable.

use crate::dynamic::DynamicValue;
use crate::types::{FieldDescriptor, FieldType};

/// Primitive with a fixed little-endian wire form.
pub trait Scalar: Copy + Default + PartialEq + std::fmt::Debug {
    const FIELD_TYPE: FieldType;

    fn read_le(buf: &[u8]) -> Self;
    fn write_le(self, buf: &mut [u8]);
}

macro_rules! impl_scalar {
    ($ty:ty, $ft:ident) => {
        impl Scalar for $ty {
            const FIELD_TYPE: FieldType = FieldType::$ft;

            #[inline]
            fn read_le(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[..std::mem::size_of::<$ty>()]);
                <$ty>::from_le_bytes(bytes)
            }

            #[inline]
            fn write_le(self, buf: &mut [u8]) {
                buf[..std::mem::size_of::<$ty>()].copy_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_scalar!(f64, Double);
impl_scalar!(u64, Uint64);
impl_scalar!(i64, Int64);
impl_scalar!(f32, Float);
impl_scalar!(u32, Uint32);
impl_scalar!(i32, Int32);
impl_scalar!(u16, Uint16);
impl_scalar!(i16, Int16);
impl_scalar!(u8, Uint8);
impl_scalar!(i8, Int8);

/// Read a char buffer of `len` bytes; the value stops at the first NUL.
pub fn read_chars(buf: &[u8], len: usize) -> String {
    let raw = &buf[..len];
    let end = raw.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Write exactly `len` bytes: the string, cut to `len`, then zero padding.
pub fn write_chars(buf: &mut [u8], value: &str, len: usize) {
    let bytes = value.as_bytes();
    let n = bytes.len().min(len);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf[n..len].fill(0);
}

/// Decode one element of `field` (the whole buffer for `char` fields).
///
/// Returns the value and the number of bytes consumed. Enum-backed fields
/// decode to their integer type.
pub fn decode_scalar(buf: &[u8], field: &FieldDescriptor) -> (DynamicValue, usize) {
    let width = field.ftype.size();
    let value = match field.ftype {
        FieldType::Double => DynamicValue::F64(f64::read_le(buf)),
        FieldType::Uint64 => DynamicValue::U64(u64::read_le(buf)),
        FieldType::Int64 => DynamicValue::I64(i64::read_le(buf)),
        FieldType::Float => DynamicValue::F32(f32::read_le(buf)),
        FieldType::Uint32 => DynamicValue::U32(u32::read_le(buf)),
        FieldType::Int32 => DynamicValue::I32(i32::read_le(buf)),
        FieldType::Uint16 => DynamicValue::U16(u16::read_le(buf)),
        FieldType::Int16 => DynamicValue::I16(i16::read_le(buf)),
        FieldType::Uint8 => DynamicValue::U8(u8::read_le(buf)),
        FieldType::Int8 => DynamicValue::I8(i8::read_le(buf)),
        FieldType::Char => {
            let len = field.array_length.max(1);
            return (DynamicValue::String(read_chars(buf, len)), len);
        }
    };
    (value, width)
}

/// Encode one element of `field` (the whole buffer for `char` fields).
///
/// A value whose variant does not belong to the field type is written as zero.
pub fn encode_scalar(buf: &mut [u8], value: &DynamicValue, field: &FieldDescriptor) -> usize {
    let width = field.ftype.size();
    match (field.ftype, value) {
        (FieldType::Double, DynamicValue::F64(v)) => v.write_le(buf),
        (FieldType::Uint64, DynamicValue::U64(v)) => v.write_le(buf),
        (FieldType::Int64, DynamicValue::I64(v)) => v.write_le(buf),
        (FieldType::Float, DynamicValue::F32(v)) => v.write_le(buf),
        (FieldType::Uint32, DynamicValue::U32(v)) => v.write_le(buf),
        (FieldType::Int32, DynamicValue::I32(v)) => v.write_le(buf),
        (FieldType::Uint16, DynamicValue::U16(v)) => v.write_le(buf),
        (FieldType::Int16, DynamicValue::I16(v)) => v.write_le(buf),
        (FieldType::Uint8, DynamicValue::U8(v)) => v.write_le(buf),
        (FieldType::Int8, DynamicValue::I8(v)) => v.write_le(buf),
        (FieldType::Char, value) => {
            let len = field.array_length.max(1);
            let text = match value {
                DynamicValue::String(s) => s.as_str(),
                _ => "",
            };
            write_chars(buf, text, len);
            return len;
        }
        _ => buf[..width].fill(0),
    }
    width
}
