// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Typed field values for the static codec.
//!
//! `#[derive(MavMessage)]` reads the associated constants of each field's
//! Rust type to build the message's [`FieldSpec`](crate::types::FieldSpec)
//! list, and calls `encode`/`decode` from the generated per-field dispatch.
//! A field type without a `WireValue` impl is a compile error.

use super::cursor::{Cursor, CursorMut};
use super::scalar::Scalar;
use crate::types::{FieldDescriptor, FieldType};

pub trait WireValue: Sized {
    const FIELD_TYPE: FieldType;
    /// 0 for scalars. `String` leaves this at 0; the `len` attribute sets it.
    const ARRAY_LENGTH: usize = 0;
    const IS_ENUM: bool = false;

    /// Value decoded from an all-zero field.
    fn zero() -> Self;

    fn encode(&self, cursor: &mut CursorMut<'_>, field: &FieldDescriptor);

    fn decode(cursor: &mut Cursor<'_>, field: &FieldDescriptor) -> Self;
}

macro_rules! impl_wire_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireValue for $ty {
                const FIELD_TYPE: FieldType = <$ty as Scalar>::FIELD_TYPE;

                fn zero() -> Self {
                    <$ty>::default()
                }

                #[inline]
                fn encode(&self, cursor: &mut CursorMut<'_>, _field: &FieldDescriptor) {
                    cursor.write(*self);
                }

                #[inline]
                fn decode(cursor: &mut Cursor<'_>, _field: &FieldDescriptor) -> Self {
                    cursor.read()
                }
            }
        )*
    };
}

impl_wire_scalar!(f64, u64, i64, f32, u32, i32, u16, i16, u8, i8);

/// `char` buffers.
impl WireValue for String {
    const FIELD_TYPE: FieldType = FieldType::Char;

    fn zero() -> Self {
        String::new()
    }

    fn encode(&self, cursor: &mut CursorMut<'_>, field: &FieldDescriptor) {
        cursor.write_chars(self, field.array_length.max(1));
    }

    fn decode(cursor: &mut Cursor<'_>, field: &FieldDescriptor) -> Self {
        cursor.read_chars(field.array_length.max(1))
    }
}

impl<T: Scalar, const N: usize> WireValue for [T; N] {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const ARRAY_LENGTH: usize = N;

    fn zero() -> Self {
        [T::default(); N]
    }

    fn encode(&self, cursor: &mut CursorMut<'_>, _field: &FieldDescriptor) {
        for element in self {
            cursor.write(*element);
        }
    }

    fn decode(cursor: &mut Cursor<'_>, _field: &FieldDescriptor) -> Self {
        let mut out = [T::default(); N];
        for slot in out.iter_mut() {
            *slot = cursor.read();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSpec, MessageDescriptor};

    #[test]
    fn test_array_constants() {
        assert_eq!(<[f32; 4] as WireValue>::FIELD_TYPE, FieldType::Float);
        assert_eq!(<[f32; 4] as WireValue>::ARRAY_LENGTH, 4);
        assert_eq!(<u16 as WireValue>::ARRAY_LENGTH, 0);
        assert!(!<u8 as WireValue>::IS_ENUM);
    }

    #[test]
    fn test_string_uses_descriptor_length() {
        let desc = MessageDescriptor::build(
            "T",
            1,
            &[FieldSpec::new("text", FieldType::Char).array(6)],
        )
        .unwrap();
        let field = &desc.fields()[0];

        let mut buf = [0xFFu8; 6];
        let mut w = CursorMut::new(&mut buf);
        "hello world".to_string().encode(&mut w, field);
        assert_eq!(w.offset(), 6);
        assert_eq!(&buf, b"hello ");

        let mut r = Cursor::new(&buf);
        assert_eq!(String::decode(&mut r, field), "hello ");
    }
}
