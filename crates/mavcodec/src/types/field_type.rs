// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Primitive wire types.

use std::fmt;

/// Primitive MAVLink wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Double,
    Uint64,
    Int64,
    Float,
    Uint32,
    Int32,
    Uint16,
    Int16,
    Uint8,
    Int8,
    Char,
}

impl FieldType {
    /// Every wire type, largest first.
    pub const ALL: [FieldType; 11] = [
        Self::Double,
        Self::Uint64,
        Self::Int64,
        Self::Float,
        Self::Uint32,
        Self::Int32,
        Self::Uint16,
        Self::Int16,
        Self::Uint8,
        Self::Int8,
        Self::Char,
    ];

    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Double | Self::Uint64 | Self::Int64 => 8,
            Self::Float | Self::Uint32 | Self::Int32 => 4,
            Self::Uint16 | Self::Int16 => 2,
            Self::Uint8 | Self::Int8 | Self::Char => 1,
        }
    }

    /// Canonical name as it appears in dialect XML, fed into CRC-extra.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Uint64 => "uint64_t",
            Self::Int64 => "int64_t",
            Self::Float => "float",
            Self::Uint32 => "uint32_t",
            Self::Int32 => "int32_t",
            Self::Uint16 => "uint16_t",
            Self::Int16 => "int16_t",
            Self::Uint8 => "uint8_t",
            Self::Int8 => "int8_t",
            Self::Char => "char",
        }
    }

    /// Short name used in type-mismatch errors and JSON documentation.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Uint64 => "uint64",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Uint32 => "uint32",
            Self::Int32 => "int32",
            Self::Uint16 => "uint16",
            Self::Int16 => "int16",
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Char => "char",
        }
    }

    /// Parse a canonical wire name. `uint8_t_mavlink_version` is accepted as `uint8_t`.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        if name == "uint8_t_mavlink_version" {
            return Some(Self::Uint8);
        }
        Self::ALL.into_iter().find(|t| t.wire_name() == name)
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::Double | Self::Float)
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int64 | Self::Int32 | Self::Int16 | Self::Int8 | Self::Double | Self::Float
        )
    }

    /// Whether a symbolic enumeration may be backed by this type.
    pub const fn can_back_enum(self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Int32 | Self::Uint64
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let sizes: Vec<usize> = FieldType::ALL.iter().map(|t| t.size()).collect();
        assert_eq!(sizes, vec![8, 8, 8, 4, 4, 4, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_wire_name_roundtrip() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::from_wire_name(t.wire_name()), Some(t));
        }
        assert_eq!(
            FieldType::from_wire_name("uint8_t_mavlink_version"),
            Some(FieldType::Uint8)
        );
        assert_eq!(FieldType::from_wire_name("bool"), None);
        assert_eq!(FieldType::from_wire_name("uint8"), None);
    }

    #[test]
    fn test_enum_backing() {
        assert!(FieldType::Uint8.can_back_enum());
        assert!(FieldType::Int32.can_back_enum());
        assert!(FieldType::Uint64.can_back_enum());
        assert!(!FieldType::Int8.can_back_enum());
        assert!(!FieldType::Float.can_back_enum());
        assert!(!FieldType::Char.can_back_enum());
    }
}
