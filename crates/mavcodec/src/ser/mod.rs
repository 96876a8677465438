// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Payload serialization shared by the static and dynamic codecs.

pub mod cursor;
pub mod frame;
pub mod scalar;
pub mod wire;

pub use cursor::{Cursor, CursorMut};
pub use frame::{finish_encode, prepare_decode};
pub use scalar::{decode_scalar, encode_scalar, read_chars, write_chars, Scalar};
pub use wire::WireValue;

use std::fmt;

/// MAVLink frame version. Decides payload truncation and extension handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MavlinkVersion {
    V1,
    #[default]
    V2,
}

impl MavlinkVersion {
    pub fn is_v2(self) -> bool {
        self == Self::V2
    }
}

impl From<bool> for MavlinkVersion {
    /// `true` selects V2.
    fn from(is_v2: bool) -> Self {
        if is_v2 {
            Self::V2
        } else {
            Self::V1
        }
    }
}

impl fmt::Display for MavlinkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}
