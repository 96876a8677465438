// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Version-dependent payload length rules.
//!
//! - V1 payloads carry exactly the non-extension fields; any other length is rejected.
//! - V2 payloads may be shorter than the full layout (trailing zeros stripped by the
//!   sender, or extensions unknown to it). They are zero-padded before decoding;
//!   excess bytes are ignored. Encoded V2 payloads drop trailing zeros but keep
//!   at least one byte.

use std::borrow::Cow;

use super::MavlinkVersion;
use crate::error::{Error, Result};
use crate::types::MessageDescriptor;

/// Check (V1) or normalize (V2) a received payload to the full layout length.
pub fn prepare_decode<'a>(
    descriptor: &MessageDescriptor,
    payload: &'a [u8],
    version: MavlinkVersion,
) -> Result<Cow<'a, [u8]>> {
    match version {
        MavlinkVersion::V1 => {
            if payload.len() != descriptor.size_normal() {
                return Err(Error::SizeMismatch {
                    message: descriptor.name().to_string(),
                    expected: descriptor.size_normal(),
                    got: payload.len(),
                });
            }
            Ok(Cow::Borrowed(payload))
        }
        MavlinkVersion::V2 => {
            let full = descriptor.size_extended();
            if payload.len() >= full {
                return Ok(Cow::Borrowed(&payload[..full]));
            }
            log::trace!(
                "[frame] {}: padding v2 payload {} -> {} bytes",
                descriptor.name(),
                payload.len(),
                full
            );
            let mut padded = Vec::with_capacity(full);
            padded.extend_from_slice(payload);
            padded.resize(full, 0);
            Ok(Cow::Owned(padded))
        }
    }
}

/// Apply V2 empty-byte truncation to a fully encoded payload.
pub fn finish_encode(mut payload: Vec<u8>, version: MavlinkVersion) -> Vec<u8> {
    if version == MavlinkVersion::V2 {
        let keep = payload
            .iter()
            .rposition(|&b| b != 0)
            .map_or(1, |last| last + 1);
        payload.truncate(keep);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSpec, FieldType};

    fn descriptor() -> MessageDescriptor {
        MessageDescriptor::build(
            "TEST",
            1,
            &[
                FieldSpec::new("a", FieldType::Uint32),
                FieldSpec::new("b", FieldType::Uint16).extension(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_v1_requires_exact_size() {
        let desc = descriptor();
        assert!(prepare_decode(&desc, &[0; 4], MavlinkVersion::V1).is_ok());
        assert!(matches!(
            prepare_decode(&desc, &[0; 6], MavlinkVersion::V1),
            Err(Error::SizeMismatch { expected: 4, got: 6, .. })
        ));
        assert!(matches!(
            prepare_decode(&desc, &[0; 3], MavlinkVersion::V1),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_v2_pads_and_clips() {
        let desc = descriptor();
        let short = prepare_decode(&desc, &[7], MavlinkVersion::V2).unwrap();
        assert_eq!(short.as_ref(), &[7, 0, 0, 0, 0, 0]);

        let long = prepare_decode(&desc, &[1, 2, 3, 4, 5, 6, 7, 8], MavlinkVersion::V2).unwrap();
        assert_eq!(long.as_ref(), &[1, 2, 3, 4, 5, 6]);

        let empty = prepare_decode(&desc, &[], MavlinkVersion::V2).unwrap();
        assert_eq!(empty.as_ref(), &[0; 6]);
    }

    #[test]
    fn test_v2_truncation_keeps_one_byte() {
        assert_eq!(finish_encode(vec![0, 0, 0], MavlinkVersion::V2), vec![0]);
        assert_eq!(finish_encode(vec![1, 0, 2, 0, 0], MavlinkVersion::V2), vec![1, 0, 2]);
        assert_eq!(finish_encode(vec![0, 0, 0], MavlinkVersion::V1), vec![0, 0, 0]);
    }
}
