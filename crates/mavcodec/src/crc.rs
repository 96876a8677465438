// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! 16-bit X.25 (MCRF4XX) checksum accumulator used by MAVLink.

use crc_any::CRCu16;

/// Streaming CRC-16/MCRF4XX accumulator (poly 0x1021 reflected, init 0xFFFF).
pub struct Crc16X25 {
    inner: CRCu16,
}

impl Crc16X25 {
    pub fn new() -> Self {
        Self {
            inner: CRCu16::crc16mcrf4cc(),
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.inner.digest(bytes);
    }

    pub fn sum16(&self) -> u16 {
        self.inner.get_crc()
    }
}

impl Default for Crc16X25 {
    fn default() -> Self {
        Self::new()
    }
}
