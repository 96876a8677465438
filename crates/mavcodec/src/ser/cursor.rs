// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Read/write cursors over a payload buffer.
//!
//! The frame rules guarantee that the buffer spans the full layout before
//! any field is touched, so cursors do not bounds-check beyond slice indexing.

use super::scalar::{read_chars, write_chars, Scalar};

/// Generate common cursor methods (offset, remaining)
macro_rules! impl_cursor_common {
    () => {
        pub fn offset(&self) -> usize {
            self.offset
        }

        pub fn remaining(&self) -> usize {
            self.buffer.len().saturating_sub(self.offset)
        }
    };
}

/// Mutable cursor for writing
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_cursor_common!();

    /// Reserve the next `len` bytes and return them for writing.
    pub fn slot(&mut self, len: usize) -> &mut [u8] {
        let start = self.offset;
        self.offset += len;
        &mut self.buffer[start..start + len]
    }

    pub fn write<T: Scalar>(&mut self, value: T) {
        value.write_le(self.slot(T::FIELD_TYPE.size()));
    }

    /// Write a NUL-padded char buffer of exactly `len` bytes.
    pub fn write_chars(&mut self, value: &str, len: usize) {
        write_chars(self.slot(len), value, len);
    }
}

/// Immutable cursor for reading
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_cursor_common!();

    /// Consume the next `len` bytes.
    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let start = self.offset;
        self.offset += len;
        &self.buffer[start..start + len]
    }

    pub fn read<T: Scalar>(&mut self) -> T {
        T::read_le(self.take(T::FIELD_TYPE.size()))
    }

    /// Read a `len`-byte char buffer, cut at the first NUL.
    pub fn read_chars(&mut self, len: usize) -> String {
        read_chars(self.take(len), len)
    }
}
