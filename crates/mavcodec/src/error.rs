// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Codec error types.

use std::fmt;
use thiserror::Error;

/// How a message was looked up: by numeric id or by wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKey {
    Id(u32),
    Name(String),
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Name(name) => write!(f, "name {}", name),
        }
    }
}

/// Errors returned by descriptor building, encoding, decoding and the JSON bridge.
#[derive(Debug, Error)]
pub enum Error {
    /// V1 payload length differs from the message's non-extension size.
    #[error("{message}: payload is {got} bytes, expected exactly {expected}")]
    SizeMismatch {
        message: String,
        expected: usize,
        got: usize,
    },

    /// Message id or name absent from the dialect.
    #[error("unknown message ({0})")]
    UnknownMessage(MessageKey),

    /// A field type has no wire representation.
    #[error("{message}.{field}: unsupported field type '{type_name}'")]
    UnsupportedType {
        message: String,
        field: String,
        type_name: String,
    },

    /// A value's shape does not match the field it is assigned to.
    #[error("field '{field}': type mismatch, expected {expected}")]
    TypeMismatch { field: String, expected: String },

    /// A JSON key (or setter name) does not name a field of the message.
    #[error("{message}: unknown field '{field}'")]
    UnknownField { message: String, field: String },

    /// Definition table is inconsistent (duplicate ids, empty names, ...).
    #[error("invalid message definition: {0}")]
    InvalidDefinition(String),

    /// NaN and infinities have no JSON representation.
    #[error("field '{field}': non-finite float cannot be represented in JSON")]
    NonFiniteFloat { field: String },

    /// Malformed JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn type_mismatch(field: &str, expected: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected: expected.into(),
        }
    }
}
