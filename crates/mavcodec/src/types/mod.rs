// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Field type table and message descriptors.

pub mod descriptor;
pub mod field_type;

pub use descriptor::{
    FieldDescriptor, FieldSpec, MessageDescriptor, MAX_MESSAGE_ID, MAX_PAYLOAD_LEN,
};
pub use field_type::FieldType;
