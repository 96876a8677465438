// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Read-mostly descriptor cache for static message types.
//!
//! Descriptors are built at most once per message id and then served through
//! shared read locks, so concurrent encode/decode of the same type never
//! rebuild or serialize on a writer. The registry is a plain value: create
//! one per dialect or per node and pass it by reference.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::message::{decode_message, encode_message, MavMessage};
use crate::ser::MavlinkVersion;
use crate::types::MessageDescriptor;

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Default)]
struct Tables {
    by_id: HashMap<u32, Arc<MessageDescriptor>>,
    by_name: HashMap<String, u32>,
}

/// Descriptor cache keyed by message id.
#[derive(Default)]
pub struct MessageRegistry {
    inner: RwLock<Tables>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MessageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and cache `M`'s descriptor now.
    ///
    /// Fails if the definition is invalid or if another message already
    /// holds `M::ID` or `M::NAME`. Registering the same type twice is a no-op.
    pub fn register<M: MavMessage>(&self) -> Result<Arc<MessageDescriptor>> {
        self.get_or_build::<M>()
    }

    /// `M`'s descriptor, built on first use.
    pub fn descriptor<M: MavMessage>(&self) -> Result<Arc<MessageDescriptor>> {
        if let Some(hit) = self.peek::<M>() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit);
        }
        self.get_or_build::<M>()
    }

    fn peek<M: MavMessage>(&self) -> Option<Arc<MessageDescriptor>> {
        let tables = self.inner.read();
        tables
            .by_id
            .get(&M::ID)
            .filter(|desc| desc.name() == M::NAME)
            .cloned()
    }

    fn get_or_build<M: MavMessage>(&self) -> Result<Arc<MessageDescriptor>> {
        let mut tables = self.inner.write();
        if let Some(existing) = tables.by_id.get(&M::ID) {
            if existing.name() != M::NAME {
                return Err(Error::InvalidDefinition(format!(
                    "message id {} is already registered as {}, cannot register {}",
                    M::ID,
                    existing.name(),
                    M::NAME
                )));
            }
            return Ok(Arc::clone(existing));
        }
        if let Some(other) = tables.by_name.get(M::NAME) {
            return Err(Error::InvalidDefinition(format!(
                "message name {} is already registered with id {}, cannot register id {}",
                M::NAME,
                other,
                M::ID
            )));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let built = Arc::new(M::build_descriptor()?);
        tables.by_id.insert(M::ID, Arc::clone(&built));
        tables.by_name.insert(M::NAME.to_string(), M::ID);
        log::debug!("[registry] registered {} (id {})", M::NAME, M::ID);
        Ok(built)
    }

    /// Cached descriptor by message id.
    pub fn get(&self, id: u32) -> Option<Arc<MessageDescriptor>> {
        self.inner.read().by_id.get(&id).cloned()
    }

    /// Cached descriptor by wire name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<MessageDescriptor>> {
        let tables = self.inner.read();
        let id = tables.by_name.get(name)?;
        tables.by_id.get(id).cloned()
    }

    /// All cached descriptors, sorted by id.
    pub fn descriptors(&self) -> Vec<Arc<MessageDescriptor>> {
        let mut all: Vec<_> = self.inner.read().by_id.values().cloned().collect();
        all.sort_by_key(|d| d.id());
        all
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> LookupStats {
        LookupStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Encode a static message.
    pub fn encode<M: MavMessage>(&self, message: &M, version: MavlinkVersion) -> Result<Vec<u8>> {
        let descriptor = self.descriptor::<M>()?;
        Ok(encode_message(&descriptor, message, version))
    }

    /// Decode a payload into a static message.
    pub fn decode<M: MavMessage>(&self, payload: &[u8], version: MavlinkVersion) -> Result<M> {
        let descriptor = self.descriptor::<M>()?;
        decode_message(&descriptor, payload, version)
    }
}

impl std::fmt::Debug for MessageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRegistry")
            .field("messages", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldSpec;
    use crate::{MavMessage, MessageKey};

    #[derive(Debug, Clone, PartialEq, MavMessage)]
    #[mavlink(id = 30, name = "ATTITUDE")]
    struct Attitude {
        time_boot_ms: u32,
        roll: f32,
        pitch: f32,
        yaw: f32,
        rollspeed: f32,
        pitchspeed: f32,
        yawspeed: f32,
    }

    #[derive(Debug, Clone, PartialEq, MavMessage)]
    #[mavlink(id = 30, name = "NOT_ATTITUDE")]
    struct Impostor {
        value: u8,
    }

    #[derive(Debug, Clone, PartialEq, MavMessage)]
    #[mavlink(id = 31, name = "ATTITUDE")]
    struct Renumbered {
        value: u8,
    }

    #[test]
    fn test_lazy_build_once() {
        let registry = MessageRegistry::new();
        assert!(registry.get(30).is_none());

        let a = registry.descriptor::<Attitude>().unwrap();
        let b = registry.descriptor::<Attitude>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.stats(), LookupStats { hits: 1, misses: 1 });
        assert_eq!(a.crc_extra(), 39);
        assert_eq!(a.size_normal(), 28);
        assert!(registry.get_by_name("ATTITUDE").is_some());
    }

    #[test]
    fn test_collisions_rejected() {
        let registry = MessageRegistry::new();
        registry.register::<Attitude>().unwrap();
        registry.register::<Attitude>().unwrap();
        assert!(matches!(
            registry.register::<Impostor>(),
            Err(Error::InvalidDefinition(_))
        ));
        assert!(matches!(
            registry.register::<Renumbered>(),
            Err(Error::InvalidDefinition(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_fields_declaration_order() {
        let names: Vec<&str> = Attitude::FIELDS.iter().map(|f: &FieldSpec| f.name.as_ref()).collect();
        assert_eq!(names[0], "time_boot_ms");
        assert_eq!(names[6], "yawspeed");
        assert_eq!(format!("{}", MessageKey::Id(Attitude::ID)), "id 30");
    }

    #[test]
    fn test_concurrent_lookups_share_descriptor() {
        let registry = Arc::new(MessageRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let att = Attitude {
                        time_boot_ms: 1,
                        roll: 0.5,
                        pitch: 0.0,
                        yaw: 0.0,
                        rollspeed: 0.0,
                        pitchspeed: 0.0,
                        yawspeed: 0.0,
                    };
                    for _ in 0..100 {
                        let bytes = registry.encode(&att, MavlinkVersion::V2).unwrap();
                        let back: Attitude = registry.decode(&bytes, MavlinkVersion::V2).unwrap();
                        assert_eq!(back, att);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.stats().misses, 1);
    }
}
