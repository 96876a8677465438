// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Dialect definition tables for the dynamic codec.
//!
//! A [`DialectTable`] is built once from message definitions (usually the
//! JSON emitted by the XML dialect compiler) and then passed by reference to
//! whatever needs to create, encode or decode dynamic messages.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dynamic::DynamicMessage;
use crate::error::{Error, MessageKey, Result};
use crate::registry::MessageRegistry;
use crate::ser::MavlinkVersion;
use crate::types::{FieldSpec, FieldType, MessageDescriptor};

const COMMON_JSON: &str = include_str!("../../dialects/common.json");

/// One message of a definition table, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    pub id: u32,
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl MessageDefinition {
    pub fn new(id: u32, name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
        }
    }
}

/// Definition file layout.
#[derive(Debug, Serialize, Deserialize)]
struct DialectFile {
    name: String,
    #[serde(default)]
    version: u32,
    messages: Vec<MessageEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageEntry {
    id: u32,
    name: String,
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_name: Option<String>,
    #[serde(default)]
    extension: bool,
}

/// Parse `uint16_t`, `char[16]`, `float[4]` into a type and array length.
pub fn parse_type_spec(spec: &str) -> Option<(FieldType, usize)> {
    let spec = spec.trim();
    match spec.split_once('[') {
        Some((base, rest)) => {
            let len: usize = rest.strip_suffix(']')?.trim().parse().ok()?;
            if len == 0 {
                return None;
            }
            Some((FieldType::from_wire_name(base.trim())?, len))
        }
        None => Some((FieldType::from_wire_name(spec)?, 0)),
    }
}

impl MessageEntry {
    fn into_definition(self) -> Result<MessageDefinition> {
        let mut fields = Vec::with_capacity(self.fields.len());
        for entry in self.fields {
            let Some((ftype, array_length)) = parse_type_spec(&entry.type_name) else {
                return Err(Error::UnsupportedType {
                    message: self.name,
                    field: entry.name,
                    type_name: entry.type_name,
                });
            };
            fields.push(FieldSpec {
                name: entry.name.into(),
                ftype,
                is_enum: entry.enum_name.is_some(),
                array_length,
                is_extension: entry.extension,
            });
        }
        Ok(MessageDefinition::new(self.id, self.name, fields))
    }
}

/// CRC-extra disagreement between a dialect table and a static registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatIssue {
    pub id: u32,
    pub name: String,
    pub table_crc: u8,
    pub registry_crc: u8,
}

/// Immutable set of message descriptors for one dialect.
#[derive(Debug, Clone)]
pub struct DialectTable {
    name: String,
    version: u32,
    by_id: BTreeMap<u32, Arc<MessageDescriptor>>,
    by_name: HashMap<String, u32>,
}

impl DialectTable {
    /// Build every descriptor of the table, rejecting duplicate ids or names.
    pub fn new(
        name: impl Into<String>,
        version: u32,
        definitions: impl IntoIterator<Item = MessageDefinition>,
    ) -> Result<Self> {
        let name = name.into();
        let mut by_id = BTreeMap::new();
        let mut by_name = HashMap::new();

        for def in definitions {
            let descriptor = MessageDescriptor::build(&def.name, def.id, &def.fields)?;
            if by_id.contains_key(&def.id) {
                return Err(Error::InvalidDefinition(format!(
                    "{}: duplicate message id {}",
                    name, def.id
                )));
            }
            if by_name.insert(def.name.clone(), def.id).is_some() {
                return Err(Error::InvalidDefinition(format!(
                    "{}: duplicate message name {}",
                    name, def.name
                )));
            }
            by_id.insert(def.id, Arc::new(descriptor));
        }

        log::debug!(
            "[dialect] loaded {} v{}: {} messages",
            name,
            version,
            by_id.len()
        );

        Ok(Self {
            name,
            version,
            by_id,
            by_name,
        })
    }

    /// Load a table from its JSON definition form.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: DialectFile = serde_json::from_str(text)?;
        let definitions = file
            .messages
            .into_iter()
            .map(MessageEntry::into_definition)
            .collect::<Result<Vec<_>>>()?;
        Self::new(file.name, file.version, definitions)
    }

    /// Built-in subset of the `common` dialect.
    pub fn common() -> Result<Self> {
        Self::from_json(COMMON_JSON)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Descriptor by message id.
    pub fn get(&self, id: u32) -> Option<&Arc<MessageDescriptor>> {
        self.by_id.get(&id)
    }

    /// Descriptor by wire name.
    pub fn get_by_name(&self, name: &str) -> Option<&Arc<MessageDescriptor>> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// All descriptors, sorted by id.
    pub fn messages(&self) -> impl Iterator<Item = &Arc<MessageDescriptor>> {
        self.by_id.values()
    }

    fn require(&self, id: u32) -> Result<&Arc<MessageDescriptor>> {
        self.get(id)
            .ok_or(Error::UnknownMessage(MessageKey::Id(id)))
    }

    /// Empty message of the given id.
    pub fn create_by_id(&self, id: u32) -> Result<DynamicMessage> {
        Ok(DynamicMessage::new(Arc::clone(self.require(id)?)))
    }

    /// Empty message of the given wire name.
    pub fn create_by_name(&self, name: &str) -> Result<DynamicMessage> {
        let descriptor = self
            .get_by_name(name)
            .ok_or_else(|| Error::UnknownMessage(MessageKey::Name(name.to_string())))?;
        Ok(DynamicMessage::new(Arc::clone(descriptor)))
    }

    /// Decode a payload of message `id`.
    pub fn decode(&self, id: u32, payload: &[u8], version: MavlinkVersion) -> Result<DynamicMessage> {
        let descriptor = self.require(id)?;
        DynamicMessage::decode(Arc::clone(descriptor), payload, version)
    }

    /// Encode a message created from this table.
    pub fn encode(&self, message: &DynamicMessage, version: MavlinkVersion) -> Result<Vec<u8>> {
        let descriptor = self.require(message.id())?;
        if descriptor.name() != message.name() {
            return Err(Error::UnknownMessage(MessageKey::Name(
                message.name().to_string(),
            )));
        }
        Ok(message.encode(version))
    }

    pub fn size_normal(&self, id: u32) -> Result<usize> {
        Ok(self.require(id)?.size_normal())
    }

    pub fn size_extended(&self, id: u32) -> Result<usize> {
        Ok(self.require(id)?.size_extended())
    }

    pub fn crc_extra(&self, id: u32) -> Result<u8> {
        Ok(self.require(id)?.crc_extra())
    }

    /// Compare CRC-extra with every statically registered message this table also defines.
    pub fn check_compat(&self, registry: &MessageRegistry) -> Vec<CompatIssue> {
        let mut issues = Vec::new();
        for registered in registry.descriptors() {
            let Some(ours) = self.get(registered.id()) else {
                continue;
            };
            if ours.crc_extra() != registered.crc_extra() {
                log::warn!(
                    "[dialect] {}: crc_extra mismatch for {} (id {}): table {} vs registry {}",
                    self.name,
                    ours.name(),
                    ours.id(),
                    ours.crc_extra(),
                    registered.crc_extra()
                );
                issues.push(CompatIssue {
                    id: ours.id(),
                    name: ours.name().to_string(),
                    table_crc: ours.crc_extra(),
                    registry_crc: registered.crc_extra(),
                });
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_spec() {
        assert_eq!(parse_type_spec("uint16_t"), Some((FieldType::Uint16, 0)));
        assert_eq!(parse_type_spec("char[16]"), Some((FieldType::Char, 16)));
        assert_eq!(parse_type_spec("float[ 4 ]"), Some((FieldType::Float, 4)));
        assert_eq!(
            parse_type_spec("uint8_t_mavlink_version"),
            Some((FieldType::Uint8, 0))
        );
        assert_eq!(parse_type_spec("bool"), None);
        assert_eq!(parse_type_spec("float[0]"), None);
        assert_eq!(parse_type_spec("float[4"), None);
    }

    #[test]
    fn test_common_table() {
        let table = DialectTable::common().unwrap();
        assert_eq!(table.name(), "common");
        assert_eq!(table.len(), 9);

        let expected = [
            (0, 50, 9, 9),
            (1, 124, 31, 43),
            (22, 220, 25, 25),
            (24, 24, 30, 52),
            (30, 39, 28, 28),
            (74, 20, 20, 20),
            (138, 109, 36, 120),
            (253, 83, 51, 54),
            (256, 71, 42, 42),
        ];
        for (id, crc, normal, extended) in expected {
            assert_eq!(table.crc_extra(id).unwrap(), crc, "crc_extra of {}", id);
            assert_eq!(table.size_normal(id).unwrap(), normal, "size_normal of {}", id);
            assert_eq!(table.size_extended(id).unwrap(), extended, "size_extended of {}", id);
        }
        let ids: Vec<u32> = table.messages().map(|d| d.id()).collect();
        assert_eq!(ids, vec![0, 1, 22, 24, 30, 74, 138, 253, 256]);
    }

    #[test]
    fn test_unknown_message() {
        let table = DialectTable::common().unwrap();
        assert!(matches!(
            table.create_by_id(9999),
            Err(Error::UnknownMessage(MessageKey::Id(9999)))
        ));
        assert!(matches!(
            table.create_by_name("NOPE"),
            Err(Error::UnknownMessage(MessageKey::Name(_)))
        ));
        assert!(table.decode(9999, &[0], MavlinkVersion::V2).is_err());

        let msg = table.create_by_name("VFR_HUD").unwrap();
        assert_eq!(msg.id(), 74);
        assert_eq!(msg.get_name(), "VFR_HUD");
        assert!(msg.is_empty());
    }

    #[test]
    fn test_duplicates_rejected() {
        let def = |id, name: &str| {
            MessageDefinition::new(id, name, vec![FieldSpec::new("a", FieldType::Uint8)])
        };
        assert!(matches!(
            DialectTable::new("t", 1, vec![def(1, "A"), def(1, "B")]),
            Err(Error::InvalidDefinition(_))
        ));
        assert!(matches!(
            DialectTable::new("t", 1, vec![def(1, "A"), def(2, "A")]),
            Err(Error::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_from_json_errors() {
        let bad_type = r#"{"name":"x","messages":[{"id":1,"name":"M","fields":[{"name":"a","type":"bool"}]}]}"#;
        assert!(matches!(
            DialectTable::from_json(bad_type),
            Err(Error::UnsupportedType { .. })
        ));

        let bad_enum = r#"{"name":"x","messages":[{"id":1,"name":"M","fields":[{"name":"a","type":"int8_t","enum":"E"}]}]}"#;
        assert!(matches!(
            DialectTable::from_json(bad_enum),
            Err(Error::UnsupportedType { .. })
        ));

        assert!(matches!(DialectTable::from_json("{"), Err(Error::Json(_))));
    }
}
