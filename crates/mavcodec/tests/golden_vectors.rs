// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors
//
// Golden payloads: byte-exact encodings of known values, checked through
// both the static and the dynamic codec.

#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

use mavcodec::dialects::common::{self, StatusText, VfrHud, MavSeverity};
use mavcodec::dynamic::{DialectTable, DynamicValue};
use mavcodec::{Error, MavlinkVersion};

const VFR_HUD_V2: [u8; 19] = [
    0x00, 0x40, 0x9A, 0x44, 0x00, 0x40, 0x9A, 0x44, 0x00, 0x40, 0x9A, 0x44, 0x00, 0x40, 0x9A,
    0x44, 0x0C, 0x00, 0x7B,
];

fn vfr_hud() -> VfrHud {
    VfrHud {
        airspeed: 1234.0,
        groundspeed: 1234.0,
        heading: 12,
        throttle: 123,
        alt: 1234.0,
        climb: 1234.0,
    }
}

#[test]
fn vfr_hud_static_v2() {
    let registry = common::registry().unwrap();
    let bytes = registry.encode(&vfr_hud(), MavlinkVersion::V2).unwrap();
    assert_eq!(bytes, VFR_HUD_V2);

    let back: VfrHud = registry.decode(&bytes, MavlinkVersion::V2).unwrap();
    assert_eq!(back, vfr_hud());
}

#[test]
fn vfr_hud_static_v1_keeps_trailing_zero() {
    let registry = common::registry().unwrap();
    let bytes = registry.encode(&vfr_hud(), MavlinkVersion::V1).unwrap();
    assert_eq!(bytes.len(), 20);
    assert_eq!(&bytes[..19], &VFR_HUD_V2);
    assert_eq!(bytes[19], 0);
}

#[test]
fn vfr_hud_dynamic_v2() {
    let table = DialectTable::common().unwrap();
    let mut msg = table.create_by_id(74).unwrap();
    msg.set_field("airspeed", 1234.0f32).unwrap();
    msg.set_field("groundspeed", 1234.0f32).unwrap();
    msg.set_field("heading", 12i16).unwrap();
    msg.set_field("throttle", 123u16).unwrap();
    msg.set_field("alt", 1234.0f32).unwrap();
    msg.set_field("climb", 1234.0f32).unwrap();

    let bytes = table.encode(&msg, MavlinkVersion::V2).unwrap();
    assert_eq!(bytes, VFR_HUD_V2);

    let back = table.decode(74, &bytes, MavlinkVersion::V2).unwrap();
    assert_eq!(back, msg);
    assert_eq!(back.get("throttle"), Some(&DynamicValue::U16(123)));
}

#[test]
fn v1_size_mismatch() {
    let registry = common::registry().unwrap();
    let err = registry
        .decode::<VfrHud>(&VFR_HUD_V2, MavlinkVersion::V1)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SizeMismatch {
            expected: 20,
            got: 19,
            ..
        }
    ));

    let table = DialectTable::common().unwrap();
    assert!(matches!(
        table.decode(74, &VFR_HUD_V2, MavlinkVersion::V1),
        Err(Error::SizeMismatch { .. })
    ));
}

#[test]
fn v2_extension_truncation() {
    let registry = common::registry().unwrap();
    let text = StatusText {
        severity: MavSeverity::MAV_SEVERITY_WARNING,
        text: "Low battery".to_string(),
        id: 0,
        chunk_seq: 0,
    };

    let bytes = registry.encode(&text, MavlinkVersion::V2).unwrap();
    // severity + "Low battery", trailing NUL padding and zero extensions stripped
    assert_eq!(bytes.len(), 12);
    assert_eq!(bytes[0], 4);
    assert_eq!(&bytes[1..], b"Low battery");

    let back: StatusText = registry.decode(&bytes, MavlinkVersion::V2).unwrap();
    assert_eq!(back, text);

    let v1 = registry.encode(&text, MavlinkVersion::V1).unwrap();
    assert_eq!(v1.len(), 51);
}

#[test]
fn all_zero_message_keeps_one_byte() {
    let table = DialectTable::common().unwrap();
    for desc in table.messages() {
        let msg = table.create_by_id(desc.id()).unwrap();
        let bytes = table.encode(&msg, MavlinkVersion::V2).unwrap();
        assert_eq!(bytes, vec![0], "{}", desc.name());

        let back = table.decode(desc.id(), &bytes, MavlinkVersion::V2).unwrap();
        for field in desc.fields() {
            assert_eq!(
                back.get(&field.name),
                Some(&DynamicValue::zero_for(field)),
                "{}.{}",
                desc.name(),
                field.name
            );
        }
    }
}

#[test]
fn v2_ignores_excess_bytes() {
    let registry = common::registry().unwrap();
    let mut long = VFR_HUD_V2.to_vec();
    long.extend_from_slice(&[0xAA; 8]);
    let back: VfrHud = registry.decode(&long, MavlinkVersion::V2).unwrap();
    assert_eq!(back.throttle, 0xAA7B);
}
