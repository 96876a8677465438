// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Codec Benchmark
//!
//! Encode/decode cost of the static and dynamic paths for a small scalar
//! message (VFR_HUD) and an array-heavy one with extensions (ATT_POS_MOCAP),
//! plus JSON marshal of the dynamic form.

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mavcodec::dialects::common::{self, AttPosMocap, VfrHud};
use mavcodec::dynamic::DialectTable;
use mavcodec::MavlinkVersion;

fn sample_hud() -> VfrHud {
    VfrHud {
        airspeed: 18.5,
        groundspeed: 17.25,
        heading: 271,
        throttle: 63,
        alt: 120.5,
        climb: -0.75,
    }
}

fn sample_mocap() -> AttPosMocap {
    AttPosMocap {
        time_usec: 1_700_000_000_000_000,
        q: [0.7071, 0.0, 0.7071, 0.0],
        x: 1.0,
        y: 2.0,
        z: -3.0,
        covariance: [0.01; 21],
    }
}

fn bench_static(c: &mut Criterion) {
    let registry = common::registry().expect("registry");
    let hud = sample_hud();
    let mocap = sample_mocap();

    c.bench_function("static_encode_vfr_hud", |b| {
        b.iter(|| registry.encode(black_box(&hud), MavlinkVersion::V2))
    });

    let hud_bytes = registry
        .encode(&hud, MavlinkVersion::V2)
        .expect("encode");
    c.bench_function("static_decode_vfr_hud", |b| {
        b.iter(|| registry.decode::<VfrHud>(black_box(&hud_bytes), MavlinkVersion::V2))
    });

    c.bench_function("static_encode_att_pos_mocap", |b| {
        b.iter(|| registry.encode(black_box(&mocap), MavlinkVersion::V2))
    });
}

fn bench_dynamic(c: &mut Criterion) {
    let registry = common::registry().expect("registry");
    let table = DialectTable::common().expect("table");

    let hud_bytes = registry
        .encode(&sample_hud(), MavlinkVersion::V2)
        .expect("encode");
    let mocap_bytes = registry
        .encode(&sample_mocap(), MavlinkVersion::V2)
        .expect("encode");

    c.bench_function("dynamic_decode_vfr_hud", |b| {
        b.iter(|| table.decode(74, black_box(&hud_bytes), MavlinkVersion::V2))
    });

    let hud = table
        .decode(74, &hud_bytes, MavlinkVersion::V2)
        .expect("decode");
    c.bench_function("dynamic_encode_vfr_hud", |b| {
        b.iter(|| black_box(&hud).encode(MavlinkVersion::V2))
    });

    c.bench_function("dynamic_decode_att_pos_mocap", |b| {
        b.iter(|| table.decode(138, black_box(&mocap_bytes), MavlinkVersion::V2))
    });

    let mocap = table
        .decode(138, &mocap_bytes, MavlinkVersion::V2)
        .expect("decode");
    c.bench_function("dynamic_marshal_json_att_pos_mocap", |b| {
        b.iter(|| black_box(&mocap).marshal_json())
    });
}

criterion_group!(benches, bench_static, bench_dynamic);
criterion_main!(benches);
