// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! Static types for a subset of the MAVLink `common` dialect.
//!
//! Matches the embedded definition table loaded by
//! [`DialectTable::common`](crate::dynamic::DialectTable::common).

use crate::error::Result;
use crate::registry::MessageRegistry;
use crate::{mav_enum, MavMessage};

mav_enum! {
    /// MAVLINK component type reported in HEARTBEAT.
    pub struct MavType(u8) {
        MAV_TYPE_GENERIC = 0,
        MAV_TYPE_FIXED_WING = 1,
        MAV_TYPE_QUADROTOR = 2,
        MAV_TYPE_COAXIAL = 3,
        MAV_TYPE_HELICOPTER = 4,
        MAV_TYPE_ANTENNA_TRACKER = 5,
        MAV_TYPE_GCS = 6,
        MAV_TYPE_AIRSHIP = 7,
        MAV_TYPE_FREE_BALLOON = 8,
        MAV_TYPE_ROCKET = 9,
        MAV_TYPE_GROUND_ROVER = 10,
        MAV_TYPE_SURFACE_BOAT = 11,
        MAV_TYPE_SUBMARINE = 12,
        MAV_TYPE_HEXAROTOR = 13,
        MAV_TYPE_OCTOROTOR = 14,
        MAV_TYPE_TRICOPTER = 15,
        MAV_TYPE_FLAPPING_WING = 16,
        MAV_TYPE_KITE = 17,
        MAV_TYPE_ONBOARD_CONTROLLER = 18,
    }
}

mav_enum! {
    /// Micro air vehicle / autopilot classes.
    pub struct MavAutopilot(u8) {
        MAV_AUTOPILOT_GENERIC = 0,
        MAV_AUTOPILOT_RESERVED = 1,
        MAV_AUTOPILOT_SLUGS = 2,
        MAV_AUTOPILOT_ARDUPILOTMEGA = 3,
        MAV_AUTOPILOT_OPENPILOT = 4,
        MAV_AUTOPILOT_GENERIC_WAYPOINTS_ONLY = 5,
        MAV_AUTOPILOT_GENERIC_WAYPOINTS_AND_SIMPLE_NAVIGATION_ONLY = 6,
        MAV_AUTOPILOT_GENERIC_MISSION_FULL = 7,
        MAV_AUTOPILOT_INVALID = 8,
        MAV_AUTOPILOT_PPZ = 9,
        MAV_AUTOPILOT_UDB = 10,
        MAV_AUTOPILOT_FP = 11,
        MAV_AUTOPILOT_PX4 = 12,
    }
}

mav_enum! {
    /// System mode bitmap.
    pub struct MavModeFlag(u8) {
        MAV_MODE_FLAG_CUSTOM_MODE_ENABLED = 1,
        MAV_MODE_FLAG_TEST_ENABLED = 2,
        MAV_MODE_FLAG_AUTO_ENABLED = 4,
        MAV_MODE_FLAG_GUIDED_ENABLED = 8,
        MAV_MODE_FLAG_STABILIZE_ENABLED = 16,
        MAV_MODE_FLAG_HIL_ENABLED = 32,
        MAV_MODE_FLAG_MANUAL_INPUT_ENABLED = 64,
        MAV_MODE_FLAG_SAFETY_ARMED = 128,
    }
}

mav_enum! {
    pub struct MavState(u8) {
        MAV_STATE_UNINIT = 0,
        MAV_STATE_BOOT = 1,
        MAV_STATE_CALIBRATING = 2,
        MAV_STATE_STANDBY = 3,
        MAV_STATE_ACTIVE = 4,
        MAV_STATE_CRITICAL = 5,
        MAV_STATE_EMERGENCY = 6,
        MAV_STATE_POWEROFF = 7,
        MAV_STATE_FLIGHT_TERMINATION = 8,
    }
}

mav_enum! {
    /// Onboard sensor and subsystem bitmap.
    pub struct MavSysStatusSensor(u32) {
        MAV_SYS_STATUS_SENSOR_3D_GYRO = 1,
        MAV_SYS_STATUS_SENSOR_3D_ACCEL = 2,
        MAV_SYS_STATUS_SENSOR_3D_MAG = 4,
        MAV_SYS_STATUS_SENSOR_ABSOLUTE_PRESSURE = 8,
        MAV_SYS_STATUS_SENSOR_DIFFERENTIAL_PRESSURE = 16,
        MAV_SYS_STATUS_SENSOR_GPS = 32,
        MAV_SYS_STATUS_SENSOR_OPTICAL_FLOW = 64,
        MAV_SYS_STATUS_SENSOR_VISION_POSITION = 128,
        MAV_SYS_STATUS_SENSOR_LASER_POSITION = 256,
        MAV_SYS_STATUS_SENSOR_EXTERNAL_GROUND_TRUTH = 512,
        MAV_SYS_STATUS_SENSOR_ANGULAR_RATE_CONTROL = 1024,
        MAV_SYS_STATUS_SENSOR_ATTITUDE_STABILIZATION = 2048,
        MAV_SYS_STATUS_SENSOR_YAW_POSITION = 4096,
        MAV_SYS_STATUS_SENSOR_Z_ALTITUDE_CONTROL = 8192,
        MAV_SYS_STATUS_SENSOR_XY_POSITION_CONTROL = 16384,
        MAV_SYS_STATUS_SENSOR_MOTOR_OUTPUTS = 32768,
        MAV_SYS_STATUS_SENSOR_RC_RECEIVER = 65536,
        MAV_SYS_STATUS_SENSOR_GEOFENCE = 1048576,
        MAV_SYS_STATUS_SENSOR_AHRS = 2097152,
        MAV_SYS_STATUS_SENSOR_TERRAIN = 4194304,
        MAV_SYS_STATUS_SENSOR_LOGGING = 16777216,
        MAV_SYS_STATUS_SENSOR_BATTERY = 33554432,
        MAV_SYS_STATUS_SENSOR_PROXIMITY = 67108864,
        MAV_SYS_STATUS_SENSOR_PREARM_CHECK = 268435456,
        MAV_SYS_STATUS_EXTENSION_USED = 2147483648,
    }
}

mav_enum! {
    pub struct MavSysStatusSensorExtended(u32) {
        MAV_SYS_STATUS_RECOVERY_SYSTEM = 1,
    }
}

mav_enum! {
    /// Type of a PARAM_VALUE payload.
    pub struct MavParamType(u8) {
        MAV_PARAM_TYPE_UINT8 = 1,
        MAV_PARAM_TYPE_INT8 = 2,
        MAV_PARAM_TYPE_UINT16 = 3,
        MAV_PARAM_TYPE_INT16 = 4,
        MAV_PARAM_TYPE_UINT32 = 5,
        MAV_PARAM_TYPE_INT32 = 6,
        MAV_PARAM_TYPE_UINT64 = 7,
        MAV_PARAM_TYPE_INT64 = 8,
        MAV_PARAM_TYPE_REAL32 = 9,
        MAV_PARAM_TYPE_REAL64 = 10,
    }
}

mav_enum! {
    pub struct GpsFixType(u8) {
        GPS_FIX_TYPE_NO_GPS = 0,
        GPS_FIX_TYPE_NO_FIX = 1,
        GPS_FIX_TYPE_2D_FIX = 2,
        GPS_FIX_TYPE_3D_FIX = 3,
        GPS_FIX_TYPE_DGPS = 4,
        GPS_FIX_TYPE_RTK_FLOAT = 5,
        GPS_FIX_TYPE_RTK_FIXED = 6,
        GPS_FIX_TYPE_STATIC = 7,
        GPS_FIX_TYPE_PPP = 8,
    }
}

mav_enum! {
    /// Syslog-style severity of a STATUSTEXT.
    pub struct MavSeverity(u8) {
        MAV_SEVERITY_EMERGENCY = 0,
        MAV_SEVERITY_ALERT = 1,
        MAV_SEVERITY_CRITICAL = 2,
        MAV_SEVERITY_ERROR = 3,
        MAV_SEVERITY_WARNING = 4,
        MAV_SEVERITY_NOTICE = 5,
        MAV_SEVERITY_INFO = 6,
        MAV_SEVERITY_DEBUG = 7,
    }
}

/// Presence and state of a system on the network.
#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 0, name = "HEARTBEAT")]
pub struct Heartbeat {
    #[mavlink(name = "type")]
    pub mav_type: MavType,
    pub autopilot: MavAutopilot,
    pub base_mode: MavModeFlag,
    pub custom_mode: u32,
    pub system_status: MavState,
    pub mavlink_version: u8,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 1, name = "SYS_STATUS")]
pub struct SysStatus {
    pub onboard_control_sensors_present: MavSysStatusSensor,
    pub onboard_control_sensors_enabled: MavSysStatusSensor,
    pub onboard_control_sensors_health: MavSysStatusSensor,
    pub load: u16,
    pub voltage_battery: u16,
    pub current_battery: i16,
    pub battery_remaining: i8,
    pub drop_rate_comm: u16,
    pub errors_comm: u16,
    pub errors_count1: u16,
    pub errors_count2: u16,
    pub errors_count3: u16,
    pub errors_count4: u16,
    #[mavlink(extension)]
    pub onboard_control_sensors_present_extended: MavSysStatusSensorExtended,
    #[mavlink(extension)]
    pub onboard_control_sensors_enabled_extended: MavSysStatusSensorExtended,
    #[mavlink(extension)]
    pub onboard_control_sensors_health_extended: MavSysStatusSensorExtended,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 22, name = "PARAM_VALUE")]
pub struct ParamValue {
    #[mavlink(len = 16)]
    pub param_id: String,
    pub param_value: f32,
    pub param_type: MavParamType,
    pub param_count: u16,
    pub param_index: u16,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 24, name = "GPS_RAW_INT")]
pub struct GpsRawInt {
    pub time_usec: u64,
    pub fix_type: GpsFixType,
    pub lat: i32,
    pub lon: i32,
    pub alt: i32,
    pub eph: u16,
    pub epv: u16,
    pub vel: u16,
    pub cog: u16,
    pub satellites_visible: u8,
    #[mavlink(extension)]
    pub alt_ellipsoid: i32,
    #[mavlink(extension)]
    pub h_acc: u32,
    #[mavlink(extension)]
    pub v_acc: u32,
    #[mavlink(extension)]
    pub vel_acc: u32,
    #[mavlink(extension)]
    pub hdg_acc: u32,
    #[mavlink(extension)]
    pub yaw: u16,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 30, name = "ATTITUDE")]
pub struct Attitude {
    pub time_boot_ms: u32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub rollspeed: f32,
    pub pitchspeed: f32,
    pub yawspeed: f32,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 74, name = "VFR_HUD")]
pub struct VfrHud {
    pub airspeed: f32,
    pub groundspeed: f32,
    pub heading: i16,
    pub throttle: u16,
    pub alt: f32,
    pub climb: f32,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 138, name = "ATT_POS_MOCAP")]
pub struct AttPosMocap {
    pub time_usec: u64,
    pub q: [f32; 4],
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[mavlink(extension)]
    pub covariance: [f32; 21],
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 253, name = "STATUSTEXT")]
pub struct StatusText {
    pub severity: MavSeverity,
    #[mavlink(len = 50)]
    pub text: String,
    #[mavlink(extension)]
    pub id: u16,
    #[mavlink(extension)]
    pub chunk_seq: u8,
}

#[derive(Debug, Clone, PartialEq, MavMessage)]
#[mavlink(id = 256, name = "SETUP_SIGNING")]
pub struct SetupSigning {
    pub target_system: u8,
    pub target_component: u8,
    pub secret_key: [u8; 32],
    pub initial_timestamp: u64,
}

/// Registry with every message of this module registered.
pub fn registry() -> Result<MessageRegistry> {
    let registry = MessageRegistry::new();
    registry.register::<Heartbeat>()?;
    registry.register::<SysStatus>()?;
    registry.register::<ParamValue>()?;
    registry.register::<GpsRawInt>()?;
    registry.register::<Attitude>()?;
    registry.register::<VfrHud>()?;
    registry.register::<AttPosMocap>()?;
    registry.register::<StatusText>()?;
    registry.register::<SetupSigning>()?;
    Ok(registry)
}
