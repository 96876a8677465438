// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

//! MAVLink enumerations.
//!
//! MAVLink enums are open: a peer running a newer dialect may send values
//! this build has no name for, and bitmask enums combine entries. They are
//! therefore declared as transparent integer newtypes with named constants
//! rather than Rust enums, so every received value round-trips unchanged.

/// Declare a MAVLink enum backed by an integer type.
///
/// ```
/// mavcodec::mav_enum! {
///     /// Micro air vehicle / autopilot classes.
///     pub struct MavAutopilot(u8) {
///         MAV_AUTOPILOT_GENERIC = 0,
///         MAV_AUTOPILOT_ARDUPILOTMEGA = 3,
///     }
/// }
///
/// assert_eq!(MavAutopilot::MAV_AUTOPILOT_ARDUPILOTMEGA.to_string(), "MAV_AUTOPILOT_ARDUPILOTMEGA");
/// assert_eq!(MavAutopilot(42).to_string(), "42");
/// assert_eq!(MavAutopilot::from_entry_name("MAV_AUTOPILOT_GENERIC"), Some(MavAutopilot(0)));
/// ```
#[macro_export]
macro_rules! mav_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$entry_meta:meta])*
                $entry:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        $vis struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$entry_meta])*
                pub const $entry: Self = Self($value);
            )*

            /// Every named entry, in declaration order.
            pub const ENTRIES: &'static [(&'static str, $name)] = &[
                $((stringify!($entry), Self($value))),*
            ];

            /// MAVLink entry name, `None` for unnamed values.
            pub fn entry_name(self) -> Option<&'static str> {
                Self::ENTRIES
                    .iter()
                    .find(|(_, value)| *value == self)
                    .map(|(name, _)| *name)
            }

            pub fn from_entry_name(name: &str) -> Option<Self> {
                Self::ENTRIES
                    .iter()
                    .find(|(entry, _)| *entry == name)
                    .map(|(_, value)| *value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.entry_name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}", self.0),
                }
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::WireValue for $name {
            const FIELD_TYPE: $crate::FieldType = <$repr as $crate::ser::Scalar>::FIELD_TYPE;
            const IS_ENUM: bool = true;

            fn zero() -> Self {
                Self(<$repr as ::std::default::Default>::default())
            }

            fn encode(
                &self,
                cursor: &mut $crate::ser::CursorMut<'_>,
                _field: &$crate::FieldDescriptor,
            ) {
                cursor.write(self.0);
            }

            fn decode(
                cursor: &mut $crate::ser::Cursor<'_>,
                _field: &$crate::FieldDescriptor,
            ) -> Self {
                Self(cursor.read())
            }
        }
    };
}
