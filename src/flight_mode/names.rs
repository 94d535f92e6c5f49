//! # Flight Mode Names
//!
//! The firmware's own flight-mode enumeration and its display names.

use std::fmt;

use crate::error::{OsdError, Result};

/// Number of entries in the name table
pub const FLIGHT_MODE_COUNT: usize = 16;

/// Longest name the table may hold
pub const FLIGHT_MODE_NAME_MAX_LEN: usize = 15;

/// Display names indexed by flight mode number
pub const FLIGHT_MODE_NAMES: [&str; FLIGHT_MODE_COUNT] = [
    "2D",
    "WAYPOINT",
    "2D_ALT_HOLD",
    "2D_HEADING_HOLD",
    "LOITER",
    "3D",
    "3D_HEADING_HOLD",
    "RTH",
    "LAND",
    "CARTESIAN",
    "CART_LOITER",
    "POLAR",
    "POLAR_LOITER",
    "CENTER_STICK",
    "MANUAL",
    "MAX",
];

/// Look up the display name of a flight mode index
///
/// # Errors
///
/// Returns [`OsdError::IndexOutOfRange`] for indices past 15
///
/// # Examples
///
/// ```
/// use osd_layout::flight_mode::name_for_index;
///
/// assert_eq!(name_for_index(7).unwrap(), "RTH");
/// assert!(name_for_index(16).is_err());
/// ```
pub fn name_for_index(index: usize) -> Result<&'static str> {
    FLIGHT_MODE_NAMES
        .get(index)
        .copied()
        .ok_or(OsdError::IndexOutOfRange(index))
}

/// Flight modes in name table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VectorFlightMode {
    TwoD = 0,
    Waypoint = 1,
    TwoDAltHold = 2,
    TwoDHeadingHold = 3,
    Loiter = 4,
    ThreeD = 5,
    ThreeDHeadingHold = 6,
    Rth = 7,
    Land = 8,
    Cartesian = 9,
    CartLoiter = 10,
    Polar = 11,
    PolarLoiter = 12,
    CenterStick = 13,
    Manual = 14,
    Max = 15,
}

impl VectorFlightMode {
    /// All modes, index order
    pub const ALL: [VectorFlightMode; FLIGHT_MODE_COUNT] = [
        VectorFlightMode::TwoD,
        VectorFlightMode::Waypoint,
        VectorFlightMode::TwoDAltHold,
        VectorFlightMode::TwoDHeadingHold,
        VectorFlightMode::Loiter,
        VectorFlightMode::ThreeD,
        VectorFlightMode::ThreeDHeadingHold,
        VectorFlightMode::Rth,
        VectorFlightMode::Land,
        VectorFlightMode::Cartesian,
        VectorFlightMode::CartLoiter,
        VectorFlightMode::Polar,
        VectorFlightMode::PolarLoiter,
        VectorFlightMode::CenterStick,
        VectorFlightMode::Manual,
        VectorFlightMode::Max,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        FLIGHT_MODE_NAMES[self as usize]
    }
}

impl TryFrom<u8> for VectorFlightMode {
    type Error = OsdError;

    fn try_from(value: u8) -> Result<Self> {
        VectorFlightMode::ALL
            .get(value as usize)
            .copied()
            .ok_or(OsdError::IndexOutOfRange(value as usize))
    }
}

impl fmt::Display for VectorFlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
