//! # Flight Mode Module
//!
//! Flight mode names and DJI mode flags for the OSD flight mode field.
//!
//! This module handles:
//! - The firmware flight mode name table (16 entries)
//! - Decoding the DJI mode bitmask into flags
//! - Formatting set flags into display text

pub mod display;
pub mod mask;
pub mod names;

pub use display::display_string;
pub use mask::{decode_dji_mask, reserved_bits, ModeFlag, ModeFlags};
pub use names::{name_for_index, VectorFlightMode, FLIGHT_MODE_NAMES};
