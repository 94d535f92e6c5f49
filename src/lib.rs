//! # OSD Layout Library
//!
//! OSD element positions and flight mode text for an MSP-to-DJI telemetry bridge.
//!
//! This library provides the lookup data the OSD renderer consumes: where each
//! element sits on the character grid, and what the flight mode field should
//! say for a given DJI mode bitmask.

pub mod config;
pub mod error;
pub mod flight_mode;
pub mod osd;
