//! # OSD Layout Module
//!
//! Screen positions for OSD elements.
//!
//! This module handles:
//! - Packing and unpacking configurator position values (26 × 15 grid)
//! - The element identifier list
//! - The element -> position table with a hidden default

pub mod element;
pub mod position;
pub mod table;

pub use element::ElementId;
pub use position::{decode, encode, Position};
pub use table::{LayoutEntry, Placement, PositionTable};
