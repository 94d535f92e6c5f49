//! # OSD Position Table
//!
//! Maps every [`ElementId`] to a [`Position`]. Elements without an explicit
//! entry are hidden, so new elements only need an override once they are
//! actually drawn.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::element::ElementId;
use super::position::{decode, Position};
use crate::config::OsdConfig;
use crate::error::Result;

/// Built-in layout, as exported from the Betaflight configurator
///
/// Pitch and roll sit on a 16th line, mAh drawn and vario on a 27th column;
/// neither exists on the 26 × 15 grid. They are kept verbatim and skipped
/// when placed.
const BUILTIN_POSITIONS: &[(ElementId, u16)] = &[
    (ElementId::AvgCellVoltage, 234),
    (ElementId::PitchAngle, 2538),
    (ElementId::RollAngle, 2542),
    (ElementId::Crosshairs, 234),
    (ElementId::RssiValue, 2048),
    (ElementId::HomeDir, 2062),
    (ElementId::HomeDist, 2063),
    (ElementId::MainBattVoltage, 2073),
    (ElementId::GpsSpeed, 2273),
    (ElementId::GpsLat, 2419),
    (ElementId::GpsLon, 2451),
    (ElementId::DisplayName, 234),
    (ElementId::Flymode, 234),
    (ElementId::CraftName, 2144),
    (ElementId::CurrentDraw, 2103),
    (ElementId::MahDrawn, 2138),
    (ElementId::GpsSats, 2080),
    (ElementId::Altitude, 2296),
    (ElementId::NumericalVario, 2330),
];

/// A visible element with its decoded grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub element: ElementId,
    pub row: u8,
    pub column: u8,
}

/// One row of a layout dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub element: &'static str,
    pub position: u16,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Element -> position mapping with a hidden default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    overrides: BTreeMap<ElementId, Position>,
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PositionTable {
    /// Table with every element hidden
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Table populated with the built-in layout
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::hidden();
        for &(element, raw) in BUILTIN_POSITIONS {
            table.set_position(element, Position::from_raw(raw));
        }
        table
    }

    /// Build a table from the `[osd]` config section
    ///
    /// # Errors
    ///
    /// Returns error if a key does not name an element
    ///
    /// # Examples
    ///
    /// ```
    /// use osd_layout::config::OsdConfig;
    /// use osd_layout::osd::{ElementId, PositionTable};
    ///
    /// let mut config = OsdConfig::default();
    /// config.positions.insert("gps_sats".to_string(), 2081);
    ///
    /// let table = PositionTable::from_config(&config)?;
    /// assert_eq!(table.position_of(ElementId::GpsSats).raw(), 2081);
    /// # Ok::<(), osd_layout::error::OsdError>(())
    /// ```
    pub fn from_config(config: &OsdConfig) -> Result<Self> {
        let mut table = if config.use_builtin {
            Self::builtin()
        } else {
            Self::hidden()
        };

        for (key, &raw) in &config.positions {
            let element: ElementId = key.parse()?;
            debug!("OSD override: {} = {}", element, raw);
            table.set_position(element, Position::from_raw(raw));
        }

        Ok(table)
    }

    /// Position of an element; hidden unless overridden
    pub fn position_of(&self, element: ElementId) -> Position {
        self.overrides
            .get(&element)
            .copied()
            .unwrap_or(Position::NOT_VISIBLE)
    }

    /// Move an element at runtime
    ///
    /// Setting [`Position::NOT_VISIBLE`] drops the override.
    pub fn set_position(&mut self, element: ElementId, position: Position) {
        if position.is_visible() {
            self.overrides.insert(element, position);
        } else {
            self.overrides.remove(&element);
        }
    }

    /// Elements with a non-hidden position, in element order
    pub fn overrides(&self) -> impl Iterator<Item = (ElementId, Position)> + '_ {
        self.overrides.iter().map(|(&element, &position)| (element, position))
    }

    /// Decoded cells for every element the renderer should draw
    ///
    /// Elements whose position does not decode are skipped with a warning.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.overrides().filter_map(|(element, position)| match decode(position) {
            Ok(Some((row, column))) => Some(Placement {
                element,
                row,
                column,
            }),
            Ok(None) => None,
            Err(e) => {
                warn!("Skipping OSD element {}: {}", element, e);
                None
            }
        })
    }

    /// Full dump of every element, hidden ones included
    pub fn entries(&self) -> Vec<LayoutEntry> {
        ElementId::ALL
            .iter()
            .map(|&element| {
                let position = self.position_of(element);
                let (row, column, error) = match decode(position) {
                    Ok(Some((row, column))) => (Some(row), Some(column), None),
                    Ok(None) => (None, None, None),
                    Err(e) => (None, None, Some(e.to_string())),
                };

                LayoutEntry {
                    element: element.key(),
                    position: position.raw(),
                    visible: position.is_visible(),
                    row,
                    column,
                    error,
                }
            })
            .collect()
    }
}
