//! # OSD Position Encoding
//!
//! Packed screen positions as used by the Betaflight configurator's `set osd`
//! values.
//!
//! A position is either the hidden sentinel (234) or a character cell packed as
//! `2048 + row * 32 + column` on a 26 × 15 grid.

use std::fmt;

use crate::error::{OsdError, Result};

/// Encoded value for an element that is not rendered
pub const NOT_VISIBLE_RAW: u16 = 234;

/// Encoded value of the top-left cell
pub const POSITION_BASE: u16 = 2048;

/// Encoded distance between two rows
pub const ROW_STRIDE: u16 = 32;

/// Number of character columns on the OSD grid
pub const OSD_COLUMNS: u8 = 26;

/// Number of character rows on the OSD grid
pub const OSD_ROWS: u8 = 15;

/// Encoded OSD screen position
///
/// Wraps any raw `u16`; validity is checked when the position is decoded, so
/// tables can carry configurator values verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(u16);

impl Position {
    /// Hidden element sentinel
    pub const NOT_VISIBLE: Position = Position(NOT_VISIBLE_RAW);

    /// Wrap a raw configurator value without validation
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw encoded value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// True unless this is the hidden sentinel
    ///
    /// Note that a visible position may still fail to decode.
    pub const fn is_visible(self) -> bool {
        self.0 != NOT_VISIBLE_RAW
    }

    /// Decode into `(row, column)`; see [`decode`]
    pub fn cell(self) -> Result<Option<(u8, u8)>> {
        decode(self)
    }
}

impl From<u16> for Position {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Position> for u16 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pack a grid cell into an OSD position
///
/// # Arguments
///
/// * `row` - Row index (0-14)
/// * `column` - Column index (0-25)
///
/// # Errors
///
/// Returns [`OsdError::OutOfRange`] if the cell is outside the 26 × 15 grid
///
/// # Examples
///
/// ```
/// use osd_layout::osd::position::encode;
///
/// let position = encode(2, 3).unwrap();
/// assert_eq!(position.raw(), 2048 + 2 * 32 + 3);
/// ```
pub fn encode(row: u8, column: u8) -> Result<Position> {
    if row >= OSD_ROWS || column >= OSD_COLUMNS {
        return Err(OsdError::OutOfRange { row, column });
    }

    Ok(Position(
        POSITION_BASE + row as u16 * ROW_STRIDE + column as u16,
    ))
}

/// Unpack an OSD position into `(row, column)`
///
/// # Returns
///
/// * `Ok(None)` - The position is the hidden sentinel
/// * `Ok(Some((row, column)))` - The position is a grid cell
///
/// # Errors
///
/// Returns [`OsdError::InvalidPosition`] if the value is below the packed
/// base, lands in a column past 25, or lands in a row past 14
///
/// # Examples
///
/// ```
/// use osd_layout::osd::position::{decode, Position};
///
/// assert_eq!(decode(Position::NOT_VISIBLE).unwrap(), None);
/// assert_eq!(decode(Position::from_raw(2073)).unwrap(), Some((0, 25)));
/// assert!(decode(Position::from_raw(2074)).is_err());
/// ```
pub fn decode(position: Position) -> Result<Option<(u8, u8)>> {
    let raw = position.raw();

    if raw == NOT_VISIBLE_RAW {
        return Ok(None);
    }

    if raw < POSITION_BASE {
        return Err(OsdError::InvalidPosition(raw));
    }

    let offset = raw - POSITION_BASE;
    let row = offset / ROW_STRIDE;
    let column = offset % ROW_STRIDE;

    // Columns 26-31 are padding in the packed encoding
    if row >= OSD_ROWS as u16 || column >= OSD_COLUMNS as u16 {
        return Err(OsdError::InvalidPosition(raw));
    }

    Ok(Some((row as u8, column as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_constants() {
        assert_eq!(NOT_VISIBLE_RAW, 234);
        assert_eq!(POSITION_BASE, 2048);
        assert_eq!(ROW_STRIDE, 32);
        assert_eq!(OSD_COLUMNS, 26);
        assert_eq!(OSD_ROWS, 15);
    }

    #[test]
    fn test_decode_not_visible() {
        assert_eq!(decode(Position::from_raw(234)).unwrap(), None);
        assert!(!Position::NOT_VISIBLE.is_visible());
    }

    #[test]
    fn test_encode_corners() {
        assert_eq!(encode(0, 0).unwrap().raw(), 2048);
        assert_eq!(encode(0, 25).unwrap().raw(), 2073);
        assert_eq!(encode(14, 0).unwrap().raw(), 2496);
        assert_eq!(encode(14, 25).unwrap().raw(), 2521);
    }

    #[test]
    fn test_encode_row_out_of_range() {
        let result = encode(15, 0);
        assert!(matches!(result, Err(OsdError::OutOfRange { row: 15, column: 0 })));
    }

    #[test]
    fn test_encode_column_out_of_range() {
        let result = encode(0, 26);
        assert!(matches!(result, Err(OsdError::OutOfRange { row: 0, column: 26 })));
    }

    #[test]
    fn test_round_trip_every_cell() {
        for row in 0..OSD_ROWS {
            for column in 0..OSD_COLUMNS {
                let position = encode(row, column).unwrap();
                assert_eq!(
                    decode(position).unwrap(),
                    Some((row, column)),
                    "round trip failed for row {} column {}",
                    row,
                    column
                );
            }
        }
    }

    #[test]
    fn test_encode_inverts_decode() {
        let mut decoded = 0;
        for raw in 2048..=2528u16 {
            let position = Position::from_raw(raw);
            if let Ok(Some((row, column))) = decode(position) {
                assert_eq!(encode(row, column).unwrap(), position);
                decoded += 1;
            }
        }
        assert_eq!(decoded, OSD_ROWS as usize * OSD_COLUMNS as usize);
    }

    #[test]
    fn test_every_grid_value_decodes() {
        for raw in 2048..=2521u16 {
            let column = (raw - POSITION_BASE) % ROW_STRIDE;
            let result = decode(Position::from_raw(raw));
            if column < OSD_COLUMNS as u16 {
                assert!(
                    matches!(result, Ok(Some(_))),
                    "{} should decode to a cell",
                    raw
                );
            } else {
                assert!(result.is_err(), "{} should be rejected", raw);
            }
        }
    }

    #[test]
    fn test_decode_below_base() {
        assert!(matches!(
            decode(Position::from_raw(2047)),
            Err(OsdError::InvalidPosition(2047))
        ));
        assert!(decode(Position::from_raw(0)).is_err());
        assert!(decode(Position::from_raw(235)).is_err());
    }

    #[test]
    fn test_decode_padding_column() {
        // 2074 is row 0, column 26
        assert!(decode(Position::from_raw(2074)).is_err());
        // 2111 is row 1, column 31
        assert!(decode(Position::from_raw(2111)).is_err());
    }

    #[test]
    fn test_decode_row_past_grid() {
        // Row 15 does not exist on the 15-line grid
        assert!(decode(Position::from_raw(2528)).is_err());
        assert!(decode(Position::from_raw(2538)).is_err());
        assert!(decode(Position::from_raw(u16::MAX)).is_err());
    }

    #[test]
    fn test_position_conversions() {
        let position: Position = 2144u16.into();
        assert_eq!(position.raw(), 2144);
        assert_eq!(u16::from(position), 2144);
        assert_eq!(position.to_string(), "2144");
        assert_eq!(position.cell().unwrap(), Some((3, 0)));
    }
}
