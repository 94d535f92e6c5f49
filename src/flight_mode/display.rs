//! # Flight Mode Text
//!
//! Turns a DJI mode bitmask into the text drawn in the OSD flight mode field.

use super::mask::decode_dji_mask;
use crate::config::{DisplayFormat, FlagNames};

/// Build the flight mode field for a DJI mode bitmask
///
/// Names of the set flags are joined in bit order with the configured
/// separator. Names are only ever dropped whole: once the next name would
/// overflow `max_chars`, it and every later name are left out. A first name
/// longer than the whole budget is cut to fit. A mask with no defined flag set
/// yields `empty_text`.
///
/// # Examples
///
/// ```
/// use osd_layout::config::{DisplayFormat, FlagNames};
/// use osd_layout::flight_mode::display_string;
///
/// let text = display_string(0b0000_0011, &FlagNames::default(), &DisplayFormat::default());
/// assert_eq!(text, "ACRO STAB");
/// ```
pub fn display_string(mask: u8, names: &FlagNames, format: &DisplayFormat) -> String {
    let flags = decode_dji_mask(mask);

    if flags.is_empty() {
        return truncate_chars(format.empty_text.clone(), format.max_chars);
    }

    let mut text = String::new();
    let mut used = 0;

    for name in flags.flags().map(|flag| names.name(flag)) {
        if text.is_empty() {
            text = truncate_chars(name.to_string(), format.max_chars);
            used = text.chars().count();
            continue;
        }

        let needed = format.separator.chars().count() + name.chars().count();
        if used + needed > format.max_chars {
            break;
        }

        text.push_str(&format.separator);
        text.push_str(name);
        used += needed;
    }

    text
}

/// Cut a string to at most `max` characters
fn truncate_chars(text: String, max: usize) -> String {
    let cut = text.char_indices().nth(max).map(|(end, _)| end);
    match cut {
        Some(end) => text[..end].to_string(),
        None => text,
    }
}
