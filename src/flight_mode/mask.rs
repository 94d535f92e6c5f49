//! # DJI Mode Bitmask
//!
//! Mode flags reported to DJI goggles, one bit per flag:
//!
//! | Bit | Flag |
//! |-----|------|
//! | 0 | ARM / ACRO |
//! | 1 | STAB |
//! | 2 | HOR |
//! | 3 | HEAD |
//! | 4 | FS (failsafe) |
//! | 5 | RESC (GPS rescue) |
//! | 6-7 | reserved |
//!
//! Bits 6 and 7 are labelled "acro" in older firmware notes, which clashes
//! with bit 0. They are treated as reserved and never mapped onto a flag.

use bitflags::bitflags;
use tracing::debug;

bitflags! {
    /// Set of DJI mode flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u8 {
        const ARM_ACRO = 1 << 0;
        const STAB     = 1 << 1;
        const HOR      = 1 << 2;
        const HEAD     = 1 << 3;
        const FS       = 1 << 4;
        const RESC     = 1 << 5;
    }
}

/// Bits with no defined flag
pub const RESERVED_MASK: u8 = 0b1100_0000;

/// A single DJI mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeFlag {
    ArmAcro,
    Stab,
    Hor,
    Head,
    Fs,
    Resc,
}

impl ModeFlag {
    /// All flags in bit order
    pub const ALL: [ModeFlag; 6] = [
        ModeFlag::ArmAcro,
        ModeFlag::Stab,
        ModeFlag::Hor,
        ModeFlag::Head,
        ModeFlag::Fs,
        ModeFlag::Resc,
    ];

    /// The flag as a one-element set
    pub const fn bit(self) -> ModeFlags {
        match self {
            ModeFlag::ArmAcro => ModeFlags::ARM_ACRO,
            ModeFlag::Stab => ModeFlags::STAB,
            ModeFlag::Hor => ModeFlags::HOR,
            ModeFlag::Head => ModeFlags::HEAD,
            ModeFlag::Fs => ModeFlags::FS,
            ModeFlag::Resc => ModeFlags::RESC,
        }
    }
}

impl ModeFlags {
    /// True if the given flag is in the set
    pub fn has(self, flag: ModeFlag) -> bool {
        self.contains(flag.bit())
    }

    /// Flags in the set, in bit order
    pub fn flags(self) -> impl Iterator<Item = ModeFlag> {
        ModeFlag::ALL.into_iter().filter(move |&flag| self.has(flag))
    }
}

/// Decode a DJI mode bitmask into its flags
///
/// Reserved bits are ignored.
///
/// # Examples
///
/// ```
/// use osd_layout::flight_mode::{decode_dji_mask, ModeFlags};
///
/// let flags = decode_dji_mask(0b0000_0011);
/// assert_eq!(flags, ModeFlags::ARM_ACRO | ModeFlags::STAB);
/// assert!(decode_dji_mask(0).is_empty());
/// ```
pub fn decode_dji_mask(mask: u8) -> ModeFlags {
    let reserved = reserved_bits(mask);
    if reserved != 0 {
        debug!("Ignoring reserved DJI mode bits 0x{:02X}", reserved);
    }

    ModeFlags::from_bits_truncate(mask)
}

/// Reserved bits set in a mask
pub fn reserved_bits(mask: u8) -> u8 {
    mask & RESERVED_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bits() {
        assert_eq!(ModeFlags::ARM_ACRO.bits(), 0b0000_0001);
        assert_eq!(ModeFlags::STAB.bits(), 0b0000_0010);
        assert_eq!(ModeFlags::HOR.bits(), 0b0000_0100);
        assert_eq!(ModeFlags::HEAD.bits(), 0b0000_1000);
        assert_eq!(ModeFlags::FS.bits(), 0b0001_0000);
        assert_eq!(ModeFlags::RESC.bits(), 0b0010_0000);
        assert_eq!(ModeFlags::all().bits() & RESERVED_MASK, 0);
    }

    #[test]
    fn test_decode_arm_and_stab() {
        let flags = decode_dji_mask(0b0000_0011);
        assert!(flags.has(ModeFlag::ArmAcro));
        assert!(flags.has(ModeFlag::Stab));
        for flag in [ModeFlag::Hor, ModeFlag::Head, ModeFlag::Fs, ModeFlag::Resc] {
            assert!(!flags.has(flag), "{:?} should not be set", flag);
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_dji_mask(0), ModeFlags::empty());
        assert_eq!(decode_dji_mask(0).flags().count(), 0);
    }

    #[test]
    fn test_decode_each_bit() {
        for (bit, flag) in ModeFlag::ALL.iter().enumerate() {
            let flags = decode_dji_mask(1 << bit);
            assert_eq!(flags.flags().collect::<Vec<_>>(), vec![*flag]);
        }
    }

    #[test]
    fn test_reserved_bits_ignored() {
        assert!(decode_dji_mask(0b0100_0000).is_empty());
        assert!(decode_dji_mask(0b1000_0000).is_empty());
        assert_eq!(decode_dji_mask(0b1100_0100), ModeFlags::HOR);
        assert!(!decode_dji_mask(0b1100_0000).has(ModeFlag::ArmAcro));
    }

    #[test]
    fn test_reserved_bits() {
        assert_eq!(reserved_bits(0xFF), 0b1100_0000);
        assert_eq!(reserved_bits(0b0011_1111), 0);
        assert_eq!(reserved_bits(0b1000_0001), 0b1000_0000);
    }

    #[test]
    fn test_flags_in_bit_order() {
        let flags = decode_dji_mask(0b0011_0001);
        assert_eq!(
            flags.flags().collect::<Vec<_>>(),
            vec![ModeFlag::ArmAcro, ModeFlag::Fs, ModeFlag::Resc]
        );
    }

    #[test]
    fn test_flags_reencode() {
        let flags = ModeFlags::FS | ModeFlags::RESC;
        assert_eq!(flags.bits(), 0b0011_0000);
        assert_eq!(decode_dji_mask(flags.bits()), flags);
    }
}
