//! Attribute byte decoding.
//!
//! One attribute byte colours an 8×8 character cell:
//!
//! | bit | field | meaning |
//! |-----|-------|---------|
//! | 7   | F     | flash: swap ink and paper periodically |
//! | 6   | B     | bright: high-intensity palette tier |
//! | 5-3 | P     | paper (background) colour number |
//! | 2-0 | I     | ink (foreground) colour number |

use crate::palette::PALETTE;

/// A decoded attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Ink (foreground) colour number, 0-7.
    pub ink: u8,
    /// Paper (background) colour number, 0-7.
    pub paper: u8,
    /// BRIGHT flag: both ink and paper use the high-intensity tier.
    pub bright: bool,
    /// FLASH flag. Decoded faithfully but never acted on here: flashing is
    /// an animation effect and this decoder produces a single still frame.
    pub flash: bool,
}

impl Attribute {
    /// Decode an `FBPPPIII` attribute byte.
    #[must_use]
    pub fn from_byte(value: u8) -> Self {
        Self {
            ink: value & 0x07,
            paper: (value >> 3) & 0x07,
            bright: value & 0x40 != 0,
            flash: value & 0x80 != 0,
        }
    }

    /// Resolved ARGB32 ink colour.
    #[must_use]
    pub fn ink_colour(&self) -> u32 {
        PALETTE[usize::from(self.bright_offset() | self.ink)]
    }

    /// Resolved ARGB32 paper colour.
    #[must_use]
    pub fn paper_colour(&self) -> u32 {
        PALETTE[usize::from(self.bright_offset() | self.paper)]
    }

    fn bright_offset(&self) -> u8 {
        if self.bright { 8 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_fields() {
        let attr = Attribute::from_byte(0x47);
        assert_eq!(attr.ink, 7);
        assert_eq!(attr.paper, 0);
        assert!(attr.bright);
        assert!(!attr.flash);

        let attr = Attribute::from_byte(0xB8);
        assert_eq!(attr.ink, 0);
        assert_eq!(attr.paper, 7);
        assert!(!attr.bright);
        assert!(attr.flash);
    }

    #[test]
    fn zero_byte_is_black_on_black() {
        let attr = Attribute::from_byte(0x00);
        assert_eq!(attr.ink_colour(), 0xFF00_0000);
        assert_eq!(attr.paper_colour(), 0xFF00_0000);
    }

    #[test]
    fn bright_selects_high_intensity_tier() {
        // White paper: 0xD7 grey normally, full white with bright set
        assert_eq!(Attribute::from_byte(0x38).paper_colour(), 0xFFD7_D7D7);
        assert_eq!(Attribute::from_byte(0x78).paper_colour(), 0xFFFF_FFFF);
        // Bright white ink on black paper
        assert_eq!(Attribute::from_byte(0x47).ink_colour(), 0xFFFF_FFFF);
        assert_eq!(Attribute::from_byte(0x47).paper_colour(), 0xFF00_0000);
        // Bright black stays black
        assert_eq!(Attribute::from_byte(0x40).ink_colour(), 0xFF00_0000);
    }

    #[test]
    fn every_byte_resolves_to_palette_entries() {
        for value in 0..=255u8 {
            let attr = Attribute::from_byte(value);
            assert!(PALETTE.contains(&attr.ink_colour()));
            assert!(PALETTE.contains(&attr.paper_colour()));
            assert!(attr.ink < 8 && attr.paper < 8);
        }
    }
}
