//! ZX Spectrum 16-colour palette.
//!
//! The ULA generates 15 unique colours (black appears twice) from a 3-bit
//! colour number plus a BRIGHT modifier. Non-bright colours drive their
//! component channels at 0xD7, bright colours at full 0xFF.

/// ARGB32 palette: 16 entries (8 normal + 8 bright).
///
/// Index layout: `bright_bit << 3 | colour_3bit`, where the 3-bit colour
/// number comes straight from an attribute's ink or paper field.
///
/// Colours: black, blue, red, magenta, green, cyan, yellow, white.
pub const PALETTE: [u32; 16] = [
    // Normal (bright = 0)
    0xFF00_0000, // 0: Black
    0xFF00_00D7, // 1: Blue
    0xFFD7_0000, // 2: Red
    0xFFD7_00D7, // 3: Magenta
    0xFF00_D700, // 4: Green
    0xFF00_D7D7, // 5: Cyan
    0xFFD7_D700, // 6: Yellow
    0xFFD7_D7D7, // 7: White
    // Bright (bright = 1)
    0xFF00_0000, // 8: Black (same as normal)
    0xFF00_00FF, // 9: Bright Blue
    0xFFFF_0000, // 10: Bright Red
    0xFFFF_00FF, // 11: Bright Magenta
    0xFF00_FF00, // 12: Bright Green
    0xFF00_FFFF, // 13: Bright Cyan
    0xFFFF_FF00, // 14: Bright Yellow
    0xFFFF_FFFF, // 15: Bright White
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_black_is_black() {
        assert_eq!(PALETTE[0], PALETTE[8]);
    }

    #[test]
    fn all_entries_opaque() {
        for colour in PALETTE {
            assert_eq!(colour >> 24, 0xFF);
        }
    }

    #[test]
    fn normal_and_bright_intensities() {
        // White: all three channels at the tier's intensity
        assert_eq!(PALETTE[7], 0xFFD7_D7D7);
        assert_eq!(PALETTE[15], 0xFFFF_FFFF);
        // Blue sits in the low byte
        assert_eq!(PALETTE[1] & 0xFF, 0xD7);
        assert_eq!(PALETTE[9] & 0xFF, 0xFF);
    }
}
