//! Pixel-to-address transcoding for the interleaved bitmap.
//!
//! The Spectrum's bitmap is not stored scanline by scanline. The 192
//! scanlines split into three 64-line thirds, and within a third the
//! eight scanlines of each character cell are interleaved: the third
//! stores every cell row's scanline 0, then every cell row's scanline 1,
//! and so on. Pixels pack eight to a byte, most significant bit leftmost.
//!
//! | screen `y` | byte row |
//! |------------|----------|
//! | 0          | 0        |
//! | 1          | 8        |
//! | 7          | 56       |
//! | 8          | 1        |
//! | 63         | 63       |
//! | 64         | 64       |
//!
//! The within-third scramble swaps two 3-bit fields of the line number,
//! so applying it twice is the identity. The inverse mapping therefore
//! has the same shape as the forward one.

use crate::ScreenError;

/// Screen width in pixels.
pub const SCREEN_WIDTH: usize = 256;
/// Screen height in pixels.
pub const SCREEN_HEIGHT: usize = 192;

/// Lines per third of the screen.
const THIRD_LINES: usize = 64;
/// Lines per character cell.
const CELL_LINES: usize = 8;

/// Location of one pixel within the bitmap region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapAddress {
    /// Byte row in storage order, 0-191.
    pub row: usize,
    /// Byte column, 0-31.
    pub column: usize,
    /// Bit within the byte, 7 = leftmost pixel.
    pub bit: u8,
}

/// Map a pixel coordinate to its bitmap-region address.
///
/// # Errors
/// Returns [`ScreenError::OutOfRange`] if the coordinate lies outside the
/// 256×192 screen.
pub fn bitmap_address(x: usize, y: usize) -> Result<BitmapAddress, ScreenError> {
    check_coords(x, y)?;
    let third = y / THIRD_LINES;
    let line = y % THIRD_LINES;
    let scanline = line % CELL_LINES;
    let cell_row = line / CELL_LINES;
    Ok(BitmapAddress {
        row: third * THIRD_LINES + scanline * CELL_LINES + cell_row,
        column: x / 8,
        bit: (7 - x % 8) as u8,
    })
}

/// Map a bitmap-region address back to its pixel coordinate.
///
/// Exact inverse of [`bitmap_address`]: the within-third field swap is
/// its own inverse.
///
/// # Errors
/// Returns [`ScreenError::OutOfRange`] if any component of the address is
/// outside the 192×32×8 bitmap space.
pub fn pixel_coords(address: BitmapAddress) -> Result<(usize, usize), ScreenError> {
    if address.row >= SCREEN_HEIGHT {
        return Err(ScreenError::OutOfRange {
            axis: "bitmap row",
            value: address.row,
            limit: SCREEN_HEIGHT,
        });
    }
    if address.column >= SCREEN_WIDTH / 8 {
        return Err(ScreenError::OutOfRange {
            axis: "bitmap column",
            value: address.column,
            limit: SCREEN_WIDTH / 8,
        });
    }
    if address.bit > 7 {
        return Err(ScreenError::OutOfRange {
            axis: "bit",
            value: usize::from(address.bit),
            limit: 8,
        });
    }
    let third = address.row / THIRD_LINES;
    let line = address.row % THIRD_LINES;
    let scanline = line / CELL_LINES;
    let cell_row = line % CELL_LINES;
    let y = third * THIRD_LINES + cell_row * CELL_LINES + scanline;
    let x = address.column * 8 + (7 - usize::from(address.bit));
    Ok((x, y))
}

/// Map a pixel coordinate to its attribute cell as `(row, column)`.
///
/// Attributes are stored row-linearly, one byte per 8×8 cell, so this is
/// a plain division with none of the bitmap's interleaving.
///
/// # Errors
/// Returns [`ScreenError::OutOfRange`] if the coordinate lies outside the
/// 256×192 screen.
pub fn attribute_cell(x: usize, y: usize) -> Result<(usize, usize), ScreenError> {
    check_coords(x, y)?;
    Ok((y / 8, x / 8))
}

fn check_coords(x: usize, y: usize) -> Result<(), ScreenError> {
    if x >= SCREEN_WIDTH {
        return Err(ScreenError::OutOfRange {
            axis: "x",
            value: x,
            limit: SCREEN_WIDTH,
        });
    }
    if y >= SCREEN_HEIGHT {
        return Err(ScreenError::OutOfRange {
            axis: "y",
            value: y,
            limit: SCREEN_HEIGHT,
        });
    }
    Ok(())
}
