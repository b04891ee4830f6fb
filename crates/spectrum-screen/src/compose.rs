//! Screen composition: bitmap plus attributes to RGBA pixels.

use crate::ScreenError;
use crate::attributes::Attribute;
use crate::geometry::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::screen::{Attributes, Bitmap};

/// Convert ARGB u32 to RGBA bytes at a given index in the buffer.
#[inline]
fn write_rgba(buffer: &mut [u8], index: usize, colour: u32) {
    buffer[index] = ((colour >> 16) & 0xFF) as u8; // R
    buffer[index + 1] = ((colour >> 8) & 0xFF) as u8; // G
    buffer[index + 2] = (colour & 0xFF) as u8; // B
    buffer[index + 3] = 0xFF; // A
}

/// Compose the 256×192 screen image from its two regions.
///
/// The output is row-major RGBA with the origin at the top left and alpha
/// always 0xFF. Rendering is a pure function of the two regions: the same
/// input always yields the same pixels.
///
/// # Errors
/// Propagates [`ScreenError::OutOfRange`] from address transcoding, which
/// cannot occur for the in-range coordinates generated here.
pub fn render_screen(bitmap: &Bitmap, attributes: &Attributes) -> Result<Vec<u8>, ScreenError> {
    let mut pixels = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 4];
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            let colour = render_pixel(bitmap, attributes, x, y)?;
            write_rgba(&mut pixels, (y * SCREEN_WIDTH + x) * 4, colour);
        }
    }
    Ok(pixels)
}

/// Resolve one pixel to its ARGB32 colour.
fn render_pixel(
    bitmap: &Bitmap,
    attributes: &Attributes,
    x: usize,
    y: usize,
) -> Result<u32, ScreenError> {
    let (cell_row, cell_column) = geometry::attribute_cell(x, y)?;
    let attribute = Attribute::from_byte(attributes.cell(cell_row, cell_column));

    let address = geometry::bitmap_address(x, y)?;
    let byte = bitmap.byte(address.row, address.column);

    if byte & (1 << address.bit) != 0 {
        Ok(attribute.ink_colour())
    } else {
        Ok(attribute.paper_colour())
    }
}
