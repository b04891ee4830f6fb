//! Screen memory regions: the pixel bitmap and the attribute map.
//!
//! Both regions are contiguous runs of bytes inside a snapshot. Loading
//! copies them positionally: byte `i` of a region comes from
//! `data[offset + i]` and lands at row `i / 32`, column `i % 32`. No
//! reordering happens here; address transcoding belongs to
//! [`crate::bitmap_address`].

use crate::ScreenError;

/// Bytes per row: 32 bytes cover 256 pixels, or 32 attribute cells.
pub const ROW_BYTES: usize = 32;
/// Bitmap rows, one per scanline.
pub const BITMAP_ROWS: usize = 192;
/// Attribute rows, one per character-cell row.
pub const ATTRIBUTE_ROWS: usize = 24;
/// Bitmap region size in bytes.
pub const BITMAP_SIZE: usize = BITMAP_ROWS * ROW_BYTES;
/// Attribute region size in bytes.
pub const ATTRIBUTE_SIZE: usize = ATTRIBUTE_ROWS * ROW_BYTES;

/// The 6144-byte pixel bitmap, 192 rows of 32 bytes in storage order.
#[derive(Debug)]
pub struct Bitmap {
    rows: [[u8; ROW_BYTES]; BITMAP_ROWS],
}

impl Bitmap {
    /// Copy the bitmap region out of a snapshot buffer.
    ///
    /// # Errors
    /// Returns [`ScreenError::TruncatedInput`] if the buffer ends before
    /// `offset + 6144`.
    pub fn from_snapshot(data: &[u8], offset: usize) -> Result<Self, ScreenError> {
        Ok(Self {
            rows: read_rows(data, offset)?,
        })
    }

    /// The byte at a storage-order row and column.
    #[must_use]
    pub fn byte(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }
}

/// The 768-byte attribute map, 24 rows of 32 cells.
pub struct Attributes {
    rows: [[u8; ROW_BYTES]; ATTRIBUTE_ROWS],
}

impl Attributes {
    /// Copy the attribute region out of a snapshot buffer.
    ///
    /// # Errors
    /// Returns [`ScreenError::TruncatedInput`] if the buffer ends before
    /// `offset + 768`.
    pub fn from_snapshot(data: &[u8], offset: usize) -> Result<Self, ScreenError> {
        Ok(Self {
            rows: read_rows(data, offset)?,
        })
    }

    /// The attribute byte for a character cell.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }
}

fn read_rows<const ROWS: usize>(
    data: &[u8],
    offset: usize,
) -> Result<[[u8; ROW_BYTES]; ROWS], ScreenError> {
    let needed = offset.saturating_add(ROWS * ROW_BYTES);
    if data.len() < needed {
        return Err(ScreenError::TruncatedInput {
            needed,
            len: data.len(),
        });
    }
    let mut rows = [[0u8; ROW_BYTES]; ROWS];
    for (row, chunk) in rows
        .iter_mut()
        .zip(data[offset..needed].chunks_exact(ROW_BYTES))
    {
        row.copy_from_slice(chunk);
    }
    Ok(rows)
}
