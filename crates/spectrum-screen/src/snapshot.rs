//! Snapshot container recognition and screen extraction.
//!
//! The screen arrives inside one of three containers, told apart by total
//! byte length alone:
//!
//! | format   | length  | layout |
//! |----------|---------|--------|
//! | SCR      | 6,912   | bare screen dump: bitmap then attributes |
//! | 48K SNA  | 49,179  | 27-byte register header, then 48K of RAM |
//! | 128K SNA | 131,103 | 48K layout, 4-byte extension, 5 more banks |
//!
//! Both SNA variants put the screen at the same offsets. RAM in a 48K SNA
//! starts at address 0x4000, which is where the display file lives, and a
//! 128K SNA stores bank 5 (the displayed bank) first for compatibility.

use crate::ScreenError;
use crate::compose;
use crate::screen::{ATTRIBUTE_SIZE, Attributes, BITMAP_SIZE, Bitmap};

/// Size of a bare SCR screen dump: bitmap plus attributes, no header.
pub const SCR_SIZE: usize = BITMAP_SIZE + ATTRIBUTE_SIZE;
/// Size of the SNA register header.
pub const SNA_HEADER_SIZE: usize = 27;
/// Size of a 48K SNA snapshot: header plus 49,152 bytes of RAM.
pub const SNA_48K_SIZE: usize = 49_179;
/// Size of a 128K SNA snapshot.
pub const SNA_128K_SIZE: usize = 131_103;

/// A screen container recognized from its byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Scr,
    Sna48,
    Sna128,
}

impl SnapshotFormat {
    /// Recognize the container from a snapshot's length.
    ///
    /// # Errors
    /// Returns [`ScreenError::UnrecognizedFormat`] for any length other
    /// than the three in the table above.
    pub fn from_len(len: usize) -> Result<Self, ScreenError> {
        match len {
            SCR_SIZE => Ok(Self::Scr),
            SNA_48K_SIZE => Ok(Self::Sna48),
            SNA_128K_SIZE => Ok(Self::Sna128),
            _ => Err(ScreenError::UnrecognizedFormat { len }),
        }
    }

    /// File offset of the bitmap region.
    #[must_use]
    pub fn bitmap_offset(self) -> usize {
        match self {
            Self::Scr => 0,
            Self::Sna48 | Self::Sna128 => SNA_HEADER_SIZE,
        }
    }

    /// File offset of the attribute region, directly after the bitmap.
    #[must_use]
    pub fn attribute_offset(self) -> usize {
        self.bitmap_offset() + BITMAP_SIZE
    }
}

/// Recognize a snapshot and copy out both screen regions.
///
/// # Errors
/// Returns [`ScreenError::UnrecognizedFormat`] for an unknown length.
/// Truncation cannot occur once the length is recognized.
pub fn load_screen(data: &[u8]) -> Result<(Bitmap, Attributes), ScreenError> {
    let format = SnapshotFormat::from_len(data.len())?;
    let bitmap = Bitmap::from_snapshot(data, format.bitmap_offset())?;
    let attributes = Attributes::from_snapshot(data, format.attribute_offset())?;
    Ok((bitmap, attributes))
}

/// Render a snapshot's screen straight to 256×192 row-major RGBA pixels.
///
/// # Errors
/// Returns [`ScreenError::UnrecognizedFormat`] for an unknown length.
pub fn render_snapshot(data: &[u8]) -> Result<Vec<u8>, ScreenError> {
    let (bitmap, attributes) = load_screen(data)?;
    compose::render_screen(&bitmap, &attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_containers_by_length() {
        assert_eq!(SnapshotFormat::from_len(6_912).unwrap(), SnapshotFormat::Scr);
        assert_eq!(
            SnapshotFormat::from_len(49_179).unwrap(),
            SnapshotFormat::Sna48
        );
        assert_eq!(
            SnapshotFormat::from_len(131_103).unwrap(),
            SnapshotFormat::Sna128
        );
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0, 100, 6_911, 6_913, 49_178, 49_180, 131_104] {
            assert_eq!(
                SnapshotFormat::from_len(len).err(),
                Some(ScreenError::UnrecognizedFormat { len }),
                "len = {len}"
            );
        }
    }

    #[test]
    fn region_offsets_per_container() {
        assert_eq!(SnapshotFormat::Scr.bitmap_offset(), 0);
        assert_eq!(SnapshotFormat::Scr.attribute_offset(), 6_144);
        assert_eq!(SnapshotFormat::Sna48.bitmap_offset(), 27);
        assert_eq!(SnapshotFormat::Sna48.attribute_offset(), 6_171);
        assert_eq!(SnapshotFormat::Sna128.bitmap_offset(), 27);
        assert_eq!(SnapshotFormat::Sna128.attribute_offset(), 6_171);
    }

    #[test]
    fn load_screen_reads_sna_offsets() {
        let mut data = vec![0u8; SNA_48K_SIZE];
        data[27] = 0xAA;
        data[6_171] = 0x47;
        let (bitmap, attributes) = load_screen(&data).unwrap();
        assert_eq!(bitmap.byte(0, 0), 0xAA);
        assert_eq!(attributes.cell(0, 0), 0x47);
    }

    #[test]
    fn load_screen_reads_scr_offsets() {
        let mut data = vec![0u8; SCR_SIZE];
        data[0] = 0xAA;
        data[6_144] = 0x47;
        let (bitmap, attributes) = load_screen(&data).unwrap();
        assert_eq!(bitmap.byte(0, 0), 0xAA);
        assert_eq!(attributes.cell(0, 0), 0x47);
    }

    #[test]
    fn render_snapshot_rejects_unknown_length() {
        let data = vec![0u8; 100];
        assert!(matches!(
            render_snapshot(&data),
            Err(ScreenError::UnrecognizedFormat { len: 100 })
        ));
    }
}
