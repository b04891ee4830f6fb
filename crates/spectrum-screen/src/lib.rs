//! ZX Spectrum screen memory decoder.
//!
//! Decodes the Spectrum's display file, a 6144-byte pixel bitmap plus a
//! 768-byte colour attribute map, into a conventional 256×192 row-major
//! RGBA image.
//!
//! # Screen memory layout
//!
//! The bitmap is not stored scanline by scanline. The 192 lines are split
//! into three 2048-byte thirds, and within each third the eight scanlines
//! of a character cell are interleaved with the scanlines of the other
//! cells. [`bitmap_address`] performs the pixel-to-byte transcoding and
//! [`pixel_coords`] inverts it.
//!
//! Attributes carry colour per 8×8 cell, one byte each, laid out
//! `FBPPPIII`: flash (bit 7), bright (bit 6), paper (bits 3-5), ink
//! (bits 0-2).
//!
//! This crate is pure decoding. It never opens files or encodes image
//! containers; callers hand in a byte buffer and get back pixels.

use std::fmt;

mod attributes;
mod compose;
mod geometry;
mod palette;
mod screen;
mod snapshot;

pub use attributes::Attribute;
pub use compose::render_screen;
pub use geometry::{
    BitmapAddress, SCREEN_HEIGHT, SCREEN_WIDTH, attribute_cell, bitmap_address, pixel_coords,
};
pub use palette::PALETTE;
pub use screen::{
    ATTRIBUTE_ROWS, ATTRIBUTE_SIZE, Attributes, BITMAP_ROWS, BITMAP_SIZE, Bitmap, ROW_BYTES,
};
pub use snapshot::{
    SCR_SIZE, SNA_48K_SIZE, SNA_128K_SIZE, SNA_HEADER_SIZE, SnapshotFormat, load_screen,
    render_snapshot,
};

/// Errors produced while decoding a snapshot's screen.
#[derive(Debug, PartialEq, Eq)]
pub enum ScreenError {
    /// The buffer ends before the requested region does.
    TruncatedInput { needed: usize, len: usize },
    /// A pixel coordinate or bitmap address is outside its declared domain.
    OutOfRange {
        axis: &'static str,
        value: usize,
        limit: usize,
    },
    /// The snapshot's length matches no known screen container.
    UnrecognizedFormat { len: usize },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput { needed, len } => {
                write!(f, "input truncated: need {needed} bytes, got {len}")
            }
            Self::OutOfRange { axis, value, limit } => {
                write!(f, "{axis} {value} out of range (limit {limit})")
            }
            Self::UnrecognizedFormat { len } => write!(
                f,
                "screen format not recognized: {len} bytes (expected {SCR_SIZE} for SCR, \
                 {SNA_48K_SIZE} for 48K SNA, or {SNA_128K_SIZE} for 128K SNA)"
            ),
        }
    }
}

impl std::error::Error for ScreenError {}
