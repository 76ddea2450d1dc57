//! Bitplane interleave formats and the address arithmetic behind them.
//!
//! For every format, the bit of plane `p` of pixel `(x, y)` lives in byte
//! `base_offset(x, y) + p * plane_step`, at bit `7 - (x % 8)` (MSB first).
//! Only `base_offset`, `bytes_per_line` and `plane_step` differ:
//!
//! | Interleave | bytes per line | plane step | base offset |
//! |---|---|---|---|
//! | word | `ceil(w/16) * 2` | `2` | `y*bpl*P + P*2*(x>>4) + ((x>>3) & 1)` |
//! | line | `ceil(w/8)` | `bpl` | `y*bpl*P + (x>>3)` |
//! | contiguous | `ceil(w/8)` | `bpl*h` | `y*bpl + (x>>3)` |
//!
//! In the word row, `(x>>3) & 1` is the same as `x % 16 < 8 ? 0 : 1`: it
//! picks the high or low byte of the 16-pixel word.

use core::fmt;
use core::str::FromStr;

use crate::error::PixelViewError;
use crate::validate::{check_between, check_one_of};

/// Largest supported plane count. A color index is held in a `u32`.
pub const MAX_PLANES: u32 = 32;

const NAMES: [&str; 3] = ["contiguous", "line", "word"];

/// Physical arrangement of bitplane data in memory.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interleave {
    /// One complete plane bitmap after another.
    Contiguous,
    /// One scanline of each plane in turn, then the next scanline.
    Line,
    /// 16-pixel words of each plane in turn (Atari ST screen layout).
    #[default]
    Word,
}

impl Interleave {
    /// All formats, in name order.
    pub const ALL: [Interleave; 3] = [Self::Contiguous, Self::Line, Self::Word];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contiguous => NAMES[0],
            Self::Line => NAMES[1],
            Self::Word => NAMES[2],
        }
    }

    /// Bytes holding one scanline of a single plane.
    pub fn bytes_per_line(self, width: u32) -> usize {
        let width = width as usize;
        match self {
            Self::Word => width.div_ceil(16) * 2,
            Self::Line | Self::Contiguous => width.div_ceil(8),
        }
    }
}

impl fmt::Display for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interleave {
    type Err = PixelViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = check_one_of(s, &NAMES, "interleave format")?;
        Ok(Self::ALL[index])
    }
}

impl TryFrom<&str> for Interleave {
    type Error = PixelViewError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

type OffsetFn = fn(&PlaneLayout, usize, usize) -> usize;

/// Address arithmetic for one planar view, fixed at construction.
#[derive(Clone, Copy)]
pub(crate) struct PlaneLayout {
    pub bytes_per_line: usize,
    pub plane_step: usize,
    pub planes: u32,
    /// Total bytes covered by all planes.
    pub byte_len: usize,
    /// Bytes between the first byte of row `y` and row `y + 1`.
    row_stride: usize,
    /// Bytes between consecutive 16-pixel groups (word interleave only).
    group_stride: usize,
    base_offset: OffsetFn,
}

impl PlaneLayout {
    pub(crate) fn new(
        width: u32,
        height: u32,
        planes: u32,
        interleave: Interleave,
    ) -> Result<Self, PixelViewError> {
        check_between(u64::from(planes), 1, u64::from(MAX_PLANES), "plane count")?;

        let bytes_per_line = interleave.bytes_per_line(width);
        let p = planes as usize;
        let h = height as usize;
        let line_group = bytes_per_line
            .checked_mul(p)
            .ok_or(PixelViewError::DimensionsTooLarge { width, height })?;
        let byte_len = line_group
            .checked_mul(h)
            .ok_or(PixelViewError::DimensionsTooLarge { width, height })?;

        let (plane_step, row_stride, base_offset): (usize, usize, OffsetFn) = match interleave {
            Interleave::Word => (2, line_group, word_offset),
            Interleave::Line => (bytes_per_line, line_group, byte_column_offset),
            // bytes_per_line * height <= byte_len, so no overflow here.
            Interleave::Contiguous => (bytes_per_line * h, bytes_per_line, byte_column_offset),
        };

        Ok(Self {
            bytes_per_line,
            plane_step,
            planes,
            byte_len,
            row_stride,
            group_stride: p * 2,
            base_offset,
        })
    }

    /// Byte holding plane 0 of pixel `(x, y)`.
    #[inline]
    pub(crate) fn base_offset(&self, x: u32, y: u32) -> usize {
        (self.base_offset)(self, x as usize, y as usize)
    }

    /// Gather the color index of an in-bounds pixel from its planes.
    #[inline]
    pub(crate) fn read_index(&self, bytes: &[u8], x: u32, y: u32) -> u32 {
        let mask = 0x80u8 >> (x & 7);
        let mut offset = self.base_offset(x, y);
        let mut index = 0u32;
        for plane in 0..self.planes {
            if bytes[offset] & mask != 0 {
                index |= 1 << plane;
            }
            offset += self.plane_step;
        }
        index
    }

    /// Scatter `index` across the planes of an in-bounds pixel. Bit `p` of
    /// `index` goes to plane `p`; bits above the plane count are ignored.
    #[inline]
    pub(crate) fn write_index(&self, bytes: &mut [u8], x: u32, y: u32, mut index: u32) {
        let mask = 0x80u8 >> (x & 7);
        let mut offset = self.base_offset(x, y);
        for _ in 0..self.planes {
            if index & 1 != 0 {
                bytes[offset] |= mask;
            } else {
                bytes[offset] &= !mask;
            }
            offset += self.plane_step;
            index >>= 1;
        }
    }
}

impl fmt::Debug for PlaneLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaneLayout")
            .field("bytes_per_line", &self.bytes_per_line)
            .field("plane_step", &self.plane_step)
            .field("planes", &self.planes)
            .field("byte_len", &self.byte_len)
            .finish_non_exhaustive()
    }
}

fn word_offset(layout: &PlaneLayout, x: usize, y: usize) -> usize {
    y * layout.row_stride + layout.group_stride * (x >> 4) + ((x >> 3) & 1)
}

fn byte_column_offset(layout: &PlaneLayout, x: usize, y: usize) -> usize {
    y * layout.row_stride + (x >> 3)
}
