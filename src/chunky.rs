//! Chunky pixel access: one big-endian `u32` per pixel, rows packed.

use core::ops::Range;

use enough::Stop;

use crate::error::PixelViewError;
use crate::limits::Limits;
use crate::validate::{check_below, check_fits};

/// Bytes a buffer needs (after any offset) to hold a chunky image.
pub fn chunky_len(width: u32, height: u32) -> Result<usize, PixelViewError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(PixelViewError::DimensionsTooLarge { width, height })
}

/// Bounds-checked access to 32-bit chunky pixels.
///
/// Colors are read and written as big-endian words, so `0xRRGGBBAA` lands
/// in memory as `RR GG BB AA`, the byte order of RGBA8 canvas data.
///
/// ```
/// use zenpixelview::ChunkyView;
///
/// let mut data = vec![0u8; 16 * 16 * 4];
/// let mut view = ChunkyView::new(&mut data[..], 16, 16)?;
/// view.set_color(7, 7, 0xffcc00ff)?;
/// assert_eq!(view.get_color_at(7, 7)?, 0xffcc00ff);
/// # Ok::<(), zenpixelview::PixelViewError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChunkyView<B> {
    buffer: B,
    byte_offset: usize,
    width: u32,
    height: u32,
}

impl<B: AsRef<[u8]>> ChunkyView<B> {
    /// View `width` x `height` pixels starting at the first byte of `buffer`.
    pub fn new(buffer: B, width: u32, height: u32) -> Result<Self, PixelViewError> {
        Self::with_offset(buffer, width, height, 0)
    }

    /// View pixels starting `byte_offset` bytes into `buffer`.
    pub fn with_offset(
        buffer: B,
        width: u32,
        height: u32,
        byte_offset: usize,
    ) -> Result<Self, PixelViewError> {
        let needed = chunky_len(width, height)?;
        check_fits(needed, buffer.as_ref().len(), byte_offset)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(width, height, byte_offset, byte_len = needed, "chunky view");

        Ok(Self {
            buffer,
            byte_offset,
            width,
            height,
        })
    }

    /// Like [`Self::with_offset`], rejecting dimensions outside `limits`.
    pub fn with_limits(
        buffer: B,
        width: u32,
        height: u32,
        byte_offset: usize,
        limits: &Limits,
    ) -> Result<Self, PixelViewError> {
        limits.check(width, height)?;
        Self::with_offset(buffer, width, height, byte_offset)
    }

    /// Color of the pixel at `(x, y)`.
    pub fn get_color_at(&self, x: u32, y: u32) -> Result<u32, PixelViewError> {
        let off = self.pixel_offset(x, y)?;
        let b = self.as_bytes();
        Ok(u32::from_be_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]]))
    }

    /// Same as [`Self::get_color_at`], named like [`crate::PlanarView::get_color`].
    pub fn get_color(&self, x: u32, y: u32) -> Result<u32, PixelViewError> {
        self.get_color_at(x, y)
    }

    /// Read every pixel, row-major, into `out[..width * height]`.
    pub fn read_pixels(&self, out: &mut [u32], stop: impl Stop) -> Result<(), PixelViewError> {
        let needed = self.pixel_count()?;
        if out.len() < needed {
            return Err(PixelViewError::BufferTooSmall {
                needed,
                actual: out.len(),
            });
        }
        let w = self.width as usize;
        if w == 0 {
            return Ok(());
        }
        let rows = self.as_bytes().chunks_exact(w * 4);
        for (row_idx, (src, dst)) in rows.zip(out[..needed].chunks_exact_mut(w)).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            for (px, color) in src.chunks_exact(4).zip(dst.iter_mut()) {
                *color = u32::from_be_bytes([px[0], px[1], px[2], px[3]]);
            }
        }
        Ok(())
    }

    /// Pixel at `(x, y)` as RGBA, taking the color as `0xRRGGBBAA`.
    #[cfg(feature = "rgb")]
    pub fn get_rgba(&self, x: u32, y: u32) -> Result<rgb::Rgba<u8>, PixelViewError> {
        let [r, g, b, a] = self.get_color_at(x, y)?.to_be_bytes();
        Ok(rgb::Rgba { r, g, b, a })
    }

    /// Convert to an [`imgref::ImgVec`] of colors.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self, stop: impl Stop) -> Result<imgref::ImgVec<u32>, PixelViewError> {
        let mut out = alloc::vec![0u32; self.pixel_count()?];
        self.read_pixels(&mut out, stop)?;
        Ok(imgref::ImgVec::new(
            out,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// The bytes covered by this view.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[self.byte_range()]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Give the buffer back.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Result<usize, PixelViewError> {
        check_below(x, self.width, "x")?;
        check_below(y, self.height, "y")?;
        Ok((y as usize * self.width as usize + x as usize) << 2)
    }

    fn byte_range(&self) -> Range<usize> {
        self.byte_offset..self.byte_offset + self.byte_len()
    }

    fn pixel_count(&self) -> Result<usize, PixelViewError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(PixelViewError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ChunkyView<B> {
    /// Set the color of the pixel at `(x, y)`.
    pub fn set_color(&mut self, x: u32, y: u32, color: u32) -> Result<(), PixelViewError> {
        let off = self.pixel_offset(x, y)?;
        self.as_bytes_mut()[off..off + 4].copy_from_slice(&color.to_be_bytes());
        Ok(())
    }

    /// Set the pixel at `(x, y)` from RGBA, stored as `0xRRGGBBAA`.
    #[cfg(feature = "rgb")]
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: rgb::Rgba<u8>) -> Result<(), PixelViewError> {
        self.set_color(x, y, u32::from_be_bytes([rgba.r, rgba.g, rgba.b, rgba.a]))
    }

    /// Set every pixel to `color`.
    ///
    /// Infallible: every `u32` is a valid chunky color and the view's extent
    /// was checked against the buffer at construction. [`crate::PlanarView::fill`]
    /// returns a `Result` only because its index is bounded by the plane count.
    pub fn fill(&mut self, color: u32) {
        let word = color.to_be_bytes();
        for px in self.as_bytes_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&word);
        }
    }

    /// Mutable access to the bytes covered by this view.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let range = self.byte_range();
        &mut self.buffer.as_mut()[range]
    }
}
