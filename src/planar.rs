//! Planar pixel access.
//!
//! A [`PlanarView`] reads and writes color indices whose bits are spread
//! across bitplanes, in any of the [`Interleave`] formats. The address
//! formula is picked once when the view is built; `get_color` and
//! `set_color` only validate coordinates and walk the planes.

use core::ops::Range;

use enough::Stop;

use crate::error::PixelViewError;
use crate::layout::{Interleave, PlaneLayout};
use crate::limits::Limits;
use crate::validate::{check_below, check_between, check_fits};

/// Bytes a buffer needs (after any offset) to hold a planar image.
///
/// ```
/// use zenpixelview::{Interleave, planar_len};
///
/// assert_eq!(planar_len(320, 200, 4, Interleave::Word)?, 32000);
/// # Ok::<(), zenpixelview::PixelViewError>(())
/// ```
pub fn planar_len(
    width: u32,
    height: u32,
    planes: u32,
    interleave: Interleave,
) -> Result<usize, PixelViewError> {
    Ok(PlaneLayout::new(width, height, planes, interleave)?.byte_len)
}

/// Builder for [`PlanarView`] with non-default interleave, offset or limits.
///
/// ```
/// use zenpixelview::{Interleave, PlanarViewConfig};
///
/// let mut buf = vec![0u8; 2 + 320 * 200 / 8 * 4];
/// let mut view = PlanarViewConfig::new()
///     .interleave(Interleave::Line)
///     .byte_offset(2)
///     .view(&mut buf[..], 320, 200, 4)?;
/// view.set_color(10, 10, 9)?;
/// assert_eq!(view.get_color(10, 10)?, 9);
/// # Ok::<(), zenpixelview::PixelViewError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlanarViewConfig {
    interleave: Interleave,
    byte_offset: usize,
    limits: Option<Limits>,
}

impl PlanarViewConfig {
    /// Word interleave, no offset, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interleave(mut self, interleave: Interleave) -> Self {
        self.interleave = interleave;
        self
    }

    /// Bytes to skip at the start of the buffer.
    pub fn byte_offset(mut self, byte_offset: usize) -> Self {
        self.byte_offset = byte_offset;
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the configuration against `buffer` and build the view.
    pub fn view<B: AsRef<[u8]>>(
        &self,
        buffer: B,
        width: u32,
        height: u32,
        planes: u32,
    ) -> Result<PlanarView<B>, PixelViewError> {
        if let Some(limits) = &self.limits {
            limits.check(width, height)?;
            limits.check_planes(planes)?;
        }
        let layout = PlaneLayout::new(width, height, planes, self.interleave)?;
        check_fits(layout.byte_len, buffer.as_ref().len(), self.byte_offset)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            width,
            height,
            planes,
            interleave = %self.interleave,
            byte_offset = self.byte_offset,
            bytes_per_line = layout.bytes_per_line,
            plane_step = layout.plane_step,
            byte_len = layout.byte_len,
            "planar view"
        );

        Ok(PlanarView {
            buffer,
            byte_offset: self.byte_offset,
            width,
            height,
            interleave: self.interleave,
            max_color: u32::MAX >> (32 - planes),
            layout,
        })
    }
}

/// Bounds-checked color index access to planar image data.
///
/// `B` is any byte storage: `&[u8]` for read-only views, `&mut [u8]` or
/// `Vec<u8>` when pixels are written. The view never resizes it.
#[derive(Clone, Debug)]
pub struct PlanarView<B> {
    buffer: B,
    byte_offset: usize,
    width: u32,
    height: u32,
    interleave: Interleave,
    max_color: u32,
    layout: PlaneLayout,
}

impl<B: AsRef<[u8]>> PlanarView<B> {
    /// View word-interleaved data starting at the first byte of `buffer`.
    pub fn new(buffer: B, width: u32, height: u32, planes: u32) -> Result<Self, PixelViewError> {
        PlanarViewConfig::new().view(buffer, width, height, planes)
    }

    /// View data in the given interleave format starting at the first byte.
    pub fn with_interleave(
        buffer: B,
        width: u32,
        height: u32,
        planes: u32,
        interleave: Interleave,
    ) -> Result<Self, PixelViewError> {
        PlanarViewConfig::new()
            .interleave(interleave)
            .view(buffer, width, height, planes)
    }

    /// Color index of the pixel at `(x, y)`.
    pub fn get_color(&self, x: u32, y: u32) -> Result<u32, PixelViewError> {
        check_below(x, self.width, "x")?;
        check_below(y, self.height, "y")?;
        Ok(self.layout.read_index(self.as_bytes(), x, y))
    }

    /// Unpack every pixel, row-major, into `out[..width * height]`.
    pub fn read_indices(&self, out: &mut [u32], stop: impl Stop) -> Result<(), PixelViewError> {
        let w = self.width as usize;
        let needed = self.pixel_count()?;
        if out.len() < needed {
            return Err(PixelViewError::BufferTooSmall {
                needed,
                actual: out.len(),
            });
        }
        if w == 0 {
            return Ok(());
        }
        let bytes = self.as_bytes();
        for (y, row) in out[..needed].chunks_exact_mut(w).enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            for (x, index) in row.iter_mut().enumerate() {
                *index = self.layout.read_index(bytes, x as u32, y as u32);
            }
        }
        Ok(())
    }

    /// Copy every pixel into `dest`, which may use a different interleave
    /// format or offset but must have the same width, height and planes.
    pub fn copy_to<D>(&self, dest: &mut PlanarView<D>, stop: impl Stop) -> Result<(), PixelViewError>
    where
        D: AsRef<[u8]> + AsMut<[u8]>,
    {
        if self.shape() != dest.shape() {
            return Err(PixelViewError::ShapeMismatch {
                expected: self.shape(),
                actual: dest.shape(),
            });
        }
        let src = self.as_bytes();
        let range = dest.byte_range();
        let dest_layout = dest.layout;
        let dst = &mut dest.buffer.as_mut()[range];
        for y in 0..self.height {
            if y % 16 == 0 {
                stop.check()?;
            }
            for x in 0..self.width {
                let index = self.layout.read_index(src, x, y);
                dest_layout.write_index(dst, x, y, index);
            }
        }
        Ok(())
    }

    /// The bytes covered by this view (all planes).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[self.byte_range()]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn planes(&self) -> u32 {
        self.layout.planes
    }

    pub fn interleave(&self) -> Interleave {
        self.interleave
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Bytes holding one scanline of a single plane.
    pub fn bytes_per_line(&self) -> usize {
        self.layout.bytes_per_line
    }

    /// Byte distance between the same pixel in consecutive planes.
    pub fn plane_step(&self) -> usize {
        self.layout.plane_step
    }

    /// Largest color index the plane count can hold (`2^planes - 1`).
    pub fn max_color(&self) -> u32 {
        self.max_color
    }

    /// Number of bytes the view covers, starting at [`Self::byte_offset`].
    pub fn byte_len(&self) -> usize {
        self.layout.byte_len
    }

    /// Give the buffer back.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Convert to an [`imgref::ImgVec`] of color indices.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self, stop: impl Stop) -> Result<imgref::ImgVec<u32>, PixelViewError> {
        let mut out = alloc::vec![0u32; self.pixel_count()?];
        self.read_indices(&mut out, stop)?;
        Ok(imgref::ImgVec::new(
            out,
            self.width as usize,
            self.height as usize,
        ))
    }

    fn byte_range(&self) -> Range<usize> {
        self.byte_offset..self.byte_offset + self.layout.byte_len
    }

    fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.layout.planes)
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

impl<B: AsRef<[u8]> + AsMut<[u8]>> PlanarView<B> {
    /// Set the color index of the pixel at `(x, y)`.
    ///
    /// Fails without touching the buffer if a coordinate is out of bounds
    /// or `color` exceeds [`Self::max_color`].
    pub fn set_color(&mut self, x: u32, y: u32, color: u32) -> Result<(), PixelViewError> {
        check_below(x, self.width, "x")?;
        check_below(y, self.height, "y")?;
        self.check_color(color)?;
        let range = self.byte_range();
        self.layout
            .write_index(&mut self.buffer.as_mut()[range], x, y, color);
        Ok(())
    }

    /// Pack row-major `indices[..width * height]` into the planes.
    ///
    /// Every index is validated before the first byte is written.
    pub fn write_indices(&mut self, indices: &[u32], stop: impl Stop) -> Result<(), PixelViewError> {
        let w = self.width as usize;
        let needed = self.pixel_count()?;
        if indices.len() < needed {
            return Err(PixelViewError::BufferTooSmall {
                needed,
                actual: indices.len(),
            });
        }
        if w == 0 {
            return Ok(());
        }
        let indices = &indices[..needed];
        for (y, row) in indices.chunks_exact(w).enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            for &index in row {
                self.check_color(index)?;
            }
        }

        let range = self.byte_range();
        let layout = self.layout;
        let bytes = &mut self.buffer.as_mut()[range];
        for (y, row) in indices.chunks_exact(w).enumerate() {
            for (x, &index) in row.iter().enumerate() {
                layout.write_index(bytes, x as u32, y as u32, index);
            }
        }
        Ok(())
    }

    /// Set every pixel to `color`. Padding bits past the right edge keep
    /// their value.
    pub fn fill(&mut self, color: u32) -> Result<(), PixelViewError> {
        self.check_color(color)?;
        let range = self.byte_range();
        let layout = self.layout;
        let bytes = &mut self.buffer.as_mut()[range];
        for y in 0..self.height {
            for x in 0..self.width {
                layout.write_index(bytes, x, y, color);
            }
        }
        Ok(())
    }

    /// Mutable access to the bytes covered by this view.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let range = self.byte_range();
        &mut self.buffer.as_mut()[range]
    }

    fn check_color(&self, color: u32) -> Result<(), PixelViewError> {
        check_between(u64::from(color), 0, u64::from(self.max_color), "color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use enough::Unstoppable;

    #[test]
    fn new_defaults_to_word() {
        let buf = [0u8; 8];
        let view = PlanarView::new(&buf[..], 16, 1, 4).unwrap();
        assert_eq!(view.interleave(), Interleave::Word);
        assert_eq!(view.byte_len(), 8);
        assert_eq!(view.max_color(), 15);
    }

    #[test]
    fn max_color_for_32_planes() {
        let buf = vec![0u8; 64];
        let mut view = PlanarView::new(buf, 8, 1, 32).unwrap();
        assert_eq!(view.max_color(), u32::MAX);
        view.set_color(3, 0, 0xDEAD_BEEF).unwrap();
        assert_eq!(view.get_color(3, 0).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn offset_is_respected() {
        let mut buf = [0xFFu8; 5];
        {
            let mut view = PlanarViewConfig::new()
                .interleave(Interleave::Line)
                .byte_offset(3)
                .view(&mut buf[..], 8, 2, 1)
                .unwrap();
            view.set_color(0, 1, 0).unwrap();
            assert_eq!(view.as_bytes(), &[0xFF, 0x7F]);
        }
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn limits_are_checked() {
        let buf = [0u8; 64];
        let limits = Limits {
            max_planes: Some(4),
            ..Default::default()
        };
        let config = PlanarViewConfig::new().limits(limits);
        assert!(config.view(&buf[..], 16, 2, 4).is_ok());
        match config.view(&buf[..], 16, 2, 5).unwrap_err() {
            PixelViewError::LimitExceeded(_) => {}
            other => panic!("expected LimitExceeded, got {other:?}"),
        }

        let small = PlanarViewConfig::new().limits(Limits {
            max_width: Some(8),
            ..Default::default()
        });
        assert!(small.view(&buf[..], 16, 1, 1).is_err());
    }

    #[test]
    fn fill_then_read() {
        let mut view = PlanarView::with_interleave(vec![0u8; 3 * 2 * 3], 20, 2, 2, Interleave::Contiguous)
            .unwrap();
        view.fill(2).unwrap();
        let mut out = vec![0u32; 40];
        view.read_indices(&mut out, Unstoppable).unwrap();
        assert!(out.iter().all(|&c| c == 2));
        assert!(view.fill(4).is_err());
    }

    #[test]
    fn write_indices_rejects_before_writing() {
        let mut view = PlanarView::new(vec![0u8; 4], 16, 1, 2).unwrap();
        let mut indices: Vec<u32> = (0..16).map(|i| i % 4).collect();
        indices[15] = 4;
        assert!(view.write_indices(&indices, Unstoppable).is_err());
        assert_eq!(view.as_bytes(), &[0, 0, 0, 0]);

        indices[15] = 3;
        view.write_indices(&indices, Unstoppable).unwrap();
        let mut out = vec![0u32; 16];
        view.read_indices(&mut out, Unstoppable).unwrap();
        assert_eq!(out, indices);
    }

    #[test]
    fn short_output_is_rejected() {
        let view = PlanarView::new(vec![0u8; 4], 16, 1, 2).unwrap();
        let mut out = vec![0u32; 15];
        match view.read_indices(&mut out, Unstoppable).unwrap_err() {
            PixelViewError::BufferTooSmall { needed, actual } => {
                assert_eq!((needed, actual), (16, 15));
            }
            other => panic!("expected BufferTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn copy_requires_same_shape() {
        let src = PlanarView::new(vec![0u8; 4], 16, 1, 2).unwrap();
        let mut dest = PlanarView::new(vec![0u8; 6], 16, 1, 3).unwrap();
        match src.copy_to(&mut dest, Unstoppable).unwrap_err() {
            PixelViewError::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, (16, 1, 2));
                assert_eq!(actual, (16, 1, 3));
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_view_rejects_every_coordinate() {
        let view = PlanarView::new(&[0u8; 0][..], 0, 0, 1).unwrap();
        assert_eq!(view.byte_len(), 0);
        assert!(view.get_color(0, 0).is_err());
        let mut out: [u32; 0] = [];
        view.read_indices(&mut out, Unstoppable).unwrap();
    }
}
