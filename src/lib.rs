//! # zenpixelview
//!
//! Bounds-checked reads and writes of single pixels inside a caller-owned
//! byte buffer, for chunky and planar image data.
//!
//! ## Formats
//!
//! ### Chunky
//! One big-endian `u32` per pixel, rows packed with no padding
//! ([`ChunkyView`]).
//!
//! ### Planar
//! Each pixel's color index is split into 1 to 32 bitplanes ([`PlanarView`]),
//! stored in one of three [`Interleave`] formats:
//! - **word**: 16 pixels of plane 0, then of plane 1, ... (Atari ST screens)
//! - **line**: one scanline of each plane in turn (Amiga ILBM bodies)
//! - **contiguous**: one whole plane bitmap after another
//!
//! Bits are MSB first: pixel `x` lives in bit `7 - x % 8` of its byte.
//!
//! ## No Allocation On Access
//!
//! The address formula is chosen once when a view is built. `get_color` and
//! `set_color` validate their arguments, then touch the buffer directly.
//! A call that fails validation leaves the buffer untouched.
//!
//! ## Non-Goals
//!
//! - Palette lookup and color-space conversion
//! - Container parsing (IFF, Degas, ...) and compression
//! - Resizing, multiple images, animation
//!
//! ## Usage
//!
//! ```
//! use zenpixelview::{Interleave, PlanarView, Unstoppable};
//!
//! // 32x2 pixels, 4 planes, word interleaved.
//! let mut data = vec![0u8; 32 / 16 * 2 * 4 * 2];
//! let mut view = PlanarView::with_interleave(&mut data[..], 32, 2, 4, Interleave::Word)?;
//!
//! view.set_color(17, 1, 0b1010)?;
//! assert_eq!(view.get_color(17, 1)?, 0b1010);
//! assert!(view.set_color(0, 0, 16).is_err()); // only 4 planes
//!
//! let mut indices = vec![0u32; 64];
//! view.read_indices(&mut indices, Unstoppable)?;
//! assert_eq!(indices[32 + 17], 0b1010);
//! # Ok::<(), zenpixelview::PixelViewError>(())
//! ```
//!
//! ## Shared Buffers
//!
//! Views hold their buffer (`&mut [u8]`, `Vec<u8>`, ...) exclusively while
//! writing. `set_color` on a planar view performs one read-modify-write per
//! plane with no atomicity, so callers sharing image memory across threads
//! must serialize access themselves.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod chunky;
mod error;
mod layout;
mod limits;
mod planar;
mod validate;

// Re-exports
pub use chunky::{ChunkyView, chunky_len};
pub use enough::{Stop, Unstoppable};
pub use error::PixelViewError;
pub use layout::{Interleave, MAX_PLANES};
pub use limits::Limits;
pub use planar::{PlanarView, PlanarViewConfig, planar_len};
