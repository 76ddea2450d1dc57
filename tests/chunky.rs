use enough::StopReason;
use zenpixelview::*;

struct AlwaysCancel;

impl Stop for AlwaysCancel {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

fn noise_colors(count: usize) -> Vec<u32> {
    let mut state: u32 = 0x1234_5678;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        })
        .collect()
}

#[test]
fn every_pixel_roundtrips() {
    let (w, h) = (7, 5);
    let mut view = ChunkyView::new(vec![0u8; chunky_len(w, h).unwrap()], w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            view.set_color(x, y, 0xAABB_CCDD).unwrap();
            assert_eq!(view.get_color_at(x, y).unwrap(), 0xAABB_CCDD);
        }
    }
}

#[test]
fn noise_roundtrip_and_neighbors() {
    let (w, h) = (9, 4);
    let colors = noise_colors((w * h) as usize);
    let mut view = ChunkyView::new(vec![0u8; chunky_len(w, h).unwrap()], w, h).unwrap();
    for (i, &c) in colors.iter().enumerate() {
        view.set_color(i as u32 % w, i as u32 / w, c).unwrap();
    }
    let mut out = vec![0u32; colors.len()];
    view.read_pixels(&mut out, Unstoppable).unwrap();
    assert_eq!(out, colors);
    assert_eq!(view.get_color(8, 3).unwrap(), colors[35]);
}

#[test]
fn layout_is_row_major_big_endian() {
    let mut data = vec![0u8; 2 * 2 * 4];
    let mut view = ChunkyView::new(&mut data[..], 2, 2).unwrap();
    view.set_color(0, 1, 0xffcc00ff).unwrap();
    assert_eq!(&data[8..12], &[0xff, 0xcc, 0x00, 0xff]);
    assert!(data[..8].iter().chain(&data[12..]).all(|&b| b == 0));
}

#[test]
fn coordinate_bounds() {
    let mut view = ChunkyView::new(vec![0u8; 3 * 2 * 4], 3, 2).unwrap();
    assert!(view.set_color(2, 1, 1).is_ok());
    assert_eq!(view.get_color_at(3, 0).unwrap_err().context(), Some("x"));
    assert_eq!(view.get_color_at(0, 2).unwrap_err().context(), Some("y"));

    let before = view.as_bytes().to_vec();
    let err = view.set_color(3, 1, 0xFFFF_FFFF).unwrap_err();
    assert_eq!(err.to_string(), "invalid x: expected between 0 and 2, got 3");
    assert_eq!(view.as_bytes(), &before[..]);
}

#[test]
fn undersized_buffer_is_rejected() {
    let err = ChunkyView::new(vec![0u8; 15], 2, 2).unwrap_err();
    assert!(matches!(err, PixelViewError::BufferTooSmall { needed: 16, actual: 15 }));
    assert!(ChunkyView::with_offset(vec![0u8; 16], 2, 2, 1).is_err());
    assert!(ChunkyView::with_offset(vec![0u8; 20], 2, 2, 4).is_ok());
}

#[test]
fn offset_view_leaves_prefix_alone() {
    let mut data = vec![0x55u8; 4 + 4];
    let mut view = ChunkyView::with_offset(&mut data[..], 1, 1, 4).unwrap();
    view.set_color(0, 0, 0x0102_0304).unwrap();
    assert_eq!(view.into_inner(), &[0x55, 0x55, 0x55, 0x55, 1, 2, 3, 4]);
}

#[test]
fn read_pixels_cancels() {
    let view = ChunkyView::new(vec![0u8; 4 * 20 * 4], 4, 20).unwrap();
    let mut out = vec![7u32; 80];
    let err = view.read_pixels(&mut out, AlwaysCancel).unwrap_err();
    assert!(matches!(err, PixelViewError::Cancelled(StopReason::Cancelled)));
    assert!(out.iter().all(|&c| c == 7));
    view.read_pixels(&mut out, Unstoppable).unwrap();
    assert!(out.iter().all(|&c| c == 0));
}

#[cfg(feature = "imgref")]
#[test]
fn imgvec_export() {
    let mut view = ChunkyView::new(vec![0u8; 3 * 2 * 4], 3, 2).unwrap();
    view.set_color(1, 1, 42).unwrap();
    let img = view.to_imgvec(Unstoppable).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
    assert_eq!(img.buf()[4], 42);
}
