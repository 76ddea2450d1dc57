#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixelview::*;

fuzz_target!(|data: &[u8]| {
    // Arbitrary shapes and coordinates over arbitrary bytes: must never panic.
    if data.len() < 12 {
        return;
    }
    let width = u32::from(u16::from_le_bytes([data[0], data[1]]));
    let height = u32::from(u16::from_le_bytes([data[2], data[3]]));
    let planes = u32::from(data[4] % 40);
    let interleave = Interleave::ALL[usize::from(data[5]) % 3];
    let offset = usize::from(data[6] % 8);
    let x = u32::from(u16::from_le_bytes([data[7], data[8]]));
    let y = u32::from(u16::from_le_bytes([data[9], data[10]]));
    let color = u32::from(data[11]);
    let mut buf = data[12..].to_vec();

    let config = PlanarViewConfig::new().interleave(interleave).byte_offset(offset);
    if let Ok(mut view) = config.view(&mut buf[..], width, height, planes) {
        let _ = view.get_color(x, y);
        if view.set_color(x, y, color).is_ok() {
            assert_eq!(view.get_color(x, y).unwrap(), color);
        }
    }

    if let Ok(mut view) = ChunkyView::with_offset(&mut buf[..], width, height, offset) {
        let _ = view.get_color_at(x, y);
        let _ = view.set_color(x, y, color);
    }
});
