#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixelview::*;

fuzz_target!(|data: &[u8]| {
    // Any planar bytes must survive unpack -> repack in another interleave -> unpack.
    if data.len() < 3 {
        return;
    }
    let width = u32::from(data[0] % 64) + 1;
    let planes = u32::from(data[1] % 8) + 1;
    let interleave = Interleave::ALL[usize::from(data[2]) % 3];
    let per_row = planar_len(width, 1, planes, interleave).unwrap();
    let height = ((data.len() - 3) / per_row) as u32;
    if height == 0 {
        return;
    }
    let Ok(src) = PlanarView::with_interleave(&data[3..], width, height, planes, interleave) else {
        return;
    };

    let mut indices = vec![0u32; (width * height) as usize];
    src.read_indices(&mut indices, enough::Unstoppable).unwrap();

    for other in Interleave::ALL {
        let len = planar_len(width, height, planes, other).unwrap();
        let mut dest = PlanarView::with_interleave(vec![0u8; len], width, height, planes, other).unwrap();
        src.copy_to(&mut dest, enough::Unstoppable).unwrap();
        let mut again = vec![0u32; indices.len()];
        dest.read_indices(&mut again, enough::Unstoppable).unwrap();
        assert_eq!(indices, again, "roundtrip mismatch via {other}");
    }
});
