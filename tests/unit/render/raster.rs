use super::*;
use crate::render::svg::render_svg;
use crate::scene::model::FlagSpec;

fn pixel(r: &FlagRaster, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * r.width + x) * 4) as usize;
    [r.data[i], r.data[i + 1], r.data[i + 2], r.data[i + 3]]
}

#[test]
fn canonical_flag_rasterizes_with_expected_colors() {
    let svg = render_svg(&FlagSpec::canonical()).unwrap();
    let raster = rasterize(&svg, Canvas::with_height(130)).unwrap();
    assert_eq!(raster.width, 247);
    assert_eq!(raster.height, 130);
    assert_eq!(raster.data.len(), 247 * 130 * 4);

    // Top-right corner is in the first red stripe.
    assert_eq!(pixel(&raster, 240, 3), [0xB2, 0x22, 0x34, 0xFF]);
    // Second stripe (white), right of the canton.
    assert_eq!(pixel(&raster, 240, 15), [0xFF, 0xFF, 0xFF, 0xFF]);
    // Bottom-left corner is in the last red stripe, below the canton.
    assert_eq!(pixel(&raster, 3, 126), [0xB2, 0x22, 0x34, 0xFF]);
    // Canton background between stars.
    assert_eq!(pixel(&raster, 2, 2), [0x3C, 0x3B, 0x6E, 0xFF]);
}

#[test]
fn garbage_input_is_an_error() {
    assert!(parse_svg("not svg").is_err());
}
