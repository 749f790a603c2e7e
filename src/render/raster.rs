use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{FlagError, FlagResult};

/// Straight-alpha RGBA8 pixels of a rasterized document.
#[derive(Clone, Debug)]
pub struct FlagRaster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Parse an SVG document into a `usvg` tree.
pub fn parse_svg(svg: &str) -> FlagResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize the static (first) frame of `svg` at `canvas` size.
///
/// Animation elements are ignored, so an animated document shows its proportional layout.
pub fn rasterize(svg: &str, canvas: Canvas) -> FlagResult<FlagRaster> {
    let tree = parse_svg(svg)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| FlagError::invalid_configuration("failed to allocate preview pixmap"))?;

    let sx = canvas.width as f32 / tree.size().width();
    let sy = canvas.height as f32 / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(FlagRaster {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
