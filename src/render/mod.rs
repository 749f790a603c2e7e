/// Static preview rasterization via `resvg`.
pub(crate) mod raster;
/// SVG document writer.
pub(crate) mod svg;
