//! Starflag draws stars-and-stripes flags whose stripes and stars are scaled by per-region
//! weights (population, area, electoral votes, ...).
//!
//! # Pipeline overview
//!
//! 1. **Weigh**: a [`WeightTable`] plus a [`RegionOrder`] (which region owns which stripe and
//!    star).
//! 2. **Lay out**: [`StripeLayout`], [`StarScales`] and a [`CantonSelector`] make a
//!    [`FlagSpec`]; optionally with [`Durations`] and an [`AlternateDefault`].
//! 3. **Resolve**: [`resolve_scene`] turns a [`FlagSpec`] into a [`FlagScene`] where every attribute
//!    is a static value or a five-key [`Keyframes`] cycle sharing one [`Schedule`].
//! 4. **Emit**: [`write_scene`] / [`render_svg`] produce the SVG text.
//!
//! Everything is pure: no IO happens in the library, and identical input produces identical
//! bytes.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod layout;
mod regions;
mod render;
mod scene;

pub use animation::keyframes::{Keyframes, Lerp, Track};
pub use animation::schedule::{Durations, Phase, Schedule};
pub use foundation::core::{
    BezPath, Canvas, FLY, HOIST, Point, RED_BAND_COUNT, STAR_COUNT, STRIPE_COUNT, Size, Vec2,
    approx_eq,
};
pub use foundation::error::{FlagError, FlagResult};
pub use foundation::format;
pub use layout::canton::{
    CantonGeometry, CantonSelector, HEIGHT_PER_WIDTH, STANDARD_HEIGHT, STANDARD_WIDTH,
};
pub use layout::stars::{GRID_COLUMNS, GridCoord, StarGrid, StarScales, star_position};
pub use layout::stripes::{StripeBand, StripeLayout};
pub use regions::datasets::Dataset;
pub use regions::table::{RegionOrder, WeightTable, checked_total};
pub use render::raster::{FlagRaster, parse_svg, rasterize};
pub use render::svg::{STAR_SYMBOL_ID, proportional_flag, render_svg, star_path, write_scene};
pub use scene::model::{AlternateDefault, FlagSpec, Palette};
pub use scene::resolve::{BandNode, FlagScene, StarNode, resolve_scene};
pub use scene::variants::{Variant, standard_variants};
