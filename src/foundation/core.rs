pub use kurbo::{BezPath, Point, Size, Vec2};

/// Flag length in internal units, where the hoist (flag height) is 1.
pub const FLY: f64 = 1.9;

/// Flag height in internal units.
pub const HOIST: f64 = 1.0;

/// Number of horizontal stripes.
pub const STRIPE_COUNT: usize = 13;

/// Number of same-colored bands drawn explicitly (the other six are background).
pub const RED_BAND_COUNT: usize = 7;

/// Number of stars in the canton.
pub const STAR_COUNT: usize = 50;

/// Nominal output size of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// The fixed 1235x650 (19:10) canvas every document declares.
    pub const NOMINAL: Canvas = Canvas {
        width: 1235,
        height: 650,
    };

    /// Canvas with the flag's aspect ratio and the given pixel height.
    pub fn with_height(height: u32) -> Self {
        let width = (f64::from(height) * FLY).round().max(1.0) as u32;
        Self {
            width,
            height: height.max(1),
        }
    }
}

/// Whether two layout quantities agree within the tolerance used for geometry checks.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
