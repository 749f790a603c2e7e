use crate::foundation::core::{FLY, STRIPE_COUNT};
use crate::foundation::error::{FlagError, FlagResult};
use crate::layout::stripes::StripeLayout;

/// Canton width of the standard flag, as a fraction of the fly.
pub const STANDARD_WIDTH: f64 = 0.4;

/// Canton height of the standard flag (seven stripes), as a fraction of the hoist.
pub const STANDARD_HEIGHT: f64 = 7.0 / 13.0;

/// Height-to-width factor applied to explicit and stripe-derived cantons.
pub const HEIGHT_PER_WIDTH: f64 = 247.0 / 175.0;

/// How the canton's size is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum CantonSelector {
    /// 40% of the fly wide, seven stripes tall.
    #[default]
    Standard,
    /// Explicit width as a fraction of the fly; height follows the 247:175 factor.
    Width(f64),
    /// As tall as the first `n` stripes of the layout (`n` at most 13).
    StripesTall(u8),
}

impl CantonSelector {
    /// Decode the numeric convention: `0.4` is standard, a positive value is an explicit width,
    /// and `-n` means `n` stripes tall.
    pub fn from_value(v: f64) -> FlagResult<Self> {
        if v == STANDARD_WIDTH {
            return Ok(Self::Standard);
        }
        if !v.is_finite() || v == 0.0 {
            return Err(FlagError::invalid_configuration(format!(
                "canton width must be finite and nonzero, got {v}"
            )));
        }
        if v > 0.0 {
            return Ok(Self::Width(v));
        }
        let n = -v;
        if n.fract() != 0.0 || n > STRIPE_COUNT as f64 {
            return Err(FlagError::invalid_configuration(format!(
                "negative canton width must be a whole stripe count in -{STRIPE_COUNT}..=-1, got {v}"
            )));
        }
        Ok(Self::StripesTall(n as u8))
    }

    /// The numeric form accepted by [`CantonSelector::from_value`].
    pub fn to_value(self) -> f64 {
        match self {
            Self::Standard => STANDARD_WIDTH,
            Self::Width(w) => w,
            Self::StripesTall(n) => -f64::from(n),
        }
    }

    fn is_standard(self) -> bool {
        match self {
            Self::Standard => true,
            Self::Width(w) => w == STANDARD_WIDTH,
            Self::StripesTall(_) => false,
        }
    }

    /// Resolve the canton size. `stripes` is only consulted for [`CantonSelector::StripesTall`].
    pub fn resolve(self, stripes: &StripeLayout) -> FlagResult<CantonGeometry> {
        if self.is_standard() {
            return Ok(CantonGeometry::standard());
        }
        match self {
            Self::Standard => Ok(CantonGeometry::standard()),
            Self::Width(w) => {
                if !w.is_finite() || w <= 0.0 {
                    return Err(FlagError::invalid_configuration(format!(
                        "explicit canton width must be finite and > 0, got {w}"
                    )));
                }
                Ok(CantonGeometry {
                    width: w,
                    height: w * HEIGHT_PER_WIDTH,
                })
            }
            Self::StripesTall(n) => {
                let height = stripes.boundary(n)?;
                Ok(CantonGeometry {
                    width: height / HEIGHT_PER_WIDTH,
                    height,
                })
            }
        }
    }
}

impl TryFrom<f64> for CantonSelector {
    type Error = FlagError;

    fn try_from(v: f64) -> FlagResult<Self> {
        Self::from_value(v)
    }
}

impl From<CantonSelector> for f64 {
    fn from(sel: CantonSelector) -> f64 {
        sel.to_value()
    }
}

impl std::str::FromStr for CantonSelector {
    type Err = FlagError;

    fn from_str(s: &str) -> FlagResult<Self> {
        if s.eq_ignore_ascii_case("standard") {
            return Ok(Self::Standard);
        }
        let v = s.trim().parse::<f64>().map_err(|e| {
            FlagError::invalid_configuration(format!("canton width '{s}': {e}"))
        })?;
        Self::from_value(v)
    }
}

/// Canton rectangle anchored at the top-left corner of the flag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CantonGeometry {
    /// Width as a fraction of the fly.
    pub width: f64,
    /// Height as a fraction of the hoist (flag units).
    pub height: f64,
}

impl CantonGeometry {
    /// The standard canton.
    pub fn standard() -> Self {
        Self {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
        }
    }

    /// Width in flag units (the fly is 1.9 units long).
    pub fn width_units(&self) -> f64 {
        self.width * FLY
    }

    /// Width as a percentage of the document width.
    pub fn width_pct(&self) -> f64 {
        self.width * 100.0
    }

    /// Height as a percentage of the document height.
    pub fn height_pct(&self) -> f64 {
        self.height * 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/canton.rs"]
mod tests;
