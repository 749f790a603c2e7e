use crate::foundation::core::{RED_BAND_COUNT, STRIPE_COUNT};
use crate::foundation::error::{FlagError, FlagResult};
use crate::regions::table::{RegionOrder, WeightTable, checked_total};

/// One explicitly drawn band, in units of the flag height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StripeBand {
    /// Offset of the band's top edge from the top of the flag, in `[0, 1)`.
    pub top: f64,
    /// Band height; zero for a zero-weight stripe.
    pub height: f64,
}

impl StripeBand {
    /// Offset of the band's bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// The seven red bands of a thirteen-stripe walk.
///
/// Red takes walk positions 0, 2, ..., 12; white takes the odd positions and is never emitted
/// explicitly, it is whatever the background shows between red bands.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StripeLayout {
    red: [StripeBand; RED_BAND_COUNT],
}

impl StripeLayout {
    /// Thirteen equal stripes.
    pub fn canonical() -> Self {
        let stripe = 1.0 / STRIPE_COUNT as f64;
        Self {
            red: std::array::from_fn(|i| StripeBand {
                top: (i * 2) as f64 / STRIPE_COUNT as f64,
                height: stripe,
            }),
        }
    }

    /// Build the bands from thirteen weights, top stripe first.
    pub fn from_weights(weights: &[f64]) -> FlagResult<Self> {
        if weights.len() != STRIPE_COUNT {
            return Err(FlagError::invalid_configuration(format!(
                "expected {STRIPE_COUNT} stripe weights, got {}",
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(FlagError::invalid_weights(format!(
                "stripe weight must be finite and >= 0, got {w}"
            )));
        }
        let total = checked_total(weights, "stripe")?;

        let mut red = [StripeBand {
            top: 0.0,
            height: 0.0,
        }; RED_BAND_COUNT];
        let mut cumulative = 0.0;
        let mut is_red = true;
        for (i, &w) in weights.iter().enumerate() {
            let band = StripeBand {
                top: cumulative / total,
                height: w / total,
            };
            cumulative += w;
            if is_red {
                red[i / 2] = band;
            }
            is_red = !is_red;
        }
        Ok(Self { red })
    }

    /// Build the bands from a weight table, walking the ordering's stripe regions.
    pub fn from_table(table: &WeightTable, order: &RegionOrder) -> FlagResult<Self> {
        Self::from_weights(&table.ordered(order.stripes())?)
    }

    /// The seven red bands, top first.
    pub fn red_bands(&self) -> &[StripeBand; RED_BAND_COUNT] {
        &self.red
    }

    /// The six implicit white bands: the gaps between consecutive red bands.
    pub fn white_bands(&self) -> [StripeBand; RED_BAND_COUNT - 1] {
        std::array::from_fn(|i| {
            let top = self.red[i].bottom();
            StripeBand {
                top,
                height: self.red[i + 1].top - top,
            }
        })
    }

    /// Offset of the boundary below the first `n` stripes (`n` in `0..=13`).
    ///
    /// Even `n` is the top of red band `n / 2`; odd `n` is the bottom of red band `n / 2`.
    pub fn boundary(&self, n: u8) -> FlagResult<f64> {
        let n = usize::from(n);
        if n > STRIPE_COUNT {
            return Err(FlagError::invalid_configuration(format!(
                "stripe boundary must be in 0..={STRIPE_COUNT}, got {n}"
            )));
        }
        let band = self.red[n / 2];
        Ok(if n % 2 == 0 { band.top } else { band.bottom() })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stripes.rs"]
mod tests;
