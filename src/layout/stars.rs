use crate::foundation::core::{Point, STAR_COUNT};
use crate::foundation::error::{FlagError, FlagResult};
use crate::layout::canton::CantonGeometry;
use crate::regions::table::{RegionOrder, WeightTable, checked_total};

/// Canton grid columns (stars sit on columns 0..=10).
pub const GRID_COLUMNS: u32 = 11;

/// Grid cell of a star: `col` in `0..=10`, `row` in `0..=8`, `col + row` even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

/// Grid cell of the star with the given rank.
///
/// Ranks fill rows of 6 (even columns) and 5 (odd columns) alternately, which falls out of
/// `divmod(2 * rank, 11)`.
pub fn star_position(rank: usize) -> FlagResult<GridCoord> {
    if rank >= STAR_COUNT {
        return Err(FlagError::invalid_configuration(format!(
            "star rank must be < {STAR_COUNT}, got {rank}"
        )));
    }
    let doubled = (rank as u32) * 2;
    Ok(GridCoord {
        col: doubled % GRID_COLUMNS,
        row: doubled / GRID_COLUMNS,
    })
}

/// Per-rank star area scale: `50 * weight / total`, so uniform weights give 1.0 everywhere.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StarScales {
    by_rank: Vec<f64>,
}

impl StarScales {
    /// All stars at the base size.
    pub fn uniform() -> Self {
        Self {
            by_rank: vec![1.0; STAR_COUNT],
        }
    }

    /// Scales from fifty weights in rank order.
    pub fn from_weights(weights: &[f64]) -> FlagResult<Self> {
        if weights.len() != STAR_COUNT {
            return Err(FlagError::invalid_configuration(format!(
                "expected {STAR_COUNT} star weights, got {}",
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(FlagError::invalid_weights(format!(
                "star weight must be finite and >= 0, got {w}"
            )));
        }
        let total = checked_total(weights, "star")?;
        let n = STAR_COUNT as f64;
        Ok(Self {
            by_rank: weights.iter().map(|w| n * w / total).collect(),
        })
    }

    /// Scales for the ordering's star regions.
    pub fn from_table(table: &WeightTable, order: &RegionOrder) -> FlagResult<Self> {
        Self::from_weights(&table.ordered(order.stars())?)
    }

    /// Area scale of the star with `rank`.
    pub fn scale(&self, rank: usize) -> f64 {
        self.by_rank.get(rank).copied().unwrap_or(1.0)
    }

    /// Scales in rank order.
    pub fn as_slice(&self) -> &[f64] {
        &self.by_rank
    }
}

/// Star metrics for one canton: column and row pitch plus the base star radius.
///
/// Columns split the canton width into 12 gaps, rows split the height into 10, and the base
/// star diameter is 0.8 of a stripe at seven stripes per canton (`height * 4 / 35`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StarGrid {
    pub column_pitch: f64,
    pub row_pitch: f64,
    pub base_radius: f64,
}

impl StarGrid {
    /// Metrics for stars laid out inside `canton`.
    pub fn for_canton(canton: &CantonGeometry) -> Self {
        Self {
            column_pitch: canton.width_units() / 12.0,
            row_pitch: canton.height / 10.0,
            base_radius: canton.height * 2.0 / 35.0,
        }
    }

    /// Star center in flag units.
    pub fn center(&self, coord: GridCoord) -> Point {
        Point::new(
            self.column_pitch * f64::from(coord.col + 1),
            self.row_pitch * f64::from(coord.row + 1),
        )
    }

    /// Radius for a star with area scale `scale`: area, not diameter, tracks the weight.
    pub fn radius(&self, scale: f64) -> f64 {
        self.base_radius * scale.sqrt()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stars.rs"]
mod tests;
