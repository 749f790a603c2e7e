use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{STAR_COUNT, STRIPE_COUNT};
use crate::foundation::error::{FlagError, FlagResult};

/// Immutable mapping from region code to a non-negative weight.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    /// Build a table, rejecting negative or non-finite weights.
    pub fn new<I, K>(entries: I) -> FlagResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let weights = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<BTreeMap<_, _>>();
        let table = Self { weights };
        table.validate_entries()?;
        Ok(table)
    }

    /// Every region of `regions` with the same weight.
    pub fn uniform<'a, I>(regions: I, weight: f64) -> FlagResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(regions.into_iter().map(|r| (r, weight)))
    }

    /// Parse a flat JSON object of `{ "region": weight }`.
    pub fn from_json_str(s: &str) -> FlagResult<Self> {
        let table: Self = serde_json::from_str(s).map_err(|e| FlagError::serde(e.to_string()))?;
        table.validate_entries()?;
        Ok(table)
    }

    /// Parse a flat JSON object from a reader.
    pub fn from_json_reader<R: std::io::Read>(r: R) -> FlagResult<Self> {
        let table: Self =
            serde_json::from_reader(r).map_err(|e| FlagError::serde(e.to_string()))?;
        table.validate_entries()?;
        Ok(table)
    }

    /// Weight of `region`, if present.
    pub fn get(&self, region: &str) -> Option<f64> {
        self.weights.get(region).copied()
    }

    /// Weight of a region that must be present.
    pub fn require(&self, region: &str) -> FlagResult<f64> {
        self.get(region)
            .ok_or_else(|| FlagError::missing_region(region))
    }

    /// Weights of `regions`, in the given order.
    pub fn ordered<S: AsRef<str>>(&self, regions: &[S]) -> FlagResult<Vec<f64>> {
        regions.iter().map(|r| self.require(r.as_ref())).collect()
    }

    /// Copy of this table with one weight replaced or added.
    pub fn with_weight(&self, region: &str, weight: f64) -> FlagResult<Self> {
        let mut weights = self.weights.clone();
        weights.insert(region.to_string(), weight);
        let table = Self { weights };
        table.validate_entries()?;
        Ok(table)
    }

    /// Number of regions in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Regions and weights in region-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn validate_entries(&self) -> FlagResult<()> {
        for (region, &w) in &self.weights {
            if !w.is_finite() || w < 0.0 {
                return Err(FlagError::invalid_weights(format!(
                    "weight for '{region}' must be finite and >= 0, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Sum of `weights`, rejecting a non-positive total.
pub fn checked_total(weights: &[f64], what: &str) -> FlagResult<f64> {
    let total = weights.iter().sum::<f64>();
    if !(total.is_finite() && total > 0.0) {
        return Err(FlagError::invalid_weights(format!(
            "{what} weights must sum to > 0, got {total}"
        )));
    }
    Ok(total)
}

/// The fixed canonical orderings: star placement order and stripe order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionOrder {
    pub(crate) stars: Vec<String>,
    pub(crate) stripes: Vec<String>,
}

impl RegionOrder {
    /// Validate and build an ordering of 50 star regions and 13 stripe regions.
    pub fn new<S: Into<String>>(
        stars: impl IntoIterator<Item = S>,
        stripes: impl IntoIterator<Item = S>,
    ) -> FlagResult<Self> {
        let stars = stars.into_iter().map(Into::into).collect::<Vec<String>>();
        let stripes = stripes.into_iter().map(Into::into).collect::<Vec<String>>();

        if stars.len() != STAR_COUNT {
            return Err(FlagError::invalid_configuration(format!(
                "star order must list {STAR_COUNT} regions, got {}",
                stars.len()
            )));
        }
        if stripes.len() != STRIPE_COUNT {
            return Err(FlagError::invalid_configuration(format!(
                "stripe order must list {STRIPE_COUNT} regions, got {}",
                stripes.len()
            )));
        }

        let star_set = stars.iter().map(String::as_str).collect::<BTreeSet<_>>();
        if star_set.len() != stars.len() {
            return Err(FlagError::invalid_configuration(
                "star order contains duplicate regions",
            ));
        }
        let stripe_set = stripes.iter().map(String::as_str).collect::<BTreeSet<_>>();
        if stripe_set.len() != stripes.len() {
            return Err(FlagError::invalid_configuration(
                "stripe order contains duplicate regions",
            ));
        }
        if let Some(extra) = stripe_set.difference(&star_set).next() {
            return Err(FlagError::invalid_configuration(format!(
                "stripe region '{extra}' is not a star region"
            )));
        }

        Ok(Self { stars, stripes })
    }

    /// Star placement order; index is the star's rank.
    pub fn stars(&self) -> &[String] {
        &self.stars
    }

    /// Stripe order, top stripe first.
    pub fn stripes(&self) -> &[String] {
        &self.stripes
    }

    pub fn rank_of(&self, region: &str) -> Option<usize> {
        self.stars.iter().position(|r| r == region)
    }

    /// Check that `table` covers every region in this ordering.
    pub fn check_coverage(&self, table: &WeightTable) -> FlagResult<()> {
        for region in self.stars.iter().chain(&self.stripes) {
            table.require(region)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/regions/table.rs"]
mod tests;
