use crate::animation::schedule::Durations;
use crate::foundation::error::{FlagError, FlagResult};
use crate::layout::canton::CantonSelector;
use crate::layout::stars::StarScales;
use crate::layout::stripes::StripeLayout;
use crate::regions::table::{RegionOrder, WeightTable};

/// Fill colors of the three flag elements.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub red: String,
    pub white: String,
    pub blue: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            red: "#B22234".to_string(),
            white: "#FFFFFF".to_string(),
            blue: "#3C3B6E".to_string(),
        }
    }
}

/// A second proportional layout used as the "default" end of the animation cycle.
///
/// Three shapes exist and they fill gaps differently:
///
/// - [`AlternateDefault::full`]: stripes, stars and a canton selector.
/// - [`AlternateDefault::pair`]: stripes and stars; the canton stays whatever the proportional
///   flag uses.
/// - [`AlternateDefault::stars_only`]: stars only; stripes fall back to the 13 equal stripes and
///   the canton stays whatever the proportional flag uses.
///
/// A full alternate whose canton selector is the standard one animates to the standard canton,
/// which differs from leaving the canton out.
#[derive(Clone, Debug, PartialEq)]
pub struct AlternateDefault {
    stripes: Option<StripeLayout>,
    stars: StarScales,
    canton: Option<CantonSelector>,
}

impl AlternateDefault {
    pub fn full(stripes: StripeLayout, stars: StarScales, canton: CantonSelector) -> Self {
        Self {
            stripes: Some(stripes),
            stars,
            canton: Some(canton),
        }
    }

    pub fn pair(stripes: StripeLayout, stars: StarScales) -> Self {
        Self {
            stripes: Some(stripes),
            stars,
            canton: None,
        }
    }

    pub fn stars_only(stars: StarScales) -> Self {
        Self {
            stripes: None,
            stars,
            canton: None,
        }
    }

    /// Stripes and stars from `table`; the full shape when `canton` is given, else the pair.
    pub fn from_table(
        table: &WeightTable,
        order: &RegionOrder,
        canton: Option<CantonSelector>,
    ) -> FlagResult<Self> {
        order.check_coverage(table)?;
        let stripes = StripeLayout::from_table(table, order)?;
        let stars = StarScales::from_table(table, order)?;
        Ok(match canton {
            Some(c) => Self::full(stripes, stars, c),
            None => Self::pair(stripes, stars),
        })
    }

    pub fn stripes(&self) -> Option<&StripeLayout> {
        self.stripes.as_ref()
    }

    pub fn stars(&self) -> &StarScales {
        &self.stars
    }

    pub fn canton(&self) -> Option<CantonSelector> {
        self.canton
    }
}

/// Everything needed to produce one flag document.
#[derive(Clone, Debug, PartialEq)]
pub struct FlagSpec {
    pub stripes: StripeLayout,
    pub stars: StarScales,
    pub canton: CantonSelector,
    /// Animate between this layout and the default flag when set.
    pub animation: Option<Durations>,
    /// Replace the canonical flag as the animation's default end.
    pub alternate_default: Option<AlternateDefault>,
    pub palette: Palette,
}

impl FlagSpec {
    /// Static flag with the standard canton.
    pub fn new(stripes: StripeLayout, stars: StarScales) -> Self {
        Self {
            stripes,
            stars,
            canton: CantonSelector::Standard,
            animation: None,
            alternate_default: None,
            palette: Palette::default(),
        }
    }

    /// The canonical flag: equal stripes, standard canton, equal stars.
    pub fn canonical() -> Self {
        Self::new(StripeLayout::canonical(), StarScales::uniform())
    }

    /// Stripes and stars scaled by `table`.
    pub fn proportional(table: &WeightTable, order: &RegionOrder) -> FlagResult<Self> {
        order.check_coverage(table)?;
        Ok(Self::new(
            StripeLayout::from_table(table, order)?,
            StarScales::from_table(table, order)?,
        ))
    }

    pub fn with_canton(mut self, canton: CantonSelector) -> Self {
        self.canton = canton;
        self
    }

    pub fn with_animation(mut self, durations: Durations) -> Self {
        self.animation = Some(durations);
        self
    }

    pub fn with_alternate_default(mut self, alternate: AlternateDefault) -> Self {
        self.alternate_default = Some(alternate);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Usage checks that need no geometry.
    pub fn validate(&self) -> FlagResult<()> {
        if self.alternate_default.is_some() && self.animation.is_none() {
            return Err(FlagError::invalid_configuration(
                "alternate default is set but animation is not; it would never be shown",
            ));
        }
        if let Some(d) = &self.animation {
            d.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
