use crate::animation::schedule::Durations;
use crate::foundation::error::FlagResult;
use crate::layout::canton::CantonSelector;
use crate::regions::datasets::Dataset;
use crate::regions::table::RegionOrder;
use crate::scene::model::{AlternateDefault, FlagSpec};

/// A named document to produce, with the file name it is conventionally written to.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: String,
    pub file_name: String,
    pub spec: FlagSpec,
}

impl Variant {
    fn new(name: &str, file_name: &str, spec: FlagSpec) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            spec,
        }
    }
}

/// The six documents the generator has always produced for the United States.
pub fn standard_variants() -> FlagResult<Vec<Variant>> {
    let order = RegionOrder::united_states();
    let population = FlagSpec::proportional(&Dataset::Population.table()?, &order)?;
    let area = FlagSpec::proportional(&Dataset::Area.table()?, &order)?;
    let votes = AlternateDefault::from_table(&Dataset::ElectoralVotes.table()?, &order, None)?;

    Ok(vec![
        Variant::new(
            "normal",
            "us_flag.svg",
            FlagSpec::proportional(&Dataset::Uniform.table()?, &order)?,
        ),
        Variant::new(
            "population",
            "us_flag_stars_and_stripes_scaled_by_population.svg",
            population.clone(),
        ),
        Variant::new(
            "area",
            "us_flag_stars_and_stripes_scaled_by_area.svg",
            area.clone(),
        ),
        Variant::new(
            "population-animated",
            "us_flag_stars_and_stripes_scaled_by_population_animated.svg",
            population.clone().with_animation(Durations::STANDARD),
        ),
        Variant::new(
            "area-animated",
            "us_flag_stars_and_stripes_scaled_by_area_animated.svg",
            area.with_animation(Durations::STANDARD),
        ),
        Variant::new(
            "population-to-electoral-votes",
            "us_flag_stars_and_stripes_scaled_by_population_and_electoral_votes_animated.svg",
            population
                .with_canton(CantonSelector::StripesTall(8))
                .with_animation(Durations::QUICK)
                .with_alternate_default(votes),
        ),
    ])
}
