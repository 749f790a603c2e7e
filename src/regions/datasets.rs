use crate::foundation::error::FlagResult;
use crate::regions::table::{RegionOrder, WeightTable};

/// Built-in weight tables for the fifty states (District of Columbia excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Every state weighted 1; reproduces the canonical flag.
    Uniform,
    /// 2020 population estimate (as of 1 July 2020).
    Population,
    /// 2010 census total area including water, in square kilometres.
    Area,
    /// Electoral votes allocated for the 2012, 2016 and 2020 elections.
    ElectoralVotes,
}

impl Dataset {
    /// All built-in datasets.
    pub const ALL: [Dataset; 4] = [
        Dataset::Uniform,
        Dataset::Population,
        Dataset::Area,
        Dataset::ElectoralVotes,
    ];

    /// Short name used in file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Population => "population",
            Self::Area => "area",
            Self::ElectoralVotes => "electoral-votes",
        }
    }

    /// The dataset as a weight table keyed by postal code.
    pub fn table(self) -> FlagResult<WeightTable> {
        match self {
            Self::Uniform => WeightTable::uniform(ADMISSION_ORDER, 1.0),
            Self::Population => WeightTable::new(POPULATION_2020),
            Self::Area => WeightTable::new(AREA_2010),
            Self::ElectoralVotes => WeightTable::new(ELECTORAL_VOTES_2012),
        }
    }
}

impl RegionOrder {
    /// Stars in order of admission to the Union; stripes in order of founding of the
    /// thirteen colonies.
    pub fn united_states() -> Self {
        Self {
            stars: ADMISSION_ORDER.iter().map(|s| (*s).to_string()).collect(),
            stripes: FOUNDING_ORDER.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Order of admission to the Union, Delaware (7 Dec 1787) to Hawaii (21 Aug 1959).
const ADMISSION_ORDER: [&str; 50] = [
    "DE", "PA", "NJ", "GA", "CT", "MA", "MD", "SC", "NH", "VA",
    "NY", "NC", "RI", "VT", "KY", "TN", "OH", "LA", "IN", "MS",
    "IL", "AL", "ME", "MO", "AR", "MI", "FL", "TX", "IA", "WI",
    "CA", "MN", "OR", "KS", "WV", "NV", "NE", "CO", "ND", "SD",
    "MT", "WA", "ID", "WY", "UT", "OK", "NM", "AZ", "AK", "HI",
];

/// Founding order of the thirteen colonies.
const FOUNDING_ORDER: [&str; 13] = [
    "VA", "NY", "MA", "MD", "RI", "CT", "NH", "DE", "NC", "SC", "NJ", "PA", "GA",
];

// Census Bureau population estimate, 1 July 2020.
const POPULATION_2020: [(&str, f64); 50] = [
    ("AK", 731_158.0),
    ("AL", 4_921_532.0),
    ("AR", 3_030_522.0),
    ("AZ", 7_421_401.0),
    ("CA", 39_368_078.0),
    ("CO", 5_807_719.0),
    ("CT", 3_557_006.0),
    ("DE", 986_809.0),
    ("FL", 21_733_312.0),
    ("GA", 10_710_017.0),
    ("HI", 1_407_006.0),
    ("IA", 3_163_561.0),
    ("ID", 1_826_913.0),
    ("IL", 12_587_530.0),
    ("IN", 6_754_953.0),
    ("KS", 2_913_805.0),
    ("KY", 4_477_251.0),
    ("LA", 4_645_318.0),
    ("MA", 6_893_574.0),
    ("MD", 6_055_802.0),
    ("ME", 1_350_141.0),
    ("MI", 9_966_555.0),
    ("MN", 5_657_342.0),
    ("MO", 6_151_548.0),
    ("MS", 2_966_786.0),
    ("MT", 1_080_577.0),
    ("NC", 10_600_823.0),
    ("ND", 765_309.0),
    ("NE", 1_937_552.0),
    ("NH", 1_366_275.0),
    ("NJ", 8_882_371.0),
    ("NM", 2_106_319.0),
    ("NV", 3_138_259.0),
    ("NY", 19_336_776.0),
    ("OH", 11_693_217.0),
    ("OK", 3_980_783.0),
    ("OR", 4_241_507.0),
    ("PA", 12_783_254.0),
    ("RI", 1_057_125.0),
    ("SC", 5_218_040.0),
    ("SD", 892_717.0),
    ("TN", 6_886_834.0),
    ("TX", 29_360_759.0),
    ("UT", 3_249_879.0),
    ("VA", 8_590_563.0),
    ("VT", 623_347.0),
    ("WA", 7_693_612.0),
    ("WI", 5_832_655.0),
    ("WV", 1_784_787.0),
    ("WY", 582_328.0),
];

// Census Bureau state area as of 1 January 2010, land plus water.
const AREA_2010: [(&str, f64); 50] = [
    ("AK", 1_723_337.0),
    ("AL", 135_767.0),
    ("AR", 137_732.0),
    ("AZ", 295_234.0),
    ("CA", 423_967.0),
    ("CO", 269_601.0),
    ("CT", 14_357.0),
    ("DE", 6_446.0),
    ("FL", 170_312.0),
    ("GA", 153_910.0),
    ("HI", 28_313.0),
    ("IA", 145_746.0),
    ("ID", 216_443.0),
    ("IL", 149_995.0),
    ("IN", 94_326.0),
    ("KS", 213_100.0),
    ("KY", 104_656.0),
    ("LA", 135_659.0),
    ("MA", 27_336.0),
    ("MD", 32_131.0),
    ("ME", 91_633.0),
    ("MI", 250_487.0),
    ("MN", 225_163.0),
    ("MO", 180_540.0),
    ("MS", 125_438.0),
    ("MT", 380_831.0),
    ("NC", 139_391.0),
    ("ND", 183_801.0),
    ("NE", 200_330.0),
    ("NH", 24_214.0),
    ("NJ", 22_591.0),
    ("NM", 314_917.0),
    ("NV", 286_380.0),
    ("NY", 141_297.0),
    ("OH", 116_098.0),
    ("OK", 181_037.0),
    ("OR", 254_799.0),
    ("PA", 119_280.0),
    ("RI", 4_001.0),
    ("SC", 82_933.0),
    ("SD", 199_729.0),
    ("TN", 109_153.0),
    ("TX", 695_662.0),
    ("UT", 219_882.0),
    ("VA", 110_787.0),
    ("VT", 24_906.0),
    ("WA", 184_661.0),
    ("WI", 169_653.0),
    ("WV", 62_756.0),
    ("WY", 253_335.0),
];

// Allocation based on the 2010 census.
const ELECTORAL_VOTES_2012: [(&str, f64); 50] = [
    ("AK", 3.0),
    ("AL", 9.0),
    ("AR", 6.0),
    ("AZ", 11.0),
    ("CA", 55.0),
    ("CO", 9.0),
    ("CT", 7.0),
    ("DE", 3.0),
    ("FL", 29.0),
    ("GA", 16.0),
    ("HI", 4.0),
    ("IA", 6.0),
    ("ID", 4.0),
    ("IL", 20.0),
    ("IN", 11.0),
    ("KS", 6.0),
    ("KY", 8.0),
    ("LA", 8.0),
    ("MA", 11.0),
    ("MD", 10.0),
    ("ME", 4.0),
    ("MI", 16.0),
    ("MN", 10.0),
    ("MO", 10.0),
    ("MS", 6.0),
    ("MT", 3.0),
    ("NC", 15.0),
    ("ND", 3.0),
    ("NE", 5.0),
    ("NH", 4.0),
    ("NJ", 14.0),
    ("NM", 5.0),
    ("NV", 6.0),
    ("NY", 29.0),
    ("OH", 18.0),
    ("OK", 7.0),
    ("OR", 7.0),
    ("PA", 20.0),
    ("RI", 4.0),
    ("SC", 9.0),
    ("SD", 3.0),
    ("TN", 11.0),
    ("TX", 38.0),
    ("UT", 6.0),
    ("VA", 13.0),
    ("VT", 3.0),
    ("WA", 12.0),
    ("WI", 10.0),
    ("WV", 5.0),
    ("WY", 3.0),
];

#[cfg(test)]
#[path = "../../tests/unit/regions/datasets.rs"]
mod tests;
