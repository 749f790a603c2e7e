use super::*;
use crate::foundation::core::approx_eq;

fn ratio(c: CantonGeometry) -> f64 {
    c.height / c.width
}

#[test]
fn numeric_convention_decodes() {
    assert_eq!(CantonSelector::from_value(0.4).unwrap(), CantonSelector::Standard);
    assert_eq!(CantonSelector::from_value(0.5).unwrap(), CantonSelector::Width(0.5));
    assert_eq!(
        CantonSelector::from_value(-8.0).unwrap(),
        CantonSelector::StripesTall(8)
    );
    for bad in [0.0, -0.5, -14.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                CantonSelector::from_value(bad),
                Err(FlagError::InvalidConfiguration(_))
            ),
            "{bad}"
        );
    }
}

#[test]
fn from_str_accepts_keyword_and_numbers() {
    assert_eq!(
        "standard".parse::<CantonSelector>().unwrap(),
        CantonSelector::Standard
    );
    assert_eq!(
        "-7".parse::<CantonSelector>().unwrap(),
        CantonSelector::StripesTall(7)
    );
    assert!("wide".parse::<CantonSelector>().is_err());
}

#[test]
fn standard_canton_is_forty_percent_by_seven_stripes() {
    let c = CantonSelector::Standard
        .resolve(&StripeLayout::canonical())
        .unwrap();
    assert_eq!(c.width, 0.4);
    assert!(approx_eq(c.height, 7.0 / 13.0));
    assert!(approx_eq(c.width_pct(), 40.0));
    // The statutory canton is 175:247 in absolute units.
    assert!(approx_eq(c.height / c.width_units(), 175.0 / 247.0));

    let explicit = CantonSelector::Width(0.4)
        .resolve(&StripeLayout::canonical())
        .unwrap();
    assert_eq!(explicit, c);
}

#[test]
fn explicit_width_keeps_aspect() {
    let c = CantonSelector::Width(0.3)
        .resolve(&StripeLayout::canonical())
        .unwrap();
    assert_eq!(c.width, 0.3);
    assert!(approx_eq(ratio(c), 247.0 / 175.0));
    assert!(approx_eq(c.height_pct(), 0.3 * 988.0 / 7.0));
    assert!(matches!(
        CantonSelector::Width(-0.3).resolve(&StripeLayout::canonical()),
        Err(FlagError::InvalidConfiguration(_))
    ));
}

#[test]
fn stripes_tall_tracks_layout_boundaries() {
    let weights: Vec<f64> = (1..=13).map(f64::from).collect();
    let stripes = StripeLayout::from_weights(&weights).unwrap();
    for n in 1..=13u8 {
        let c = CantonSelector::StripesTall(n).resolve(&stripes).unwrap();
        assert!(approx_eq(c.height, stripes.boundary(n).unwrap()), "n={n}");
        assert!(approx_eq(ratio(c), 247.0 / 175.0), "n={n}");
    }

    let seven = CantonSelector::StripesTall(7)
        .resolve(&StripeLayout::canonical())
        .unwrap();
    assert!(approx_eq(seven.height, 7.0 / 13.0));

    let zero = CantonSelector::StripesTall(0).resolve(&stripes).unwrap();
    assert_eq!(zero.height, 0.0);
    assert_eq!(zero.width, 0.0);
}

#[test]
fn selector_round_trips_through_serde_number() {
    let json = serde_json::to_string(&CantonSelector::StripesTall(8)).unwrap();
    assert_eq!(json, "-8.0");
    let back: CantonSelector = serde_json::from_str("-8").unwrap();
    assert_eq!(back, CantonSelector::StripesTall(8));
    assert!(serde_json::from_str::<CantonSelector>("-2.5").is_err());
}
