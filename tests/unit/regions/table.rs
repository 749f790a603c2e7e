use super::*;

fn letters(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("R{i:02}")).collect()
}

#[test]
fn negative_and_non_finite_weights_are_rejected() {
    assert!(matches!(
        WeightTable::new([("A", -1.0)]),
        Err(FlagError::InvalidWeights(_))
    ));
    assert!(matches!(
        WeightTable::new([("A", f64::NAN)]),
        Err(FlagError::InvalidWeights(_))
    ));
    assert!(WeightTable::new([("A", 0.0)]).is_ok());
}

#[test]
fn json_tables_parse_integers_and_floats() {
    let t = WeightTable::from_json_str(r#"{ "A": 3, "B": 0.5 }"#).unwrap();
    assert_eq!(t.get("A"), Some(3.0));
    assert_eq!(t.get("B"), Some(0.5));
    assert_eq!(t.len(), 2);

    assert!(matches!(
        WeightTable::from_json_str(r#"{ "A": -3 }"#),
        Err(FlagError::InvalidWeights(_))
    ));
    assert!(matches!(
        WeightTable::from_json_str("[1, 2]"),
        Err(FlagError::Serde(_))
    ));
}

#[test]
fn ordered_reports_missing_region() {
    let t = WeightTable::new([("A", 1.0), ("B", 2.0)]).unwrap();
    assert_eq!(t.ordered(&["B", "A"]).unwrap(), vec![2.0, 1.0]);
    match t.ordered(&["A", "Z"]) {
        Err(FlagError::MissingRegion(r)) => assert_eq!(r, "Z"),
        other => panic!("expected missing region, got {other:?}"),
    }
}

#[test]
fn checked_total_rejects_zero_sum() {
    assert!(matches!(
        checked_total(&[0.0, 0.0], "stripe"),
        Err(FlagError::InvalidWeights(_))
    ));
    assert_eq!(checked_total(&[1.0, 2.0], "stripe").unwrap(), 3.0);
}

#[test]
fn region_order_validates_shape() {
    let stars = letters(50);
    let stripes = stars[..13].to_vec();
    let order = RegionOrder::new(stars.clone(), stripes.clone()).unwrap();
    assert_eq!(order.rank_of("R07"), Some(7));
    assert_eq!(order.rank_of("nope"), None);

    assert!(matches!(
        RegionOrder::new(stars[..49].to_vec(), stripes.clone()),
        Err(FlagError::InvalidConfiguration(_))
    ));

    let mut dup = stars.clone();
    dup[1] = dup[0].clone();
    assert!(matches!(
        RegionOrder::new(dup, stripes.clone()),
        Err(FlagError::InvalidConfiguration(_))
    ));

    let mut foreign = stripes;
    foreign[0] = "XX".to_string();
    assert!(matches!(
        RegionOrder::new(stars, foreign),
        Err(FlagError::InvalidConfiguration(_))
    ));
}

#[test]
fn coverage_check_names_first_gap() {
    let stars = letters(50);
    let order = RegionOrder::new(stars.clone(), stars[..13].to_vec()).unwrap();
    let table = WeightTable::uniform(stars.iter().map(String::as_str), 1.0).unwrap();
    order.check_coverage(&table).unwrap();

    let partial = WeightTable::uniform(stars[1..].iter().map(String::as_str), 1.0).unwrap();
    match order.check_coverage(&partial) {
        Err(FlagError::MissingRegion(r)) => assert_eq!(r, "R00"),
        other => panic!("expected missing region, got {other:?}"),
    }
}
