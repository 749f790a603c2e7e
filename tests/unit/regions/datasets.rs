use super::*;

#[test]
fn united_states_order_is_valid() {
    let order = RegionOrder::united_states();
    let rebuilt = RegionOrder::new(order.stars().to_vec(), order.stripes().to_vec()).unwrap();
    assert_eq!(rebuilt, order);
    assert_eq!(order.stars()[0], "DE");
    assert_eq!(order.stars()[49], "HI");
    assert_eq!(order.stripes()[0], "VA");
}

#[test]
fn every_dataset_covers_every_state() {
    let order = RegionOrder::united_states();
    for ds in Dataset::ALL {
        let table = ds.table().unwrap();
        assert_eq!(table.len(), 50, "{}", ds.name());
        order.check_coverage(&table).unwrap();
    }
}

#[test]
fn spot_check_values() {
    let pop = Dataset::Population.table().unwrap();
    assert_eq!(pop.get("CA"), Some(39_368_078.0));
    assert_eq!(pop.get("WY"), Some(582_328.0));

    let votes = Dataset::ElectoralVotes.table().unwrap();
    let total: f64 = votes.iter().map(|(_, v)| v).sum();
    // 538 minus DC's 3.
    assert_eq!(total, 535.0);

    let area = Dataset::Area.table().unwrap();
    assert_eq!(area.get("AK"), Some(1_723_337.0));
}
