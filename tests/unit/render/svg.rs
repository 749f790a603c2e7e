use super::*;
use crate::layout::canton::CantonSelector;
use crate::regions::datasets::Dataset;
use kurbo::Shape as _;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn star_points_up_with_unit_circumradius() {
    let path = star_path();
    let bbox = path.bounding_box();
    assert!((bbox.min_y() + 1.0).abs() < 1e-12);
    assert!((bbox.max_x() - bbox.min_x() - 2.0 * (0.4 * std::f64::consts::PI).sin()).abs() < 1e-12);
    assert_eq!(path.elements().len(), 6);
    let d = path_data(&path);
    assert!(d.starts_with('M'));
    assert!(d.ends_with('Z'));
    assert!(d.contains(" 0,-1 "));
}

#[test]
fn static_document_structure() {
    let svg = render_svg(&FlagSpec::canonical()).unwrap();
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains(r#"width="1235" height="650" viewBox="0 0 1.9 1""#));
    assert_eq!(count(&svg, "<path id=\"s\""), 1);
    assert_eq!(count(&svg, "<use "), 50);
    // background + 7 red bands + canton
    assert_eq!(count(&svg, "<rect "), 9);
    assert_eq!(count(&svg, "<animate"), 0);
    assert!(svg.contains(r##"<rect width="40%" height="53.8461538462%" fill="#3C3B6E"/>"##));
    assert!(svg.contains(
        r##"<rect width="100%" y="0.1538461538" height="0.0769230769" fill="#B22234"/>"##
    ));
}

#[test]
fn animated_document_structure() {
    let order = RegionOrder::united_states();
    let table = Dataset::Population.table().unwrap();
    let svg = proportional_flag(&table, &order, Some(Durations::STANDARD)).unwrap();

    // 7 bands x (y, height); the standard canton does not animate.
    assert_eq!(count(&svg, "<animate "), 14);
    assert_eq!(count(&svg, "<animateTransform "), 100);
    assert_eq!(count(&svg, r#"additive="sum""#), 50);
    assert_eq!(
        count(&svg, r#"dur="19s" keyTimes="0;0.5263157895;0.6315789474;0.8947368421;1""#),
        114
    );
}

#[test]
fn canton_animates_only_when_sizes_differ() {
    let order = RegionOrder::united_states();
    let table = Dataset::Population.table().unwrap();
    let spec = FlagSpec::proportional(&table, &order)
        .unwrap()
        .with_canton(CantonSelector::StripesTall(8))
        .with_animation(Durations::QUICK);
    let svg = render_svg(&spec).unwrap();
    assert!(svg.contains(r#"<animate attributeName="width" values=""#));
    assert_eq!(count(&svg, "<animate "), 16);
    assert!(svg.contains(r#";40%;40%;"#));
}

#[test]
fn output_is_reproducible() {
    let order = RegionOrder::united_states();
    let table = Dataset::Area.table().unwrap();
    let a = proportional_flag(&table, &order, Some(Durations::STANDARD)).unwrap();
    let b = proportional_flag(&table, &order, Some(Durations::STANDARD)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn palette_flows_into_fills() {
    let spec = FlagSpec::canonical().with_palette(crate::scene::model::Palette {
        red: "#f00".to_string(),
        white: "#fff".to_string(),
        blue: "#00f".to_string(),
    });
    let svg = render_svg(&spec).unwrap();
    assert_eq!(count(&svg, r##"fill="#f00""##), 7);
    assert_eq!(count(&svg, r##"fill="#fff""##), 2);
    assert_eq!(count(&svg, r##"fill="#00f""##), 1);
}

#[test]
fn attribute_values_are_escaped() {
    let spec = FlagSpec::canonical().with_palette(crate::scene::model::Palette {
        red: "a\"b".to_string(),
        ..Default::default()
    });
    let svg = render_svg(&spec).unwrap();
    assert!(svg.contains("a&quot;b"));
    assert!(crate::render::raster::parse_svg(&svg).is_ok());
}
