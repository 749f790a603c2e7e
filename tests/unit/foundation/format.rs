use super::*;

#[test]
fn integers_have_no_fraction() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(40.0), "40");
    assert_eq!(num(0.0), "0");
}

#[test]
fn negative_zero_and_trig_noise_collapse() {
    assert_eq!(num(-0.0), "0");
    let x = (std::f64::consts::TAU * 0.75).cos();
    assert_eq!(num(x), "0");
}

#[test]
fn rounding_hides_binary_noise() {
    assert_eq!(num(0.1 + 0.2), "0.3");
    assert_eq!(num(700.0 / 13.0), "53.8461538462");
    assert_eq!(num(1.0 / 13.0), "0.0769230769");
}

#[test]
fn no_exponent_for_small_values() {
    assert_eq!(num(1.5e-7), "0.00000015");
}

#[test]
fn pct_and_pair_and_list() {
    assert_eq!(pct(0.4), "40%");
    assert_eq!(pair(0.5, -0.25), "0.5 -0.25");
    assert_eq!(
        list(["1".to_string(), "1".to_string(), "2".to_string()]),
        "1;1;2"
    );
}
