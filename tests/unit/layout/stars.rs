use super::*;
use crate::foundation::core::approx_eq;
use crate::layout::canton::CantonGeometry;

#[test]
fn grid_alternates_six_and_five() {
    assert_eq!(star_position(0).unwrap(), GridCoord { col: 0, row: 0 });
    assert_eq!(star_position(5).unwrap(), GridCoord { col: 10, row: 0 });
    assert_eq!(star_position(6).unwrap(), GridCoord { col: 1, row: 1 });
    assert_eq!(star_position(10).unwrap(), GridCoord { col: 9, row: 1 });
    assert_eq!(star_position(11).unwrap(), GridCoord { col: 0, row: 2 });
    assert_eq!(star_position(49).unwrap(), GridCoord { col: 10, row: 8 });

    let mut per_row = [0u32; 9];
    for rank in 0..50 {
        let c = star_position(rank).unwrap();
        assert_eq!((c.col + c.row) % 2, 0, "rank={rank}");
        assert!(c.col <= 10 && c.row <= 8);
        per_row[c.row as usize] += 1;
    }
    assert_eq!(per_row, [6, 5, 6, 5, 6, 5, 6, 5, 6]);

    assert!(matches!(
        star_position(50),
        Err(FlagError::InvalidConfiguration(_))
    ));
}

#[test]
fn uniform_weights_give_unit_scales() {
    let scales = StarScales::from_weights(&[3.0; 50]).unwrap();
    assert!(scales.as_slice().iter().all(|s| approx_eq(*s, 1.0)));
    assert_eq!(StarScales::uniform().as_slice().len(), 50);
}

#[test]
fn scales_sum_to_star_count() {
    let weights: Vec<f64> = (0..50).map(|i| f64::from(i * i)).collect();
    let scales = StarScales::from_weights(&weights).unwrap();
    assert!(approx_eq(scales.as_slice().iter().sum::<f64>(), 50.0));
    assert_eq!(scales.scale(0), 0.0);
}

#[test]
fn doubling_one_weight_grows_it_and_shrinks_the_rest() {
    let grid = StarGrid::for_canton(&CantonGeometry::standard());
    let base: Vec<f64> = (1..=50).map(f64::from).collect();
    let mut doubled = base.clone();
    doubled[17] *= 2.0;

    let before = StarScales::from_weights(&base).unwrap();
    let after = StarScales::from_weights(&doubled).unwrap();
    for rank in 0..50 {
        let r0 = grid.radius(before.scale(rank));
        let r1 = grid.radius(after.scale(rank));
        if rank == 17 {
            assert!(r1 > r0);
        } else {
            assert!(r1 < r0, "rank={rank}");
        }
    }
}

#[test]
fn radius_tracks_square_root_of_share() {
    let grid = StarGrid::for_canton(&CantonGeometry::standard());
    assert!(approx_eq(grid.radius(1.0), grid.base_radius));
    assert!(approx_eq(grid.radius(4.0), 2.0 * grid.base_radius));
    assert!(approx_eq(grid.base_radius, (7.0 / 13.0) * 2.0 / 35.0));
}

#[test]
fn standard_grid_matches_flag_code_spacing() {
    let grid = StarGrid::for_canton(&CantonGeometry::standard());
    // G = H = D / 12 with D = 0.76; E = F = C / 10 with C = 7/13.
    assert!(approx_eq(grid.column_pitch, 0.76 / 12.0));
    assert!(approx_eq(grid.row_pitch, 0.7 / 13.0));

    let first = grid.center(star_position(0).unwrap());
    assert!(approx_eq(first.x, 0.76 / 12.0));
    assert!(approx_eq(first.y, 0.7 / 13.0));

    let last = grid.center(star_position(49).unwrap());
    assert!(approx_eq(last.x, 0.76 * 11.0 / 12.0));
    assert!(approx_eq(last.y, 0.7 * 9.0 / 13.0));
}

#[test]
fn zero_or_bad_weights_are_rejected() {
    assert!(matches!(
        StarScales::from_weights(&[0.0; 50]),
        Err(FlagError::InvalidWeights(_))
    ));
    assert!(matches!(
        StarScales::from_weights(&[1.0; 49]),
        Err(FlagError::InvalidConfiguration(_))
    ));
}

#[test]
fn extreme_skew_is_not_clamped() {
    let mut weights = vec![1e-9; 50];
    weights[0] = 1.0;
    let scales = StarScales::from_weights(&weights).unwrap();
    let canton = CantonGeometry::standard();
    let grid = StarGrid::for_canton(&canton);
    let r = grid.radius(scales.scale(0));
    // Approaches sqrt(50) times the base radius, well past a row pitch; nothing clamps it.
    assert!(r < grid.base_radius * 50f64.sqrt());
    assert!(r > grid.base_radius * 7.0);
    assert!(r > grid.row_pitch);
}
