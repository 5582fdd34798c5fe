//! Algebraic laws of the expression nodes, checked pointwise on small grids.
//!
//! Naming convention: `[subject]_should_[outcome]`.

use gridflow::ops::{add, elementwise_div, elementwise_mul, scale};
use gridflow::{
    constant, max_all, min_all, set, set_checkered, set_masked, sum, sum_all, view,
    Evaluable, EvaluableExt, Extent, Grid, Parity, Region, X, Y,
};

fn sample() -> Grid<f64> {
    Grid::from_fn(Extent::new(6, 5), |x, y| 0.25 * x as f64 - 1.5 * y as f64 + 3.0)
}

fn other() -> Grid<f64> {
    Grid::from_fn(Extent::new(6, 5), |x, y| 1.0 + ((x * 7 + y * 3) % 5) as f64)
}

fn cells(extent: Extent) -> impl Iterator<Item = (i32, i32)> {
    (0..extent.y as i32).flat_map(move |y| (0..extent.x as i32).map(move |x| (x, y)))
}

// ============================================================================
// Arithmetic identities
// ============================================================================

#[test]
fn add_should_commute() {
    let (a, b) = (sample(), other());
    let ab = &a + &b;
    let ba = &b + &a;
    for (x, y) in cells(a.extent()) {
        assert_eq!(ab.eval(x, y), ba.eval(x, y));
    }
}

#[test]
fn sub_of_self_should_be_zero() {
    let a = sample();
    let z = &a - &a;
    for (x, y) in cells(a.extent()) {
        assert_eq!(z.eval(x, y), 0.0);
    }
}

#[test]
fn scale_by_one_should_be_identity() {
    let a = sample();
    let s = scale(&a, 1.0f64);
    for (x, y) in cells(a.extent()) {
        assert_eq!(s.eval(x, y), a[(x, y)]);
    }
}

#[test]
fn scalar_multiplication_should_scale_from_either_side() {
    let a = sample();
    let left = 2.0f64 * &a;
    let right = &a * 2.0f64;
    for (x, y) in cells(a.extent()) {
        assert_eq!(left.eval(x, y), 2.0 * a[(x, y)]);
        assert_eq!(right.eval(x, y), left.eval(x, y));
    }
}

#[test]
fn scalar_division_should_divide_each_element() {
    let a = Grid::from_fn(Extent::new(3, 3), |x, y| 10 * x + y);
    let q = &a / 3;
    assert_eq!(q.eval(2, 1), 7);
    let r = 60.0f64 / (&a).cast::<f64>();
    assert_eq!(r.eval(1, 2), 5.0);
}

#[test]
fn elementwise_product_should_not_be_a_scale() {
    let (a, b) = (sample(), other());
    let p = elementwise_mul(&a, &b);
    let q = elementwise_div(&p, &b);
    for (x, y) in cells(a.extent()) {
        assert_eq!(p.eval(x, y), a[(x, y)] * b[(x, y)]);
        assert!((q.eval(x, y) - a[(x, y)]).abs() < 1e-12);
    }
}

#[test]
fn max_with_self_should_be_identity() {
    let a = sample();
    let m = (&a).elementwise_max(&a);
    for (x, y) in cells(a.extent()) {
        assert_eq!(m.eval(x, y), a[(x, y)]);
    }
}

#[test]
fn max_with_constant_should_clamp_from_below() {
    let a = sample();
    let clamped = (&a).elementwise_max(0.0);
    assert_eq!(gridflow::min(clamped, a.region()), Ok(0.0));
}

#[test]
fn negation_should_distribute_over_sub() {
    let (a, b) = (sample(), other());
    let lhs = -(&a - &b);
    let rhs = &b - &a;
    for (x, y) in cells(a.extent()) {
        assert_eq!(lhs.eval(x, y), rhs.eval(x, y));
    }
}

#[test]
fn nested_expression_should_match_hand_written_formula() {
    let (a, b) = (sample(), other());
    let expr = &a + 2.0f64 * &b - (&a).sin();
    for (x, y) in cells(a.extent()) {
        let (av, bv) = (a[(x, y)], b[(x, y)]);
        assert_eq!(expr.eval(x, y), av + 2.0 * bv - av.sin());
    }
}

// ============================================================================
// Coordinate adapters
// ============================================================================

#[test]
fn shift_then_inverse_shift_should_cancel() {
    let a = sample();
    let round_trip = (&a).shift(2, -1).shift(-2, 1);
    for (x, y) in cells(a.extent()) {
        assert_eq!(round_trip.eval(x, y), a[(x, y)]);
    }
}

#[test]
fn shift_should_read_the_offset_neighbour() {
    let a = Grid::from_fn(Extent::new(4, 4), |x, y| x + 10 * y);
    assert_eq!((&a).shift(1, 2).eval(0, 0), 21);
    assert_eq!((&a).tap::<{ -1 }, 0>().eval(3, 3), 32);
}

#[test]
fn transpose_twice_should_be_identity() {
    let a = Grid::from_fn(Extent::new(5, 5), |x, y| x * 5 + y);
    let t = (&a).transpose();
    assert_eq!(t.eval(1, 3), a[(3, 1)]);
    let tt = t.transpose();
    for (x, y) in cells(a.extent()) {
        assert_eq!(tt.eval(x, y), a[(x, y)]);
    }
}

#[test]
fn coordinate_leaves_should_build_fields() {
    let field = X * 2 + Y;
    assert_eq!(field.eval(3, 4), 10);
    let g = Grid::from_evaluable(Extent::new(3, 2), field);
    assert_eq!(g.as_slice(), &[0, 2, 4, 1, 3, 5]);
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn int_plus_float_should_promote_to_float() {
    let i = Grid::from_fn(Extent::new(2, 2), |x, y| x + y);
    let f = Grid::filled(Extent::new(2, 2), 0.5f64);
    let mixed = &i + &f;
    let v: f64 = mixed.eval(1, 1);
    assert_eq!(v, 2.5);
}

#[test]
fn promotion_should_hold_through_nested_trees() {
    let i = Grid::from_fn(Extent::new(2, 2), |x, _y| x);
    let f = Grid::filled(Extent::new(2, 2), 0.25f32);
    let deep = add(&i - 1, (&f).elementwise_mul(4)).abs() * 3i64;
    let v: f32 = deep.eval(1, 0);
    assert_eq!(v, 3.0);
}

#[test]
fn float_scale_of_int_grid_should_be_float() {
    let i = Grid::from_fn(Extent::new(2, 1), |x, _y| x + 1);
    let s = &i * 0.5f64;
    let v: f64 = s.eval(0, 0);
    assert_eq!(v, 0.5);
}

// ============================================================================
// Masks and selection
// ============================================================================

#[test]
fn diagonal_mask_should_write_only_the_diagonal() {
    let mut g = Grid::filled(Extent::new(3, 3), 0i32);
    set_masked(&mut g, X.cmp_eq(Y), constant(1));
    assert_eq!(g.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
}

#[test]
fn combined_masks_should_intersect() {
    let band = X.cmp_ge(1) & X.cmp_lt(3) & !Y.cmp_eq(0);
    let mut g = Grid::filled(Extent::new(4, 2), 0i32);
    set_masked(&mut g, band, 7);
    assert_eq!(g.as_slice(), &[0, 0, 0, 0, 0, 7, 7, 0]);
}

#[test]
fn select_should_pick_per_cell() {
    let a = sample();
    let relu = (&a).cmp_gt(0.0).select(&a, 0);
    for (x, y) in cells(a.extent()) {
        let expected = if a[(x, y)] > 0.0 { a[(x, y)] } else { 0.0 };
        assert_eq!(relu.eval(x, y), expected);
    }
}

#[test]
fn log_should_be_the_natural_logarithm() {
    let a = Grid::from_fn(Extent::new(3, 1), |x, _y| (x + 1) as f64);
    let via_alias = (&a).log();
    let via_ln = (&a).ln();
    assert_eq!(via_alias.eval(0, 0), 0.0);
    for (x, y) in cells(a.extent()) {
        assert_eq!(via_alias.eval(x, y), via_ln.eval(x, y));
        assert_eq!(gridflow::ops::log(&a).eval(x, y), a[(x, y)].ln());
    }
}

#[test]
fn map_should_apply_closure() {
    let a = Grid::from_fn(Extent::new(3, 1), |x, _y| x);
    let labels = (&a).map(|v| v % 2 == 0);
    assert!(labels.eval(0, 0));
    assert!(!labels.eval(1, 0));
}

// ============================================================================
// Materialization and reduction together
// ============================================================================

#[test]
fn set_should_be_idempotent() {
    let a = sample();
    let expr = &a * 3.0f64 - 1.0f64;
    let mut once: Grid<f64> = Grid::new(a.extent());
    set(&mut once, &expr);
    let mut twice = once.clone();
    set(&mut twice, &expr);
    assert_eq!(once, twice);
}

#[test]
fn sum_should_distribute_over_add() {
    let (a, b) = (sample(), other());
    let full = a.region();
    assert_eq!(sum(&a + &b, full), sum(&a, full) + sum(&b, full));
    assert_eq!(sum_all(&a) + sum_all(&b), sum(&a + &b, full));
}

#[test]
fn max_of_scaled_should_track_sign_of_factor() {
    let a = sample();
    let full = a.region();
    let (lo, hi) = (min_all(&a).unwrap(), max_all(&a).unwrap());
    assert_eq!(gridflow::max(&a * 2.0f64, full), Ok(2.0 * hi));
    assert_eq!(gridflow::max(&a * -0.5f64, full), Ok(-0.5 * lo));
    assert_eq!(gridflow::min(&a * -0.5f64, full), Ok(-0.5 * hi));
}

#[test]
fn checkerboard_colors_should_partition_the_region() {
    let region = Region::new((1, 1), (6, 4)).unwrap();
    let mut g = Grid::filled(Extent::new(7, 5), 0i32);
    for parity in Parity::BOTH {
        let before = g.clone();
        set_checkered(&mut g, region, parity, &before + 1);
    }
    assert_eq!(sum(&g, region), 15);
    assert_eq!(sum_all(&g), 15);
    assert_eq!(max_all(&g), Ok(1));
}

#[test]
fn reductions_should_see_only_the_view() {
    let a = Grid::from_fn(Extent::new(5, 5), |x, y| x + 10 * y);
    let window = view(&a, Region::new((1, 1), (4, 4)).unwrap());
    assert_eq!(min_all(window), Ok(11));
    assert_eq!(max_all(window), Ok(33));
}
