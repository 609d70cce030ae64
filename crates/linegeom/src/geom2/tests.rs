use super::*;
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn orthogonal_of_sloped_line_is_exact() {
    let ln = Line::new(2.0, 7.0);
    let orth = ln.find_orthogonal(Point2::new(5.0, 3.0));
    assert_eq!(orth.slope(), Some(-0.5));
    assert_eq!(orth.intercept(), 5.5);
}

#[test]
fn orthogonal_of_vertical_line_is_horizontal() {
    let ln = Line::through(Point2::new(4.0, 8.0), Point2::new(4.0, 9.0));
    let orth = ln.find_orthogonal(Point2::new(4.0, 5.1));
    assert_eq!(orth.slope(), Some(0.0));
    assert_eq!(orth.intercept(), 5.1);
}

#[test]
fn orthogonal_of_horizontal_line_is_vertical() {
    let ln = Line::through(Point2::new(2.0, 8.0), Point2::new(1.0, 8.0));
    assert_eq!(ln, Line::new(0.0, 8.0));
    let orth = ln.find_orthogonal(Point2::new(PI, 8.0));
    assert!(orth.is_vertical());
    assert!(approx_eq(orth.intercept(), PI));
}

#[test]
fn parallel_lines_do_not_intersect() {
    let ln1 = Line::new(2.0, 0.0);
    let ln2 = Line::new(2.0, 1.0);
    assert_eq!(ln1.find_intersection(&ln2), None);
}

#[test]
fn identical_lines_meet_at_intercept_point() {
    let ln1 = Line::new(0.0, 3.0);
    let ln2 = Line::new(0.0, 3.0);
    assert_eq!(ln1.find_intersection(&ln2), Some(Point2::new(0.0, 3.0)));
    assert_eq!(ln1.classify(&ln2), Intersection::Coincident);
}

#[test]
fn vertical_meets_its_orthogonal_at_point() {
    let ln = Line::through(Point2::new(4.0, 8.0), Point2::new(4.0, 9.0));
    let pt = Point2::new(4.0, 5.1);
    let orth = ln.find_orthogonal(pt);
    assert_eq!(ln.find_intersection(&orth), Some(pt));
}

#[test]
fn rounded_slopes_still_count_as_parallel() {
    // Slope 0.3 built from rounded inputs.
    let l1 = Line::through(Point2::new(0.0, 0.0), Point2::new(1.0, 0.1 + 0.2));
    let l2 = Line::new(0.3, 1.0);
    assert_ne!(l1.slope(), Some(0.3));
    assert_eq!(l1.find_intersection(&l2), None);
}

fn finite_coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn sloped_line() -> impl Strategy<Value = Line> {
    // Keep |a| away from 0 so the orthogonal is sloped too.
    (prop_oneof![-10.0..-1e-3f64, 1e-3..10.0f64], finite_coord())
        .prop_map(|(a, b)| Line::new(a, b))
}

fn any_line() -> impl Strategy<Value = Line> {
    prop_oneof![
        sloped_line(),
        finite_coord().prop_map(Line::vertical),
        finite_coord().prop_map(|b| Line::new(0.0, b)),
    ]
}

proptest! {
    #[test]
    fn same_abscissa_gives_vertical(x in finite_coord(), y1 in finite_coord(), dy in 1e-3..50.0f64) {
        let l = Line::through(Point2::new(x, y1), Point2::new(x, y1 + dy));
        prop_assert!(l.is_vertical());
        prop_assert!(approx_eq(l.intercept(), x));
    }

    #[test]
    fn identical_points_give_vertical(x in finite_coord(), y in finite_coord()) {
        let p = Point2::new(x, y);
        prop_assert!(Line::through(p, p).is_vertical());
    }

    #[test]
    fn orthogonal_passes_through_point(l in any_line(), x in finite_coord(), y in finite_coord()) {
        let p = Point2::new(x, y);
        let orth = l.find_orthogonal(p);
        match orth.y_at(x) {
            Some(y_orth) => prop_assert!((y_orth - y).abs() < 1e-6),
            None => prop_assert!(approx_eq(orth.intercept(), x)),
        }
    }

    #[test]
    fn line_meets_its_orthogonal(l in any_line(), x in finite_coord(), y in finite_coord()) {
        let p = Point2::new(x, y);
        let orth = l.find_orthogonal(p);
        let q = l.find_intersection(&orth);
        prop_assert!(q.is_some());
        let q = q.unwrap();
        let foot = l.foot_of_perpendicular(p);
        prop_assert!((q - foot).norm() < 1e-6 * (1.0 + foot.coords.norm()));
    }

    #[test]
    fn round_trip_recovers_point_on_line(l in any_line(), t in finite_coord()) {
        let p = match l.y_at(t) {
            Some(y) => Point2::new(t, y),
            None => Point2::new(l.intercept(), t),
        };
        let q = l.find_intersection(&l.find_orthogonal(p)).unwrap();
        prop_assert!((q - p).norm() < 1e-6 * (1.0 + p.coords.norm()));
    }

    #[test]
    fn parallel_shift_never_intersects(l in sloped_line(), shift in 1e-3..50.0f64) {
        let a = l.slope().unwrap();
        let moved = Line::new(a, l.intercept() + shift);
        prop_assert_eq!(l.find_intersection(&moved), None);
        prop_assert_eq!(l.classify(&moved), Intersection::Parallel);
    }

    #[test]
    fn intersection_is_symmetric(l1 in any_line(), l2 in any_line()) {
        match (l1.classify(&l2), l2.classify(&l1)) {
            (Intersection::Point(p), Intersection::Point(q)) => {
                prop_assert!((p - q).norm() < 1e-6 * (1.0 + p.coords.norm()));
                prop_assert!(l1.contains_eps(p, 1e-6 * (1.0 + p.coords.norm())));
            }
            (a, b) => prop_assert_eq!(a, b),
        }
    }
}
