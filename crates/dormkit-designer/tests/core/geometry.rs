use dormkit_designer::geometry::{contains, overlaps, Point, Rect};
use proptest::prelude::*;

fn any_rect() -> impl Strategy<Value = Rect> {
    (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..300.0, 0.0f64..300.0)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

#[test]
fn test_touching_edges_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 50.0);
    let right = Rect::new(100.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 50.0, 10.0, 10.0);
    let apart = Rect::new(100.5, 0.0, 10.0, 10.0);

    assert!(overlaps(&a, &right));
    assert!(overlaps(&a, &below));
    assert!(!overlaps(&a, &apart));
}

#[test]
fn test_contains_is_inclusive() {
    let r = Rect::new(0.0, 0.0, 120.0, 220.0);
    assert!(contains(&r, Point::new(0.0, 0.0)));
    assert!(contains(&r, Point::new(120.0, 220.0)));
    assert!(!contains(&r, Point::new(120.1, 10.0)));
}

#[test]
fn test_rotated_quarter_keeps_center() {
    let r = Rect::new(10.0, 20.0, 120.0, 220.0);
    let turned = r.rotated_quarter();
    assert_eq!(turned.center(), r.center());
    assert_eq!((turned.width, turned.height), (220.0, 120.0));
    assert_eq!(turned.rotated_quarter(), r);
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in any_rect(), b in any_rect()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn rect_overlaps_itself(a in any_rect()) {
        prop_assert!(overlaps(&a, &a));
    }

    #[test]
    fn corners_are_contained(a in any_rect()) {
        prop_assert!(contains(&a, a.top_left()));
        prop_assert!(contains(&a, Point::new(a.right(), a.bottom())));
        prop_assert!(contains(&a, a.center()));
    }
}
