#![allow(clippy::float_cmp)]

use super::*;

fn samples() -> Vec<Rect> {
    let mut out = Vec::new();
    for x in [-50.0, 0.0, 12.5] {
        for y in [-7.0, 0.0, 40.0] {
            for w in [-30.0, 0.0, 15.0] {
                for h in [-22.0, 0.0, 9.5] {
                    out.push(Rect::new(x, y, w, h));
                }
            }
        }
    }
    out
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_add_and_sub() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(3.0, -4.0);
    assert_eq!(a + b, Point::new(13.0, 16.0));
    assert_eq!(a - b, Point::new(7.0, 24.0));
}

// =============================================================
// normalized
// =============================================================

#[test]
fn normalized_flips_negative_width() {
    let r = Rect::new(50.0, 10.0, -20.0, 5.0).normalized();
    assert_eq!(r, Rect::new(30.0, 10.0, 20.0, 5.0));
}

#[test]
fn normalized_flips_negative_height() {
    let r = Rect::new(0.0, 40.0, 8.0, -40.0).normalized();
    assert_eq!(r, Rect::new(0.0, 0.0, 8.0, 40.0));
}

#[test]
fn normalized_keeps_canonical_rect() {
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.normalized(), r);
}

#[test]
fn normalized_is_idempotent_with_non_negative_extents() {
    for r in samples() {
        let once = r.normalized();
        assert_eq!(once.normalized(), once, "{r:?}");
        assert!(once.w >= 0.0 && once.h >= 0.0, "{r:?}");
    }
}

// =============================================================
// contains_point
// =============================================================

#[test]
fn contains_point_is_inclusive_on_every_corner() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    for p in r.corners().points() {
        assert!(r.contains_point(p), "{p:?}");
    }
    assert!(r.contains_point(Point::new(10.0, 10.0)));
    assert!(r.contains_point(Point::new(30.0, 30.0)));
}

#[test]
fn contains_point_rejects_one_unit_outside() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(!r.contains_point(Point::new(9.0, 10.0)));
    assert!(!r.contains_point(Point::new(10.0, 31.0)));
    assert!(!r.contains_point(Point::new(31.0, 20.0)));
    assert!(!r.contains_point(Point::new(20.0, 9.0)));
}

#[test]
fn zero_sized_rect_contains_only_its_origin() {
    let r = Rect::at(Point::new(5.0, 5.0));
    assert!(r.contains_point(Point::new(5.0, 5.0)));
    assert!(!r.contains_point(Point::new(5.0, 5.5)));
}

// =============================================================
// from_drag
// =============================================================

#[test]
fn from_drag_down_right() {
    let r = Rect::from_drag(Point::new(10.0, 10.0), Point::new(110.0, 60.0));
    assert_eq!(r, Rect::new(10.0, 10.0, 100.0, 50.0));
}

#[test]
fn from_drag_matches_bounding_box_in_every_direction() {
    let a = Point::new(20.0, 30.0);
    for b in [
        Point::new(50.0, 70.0),
        Point::new(-10.0, 70.0),
        Point::new(50.0, -5.0),
        Point::new(-10.0, -5.0),
    ] {
        let r = Rect::from_drag(a, b);
        let c = r.corners();
        assert_eq!(c.top_left, Point::new(a.x.min(b.x), a.y.min(b.y)));
        assert_eq!(c.bottom_right, Point::new(a.x.max(b.x), a.y.max(b.y)));
        assert_eq!(Rect::from_drag(b, a), r);
    }
}

// =============================================================
// corners / ellipse
// =============================================================

#[test]
fn corners_are_clockwise_from_top_left() {
    let pts = Rect::new(0.0, 0.0, 4.0, 2.0).corners().points();
    assert_eq!(
        pts,
        [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ]
    );
}

#[test]
fn corners_of_raw_rect_use_normalized_form() {
    let c = Rect::new(10.0, 10.0, -10.0, -10.0).corners();
    assert_eq!(c.top_left, Point::new(0.0, 0.0));
    assert_eq!(c.bottom_right, Point::new(10.0, 10.0));
}

#[test]
fn square_around_is_centred() {
    let r = Rect::square_around(Point::new(80.0, 80.0), 10.0);
    assert_eq!(r, Rect::new(70.0, 70.0, 20.0, 20.0));
    assert_eq!(r.center(), Point::new(80.0, 80.0));
}

#[test]
fn inscribed_ellipse_from_raw_rect() {
    let e = Ellipse::inscribed(Rect::new(100.0, 50.0, -40.0, 20.0));
    assert_eq!(e, Ellipse { cx: 80.0, cy: 60.0, rx: 20.0, ry: 10.0 });
}

#[test]
fn rect_serializes_as_four_field_record() {
    let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.0, "y": 2.0, "w": 3.0, "h": 4.0 }));
}
