//! Closed-variant patterns with exhaustiveness checking.

use smatch::placeholders::{_x, _y, otherwise};
use smatch::{ds, smatch, Variants};

#[derive(Variants)]
enum Shape {
    Circle(f64),
    Rect { w: f64, h: f64 },
    Empty,
}

fn area(shape: &Shape) -> f64 {
    smatch!(*shape,
        shape::Circle(_x) => |r| 3.0 * r * r,
        shape::Rect(ds!(_x, _y)) => |w, h| w * h,
        shape::Empty => || 0.0,
    )
    .unwrap_or(f64::NAN)
}

fn is_round(shape: &Shape) -> bool {
    smatch!(*shape,
        shape::Circle(otherwise) => || true,
        otherwise => || false,
    )
    .unwrap_or(false)
}

fn main() {
    assert_eq!(area(&Shape::Circle(1.0)), 3.0);
    assert_eq!(area(&Shape::Rect { w: 2.0, h: 4.0 }), 8.0);
    assert_eq!(area(&Shape::Empty), 0.0);
    assert!(is_round(&Shape::Circle(0.5)));
    assert!(!is_round(&Shape::Empty));
}
