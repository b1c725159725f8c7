//! Named-field struct destructured by position.

use smatch::placeholders::_x;
use smatch::{ds, smatch, Structure};

#[derive(Structure)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let point = Point { x: 0, y: 7 };
    let y = smatch!(point,
        ds!(1, _x) => |_| -1,
        ds!(0, _x) => |y| *y,
    );
    assert_eq!(y, Ok(7));
}
