//! Tuple, unit and generic structs.

use smatch::placeholders::{_x, otherwise};
use smatch::{ds, smatch, Structure};

#[derive(Structure)]
struct Meters(f64);

#[derive(Structure)]
struct Marker;

#[derive(Structure)]
struct Tagged<'a, T> {
    tag: &'a str,
    value: T,
}

fn main() {
    let length = smatch!(Meters(2.5), ds!(_x) => |m| *m);
    assert_eq!(length, Ok(2.5));

    let marker = smatch!(Marker, ds!() => || "marker");
    assert_eq!(marker, Ok("marker"));

    let tagged = Tagged { tag: "id", value: vec![1_u8, 2] };
    let size = smatch!(tagged,
        ds!("id", _x) => |v| v.len(),
        otherwise => || 0,
    );
    assert_eq!(size, Ok(2));
}
