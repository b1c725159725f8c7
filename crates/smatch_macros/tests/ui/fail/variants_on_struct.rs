//! Error: Variants derive only supports enums.

use smatch::Variants;

#[derive(Variants)]
pub struct NotAnEnum {
    pub value: u8,
}

fn main() {}
