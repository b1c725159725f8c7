//! Error: only `module = name` is accepted inside #[smatch(...)].

use smatch::Variants;

#[derive(Variants)]
#[smatch(rename = other)]
pub enum Light {
    Red,
    Green,
}

fn main() {}
