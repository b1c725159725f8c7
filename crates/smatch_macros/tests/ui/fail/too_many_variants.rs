//! Error: Variants derive supports at most 16 variants.

use smatch::Variants;

#[derive(Variants)]
pub enum Big {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q,
}

fn main() {}
