//! Derive macros for smatch.
//!
//! - `#[derive(Structure)]` exposes a struct's fields, in declaration order,
//!   to structural `ds!` patterns.
//! - `#[derive(Variants)]` generates one pattern type per enum variant and
//!   opts the enum into compile-time exhaustiveness checking.
//!
//! Generated code refers to the runtime crate as `::smatch`; use these derives
//! through the re-exports in `smatch`.

mod structure;
mod utils;
mod variants;

use proc_macro::TokenStream;

/// Derive `smatch::Structure` for a struct.
///
/// Works for structs with named fields, tuple structs and unit structs,
/// including generic ones. Fields are exposed in declaration order.
///
/// # Usage
///
/// ```ignore
/// #[derive(Structure)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// smatch!(point, ds!(0, _x) => |y| *y);
/// ```
#[proc_macro_derive(Structure)]
pub fn derive_structure(input: TokenStream) -> TokenStream {
    structure::derive_structure(input)
}

/// Derive closed-variant patterns for an enum.
///
/// Generates a module, named after the enum in `snake_case`, with one
/// pattern type per variant:
///
/// - unit variant `V`: the pattern `module::V`;
/// - single-field variant `V(T)`: `module::V(p)` where `p` matches a `T`;
/// - multi-field variant: `module::V(ds!(p1, p2, ...))`, or any other
///   sub-pattern list, matched against the fields in declaration order.
///
/// The enum becomes `smatch::Exhaustive`, so a match over it must cover
/// every variant. Up to 16 variants are supported.
///
/// # Attributes
///
/// - `#[smatch(module = name)]` overrides the module name.
///
/// # Usage
///
/// ```ignore
/// #[derive(Variants)]
/// enum Shape {
///     Circle(f64),
///     Rect { w: f64, h: f64 },
///     Empty,
/// }
///
/// smatch!(shape,
///     shape::Circle(_x) => |r| 3.14 * r * r,
///     shape::Rect(ds!(_x, _y)) => |w, h| w * h,
///     shape::Empty => || 0.0,
/// );
/// ```
#[proc_macro_derive(Variants, attributes(smatch))]
pub fn derive_variants(input: TokenStream) -> TokenStream {
    variants::derive_variants(input)
}
