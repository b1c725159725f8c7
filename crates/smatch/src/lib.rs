//! Smatch - first-match pattern matching over ordinary values.
//!
//! [`smatch!`] takes a subject and an ordered list of `pattern => action`
//! arms, picks the first pattern that accepts the subject, destructures the
//! subject according to that pattern and calls the action with the parts.
//!
//! ```
//! use smatch::placeholders::{_x, otherwise};
//! use smatch::{ds, smatch};
//!
//! let point = (3_i32, -1_i32);
//! let quadrant = smatch!(point,
//!     ds!(0, 0) => || "origin",
//!     ds!(_x.gt(0), _x.gt(0)) => |_, _| "first",
//!     ds!(_x.gt(0), _x.lt(0)) => |_, _| "fourth",
//!     otherwise => || "elsewhere",
//! );
//! assert_eq!(quadrant, Ok("fourth"));
//! ```
//!
//! # Architecture
//!
//! - [`Matcher`] is the registry: a (subject type, pattern type) pair is
//!   usable exactly when the pattern type implements `Matcher` for that
//!   subject. New pattern kinds are added by implementing it, never by
//!   editing the engine.
//! - A successful match extracts a [`Bindings`] list, which [`apply`]
//!   spreads into the action's arguments.
//! - [`exhaustive`] rejects, at compile time, matches over subjects with a
//!   declared variant space that leave a variant uncovered.
//! - [`Engine`] tries the arms in order; the only runtime failure is
//!   [`NoMatch`].
//!
//! # Pattern kinds
//!
//! - values: `5`, `"text"`, [`lit`]`(v)` for any `PartialEq` pair
//! - [`placeholders`]: `otherwise` and the predicate starters `_u` to `_z`
//! - [`predicate`] expressions: `_x.gt(0) & _x.lt(10)`, [`pred`]`(closure)`
//! - structural: [`ds!`]`(p1, p2)` over tuples and `#[derive(Structure)]`
//!   structs
//! - variants: [`some`], [`none`], [`ok`], [`err`], and the per-variant
//!   patterns generated by `#[derive(Variants)]`
//!
//! # Compile-time errors
//!
//! A pattern that cannot be tried against the subject reports
//! `no matcher registered for subject ... and pattern ...`:
//!
//! ```compile_fail,E0277
//! use smatch::smatch;
//!
//! let _ = smatch!(5_i32, "five" => || 5);
//! ```
//!
//! An action taking the wrong number of values:
//!
//! ```compile_fail
//! use smatch::placeholders::_x;
//! use smatch::smatch;
//!
//! fn both(a: &i32, b: &i32) -> i32 {
//!     a + b
//! }
//!
//! let _ = smatch!(5_i32, _x => both);
//! ```
//!
//! ```compile_fail,E0308
//! use smatch::placeholders::_x;
//! use smatch::smatch;
//!
//! let _ = smatch!(5_i32, _x => |a, b| 0);
//! ```
//!
//! More sub-patterns than the subject has fields:
//!
//! ```compile_fail
//! use smatch::{ds, smatch};
//!
//! let _ = smatch!((1_i32, 2_i32), ds!(1, 2, 3) => || ());
//! ```
//!
//! A match that leaves a declared variant uncovered reports
//! `not all variants are covered in match`:
//!
//! ```compile_fail,E0277
//! use smatch::placeholders::_x;
//! use smatch::{some, smatch};
//!
//! let _ = smatch!(Some(1_i32), some(_x) => |x| *x);
//! ```
//!
//! Nested variants are tracked separately, so `Some(None)` is still missing
//! here:
//!
//! ```compile_fail,E0277
//! use smatch::placeholders::_x;
//! use smatch::{none, some, smatch};
//!
//! let nested: Option<Option<i32>> = Some(None);
//! let _ = smatch!(nested, some(some(_x)) => |x| *x, none() => || 0);
//! ```
//!
//! ```compile_fail,E0277
//! use smatch::{smatch, Variants};
//!
//! #[derive(Variants)]
//! enum Light {
//!     Red,
//!     Amber,
//!     Green,
//! }
//!
//! let _ = smatch!(Light::Amber, light::Red => || 0, light::Green => || 2);
//! ```

mod apply;
mod bindings;
mod engine;
mod errors;
pub mod exhaustive;
mod matcher;
mod optional;
pub mod placeholders;
pub mod predicate;
mod structure;

pub use apply::{apply, Apply};
pub use bindings::{Append, Bindings};
pub use engine::Engine;
pub use errors::{MatchResult, NoMatch};
pub use exhaustive::{Coverage, Exhaustive, Totality};
pub use matcher::{lit, match_check, match_get, Literal, Matcher, Otherwise};
pub use optional::{err, none, ok, some, ErrOf, NoneOf, OkOf, SomeOf};
pub use predicate::{operand, pred, Operand, Predicate, Test};
pub use structure::{ds, Destructure, FieldPatterns, IntoFieldPatterns, Rest, Structure};

pub use smatch_macros::{Structure, Variants};
