//! Ready-made patterns.
//!
//! `otherwise` is the wildcard. `_u` through `_z` are independent always-true
//! predicates; each binds the subject and starts a predicate expression such
//! as `_x.gt(0) & _x.lt(10)`. The letters carry no meaning beyond readability.

#![allow(
    non_upper_case_globals,
    reason = "placeholders read as pattern variables"
)]

use crate::matcher::Otherwise;
use crate::predicate::{Always, Predicate};

/// Matches every subject, binds nothing.
pub const otherwise: Otherwise = Otherwise;

pub const _u: Predicate<Always> = Predicate::new(Always);
pub const _v: Predicate<Always> = Predicate::new(Always);
pub const _w: Predicate<Always> = Predicate::new(Always);
pub const _x: Predicate<Always> = Predicate::new(Always);
pub const _y: Predicate<Always> = Predicate::new(Always);
pub const _z: Predicate<Always> = Predicate::new(Always);
