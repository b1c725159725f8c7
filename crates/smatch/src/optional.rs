//! Variant patterns for `Option` and `Result`.
//!
//! Each pattern selects one variant and matches its payload against a nested
//! pattern; the extraction is the nested pattern's extraction. All four take
//! part in exhaustiveness checking.
//!
//! ```
//! use smatch::placeholders::_x;
//! use smatch::{none, some, smatch};
//!
//! let describe = |value: Option<i32>| {
//!     smatch!(value,
//!         some(_x.gt(0)) => |n| format!("positive {n}"),
//!         some(_x) => |n| format!("other {n}"),
//!         none() => || String::from("nothing"),
//!     )
//! };
//! assert_eq!(describe(Some(4)), Ok(String::from("positive 4")));
//! assert_eq!(describe(None), Ok(String::from("nothing")));
//! ```

use crate::exhaustive::{Coverage, Covered, Missing, Partial, Totality};
use crate::matcher::Matcher;

/// `Some(p)`. Built by [`some`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SomeOf<P>(pub P);

/// `None`. Built by [`none`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoneOf;

/// `Ok(p)`. Built by [`ok`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OkOf<P>(pub P);

/// `Err(p)`. Built by [`err`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ErrOf<P>(pub P);

/// Matches `Some(v)` when `pattern` matches `v`.
#[inline]
pub fn some<P>(pattern: P) -> SomeOf<P> {
    SomeOf(pattern)
}

/// Matches `None`.
#[inline]
pub fn none() -> NoneOf {
    NoneOf
}

/// Matches `Ok(v)` when `pattern` matches `v`.
#[inline]
pub fn ok<P>(pattern: P) -> OkOf<P> {
    OkOf(pattern)
}

/// Matches `Err(e)` when `pattern` matches `e`.
#[inline]
pub fn err<P>(pattern: P) -> ErrOf<P> {
    ErrOf(pattern)
}

// `get` is only reached after a successful `check`, so the other variant is
// unreachable there.

impl<'s, T: 's, P: Matcher<'s, T>> Matcher<'s, Option<T>> for SomeOf<P> {
    type Bindings = P::Bindings;

    #[inline]
    fn check(&self, subject: &'s Option<T>) -> bool {
        subject.as_ref().is_some_and(|value| self.0.check(value))
    }

    #[inline]
    fn get(&self, subject: &'s Option<T>) -> Self::Bindings {
        match subject {
            Some(value) => self.0.get(value),
            None => unreachable!("`get` called on a subject `check` rejected"),
        }
    }
}

impl<'s, T: 's> Matcher<'s, Option<T>> for NoneOf {
    type Bindings = ();

    #[inline]
    fn check(&self, subject: &'s Option<T>) -> bool {
        subject.is_none()
    }

    #[inline]
    fn get(&self, _subject: &'s Option<T>) -> Self::Bindings {}
}

impl<'s, T: 's, E: 's, P: Matcher<'s, T>> Matcher<'s, Result<T, E>> for OkOf<P> {
    type Bindings = P::Bindings;

    #[inline]
    fn check(&self, subject: &'s Result<T, E>) -> bool {
        subject.as_ref().is_ok_and(|value| self.0.check(value))
    }

    #[inline]
    fn get(&self, subject: &'s Result<T, E>) -> Self::Bindings {
        match subject {
            Ok(value) => self.0.get(value),
            Err(_) => unreachable!("`get` called on a subject `check` rejected"),
        }
    }
}

impl<'s, T: 's, E: 's, P: Matcher<'s, E>> Matcher<'s, Result<T, E>> for ErrOf<P> {
    type Bindings = P::Bindings;

    #[inline]
    fn check(&self, subject: &'s Result<T, E>) -> bool {
        subject.as_ref().is_err_and(|error| self.0.check(error))
    }

    #[inline]
    fn get(&self, subject: &'s Result<T, E>) -> Self::Bindings {
        match subject {
            Err(error) => self.0.get(error),
            Ok(_) => unreachable!("`get` called on a subject `check` rejected"),
        }
    }
}

// Slots are `(Some, None)` and `(Ok, Err)`.

impl<P: Coverage> Coverage for SomeOf<P> {
    type Cover = Partial<(P::Cover, Missing)>;
}

impl Coverage for NoneOf {
    type Cover = Partial<(Missing, Covered)>;
}

impl<P: Coverage> Coverage for OkOf<P> {
    type Cover = Partial<(P::Cover, Missing)>;
}

impl<P: Coverage> Coverage for ErrOf<P> {
    type Cover = Partial<(Missing, P::Cover)>;
}

impl<P> Totality for SomeOf<P> {
    type Flag = Missing;
}

impl Totality for NoneOf {
    type Flag = Missing;
}

impl<P> Totality for OkOf<P> {
    type Flag = Missing;
}

impl<P> Totality for ErrOf<P> {
    type Flag = Missing;
}
