//! Matcher registry: (subject type, pattern type) → `{check, get}`.
//!
//! The registry is the trait system. A pattern type becomes usable against a
//! subject type by implementing [`Matcher`] for that pair; the match engine
//! never enumerates pattern kinds, so new kinds are added without touching it.
//! A pair with no implementation is rejected at compile time.
//!
//! # Provided pairs
//!
//! | Pattern | Subject | Compatible when | Binds |
//! |---------|---------|-----------------|-------|
//! | `T` (scalars, `String`, `&str`, `()`) | `T` | equal | nothing |
//! | `&str` | `str`, `String`, `Box<str>`, `Cow<str>` | equal | nothing |
//! | [`Literal<T>`] | any `S: PartialEq<T>` | equal | nothing |
//! | [`Otherwise`] | anything | always | nothing |
//! | [`Predicate`](crate::Predicate) | anything its test accepts | test passes | the subject |
//! | [`Destructure`](crate::Destructure) | any [`Structure`](crate::Structure) | every field matches | each field's bindings, in order |
//! | [`some`](crate::some), [`none`](crate::none), [`ok`](crate::ok), [`err`](crate::err) | `Option` / `Result` | variant and payload match | the payload pattern's bindings |

use std::borrow::Cow;

use crate::bindings::Bindings;
use crate::exhaustive::{Coverage, Covered, Missing, Totality};
use crate::structure::FieldPatterns;

/// Compatibility check and extraction for one (subject, pattern) pair.
///
/// Implemented on the pattern type, parameterized by the subject type. `'s`
/// is the lifetime of the subject borrow; bindings may borrow from it.
///
/// # Contract
///
/// - `check` is pure: no side effects, no panics.
/// - `get` is only called after `check` returned `true` for the same inputs.
#[diagnostic::on_unimplemented(
    message = "no matcher registered for subject `{S}` and pattern `{Self}`",
    label = "this pattern cannot be tried against `{S}`",
    note = "implement `smatch::Matcher<'_, {S}>` for `{Self}` to register the pair"
)]
pub trait Matcher<'s, S: ?Sized> {
    /// The values handed to the action on success.
    type Bindings: Bindings;

    fn check(&self, subject: &'s S) -> bool;

    fn get(&self, subject: &'s S) -> Self::Bindings;
}

/// Whether `pattern` is compatible with `subject`.
#[inline]
pub fn match_check<'s, S, P>(subject: &'s S, pattern: &P) -> bool
where
    S: ?Sized + 's,
    P: Matcher<'s, S>,
{
    pattern.check(subject)
}

/// The values `pattern` extracts from `subject`.
#[inline]
pub fn match_get<'s, S, P>(subject: &'s S, pattern: &P) -> P::Bindings
where
    S: ?Sized + 's,
    P: Matcher<'s, S>,
{
    pattern.get(subject)
}

// Wildcard

/// Pattern that matches every subject of every type and binds nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Otherwise;

impl<'s, S: ?Sized + 's> Matcher<'s, S> for Otherwise {
    type Bindings = ();

    #[inline]
    fn check(&self, _subject: &'s S) -> bool {
        true
    }

    #[inline]
    fn get(&self, _subject: &'s S) -> Self::Bindings {}
}

impl<'s, F> FieldPatterns<'s, F> for Otherwise {
    type Bindings = ();

    #[inline]
    fn check_fields(&self, _fields: F) -> bool {
        true
    }

    #[inline]
    fn get_fields(&self, _fields: F) -> Self::Bindings {}
}

impl Totality for Otherwise {
    type Flag = Covered;
}

impl Coverage for Otherwise {
    type Cover = Covered;
}

// Generic equality

/// Pattern comparing the subject against a value with `PartialEq`.
///
/// Works for any subject `S: PartialEq<T>`, including types nobody has
/// registered with [`impl_equality_matcher!`](crate::impl_equality_matcher).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Literal<T>(pub T);

/// Equality pattern for any `PartialEq` value.
#[inline]
pub fn lit<T>(value: T) -> Literal<T> {
    Literal(value)
}

impl<'s, S, T> Matcher<'s, S> for Literal<T>
where
    S: ?Sized + PartialEq<T> + 's,
{
    type Bindings = ();

    #[inline]
    fn check(&self, subject: &'s S) -> bool {
        *subject == self.0
    }

    #[inline]
    fn get(&self, _subject: &'s S) -> Self::Bindings {}
}

impl<T> Totality for Literal<T> {
    type Flag = Missing;
}

impl<T> Coverage for Literal<T> {
    type Cover = Missing;
}

// Same-type equality

/// Register same-type equality for `PartialEq` types.
///
/// Each listed type becomes a pattern for subjects of the same type: the pair
/// is compatible when the values are equal and binds nothing. The type also
/// declares itself refutable for exhaustiveness checking.
///
/// # Example
///
/// ```
/// use smatch::{impl_equality_matcher, smatch};
///
/// #[derive(PartialEq)]
/// struct Token(u8);
///
/// impl_equality_matcher!(Token);
///
/// let hit = smatch!(Token(3), Token(1) => || "one", Token(3) => || "three");
/// assert_eq!(hit, Ok("three"));
/// ```
#[macro_export]
macro_rules! impl_equality_matcher {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'s> $crate::Matcher<'s, $ty> for $ty {
                type Bindings = ();

                #[inline]
                fn check(&self, subject: &'s $ty) -> bool {
                    *subject == *self
                }

                #[inline]
                fn get(&self, _subject: &'s $ty) -> Self::Bindings {}
            }

            impl $crate::Totality for $ty {
                type Flag = $crate::exhaustive::Missing;
            }

            impl $crate::Coverage for $ty {
                type Cover = $crate::exhaustive::Missing;
            }
        )*
    };
}

impl_equality_matcher!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &str, (),
);

// String-literal equality

macro_rules! impl_str_matcher {
    ($($subject:ty),*) => {
        $(
            impl<'s, 'p> Matcher<'s, $subject> for &'p str {
                type Bindings = ();

                #[inline]
                fn check(&self, subject: &'s $subject) -> bool {
                    AsRef::<str>::as_ref(subject) == *self
                }

                #[inline]
                fn get(&self, _subject: &'s $subject) -> Self::Bindings {}
            }
        )*
    };
}

impl_str_matcher!(str, String, Box<str>);

impl<'s, 'c, 'p> Matcher<'s, Cow<'c, str>> for &'p str {
    type Bindings = ();

    #[inline]
    fn check(&self, subject: &'s Cow<'c, str>) -> bool {
        &**subject == *self
    }

    #[inline]
    fn get(&self, _subject: &'s Cow<'c, str>) -> Self::Bindings {}
}
