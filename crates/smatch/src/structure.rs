//! Structural matching.
//!
//! A type opts into structural matching by implementing [`Structure`], which
//! exposes its fields as a list of references in declaration order. The
//! [`Destructure`] pattern then matches a list of sub-patterns against those
//! fields, left to right:
//!
//! - the subject matches when every sub-pattern matches its field, and the
//!   first failing field stops the check;
//! - extraction concatenates the extractions of all sub-patterns in order;
//! - fewer sub-patterns than fields match a prefix, the remaining fields are
//!   ignored.
//!
//! Supplying more sub-patterns than the subject has fields is a compile error.
//!
//! ```
//! use smatch::placeholders::{_x, _y};
//! use smatch::{ds, smatch};
//!
//! let record = (1_i32, "two", 3.0_f64);
//! let hit = smatch!(record,
//!     ds!(1, _x) => |name| name.len(),
//!     ds!(_x, _y) => |_, _| 0,
//! );
//! assert_eq!(hit, Ok(3));
//! ```

use crate::bindings::{cons, Append, Bindings};
use crate::exhaustive::{Coverage, Covered, Flag, Totality};
use crate::matcher::Matcher;

/// A type whose fields can be matched positionally.
///
/// `fields` returns a list of shared references, one per field, in
/// declaration order: `(&a, (&b, ()))` for two fields. Implemented for tuples
/// of up to 12 elements; `#[derive(Structure)]` implements it for structs.
///
/// # Example
///
/// ```
/// use smatch::Structure;
///
/// struct Pair {
///     left: i32,
///     right: String,
/// }
///
/// impl Structure for Pair {
///     type Fields<'s> = (&'s i32, (&'s String, ()))
///     where
///         Self: 's;
///
///     fn fields(&self) -> Self::Fields<'_> {
///         (&self.left, (&self.right, ()))
///     }
/// }
/// ```
pub trait Structure {
    type Fields<'s>
    where
        Self: 's;

    fn fields(&self) -> Self::Fields<'_>;
}

/// A list of sub-patterns applied to a list of field references `F`.
#[diagnostic::on_unimplemented(
    message = "patterns `{Self}` cannot be applied to fields `{F}`",
    label = "check the number and types of the sub-patterns",
    note = "a structural pattern may name at most as many sub-patterns as the subject has fields"
)]
pub trait FieldPatterns<'s, F> {
    type Bindings: Bindings;

    fn check_fields(&self, fields: F) -> bool;

    fn get_fields(&self, fields: F) -> Self::Bindings;
}

/// Terminates every sub-pattern list: matches whatever fields remain.
///
/// Not a pattern on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rest;

impl<F> FieldPatterns<'_, F> for Rest {
    type Bindings = ();

    #[inline]
    fn check_fields(&self, _fields: F) -> bool {
        true
    }

    #[inline]
    fn get_fields(&self, _fields: F) -> Self::Bindings {}
}

impl Totality for Rest {
    type Flag = Covered;
}

impl<'s, A, T, PH, PT> FieldPatterns<'s, (&'s A, T)> for (PH, PT)
where
    A: ?Sized + 's,
    PH: Matcher<'s, A>,
    PT: FieldPatterns<'s, T>,
    PH::Bindings: Append<PT::Bindings>,
    <PH::Bindings as Append<PT::Bindings>>::Output: Bindings,
{
    type Bindings = <PH::Bindings as Append<PT::Bindings>>::Output;

    #[inline]
    fn check_fields(&self, (head, tail): (&'s A, T)) -> bool {
        self.0.check(head) && self.1.check_fields(tail)
    }

    #[inline]
    fn get_fields(&self, (head, tail): (&'s A, T)) -> Self::Bindings {
        self.0.get(head).append(self.1.get_fields(tail))
    }
}

impl<PH: Totality, PT: Totality> Totality for (PH, PT) {
    type Flag = <PH::Flag as Flag>::And<PT::Flag>;
}

/// Structural pattern over a [`Structure`] subject.
///
/// Built with [`ds`] or [`ds!`](crate::ds!). Also usable wherever a
/// sub-pattern list is expected, such as the payload of a multi-field enum
/// variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Destructure<L>(L);

impl<L> Destructure<L> {
    /// Wrap an already built sub-pattern list ending in [`Rest`].
    #[inline]
    pub const fn new(patterns: L) -> Self {
        Destructure(patterns)
    }

    #[inline]
    pub fn into_inner(self) -> L {
        self.0
    }
}

impl<'s, S, L> Matcher<'s, S> for Destructure<L>
where
    S: Structure + ?Sized + 's,
    L: FieldPatterns<'s, S::Fields<'s>>,
{
    type Bindings = L::Bindings;

    #[inline]
    fn check(&self, subject: &'s S) -> bool {
        self.0.check_fields(subject.fields())
    }

    #[inline]
    fn get(&self, subject: &'s S) -> Self::Bindings {
        self.0.get_fields(subject.fields())
    }
}

impl<'s, F, L: FieldPatterns<'s, F>> FieldPatterns<'s, F> for Destructure<L> {
    type Bindings = L::Bindings;

    #[inline]
    fn check_fields(&self, fields: F) -> bool {
        self.0.check_fields(fields)
    }

    #[inline]
    fn get_fields(&self, fields: F) -> Self::Bindings {
        self.0.get_fields(fields)
    }
}

impl<L: Totality> Totality for Destructure<L> {
    type Flag = L::Flag;
}

impl<L: Totality> Coverage for Destructure<L> {
    type Cover = L::Flag;
}

/// Flat tuple of sub-patterns convertible into a list ending in [`Rest`].
pub trait IntoFieldPatterns {
    type Patterns;

    fn into_field_patterns(self) -> Self::Patterns;
}

/// Structural pattern from a flat tuple of sub-patterns.
///
/// `ds((p1, p2))` matches any [`Structure`] whose first field matches `p1`
/// and second matches `p2`. The [`ds!`](crate::ds!) macro spells the same
/// thing without the inner parentheses.
#[inline]
pub fn ds<T: IntoFieldPatterns>(patterns: T) -> Destructure<T::Patterns> {
    Destructure(patterns.into_field_patterns())
}

/// Structural pattern: `ds!(p1, p2, …)` is `ds((p1, p2, …))`.
#[macro_export]
macro_rules! ds {
    ($($pattern:expr),* $(,)?) => {
        $crate::ds(($($pattern,)*))
    };
}

// List spellings: `rest_list!(A B)` is `(A, (B, Rest))`, `ref_list!('s; A B)`
// is `(&'s A, (&'s B, ()))`.
macro_rules! rest_list {
    () => { Rest };
    ($head:ident $($tail:ident)*) => { ($head, rest_list!($($tail)*)) };
}

macro_rules! ref_list {
    ($s:lifetime;) => { () };
    ($s:lifetime; $head:ident $($tail:ident)*) => { (&$s $head, ref_list!($s; $($tail)*)) };
}

macro_rules! impl_tuple_structure {
    ($($ty:ident $var:ident),*) => {
        impl<$($ty),*> IntoFieldPatterns for ($($ty,)*) {
            type Patterns = rest_list!($($ty)*);

            #[inline]
            fn into_field_patterns(self) -> Self::Patterns {
                let ($($var,)*) = self;
                rest_list!($($var)*)
            }
        }

        impl_tuple_structure!(@structure $($ty $var),*);
    };
    (@structure) => {};
    (@structure $($ty:ident $var:ident),+) => {
        impl<$($ty),+> Structure for ($($ty,)+) {
            type Fields<'s> = ref_list!('s; $($ty)+) where Self: 's;

            #[inline]
            fn fields(&self) -> Self::Fields<'_> {
                let ($($var,)+) = self;
                cons!($($var)+)
            }
        }
    };
}

impl_tuple_structure!();
impl_tuple_structure!(A a);
impl_tuple_structure!(A a, B b);
impl_tuple_structure!(A a, B b, C c);
impl_tuple_structure!(A a, B b, C c, D d);
impl_tuple_structure!(A a, B b, C c, D d, E e);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_tuple_structure!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

#[cfg(test)]
mod tests;
