//! Predicate combinators usable directly as patterns.
//!
//! A [`Predicate`] wraps a unary [`Test`] and matches every subject the test
//! accepts, binding the subject itself. Predicates compose into new
//! predicates without shared state: each combinator owns its operands.
//!
//! ```
//! use smatch::placeholders::_x;
//! use smatch::smatch;
//!
//! let small = _x.gt(0) & _x.lt(10);
//! assert_eq!(smatch!(7_i32, small => |x| *x * 2), Ok(14));
//! ```
//!
//! Relational methods narrow the predicate they are called on rather than
//! replacing it: `p.gt(0)` tests `p(x) && x > 0`, so `_x.gt(0).lt(10)` is the
//! range `0 < x < 10`.

use std::fmt;
use std::ops;

use crate::exhaustive::{Coverage, Covered, Flag, Missing, Totality};
use crate::matcher::Matcher;

/// A pure unary test over subjects of type `S`.
pub trait Test<S: ?Sized> {
    fn test(&self, subject: &S) -> bool;
}

/// A binary comparison between a left and a right operand.
pub trait Relation<L: ?Sized, R: ?Sized> {
    fn holds(&self, lhs: &L, rhs: &R) -> bool;
}

macro_rules! relations {
    ($($(#[$doc:meta])* $name:ident: $bound:ident, $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<L: ?Sized + $bound<R>, R: ?Sized> Relation<L, R> for $name {
                #[inline]
                fn holds(&self, lhs: &L, rhs: &R) -> bool {
                    lhs $op rhs
                }
            }
        )*
    };
}

relations! {
    /// `lhs == rhs`
    Equal: PartialEq, ==;
    /// `lhs != rhs`
    NotEqual: PartialEq, !=;
    /// `lhs < rhs`
    Less: PartialOrd, <;
    /// `lhs <= rhs`
    LessEqual: PartialOrd, <=;
    /// `lhs > rhs`
    Greater: PartialOrd, >;
    /// `lhs >= rhs`
    GreaterEqual: PartialOrd, >=;
}

// Tests

/// Accepts everything. The base of every placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Always;

impl<S: ?Sized> Test<S> for Always {
    #[inline]
    fn test(&self, _subject: &S) -> bool {
        true
    }
}

/// A closure test. Built by [`pred`].
#[derive(Clone, Copy)]
pub struct FnTest<F>(F);

impl<F> fmt::Debug for FnTest<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTest(..)")
    }
}

impl<S: ?Sized, F: Fn(&S) -> bool> Test<S> for FnTest<F> {
    #[inline]
    fn test(&self, subject: &S) -> bool {
        (self.0)(subject)
    }
}

/// `!inner(x)`
#[derive(Clone, Copy, Debug)]
pub struct Negation<T>(T);

impl<S: ?Sized, T: Test<S>> Test<S> for Negation<T> {
    #[inline]
    fn test(&self, subject: &S) -> bool {
        !self.0.test(subject)
    }
}

/// `left(x) && right(x)`, left first.
#[derive(Clone, Copy, Debug)]
pub struct Conjunction<A, B>(A, B);

impl<S: ?Sized, A: Test<S>, B: Test<S>> Test<S> for Conjunction<A, B> {
    #[inline]
    fn test(&self, subject: &S) -> bool {
        self.0.test(subject) && self.1.test(subject)
    }
}

/// `left(x) || right(x)`, left first.
#[derive(Clone, Copy, Debug)]
pub struct Disjunction<A, B>(A, B);

impl<S: ?Sized, A: Test<S>, B: Test<S>> Test<S> for Disjunction<A, B> {
    #[inline]
    fn test(&self, subject: &S) -> bool {
        self.0.test(subject) || self.1.test(subject)
    }
}

/// `inner(x) && relation(x, value)`
#[derive(Clone, Copy, Debug)]
pub struct Compare<T, V, R> {
    inner: T,
    value: V,
    relation: R,
}

impl<S, T, V, R> Test<S> for Compare<T, V, R>
where
    S: ?Sized,
    T: Test<S>,
    R: Relation<S, V>,
{
    #[inline]
    fn test(&self, subject: &S) -> bool {
        self.inner.test(subject) && self.relation.holds(subject, &self.value)
    }
}

/// `inner(x) && relation(value, x)`
#[derive(Clone, Copy, Debug)]
pub struct Flipped<T, V, R> {
    inner: T,
    value: V,
    relation: R,
}

impl<S, T, V, R> Test<S> for Flipped<T, V, R>
where
    S: ?Sized,
    T: Test<S>,
    R: Relation<V, S>,
{
    #[inline]
    fn test(&self, subject: &S) -> bool {
        self.inner.test(subject) && self.relation.holds(&self.value, subject)
    }
}

// Totality of tests

impl Totality for Always {
    type Flag = Covered;
}

impl<F> Totality for FnTest<F> {
    type Flag = Missing;
}

impl<T> Totality for Negation<T> {
    type Flag = Missing;
}

impl<A: Totality, B: Totality> Totality for Conjunction<A, B> {
    type Flag = <A::Flag as Flag>::And<B::Flag>;
}

impl<A: Totality, B: Totality> Totality for Disjunction<A, B> {
    type Flag = <A::Flag as Flag>::Or<B::Flag>;
}

impl<T, V, R> Totality for Compare<T, V, R> {
    type Flag = Missing;
}

impl<T, V, R> Totality for Flipped<T, V, R> {
    type Flag = Missing;
}

// Predicate

/// A test usable as a pattern.
///
/// Compatible with every subject the test accepts; binds the subject itself
/// as the single extracted value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Predicate<T>(T);

/// Predicate from a closure. Annotate the parameter type: `pred(|s: &str| …)`.
#[inline]
pub fn pred<F>(test: F) -> Predicate<FnTest<F>> {
    Predicate(FnTest(test))
}

impl<T> Predicate<T> {
    #[inline]
    pub const fn new(test: T) -> Self {
        Predicate(test)
    }

    /// Evaluate the wrapped test.
    #[inline]
    pub fn test<S: ?Sized>(&self, subject: &S) -> bool
    where
        T: Test<S>,
    {
        self.0.test(subject)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Both predicates must accept; `self` is evaluated first.
    #[inline]
    pub fn and<U>(self, other: Predicate<U>) -> Predicate<Conjunction<T, U>> {
        Predicate(Conjunction(self.0, other.0))
    }

    /// Either predicate must accept; `self` is evaluated first.
    #[inline]
    pub fn or<U>(self, other: Predicate<U>) -> Predicate<Disjunction<T, U>> {
        Predicate(Disjunction(self.0, other.0))
    }

    #[inline]
    pub fn negate(self) -> Predicate<Negation<T>> {
        Predicate(Negation(self.0))
    }
}

/// Left-hand value for comparisons written value-first: `operand(0).lt(_x)`
/// tests `0 < x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Operand<V>(V);

#[inline]
pub fn operand<V>(value: V) -> Operand<V> {
    Operand(value)
}

macro_rules! relational_methods {
    ($($method:ident => $relation:ident, $text:literal;)*) => {
        impl<T> Predicate<T> {
            $(
                #[doc = concat!("Narrow to subjects `x` with `x ", $text, " value`.")]
                #[inline]
                pub fn $method<V>(self, value: V) -> Predicate<Compare<T, V, $relation>> {
                    Predicate(Compare { inner: self.0, value, relation: $relation })
                }
            )*
        }

        impl<V> Operand<V> {
            $(
                #[doc = concat!("Narrow `predicate` to subjects `x` with `value ", $text, " x`.")]
                #[inline]
                pub fn $method<T>(self, predicate: Predicate<T>) -> Predicate<Flipped<T, V, $relation>> {
                    Predicate(Flipped { inner: predicate.0, value: self.0, relation: $relation })
                }
            )*
        }
    };
}

relational_methods! {
    eq => Equal, "==";
    ne => NotEqual, "!=";
    lt => Less, "<";
    le => LessEqual, "<=";
    gt => Greater, ">";
    ge => GreaterEqual, ">=";
}

impl<T> ops::Not for Predicate<T> {
    type Output = Predicate<Negation<T>>;

    #[inline]
    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<T, U> ops::BitAnd<Predicate<U>> for Predicate<T> {
    type Output = Predicate<Conjunction<T, U>>;

    #[inline]
    fn bitand(self, rhs: Predicate<U>) -> Self::Output {
        self.and(rhs)
    }
}

impl<T, U> ops::BitOr<Predicate<U>> for Predicate<T> {
    type Output = Predicate<Disjunction<T, U>>;

    #[inline]
    fn bitor(self, rhs: Predicate<U>) -> Self::Output {
        self.or(rhs)
    }
}

impl<'s, S, T> Matcher<'s, S> for Predicate<T>
where
    S: ?Sized + 's,
    T: Test<S>,
{
    type Bindings = (&'s S, ());

    #[inline]
    fn check(&self, subject: &'s S) -> bool {
        self.0.test(subject)
    }

    #[inline]
    fn get(&self, subject: &'s S) -> Self::Bindings {
        (subject, ())
    }
}

impl<T: Totality> Totality for Predicate<T> {
    type Flag = T::Flag;
}

impl<T: Totality> Coverage for Predicate<T> {
    type Cover = T::Flag;
}
