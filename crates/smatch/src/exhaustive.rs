//! Compile-time exhaustiveness checking.
//!
//! A subject type opts in by implementing [`Exhaustive`], which declares its
//! variant space as a tuple of flags, one slot per variant. Every pattern type
//! that may be tried against such a subject implements [`Coverage`], naming
//! what it covers as a *cover*:
//!
//! - [`Covered`]: every value;
//! - [`Missing`]: no value it could be relied on for;
//! - [`Partial<Set>`]: some variants of a closed type, one cover per slot.
//!
//! Covers nest, so `some(none())` covers the `None` variant inside the `Some`
//! variant. The match macro folds the covers of all patterns in a call with
//! [`Union`], slot by slot through [`Merge`], and requires the result to be
//! [`Complete`]; a gap is a type error, so an incomplete match never builds.
//!
//! Subjects that do not implement `Exhaustive` are not checked at all. The
//! macro selects between the two gates with autoref method resolution on
//! [`Probe`], which picks [`StrictProbe`] when the subject opts in and falls
//! back to [`OpenProbe`] otherwise.
//!
//! # Coverage rules
//!
//! - `otherwise` covers every value.
//! - A predicate covers every value iff its test is total.
//! - A variant pattern covers its own slot with whatever its nested pattern
//!   covers of the payload.
//! - A structural pattern covers every value iff all of its sub-patterns are
//!   total (see [`Totality`]); partial covers inside it count as missing.
//! - Literal and relational patterns cover nothing.

use std::marker::PhantomData;

/// Cover: every value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Covered;

/// Cover: nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Missing;

/// Cover: the variants of a closed type marked in `Set`, one cover per slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Partial<Set>(PhantomData<Set>);

/// Type-level boolean over [`Covered`] and [`Missing`].
pub trait Flag {
    /// Logical and.
    type And<F: Flag>: Flag;
    /// Logical or.
    type Or<F: Flag>: Flag;
}

impl Flag for Covered {
    type And<F: Flag> = F;
    type Or<F: Flag> = Covered;
}

impl Flag for Missing {
    type And<F: Flag> = Missing;
    type Or<F: Flag> = F;
}

/// Union of two covers of the same type.
pub trait Union<Rhs> {
    type Output;
}

impl<R> Union<R> for Covered {
    type Output = Covered;
}

impl<R> Union<R> for Missing {
    type Output = R;
}

impl<S> Union<Covered> for Partial<S> {
    type Output = Covered;
}

impl<S> Union<Missing> for Partial<S> {
    type Output = Partial<S>;
}

impl<S: Merge<T>, T> Union<Partial<T>> for Partial<S> {
    type Output = Partial<S::Output>;
}

/// Holds when a cover leaves nothing out.
#[diagnostic::on_unimplemented(
    message = "not all variants are covered in match",
    label = "a variant of the subject has no pattern covering it",
    note = "add a pattern for the missing variant or finish the match with `otherwise`"
)]
pub trait Complete {}

impl Complete for Covered {}

impl<S: Complete> Complete for Partial<S> {}

/// Slot-by-slot [`Union`] of two cover sets of the same length.
pub trait Merge<Rhs> {
    type Output;
}

/// A subject type with a closed, declared variant space.
///
/// `Empty` is a tuple holding one [`Missing`] per variant, in declaration
/// order. `#[derive(Variants)]` implements this for enums with up to 16
/// variants.
pub trait Exhaustive {
    type Empty;
}

impl<T> Exhaustive for Option<T> {
    type Empty = (Missing, Missing);
}

impl<T, E> Exhaustive for Result<T, E> {
    type Empty = (Missing, Missing);
}

/// What a pattern of this type covers, as [`Covered`], [`Missing`] or
/// [`Partial`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare which values it covers",
    label = "pattern used against a subject with exhaustiveness checking",
    note = "implement `smatch::Coverage` for the pattern type"
)]
pub trait Coverage {
    type Cover;
}

/// Whether a pattern matches every value it can be tried against.
///
/// Decides the cover of predicates and structural patterns, where covers of
/// sub-patterns combine with logical and.
pub trait Totality {
    type Flag: Flag;
}

/// Folded cover of a list of pattern types tried against `S`.
///
/// The fold starts from `S`'s empty variant set, so a list that covers
/// nothing is still checked against the declared variant count.
pub trait CoverageOf<S: Exhaustive + ?Sized> {
    type Cover;
}

impl<S: Exhaustive + ?Sized> CoverageOf<S> for () {
    type Cover = Partial<S::Empty>;
}

impl<S, P, T> CoverageOf<S> for (P, T)
where
    S: Exhaustive + ?Sized,
    P: Coverage,
    T: CoverageOf<S>,
    P::Cover: Union<T::Cover>,
{
    type Cover = <P::Cover as Union<T::Cover>>::Output;
}

// Probe and gates

/// Carrier for autoref gate selection in the match macro.
pub struct Probe<'a, S: ?Sized, L>(PhantomData<(&'a S, &'a L)>);

impl<'a, S: ?Sized, L> Probe<'a, S, L> {
    #[inline]
    pub fn new(_subject: &'a S, _patterns: &'a L) -> Self {
        Probe(PhantomData)
    }
}

/// Gate selection for subjects that opt in.
pub trait StrictProbe<S: ?Sized, L> {
    fn gate(&self) -> Strict<S, L>;
}

impl<S: Exhaustive + ?Sized, L> StrictProbe<S, L> for &Probe<'_, S, L> {
    #[inline]
    fn gate(&self) -> Strict<S, L> {
        Strict(PhantomData)
    }
}

/// Gate selection fallback for every other subject.
pub trait OpenProbe {
    fn gate(&self) -> Open;
}

impl<S: ?Sized, L> OpenProbe for Probe<'_, S, L> {
    #[inline]
    fn gate(&self) -> Open {
        Open
    }
}

/// Gate that requires the pattern list `L` to cover every variant of `S`.
pub struct Strict<S: ?Sized, L>(PhantomData<fn(&S, &L)>);

impl<S: Exhaustive + ?Sized, L> Strict<S, L> {
    #[inline]
    pub fn verify(self)
    where
        L: CoverageOf<S>,
        <L as CoverageOf<S>>::Cover: Complete,
    {
    }
}

/// Gate for subjects without a declared variant space; always passes.
pub struct Open;

impl Open {
    #[inline]
    pub fn verify(self) {}
}

macro_rules! impl_flag_sets {
    ($($lhs:ident $rhs:ident),*) => {
        impl<$($lhs: Union<$rhs>, $rhs),*> Merge<($($rhs,)*)> for ($($lhs,)*) {
            type Output = ($(<$lhs as Union<$rhs>>::Output,)*);
        }

        impl<$($lhs: Complete),*> Complete for ($($lhs,)*) {}
    };
}

impl_flag_sets!();
impl_flag_sets!(A0 B0);
impl_flag_sets!(A0 B0, A1 B1);
impl_flag_sets!(A0 B0, A1 B1, A2 B2);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8);
impl_flag_sets!(A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10
);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10, A11 B11
);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10, A11 B11,
    A12 B12
);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10, A11 B11,
    A12 B12, A13 B13
);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10, A11 B11,
    A12 B12, A13 B13, A14 B14
);
impl_flag_sets!(
    A0 B0, A1 B1, A2 B2, A3 B3, A4 B4, A5 B5, A6 B6, A7 B7, A8 B8, A9 B9, A10 B10, A11 B11,
    A12 B12, A13 B13, A14 B14, A15 B15
);
