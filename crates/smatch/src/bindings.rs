//! Destructured-result container.
//!
//! A successful match hands its extracted sub-values to the action as an
//! inductive list of nested pairs: `()` is empty, `(a, ())` holds one value,
//! `(a, (b, ()))` holds two, and so on. Length and element types are fixed by
//! the (subject, pattern) pair at compile time.
//!
//! Inductive lists concatenate with a single recursive impl, which is what the
//! structural matcher needs when it joins the extractions of each field. The
//! [`Bindings`] trait converts a list back to the equivalent flat tuple.

/// Build a bindings list value: `bind![a, b]` is `(a, (b, ()))`.
#[macro_export]
macro_rules! bind {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::bind![$($tail),*])
    };
}

/// Name a bindings list type: `Bind![A, B]` is `(A, (B, ()))`.
#[macro_export]
macro_rules! Bind {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::Bind![$($tail),*])
    };
}

/// A fixed-length list of extracted values.
pub trait Bindings: Sized {
    /// The flat tuple holding the same elements in the same order.
    type Tuple;

    /// Number of extracted values.
    const LEN: usize;

    /// Flatten into a tuple.
    fn into_tuple(self) -> Self::Tuple;
}

/// Concatenation of two bindings lists, left elements first.
pub trait Append<Rhs> {
    type Output;

    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Append<Rhs>, Rhs> Append<Rhs> for (H, T) {
    type Output = (H, T::Output);

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        (self.0, self.1.append(rhs))
    }
}

// Nested-pair spelling shared by type, pattern and expression positions.
macro_rules! cons {
    () => { () };
    ($head:ident $($tail:ident)*) => { ($head, cons!($($tail)*)) };
}

pub(crate) use cons;

macro_rules! impl_bindings {
    ($len:literal; $($ty:ident $var:ident),*) => {
        impl<$($ty),*> Bindings for cons!($($ty)*) {
            type Tuple = ($($ty,)*);

            const LEN: usize = $len;

            #[inline]
            fn into_tuple(self) -> Self::Tuple {
                let cons!($($var)*) = self;
                ($($var,)*)
            }
        }
    };
}

impl_bindings!(0;);
impl_bindings!(1; A a);
impl_bindings!(2; A a, B b);
impl_bindings!(3; A a, B b, C c);
impl_bindings!(4; A a, B b, C c, D d);
impl_bindings!(5; A a, B b, C c, D d, E e);
impl_bindings!(6; A a, B b, C c, D d, E e, F f);
impl_bindings!(7; A a, B b, C c, D d, E e, F f, G g);
impl_bindings!(8; A a, B b, C c, D d, E e, F f, G g, H h);
impl_bindings!(9; A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_bindings!(10; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_bindings!(11; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_bindings!(12; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
