//! Spreading a bindings list into an action's positional arguments.

use crate::bindings::cons;

/// A bindings list that can be spread into a call to `F`.
///
/// Implemented for every list length the container supports, whenever `F`
/// accepts exactly that many arguments of exactly those types. Values are
/// moved into the call unchanged, so borrowed elements reach the action as
/// the same references the matcher produced.
pub trait Apply<F> {
    type Output;

    fn apply(self, action: F) -> Self::Output;
}

/// Call `action` with the elements of `bindings` as positional arguments.
///
/// # Example
///
/// ```
/// use smatch::{apply, bind};
///
/// let sum = apply(|a: i32, b: i32| a + b, bind![2, 3]);
/// assert_eq!(sum, 5);
/// ```
#[inline]
pub fn apply<F, B: Apply<F>>(action: F, bindings: B) -> B::Output {
    bindings.apply(action)
}

macro_rules! impl_apply {
    ($($ty:ident $var:ident),*) => {
        impl<Func, Ret, $($ty),*> Apply<Func> for cons!($($ty)*)
        where
            Func: FnOnce($($ty),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            fn apply(self, action: Func) -> Self::Output {
                let cons!($($var)*) = self;
                action($($var),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A a);
impl_apply!(A a, B b);
impl_apply!(A a, B b, C c);
impl_apply!(A a, B b, C c, D d);
impl_apply!(A a, B b, C c, D d, E e);
impl_apply!(A a, B b, C c, D d, E e, F f);
impl_apply!(A a, B b, C c, D d, E e, F f, G g);
impl_apply!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_apply!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_apply!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_apply!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_apply!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

#[cfg(test)]
mod tests;
