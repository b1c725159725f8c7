//! Match engine.
//!
//! [`smatch!`](crate::smatch!) is the call surface. It borrows the subject,
//! evaluates every pattern once in the order written, runs the exhaustiveness
//! gate, then tries the arms strictly left to right through an [`Engine`]:
//! the first arm whose pattern accepts the subject wins, its action runs with
//! the extracted values, and no later pattern is checked. When every arm is
//! rejected the result is [`NoMatch`].

use std::any;

use crate::errors::NoMatch;
use crate::matcher::Matcher;

/// Sequential arm evaluation against one borrowed subject.
///
/// Counts arms as they are tried so a successful match is traced with its
/// position in the call.
#[derive(Debug)]
pub struct Engine<'s, S: ?Sized> {
    subject: &'s S,
    next_arm: usize,
}

impl<'s, S: ?Sized> Engine<'s, S> {
    #[inline]
    pub fn new(subject: &'s S) -> Self {
        Engine {
            subject,
            next_arm: 0,
        }
    }

    /// Try the next arm.
    ///
    /// Returns the pattern's extraction when it accepts the subject. `get` is
    /// never called on a rejected subject.
    pub fn arm<P: Matcher<'s, S>>(&mut self, pattern: &P) -> Option<P::Bindings> {
        let arm = self.next_arm;
        self.next_arm += 1;

        if !pattern.check(self.subject) {
            return None;
        }

        tracing::trace!(arm, pattern = any::type_name::<P>(), "arm matched");
        Some(pattern.get(self.subject))
    }

    /// Every arm rejected the subject.
    #[inline]
    pub fn exhausted(self) -> NoMatch {
        NoMatch
    }
}

/// Match a subject against `pattern => action` arms.
///
/// Evaluates to `Result<R, NoMatch>`, where `R` is the common return type of
/// the actions.
///
/// # Arms
///
/// Each arm is a pattern expression, `=>`, and an action:
///
/// - A closure literal with plain parameters (`|a, b| …` or `|| …`) takes the
///   extracted values as its parameters, types inferred.
/// - Any other callable (a function path, an annotated or `move` closure, a
///   variable holding a closure) is called through [`apply`](crate::apply)
///   with the extracted values as positional arguments.
///
/// The number of parameters must equal the number of extracted values.
///
/// # Evaluation
///
/// The subject is borrowed, never moved. All patterns are evaluated once,
/// eagerly, in the order written. Arms are then tried left to right; the
/// first successful check wins and nothing after it is checked or run.
/// Action expressions of arms that are not selected are never evaluated.
///
/// A subject type that declares its variants (see
/// [`Exhaustive`](crate::Exhaustive)) must be fully covered by the patterns,
/// or the match fails to compile.
///
/// # Example
///
/// ```
/// use smatch::placeholders::{_x, otherwise};
/// use smatch::smatch;
///
/// fn classify(n: i32) -> &'static str {
///     smatch!(n,
///         0 => || "zero",
///         _x.lt(0) => |_| "negative",
///         otherwise => || "positive",
///     )
///     .unwrap_or("unreachable")
/// }
///
/// assert_eq!(classify(-3), "negative");
/// assert_eq!(classify(0), "zero");
/// assert_eq!(classify(8), "positive");
/// ```
///
/// A pattern without an action does not compile:
///
/// ```compile_fail
/// use smatch::smatch;
///
/// let _ = smatch!(1, 1 => || "one", 2);
/// ```
#[macro_export]
macro_rules! smatch {
    // Arms are first normalized into `(pattern) {kind ...}` pairs.
    (@parse [$subject:expr] [$($done:tt)*]) => {
        $crate::smatch!(@run [$subject] $($done)*)
    };
    (@parse [$subject:expr] [$($done:tt)*]
        $pattern:expr => |$($arg:pat_param),*| $body:expr $(, $($rest:tt)*)?
    ) => {
        $crate::smatch!(@parse [$subject]
            [$($done)* ($pattern) {closure [$($arg),*] $body}] $($($rest)*)?)
    };
    (@parse [$subject:expr] [$($done:tt)*]
        $pattern:expr => || $body:expr $(, $($rest:tt)*)?
    ) => {
        $crate::smatch!(@parse [$subject] [$($done)* ($pattern) {closure [] $body}] $($($rest)*)?)
    };
    (@parse [$subject:expr] [$($done:tt)*]
        $pattern:expr => $action:expr $(, $($rest:tt)*)?
    ) => {
        $crate::smatch!(@parse [$subject] [$($done)* ($pattern) {apply $action}] $($($rest)*)?)
    };
    (@parse [$subject:expr] [$($done:tt)*] $pattern:expr $(, $($rest:tt)*)?) => {
        ::core::compile_error!(
            "every pattern must be followed by `=> action`; found a pattern with no action"
        )
    };

    (@run [$subject:expr] $(($pattern:expr) $kind:tt)+) => {{
        let subject = &$subject;
        let patterns = $crate::bind![$($pattern),+];
        {
            #[allow(unused_imports)]
            use $crate::exhaustive::{OpenProbe as _, StrictProbe as _};
            (&&$crate::exhaustive::Probe::new(subject, &patterns)).gate().verify();
        }
        let mut engine = $crate::Engine::new(subject);
        let remaining = &patterns;
        $crate::smatch!(@arms [engine remaining head bound] $($kind)+)
    }};

    (@arms [$engine:ident $remaining:ident $head:ident $bound:ident]) => {{
        let () = *$remaining;
        ::core::result::Result::Err($engine.exhausted())
    }};
    (@arms [$engine:ident $remaining:ident $head:ident $bound:ident]
        {closure [$($arg:pat_param),*] $body:expr} $($rest:tt)*
    ) => {{
        let ($head, $remaining) = $remaining;
        if let ::core::option::Option::Some($bound) = $engine.arm($head) {
            let ($($arg,)*) = $crate::Bindings::into_tuple($bound);
            ::core::result::Result::Ok((|| $body)())
        } else {
            $crate::smatch!(@arms [$engine $remaining $head $bound] $($rest)*)
        }
    }};
    (@arms [$engine:ident $remaining:ident $head:ident $bound:ident]
        {apply $action:expr} $($rest:tt)*
    ) => {{
        let ($head, $remaining) = $remaining;
        if let ::core::option::Option::Some($bound) = $engine.arm($head) {
            ::core::result::Result::Ok($crate::apply($action, $bound))
        } else {
            $crate::smatch!(@arms [$engine $remaining $head $bound] $($rest)*)
        }
    }};

    ($subject:expr $(,)?) => {{
        let _ = &$subject;
        ::core::result::Result::Err($crate::NoMatch)
    }};
    ($subject:expr, $($arms:tt)+) => {
        $crate::smatch!(@parse [$subject] [] $($arms)+)
    };
}

#[cfg(test)]
mod tests;
