//! Property-based tests for the match engine and predicate algebra.
//!
//! Verifies over random inputs:
//! 1. Wildcard universality: `otherwise` alone always matches, binding nothing
//! 2. First-match-wins: the selected arm is the first whose predicate holds
//! 3. Idempotent conjunction: `p & p` accepts exactly what `p` accepts
//! 4. Relational accumulation: `_x.gt(lo).lt(hi)` is the open interval

use proptest::prelude::*;
use smatch::placeholders::{_x, otherwise};
use smatch::{ds, smatch, NoMatch};

proptest! {
    #[test]
    fn wildcard_matches_any_integer(n in any::<i64>()) {
        prop_assert_eq!(smatch!(n, otherwise => || ()), Ok(()));
    }

    #[test]
    fn wildcard_matches_any_string(s in ".*") {
        prop_assert_eq!(smatch!(s, otherwise => || 1_u8), Ok(1));
    }

    #[test]
    fn first_holding_arm_is_selected(n in -1000_i32..1000, a in -1000_i32..1000, b in -1000_i32..1000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let hit = smatch!(n,
            _x.lt(lo) => |_| 0,
            _x.le(hi) => |_| 1,
            otherwise => || 2,
        );
        let expected = if n < lo { 0 } else if n <= hi { 1 } else { 2 };
        prop_assert_eq!(hit, Ok(expected));
    }

    #[test]
    fn conjunction_with_self_is_idempotent(n in any::<i32>(), bound in any::<i32>()) {
        let p = _x.gt(bound);
        let twice = p & p;
        prop_assert_eq!(twice.test(&n), p.test(&n));
    }

    #[test]
    fn relational_methods_accumulate(n in any::<i32>(), lo in any::<i32>(), hi in any::<i32>()) {
        prop_assert_eq!(_x.gt(lo).lt(hi).test(&n), lo < n && n < hi);
    }

    #[test]
    fn structural_wildcards_return_the_fields(a in any::<u16>(), b in ".{0,8}") {
        let pair = (a, b.clone());
        let hit = smatch!(pair, ds!(_x, _x) => |x, y| (*x, y.clone()));
        prop_assert_eq!(hit, Ok((a, b)));
    }

    #[test]
    fn no_arm_matches_outside_listed_values(n in 3_u32..) {
        prop_assert_eq!(smatch!(n, 0 => || "zero", 1 => || "one", 2 => || "two"), Err(NoMatch));
    }
}
