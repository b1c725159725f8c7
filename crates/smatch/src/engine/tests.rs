use super::*;
use crate::placeholders::{_x, otherwise};
use crate::{ds, lit, none, some, Otherwise};
use pretty_assertions::assert_eq;

#[test]
fn test_engine_returns_bindings_of_accepting_arm() {
    let subject = 4_i32;
    let mut engine = Engine::new(&subject);
    assert_eq!(engine.arm(&1_i32), None);
    assert_eq!(engine.arm(&_x.gt(2)), Some((&subject, ())));
}

#[test]
fn test_engine_exhausted_is_no_match() {
    let engine = Engine::new("text");
    assert_eq!(engine.exhausted(), NoMatch);
}

#[test]
fn test_first_match_wins() {
    let subject = 5_i32;
    let hit = smatch!(subject,
        _x.gt(0) => |_| "first",
        5 => || "second",
        otherwise => || "third",
    );
    assert_eq!(hit, Ok("first"));
}

#[test]
fn test_no_arm_matches() {
    let hit = smatch!(5_i32, 1 => || 1, 2 => || 2);
    assert_eq!(hit, Err(NoMatch));
}

#[test]
fn test_zero_arms() {
    let hit: Result<(), NoMatch> = smatch!(5_i32);
    assert_eq!(hit, Err(NoMatch));
}

#[test]
fn test_later_actions_never_run() {
    let mut log = Vec::new();
    let hit = smatch!(2_u8,
        1 => || log.push("one"),
        2 => || log.push("two"),
        otherwise => || log.push("other"),
    );
    assert_eq!(hit, Ok(()));
    assert_eq!(log, vec!["two"]);
}

#[test]
fn test_callable_actions_go_through_apply() {
    fn double(n: &i32) -> i32 {
        n * 2
    }
    let triple = |n: &i32| n * 3;

    assert_eq!(smatch!(4_i32, _x.lt(0) => triple, _x => double), Ok(8));
    assert_eq!(smatch!(-4_i32, _x.lt(0) => triple, _x => double), Ok(-12));
}

#[test]
fn test_closure_parameters_receive_bindings_in_order() {
    let subject = (3_i32, String::from("three"), 'c');
    let hit = smatch!(subject,
        ds!(lit(3_i32), _x, _x) => |name, letter| format!("{name}:{letter}"),
    );
    assert_eq!(hit, Ok(String::from("three:c")));
}

#[test]
fn test_bindings_borrow_from_subject() {
    let subject = Some(String::from("inside"));
    let found = smatch!(subject,
        some(_x) => |s| std::ptr::from_ref(s),
        none() => || std::ptr::null(),
    );
    if let Some(inner) = &subject {
        assert_eq!(found, Ok(std::ptr::from_ref(inner)));
    }
}

#[test]
fn test_subject_is_not_moved() {
    let subject = vec![1, 2, 3];
    let len = smatch!(subject, Otherwise => || 3);
    assert_eq!(len, Ok(3));
    assert_eq!(subject.len(), 3);
}

#[test]
fn test_patterns_are_evaluated_once_in_order() {
    let mut order = Vec::new();
    let mut pattern = |n: i32| {
        order.push(n);
        n
    };
    let hit = smatch!(20_i32, pattern(10) => || 'a', pattern(20) => || 'b', pattern(30) => || 'c');
    assert_eq!(hit, Ok('b'));
    assert_eq!(order, vec![10, 20, 30]);
}
